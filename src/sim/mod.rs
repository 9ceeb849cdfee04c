// Simulation module: the pipeline stage functions, from mask diffraction
// to the developed resist profile.

use log::info;
use ndarray::{Array2, Array3};

use crate::config::AIR_REFRACTION;
use crate::convolve::{conv1d, BoundaryKind};
use crate::eikonal;
use crate::error::CoreError;
use crate::mask::Mask;
use crate::optics::{Diffraction, Exposure, ImagingTool, OpticalTransferFunction};
use crate::resist::{Development, PostExposureBake};
use crate::volume::{ResistProfile, ResistVolume};
use crate::wafer::ResistLayer;
use crate::Result;

pub(crate) mod hopkins;

// Test modules
mod _tests_sim;

/// Diffraction spectrum of a mask under the given projection system.
pub fn diffraction(imaging_tool: &ImagingTool, mask: &Mask) -> Result<Diffraction> {
    info!(
        "calculate diffraction pattern, pitch = ({}, {})",
        mask.pitch().x,
        mask.pitch().y
    );

    if mask.is_bad() {
        return Err(CoreError::InvalidGeometry(
            "mask bounding box has zero extent in both axes".into(),
        ));
    }

    let mut result = Diffraction::new(mask, imaging_tool)?;
    for region in mask.regions() {
        let factor = region.etransmit() - mask.boundary().etransmit();
        result.add_region(region, factor)?;
    }
    if !mask.is_opaque() {
        result.add_background(mask.boundary().etransmit());
    }
    Ok(result)
}

/// Intensity just above the wafer, in the environment medium.
pub fn aerial_image(
    diffraction: &Diffraction,
    otf: &OpticalTransferFunction,
    stepxy: f64,
) -> Result<ResistVolume> {
    info!("calculate aerial image");

    let refractive_index = match otf.wafer_stack() {
        Some(stack) => {
            let environment = stack.environment().ok_or_else(|| {
                CoreError::WaferStackInvariant("environment was not specified".into())
            })?;
            environment.refraction(diffraction.wavelength, 1.0).re
        }
        None => AIR_REFRACTION.re,
    };

    let mut result = ResistVolume::surface(diffraction.boundary().rect(), stepxy);
    hopkins::calc_image(&mut result, diffraction, otf, refractive_index)?;
    otf.imaging_tool().apply_flare(result.values_mut());
    Ok(result)
}

/// Intensity inside the resist film, with standing waves.
pub fn image_in_resist(
    diffraction: &Diffraction,
    otf: &OpticalTransferFunction,
    stepxy: f64,
    stepz: f64,
) -> Result<ResistVolume> {
    info!("calculate image in resist");

    let stack = otf.wafer_stack().ok_or_else(|| {
        CoreError::WaferStackInvariant("image in resist needs a wafer stack".into())
    })?;
    let resist = stack.resist_layer().ok_or_else(|| {
        CoreError::WaferStackInvariant("image in resist needs a resist layer".into())
    })?;

    let refractive_index = resist.refraction(diffraction.wavelength, 1.0).re;
    let thickness = resist.thickness();

    let mut result = ResistVolume::new(diffraction.boundary().rect(), thickness, stepxy, stepz);
    hopkins::calc_image(&mut result, diffraction, otf, refractive_index)?;
    otf.imaging_tool().apply_flare(result.values_mut());
    Ok(result)
}

/// Latent chemical image after exposure: PAC = exp(-I * dose * C).
pub fn latent_image(
    image_in_resist: &ResistVolume,
    resist: &ResistLayer,
    exposure: &Exposure,
) -> ResistVolume {
    info!("calculate exposed latent image");

    let dose_c = exposure.dose() * resist.exposure.c;
    let mut result = ResistVolume::like(image_in_resist);
    *result.values_mut() = image_in_resist.values().mapv(|v| (-v * dose_c).exp());
    result
}

/// Diffused latent image after the post-exposure bake: a separable
/// Gaussian convolution, circular in plane and reflected through depth.
pub fn peb_latent_image(
    latent_image: &ResistVolume,
    resist: &ResistLayer,
    peb: &PostExposureBake,
) -> ResistVolume {
    info!("calculate PEB latent image");

    let kernel_x = resist.peb.kernel(peb, latent_image.stepx());
    let kernel_y = resist.peb.kernel(peb, latent_image.stepy());
    let kernel_z = resist.peb.kernel(peb, latent_image.stepz());

    let input = latent_image.values();
    let (rows, cols, slices) = input.dim();
    let mut result = ResistVolume::like(latent_image);

    for s in 0..slices {
        let mut plane = Array2::zeros((rows, cols));

        for r in 0..rows {
            let row: Vec<f64> = (0..cols).map(|c| input[(r, c, s)]).collect();
            let convolved = conv1d(&row, &kernel_x, BoundaryKind::Circular);
            for c in 0..cols {
                plane[(r, c)] = convolved[c];
            }
        }

        for c in 0..cols {
            let col: Vec<f64> = (0..rows).map(|r| plane[(r, c)]).collect();
            let convolved = conv1d(&col, &kernel_y, BoundaryKind::Circular);
            for r in 0..rows {
                result.values_mut()[(r, c, s)] = convolved[r];
            }
        }
    }

    for r in 0..rows {
        for c in 0..cols {
            let tube: Vec<f64> = (0..slices).map(|s| result.values()[(r, c, s)]).collect();
            let convolved = conv1d(&tube, &kernel_z, BoundaryKind::Symmetric);
            for s in 0..slices {
                result.values_mut()[(r, c, s)] = convolved[s];
            }
        }
    }

    result
}

/// Time to develop every voxel from the resist top, by evaluating the rate
/// model and solving |grad(phi)| = 1/rate with the fast-marching method.
pub fn develop_time_contours(
    peb_latent_image: &ResistVolume,
    resist: &ResistLayer,
) -> Result<ResistVolume> {
    info!("calculate develop time contours");

    let values = peb_latent_image.values();
    let (rows, cols, slices) = values.dim();

    let mut rates = Array3::zeros((rows, cols, slices));
    for s in 0..slices {
        let depth = peb_latent_image.z()[s];
        for r in 0..rows {
            for c in 0..cols {
                rates[(r, c, s)] = resist.rate.calculate(values[(r, c, s)], depth);
            }
        }
    }

    let mut result = ResistVolume::like(peb_latent_image);
    // The initial front is the resist top surface, i.e. the last slice.
    result.values_mut().fill(-1.0);
    for r in 0..rows {
        for c in 0..cols {
            result.values_mut()[(r, c, slices - 1)] = 0.0;
        }
    }

    eikonal::solve3d(
        result.values_mut(),
        &rates,
        peb_latent_image.stepy(),
        peb_latent_image.stepx(),
        peb_latent_image.stepz(),
    )?;

    Ok(result)
}

/// Resist cross-section polygons at the development time.
pub fn resist_profile(
    develop_times: &ResistVolume,
    development: &Development,
) -> Result<ResistProfile> {
    info!("extract resist profile at t = {} s", development.time);
    ResistProfile::new(develop_times, development.time)
}
