use num_complex::Complex64;

use crate::wafer::WaferStack;
use crate::Result;

use super::diffraction::within_circle;
use super::exposure::Exposure;
use super::imaging_tool::ImagingTool;

/// Optical transfer function: pupil filter x reduction x defocus x
/// standing waves, evaluated at shifted direction cosines. Zero outside the
/// pupil.
///
/// The wafer stack, when present, contributes the thin-film standing-wave
/// amplitude at the depth `dz` below the resist top; its reflection caches
/// make repeated evaluations on the order grid cheap.
#[derive(Debug)]
pub struct OpticalTransferFunction<'a> {
    imaging_tool: &'a ImagingTool,
    exposure: Option<&'a Exposure>,
    wafer_stack: Option<&'a WaferStack>,
    wavelength: f64,
    numeric_aperture: f64,
}

impl<'a> OpticalTransferFunction<'a> {
    pub fn new(
        imaging_tool: &'a ImagingTool,
        exposure: Option<&'a Exposure>,
        wafer_stack: Option<&'a WaferStack>,
    ) -> Self {
        OpticalTransferFunction {
            imaging_tool,
            exposure,
            wafer_stack,
            wavelength: imaging_tool.wavelength,
            numeric_aperture: imaging_tool.numeric_aperture,
        }
    }

    pub fn imaging_tool(&self) -> &ImagingTool {
        self.imaging_tool
    }

    pub fn exposure(&self) -> Option<&Exposure> {
        self.exposure
    }

    pub fn wafer_stack(&self) -> Option<&WaferStack> {
        self.wafer_stack
    }

    /// Transfer value for the plane wave with direction cosines (cx, cy)
    /// at depth `dz` below the resist top.
    pub fn calc(&self, cx: f64, cy: f64, dz: f64) -> Result<Complex64> {
        if !within_circle(cx, cy, self.numeric_aperture) {
            return Ok(Complex64::new(0.0, 0.0));
        }

        let mut otf = self.imaging_tool.filter(cx, cy);
        otf *= self.imaging_tool.reduction_in_air(cx, cy);
        if let Some(exposure) = self.exposure {
            otf *= exposure.defocus(cx, cy, self.wavelength);
        }
        if let Some(stack) = self.wafer_stack {
            otf *= stack.standing_waves(cx, cy, dz, self.wavelength)?;
        }
        Ok(otf)
    }
}
