/// Example running the full simulation pipeline for a 1D binary line
///
/// A 250 nm dark line on an 800 nm clear pitch is imaged at 248 nm with a
/// coherent source, exposed into a 500 nm resist on silicon, baked,
/// developed and finally contoured into a resist profile.
use anyhow::Result;
use num_complex::Complex64;

use lithosim::mask::line_1d;
use lithosim::optics::{
    coherent, Exposure, ImagingTool, OpticalTransferFunction, PupilFilterModel, SourceShape,
};
use lithosim::resist::{
    mack_rate_model, Development, ExposureResistModel, PebResistModel, PostExposureBake,
};
use lithosim::sim;
use lithosim::wafer::{Refraction, ResistLayer, WaferLayer, WaferStack};

fn main() -> Result<()> {
    env_logger::init();

    println!("=== 1D binary line through the whole pipeline ===\n");

    // Mask: 250 nm line on an 800 nm pitch.
    let mask = line_1d(&[250.0, 800.0])?;
    println!("1. Mask: pitch = {} nm, 1D = {}", mask.pitch().x, mask.is_1d());

    // Imaging tool: coherent 248 nm illumination at NA 0.6.
    let source_model = coherent(&[0.0, 0.0])?;
    let source = SourceShape::new(&source_model, 0.05, 0.05)?;
    let tool = ImagingTool::new(source, PupilFilterModel::Empty, 248.0, 0.6, 4.0, 0.0, 1.0);

    // Wafer: 500 nm resist on silicon under air.
    let resist = ResistLayer::new(
        500.0,
        ExposureResistModel::new(248.0, 0.7, 0.05, 0.05, 1.7),
        PebResistModel::new(30.0, 30.0),
        mack_rate_model(&[100.0, 0.5, 0.5, 2.0])?,
    );
    let mut stack = WaferStack::new();
    stack.push(WaferLayer::substrate(Refraction::Constant(Complex64::new(1.47, 3.0))))?;
    stack.push(WaferLayer::Resist(resist.clone()))?;
    stack.push(WaferLayer::environment(Refraction::Constant(Complex64::new(1.0, 0.0))))?;

    // Process conditions.
    let exposure = Exposure::new(0.0, 30.0, 1.0);
    let peb = PostExposureBake::new(60.0, 110.0);
    let development = Development::new(30.0);

    // Stage 1: diffraction spectrum.
    let diffraction = sim::diffraction(&tool, &mask)?;
    println!("2. Diffraction orders: {:?}", diffraction.kx());

    // Stage 2: image inside the resist.
    let otf = OpticalTransferFunction::new(&tool, Some(&exposure), Some(&stack));
    let image = sim::image_in_resist(&diffraction, &otf, 25.0, 50.0)?;
    let (rows, cols, slices) = image.values().dim();
    println!("3. Image in resist: {} x {} x {} samples", rows, cols, slices);

    // Stages 3-5: exposure, bake, development times.
    let latent = sim::latent_image(&image, &resist, &exposure);
    let diffused = sim::peb_latent_image(&latent, &resist, &peb);
    let times = sim::develop_time_contours(&diffused, &resist)?;
    let surface_pac = latent.values()[(0, cols / 2, slices - 1)];
    println!("4. PAC under the line center at the surface: {:.3}", surface_pac);

    // Stage 6: resist profile after development.
    let profile = sim::resist_profile(&times, &development)?;
    println!("5. Profile polygons after {} s: {}", development.time, profile.polygons().len());
    for (k, polygon) in profile.polygons().iter().enumerate() {
        println!("   polygon #{}: {} vertices", k, polygon.len());
    }

    Ok(())
}
