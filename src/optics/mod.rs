// Optics module: illumination and projection models, the analytic
// mask-diffraction engine and the optical transfer function.

// ======================== MODULE DECLARATIONS ========================
pub mod diffraction;
pub mod exposure;
pub mod imaging_tool;
pub mod pupil;
pub mod source_model;
pub mod source_shape;
pub mod otf;

mod _tests_optics;
mod _tests_source;

// ======================== ILLUMINATION ========================
pub use source_model::{
    annular,              // fn - annular source from an argument vector
    coherent,             // fn - point (tilted) coherent source
    conventional,         // fn - circular partially coherent source
    source_shape_plugins, // fn - registry of the builtin source expressions
    SourceShapeModel,     // enum - expression / sheet intensity model
    SourceShapePlugin,    // struct - parameter schema + expression
};

pub use source_shape::SourceShape; // struct - discretized illuminator grid

pub use pupil::{
    central_obscuration,  // fn - obscured pupil from an argument vector
    pupil_filter_plugins, // fn - registry of the builtin pupil expressions
    PupilFilterModel,     // enum - empty / expression / sheet filter
    PupilFilterPlugin,    // struct - parameter schema + expression
};

// ======================== PROJECTION ========================
pub use exposure::Exposure; // struct - focus and dose conditions
pub use imaging_tool::ImagingTool; // struct - projection system description

pub use diffraction::{
    within_circle, // fn - inside-pupil test with cheap rejects
    Diffraction,   // struct - analytic mask spectrum on the order grid
};

pub use otf::OpticalTransferFunction; // struct - pupil x reduction x defocus x standing waves
