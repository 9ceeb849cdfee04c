//! # Lithosim
//!
//! A Rust library for photolithography process simulation: from the mask
//! diffraction spectrum through partially coherent imaging, resist
//! exposure and bake chemistry, down to the developed resist profile.
//!
//! ## Overview
//!
//! This library provides efficient implementations for:
//! - Analytic Fourier spectra of polygonal mask layouts
//! - Partially coherent (Hopkins) aerial and in-resist imaging
//! - Thin-film standing waves over arbitrary wafer stacks
//! - Dill exposure kinetics and post-exposure-bake diffusion
//! - Development-time fields via a fast-marching Eikonal solver
//! - Iso-line and iso-surface extraction of the resist profile
//!
//! ## Modules
//!
//! - [`sim`]: The pipeline stage functions in processing order
//! - [`mask`], [`optics`], [`wafer`], [`resist`]: The physical models
//! - [`fourier`], [`eikonal`], [`contours`], [`interp`], [`geometry`]:
//!   The numerical foundations

pub mod config;
pub mod contours;
pub mod convolve;
pub mod eikonal;
pub mod error;
pub mod fourier;
pub mod geometry;
pub mod interp;
pub mod mask;
pub mod optics;
pub mod plugin;
pub mod resist;
pub mod sim;
pub mod volume;
pub mod wafer;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, error::CoreError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::mask::{Boundary, Mask, Region};
    pub use crate::optics::{
        Diffraction, Exposure, ImagingTool, OpticalTransferFunction, PupilFilterModel,
        SourceShape, SourceShapeModel,
    };
    pub use crate::resist::{
        Development, ExposureResistModel, PebResistModel, PostExposureBake, RateModel,
    };
    pub use crate::sim::{
        aerial_image, develop_time_contours, diffraction, image_in_resist, latent_image,
        peb_latent_image, resist_profile,
    };
    pub use crate::volume::{ResistProfile, ResistVolume};
    pub use crate::wafer::{Refraction, ResistLayer, WaferLayer, WaferStack};
    pub use crate::Result;
}
