// Resist module: exposure kinetics, bake diffusion and development-rate
// models of the photoresist chemistry.

// ======================== MODULE DECLARATIONS ========================
pub mod exposure_model;
pub mod peb;
pub mod rate;

// Test modules
mod _tests_resist;

// ======================== RESIST MODELS ========================
pub use exposure_model::ExposureResistModel; // struct - Dill (A, B, C) bleach model

pub use peb::{
    PebResistModel,   // struct - Arrhenius diffusivity (Ea, ln Ar)
    PostExposureBake, // struct - bake conditions (time, temperature)
};

pub use rate::{
    enhanced_mack_rate_model, // fn - enhanced Mack model from an argument vector
    mack_rate_model,          // fn - original Mack model from an argument vector
    notch_depth_rate_model,   // fn - notch model with depth inhibition
    notch_rate_model,         // fn - notch model from an argument vector
    rate_model_plugins,       // fn - registry of the builtin rate expressions
    Development,              // struct - development conditions (time)
    RateModel,                // enum - expression / sheet / depth-sheet rate model
    RateModelPlugin,          // struct - parameter schema + expression
};
