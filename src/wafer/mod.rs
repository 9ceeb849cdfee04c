// Wafer module: film stack description and the thin-film standing-wave
// calculation with cached effective reflections.

// ======================== MODULE DECLARATIONS ========================
pub mod layer;
pub mod stack;


// ======================== STACK TYPES ========================
pub use layer::{
    LayerKind,   // enum - Environment/Resist/Material/Substrate
    Refraction,  // enum - constant or wavelength-tabulated complex index
    ResistLayer, // struct - resist thickness + exposure/PEB/rate models
    WaferLayer,  // enum - one film of the stack
};

pub use stack::WaferStack; // struct - ordered films with reflection caches
