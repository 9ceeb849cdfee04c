// Volume module: sampled scalar fields over the simulation region and the
// resist profile extracted from them.

// ======================== MODULE DECLARATIONS ========================
pub mod profile;
pub mod resist_volume;

// Test modules
mod _tests_volume;

// ======================== VOLUME TYPES ========================
pub use resist_volume::{
    ResistVolume, // struct - (cube, x, y, z) sample of a scalar field
    VolumeAxes,   // enum - which axes carry more than one sample
};

pub use profile::ResistProfile; // struct - iso-time cross-section polygons
