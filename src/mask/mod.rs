// Mask module: transmissive/phase regions on a pitch boundary and the
// builtin mask generators.

// ======================== MODULE DECLARATIONS ========================
pub mod generators;
pub mod layout;
pub mod region;


// ======================== MASK TYPES ========================
pub use region::{
    etransmit, // fn - complex transmission sqrt(t) * exp(j*phase*pi/180)
    Boundary,  // struct - pitch rectangle with background transmission
    Region,    // struct - polygon with (transmittance, phase)
};

pub use layout::Mask; // struct - centered, CW-normalized region list

pub use generators::{
    five_bar_line,  // fn - 2D five-bar test structure
    line_1d,        // fn - 1D binary line
    line_1d_sraf,   // fn - 1D line with scattering bars
    MaskGenerator,  // struct - parameter schema + layout constructor
    mask_generators, // fn - registry of the builtin generators
};
