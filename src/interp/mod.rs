// Interpolation module: 1D and 2D linear interpolation on regular grids
// with a configurable fill value outside the tabulated domain.

// ======================== MODULE DECLARATIONS ========================
pub mod linear1d;
pub mod linear2d;


// ======================== INTERPOLATORS ========================
pub use linear1d::LinearInterpolation1d; // struct - precomputed slope/intercept table
pub use linear2d::LinearInterpolation2d; // struct - row-wise 1D bank with y blending
