// Fourier module: mixed-radix complex FFT with cached twiddles.
//
// Direction convention: forward uses exponent -2*pi*j, backward +2*pi*j.
// No normalization is applied in either direction; callers divide by N when
// a symmetric convention is needed.

// ======================== MODULE DECLARATIONS ========================
pub mod plan;
pub mod shift;

pub(crate) mod cache;
pub(crate) mod kernels;
pub(crate) mod small;
pub(crate) mod tables;

// Test modules
mod _tests_fourier;

// ======================== PUBLIC SURFACE ========================
pub use plan::{
    Direction,   // enum - Forward (-2*pi*j) / Backward (+2*pi*j)
    Fft1d,       // struct - batched one-dimensional transform plan
    Fft2d,       // struct - two-dimensional transform plan (columns then rows)
    FftNd,       // struct - n-dimensional transform plan (axis by axis)
    PlanOptions, // struct - twiddle cache / sine table switches
};

pub use shift::{fftshift, ifftshift}; // fn - spectrum centering helpers

pub use small::IMPLEMENTED_RADICES; // [usize; 11] - lengths with hard-coded butterflies
