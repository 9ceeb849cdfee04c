use std::f64::consts::PI;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Dill exposure model of the resist: bleach rates (A, B), exposure rate
/// constant C and the real refractive index n at the exposure wavelength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureResistModel {
    /// Exposure wavelength (nm).
    pub wavelength: f64,
    /// Bleachable absorption (1/um).
    pub a: f64,
    /// Non-bleachable absorption (1/um).
    pub b: f64,
    /// Exposure rate constant (cm^2/mJ).
    pub c: f64,
    /// Real refractive index.
    pub n: f64,
}

impl ExposureResistModel {
    pub fn new(wavelength: f64, a: f64, b: f64, c: f64, n: f64) -> Self {
        ExposureResistModel {
            wavelength,
            a,
            b,
            c,
            n,
        }
    }

    /// Complex refractive index at PAC fraction `m`. The imaginary part
    /// follows the Dill absorption: lambda/(4*pi) * (A*m + B) * 1e-3.
    pub fn refraction(&self, m: f64) -> Complex64 {
        let imag = self.wavelength / 4.0 / PI * (self.a * m + self.b) * 1e-3;
        Complex64::new(self.n, imag)
    }
}
