// Constants

use num_complex::Complex64;

// Tolerances
pub const CLASSIFY_TOLERANCE: f64 = 1e-2; // Point classification, nm-scale signed area
pub const EIKONAL_ZERO_TOLERANCE: f64 = 1e-11; // Rates below this are outside the development domain
pub const DIRECTION_COSINE_PRECISION: f64 = 1e-3; // Rounding grid for source/pupil expression inputs

// Physical constants
/// Ideal gas constant (kcal/K/mol)
pub const GAS_CONSTANT: f64 = 1.987204118e-3;
/// Absolute zero temperature (C)
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;
/// Refractive index of air
pub const AIR_REFRACTION: Complex64 = Complex64::new(1.000_292_6, 0.0);
/// Speed of light (m/s)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Round a value to the given precision grid.
pub fn round_to(value: f64, precision: f64) -> f64 {
    (value / precision).round() * precision
}
