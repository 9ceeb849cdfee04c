use std::f64::consts::PI;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Exposure conditions: focus offset and dose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Exposure {
    /// Focus offset of the image plane (nm).
    pub focus: f64,
    /// Nominal exposure dose (mJ/cm^2).
    pub nominal_dose: f64,
    /// Dose correction factor.
    pub correctable: f64,
}

impl Exposure {
    pub fn new(focus: f64, nominal_dose: f64, correctable: f64) -> Self {
        Exposure {
            focus,
            nominal_dose,
            correctable,
        }
    }

    /// Defocus wavefront phase at the given direction cosines:
    /// exp(2*pi*j * focus * (1 - sqrt(1 - c^2)) / wavelength).
    pub fn defocus(&self, cx: f64, cy: f64, wavelength: f64) -> Complex64 {
        if self.focus != 0.0 {
            let cxy2 = cx * cx + cy * cy;
            let opd = self.focus * (1.0 - (1.0 - cxy2).sqrt());
            (Complex64::i() * 2.0 * PI * opd / wavelength).exp()
        } else {
            Complex64::new(1.0, 0.0)
        }
    }

    /// Effective dose: nominal times the correctable factor.
    pub fn dose(&self) -> f64 {
        self.nominal_dose * self.correctable
    }
}
