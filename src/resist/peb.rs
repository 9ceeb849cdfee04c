use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::config::{ABSOLUTE_ZERO_CELSIUS, GAS_CONSTANT};

/// Post-exposure bake conditions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PostExposureBake {
    /// Bake time (s).
    pub time: f64,
    /// Bake temperature (C).
    pub temp: f64,
}

impl PostExposureBake {
    pub fn new(time: f64, temp: f64) -> Self {
        PostExposureBake { time, temp }
    }
}

/// Arrhenius diffusion model of the bake: activation energy Ea (kcal/mol)
/// and ln of the pre-exponential factor (nm^2/s).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PebResistModel {
    pub ea: f64,
    pub ln_ar: f64,
}

impl PebResistModel {
    pub fn new(ea: f64, ln_ar: f64) -> Self {
        PebResistModel { ea, ln_ar }
    }

    /// Diffusivity at a bake temperature in Celsius (nm^2/s).
    pub fn diffusivity(&self, temp: f64) -> f64 {
        let temp_k = temp - ABSOLUTE_ZERO_CELSIUS;
        (self.ln_ar - self.ea / (GAS_CONSTANT * temp_k)).exp()
    }

    /// Diffusion length sigma = sqrt(2 D t) for the given bake (nm).
    pub fn diffusion_length(&self, temp: f64, time: f64) -> f64 {
        (2.0 * self.diffusivity(temp) * time).sqrt()
    }

    /// Gaussian convolution kernel for one grid axis.
    ///
    /// The three-sigma reach is rounded up to the next grid point, giving an
    /// odd sample count, and the kernel is normalized to unit sum so the
    /// diffusion conserves PAC. A zero step (degenerate axis) yields the
    /// identity kernel.
    pub fn kernel(&self, peb: &PostExposureBake, step: f64) -> Vec<f64> {
        if step == 0.0 {
            return vec![1.0];
        }

        let sigma = self.diffusion_length(peb.temp, peb.time);
        let reach = (3.0 * sigma).ceil();
        let sigma_on_grid = reach - reach.rem_euclid(step) + step;
        let count = (2.0 * sigma_on_grid / step) as usize + 1;

        let mut kernel = Vec::with_capacity(count);
        for k in 0..count {
            let x = k as f64 * step - sigma_on_grid;
            kernel.push(step / sigma / (2.0 * PI).sqrt() * (-x * x / 2.0 / sigma / sigma).exp());
        }

        let total: f64 = kernel.iter().sum();
        for v in kernel.iter_mut() {
            *v /= total;
        }
        kernel
    }
}
