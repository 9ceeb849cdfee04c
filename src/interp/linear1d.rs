use crate::error::CoreError;
use crate::Result;

/// Piecewise-linear interpolation over a monotone abscissa table.
///
/// Slopes and intercepts are precomputed per interval. Evaluation outside
/// the table (taking the table direction into account) returns the fill
/// value; exact boundary abscissas return the tabulated ordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolation1d {
    x: Vec<f64>,
    y: Vec<f64>,
    slope: Vec<f64>,
    intercept: Vec<f64>,
    fill: f64,
}

/// Index of the interval containing `xi`, honoring the table direction.
pub(crate) fn base_index(x: &[f64], xi: f64) -> usize {
    let sdx = if x[x.len() - 1] - x[0] > 0.0 { 1.0 } else { -1.0 };
    for k in 0..x.len() - 1 {
        if sdx * xi >= sdx * x[k] && sdx * xi <= sdx * x[k + 1] {
            return k;
        }
    }
    0
}

/// Linear blend of (x0, v0) and (x1, v1) at xi.
pub(crate) fn interp1(xi: f64, x0: f64, x1: f64, v0: f64, v1: f64) -> f64 {
    ((x1 - xi) * v0 + (xi - x0) * v1) / (x1 - x0)
}

impl LinearInterpolation1d {
    pub fn new(x: Vec<f64>, y: Vec<f64>, fill: f64) -> Result<Self> {
        if x.len() < 2 {
            return Err(CoreError::OutOfRange(format!(
                "interpolation table needs at least two samples, got {}",
                x.len()
            )));
        }
        if x.len() != y.len() {
            return Err(CoreError::OutOfRange(format!(
                "interpolation table length mismatch: {} abscissas, {} ordinates",
                x.len(),
                y.len()
            )));
        }

        let n = x.len();
        let mut slope = vec![0.0; n];
        let mut intercept = vec![0.0; n];
        for k in 0..n - 1 {
            slope[k] = (y[k + 1] - y[k]) / (x[k + 1] - x[k]);
            intercept[k] = (x[k + 1] * y[k] - x[k] * y[k + 1]) / (x[k + 1] - x[k]);
        }

        Ok(LinearInterpolation1d {
            x,
            y,
            slope,
            intercept,
            fill,
        })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn interpolate(&self, xi: f64) -> f64 {
        let x = &self.x;
        let last = x.len() - 1;
        let sdx = if x[last] - x[0] > 0.0 { 1.0 } else { -1.0 };
        if sdx * xi < sdx * x[0] || sdx * xi > sdx * x[last] {
            self.fill
        } else if xi == x[0] {
            self.y[0]
        } else if xi == x[last] {
            self.y[last]
        } else {
            let k = base_index(x, xi);
            self.slope[k] * xi + self.intercept[k]
        }
    }

    /// Evaluate at every abscissa of `xi`.
    pub fn interpolate_slice(&self, xi: &[f64]) -> Vec<f64> {
        xi.iter().map(|&v| self.interpolate(v)).collect()
    }
}
