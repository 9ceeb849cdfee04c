use ndarray::Array2;

use crate::error::CoreError;
use crate::Result;

use super::linear1d::{base_index, interp1, LinearInterpolation1d};

/// Bilinear interpolation on a regular (x, y) grid.
///
/// A bank of row-wise 1D interpolators produces a value at `xi` for every
/// tabulated `yi`; a single 1D interpolator along the last column covers the
/// upper x boundary. The final value blends the two bracketing row values
/// linearly in y. Values are addressed as `values[(row, col)]` with rows
/// running along y and columns along x.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolation2d {
    x: Vec<f64>,
    y: Vec<f64>,
    values: Array2<f64>,
    fill: f64,
    row_interps: Vec<LinearInterpolation1d>,
    last_col_interp: LinearInterpolation1d,
}

impl LinearInterpolation2d {
    pub fn new(x: Vec<f64>, y: Vec<f64>, values: Array2<f64>, fill: f64) -> Result<Self> {
        if values.nrows() != y.len() || values.ncols() != x.len() {
            return Err(CoreError::OutOfRange(format!(
                "interpolation grid is {}x{} but value matrix is {}x{}",
                y.len(),
                x.len(),
                values.nrows(),
                values.ncols()
            )));
        }

        let mut row_interps = Vec::with_capacity(y.len());
        for r in 0..y.len() {
            let row: Vec<f64> = values.row(r).to_vec();
            row_interps.push(LinearInterpolation1d::new(x.clone(), row, fill)?);
        }

        let last_col: Vec<f64> = values.column(x.len() - 1).to_vec();
        let last_col_interp = LinearInterpolation1d::new(y.clone(), last_col, fill)?;

        Ok(LinearInterpolation2d {
            x,
            y,
            values,
            fill,
            row_interps,
            last_col_interp,
        })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn interpolate(&self, xi: f64, yi: f64) -> f64 {
        let (x, y) = (&self.x, &self.y);
        let (lx, ly) = (x.len() - 1, y.len() - 1);
        let sdx = if x[lx] - x[0] > 0.0 { 1.0 } else { -1.0 };
        let sdy = if y[ly] - y[0] > 0.0 { 1.0 } else { -1.0 };

        if sdx * xi < sdx * x[0]
            || sdx * xi > sdx * x[lx]
            || sdy * yi < sdy * y[0]
            || sdy * yi > sdy * y[ly]
        {
            self.fill
        } else if xi == x[lx] && yi == y[ly] {
            self.values[(ly, lx)]
        } else if yi == y[ly] {
            self.row_interps[ly].interpolate(xi)
        } else if xi == x[lx] {
            self.last_col_interp.interpolate(yi)
        } else {
            let r = base_index(y, yi);
            let v0 = self.row_interps[r].interpolate(xi);
            let v1 = self.row_interps[r + 1].interpolate(xi);
            interp1(yi, y[r], y[r + 1], v0, v1)
        }
    }

    /// Evaluate on the tensor grid `xi` x `yi`; result rows follow `yi`.
    pub fn interpolate_grid(&self, xi: &[f64], yi: &[f64]) -> Array2<f64> {
        let mut result = Array2::zeros((yi.len(), xi.len()));
        for (r, &yv) in yi.iter().enumerate() {
            for (c, &xv) in xi.iter().enumerate() {
                result[(r, c)] = self.interpolate(xv, yv);
            }
        }
        result
    }
}
