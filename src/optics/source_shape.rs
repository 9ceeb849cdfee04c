use ndarray::Array2;

use crate::error::CoreError;
use crate::Result;

use super::source_model::SourceShapeModel;

/// Discretized illumination on a regular direction-cosine grid bounded to
/// |c| <= 1 in each axis. Immutable after construction.
#[derive(Debug, Clone)]
pub struct SourceShape {
    stepx: f64,
    stepy: f64,
    cx: Vec<f64>,
    cy: Vec<f64>,
    values: Array2<f64>,
    /// (row, col) grid indexes of non-zero intensity points.
    non_zeros: Vec<(usize, usize)>,
    sx_min: f64,
    sx_max: f64,
    sy_min: f64,
    sy_max: f64,
    total: f64,
}

/// Direction cosine limit of the source grid in each axis.
const COSINE_LIMIT: f64 = 1.0;

fn init_cosines(step: f64) -> Vec<f64> {
    // Steps that divide the cosine span land on an integer cell count up
    // to rounding; snap before truncating so the grid stays symmetric.
    let ratio = 2.0 * COSINE_LIMIT / step;
    let cells = if (ratio - ratio.round()).abs() < 1e-9 {
        ratio.round()
    } else {
        ratio.floor()
    };
    let count = cells as usize + 1;
    let median = (count as f64 / 2.0).floor() as i64;
    (0..count)
        .map(|i| (i as i64 - median) as f64 * step)
        .collect()
}

impl SourceShape {
    pub fn new(model: &SourceShapeModel, stepx: f64, stepy: f64) -> Result<Self> {
        if stepx <= 0.0 || stepy <= 0.0 {
            return Err(CoreError::ArgumentMismatch(format!(
                "source grid steps must be positive, got {} x {}",
                stepx, stepy
            )));
        }

        let cx = init_cosines(stepx);
        let cy = init_cosines(stepy);

        let mut values = Array2::zeros((cy.len(), cx.len()));
        for (r, &sy) in cy.iter().enumerate() {
            for (c, &sx) in cx.iter().enumerate() {
                values[(r, c)] = model.calculate(sx, sy);
            }
        }

        let non_zeros: Vec<(usize, usize)> = values
            .indexed_iter()
            .filter(|(_, &v)| v != 0.0)
            .map(|((r, c), _)| (r, c))
            .collect();

        if non_zeros.is_empty() {
            return Err(CoreError::ArgumentMismatch(
                "source shape has no non-zero intensity on the grid".into(),
            ));
        }

        let r_min = non_zeros.iter().map(|&(r, _)| r).min().unwrap();
        let r_max = non_zeros.iter().map(|&(r, _)| r).max().unwrap();
        let c_min = non_zeros.iter().map(|&(_, c)| c).min().unwrap();
        let c_max = non_zeros.iter().map(|&(_, c)| c).max().unwrap();

        let total = values.sum();

        Ok(SourceShape {
            stepx,
            stepy,
            sx_min: cx[c_min],
            sx_max: cx[c_max],
            sy_min: cy[r_min],
            sy_max: cy[r_max],
            cx,
            cy,
            values,
            non_zeros,
            total,
        })
    }

    pub fn stepx(&self) -> f64 {
        self.stepx
    }

    pub fn stepy(&self) -> f64 {
        self.stepy
    }

    pub fn cx(&self) -> &[f64] {
        &self.cx
    }

    pub fn cy(&self) -> &[f64] {
        &self.cy
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn value(&self, r: usize, c: usize) -> f64 {
        self.values[(r, c)]
    }

    pub fn non_zeros(&self) -> &[(usize, usize)] {
        &self.non_zeros
    }

    /// Total intensity over the grid, the Hopkins normalization factor.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Bounds of the non-zero support in direction cosines.
    pub fn sx_min(&self) -> f64 {
        self.sx_min
    }

    pub fn sx_max(&self) -> f64 {
        self.sx_max
    }

    pub fn sy_min(&self) -> f64 {
        self.sy_min
    }

    pub fn sy_max(&self) -> f64 {
        self.sy_max
    }
}
