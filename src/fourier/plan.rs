use ndarray::Array2;
use num_complex::Complex64;

use crate::error::CoreError;
use crate::Result;

use super::cache::CacheNode;
use super::kernels::{dispatch, Layout};

/// Transform direction. Forward applies exponent -2*pi*j, backward +2*pi*j.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Plan switches: whether twiddles are memoized per plan and whether the
/// shared sine table may seed them.
#[derive(Debug, Clone, Copy)]
pub struct PlanOptions {
    pub use_cache: bool,
    pub use_table: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        PlanOptions {
            use_cache: true,
            use_table: true,
        }
    }
}

fn check_len(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(CoreError::ArgumentMismatch(format!(
            "transform buffer holds {} samples but the plan expects {}",
            got, expected
        )));
    }
    Ok(())
}

/// Batched one-dimensional transform plan. The plan owns its twiddle cache
/// and the shadow buffer needed for in-place execution.
#[derive(Debug)]
pub struct Fft1d {
    count: usize,
    how_many: usize,
    direction: Direction,
    opts: PlanOptions,
    cache: CacheNode,
    scratch: Vec<Complex64>,
}

impl Fft1d {
    pub fn new(count: usize, direction: Direction) -> Result<Self> {
        Fft1d::with_batch(count, 1, direction)
    }

    pub fn with_batch(count: usize, how_many: usize, direction: Direction) -> Result<Self> {
        if count == 0 || how_many == 0 {
            return Err(CoreError::ArgumentMismatch(format!(
                "transform length {} x batch {} must be non-zero",
                count, how_many
            )));
        }
        Ok(Fft1d {
            count,
            how_many,
            direction,
            opts: PlanOptions::default(),
            cache: CacheNode::new(count),
            scratch: vec![Complex64::new(0.0, 0.0); count * how_many],
        })
    }

    pub fn with_options(mut self, opts: PlanOptions) -> Self {
        self.opts = opts;
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Transform `data` in place; signals are stored back to back.
    pub fn execute(&mut self, data: &mut [Complex64]) -> Result<()> {
        check_len(self.count * self.how_many, data.len())?;
        self.scratch.copy_from_slice(data);
        let layout = Layout::contiguous(self.count, self.how_many);
        let cache = self.opts.use_cache.then_some(&mut self.cache);
        dispatch(&self.scratch, data, &layout, self.direction, cache, &self.opts);
        Ok(())
    }
}

/// Two-dimensional transform plan: all columns first, then all rows, with
/// one twiddle-cache tree per dimension.
#[derive(Debug)]
pub struct Fft2d {
    rows: usize,
    cols: usize,
    direction: Direction,
    opts: PlanOptions,
    caches: [CacheNode; 2],
    scratch: Vec<Complex64>,
}

impl Fft2d {
    pub fn new(rows: usize, cols: usize, direction: Direction) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(CoreError::ArgumentMismatch(format!(
                "transform dimensions {}x{} must be non-zero",
                rows, cols
            )));
        }
        Ok(Fft2d {
            rows,
            cols,
            direction,
            opts: PlanOptions::default(),
            caches: [CacheNode::new(rows), CacheNode::new(cols)],
            scratch: vec![Complex64::new(0.0, 0.0); rows * cols],
        })
    }

    pub fn with_options(mut self, opts: PlanOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Transform a matrix in place.
    pub fn execute(&mut self, data: &mut Array2<Complex64>) -> Result<()> {
        if data.nrows() != self.rows || data.ncols() != self.cols {
            return Err(CoreError::ArgumentMismatch(format!(
                "matrix is {}x{} but the plan expects {}x{}",
                data.nrows(),
                data.ncols(),
                self.rows,
                self.cols
            )));
        }
        let slice = data
            .as_slice_mut()
            .ok_or_else(|| CoreError::ArgumentMismatch("matrix is not contiguous".into()))?;
        self.execute_slice(slice)
    }

    /// Transform a row-major `rows x cols` buffer in place.
    pub fn execute_slice(&mut self, data: &mut [Complex64]) -> Result<()> {
        check_len(self.rows * self.cols, data.len())?;

        // Column-wise: samples strided by the row length, one signal per
        // column.
        let col_layout = Layout {
            count: self.rows,
            how_many: self.cols,
            idist: self.cols,
            istride: 1,
            odist: self.cols,
            ostride: 1,
        };
        let cache = self.opts.use_cache.then_some(&mut self.caches[0]);
        dispatch(data, &mut self.scratch, &col_layout, self.direction, cache, &self.opts);

        // Row-wise on the intermediate result, back into the caller buffer.
        let row_layout = Layout {
            count: self.cols,
            how_many: self.rows,
            idist: 1,
            istride: self.cols,
            odist: 1,
            ostride: self.cols,
        };
        let cache = self.opts.use_cache.then_some(&mut self.caches[1]);
        dispatch(&self.scratch, data, &row_layout, self.direction, cache, &self.opts);
        Ok(())
    }
}

/// N-dimensional transform plan: the 1D transform applied along each axis
/// in turn on a row-major buffer.
#[derive(Debug)]
pub struct FftNd {
    dims: Vec<usize>,
    total: usize,
    direction: Direction,
    opts: PlanOptions,
    caches: Vec<CacheNode>,
    scratch: Vec<Complex64>,
}

impl FftNd {
    pub fn new(dims: &[usize], direction: Direction) -> Result<Self> {
        if dims.is_empty() || dims.contains(&0) {
            return Err(CoreError::ArgumentMismatch(format!(
                "transform dimensions {:?} must be non-empty and non-zero",
                dims
            )));
        }
        let total = dims.iter().product();
        Ok(FftNd {
            dims: dims.to_vec(),
            total,
            direction,
            opts: PlanOptions::default(),
            caches: dims.iter().map(|&d| CacheNode::new(d)).collect(),
            scratch: vec![Complex64::new(0.0, 0.0); total],
        })
    }

    /// Transform a row-major buffer in place.
    pub fn execute(&mut self, data: &mut [Complex64]) -> Result<()> {
        check_len(self.total, data.len())?;

        for axis in 0..self.dims.len() {
            let n = self.dims[axis];
            let after: usize = self.dims[axis + 1..].iter().product();
            let before: usize = self.dims[..axis].iter().product();

            // One batched transform per block of the leading axes; samples
            // along this axis are strided by the trailing extent.
            let layout = Layout {
                count: n,
                how_many: after,
                idist: after,
                istride: 1,
                odist: after,
                ostride: 1,
            };
            for b in 0..before {
                let base = b * n * after;
                let block = base..base + n * after;
                let cache = self.opts.use_cache.then_some(&mut self.caches[axis]);
                dispatch(
                    &data[block.clone()],
                    &mut self.scratch[block.clone()],
                    &layout,
                    self.direction,
                    cache,
                    &self.opts,
                );
            }
            data.copy_from_slice(&self.scratch);
        }
        Ok(())
    }
}
