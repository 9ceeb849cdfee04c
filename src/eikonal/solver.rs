use log::{debug, warn};
use ndarray::{Array2, Array3};

use crate::config::EIKONAL_ZERO_TOLERANCE;
use crate::error::CoreError;
use crate::Result;

use super::heap::FmmHeap;

/// Finite-difference order of the gradient discretization. Second order
/// falls back to first order wherever two consecutive KNOWN neighbors are
/// not available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpatialOrder {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointStatus {
    Far,
    Trial,
    Known,
    Outside,
}

/// Regular-grid fast-marching state over N dimensions. `dims[0]` is the
/// fastest-varying axis of the flat buffers.
struct FmmGrid<'a, const N: usize> {
    dims: [usize; N],
    dx: [f64; N],
    phi: &'a mut [f64],
    speed: &'a [f64],
    status: Vec<PointStatus>,
    order: SpatialOrder,
}

impl<'a, const N: usize> FmmGrid<'a, N> {
    fn flat_index(&self, grid_idx: [usize; N]) -> usize {
        let mut idx = 0;
        let mut stride = 1;
        for dir in 0..N {
            idx += grid_idx[dir] * stride;
            stride *= self.dims[dir];
        }
        idx
    }

    fn grid_index(&self, mut flat: usize) -> [usize; N] {
        let mut grid_idx = [0usize; N];
        for dir in 0..N {
            grid_idx[dir] = flat % self.dims[dir];
            flat /= self.dims[dir];
        }
        grid_idx
    }

    /// Neighbor `steps` cells along `dir`; None when out of bounds.
    fn neighbor(&self, grid_idx: [usize; N], dir: usize, steps: i64) -> Option<usize> {
        let moved = grid_idx[dir] as i64 + steps;
        if moved < 0 || moved >= self.dims[dir] as i64 {
            return None;
        }
        let mut neighbor_idx = grid_idx;
        neighbor_idx[dir] = moved as usize;
        Some(self.flat_index(neighbor_idx))
    }

    fn known_phi(&self, idx: Option<usize>) -> Option<f64> {
        match idx {
            Some(i) if self.status[i] == PointStatus::Known => Some(self.phi[i]),
            _ => None,
        }
    }

    /// Recompute phi at a grid point from its KNOWN neighbors and write it
    /// back. Returns the updated value.
    fn update_point(&mut self, flat: usize) -> f64 {
        let grid_idx = self.grid_index(flat);

        // Coefficients of A*phi^2 - 2*B*phi + C = 1/rate^2 accumulated over
        // the axes that contribute KNOWN data.
        let mut phi_a = 0.0;
        let mut phi_b = 0.0;
        let mut phi_c = 0.0;

        for dir in 0..N {
            // Upwind pick: the side with the smaller |phi|.
            let minus = self.known_phi(self.neighbor(grid_idx, dir, -1));
            let plus = self.known_phi(self.neighbor(grid_idx, dir, 1));

            let (upwind1, from_plus) = match (minus, plus) {
                (Some(m), Some(p)) => {
                    if p.abs() < m.abs() {
                        (Some(p), true)
                    } else {
                        (Some(m), false)
                    }
                }
                (Some(m), None) => (Some(m), false),
                (None, Some(p)) => (Some(p), true),
                (None, None) => (None, false),
            };

            let Some(upwind1) = upwind1 else { continue };

            // Second-order replacement when the next sample in the upwind
            // direction is also KNOWN with monotone phi.
            let mut contribution = upwind1;
            let mut switch = 0.0;
            if self.order == SpatialOrder::Second {
                let step = if from_plus { 2 } else { -2 };
                if let Some(upwind2) = self.known_phi(self.neighbor(grid_idx, dir, step)) {
                    if upwind2.abs() <= upwind1.abs() {
                        contribution = 2.0 * upwind1 - 0.5 * upwind2;
                        switch = 1.0;
                    }
                }
            }

            let factor = 1.0 + 0.5 * switch;
            let inv_dx_sq = 1.0 / (self.dx[dir] * self.dx[dir]);
            phi_a += inv_dx_sq * factor * factor;
            phi_b += inv_dx_sq * factor * contribution;
            phi_c += inv_dx_sq * contribution * contribution;
        }

        if phi_a == 0.0 {
            warn!("eikonal update without KNOWN neighbors, phi set to infinity");
            return f64::MAX;
        }

        phi_b *= -2.0;
        phi_c -= 1.0 / (self.speed[flat] * self.speed[flat]);

        let discriminant = phi_b * phi_b - 4.0 * phi_a * phi_c;
        let updated = if discriminant >= 0.0 {
            0.5 * (-phi_b + discriminant.sqrt()) / phi_a
        } else {
            // Inconsistent boundary data for this neighbor set. Keeping the
            // previously assigned value avoids poisoning the solution with
            // infinities.
            debug!(
                "negative discriminant {} at grid point {}, keeping phi = {}",
                discriminant, flat, self.phi[flat]
            );
            self.phi[flat]
        };

        self.phi[flat] = updated;
        updated
    }

    /// Recompute every unfinished neighbor of a freshly KNOWN point and
    /// (re-)enqueue it in the narrow band.
    fn update_neighbors(&mut self, flat: usize, heap: &mut FmmHeap) {
        let grid_idx = self.grid_index(flat);
        for dir in 0..N {
            for step in [-1i64, 1] {
                let Some(neighbor) = self.neighbor(grid_idx, dir, step) else {
                    continue;
                };
                match self.status[neighbor] {
                    PointStatus::Far | PointStatus::Trial => {
                        let value = self.update_point(neighbor);
                        self.status[neighbor] = PointStatus::Trial;
                        heap.push_or_update(neighbor, value);
                    }
                    PointStatus::Known | PointStatus::Outside => {}
                }
            }
        }
    }
}

/// Solve |grad(phi)| = 1/speed on a regular N-dimensional grid.
///
/// `phi` must arrive with non-negative boundary values on the initial front
/// and negative values everywhere else. `dims[0]` is the fastest-varying
/// axis of the flat buffers and `dx` pairs a step with each axis. Grid
/// points with a negative `mask` value or a speed below the zero tolerance
/// are left at `f64::MAX`.
pub fn solve_eikonal<const N: usize>(
    phi: &mut [f64],
    speed: &[f64],
    mask: Option<&[f64]>,
    order: SpatialOrder,
    dims: [usize; N],
    dx: [f64; N],
) -> Result<()> {
    let total: usize = dims.iter().product();
    if total == 0 {
        return Err(CoreError::EikonalFailure(
            "grid dimensions must be non-zero".into(),
        ));
    }
    if phi.len() != total || speed.len() != total {
        return Err(CoreError::EikonalFailure(format!(
            "field sizes {} / {} do not match the grid ({} points)",
            phi.len(),
            speed.len(),
            total
        )));
    }
    if let Some(mask) = mask {
        if mask.len() != total {
            return Err(CoreError::EikonalFailure(format!(
                "mask size {} does not match the grid ({} points)",
                mask.len(),
                total
            )));
        }
    }

    let mut grid = FmmGrid::<N> {
        dims,
        dx,
        phi,
        speed,
        status: vec![PointStatus::Far; total],
        order,
    };

    // Points outside the mathematical/physical domain.
    for flat in 0..total {
        let masked_out = mask.map(|m| m[flat] < 0.0).unwrap_or(false);
        if masked_out || grid.speed[flat] < EIKONAL_ZERO_TOLERANCE {
            grid.status[flat] = PointStatus::Outside;
            grid.phi[flat] = f64::MAX;
        }
    }

    // Points carrying boundary data form the initial front.
    let mut heap = FmmHeap::new(total);
    for flat in 0..total {
        if grid.phi[flat] > -EIKONAL_ZERO_TOLERANCE && grid.status[flat] != PointStatus::Outside {
            grid.status[flat] = PointStatus::Known;
        }
    }
    for flat in 0..total {
        if grid.status[flat] == PointStatus::Known {
            grid.update_neighbors(flat, &mut heap);
        }
    }

    // March the front in order of increasing phi.
    while let Some((flat, _)) = heap.pop() {
        grid.status[flat] = PointStatus::Known;
        grid.update_neighbors(flat, &mut heap);
    }

    Ok(())
}

/// Solve the development-time field on a matrix. `phi` carries the initial
/// state on entry (see [`solve_eikonal`]).
pub fn solve2d(phi: &mut Array2<f64>, rates: &Array2<f64>, row_step: f64, col_step: f64) -> Result<()> {
    if phi.dim() != rates.dim() {
        return Err(CoreError::EikonalFailure(format!(
            "phi is {:?} but rates are {:?}",
            phi.dim(),
            rates.dim()
        )));
    }
    let (rows, cols) = phi.dim();
    let phi_slice = phi
        .as_slice_mut()
        .ok_or_else(|| CoreError::EikonalFailure("phi matrix is not contiguous".into()))?;
    let rate_slice = rates
        .as_slice()
        .ok_or_else(|| CoreError::EikonalFailure("rate matrix is not contiguous".into()))?;

    // Row-major storage: columns vary fastest.
    solve_eikonal(
        phi_slice,
        rate_slice,
        None,
        SpatialOrder::Second,
        [cols, rows],
        [col_step, row_step],
    )
}

/// Solve the development-time field on a cube addressed as
/// (row, col, slice). `phi` carries the initial state on entry.
pub fn solve3d(
    phi: &mut Array3<f64>,
    rates: &Array3<f64>,
    row_step: f64,
    col_step: f64,
    slice_step: f64,
) -> Result<()> {
    if phi.dim() != rates.dim() {
        return Err(CoreError::EikonalFailure(format!(
            "phi is {:?} but rates are {:?}",
            phi.dim(),
            rates.dim()
        )));
    }
    let (rows, cols, slices) = phi.dim();
    let phi_slice = phi
        .as_slice_mut()
        .ok_or_else(|| CoreError::EikonalFailure("phi cube is not contiguous".into()))?;
    let rate_slice = rates
        .as_slice()
        .ok_or_else(|| CoreError::EikonalFailure("rate cube is not contiguous".into()))?;

    // Row-major storage: slices vary fastest, then columns, then rows.
    solve_eikonal(
        phi_slice,
        rate_slice,
        None,
        SpatialOrder::Second,
        [slices, cols, rows],
        [slice_step, col_step, row_step],
    )
}
