use std::f64::consts::PI;
use std::sync::Arc;

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::CoreError;
use crate::geometry::{Dimension, Sizes};
use crate::mask::{Boundary, Mask, Region};
use crate::Result;

use super::imaging_tool::ImagingTool;
use super::source_shape::SourceShape;

/// Whether the point (dx, dy) lies inside a circle of radius `r` around
/// the origin, with cheap box accepts/rejects before the squared test.
pub fn within_circle(dx: f64, dy: f64, r: f64) -> bool {
    let adx = dx.abs();
    let ady = dy.abs();
    if adx + ady <= r {
        true
    } else if adx > r || ady > r {
        false
    } else {
        adx * adx + ady * ady <= r * r
    }
}

/// Analytic diffraction spectrum of a mask on the integer order grid.
///
/// The grid extent per axis covers every order that can fall into the pupil
/// under any offset from the illuminator support; per-axis vectors hold the
/// order number, the spatial frequency k/pitch and the direction cosine
/// lambda*k/pitch.
#[derive(Debug, Clone)]
pub struct Diffraction {
    source_shape: Arc<SourceShape>,
    values: Array2<Complex64>,
    frqx: Vec<f64>,
    frqy: Vec<f64>,
    kx: Vec<i32>,
    ky: Vec<i32>,
    cx: Vec<f64>,
    cy: Vec<f64>,
    cxy: Array2<f64>,
    boundary: Boundary,
    pub pitch: Sizes,
    pub numeric_aperture: f64,
    pub wavelength: f64,
}

/// Order index range along one axis: all orders reachable through the
/// pupil under the source support [cs_min, cs_max] (in NA units).
fn calc_size(na: f64, wvl: f64, pitch: f64, cs_min: f64, cs_max: f64) -> Result<(i32, i32)> {
    if cs_min > cs_max {
        return Err(CoreError::ArgumentMismatch(format!(
            "source support maximum must not be below the minimum: min = {} max = {}",
            cs_min, cs_max
        )));
    }
    let k_min = -(na * (1.0 - cs_min) / wvl * pitch).floor() as i32;
    let k_max = (na * (1.0 + cs_max) / wvl * pitch).floor() as i32;
    Ok((k_min, k_max))
}

fn init_axis(pitch: f64, wavelength: f64, limits: (i32, i32)) -> (Vec<i32>, Vec<f64>, Vec<f64>) {
    if pitch == 0.0 {
        (vec![0], vec![0.0], vec![0.0])
    } else {
        let count = (limits.1 - limits.0 + 1) as usize;
        let mut k = Vec::with_capacity(count);
        let mut frq = Vec::with_capacity(count);
        let mut dcos = Vec::with_capacity(count);
        for i in 0..count {
            let order = limits.0 + i as i32;
            k.push(order);
            frq.push(order as f64 / pitch);
            dcos.push(order as f64 / pitch * wavelength);
        }
        (k, frq, dcos)
    }
}

impl Diffraction {
    pub fn new(mask: &Mask, imaging_tool: &ImagingTool) -> Result<Self> {
        let na = imaging_tool.numeric_aperture;
        let wvl = imaging_tool.wavelength;
        let source_shape = imaging_tool.share_source();
        let pitch = mask.pitch();

        // Rows follow the y axis, columns the x axis.
        let lim_cols = calc_size(na, wvl, pitch.x, source_shape.sx_min(), source_shape.sx_max())?;
        let lim_rows = calc_size(na, wvl, pitch.y, source_shape.sy_min(), source_shape.sy_max())?;

        let (kx, frqx, cx) = init_axis(pitch.x, wvl, lim_cols);
        let (ky, frqy, cy) = init_axis(pitch.y, wvl, lim_rows);

        let mut cxy = Array2::zeros((cy.len(), cx.len()));
        for (r, &vy) in cy.iter().enumerate() {
            for (c, &vx) in cx.iter().enumerate() {
                cxy[(r, c)] = (vx * vx + vy * vy).sqrt();
            }
        }

        Ok(Diffraction {
            source_shape,
            values: Array2::from_elem((cy.len(), cx.len()), Complex64::new(0.0, 0.0)),
            frqx,
            frqy,
            kx,
            ky,
            cx,
            cy,
            cxy,
            boundary: mask.boundary().clone(),
            pitch,
            numeric_aperture: na,
            wavelength: wvl,
        })
    }

    pub fn source_shape(&self) -> &SourceShape {
        &self.source_shape
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn values(&self) -> &Array2<Complex64> {
        &self.values
    }

    pub fn value(&self, r: usize, c: usize) -> Complex64 {
        self.values[(r, c)]
    }

    pub fn kx(&self) -> &[i32] {
        &self.kx
    }

    pub fn ky(&self) -> &[i32] {
        &self.ky
    }

    pub fn frqx(&self) -> &[f64] {
        &self.frqx
    }

    pub fn frqy(&self) -> &[f64] {
        &self.frqy
    }

    pub fn cx(&self) -> &[f64] {
        &self.cx
    }

    pub fn cy(&self) -> &[f64] {
        &self.cy
    }

    /// Absolute direction cosine per order bin.
    pub fn cxy(&self) -> &Array2<f64> {
        &self.cxy
    }

    /// Add the background transmission to every zero-cosine bin.
    pub fn add_background(&mut self, factor: Complex64) {
        for (index, &c) in self.cxy.indexed_iter() {
            if c == 0.0 {
                self.values[index] += factor;
            }
        }
    }

    /// Accumulate one region's closed-form Fourier coefficients, weighted
    /// by `factor` (its transmission against the background).
    pub fn add_region(&mut self, region: &Region, factor: Complex64) -> Result<()> {
        match region.axis() {
            Dimension::X1d | Dimension::Y1d => {
                let axis = region.axis().axis_index();
                let norm = if axis == 0 { self.pitch.x } else { self.pitch.y };
                self.add_1d_region(region, factor / norm);
                Ok(())
            }
            Dimension::Two => {
                self.add_2d_region(region, factor / self.pitch.x / self.pitch.y);
                Ok(())
            }
        }
    }

    fn add_1d_region(&mut self, region: &Region, factor: Complex64) {
        // A one-dimensional mask has exactly one region edge.
        let edge = region.polygon().front();
        let axis = region.axis().axis_index();
        let dst = edge.dst[axis];
        let org = edge.org[axis];

        let along_x = axis == 0;
        let (k, frq) = if along_x {
            (&self.kx, &self.frqx)
        } else {
            (&self.ky, &self.frqy)
        };

        for i in 0..k.len() {
            let value = if k[i] == 0 {
                Complex64::new(dst - org, 0.0)
            } else {
                let w = Complex64::i() * 2.0 * PI * frq[i];
                -((-w * dst).exp() - (-w * org).exp()) / w
            };
            let index = if along_x { (0, i) } else { (i, 0) };
            self.values[index] += factor * value;
        }
    }

    fn add_2d_region(&mut self, region: &Region, factor: Complex64) {
        let na = self.numeric_aperture;

        // Each order is integrated at most once per region, and only if it
        // sits in the pupil or in a pupil circle shifted by a source point.
        let mut calculated = Array2::from_elem(self.values.dim(), false);

        for &(sr, sc) in self.source_shape.non_zeros().iter() {
            let scx = na * self.source_shape.cx()[sc];
            let scy = na * self.source_shape.cy()[sr];

            for c in 0..self.kx.len() {
                for r in 0..self.ky.len() {
                    if calculated[(r, c)] {
                        continue;
                    }
                    // The on-axis check keeps central orders present even
                    // outside the shifted pupils, for display purposes.
                    let reachable = self.cxy[(r, c)] <= na
                        || within_circle(self.cx[c] - scx, self.cy[r] - scy, na);
                    if reachable {
                        let coefficient = calc_2d_region(
                            region,
                            self.kx[c],
                            self.ky[r],
                            self.frqx[c],
                            self.frqy[r],
                        );
                        self.values[(r, c)] += factor * coefficient;
                        calculated[(r, c)] = true;
                    }
                }
            }
        }
    }
}

/// Closed-form Fourier coefficient of a polygonal region at one order,
/// accumulated edge by edge.
fn calc_2d_region(region: &Region, kx: i32, ky: i32, frqx: f64, frqy: f64) -> Complex64 {
    let mut result = Complex64::new(0.0, 0.0);
    let zero = Complex64::new(0.0, 0.0);

    for e in region.polygon().edges() {
        let dx = e.dx();
        if dx == 0.0 {
            continue;
        }

        let dy = e.dy();
        let s = e.slope();
        let b = e.dst.y - s * e.dst.x;

        let value = if kx == 0 && ky == 0 {
            // Zero order: the plain signed area under the edge.
            Complex64::new(e.area(), 0.0)
        } else if kx == 0 {
            let wy = Complex64::i() * 2.0 * PI * frqy;
            if dy == 0.0 {
                dx / wy * (1.0 - (-wy * b).exp())
            } else {
                dx / wy
                    + ((-wy * b).exp() / s / wy / wy)
                        * ((-s * wy * e.dst.x).exp() - (-s * wy * e.org.x).exp())
            }
        } else if ky == 0 {
            let wx = Complex64::i() * 2.0 * PI * frqx;
            if dy == 0.0 {
                b / wx * ((-wx * e.org.x).exp() - (-wx * e.dst.x).exp())
            } else {
                let ex0 = (-wx * e.org.x).exp();
                let ex1 = (-wx * e.dst.x).exp();
                (s + wx * b) * (ex0 - ex1) / wx / wx + s * (ex0 * e.org.x - ex1 * e.dst.x) / wx
            }
        } else {
            let wx = Complex64::i() * 2.0 * PI * frqx;
            let wy = Complex64::i() * 2.0 * PI * frqy;
            if dy == 0.0 {
                (1.0 - (-wy * b).exp()) * ((-wx * e.org.x).exp() - (-wx * e.dst.x).exp()) / wx / wy
            } else if wx + s * wy == zero {
                ((-wx * e.org.x).exp() - (-wx * e.dst.x).exp()) / wx / wy
                    - dx * (-wy * b).exp() / wy
            } else {
                let coef = wx + s * wy;
                let dexp = (-wx * e.org.x).exp() - (-wx * e.dst.x).exp();
                dexp / wx / wy
                    + (-wy * b).exp() / wy * ((-coef * e.dst.x).exp() - (-coef * e.org.x).exp())
                        / coef
            }
        };

        result += value;
    }
    result
}
