use ndarray::Array2;
use num_complex::Complex64;

use crate::error::CoreError;
use crate::fourier::{Direction, Fft2d};
use crate::optics::{Diffraction, OpticalTransferFunction};
use crate::volume::ResistVolume;
use crate::Result;

/// Partially coherent image by the Hopkins sum.
///
/// For every slice and every non-zero source point the diffraction orders
/// are placed on the FFT grid through the shifted transfer function, the
/// field is transformed to space, and |E|^2 accumulates weighted by the
/// source irradiance. The transform grid drops the duplicated lateral
/// sample (the even `count - 1`); the final slice is written back shifted,
/// with the last row/column repeating the first (periodic boundary).
pub(crate) fn calc_image(
    result: &mut ResistVolume,
    diffraction: &Diffraction,
    otf: &OpticalTransferFunction,
    refractive_index: f64,
) -> Result<()> {
    let (vol_rows, vol_cols, n_slices) = result.values().dim();
    let n_rows = if vol_rows != 1 { vol_rows - 1 } else { 1 };
    let n_cols = if vol_cols != 1 { vol_cols - 1 } else { 1 };

    if n_rows != 1 && n_rows % 2 != 0 {
        return Err(CoreError::ArgumentMismatch(format!(
            "image row count {} must be even",
            n_rows
        )));
    }
    if n_cols != 1 && n_cols % 2 != 0 {
        return Err(CoreError::ArgumentMismatch(format!(
            "image column count {} must be even",
            n_cols
        )));
    }

    let midrow = n_rows / 2;
    let midcol = n_cols / 2;

    let source = diffraction.source_shape();
    let na = diffraction.numeric_aperture;
    let zero = Complex64::new(0.0, 0.0);

    let mut efield = Array2::from_elem((n_rows, n_cols), zero);
    let mut fft = Fft2d::new(n_rows, n_cols, Direction::Backward)?;

    let depths = result.z().to_vec();

    for (s, &depth) in depths.iter().enumerate() {
        let mut intensity = Array2::<f64>::zeros((n_rows, n_cols));

        for &(sr, sc) in source.non_zeros() {
            let irradiance = source.value(sr, sc);
            let scx = na * source.cx()[sc];
            let scy = na * source.cy()[sr];

            // Diffraction orders onto the transform grid, wrapped by their
            // order numbers.
            efield.fill(zero);
            for r in 0..diffraction.ky().len() {
                let dcy = diffraction.cy()[r];
                let e_row = (n_rows as i64 + diffraction.ky()[r] as i64 - 1)
                    .rem_euclid(n_rows as i64) as usize;
                for c in 0..diffraction.kx().len() {
                    let dcx = diffraction.cx()[c];
                    let e_col = (n_cols as i64 + diffraction.kx()[c] as i64 - 1)
                        .rem_euclid(n_cols as i64) as usize;
                    efield[(e_row, e_col)] =
                        otf.calc(dcx - scx, dcy - scy, depth)? * diffraction.value(r, c);
                }
            }

            fft.execute(&mut efield)?;

            for (index, e) in efield.indexed_iter() {
                intensity[index] += irradiance * e.norm_sqr();
            }
        }

        let scale = refractive_index / source.total();
        intensity.mapv_inplace(|v| v * scale);

        write_shifted_slice(result, s, &intensity, n_rows, n_cols, midrow, midcol);
    }

    Ok(())
}

/// Write one intensity slice into the output volume, swapping quadrants so
/// the pattern center lands in the middle, and duplicating the first
/// row/column at the far edge.
fn write_shifted_slice(
    result: &mut ResistVolume,
    slice: usize,
    intensity: &Array2<f64>,
    n_rows: usize,
    n_cols: usize,
    midrow: usize,
    midcol: usize,
) {
    let values = result.values_mut();

    if n_cols != 1 && n_rows == 1 {
        for c in 0..midcol {
            values[(0, c + midcol, slice)] = intensity[(0, c)];
            values[(0, c, slice)] = intensity[(0, c + midcol)];
        }
        values[(0, n_cols, slice)] = values[(0, 0, slice)];
    } else if n_rows != 1 && n_cols == 1 {
        for r in 0..midrow {
            values[(r + midrow, 0, slice)] = intensity[(r, 0)];
            values[(r, 0, slice)] = intensity[(r + midrow, 0)];
        }
        values[(n_rows, 0, slice)] = values[(0, 0, slice)];
    } else if n_rows != 1 && n_cols != 1 {
        for r in 0..midrow {
            for c in 0..midcol {
                values[(r + midrow, c + midcol, slice)] = intensity[(r, c)];
                values[(r, c, slice)] = intensity[(r + midrow, c + midcol)];
                values[(r, c + midcol, slice)] = intensity[(r + midrow, c)];
                values[(r + midrow, c, slice)] = intensity[(r, c + midcol)];
            }
        }
        for c in 0..n_cols {
            values[(n_rows, c, slice)] = values[(0, c, slice)];
        }
        for r in 0..=n_rows {
            values[(r, n_cols, slice)] = values[(r, 0, slice)];
        }
    } else {
        values[(0, 0, slice)] = intensity[(0, 0)];
    }
}
