use ndarray::Array3;

use crate::error::CoreError;
use crate::geometry::{Point3d, Surface3d, Triangle3d};
use crate::Result;

use super::tables::{EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};

/// Samples and positions at the eight corners of one grid cell.
///
/// Corner order follows the table convention: 0..3 walk the lower slice
/// counter-clockwise starting at (r, c), 4..7 repeat it on the upper slice.
struct SurfaceCell {
    points: [Point3d; 8],
    values: [f64; 8],
}

impl SurfaceCell {
    fn new(x: &[f64], y: &[f64], z: &[f64], values: &Array3<f64>, r: usize, c: usize, s: usize) -> Self {
        let corner = |r: usize, c: usize, s: usize| {
            (Point3d::new(x[c], y[r], z[s]), values[(r, c, s)])
        };
        let corners = [
            corner(r, c, s),
            corner(r + 1, c, s),
            corner(r + 1, c + 1, s),
            corner(r, c + 1, s),
            corner(r, c, s + 1),
            corner(r + 1, c, s + 1),
            corner(r + 1, c + 1, s + 1),
            corner(r, c + 1, s + 1),
        ];
        SurfaceCell {
            points: corners.map(|(p, _)| p),
            values: corners.map(|(_, v)| v),
        }
    }

    /// Table lookup index from the corners below (or above, for negative
    /// extraction) the iso-level.
    fn table_index(&self, level: f64, negative: bool) -> usize {
        let mut index = 0;
        for (bit, &v) in self.values.iter().enumerate() {
            let below = if negative { v > level } else { v < level };
            if below {
                index |= 1 << bit;
            }
        }
        index
    }
}

fn interp_vertex(level: f64, p: Point3d, q: Point3d, vp: f64, vq: f64) -> Point3d {
    let k = (level - vp) / (vq - vp);
    p + k * (q - p)
}

/// Extract the iso-surface of a value cube addressed as (row, col, slice)
/// with rows along `y`, columns along `x` and slices along `z`.
///
/// Each cell contributes triangles according to the 256-case tables, with
/// vertices interpolated linearly along the crossed cell edges. With
/// `negative` the enclosed side of the surface is where values fall below
/// the level.
pub fn isosurface(
    x: &[f64],
    y: &[f64],
    z: &[f64],
    values: &Array3<f64>,
    level: f64,
    negative: bool,
) -> Result<Surface3d> {
    let dims = values.dim();
    if dims.0 != y.len() || dims.1 != x.len() || dims.2 != z.len() {
        return Err(CoreError::OutOfRange(format!(
            "isosurface grid is {}x{}x{} but the value cube is {:?}",
            y.len(),
            x.len(),
            z.len(),
            dims
        )));
    }
    if y.len() < 2 || x.len() < 2 || z.len() < 2 {
        return Err(CoreError::InvalidGeometry(
            "isosurface extraction needs at least two samples per axis".into(),
        ));
    }

    let mut surface = Surface3d::new();

    for r in 0..y.len() - 1 {
        for c in 0..x.len() - 1 {
            for s in 0..z.len() - 1 {
                let cell = SurfaceCell::new(x, y, z, values, r, c, s);
                let index = cell.table_index(level, negative);
                let edge_code = EDGE_TABLE[index];
                if edge_code == 0 {
                    continue;
                }

                // Vertices on every crossed edge of this cell.
                let mut edge_vertices = [Point3d::zeros(); 12];
                for (e, &(p, q)) in EDGE_CORNERS.iter().enumerate() {
                    if edge_code & (1 << e) != 0 {
                        edge_vertices[e] = interp_vertex(
                            level,
                            cell.points[p],
                            cell.points[q],
                            cell.values[p],
                            cell.values[q],
                        );
                    }
                }

                let codes = &TRI_TABLE[index];
                let mut t = 0;
                while codes[t] >= 0 {
                    let v0 = edge_vertices[codes[t] as usize];
                    let v1 = edge_vertices[codes[t + 1] as usize];
                    let v2 = edge_vertices[codes[t + 2] as usize];
                    surface.add_point(v0);
                    surface.add_point(v1);
                    surface.add_point(v2);
                    surface.add_triangle(Triangle3d::new(v0, v1, v2));
                    t += 3;
                }
            }
        }
    }

    surface.generate_xyz();
    Ok(surface)
}
