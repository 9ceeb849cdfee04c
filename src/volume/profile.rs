use ndarray::Array2;

use crate::contours::contours;
use crate::error::CoreError;
use crate::geometry::Polygon;
use crate::Result;

use super::resist_volume::ResistVolume;

/// Vertical cross-section of the developed resist: polygons in the
/// (lateral, depth) plane extracted from a develop-time volume at the
/// development time.
#[derive(Debug, Clone)]
pub struct ResistProfile {
    lateral: Vec<f64>,
    depth: Vec<f64>,
    polygons: Vec<Polygon>,
}

impl ResistProfile {
    pub fn new(volume: &ResistVolume, level: f64) -> Result<Self> {
        if volume.has_x() && volume.has_y() {
            return Err(CoreError::InvalidGeometry(
                "a resist profile cannot be cut from a 3D volume".into(),
            ));
        }

        let (lateral, matrix): (Vec<f64>, Array2<f64>) = if volume.has_x() {
            let cube = volume.values();
            let m = Array2::from_shape_fn((volume.z().len(), volume.x().len()), |(s, c)| {
                cube[(0, c, s)]
            });
            (volume.x().to_vec(), m)
        } else if volume.has_y() {
            let cube = volume.values();
            let m = Array2::from_shape_fn((volume.z().len(), volume.y().len()), |(s, r)| {
                cube[(r, 0, s)]
            });
            (volume.y().to_vec(), m)
        } else {
            return Err(CoreError::InvalidGeometry(
                "a resist profile cannot be cut from an empty volume".into(),
            ));
        };

        let depth = volume.z().to_vec();
        let polygons = contours(&lateral, &depth, &matrix, level, true)?;

        Ok(ResistProfile {
            lateral,
            depth,
            polygons,
        })
    }

    /// Lateral sample positions of the cross-section (nm).
    pub fn lateral(&self) -> &[f64] {
        &self.lateral
    }

    /// Depth sample positions below the resist top (nm).
    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }
}
