use ndarray::Array3;

use crate::geometry::Rectangle;

/// Which axes of a volume carry more than one sample, encoded as the bit
/// pattern (z, y, x).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeAxes {
    X1d = 0b001,
    Y1d = 0b010,
    Xy2d = 0b011,
    Xz2d = 0b101,
    Yz2d = 0b110,
    Xyz3d = 0b111,
    None = 0b000,
}

/// A scalar field sampled over one pitch cell of the mask and the resist
/// depth, addressed as (row, col, slice) = (y, x, z).
///
/// Lateral sample counts are kept odd so the pattern center falls on a
/// sample; the vertical step exactly tiles the resist thickness. The z
/// vector holds the depth below the resist top, so the LAST slice is the
/// top surface.
#[derive(Debug, Clone)]
pub struct ResistVolume {
    boundary: Rectangle,
    thickness: f64,
    stepx: f64,
    stepy: f64,
    stepz: f64,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    values: Array3<f64>,
}

/// Lateral step: the desired step shrunk so an odd sample count spans the
/// pitch exactly.
fn calc_lateral_step(pitch: f64, desired_step: f64) -> f64 {
    if pitch == 0.0 || desired_step == 0.0 {
        0.0
    } else {
        let mut n = (pitch / desired_step).ceil() as i64;
        if pitch / (n - 1) as f64 > desired_step {
            n += if n % 2 != 0 { 2 } else { 1 };
        }
        pitch / (n - 1) as f64
    }
}

/// Vertical step: the desired step shrunk so a whole number of steps tiles
/// the thickness.
fn calc_normal_step(thickness: f64, desired_step: f64) -> f64 {
    if thickness == 0.0 || desired_step == 0.0 {
        0.0
    } else {
        let tmp = thickness / desired_step;
        if tmp - tmp.round() != 0.0 {
            thickness / (tmp + 1.0).ceil()
        } else {
            desired_step
        }
    }
}

fn get_count(size: f64, step: f64, offset: usize) -> usize {
    if size == 0.0 || step == 0.0 {
        1
    } else {
        // The step was derived from the size, so the ratio sits on an
        // integer up to rounding; snap before taking the ceiling.
        let ratio = size / step;
        let count = if (ratio - ratio.round()).abs() < 1e-9 {
            ratio.round()
        } else {
            ratio.ceil()
        };
        count as usize + offset
    }
}

fn init_axis(count: usize, start: f64, step: f64) -> Vec<f64> {
    (0..count).map(|k| k as f64 * step + start).collect()
}

impl ResistVolume {
    /// Volume through the resist depth (image in resist, latent image,
    /// development rates).
    pub fn new(boundary: &Rectangle, thickness: f64, desired_stepxy: f64, desired_stepz: f64) -> Self {
        let sizes = boundary.sizes();

        let stepx = calc_lateral_step(sizes.x, desired_stepxy);
        let stepy = calc_lateral_step(sizes.y, desired_stepxy);
        let stepz = calc_normal_step(thickness, desired_stepz);

        let rows = get_count(sizes.y, stepy, 1);
        let cols = get_count(sizes.x, stepx, 1);
        let mut slices = get_count(thickness, stepz, 0);
        if slices != 1 {
            slices += 1;
        }

        let lb = boundary.left_bottom();
        ResistVolume {
            boundary: boundary.clone(),
            thickness,
            stepx,
            stepy,
            stepz,
            x: init_axis(cols, lb.x, stepx),
            y: init_axis(rows, lb.y, stepy),
            z: init_axis(slices, thickness, -stepz),
            values: Array3::zeros((rows, cols, slices)),
        }
    }

    /// Single-slice volume at the resist top (aerial image).
    pub fn surface(boundary: &Rectangle, desired_step: f64) -> Self {
        ResistVolume::new(boundary, 0.0, desired_step, 0.0)
    }

    /// Fresh zero-filled volume with the same sampling.
    pub fn like(other: &ResistVolume) -> Self {
        ResistVolume {
            boundary: other.boundary.clone(),
            thickness: other.thickness,
            stepx: other.stepx,
            stepy: other.stepy,
            stepz: other.stepz,
            x: other.x.clone(),
            y: other.y.clone(),
            z: other.z.clone(),
            values: Array3::zeros(other.values.dim()),
        }
    }

    pub fn boundary(&self) -> &Rectangle {
        &self.boundary
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Depth below the resist top per slice; z[n-1] = 0 is the surface.
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    pub fn stepx(&self) -> f64 {
        self.stepx
    }

    pub fn stepy(&self) -> f64 {
        self.stepy
    }

    pub fn stepz(&self) -> f64 {
        self.stepz
    }

    pub fn has_x(&self) -> bool {
        self.x.len() > 1
    }

    pub fn has_y(&self) -> bool {
        self.y.len() > 1
    }

    pub fn has_z(&self) -> bool {
        self.z.len() > 1
    }

    pub fn axes(&self) -> VolumeAxes {
        let code = ((self.has_z() as u8) << 2) | ((self.has_y() as u8) << 1) | self.has_x() as u8;
        match code {
            0b001 => VolumeAxes::X1d,
            0b010 => VolumeAxes::Y1d,
            0b011 => VolumeAxes::Xy2d,
            0b101 => VolumeAxes::Xz2d,
            0b110 => VolumeAxes::Yz2d,
            0b111 => VolumeAxes::Xyz3d,
            _ => VolumeAxes::None,
        }
    }

    pub fn values(&self) -> &Array3<f64> {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut Array3<f64> {
        &mut self.values
    }
}
