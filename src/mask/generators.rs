use crate::geometry::Point2d;
use crate::plugin::{check_args, PluginParameter};
use crate::Result;

use super::layout::Mask;
use super::region::{Boundary, Region};

/// A builtin mask generator: a parameter schema plus a constructor that
/// fills the boundary and the ordered region list.
#[derive(Debug, Clone)]
pub struct MaskGenerator {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [PluginParameter],
    pub create: fn(&[f64]) -> Result<Mask>,
}

/// Registry of the builtin generators.
pub fn mask_generators() -> Vec<MaskGenerator> {
    vec![
        MaskGenerator {
            name: "1D Binary - Line",
            description: "One dimensional binary line feature",
            parameters: LINE_1D_PARAMETERS,
            create: line_1d,
        },
        MaskGenerator {
            name: "1D Binary - Line with SRAFs",
            description: "One dimensional binary line with scattering bars",
            parameters: LINE_1D_SRAF_PARAMETERS,
            create: line_1d_sraf,
        },
        MaskGenerator {
            name: "2D Binary - Five Bar Line",
            description: "Five vertical lines test structure",
            parameters: FIVE_BAR_LINE_PARAMETERS,
            create: five_bar_line,
        },
    ]
}

static LINE_1D_PARAMETERS: &[PluginParameter] = &[
    PluginParameter::new("Feature Width (nm)", 250.0).with_min(0.0),
    PluginParameter::new("Pitch (nm)", 800.0).with_min(0.0),
];

/// Binary line: a dark feature centered in a clear pitch cell.
pub fn line_1d(args: &[f64]) -> Result<Mask> {
    check_args("1D Binary - Line", LINE_1D_PARAMETERS, args)?;
    let feature_width = args[0];
    let pitch = args[1];

    let boundary = Boundary::new(
        Point2d::new(-pitch / 2.0, 0.0),
        Point2d::new(pitch / 2.0, 0.0),
        1.0,
        0.0,
    );
    let line = Region::new(
        &[
            Point2d::new(-feature_width / 2.0, 0.0),
            Point2d::new(feature_width / 2.0, 0.0),
        ],
        0.0,
        0.0,
    )?;

    Mask::new(vec![line], boundary)
}

static LINE_1D_SRAF_PARAMETERS: &[PluginParameter] = &[
    PluginParameter::new("Feature Width (nm)", 250.0).with_min(0.0),
    PluginParameter::new("Pitch (nm)", 1200.0).with_min(0.0),
    PluginParameter::new("Number of SRAFs", 2.0).with_min(0.0),
    PluginParameter::new("SRAF Size (nm)", 60.0).with_min(0.0),
    PluginParameter::new("SRAF Space to Main (nm)", 150.0).with_min(0.0),
    PluginParameter::new("SRAF Space to SRAF (nm)", 100.0).with_min(0.0),
];

/// Binary line flanked by sub-resolution assist features. An odd assist
/// count is rounded up so the layout stays symmetric.
pub fn line_1d_sraf(args: &[f64]) -> Result<Mask> {
    check_args("1D Binary - Line with SRAFs", LINE_1D_SRAF_PARAMETERS, args)?;
    let feature_width = args[0];
    let pitch = args[1];
    let number_of_srafs = args[2] as usize;
    let sraf_size = args[3];
    let space_to_main = args[4];
    let space_to_sraf = args[5];

    let pairs = number_of_srafs.div_ceil(2);

    let dark_segment = |x0: f64, x1: f64| {
        Region::new(&[Point2d::new(x0, 0.0), Point2d::new(x1, 0.0)], 0.0, 0.0)
    };

    let mut regions = vec![dark_segment(-feature_width / 2.0, feature_width / 2.0)?];
    for k in 0..pairs {
        let x0 = feature_width / 2.0 + space_to_main + k as f64 * (sraf_size + space_to_sraf);
        regions.push(dark_segment(x0, x0 + sraf_size)?);
        regions.push(dark_segment(-x0 - sraf_size, -x0)?);
    }

    let boundary = Boundary::new(
        Point2d::new(-pitch / 2.0, 0.0),
        Point2d::new(pitch / 2.0, 0.0),
        1.0,
        0.0,
    );
    Mask::new(regions, boundary)
}

static FIVE_BAR_LINE_PARAMETERS: &[PluginParameter] = &[
    PluginParameter::new("Feature Width (nm)", 250.0).with_min(0.0),
    PluginParameter::new("Feature Space (nm)", 250.0).with_min(0.0),
    PluginParameter::new("Pitch X (nm)", 3000.0).with_min(0.0),
    PluginParameter::new("Pitch Y (nm)", 3000.0).with_min(0.0),
];

const FIVE_BAR_X_OFFSET: f64 = 100.0;
const FIVE_BAR_Y_OFFSET: f64 = 500.0;

fn dark_rectangle(x: f64, y: f64, width: f64, height: f64) -> Result<Region> {
    Region::new(
        &[
            Point2d::new(x, y),
            Point2d::new(x, y + height),
            Point2d::new(x + width, y + height),
            Point2d::new(x + width, y),
        ],
        0.0,
        0.0,
    )
}

/// Five-bar test structure: one full-height line in the middle, two pairs
/// of half-height bars beside it. The x pitch grows if the bars do not fit.
pub fn five_bar_line(args: &[f64]) -> Result<Mask> {
    check_args("2D Binary - Five Bar Line", FIVE_BAR_LINE_PARAMETERS, args)?;
    let feature_width = args[0];
    let feature_space = args[1];
    let mut pitch_x = args[2];
    let pitch_y = args[3];

    let total_x = 5.0 * (feature_width + feature_space) + FIVE_BAR_X_OFFSET;
    if pitch_x < total_x {
        pitch_x = total_x;
    }

    let y0 = FIVE_BAR_Y_OFFSET - pitch_y / 2.0;
    let y1 = pitch_y / 2.0 - FIVE_BAR_Y_OFFSET;

    let mut regions = vec![dark_rectangle(-feature_width / 2.0, y0, feature_width, y1 - y0)?];

    for k in 0..2 {
        let x0 = feature_width / 2.0 + feature_space + k as f64 * (feature_width + feature_space);
        regions.push(dark_rectangle(x0, y0, feature_width, -y0)?);
        regions.push(dark_rectangle(-x0 - feature_width, y0, feature_width, -y0)?);
    }

    let boundary = Boundary::new(
        Point2d::new(-pitch_x / 2.0, -pitch_y / 2.0),
        Point2d::new(pitch_x / 2.0, pitch_y / 2.0),
        1.0,
        0.0,
    );
    Mask::new(regions, boundary)
}
