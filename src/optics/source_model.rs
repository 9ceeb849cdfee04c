use crate::config::{round_to, DIRECTION_COSINE_PRECISION};
use crate::interp::LinearInterpolation2d;
use crate::plugin::{check_args, PluginParameter};
use crate::Result;

/// Illuminator intensity model over the NA-normalized direction-cosine
/// plane: an opaque expression bound to its arguments or a tabulated sheet.
#[derive(Debug, Clone)]
pub enum SourceShapeModel {
    Expression {
        name: &'static str,
        expression: fn(f64, f64, &[f64]) -> f64,
        args: Vec<f64>,
    },
    Sheet(LinearInterpolation2d),
}

impl SourceShapeModel {
    /// Tabulated intensity over the direction-cosine plane; rows of the
    /// matrix follow sy.
    pub fn sheet(sx: Vec<f64>, sy: Vec<f64>, intensity: ndarray::Array2<f64>) -> Result<Self> {
        Ok(SourceShapeModel::Sheet(LinearInterpolation2d::new(
            sx, sy, intensity, 0.0,
        )?))
    }

    pub fn calculate(&self, sx: f64, sy: f64) -> f64 {
        match self {
            SourceShapeModel::Expression {
                expression, args, ..
            } => expression(sx, sy, args),
            SourceShapeModel::Sheet(interp) => interp.interpolate(sx, sy),
        }
    }
}

/// A builtin source-shape expression with its parameter schema.
#[derive(Debug, Clone)]
pub struct SourceShapePlugin {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [PluginParameter],
    pub create: fn(&[f64]) -> Result<SourceShapeModel>,
}

/// Registry of the builtin source shapes.
pub fn source_shape_plugins() -> Vec<SourceShapePlugin> {
    vec![
        SourceShapePlugin {
            name: "Coherent",
            description: "Ideal fully spatially coherent source",
            parameters: COHERENT_PARAMETERS,
            create: coherent,
        },
        SourceShapePlugin {
            name: "Conventional",
            description: "Ideal circular partially coherent source",
            parameters: CONVENTIONAL_PARAMETERS,
            create: conventional,
        },
        SourceShapePlugin {
            name: "Annular",
            description: "Ideal annular source",
            parameters: ANNULAR_PARAMETERS,
            create: annular,
        },
    ]
}

fn squared_distance(x: f64, y: f64) -> f64 {
    let xr = round_to(x, DIRECTION_COSINE_PRECISION);
    let yr = round_to(y, DIRECTION_COSINE_PRECISION);
    xr * xr + yr * yr
}

static COHERENT_PARAMETERS: &[PluginParameter] = &[
    PluginParameter::new("Tilt X", 0.0).with_min(-1.0).with_max(1.0),
    PluginParameter::new("Tilt Y", 0.0).with_min(-1.0).with_max(1.0),
];

fn coherent_expr(sx: f64, sy: f64, args: &[f64]) -> f64 {
    let on_tilt = round_to(sx, DIRECTION_COSINE_PRECISION)
        == round_to(args[0], DIRECTION_COSINE_PRECISION)
        && round_to(sy, DIRECTION_COSINE_PRECISION)
            == round_to(args[1], DIRECTION_COSINE_PRECISION);
    on_tilt as u8 as f64
}

/// Single source point, optionally tilted off axis.
pub fn coherent(args: &[f64]) -> Result<SourceShapeModel> {
    check_args("Coherent", COHERENT_PARAMETERS, args)?;
    Ok(SourceShapeModel::Expression {
        name: "Coherent",
        expression: coherent_expr,
        args: args.to_vec(),
    })
}

static CONVENTIONAL_PARAMETERS: &[PluginParameter] =
    &[PluginParameter::new("Sigma", 0.5).with_min(0.0).with_max(1.0)];

fn conventional_expr(sx: f64, sy: f64, args: &[f64]) -> f64 {
    (squared_distance(sx, sy) <= args[0] * args[0]) as u8 as f64
}

/// Uniform disc of partial coherence sigma.
pub fn conventional(args: &[f64]) -> Result<SourceShapeModel> {
    check_args("Conventional", CONVENTIONAL_PARAMETERS, args)?;
    Ok(SourceShapeModel::Expression {
        name: "Conventional",
        expression: conventional_expr,
        args: args.to_vec(),
    })
}

static ANNULAR_PARAMETERS: &[PluginParameter] = &[
    PluginParameter::new("Sigma Inner", 0.3).with_min(0.0).with_max(1.0),
    PluginParameter::new("Sigma Outer", 0.8).with_min(0.0).with_max(1.0),
];

fn annular_expr(sx: f64, sy: f64, args: &[f64]) -> f64 {
    let sxy = squared_distance(sx, sy);
    (sxy >= args[0] * args[0] && sxy <= args[1] * args[1]) as u8 as f64
}

/// Uniform ring between the inner and outer sigma.
pub fn annular(args: &[f64]) -> Result<SourceShapeModel> {
    check_args("Annular", ANNULAR_PARAMETERS, args)?;
    Ok(SourceShapeModel::Expression {
        name: "Annular",
        expression: annular_expr,
        args: args.to_vec(),
    })
}
