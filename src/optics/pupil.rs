use num_complex::Complex64;

use crate::config::{round_to, DIRECTION_COSINE_PRECISION};
use crate::interp::LinearInterpolation2d;
use crate::plugin::{check_args, PluginParameter};
use crate::Result;

/// Pupil apodisation/phase model: unity, an opaque complex expression, or a
/// tabulated complex sheet (stored as two real interpolations).
#[derive(Debug, Clone)]
pub enum PupilFilterModel {
    Empty,
    Expression {
        name: &'static str,
        expression: fn(f64, f64, &[f64]) -> Complex64,
        args: Vec<f64>,
    },
    Sheet {
        real: LinearInterpolation2d,
        imag: LinearInterpolation2d,
    },
}

impl PupilFilterModel {
    /// Sheet model from a complex coefficient grid.
    pub fn sheet(
        sx: Vec<f64>,
        sy: Vec<f64>,
        coefficients: &ndarray::Array2<Complex64>,
    ) -> Result<Self> {
        let real = coefficients.mapv(|v| v.re);
        let imag = coefficients.mapv(|v| v.im);
        Ok(PupilFilterModel::Sheet {
            real: LinearInterpolation2d::new(sx.clone(), sy.clone(), real, 0.0)?,
            imag: LinearInterpolation2d::new(sx, sy, imag, 0.0)?,
        })
    }

    pub fn calculate(&self, sx: f64, sy: f64) -> Complex64 {
        match self {
            PupilFilterModel::Empty => Complex64::new(1.0, 0.0),
            PupilFilterModel::Expression {
                expression, args, ..
            } => expression(sx, sy, args),
            PupilFilterModel::Sheet { real, imag } => {
                Complex64::new(real.interpolate(sx, sy), imag.interpolate(sx, sy))
            }
        }
    }
}

/// A builtin pupil-filter expression with its parameter schema.
#[derive(Debug, Clone)]
pub struct PupilFilterPlugin {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [PluginParameter],
    pub create: fn(&[f64]) -> Result<PupilFilterModel>,
}

/// Registry of the builtin pupil filters.
pub fn pupil_filter_plugins() -> Vec<PupilFilterPlugin> {
    vec![PupilFilterPlugin {
        name: "Central Obscuration",
        description: "Ideal central pupil zone obscuration",
        parameters: CENTRAL_OBSCURATION_PARAMETERS,
        create: central_obscuration,
    }]
}

static CENTRAL_OBSCURATION_PARAMETERS: &[PluginParameter] =
    &[PluginParameter::new("Radius", 0.1).with_min(0.0).with_max(1.0)];

fn central_obscuration_expr(sx: f64, sy: f64, args: &[f64]) -> Complex64 {
    let xr = round_to(sx, DIRECTION_COSINE_PRECISION);
    let yr = round_to(sy, DIRECTION_COSINE_PRECISION);
    let open = xr * xr + yr * yr > args[0] * args[0];
    Complex64::new(open as u8 as f64, 0.0)
}

/// Opaque disc in the middle of the pupil.
pub fn central_obscuration(args: &[f64]) -> Result<PupilFilterModel> {
    check_args("Central Obscuration", CENTRAL_OBSCURATION_PARAMETERS, args)?;
    Ok(PupilFilterModel::Expression {
        name: "Central Obscuration",
        expression: central_obscuration_expr,
        args: args.to_vec(),
    })
}
