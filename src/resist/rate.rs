use serde::{Deserialize, Serialize};

use crate::interp::{LinearInterpolation1d, LinearInterpolation2d};
use crate::plugin::{check_args, PluginParameter};
use crate::Result;

/// Development conditions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Development {
    /// Development time (s).
    pub time: f64,
}

impl Development {
    pub fn new(time: f64) -> Self {
        Development { time }
    }
}

/// Development-rate model: an opaque expression bound to its arguments, a
/// tabulated rate over PAC, or a tabulated rate over PAC and depth.
#[derive(Debug, Clone)]
pub enum RateModel {
    Expression {
        name: &'static str,
        expression: fn(f64, f64, &[f64]) -> f64,
        args: Vec<f64>,
    },
    Sheet(LinearInterpolation1d),
    DepthSheet(LinearInterpolation2d),
}

impl RateModel {
    /// Tabulated rate over PAC.
    pub fn sheet(pac: Vec<f64>, rate: Vec<f64>) -> Result<Self> {
        Ok(RateModel::Sheet(LinearInterpolation1d::new(pac, rate, 0.0)?))
    }

    /// Tabulated rate over PAC and depth; rows of the matrix follow depth.
    pub fn depth_sheet(pac: Vec<f64>, depth: Vec<f64>, rate: ndarray::Array2<f64>) -> Result<Self> {
        Ok(RateModel::DepthSheet(LinearInterpolation2d::new(
            pac, depth, rate, 0.0,
        )?))
    }

    /// Development rate (nm/s) at a PAC fraction and depth below the resist
    /// top (nm).
    pub fn calculate(&self, pac: f64, depth: f64) -> f64 {
        match self {
            RateModel::Expression {
                expression, args, ..
            } => expression(pac, depth, args),
            RateModel::Sheet(interp) => interp.interpolate(pac),
            RateModel::DepthSheet(interp) => interp.interpolate(pac, depth),
        }
    }
}

/// A builtin rate expression with its parameter schema.
#[derive(Debug, Clone)]
pub struct RateModelPlugin {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [PluginParameter],
    pub create: fn(&[f64]) -> Result<RateModel>,
}

/// Registry of the builtin development models.
pub fn rate_model_plugins() -> Vec<RateModelPlugin> {
    vec![
        RateModelPlugin {
            name: "Mack Model",
            description: "Resist developing using the original Mack model",
            parameters: MACK_PARAMETERS,
            create: mack_rate_model,
        },
        RateModelPlugin {
            name: "Enhanced Model",
            description: "Resist developing using the enhanced Mack model",
            parameters: ENHANCED_PARAMETERS,
            create: enhanced_mack_rate_model,
        },
        RateModelPlugin {
            name: "Notch Model",
            description: "Resist developing using the notch model",
            parameters: NOTCH_PARAMETERS,
            create: notch_rate_model,
        },
        RateModelPlugin {
            name: "Notch Model with Depth Dependence",
            description: "Notch model with exponential depth inhibition",
            parameters: NOTCH_DEPTH_PARAMETERS,
            create: notch_depth_rate_model,
        },
    ]
}

static MACK_PARAMETERS: &[PluginParameter] = &[
    PluginParameter::new("Development Rmax (nm/s)", 100.0).with_min(0.0),
    PluginParameter::new("Development Rmin (nm/s)", 0.5).with_min(0.0),
    PluginParameter::new("Development Mth", 0.5).with_max(1.0),
    PluginParameter::new("Development n", 2.0).with_min(1.0),
];

fn mack_expr(pac: f64, _depth: f64, args: &[f64]) -> f64 {
    let (rmax, rmin, mth, n) = (args[0], args[1], args[2], args[3]);
    let a = (n + 1.0) / (n - 1.0) * (1.0 - mth).powf(n);
    let p = (1.0 - pac).powf(n);
    rmax * (a + 1.0) * p / (a + p) + rmin
}

pub fn mack_rate_model(args: &[f64]) -> Result<RateModel> {
    check_args("Mack Model", MACK_PARAMETERS, args)?;
    Ok(RateModel::Expression {
        name: "Mack Model",
        expression: mack_expr,
        args: args.to_vec(),
    })
}

static ENHANCED_PARAMETERS: &[PluginParameter] = &[
    PluginParameter::new("Development Rmax (nm/s)", 100.0).with_min(0.0),
    PluginParameter::new("Development Rmin (nm/s)", 0.5).with_min(0.0),
    PluginParameter::new("Development Rresin (nm/s)", 10.0).with_min(0.0),
    PluginParameter::new("Development n", 4.0).with_min(1.0),
    PluginParameter::new("Development l", 20.0).with_min(0.0),
];

fn enhanced_expr(pac: f64, _depth: f64, args: &[f64]) -> f64 {
    let (rmax, rmin, rresin, n, l) = (args[0], args[1], args[2], args[3], args[4]);
    let k_inhibit = rresin / rmin - 1.0;
    let k_enhance = rmax / rresin - 1.0;
    rresin * (1.0 + k_enhance * (1.0 - pac).powf(n)) / (1.0 + k_inhibit * pac.powf(l))
}

pub fn enhanced_mack_rate_model(args: &[f64]) -> Result<RateModel> {
    check_args("Enhanced Model", ENHANCED_PARAMETERS, args)?;
    Ok(RateModel::Expression {
        name: "Enhanced Model",
        expression: enhanced_expr,
        args: args.to_vec(),
    })
}

static NOTCH_PARAMETERS: &[PluginParameter] = &[
    PluginParameter::new("Development Rmax (nm/s)", 100.0).with_min(0.0),
    PluginParameter::new("Development Rmin (nm/s)", 0.5).with_min(0.0),
    PluginParameter::new("Development n", 1.5).with_min(1.0),
    PluginParameter::new("Development Notch Mth", 0.5).with_max(1.0),
    PluginParameter::new("Development Notch n", 10.0).with_min(1.0),
];

fn notch_expr(pac: f64, _depth: f64, args: &[f64]) -> f64 {
    let (rmax, rmin, n, mth_notch, n_notch) = (args[0], args[1], args[2], args[3], args[4]);
    let c = (n_notch + 1.0) / (n_notch - 1.0) * (1.0 - mth_notch).powf(n_notch);
    let p = (1.0 - pac).powf(n_notch);
    let k = p * (c + 1.0) / (c + p);
    rmax * (1.0 - pac).powf(n) * k + rmin
}

pub fn notch_rate_model(args: &[f64]) -> Result<RateModel> {
    check_args("Notch Model", NOTCH_PARAMETERS, args)?;
    Ok(RateModel::Expression {
        name: "Notch Model",
        expression: notch_expr,
        args: args.to_vec(),
    })
}

static NOTCH_DEPTH_PARAMETERS: &[PluginParameter] = &[
    PluginParameter::new("Development Rmax (nm/s)", 100.0).with_min(0.0),
    PluginParameter::new("Development Rmin (nm/s)", 0.5).with_min(0.0),
    PluginParameter::new("Development n", 1.5).with_min(1.0),
    PluginParameter::new("Development Notch Mth", 0.5).with_max(1.0),
    PluginParameter::new("Development Notch n", 10.0).with_min(1.0),
    PluginParameter::new("Depth inhibition", 0.5).with_min(0.0).with_max(1.0),
];

fn notch_depth_expr(pac: f64, depth: f64, args: &[f64]) -> f64 {
    notch_expr(pac, depth, &args[..5]) * (-args[5] * depth).exp()
}

pub fn notch_depth_rate_model(args: &[f64]) -> Result<RateModel> {
    check_args("Notch Model with Depth Dependence", NOTCH_DEPTH_PARAMETERS, args)?;
    Ok(RateModel::Expression {
        name: "Notch Model with Depth Dependence",
        expression: notch_depth_expr,
        args: args.to_vec(),
    })
}
