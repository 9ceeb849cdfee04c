//! Shared descriptor types for the pluggable model contracts (mask
//! generators, source shapes, pupil filters, development-rate models).

use serde::Serialize;

use crate::error::CoreError;
use crate::Result;

/// One scalar parameter of a pluggable model: display name, default value
/// and optional bounds.
#[derive(Debug, Clone, Serialize)]
pub struct PluginParameter {
    pub name: &'static str,
    pub default: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PluginParameter {
    pub const fn new(name: &'static str, default: f64) -> Self {
        PluginParameter {
            name,
            default,
            min: None,
            max: None,
        }
    }

    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Check an argument vector against a parameter schema.
pub fn check_args(name: &str, parameters: &[PluginParameter], args: &[f64]) -> Result<()> {
    if args.len() != parameters.len() {
        return Err(CoreError::ArgumentMismatch(format!(
            "{} takes {} argument(s), got {}",
            name,
            parameters.len(),
            args.len()
        )));
    }
    Ok(())
}

/// Default argument vector of a schema.
pub fn default_args(parameters: &[PluginParameter]) -> Vec<f64> {
    parameters.iter().map(|p| p.default).collect()
}
