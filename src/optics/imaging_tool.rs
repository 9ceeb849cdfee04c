use std::sync::Arc;

use ndarray::Array3;
use num_complex::Complex64;

use crate::config::AIR_REFRACTION;

use super::pupil::PupilFilterModel;
use super::source_shape::SourceShape;

/// The projection system: illuminator, pupil filter and the scalar scanner
/// parameters.
#[derive(Debug, Clone)]
pub struct ImagingTool {
    source_shape: Arc<SourceShape>,
    pupil_filter: PupilFilterModel,
    pub wavelength: f64,
    pub numeric_aperture: f64,
    reduction_ratio: f64,
    squared_reduction_ratio: f64,
    flare: f64,
    immersion: f64,
}

impl ImagingTool {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        source_shape: SourceShape,
        pupil_filter: PupilFilterModel,
        wavelength: f64,
        numeric_aperture: f64,
        reduction_ratio: f64,
        flare: f64,
        immersion: f64,
    ) -> Self {
        ImagingTool {
            source_shape: Arc::new(source_shape),
            pupil_filter,
            wavelength,
            numeric_aperture,
            reduction_ratio,
            squared_reduction_ratio: reduction_ratio * reduction_ratio,
            flare,
            immersion,
        }
    }

    pub fn source_shape(&self) -> &SourceShape {
        &self.source_shape
    }

    /// Shared read-only handle on the illuminator grid.
    pub fn share_source(&self) -> Arc<SourceShape> {
        Arc::clone(&self.source_shape)
    }

    pub fn reduction_ratio(&self) -> f64 {
        self.reduction_ratio
    }

    pub fn flare(&self) -> f64 {
        self.flare
    }

    pub fn immersion(&self) -> f64 {
        self.immersion
    }

    /// Pupil filter value at the given direction cosines.
    pub fn filter(&self, cx: f64, cy: f64) -> Complex64 {
        self.pupil_filter.calculate(cx, cy)
    }

    /// Reduction-correction amplitude
    /// ((1 - c^2/R^2) / (1 - c^2/n_env^2))^(1/4).
    pub fn reduction(&self, cx: f64, cy: f64, environment_refraction: Complex64) -> f64 {
        let cxy2 = cx * cx + cy * cy;
        let n_env2 = environment_refraction.norm() * environment_refraction.norm();
        ((1.0 - cxy2 / self.squared_reduction_ratio) / (1.0 - cxy2 / n_env2)).powf(0.25)
    }

    /// Reduction amplitude against the default air environment.
    pub fn reduction_in_air(&self, cx: f64, cy: f64) -> f64 {
        self.reduction(cx, cy, AIR_REFRACTION)
    }

    /// Stray-light correction applied in place: I' = f + (1 - f) * I.
    pub fn apply_flare(&self, intensity: &mut Array3<f64>) {
        if self.flare != 0.0 {
            intensity.mapv_inplace(|v| self.flare + (1.0 - self.flare) * v);
        }
    }
}
