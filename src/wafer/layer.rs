use std::f64::consts::PI;

use num_complex::Complex64;

use crate::interp::LinearInterpolation1d;
use crate::resist::{ExposureResistModel, PebResistModel, RateModel};
use crate::Result;

/// Role of a film inside the wafer stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Environment,
    Resist,
    Material,
    Substrate,
}

/// Complex refractive index source: a constant or a pair of tables over
/// wavelength interpolated linearly.
#[derive(Debug, Clone)]
pub enum Refraction {
    Constant(Complex64),
    Table {
        real: LinearInterpolation1d,
        imag: LinearInterpolation1d,
    },
}

impl Refraction {
    pub fn table(wavelength: Vec<f64>, real: Vec<f64>, imag: Vec<f64>) -> Result<Self> {
        Ok(Refraction::Table {
            real: LinearInterpolation1d::new(wavelength.clone(), real, f64::NAN)?,
            imag: LinearInterpolation1d::new(wavelength, imag, f64::NAN)?,
        })
    }

    pub fn at(&self, wavelength: f64) -> Complex64 {
        match self {
            Refraction::Constant(nk) => *nk,
            Refraction::Table { real, imag } => {
                Complex64::new(real.interpolate(wavelength), imag.interpolate(wavelength))
            }
        }
    }
}

/// The resist film: thickness plus the chemistry models the pipeline needs.
#[derive(Debug, Clone)]
pub struct ResistLayer {
    pub thickness: f64,
    pub exposure: ExposureResistModel,
    pub peb: PebResistModel,
    pub rate: RateModel,
}

impl ResistLayer {
    pub fn new(
        thickness: f64,
        exposure: ExposureResistModel,
        peb: PebResistModel,
        rate: RateModel,
    ) -> Self {
        ResistLayer {
            thickness,
            exposure,
            peb,
            rate,
        }
    }
}

/// One film of the wafer stack. The environment has no thickness; the
/// resist's complex index follows its Dill model.
#[derive(Debug, Clone)]
pub enum WaferLayer {
    Environment { refraction: Refraction },
    Material { thickness: f64, refraction: Refraction },
    Substrate { refraction: Refraction },
    Resist(ResistLayer),
}

impl WaferLayer {
    pub fn environment(refraction: Refraction) -> Self {
        WaferLayer::Environment { refraction }
    }

    pub fn material(thickness: f64, refraction: Refraction) -> Self {
        WaferLayer::Material {
            thickness,
            refraction,
        }
    }

    pub fn substrate(refraction: Refraction) -> Self {
        WaferLayer::Substrate { refraction }
    }

    pub fn kind(&self) -> LayerKind {
        match self {
            WaferLayer::Environment { .. } => LayerKind::Environment,
            WaferLayer::Material { .. } => LayerKind::Material,
            WaferLayer::Substrate { .. } => LayerKind::Substrate,
            WaferLayer::Resist(_) => LayerKind::Resist,
        }
    }

    pub fn is_environment(&self) -> bool {
        self.kind() == LayerKind::Environment
    }

    pub fn is_resist(&self) -> bool {
        self.kind() == LayerKind::Resist
    }

    pub fn is_material(&self) -> bool {
        self.kind() == LayerKind::Material
    }

    pub fn is_substrate(&self) -> bool {
        self.kind() == LayerKind::Substrate
    }

    /// Film thickness; NaN for the unbounded environment and substrate.
    pub fn thickness(&self) -> f64 {
        match self {
            WaferLayer::Material { thickness, .. } => *thickness,
            WaferLayer::Resist(resist) => resist.thickness,
            _ => f64::NAN,
        }
    }

    /// Complex refractive index. `m` is the PAC fraction and only affects
    /// the resist layer.
    pub fn refraction(&self, wavelength: f64, m: f64) -> Complex64 {
        match self {
            WaferLayer::Environment { refraction }
            | WaferLayer::Material { refraction, .. }
            | WaferLayer::Substrate { refraction } => refraction.at(wavelength),
            WaferLayer::Resist(resist) => resist.exposure.refraction(m),
        }
    }

    /// Refraction projected on the propagation direction inside the layer.
    pub fn effective_refraction(&self, incident_angle: Complex64, wavelength: f64) -> Complex64 {
        incident_angle.cos() * self.refraction(wavelength, 1.0)
    }

    /// Phase accumulated by a normal pass through the film, raised to
    /// `power` (2.0 for a round trip). Valid only for the zero order.
    pub fn internal_transmit_power(&self, wavelength: f64, power: f64) -> Complex64 {
        let phase = Complex64::i() * 2.0 * PI * self.refraction(wavelength, 1.0)
            * self.thickness()
            / wavelength
            * power;
        phase.exp()
    }

    /// Phase accumulated over a depth `dz` along an oblique direction.
    pub fn internal_transmit(
        &self,
        incident_angle: Complex64,
        dz: f64,
        wavelength: f64,
    ) -> Complex64 {
        let phase = Complex64::i() * 2.0 * PI
            * self.effective_refraction(incident_angle, wavelength)
            * dz
            / wavelength;
        phase.exp()
    }
}
