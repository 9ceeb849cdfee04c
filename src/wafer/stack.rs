use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use num_complex::Complex64;

use crate::error::CoreError;
use crate::Result;

use super::layer::{ResistLayer, WaferLayer};

type ReflectionCache = RefCell<HashMap<(u64, u64), Vec<Complex64>>>;

/// Ordered film stack from the environment (index 0) down to the substrate.
///
/// Layers are pushed bottom-up: substrate first, environment last. The two
/// effective-reflection caches are keyed by the direction cosines and hold
/// for a single wavelength; a query at a different wavelength clears both.
#[derive(Debug)]
pub struct WaferStack {
    layers: Vec<WaferLayer>,
    cached_top_reflections: ReflectionCache,
    cached_bottom_reflections: ReflectionCache,
    cached_wavelength: Cell<f64>,
}

fn reflection(top: Complex64, bottom: Complex64) -> Complex64 {
    (top - bottom) / (top + bottom)
}

fn transmittance(top: Complex64, bottom: Complex64) -> Complex64 {
    2.0 * top / (top + bottom)
}

/// Snell propagation of a (complex) incidence angle across an interface.
fn refraction_angle(incident: Complex64, top: Complex64, bottom: Complex64) -> Complex64 {
    (top / bottom * incident.sin()).asin()
}

impl WaferStack {
    pub fn new() -> Self {
        WaferStack {
            layers: Vec::new(),
            cached_top_reflections: RefCell::new(HashMap::new()),
            cached_bottom_reflections: RefCell::new(HashMap::new()),
            cached_wavelength: Cell::new(-1.0),
        }
    }

    pub fn from_layers(layers: Vec<WaferLayer>) -> Result<Self> {
        let mut stack = WaferStack::new();
        for layer in layers {
            stack.push(layer)?;
        }
        Ok(stack)
    }

    /// Add a layer on top of the stack.
    pub fn push(&mut self, layer: WaferLayer) -> Result<()> {
        if self.environment().is_some() {
            return Err(CoreError::WaferStackInvariant(
                "no layer can be added after the environment layer".into(),
            ));
        }
        if self.resist().is_some() {
            if layer.is_resist() {
                return Err(CoreError::WaferStackInvariant(
                    "the stack already holds a resist layer".into(),
                ));
            }
            if !layer.is_environment() {
                return Err(CoreError::WaferStackInvariant(
                    "a material layer on top of the resist is not allowed".into(),
                ));
            }
        }
        if self.layers.is_empty() && !layer.is_substrate() {
            return Err(CoreError::WaferStackInvariant(
                "the first layer must be the substrate".into(),
            ));
        }

        self.layers.insert(0, layer);
        Ok(())
    }

    /// The stack can drive a full simulation: environment, resist and
    /// substrate are all present.
    pub fn is_ok(&self) -> bool {
        self.environment().is_some() && self.resist().is_some() && self.substrate().is_some()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layer access with circular (and negative) indexing: -1 is the
    /// substrate.
    pub fn layer(&self, index: i32) -> &WaferLayer {
        let n = self.layers.len() as i32;
        &self.layers[((n + index % n) % n) as usize]
    }

    pub fn layers(&self) -> &[WaferLayer] {
        &self.layers
    }

    pub fn environment(&self) -> Option<&WaferLayer> {
        self.layers.first().filter(|l| l.is_environment())
    }

    pub fn resist(&self) -> Option<&ResistLayer> {
        self.layers.iter().find_map(|l| match l {
            WaferLayer::Resist(resist) => Some(resist),
            _ => None,
        })
    }

    pub fn resist_layer(&self) -> Option<&WaferLayer> {
        self.layers.iter().find(|l| l.is_resist())
    }

    pub fn substrate(&self) -> Option<&WaferLayer> {
        self.layers.last().filter(|l| l.is_substrate())
    }

    /// Effective per-layer refractive indexes along the refracted ray.
    fn refractive_indexes(&self, cxy: f64, wavelength: f64) -> Vec<Complex64> {
        let mut indexes = Vec::with_capacity(self.layers.len());

        let mut angle = Complex64::new(cxy, 0.0).asin();
        indexes.push(self.layers[0].effective_refraction(angle, wavelength));
        for k in 1..self.layers.len() {
            let top = self.layers[k - 1].refraction(wavelength, 1.0);
            let bottom = self.layers[k].refraction(wavelength, 1.0);
            angle = refraction_angle(angle, top, bottom);
            indexes.push(self.layers[k].effective_refraction(angle, wavelength));
        }

        indexes
    }

    /// Effective reflection looking down from each interface, folding in
    /// every layer above it.
    fn calc_effective_top_reflections(&self, cxy: f64, wavelength: f64) -> Vec<Complex64> {
        let n = self.refractive_indexes(cxy, wavelength);
        let count = self.layers.len();
        let mut reflections = vec![Complex64::new(0.0, 0.0); count];

        reflections[0] = reflection(n[0], n[1]);
        for k in 1..count - 1 {
            let v = reflections[k - 1] * self.layers[k].internal_transmit_power(wavelength, 2.0);
            let y = (1.0 + v) / (1.0 - v);
            reflections[k] = (n[k] * y - n[k + 1]) / (n[k] * y + n[k + 1]);
        }

        reflections
    }

    /// Effective reflection looking down at each interface, folding in
    /// every layer below it.
    fn calc_effective_bottom_reflections(&self, cxy: f64, wavelength: f64) -> Vec<Complex64> {
        let n = self.refractive_indexes(cxy, wavelength);
        let count = self.layers.len();
        let mut reflections = vec![Complex64::new(0.0, 0.0); count];

        let bottom = count - 1;
        reflections[bottom - 1] = reflection(n[bottom - 1], n[bottom]);

        for k in (1..bottom.saturating_sub(1)).rev() {
            let v = reflections[k + 1] * self.layers[k + 1].internal_transmit_power(wavelength, 2.0);
            let x = (1.0 - v) / (1.0 + v);
            reflections[k] = (n[k] - x * n[k + 1]) / (n[k] + x * n[k + 1]);
        }

        reflections[0] = reflection(n[0], n[1]);
        reflections
    }

    fn invalidate_on_wavelength_change(&self, wavelength: f64) {
        if self.cached_wavelength.get() != wavelength {
            self.cached_top_reflections.borrow_mut().clear();
            self.cached_bottom_reflections.borrow_mut().clear();
            self.cached_wavelength.set(wavelength);
        }
    }

    fn effective_top_reflection(&self, cx: f64, cy: f64, wavelength: f64) -> Vec<Complex64> {
        self.invalidate_on_wavelength_change(wavelength);
        let key = (cx.to_bits(), cy.to_bits());
        if let Some(cached) = self.cached_top_reflections.borrow().get(&key) {
            return cached.clone();
        }
        let cxy = (cx * cx + cy * cy).sqrt();
        let reflections = self.calc_effective_top_reflections(cxy, wavelength);
        self.cached_top_reflections
            .borrow_mut()
            .insert(key, reflections.clone());
        reflections
    }

    fn effective_bottom_reflection(&self, cx: f64, cy: f64, wavelength: f64) -> Vec<Complex64> {
        self.invalidate_on_wavelength_change(wavelength);
        let key = (cx.to_bits(), cy.to_bits());
        if let Some(cached) = self.cached_bottom_reflections.borrow().get(&key) {
            return cached.clone();
        }
        let cxy = (cx * cx + cy * cy).sqrt();
        let reflections = self.calc_effective_bottom_reflections(cxy, wavelength);
        self.cached_bottom_reflections
            .borrow_mut()
            .insert(key, reflections.clone());
        reflections
    }

    /// Pre-populate both reflection caches for a set of direction cosines,
    /// so later lookups are read-only.
    pub fn warm_caches(&self, cosines: &[(f64, f64)], wavelength: f64) {
        for &(cx, cy) in cosines {
            self.effective_top_reflection(cx, cy, wavelength);
            self.effective_bottom_reflection(cx, cy, wavelength);
        }
    }

    /// Normal-incidence reflectivity seen from the top of layer `index`.
    pub fn reflectivity(&self, index: usize, wavelength: f64) -> Result<Complex64> {
        if index == 0 || index > self.layers.len() - 1 {
            return Err(CoreError::WaferStackInvariant(format!(
                "reflectivity is undefined for the environment or layer {} of {}",
                index,
                self.layers.len()
            )));
        }

        let zero = Complex64::new(0.0, 0.0);
        let ro12 = reflection(
            self.layers[index - 1].effective_refraction(zero, wavelength),
            self.layers[index].effective_refraction(zero, wavelength),
        );

        let bottom_reflections = self.effective_bottom_reflection(0.0, 0.0, wavelength);
        let ro23e = bottom_reflections[index];
        let tau2d = self.layers[index].internal_transmit_power(wavelength, 2.0);

        Ok((ro12 + ro23e * tau2d) / (1.0 + ro12 * ro23e * tau2d))
    }

    /// Standing-wave amplitude at depth `dz` below the resist top for the
    /// plane wave with direction cosines (cx, cy).
    ///
    /// Requires the canonical stack shape with the resist directly under
    /// the environment.
    pub fn standing_waves(
        &self,
        cx: f64,
        cy: f64,
        dz: f64,
        wavelength: f64,
    ) -> Result<Complex64> {
        let environment = self.environment().ok_or_else(|| {
            CoreError::WaferStackInvariant("standing waves need an environment layer".into())
        })?;
        let resist = self.resist_layer().ok_or_else(|| {
            CoreError::WaferStackInvariant("standing waves need a resist layer".into())
        })?;

        let reflections = self.effective_bottom_reflection(cx, cy, wavelength);
        let cxy = (cx * cx + cy * cy).sqrt();

        let env_angle = Complex64::new(cxy, 0.0).asin();
        let resist_angle = refraction_angle(
            env_angle,
            environment.refraction(wavelength, 1.0),
            resist.refraction(wavelength, 1.0),
        );

        let reff_env = environment.effective_refraction(env_angle, wavelength);
        let reff_resist = resist.effective_refraction(resist_angle, wavelength);

        let tau12 = transmittance(reff_env, reff_resist);
        let ro12 = reflections[0];
        let ro23e = reflections[1];
        let dtau = resist.internal_transmit(resist_angle, resist.thickness(), wavelength);
        let tau2d = dtau * dtau;
        let ztau = resist.internal_transmit(resist_angle, dz, wavelength);

        let numerator = tau12 * (ztau + ro23e * tau2d / ztau);
        let denominator = 1.0 + ro12 * ro23e * tau2d;
        Ok(numerator / denominator)
    }
}
