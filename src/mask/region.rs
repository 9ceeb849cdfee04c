use std::f64::consts::PI;

use num_complex::Complex64;

use crate::geometry::{Dimension, Point2d, Polygon, Rectangle, Sizes};
use crate::Result;

/// Effective complex transmission of a mask feature.
pub fn etransmit(transmittance: f64, phase_deg: f64) -> Complex64 {
    transmittance.sqrt() * Complex64::from_polar(1.0, phase_deg * PI / 180.0)
}

/// A transmissive/phase-shifting region of the mask.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    polygon: Polygon,
    transmittance: f64,
    phase: f64,
}

impl Region {
    pub fn new(points: &[Point2d], transmittance: f64, phase: f64) -> Result<Self> {
        Ok(Region {
            polygon: Polygon::new(points)?,
            transmittance,
            phase,
        })
    }

    pub fn from_polygon(polygon: Polygon, transmittance: f64, phase: f64) -> Self {
        Region {
            polygon,
            transmittance,
            phase,
        }
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn polygon_mut(&mut self) -> &mut Polygon {
        &mut self.polygon
    }

    pub fn axis(&self) -> Dimension {
        self.polygon.axis()
    }

    pub fn transmittance(&self) -> f64 {
        self.transmittance
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn etransmit(&self) -> Complex64 {
        etransmit(self.transmittance, self.phase)
    }
}

/// The mask boundary: one pitch cell with the background transmission.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    rect: Rectangle,
    transmittance: f64,
    phase: f64,
}

impl Boundary {
    pub fn new(lb: Point2d, rt: Point2d, transmittance: f64, phase: f64) -> Self {
        Boundary {
            rect: Rectangle::new(lb, rt),
            transmittance,
            phase,
        }
    }

    pub fn rect(&self) -> &Rectangle {
        &self.rect
    }

    pub fn sizes(&self) -> Sizes {
        self.rect.sizes()
    }

    pub fn center(&self) -> Point2d {
        self.rect.center()
    }

    pub fn transmittance(&self) -> f64 {
        self.transmittance
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn etransmit(&self) -> Complex64 {
        etransmit(self.transmittance, self.phase)
    }
}
