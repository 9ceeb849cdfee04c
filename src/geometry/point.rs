use nalgebra::{Vector2, Vector3};

use crate::config::CLASSIFY_TOLERANCE;

use super::edge::Edge2d;

/// 2D point in the mask plane (nm).
pub type Point2d = Vector2<f64>;

/// 3D point (nm).
pub type Point3d = Vector3<f64>;

/// Extents along x and y.
pub type Sizes = Vector2<f64>;

/// Position of a point relative to a directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClass {
    Left,
    Right,
    Behind,
    Beyond,
    Between,
    Origin,
    Destination,
}

/// Classify `p` against the directed line from `p0` to `p1`.
///
/// The side test uses the signed area of the triangle (p0, p1, p) compared
/// against `tolerance`; collinear points are resolved into
/// Behind/Beyond/Origin/Destination/Between by their parameter along the
/// line. Coordinates are nanometers, so the default tolerance is forgiving
/// of rounding at sub-picometer scale.
pub fn classify_points(p: Point2d, p0: Point2d, p1: Point2d, tolerance: f64) -> PointClass {
    let a = p1 - p0;
    let b = p - p0;
    let sa = a.x * b.y - b.x * a.y;

    if sa > tolerance {
        PointClass::Left
    } else if sa < -tolerance {
        PointClass::Right
    } else if a.x * b.x < 0.0 || a.y * b.y < 0.0 {
        PointClass::Behind
    } else if a.norm() < b.norm() {
        PointClass::Beyond
    } else if p0 == p {
        PointClass::Origin
    } else if p1 == p {
        PointClass::Destination
    } else {
        PointClass::Between
    }
}

/// Classify `p` against an edge with the default tolerance.
pub fn classify(p: Point2d, edge: &Edge2d) -> PointClass {
    classify_points(p, edge.org, edge.dst, CLASSIFY_TOLERANCE)
}
