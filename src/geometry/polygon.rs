use crate::error::CoreError;
use crate::Result;

use super::edge::{CrossType, Edge2d};
use super::point::{Point2d, Sizes};

/// Bypass direction of a closed edge chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Cw,
    Ccw,
}

/// Dimensionality of a polygonal region.
///
/// Two axis-aligned points describe a one-dimensional "polygon" (a single
/// edge); anything else needs at least three vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    X1d,
    Y1d,
    Two,
}

impl Dimension {
    /// Coordinate index of the significant axis (0 for x, 1 for y).
    pub fn axis_index(&self) -> usize {
        match self {
            Dimension::X1d => 0,
            Dimension::Y1d | Dimension::Two => 1,
        }
    }
}

/// Signed area of a closed edge chain by the shoelace rule (CCW positive).
/// For 1D chains the negated extent along the significant axis stands in,
/// so a clockwise bypass always leaves the edge running in +axis direction.
fn chain_signed_area(edges: &[Edge2d], axis: Dimension) -> f64 {
    match axis {
        Dimension::Two => edges
            .iter()
            .map(|e| (e.org.x * e.dst.y - e.dst.x * e.org.y) / 2.0)
            .sum(),
        _ => {
            let e = &edges[0];
            let i = axis.axis_index();
            e.org[i] - e.dst[i]
        }
    }
}

/// Reverse the chain when its signed area disagrees with the requested
/// bypass direction. Returns whether a correction was made.
fn chain_set_bypass(edges: &mut [Edge2d], axis: Dimension, direction: Orientation) -> bool {
    let area = chain_signed_area(edges, axis);
    let wrong = match direction {
        Orientation::Cw => area > 0.0,
        Orientation::Ccw => area < 0.0,
    };
    if wrong {
        edges.reverse();
        for edge in edges.iter_mut() {
            edge.flip();
        }
    }
    wrong
}

/// A polygonal region: a closed chain of edges, or a single axis-aligned
/// edge in the 1D degenerate case.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    edges: Vec<Edge2d>,
    axis: Dimension,
}

impl Polygon {
    /// Build a polygon from an ordered vertex list. The closing edge back
    /// to the first vertex is added automatically.
    pub fn new(points: &[Point2d]) -> Result<Self> {
        if Polygon::is_1d_possible(points) {
            let edge = Edge2d::new(points[1], points[0]);
            let axis = if edge.is_horizontal() {
                Dimension::X1d
            } else {
                Dimension::Y1d
            };
            Ok(Polygon {
                edges: vec![edge],
                axis,
            })
        } else if Polygon::is_2d_possible(points) {
            let mut edges = Vec::with_capacity(points.len());
            for pair in points.windows(2) {
                edges.push(Edge2d::new(pair[0], pair[1]));
            }
            edges.push(Edge2d::new(points[points.len() - 1], points[0]));
            Ok(Polygon {
                edges,
                axis: Dimension::Two,
            })
        } else {
            Err(CoreError::InvalidGeometry(format!(
                "cannot create a region from {} point(s)",
                points.len()
            )))
        }
    }

    /// Whether the points describe a one-dimensional polygon.
    pub fn is_1d_possible(points: &[Point2d]) -> bool {
        if points.len() == 2 {
            let edge = Edge2d::new(points[0], points[1]);
            edge.is_vertical() || edge.is_horizontal()
        } else {
            false
        }
    }

    pub fn is_2d_possible(points: &[Point2d]) -> bool {
        points.len() >= 3
    }

    pub fn axis(&self) -> Dimension {
        self.axis
    }

    pub fn edges(&self) -> &[Edge2d] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// First edge of the chain. 1D polygons have exactly one.
    pub fn front(&self) -> &Edge2d {
        &self.edges[0]
    }

    /// Ordered vertex list (edge origins).
    pub fn vertices(&self) -> Vec<Point2d> {
        self.edges.iter().map(|e| e.org).collect()
    }

    /// Shift every vertex by `-offset`.
    pub fn translate(&mut self, offset: Point2d) {
        for edge in &mut self.edges {
            edge.org -= offset;
            edge.dst -= offset;
        }
    }

    pub fn signed_area(&self) -> f64 {
        chain_signed_area(&self.edges, self.axis)
    }

    pub fn set_bypass(&mut self, direction: Orientation) -> bool {
        chain_set_bypass(&mut self.edges, self.axis, direction)
    }

    /// Remove zero-length edges and merge adjacent collinear edges.
    /// Returns whether anything was removed.
    pub fn clean(&mut self) -> bool {
        if self.axis != Dimension::Two {
            return false;
        }
        let mut deleted = false;
        let mut i = 0;
        while !self.edges.is_empty() && i < self.edges.len() {
            let cur = self.edges[i];
            let next = self.edges[(i + 1) % self.edges.len()];
            let remove = cur.length() == 0.0 || cur.intersect(&next).0 == CrossType::Collinear;
            if remove {
                self.edges.remove(i);
                if !self.edges.is_empty() {
                    let n = self.edges.len();
                    let prev_dst = self.edges[(i + n - 1) % n].dst;
                    self.edges[i % n].org = prev_dst;
                }
                deleted = true;
            } else {
                i += 1;
            }
        }
        deleted
    }
}

/// Axis-aligned rectangle defined by its diagonal from left-bottom to
/// right-top. Degenerate rectangles (zero extent in one axis) collapse to a
/// single 1D edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    diag: Edge2d,
    sizes: Sizes,
    edges: Vec<Edge2d>,
    axis: Dimension,
}

impl Rectangle {
    pub fn new(lb: Point2d, rt: Point2d) -> Self {
        let diag = Edge2d::new(lb, rt);
        let sizes = diag.sizes();

        let (edges, axis) = if sizes.x != 0.0 && sizes.y != 0.0 {
            let edges = vec![
                Edge2d::from_coords(lb.x, lb.y, rt.x, lb.y),
                Edge2d::from_coords(rt.x, lb.y, rt.x, rt.y),
                Edge2d::from_coords(rt.x, rt.y, lb.x, rt.y),
                Edge2d::from_coords(lb.x, rt.y, lb.x, lb.y),
            ];
            (edges, Dimension::Two)
        } else if sizes.x != 0.0 {
            (vec![diag], Dimension::X1d)
        } else {
            (vec![diag], Dimension::Y1d)
        };

        Rectangle {
            diag,
            sizes,
            edges,
            axis,
        }
    }

    pub fn left_bottom(&self) -> Point2d {
        self.diag.org
    }

    pub fn right_top(&self) -> Point2d {
        self.diag.dst
    }

    pub fn diag(&self) -> &Edge2d {
        &self.diag
    }

    pub fn sizes(&self) -> Sizes {
        self.sizes
    }

    pub fn center(&self) -> Point2d {
        self.diag.org + (self.diag.dst - self.diag.org) / 2.0
    }

    pub fn axis(&self) -> Dimension {
        self.axis
    }

    pub fn edges(&self) -> &[Edge2d] {
        &self.edges
    }

    pub fn signed_area(&self) -> f64 {
        chain_signed_area(&self.edges, self.axis)
    }

    /// Reorient the edge chain; the diagonal follows the chain direction.
    pub fn set_bypass(&mut self, direction: Orientation) -> bool {
        let corrected = chain_set_bypass(&mut self.edges, self.axis, direction);
        if corrected {
            self.diag.flip();
        }
        corrected
    }
}
