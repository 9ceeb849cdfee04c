use super::edge::Edge3d;
use super::point::Point3d;

/// Triangle in 3D with a computed unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle3d {
    pub a: Point3d,
    pub b: Point3d,
    pub c: Point3d,
}

impl Triangle3d {
    pub fn new(a: Point3d, b: Point3d, c: Point3d) -> Self {
        Triangle3d { a, b, c }
    }

    /// Unit normal oriented by the winding a -> b -> c.
    pub fn normal(&self) -> Point3d {
        let n = Edge3d::new(self.a, self.b).cross(&Edge3d::new(self.b, self.c));
        n / n.norm()
    }

    pub fn vertex(&self, i: usize) -> Point3d {
        match i {
            0 => self.a,
            1 => self.b,
            _ => self.c,
        }
    }
}

/// Triangulated isosurface: a point soup with triangles and, once
/// finalized, per-coordinate vectors for plotting hosts.
#[derive(Debug, Clone, Default)]
pub struct Surface3d {
    finalized: bool,
    points: Vec<Point3d>,
    triangles: Vec<Triangle3d>,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl Surface3d {
    pub fn new() -> Self {
        Surface3d::default()
    }

    /// Add a vertex. Ignored after finalization.
    pub fn add_point(&mut self, point: Point3d) -> bool {
        if !self.finalized {
            self.points.push(point);
            true
        } else {
            false
        }
    }

    /// Add a triangle. Ignored after finalization.
    pub fn add_triangle(&mut self, triangle: Triangle3d) -> bool {
        if !self.finalized {
            self.triangles.push(triangle);
            true
        } else {
            false
        }
    }

    /// Split the accumulated points into coordinate vectors and freeze the
    /// surface.
    pub fn generate_xyz(&mut self) {
        if !self.finalized {
            self.x = self.points.iter().map(|p| p.x).collect();
            self.y = self.points.iter().map(|p| p.y).collect();
            self.z = self.points.iter().map(|p| p.z).collect();
            self.finalized = true;
        }
    }

    pub fn points(&self) -> &[Point3d] {
        &self.points
    }

    pub fn triangles(&self) -> &[Triangle3d] {
        &self.triangles
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }
}
