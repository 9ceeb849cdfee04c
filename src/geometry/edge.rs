use super::point::{classify, Point2d, Point3d, PointClass, Sizes};
use super::polygon::Orientation;

/// Intersection discriminant for a pair of 2D edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossType {
    Collinear,
    Parallel,
    Skew,
    SkewNoCross,
    SkewCross,
}

/// Directed edge in the mask plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge2d {
    pub org: Point2d,
    pub dst: Point2d,
}

impl Edge2d {
    pub fn new(org: Point2d, dst: Point2d) -> Self {
        Edge2d { org, dst }
    }

    pub fn from_coords(org_x: f64, org_y: f64, dst_x: f64, dst_y: f64) -> Self {
        Edge2d::new(Point2d::new(org_x, org_y), Point2d::new(dst_x, dst_y))
    }

    /// Rotate the edge by 90 degrees around its midpoint.
    pub fn rot(&mut self, dir: Orientation) -> &mut Self {
        let sign = match dir {
            Orientation::Cw => -1.0,
            Orientation::Ccw => 1.0,
        };
        let m = 0.5 * (self.org + self.dst);
        let v = self.dst - self.org;
        let n = Point2d::new(v.y, -v.x);
        self.org = m + sign * 0.5 * n;
        self.dst = m - sign * 0.5 * n;
        self
    }

    /// Swap origin and destination.
    pub fn flip(&mut self) -> &mut Self {
        std::mem::swap(&mut self.org, &mut self.dst);
        self
    }

    /// Intersect the supporting line of `self` with the supporting line of
    /// `e`. Returns the discriminant and, for skew lines, the parameter `t`
    /// such that `self.point_at(t)` is the intersection point.
    pub fn intersect(&self, e: &Edge2d) -> (CrossType, f64) {
        let a = self.org;
        let b = self.dst;
        let c = e.org;
        let d = e.dst;
        let n = Point2d::new((d - c).y, (c - d).x);
        let denom = n.dot(&(b - a));

        if denom == 0.0 {
            let side = classify(self.org, e);
            if side == PointClass::Left || side == PointClass::Right {
                (CrossType::Parallel, 0.0)
            } else {
                (CrossType::Collinear, 0.0)
            }
        } else {
            let num = n.dot(&(a - c));
            (CrossType::Skew, -num / denom)
        }
    }

    /// Point on the supporting line at parameter `t`.
    pub fn point_at(&self, t: f64) -> Point2d {
        self.org + t * (self.dst - self.org)
    }

    /// Intersection point of the supporting lines of `self` and `e`.
    pub fn cross_point(&self, e: &Edge2d) -> Point2d {
        let (_, t) = self.intersect(e);
        self.point_at(t)
    }

    /// Classify how the segments `self` and `e` cross.
    pub fn cross_type(&self, e: &Edge2d) -> CrossType {
        let (cross, s) = e.intersect(self);
        if cross == CrossType::Collinear || cross == CrossType::Parallel {
            return cross;
        }
        if !(0.0..=1.0).contains(&s) {
            return CrossType::SkewNoCross;
        }
        let (_, t) = self.intersect(e);
        if (0.0..=1.0).contains(&t) {
            CrossType::SkewCross
        } else {
            CrossType::SkewNoCross
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.org.x == self.dst.x
    }

    pub fn is_horizontal(&self) -> bool {
        self.org.y == self.dst.y
    }

    pub fn dx(&self) -> f64 {
        self.dst.x - self.org.x
    }

    pub fn dy(&self) -> f64 {
        self.dst.y - self.org.y
    }

    pub fn sizes(&self) -> Sizes {
        self.dst - self.org
    }

    pub fn length(&self) -> f64 {
        self.sizes().norm()
    }

    /// Slope dy/dx; ±∞ for vertical edges.
    pub fn slope(&self) -> f64 {
        if self.dx() != 0.0 {
            self.dy() / self.dx()
        } else {
            self.dy() * f64::INFINITY
        }
    }

    /// y-value of the supporting line at abscissa `x`.
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope() * (x - self.org.x) + self.org.y
    }

    /// Area of the trapezoid between this edge, the x-axis and the two
    /// vertical lines through its endpoints. Summed along a clockwise edge
    /// chain this yields the (positive) enclosed area.
    pub fn area(&self) -> f64 {
        self.dx() * (self.dst.y + self.org.y) / 2.0
    }
}

/// Directed edge in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge3d {
    pub org: Point3d,
    pub dst: Point3d,
}

impl Edge3d {
    pub fn new(org: Point3d, dst: Point3d) -> Self {
        Edge3d { org, dst }
    }

    pub fn vector(&self) -> Point3d {
        self.dst - self.org
    }

    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    pub fn dot(&self, other: &Edge3d) -> f64 {
        self.vector().dot(&other.vector())
    }

    pub fn cross(&self, other: &Edge3d) -> Point3d {
        self.vector().cross(&other.vector())
    }
}
