// Geometry module: 2D mask-plane primitives and 3D surface primitives
// used by the diffraction engine and the contour extractors.

// ======================== MODULE DECLARATIONS ========================
pub mod edge;
pub mod point;
pub mod polygon;
pub mod surface;

mod _tests_point;
mod _tests_polygon;

// ======================== 2D PRIMITIVES ========================
pub use point::{
    classify,        // fn - classify a point against a directed edge
    classify_points, // fn - classify a point against the line through two points
    Point2d,         // type alias - nalgebra::Vector2<f64>
    Point3d,         // type alias - nalgebra::Vector3<f64>
    PointClass,      // enum - Left/Right/Behind/Beyond/Between/Origin/Destination
    Sizes,           // type alias - extents along x and y
};

pub use edge::{
    CrossType, // enum - Collinear/Parallel/SkewNoCross/SkewCross
    Edge2d,    // struct - directed 2D edge with slope/area/intersection helpers
    Edge3d,    // struct - directed 3D edge
};

pub use polygon::{
    Dimension,   // enum - X1d/Y1d/Two polygon dimensionality
    Orientation, // enum - Cw/Ccw bypass direction
    Polygon,     // struct - closed (or 1D degenerate) edge chain
    Rectangle,   // struct - axis-aligned rectangle with oriented diagonal
};

// ======================== 3D PRIMITIVES ========================
pub use surface::{
    Surface3d,  // struct - triangle soup with generated coordinate vectors
    Triangle3d, // struct - triangle with computed unit normal
};
