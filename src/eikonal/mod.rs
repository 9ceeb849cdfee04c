// Eikonal module: fast-marching solution of |grad(phi)| = 1/rate on
// regular 2D and 3D grids.
//
// The solver expects phi to carry the boundary data: non-negative values
// mark the initial front, negative values mark points still to be solved.
// Points with a negative mask value or a rate below the zero tolerance are
// excluded from the domain and come back as f64::MAX.

// ======================== MODULE DECLARATIONS ========================
pub mod solver;

pub(crate) mod heap;

// Test modules
mod _tests_eikonal;

// ======================== SOLVER SURFACE ========================
pub use solver::{
    solve2d,       // fn - develop-time field on a matrix (order-2 discretization)
    solve3d,       // fn - develop-time field on a cube (order-2 discretization)
    solve_eikonal, // fn - dimension-generic fast-marching solver
    SpatialOrder,  // enum - First/Second order finite differences
};
