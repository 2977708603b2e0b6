pub mod convex_hull;
pub mod simplification;
pub mod triangulation;

pub use convex_hull::*;
pub use simplification::*;
pub use triangulation::*;
