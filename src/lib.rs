//! 2D-Geometrie für prozedurale Formen: konvexe Hülle (QuickHull),
//! Catmull-Rom-Splines, Vereinfachung abgetasteter Kurven und
//! Ear-Clipping-Triangulation.
//!
//! ```
//! use shape_geometry::math::prelude::*;
//!
//! let points = points_from_tuples(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (1.0, 1.0)]);
//! let hull = convex_hull(&points)?;
//! let triangles = triangulate(&hull)?;
//! assert_eq!(triangles.len(), 2);
//! # Ok::<(), MathError>(())
//! ```

pub mod math;

pub use math::prelude;
