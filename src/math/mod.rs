pub mod error;
pub mod geometry;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{MathError, MathResult},
        geometry::{
            mesh::*,
            polygon::{
                CatmullRomSpline, EarClipTriangulator, MIN_RESOLUTION, Polygon, PolygonProperties,
                PolygonValidator, SimplifyConfig, SplineConfig, Triangle, TriangulationUtils,
                WindingOrder, convex_hull, simplify, simplify_with_config,
                smoothing::evaluate, triangulate,
            },
            primitives::*,
        },
        types::*,
    };
}
