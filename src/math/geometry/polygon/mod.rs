// src/math/geometry/polygon/mod.rs

// Deklaration der Untermodule für Polygon-spezifische Funktionalität
pub mod core; // Enthält die Polygon-Struktur selbst
pub mod properties; // Enthält den PolygonProperties-Trait
pub mod validation; // Enthält den PolygonValidator

pub mod operations; // Hülle, Triangulation, Vereinfachung
pub mod smoothing; // Catmull-Rom-Spline

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Polygon-Elemente
pub use self::core::Polygon;
pub use self::properties::{PolygonProperties, WindingOrder, detect_winding};
pub use self::validation::PolygonValidator;

pub use self::operations::{
    convex_hull::convex_hull,
    simplification::{SimplifyConfig, simplify, simplify_with_config},
    triangulation::{EarClipTriangulator, Triangle, TriangulationUtils, triangulate},
};
pub use self::smoothing::{CatmullRomSpline, MIN_RESOLUTION, SplineConfig};
