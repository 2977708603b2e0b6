// src/math/geometry/mod.rs

// Deklaration der Haupt-Geometriemodule
pub mod mesh;
pub mod polygon;
pub mod primitives;

// Re-Exporte für einen schnellen Zugriff auf die Kern-Geometrietypen,
// falls man nicht das gesamte `math::prelude` importieren möchte.
pub use self::mesh::{MeshBuilder, MeshConfig, ShapeMesh};
pub use self::polygon::{
    CatmullRomSpline, EarClipTriangulator, MIN_RESOLUTION, Polygon, PolygonProperties,
    PolygonValidator, SimplifyConfig, SplineConfig, Triangle, TriangulationUtils, WindingOrder,
    convex_hull, simplify, simplify_with_config, triangulate,
};
