// src/math/geometry/mesh.rs

use crate::math::{
    error::{MathError, MathResult},
    geometry::{
        polygon::{
            EarClipTriangulator, Polygon, SimplifyConfig, SplineConfig, TriangulationUtils,
            convex_hull, simplify_with_config, smoothing::CatmullRomSpline,
        },
        primitives::triangle_area,
    },
    types::*,
};
use bevy::log::debug;

/// Konfiguration der Mesh-Pipeline
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeshConfig {
    /// Eingabe zuerst auf ihre konvexe Hülle reduzieren
    pub convex_hull: bool,
    /// Rand mit einer geschlossenen Catmull-Rom-Kurve glätten
    pub spline_resolution: Option<f32>,
    /// Dichten Rand wieder ausdünnen (immer als geschlossene Kurve)
    pub simplify: Option<SimplifyConfig>,
    /// Überschreibt die Iterationsgrenze der Triangulation
    pub iteration_limit: Option<usize>,
}

impl MeshConfig {
    pub fn with_convex_hull(mut self, enabled: bool) -> Self {
        self.convex_hull = enabled;
        self
    }

    pub fn with_spline(mut self, resolution: f32) -> Self {
        self.spline_resolution = Some(resolution);
        self
    }

    pub fn with_simplify(mut self, config: SimplifyConfig) -> Self {
        self.simplify = Some(config.closed(true));
        self
    }

    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if let Some(resolution) = self.spline_resolution {
            SplineConfig::new(resolution, true).validate()?;
        }
        if let Some(simplify) = &self.simplify {
            simplify.validate()?;
        }
        if self.iteration_limit == Some(0) {
            return Err(MathError::InvalidParameter {
                message: "iteration_limit must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Trianguliertes Ergebnis: Vertices plus flacher Indexpuffer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeMesh {
    pub vertices: PointSet,
    pub indices: Vec<u32>,
}

impl ShapeMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Summe der Dreiecksflächen
    pub fn area(&self) -> f32 {
        self.indices
            .chunks_exact(3)
            .map(|tri| {
                triangle_area(
                    self.vertices[tri[0] as usize],
                    self.vertices[tri[1] as usize],
                    self.vertices[tri[2] as usize],
                )
            })
            .sum()
    }

    /// Randpolygon des Meshes
    pub fn outline(&self) -> Polygon {
        Polygon::closed(self.vertices.clone())
    }
}

/// Erzeugt aus einer Punktmenge ein Dreiecksnetz.
/// Orchestriert die Schritte: konvexe Hülle, Spline-Glättung, Vereinfachung
/// und Ear-Clipping-Triangulation. Jeder Schritt außer der Triangulation ist optional.
#[derive(Debug, Clone)]
pub struct MeshBuilder {
    config: MeshConfig,
}

impl MeshBuilder {
    pub fn new(config: MeshConfig) -> MathResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    /// Führt die Pipeline aus.
    ///
    /// Ohne Hüllen-Schritt wird `points` als geschlossener Rand interpretiert.
    pub fn build(&self, points: &[Point2D]) -> MathResult<ShapeMesh> {
        let mut outline = if self.config.convex_hull {
            let hull = convex_hull(points)?;
            debug!("MeshBuilder - Step: ConvexHull: {} -> {} points", points.len(), hull.len());
            hull.vertices
        } else {
            points.to_vec()
        };

        if let Some(resolution) = self.config.spline_resolution {
            let spline = CatmullRomSpline::new(outline, SplineConfig::new(resolution, true))?;
            outline = spline.evaluate()?;
            debug!("MeshBuilder - Step: Spline: {} samples", outline.len());
        }

        if let Some(simplify) = self.config.simplify {
            let before = outline.len();
            outline = simplify_with_config(&outline, &simplify.closed(true))?;
            debug!("MeshBuilder - Step: Simplify: {} -> {} points", before, outline.len());
        }

        let polygon = Polygon::closed(outline);
        let mut triangulator = EarClipTriangulator::new();
        if let Some(limit) = self.config.iteration_limit {
            triangulator = triangulator.with_iteration_limit(limit);
        }
        let triangles = triangulator.triangulate(&polygon)?;
        let indices = TriangulationUtils::to_index_buffer(&triangles)?;
        debug!(
            "MeshBuilder - Step: Triangulation: {} vertices -> {} triangles",
            polygon.len(),
            triangles.len()
        );

        Ok(ShapeMesh {
            vertices: polygon.vertices,
            indices,
        })
    }
}
