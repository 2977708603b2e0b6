// src/math/geometry/polygon/validation.rs

//! Boundary checks run once before an algorithm starts, so malformed input fails
//! early and cheaply instead of surfacing as a stalled or garbage result.

use crate::math::{
    error::{MathError, MathResult},
    geometry::{polygon::core::Polygon, primitives::side},
    types::*,
};
use std::collections::HashSet;

/// Validator für Polygone und Kontrollpunktketten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolygonValidator {
    min_vertices: usize,
    reject_any_duplicates: bool,
    reject_collinear: bool,
}

impl PolygonValidator {
    /// Nur Mindestanzahl, endliche Koordinaten und keine degenerierten Kanten.
    pub fn new(min_vertices: usize) -> Self {
        Self {
            min_vertices,
            reject_any_duplicates: false,
            reject_collinear: false,
        }
    }

    /// Vorbedingungen der Ear-Clipping-Triangulation: mindestens drei Vertices,
    /// keine zusammenfallenden Punkte, nicht alle Punkte kollinear.
    pub fn for_triangulation() -> Self {
        Self {
            min_vertices: 3,
            reject_any_duplicates: true,
            reject_collinear: true,
        }
    }

    /// Weist jedes Paar zusammenfallender Punkte zurück, nicht nur benachbarte.
    pub fn reject_any_duplicates(mut self, reject: bool) -> Self {
        self.reject_any_duplicates = reject;
        self
    }

    /// Weist Punktfolgen zurück, deren Punkte alle auf einer Geraden liegen.
    pub fn reject_collinear(mut self, reject: bool) -> Self {
        self.reject_collinear = reject;
        self
    }

    pub fn validate(&self, polygon: &Polygon) -> MathResult<()> {
        self.validate_points(polygon.vertices(), polygon.is_closed())
    }

    pub fn validate_points(&self, points: &[Point2D], is_closed: bool) -> MathResult<()> {
        self.validate_vertex_count(points)?;
        self.validate_vertex_values(points)?;
        self.validate_consecutive_duplicates(points, is_closed)?;

        if self.reject_any_duplicates {
            self.validate_unique_vertices(points)?;
        }
        if self.reject_collinear {
            self.validate_not_collinear(points)?;
        }
        Ok(())
    }

    fn validate_vertex_count(&self, points: &[Point2D]) -> MathResult<()> {
        if points.len() < self.min_vertices {
            return Err(MathError::InsufficientPoints {
                expected: self.min_vertices,
                actual: points.len(),
            });
        }
        Ok(())
    }

    fn validate_vertex_values(&self, points: &[Point2D]) -> MathResult<()> {
        match points.iter().position(|p| !is_finite_point(*p)) {
            Some(index) => Err(MathError::InvalidParameter {
                message: format!("vertex {} is not finite: {:?}", index, points[index]),
            }),
            None => Ok(()),
        }
    }

    fn validate_consecutive_duplicates(&self, points: &[Point2D], is_closed: bool) -> MathResult<()> {
        if let Some(index) = points.windows(2).position(|pair| pair[0] == pair[1]) {
            return Err(MathError::DegenerateInput {
                reason: format!(
                    "consecutive vertices {} and {} coincide at {:?}",
                    index,
                    index + 1,
                    points[index]
                ),
            });
        }

        let n = points.len();
        if is_closed && n > 1 && points[0] == points[n - 1] {
            return Err(MathError::DegenerateInput {
                reason: format!(
                    "closing edge is degenerate: vertex {} repeats the first vertex",
                    n - 1
                ),
            });
        }
        Ok(())
    }

    fn validate_unique_vertices(&self, points: &[Point2D]) -> MathResult<()> {
        let mut seen = HashSet::with_capacity(points.len());
        for (index, point) in points.iter().enumerate() {
            if !seen.insert(PointKey::new(*point)) {
                return Err(MathError::DegenerateInput {
                    reason: format!("vertex {} duplicates an earlier vertex at {:?}", index, point),
                });
            }
        }
        Ok(())
    }

    fn validate_not_collinear(&self, points: &[Point2D]) -> MathResult<()> {
        let Some(&first) = points.first() else {
            return Ok(());
        };
        let Some(&second) = points.iter().find(|p| **p != first) else {
            return Err(MathError::DegenerateInput {
                reason: "all vertices coincide".to_string(),
            });
        };

        if points.iter().all(|p| side(first, second, *p) == 0) {
            return Err(MathError::DegenerateInput {
                reason: "all vertices are collinear".to_string(),
            });
        }
        Ok(())
    }
}
