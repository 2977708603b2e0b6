// src/math/geometry/polygon/operations/simplification.rs

//! # Spline Simplification
//!
//! Thins a densely sampled curve with a local-area filter: the middle point of
//! a consecutive triple is dropped when the triangle it spans is smaller than
//! `min_area`. Scans repeat until a pass removes nothing or the point count
//! reaches the floor `min_points_count`.

use crate::math::{
    error::{MathError, MathResult},
    geometry::primitives::triangle_area,
    types::*,
};
use bevy::log::{debug, trace};

/// Konfiguration der Vereinfachung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplifyConfig {
    /// Dreiecksfläche, unter der ein Mittelpunkt entfernt wird
    pub min_area: f32,
    /// Geschlossene Kurve: Indizes laufen über das Ende hinaus
    pub closed: bool,
    /// Untergrenze der Punktanzahl
    pub min_points_count: usize,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self {
            min_area: 0.01,
            closed: true,
            min_points_count: 10,
        }
    }
}

impl SimplifyConfig {
    pub fn new(min_area: f32, closed: bool) -> Self {
        Self {
            min_area,
            closed,
            ..Default::default()
        }
    }

    pub fn with_min_area(mut self, min_area: f32) -> Self {
        self.min_area = min_area;
        self
    }

    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn with_min_points_count(mut self, count: usize) -> Self {
        self.min_points_count = count;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if !self.min_area.is_finite() || self.min_area < 0.0 {
            return Err(MathError::InvalidParameter {
                message: format!("min_area must be finite and >= 0, got {}", self.min_area),
            });
        }
        Ok(())
    }
}

/// Vereinfacht eine Punktfolge mit der Standard-Untergrenze.
pub fn simplify(points: &[Point2D], min_area: f32, closed: bool) -> MathResult<PointSet> {
    simplify_with_config(points, &SimplifyConfig::new(min_area, closed))
}

/// Vereinfacht eine Punktfolge.
///
/// Eingaben mit höchstens `min_points_count` Punkten bleiben unverändert.
/// Offene Kurven behalten immer ihren ersten und letzten Punkt.
pub fn simplify_with_config(points: &[Point2D], config: &SimplifyConfig) -> MathResult<PointSet> {
    config.validate()?;

    let mut result = points.to_vec();
    let mut passes = 0;
    loop {
        if result.len() <= config.min_points_count {
            break;
        }
        passes += 1;
        let removed = if config.closed {
            simplify_pass_closed(&mut result, config)
        } else {
            simplify_pass_open(&mut result, config)
        };
        trace!("Simplify pass {}: removed {} points", passes, removed);
        if removed == 0 {
            break;
        }
    }

    debug!(
        "Simplify: {} -> {} points in {} passes (min_area {}, closed {})",
        points.len(),
        result.len(),
        passes,
        config.min_area,
        config.closed
    );
    Ok(result)
}

fn simplify_pass_closed(points: &mut PointSet, config: &SimplifyConfig) -> usize {
    let mut removed = 0;
    let mut i = 0;
    while i < points.len() && points.len() > config.min_points_count {
        let len = points.len();
        let middle = (i + 1) % len;
        if triangle_area(points[i], points[middle], points[(i + 2) % len]) < config.min_area {
            points.remove(middle);
            removed += 1;
            i += 2;
        } else {
            i += 1;
        }
    }
    removed
}

fn simplify_pass_open(points: &mut PointSet, config: &SimplifyConfig) -> usize {
    let mut removed = 0;
    let mut i = 0;
    while i + 2 < points.len() && points.len() > config.min_points_count {
        if triangle_area(points[i], points[i + 1], points[i + 2]) < config.min_area {
            points.remove(i + 1);
            removed += 1;
            i += 2;
        } else {
            i += 1;
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag(count: usize, amplitude: f32) -> PointSet {
        (0..count)
            .map(|i| {
                let y = if i % 2 == 0 { 0.0 } else { amplitude };
                Vec2::new(i as f32, y)
            })
            .collect()
    }

    fn circle(count: usize, radius: f32) -> PointSet {
        (0..count)
            .map(|i| {
                let angle = i as f32 / count as f32 * std::f32::consts::TAU;
                Vec2::new(angle.cos(), angle.sin()) * radius
            })
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = SimplifyConfig::default();
        assert_eq!(config.min_points_count, 10);
        assert!(config.closed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_min_area() {
        let points = circle(20, 1.0);
        assert!(matches!(
            simplify(&points, -1.0, true),
            Err(MathError::InvalidParameter { .. })
        ));
        assert!(matches!(
            simplify(&points, f32::NAN, false),
            Err(MathError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_collinear_closed_collapses_to_floor() {
        let points: PointSet = (0..100).map(|i| Vec2::new(i as f32 * 0.1, 0.0)).collect();
        let result = simplify(&points, 1.0, true).unwrap();
        assert_eq!(result.len(), 10);
    }

    #[test]
    fn test_floor_is_respected_with_large_area() {
        let points = circle(64, 10.0);
        let config = SimplifyConfig::default()
            .with_min_area(1000.0)
            .with_min_points_count(12);
        let result = simplify_with_config(&points, &config).unwrap();
        assert_eq!(result.len(), 12);
    }

    #[test]
    fn test_short_input_unchanged() {
        let points = zigzag(8, 0.001);
        assert_eq!(simplify(&points, 1.0, true).unwrap(), points);
        assert_eq!(simplify(&points, 1.0, false).unwrap(), points);
    }

    #[test]
    fn test_open_keeps_endpoints() {
        let points: PointSet = (0..50)
            .map(|i| Vec2::new(i as f32, (i as f32 * 0.1).sin() * 0.01))
            .collect();
        let config = SimplifyConfig::new(0.5, false).with_min_points_count(2);
        let result = simplify_with_config(&points, &config).unwrap();

        assert!(result.len() < points.len());
        assert_eq!(result.first(), points.first());
        assert_eq!(result.last(), points.last());
    }

    #[test]
    fn test_large_features_survive() {
        // Each zigzag triple spans area 2.0
        let points = zigzag(30, 2.0);
        let result = simplify(&points, 0.5, false).unwrap();
        assert_eq!(result, points);
    }

    #[test]
    fn test_idempotent() {
        let points = circle(200, 5.0);
        let once = simplify(&points, 0.05, true).unwrap();
        let twice = simplify(&once, 0.05, true).unwrap();

        assert!(once.len() < points.len());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_zero_area_keeps_everything() {
        let points = circle(30, 1.0);
        assert_eq!(simplify(&points, 0.0, true).unwrap(), points);
    }
}
