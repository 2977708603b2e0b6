// src/math/geometry/polygon/smoothing/catmull_rom.rs

//! # Catmull-Rom Spline
//!
//! Uniform Catmull-Rom interpolation through a chain of control points. The
//! curve passes through every control point; each segment `i` runs from
//! control point `i` to `i + 1` and is sampled `ceil(1 / resolution)` times.

use super::super::{Polygon, validation::PolygonValidator};
use crate::math::{
    error::{MathError, MathResult},
    geometry::primitives::bounding_box,
    types::*,
};
use bevy::log::debug;

/// Kleinste erlaubte Schrittweite; kleinere Werte werden angehoben.
pub const MIN_RESOLUTION: f32 = 0.01;

/// Konfiguration für die Spline-Auswertung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineConfig {
    /// Parametrische Schrittweite in (0, 1]
    pub resolution: f32,
    /// Geschlossene Kurve (letzter Kontrollpunkt verbindet zum ersten)
    pub looping: bool,
}

impl Default for SplineConfig {
    fn default() -> Self {
        Self {
            resolution: 0.1,
            looping: false,
        }
    }
}

impl SplineConfig {
    pub fn new(resolution: f32, looping: bool) -> Self {
        Self {
            resolution,
            looping,
        }
    }

    pub fn with_resolution(mut self, resolution: f32) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        self.effective_resolution().map(|_| ())
    }

    /// Schrittweite nach Prüfung, unter [`MIN_RESOLUTION`] angehoben.
    pub fn effective_resolution(&self) -> MathResult<f32> {
        let resolution = self.resolution;
        if !resolution.is_finite() || resolution <= 0.0 || resolution > 1.0 {
            return Err(MathError::InvalidParameter {
                message: format!("resolution must be in (0, 1], got {}", resolution),
            });
        }
        if resolution < MIN_RESOLUTION {
            debug!(
                "Spline resolution {} clamped to {}",
                resolution, MIN_RESOLUTION
            );
            return Ok(MIN_RESOLUTION);
        }
        Ok(resolution)
    }

    /// Anzahl der Samples pro Segment: `ceil(1 / resolution)`
    pub fn samples_per_segment(&self) -> MathResult<usize> {
        let resolution = self.effective_resolution()?;
        // Relative Toleranz in Höhe der f32-Rundung: 0.01 ergibt 100 statt 101,
        // 0.49999 bleibt bei 3
        let count = (1.0 / resolution as f64 * (1.0 - 4.0 * f32::EPSILON as f64))
            .ceil()
            .max(1.0);
        Ok(count as usize)
    }

    /// Mindestanzahl Kontrollpunkte für den Modus
    pub fn min_control_points(&self) -> usize {
        if self.looping { 3 } else { 4 }
    }
}

/// Catmull-Rom-Spline durch eine Kontrollpunktkette
#[derive(Debug, Clone, PartialEq)]
pub struct CatmullRomSpline {
    control_points: PointSet,
    config: SplineConfig,
}

impl CatmullRomSpline {
    /// Erstellt einen Spline und prüft Kontrollpunkte und Schrittweite.
    pub fn new(control_points: PointSet, config: SplineConfig) -> MathResult<Self> {
        config.validate()?;
        PolygonValidator::new(config.min_control_points())
            .validate_points(&control_points, config.looping)?;

        Ok(Self {
            control_points,
            config,
        })
    }

    /// Spline durch die Vertices eines Polygons; geschlossene Polygone ergeben
    /// eine geschlossene Kurve.
    pub fn from_polygon(polygon: &Polygon, resolution: f32) -> MathResult<Self> {
        Self::new(
            polygon.vertices().to_vec(),
            SplineConfig::new(resolution, polygon.is_closed()),
        )
    }

    pub fn control_points(&self) -> &[Point2D] {
        &self.control_points
    }

    pub fn config(&self) -> &SplineConfig {
        &self.config
    }

    pub fn segment_count(&self) -> usize {
        let n = self.control_points.len();
        if self.config.looping { n } else { n - 1 }
    }

    /// Die vier Kontrollpunkte eines Segments
    fn segment_points(&self, segment: usize) -> [Point2D; 4] {
        let len = self.control_points.len();
        let first = segment as isize - 1;
        let mut points = [Vec2::ZERO; 4];
        for (offset, point) in points.iter_mut().enumerate() {
            let pos = first + offset as isize;
            let index = if self.config.looping {
                wrap_index(pos, len)
            } else {
                clamp_index(pos, len)
            };
            *point = self.control_points[index];
        }
        points
    }

    /// Punkt auf Segment `segment` bei Parameter `t` in [0, 1]
    pub fn point_at(&self, segment: usize, t: f32) -> Point2D {
        let [p0, p1, p2, p3] = self.segment_points(segment);
        catmull_rom_point(p0, p1, p2, p3, t)
    }

    /// Tastet die Kurve ab.
    ///
    /// Pro Segment entstehen Samples bei `t = k * resolution` für
    /// `k = 1..=ceil(1 / resolution)`, das letzte immer bei `t = 1`. Geschlossene
    /// Kurven enden damit auf dem ersten Kontrollpunkt; offene Kurven beginnen
    /// zusätzlich mit ihm.
    pub fn evaluate(&self) -> MathResult<PointSet> {
        let resolution = self.config.effective_resolution()?;
        let per_segment = self.config.samples_per_segment()?;
        let segments = self.segment_count();

        let mut samples = Vec::with_capacity(segments * per_segment + 1);
        if !self.config.looping {
            samples.push(self.control_points[0]);
        }

        for segment in 0..segments {
            let [p0, p1, p2, p3] = self.segment_points(segment);
            for k in 1..=per_segment {
                let t = if k == per_segment {
                    1.0
                } else {
                    (k as f32 * resolution).min(1.0)
                };
                samples.push(catmull_rom_point(p0, p1, p2, p3, t));
            }
        }

        if let Ok(bounds) = bounding_box(&samples) {
            debug!(
                "Catmull-Rom: {} control points, {} segments -> {} samples within {}",
                self.control_points.len(),
                segments,
                samples.len(),
                bounds
            );
        }
        Ok(samples)
    }

    /// Auswertung als Polygon mit dem Schließzustand des Splines
    pub fn to_polygon(&self) -> MathResult<Polygon> {
        Ok(Polygon::new(self.evaluate()?, self.config.looping))
    }
}

/// Wertet eine Kontrollpunktkette direkt aus.
pub fn evaluate(control_points: &[Point2D], resolution: f32, looping: bool) -> MathResult<PointSet> {
    CatmullRomSpline::new(
        control_points.to_vec(),
        SplineConfig::new(resolution, looping),
    )?
    .evaluate()
}

/// Index-Umlauf für geschlossene Kurven.
///
/// `pos < 0 -> len - 1`, `pos > len -> 1`, `pos > len - 1 -> 0`, sonst `pos`.
/// Positionen jenseits von `len` landen immer auf 1, nicht modulo `len`.
pub fn wrap_index(pos: isize, len: usize) -> usize {
    let len = len as isize;
    let index = if pos < 0 {
        len - 1
    } else if pos > len {
        1
    } else if pos > len - 1 {
        0
    } else {
        pos
    };
    index as usize
}

/// Index-Klemmung für offene Kurven: Randpunkte werden wiederholt.
pub fn clamp_index(pos: isize, len: usize) -> usize {
    pos.clamp(0, len as isize - 1) as usize
}

/// Uniformer Catmull-Rom-Punkt zwischen `p1` (t = 0) und `p2` (t = 1)
pub fn catmull_rom_point(p0: Point2D, p1: Point2D, p2: Point2D, p3: Point2D, t: f32) -> Point2D {
    let t2 = t * t;
    let t3 = t2 * t;

    0.5 * (2.0 * p1
        + (p2 - p0) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}
