// src/math/geometry/polygon/properties.rs

use crate::math::{
    error::{MathError, MathResult},
    geometry::{
        polygon::core::Polygon,
        primitives::{angle_between_f64, bounding_box, is_convex_triple},
    },
    types::*,
};

/// Trait für geometrische Eigenschaften von Polygonen.
pub trait PolygonProperties {
    /// Vorzeichenbehaftete Fläche (Shoelace), positiv bei Gegen-Uhrzeigersinn.
    /// Offene Linienketten werden für die Berechnung geschlossen.
    fn signed_area(&self) -> f32;

    /// Betrag der Fläche.
    fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    /// Berechnet den Umfang des Polygons.
    /// Berücksichtigt die `is_closed()`-Eigenschaft.
    fn perimeter(&self) -> f32;

    /// Umlaufsinn aus der Summe der Innenwinkel.
    fn winding_order(&self) -> MathResult<WindingOrder>;

    /// Achsenparallele Bounding Box.
    fn bounds(&self) -> MathResult<Bounds2D>;
}

/// Umlaufsinn eines geschlossenen Polygons (y-Achse nach oben).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindingOrder {
    Clockwise,
    CounterClockwise,
}

impl WindingOrder {
    pub fn is_clockwise(self) -> bool {
        self == WindingOrder::Clockwise
    }
}

/// Bestimmt den Umlaufsinn über die Winkelsumme.
///
/// Für jedes Tripel `(p[i], p[i+1], p[i+2])` wird der Winkel an `p[i+1]`
/// addiert, bei Links-Kurven sein Komplement zu 360°. Nur bei einem
/// Uhrzeigersinn-Polygon ergibt das die Innenwinkelsumme `180 * (n - 2)`;
/// die Summe wird auf ganze Grad gerundet.
pub fn detect_winding(points: &[Point2D]) -> MathResult<WindingOrder> {
    let n = points.len();
    if n < 3 {
        return Err(MathError::InsufficientPoints {
            expected: 3,
            actual: n,
        });
    }

    let total: f64 = (0..n)
        .map(|i| {
            let first = points[i];
            let center = points[(i + 1) % n];
            let last = points[(i + 2) % n];
            let angle = angle_between_f64(first, center, last);
            if is_convex_triple(first, center, last) {
                angle
            } else {
                360.0 - angle
            }
        })
        .sum();

    let expected = 180 * (n as i64 - 2);
    if total.round() as i64 == expected {
        Ok(WindingOrder::Clockwise)
    } else {
        Ok(WindingOrder::CounterClockwise)
    }
}

impl PolygonProperties for Polygon {
    fn signed_area(&self) -> f32 {
        let vertices = self.vertices();
        let n = vertices.len();
        if n < 3 {
            return 0.0;
        }

        let twice_area: f64 = (0..n)
            .map(|i| {
                let p1 = vertices[i];
                let p2 = vertices[(i + 1) % n];
                p1.x as f64 * p2.y as f64 - p2.x as f64 * p1.y as f64
            })
            .sum();

        (twice_area * 0.5) as f32
    }

    fn perimeter(&self) -> f32 {
        self.edges().map(|(start, end)| start.distance(end)).sum()
    }

    fn winding_order(&self) -> MathResult<WindingOrder> {
        detect_winding(self.vertices())
    }

    fn bounds(&self) -> MathResult<Bounds2D> {
        bounding_box(self.vertices())
    }
}
