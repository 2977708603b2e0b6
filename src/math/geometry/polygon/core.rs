// src/math/geometry/polygon/core.rs

use crate::math::types::*;
use std::fmt;

/// Geordnete Punktfolge, die einen Rand beschreibt.
///
/// Bei geschlossenen Polygonen ist die Kante vom letzten zum ersten Vertex
/// implizit; der erste Vertex wird nicht am Ende wiederholt.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point2D>,
    pub is_closed: bool,
}

impl Polygon {
    /// Erstellt ein Polygon aus Vertices
    pub fn new(vertices: Vec<Point2D>, is_closed: bool) -> Self {
        Self {
            vertices,
            is_closed,
        }
    }

    /// Erstellt ein geschlossenes Polygon.
    ///
    /// Die Schlusskante vom letzten zum ersten Vertex ist implizit. Die Vertices
    /// werden unverändert übernommen; eine am Ende wiederholte Startecke bleibt
    /// ein doppelter Vertex und wird von der Validierung gemeldet.
    pub fn closed(vertices: Vec<Point2D>) -> Self {
        Self::new(vertices, true)
    }

    /// Erstellt eine offene Linienkette
    pub fn open(vertices: Vec<Point2D>) -> Self {
        Self::new(vertices, false)
    }

    /// Zugriff auf Vertices
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// Anzahl der Vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Ist das Polygon leer?
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Ist das Polygon geschlossen?
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Anzahl der Kanten (inklusive impliziter Schlusskante)
    pub fn edge_count(&self) -> usize {
        match (self.is_closed, self.vertices.len()) {
            (_, 0) | (_, 1) => 0,
            (true, 2) => 1,
            (true, n) => n,
            (false, n) => n - 1,
        }
    }

    /// Iteriert über alle Kanten als `(start, ende)`.
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = self.vertices.len();
        (0..self.edge_count()).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Polygon umkehren (Vertices in umgekehrter Reihenfolge)
    pub fn reverse(&mut self) {
        self.vertices.reverse();
    }

    /// Erstellt eine Kopie mit umgekehrten Vertices
    pub fn reversed(&self) -> Self {
        let mut copy = self.clone();
        copy.reverse();
        copy
    }
}

/// Display-Implementierung für Debugging
impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon({} vertices", self.vertices.len())?;
        if self.is_closed {
            write!(f, ", closed")?;
        }
        write!(f, ")")
    }
}

/// Konvertierung zu Vec<Point2D>
impl From<Polygon> for Vec<Point2D> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_keeps_vertices() {
        let polygon = Polygon::closed(points_from_tuples(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]));

        assert_eq!(polygon.len(), 3);
        assert!(polygon.is_closed());
        assert_eq!(polygon.edge_count(), 3);
        assert_eq!(polygon.to_string(), "Polygon(3 vertices, closed)");

        // Wiederholte Startecke bleibt erhalten
        let repeated = Polygon::closed(points_from_tuples(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 0.0),
        ]));
        assert_eq!(repeated.len(), 4);
        assert_eq!(repeated.edge_count(), 4);
    }

    #[test]
    fn test_edges_open_and_closed() {
        let points = points_from_tuples(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);

        let open: Vec<_> = Polygon::open(points.clone()).edges().collect();
        assert_eq!(open.len(), 2);
        assert_eq!(open[1], (points[1], points[2]));

        let closed: Vec<_> = Polygon::closed(points.clone()).edges().collect();
        assert_eq!(closed.len(), 3);
        assert_eq!(closed[2], (points[2], points[0]));

        let segment = Polygon::closed(points[..2].to_vec());
        assert_eq!(segment.edge_count(), 1);
    }

    #[test]
    fn test_reversed() {
        let polygon = Polygon::open(points_from_tuples(&[(0.0, 0.0), (1.0, 0.0), (2.0, 1.0)]));
        let reversed = polygon.reversed();
        assert_eq!(reversed.vertices()[0], Vec2::new(2.0, 1.0));
        assert!(!reversed.is_closed());
        assert_eq!(Vec::from(reversed.reversed()), polygon.vertices);
    }
}
