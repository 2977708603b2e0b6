// src/math/geometry/polygon/operations/triangulation.rs

//! # Ear-Clipping Triangulation
//!
//! Converts the boundary of a simple polygon (no holes, no self-intersections)
//! into triangles. Triangles are returned as index triples into the caller's
//! vertex list so the result can be paired with an existing vertex buffer.

use super::super::{
    Polygon,
    properties::{WindingOrder, detect_winding},
    validation::PolygonValidator,
};
use crate::math::{
    error::{MathError, MathResult},
    geometry::primitives::{point_in_triangle, side, triangle_area},
    types::*,
};
use bevy::log::{debug, trace};

/// Dreieck als Indextripel in die Vertexliste des Polygons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Indizes für einen GPU-Indexpuffer
    pub fn to_u32(&self) -> MathResult<[u32; 3]> {
        let convert = |index: usize| {
            u32::try_from(index).map_err(|_| MathError::InvalidParameter {
                message: format!("vertex index {} does not fit into u32", index),
            })
        };
        Ok([convert(self.a)?, convert(self.b)?, convert(self.c)?])
    }

    /// Die drei Eckpunkte aus der zugehörigen Vertexliste
    pub fn points(&self, vertices: &[Point2D]) -> [Point2D; 3] {
        [vertices[self.a], vertices[self.b], vertices[self.c]]
    }

    /// Berechnet die Fläche des Dreiecks
    pub fn area(&self, vertices: &[Point2D]) -> f32 {
        let [a, b, c] = self.points(vertices);
        triangle_area(a, b, c)
    }
}

/// Ear-Clipping-Triangulator
#[derive(Debug, Clone, Copy, Default)]
pub struct EarClipTriangulator {
    /// Überschreibt die Iterationsgrenze `n²`
    iteration_limit: Option<usize>,
}

impl EarClipTriangulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt eine feste Iterationsgrenze statt `n²`.
    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    /// Trianguliert ein geschlossenes, einfaches Polygon.
    ///
    /// Die Eingabe wird vorher mit [`PolygonValidator::for_triangulation`] geprüft.
    /// Für `n` Vertices entstehen `n - 2` Dreiecke.
    pub fn triangulate(&self, polygon: &Polygon) -> MathResult<Vec<Triangle>> {
        if !polygon.is_closed() {
            return Err(MathError::InvalidParameter {
                message: "triangulation requires a closed polygon".to_string(),
            });
        }
        self.triangulate_points(polygon.vertices())
    }

    /// Wie [`Self::triangulate`], für eine Vertexliste mit impliziter Schlusskante.
    pub fn triangulate_points(&self, points: &[Point2D]) -> MathResult<Vec<Triangle>> {
        PolygonValidator::for_triangulation().validate_points(points, true)?;
        self.ear_clipping(points)
    }

    fn ear_clipping(&self, points: &[Point2D]) -> MathResult<Vec<Triangle>> {
        let n = points.len();
        let winding = detect_winding(points)?;
        let limit = self.iteration_limit.unwrap_or(n * n);

        let mut ring = VertexRing::new(n);
        let mut triangles = Vec::with_capacity(n - 2);
        let mut start = 0;
        let mut repeats = 0;

        while ring.len() > 3 {
            if repeats >= limit {
                return Err(MathError::TriangulationStalled {
                    iterations: repeats,
                    remaining: ring.len(),
                });
            }
            repeats += 1;

            let middle = ring.next(start);
            let end = ring.next(middle);

            if self.is_ear(points, &ring, [start, middle, end], winding) {
                trace!("Ear clipped at vertex {}", middle);
                triangles.push(Triangle::new(start, middle, end));
                ring.remove(middle);
            } else {
                start = ring.next(start);
            }
        }

        let middle = ring.next(start);
        triangles.push(Triangle::new(start, middle, ring.next(middle)));

        debug!(
            "Ear clipping: {} vertices ({:?}) -> {} triangles in {} iterations",
            n,
            winding,
            triangles.len(),
            repeats
        );
        Ok(triangles)
    }

    /// Prüft ob drei aufeinanderfolgende Vertices ein "Ear" bilden
    fn is_ear(
        &self,
        points: &[Point2D],
        ring: &VertexRing,
        [start, middle, end]: [usize; 3],
        winding: WindingOrder,
    ) -> bool {
        let (a, b, c) = (points[start], points[middle], points[end]);

        if !is_point_convex(c, a, b, winding)
            || !is_point_convex(a, b, c, winding)
            || !is_point_convex(b, c, a, winding)
        {
            return false;
        }

        let mut other = ring.next(end);
        while other != start {
            if point_in_triangle(points[other], a, b, c) {
                return false;
            }
            other = ring.next(other);
        }
        true
    }
}

/// Trianguliert ein geschlossenes Polygon mit den Standardeinstellungen.
pub fn triangulate(polygon: &Polygon) -> MathResult<Vec<Triangle>> {
    EarClipTriangulator::new().triangulate(polygon)
}

/// Ob `current` bei gegebenem Umlaufsinn eine konvexe Ecke ist.
/// Kollineare Ecken gelten nicht als konvex.
fn is_point_convex(
    previous: Point2D,
    current: Point2D,
    next: Point2D,
    winding: WindingOrder,
) -> bool {
    let turn = side(previous, current, next);
    match winding {
        WindingOrder::Clockwise => turn < 0,
        WindingOrder::CounterClockwise => turn > 0,
    }
}

/// Doppelt verkettete Indexliste der noch aktiven Vertices.
///
/// Knoten-IDs sind die Originalindizes; Entfernen ist O(1) und verschiebt nichts.
#[derive(Debug)]
struct VertexRing {
    next: Vec<usize>,
    prev: Vec<usize>,
    len: usize,
}

impl VertexRing {
    fn new(n: usize) -> Self {
        Self {
            next: (0..n).map(|i| (i + 1) % n).collect(),
            prev: (0..n).map(|i| (i + n - 1) % n).collect(),
            len: n,
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn next(&self, index: usize) -> usize {
        self.next[index]
    }

    fn remove(&mut self, index: usize) {
        let (prev, next) = (self.prev[index], self.next[index]);
        self.next[prev] = next;
        self.prev[next] = prev;
        self.len -= 1;
    }
}

/// Triangulations-Utilities
pub struct TriangulationUtils;

impl TriangulationUtils {
    /// Berechnet die Gesamtfläche einer Triangulation
    pub fn total_area(triangles: &[Triangle], vertices: &[Point2D]) -> f32 {
        triangles.iter().map(|t| t.area(vertices)).sum()
    }

    /// Flacher `u32`-Indexpuffer
    pub fn to_index_buffer(triangles: &[Triangle]) -> MathResult<Vec<u32>> {
        let mut indices = Vec::with_capacity(triangles.len() * 3);
        for triangle in triangles {
            indices.extend(triangle.to_u32()?);
        }
        Ok(indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::polygon::PolygonProperties;
    use approx::assert_abs_diff_eq;

    fn assert_valid_triangulation(polygon: &Polygon, triangles: &[Triangle]) {
        let n = polygon.len();
        assert_eq!(triangles.len(), n - 2);
        for triangle in triangles {
            assert!(triangle.indices().iter().all(|&i| i < n));
        }
        assert_abs_diff_eq!(
            TriangulationUtils::total_area(triangles, polygon.vertices()),
            polygon.area(),
            epsilon = 1e-3
        );
        assert_interiors_disjoint(polygon.vertices(), triangles);
    }

    /// Zwei Dreiecke überlappen nicht, wenn eine ihrer Kanten sie trennt.
    fn assert_interiors_disjoint(vertices: &[Point2D], triangles: &[Triangle]) {
        let corners = |t: &Triangle| t.points(vertices).map(|p| (p.x as f64, p.y as f64));
        let cross = |p: (f64, f64), q: (f64, f64), r: (f64, f64)| {
            (q.0 - p.0) * (r.1 - p.1) - (q.1 - p.1) * (r.0 - p.0)
        };
        let separates = |own: [(f64, f64); 3], other: [(f64, f64); 3]| {
            let orientation = cross(own[0], own[1], own[2]).signum();
            (0..3).any(|i| {
                let (p, q) = (own[i], own[(i + 1) % 3]);
                other.iter().all(|&r| cross(p, q, r) * orientation <= 0.0)
            })
        };

        for (i, first) in triangles.iter().enumerate() {
            for second in &triangles[i + 1..] {
                let (a, b) = (corners(first), corners(second));
                assert!(
                    separates(a, b) || separates(b, a),
                    "{:?} overlaps {:?}",
                    first,
                    second
                );
            }
        }
    }

    /// Kamm mit `teeth` Zinken der Höhe `height` über einem Rücken der Höhe 1,
    /// gegen den Uhrzeigersinn.
    fn comb(teeth: usize, height: f32) -> Polygon {
        let width = (2 * teeth - 1) as f32;
        let mut vertices = vec![Vec2::ZERO, Vec2::new(width, 0.0)];
        for i in (0..teeth).rev() {
            let x = (2 * i) as f32;
            vertices.push(Vec2::new(x + 1.0, height));
            vertices.push(Vec2::new(x, height));
            if i > 0 {
                vertices.push(Vec2::new(x, 1.0));
                vertices.push(Vec2::new(x - 1.0, 1.0));
            }
        }
        Polygon::closed(vertices)
    }

    #[test]
    fn test_triangle_basic_operations() {
        let vertices = points_from_tuples(&[(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)]);
        let triangle = Triangle::new(0, 1, 2);

        assert_abs_diff_eq!(triangle.area(&vertices), 0.5);
        assert_eq!(triangle.to_u32().unwrap(), [0, 1, 2]);
        assert_eq!(triangle.points(&vertices)[2], Vec2::new(0.5, 1.0));
    }

    #[test]
    fn test_ear_clipping_square() {
        let square = Polygon::closed(points_from_tuples(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 2.0),
            (0.0, 2.0),
        ]));

        let triangles = triangulate(&square).unwrap();
        assert_valid_triangulation(&square, &triangles);
        assert_abs_diff_eq!(TriangulationUtils::total_area(&triangles, &square.vertices), 4.0);
    }

    #[test]
    fn test_clockwise_square() {
        let square = Polygon::closed(points_from_tuples(&[
            (0.0, 0.0),
            (0.0, 2.0),
            (2.0, 2.0),
            (2.0, 0.0),
        ]));
        let triangles = triangulate(&square).unwrap();
        assert_valid_triangulation(&square, &triangles);
    }

    #[test]
    fn test_concave_polygon() {
        // Arrow head with a reflex vertex at (2, 1)
        let arrow = Polygon::closed(points_from_tuples(&[
            (0.0, 0.0),
            (2.0, 1.0),
            (4.0, 0.0),
            (2.0, 4.0),
        ]));
        let triangles = triangulate(&arrow).unwrap();
        assert_valid_triangulation(&arrow, &triangles);

        // The reflex vertex is never the tip of an ear
        assert!(triangles.iter().all(|t| t.b != 1));
    }

    #[test]
    fn test_l_shape_both_windings() {
        let l_shape = Polygon::closed(points_from_tuples(&[
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 1.0),
            (1.0, 1.0),
            (1.0, 3.0),
            (0.0, 3.0),
        ]));

        let triangles = triangulate(&l_shape).unwrap();
        assert_valid_triangulation(&l_shape, &triangles);

        let reversed = l_shape.reversed();
        let triangles = triangulate(&reversed).unwrap();
        assert_valid_triangulation(&reversed, &triangles);
    }

    #[test]
    fn test_comb_both_windings() {
        for teeth in [2, 3, 5, 8] {
            let comb = comb(teeth, 4.0);
            assert_eq!(comb.len(), 4 * teeth);
            let expected = (2 * teeth - 1) as f32 + teeth as f32 * 3.0;
            assert_abs_diff_eq!(comb.area(), expected, epsilon = 1e-4);

            for shape in [comb.clone(), comb.reversed()] {
                let triangles = triangulate(&shape).unwrap();
                assert_valid_triangulation(&shape, &triangles);
            }
        }
    }

    #[test]
    fn test_collinear_boundary_vertices() {
        let polygon = Polygon::closed(points_from_tuples(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (3.0, 0.0),
            (3.0, 1.0),
            (0.0, 1.0),
        ]));
        let triangles = triangulate(&polygon).unwrap();
        assert_valid_triangulation(&polygon, &triangles);
    }

    #[test]
    fn test_original_indices_are_kept() {
        let pentagon = Polygon::closed(points_from_tuples(&[
            (1.0, 0.0),
            (0.31, 0.95),
            (-0.81, 0.59),
            (-0.81, -0.59),
            (0.31, -0.95),
        ]));
        let triangles = triangulate(&pentagon).unwrap();
        assert_valid_triangulation(&pentagon, &triangles);

        let mut used: Vec<usize> = triangles.iter().flat_map(|t| t.indices()).collect();
        used.sort_unstable();
        used.dedup();
        assert_eq!(used, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_duplicate_point_rejected_before_clipping() {
        let polygon = Polygon::closed(points_from_tuples(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 0.0),
            (2.0, 2.0),
            (0.0, 2.0),
        ]));
        assert!(matches!(
            triangulate(&polygon),
            Err(MathError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn test_repeated_start_vertex_rejected() {
        let points = points_from_tuples(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        let triangulator = EarClipTriangulator::new();

        assert!(matches!(
            triangulator.triangulate(&Polygon::closed(points.clone())),
            Err(MathError::DegenerateInput { .. })
        ));
        assert!(matches!(
            triangulator.triangulate_points(&points),
            Err(MathError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn test_open_polygon_rejected() {
        let open = Polygon::open(points_from_tuples(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]));
        assert!(matches!(
            triangulate(&open),
            Err(MathError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_iteration_limit_reports_stall() {
        // First candidate (0, 1, 2) sits on the reflex vertex and is rejected
        let arrow = Polygon::closed(points_from_tuples(&[
            (0.0, 0.0),
            (2.0, 1.0),
            (4.0, 0.0),
            (2.0, 4.0),
        ]));
        let result = EarClipTriangulator::new()
            .with_iteration_limit(1)
            .triangulate(&arrow);
        assert_eq!(
            result,
            Err(MathError::TriangulationStalled {
                iterations: 1,
                remaining: 4
            })
        );
    }

    #[test]
    fn test_index_buffer() {
        let triangles = vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)];
        assert_eq!(
            TriangulationUtils::to_index_buffer(&triangles).unwrap(),
            vec![0, 1, 2, 0, 2, 3]
        );
    }
}
