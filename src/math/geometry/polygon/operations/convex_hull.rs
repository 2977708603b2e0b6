// src/math/geometry/polygon/operations/convex_hull.rs

//! # Convex Hull (QuickHull)
//!
//! Computes the convex boundary of a 2D point set.
//!
//! The hull starts at the leftmost point `A`, runs along the lower chain to the
//! rightmost point `B` and returns along the upper chain, i.e. it is
//! counter-clockwise with the y axis pointing up. Collinear boundary points are
//! not part of the hull. A collinear input set yields its two extreme points.

use super::super::Polygon;
use crate::math::{
    error::{MathError, MathResult},
    geometry::primitives::{distance_to_line, side},
    types::*,
};
use bevy::log::debug;

/// Computes the convex hull of `points` with QuickHull.
///
/// # Returns
/// A closed `Polygon` with the hull vertices. The first vertex is the leftmost
/// input point; among several leftmost points the lowest one.
///
/// # Errors
/// - `InsufficientPoints` for fewer than two points.
/// - `InvalidParameter` if a coordinate is not finite.
/// - `DegenerateInput` if all points coincide.
pub fn convex_hull(points: &[Point2D]) -> MathResult<Polygon> {
    if points.len() < 2 {
        return Err(MathError::InsufficientPoints {
            expected: 2,
            actual: points.len(),
        });
    }
    if let Some(index) = points.iter().position(|p| !is_finite_point(*p)) {
        return Err(MathError::InvalidParameter {
            message: format!("hull input point {} is not finite: {:?}", index, points[index]),
        });
    }

    let (a, b) = extreme_points(points);
    if a == b {
        return Err(MathError::DegenerateInput {
            reason: "all hull input points coincide".to_string(),
        });
    }

    // Lower chain candidates: right of A->B. Upper chain: right of B->A.
    let lower: Vec<Point2D> = points
        .iter()
        .copied()
        .filter(|p| side(a, b, *p) < 0)
        .collect();
    let upper: Vec<Point2D> = points
        .iter()
        .copied()
        .filter(|p| side(b, a, *p) < 0)
        .collect();

    let mut hull = Vec::with_capacity(lower.len() + upper.len() + 2);
    hull.push(a);
    hull.extend(quick_hull_recursive(a, b, &lower));
    hull.push(b);
    hull.extend(quick_hull_recursive(b, a, &upper));

    let hull = drop_collinear(hull);
    debug!(
        "Convex hull: {} input points -> {} hull vertices",
        points.len(),
        hull.len()
    );
    Ok(Polygon::closed(hull))
}

/// Lexicographic minimum and maximum by `(x, y)`.
///
/// Ties in x are broken by y, so both points are strict corners of the hull
/// (never the middle of a vertical edge). Vertical point sets yield their lowest
/// and highest point.
fn extreme_points(points: &[Point2D]) -> (Point2D, Point2D) {
    let mut lowest = points[0];
    let mut highest = points[0];
    for &p in &points[1..] {
        if (p.x, p.y) < (lowest.x, lowest.y) {
            lowest = p;
        }
        if (p.x, p.y) > (highest.x, highest.y) {
            highest = p;
        }
    }
    (lowest, highest)
}

/// Entfernt Vertices, die auf der Kante ihrer Nachbarn liegen.
///
/// Gleich weit entfernte Kandidaten auf einer Stützgeraden können sonst den
/// mittleren Punkt als Hüllenvertex liefern.
fn drop_collinear(hull: Vec<Point2D>) -> Vec<Point2D> {
    let n = hull.len();
    if n < 3 {
        return hull;
    }
    (0..n)
        .filter(|&i| side(hull[(i + n - 1) % n], hull[i], hull[(i + 1) % n]) != 0)
        .map(|i| hull[i])
        .collect()
}

/// Hull vertices strictly between `a` and `b` for the candidates right of `a -> b`.
fn quick_hull_recursive(a: Point2D, b: Point2D, candidates: &[Point2D]) -> Vec<Point2D> {
    let Some(c) = farthest_from_line(a, b, candidates) else {
        return Vec::new();
    };

    let right_of_ac: Vec<Point2D> = candidates
        .iter()
        .copied()
        .filter(|p| side(a, c, *p) < 0)
        .collect();
    let right_of_cb: Vec<Point2D> = candidates
        .iter()
        .copied()
        .filter(|p| side(c, b, *p) < 0)
        .collect();

    let mut segment = quick_hull_recursive(a, c, &right_of_ac);
    segment.push(c);
    segment.extend(quick_hull_recursive(c, b, &right_of_cb));
    segment
}

/// First point with the largest perpendicular distance to the line `a`-`b`.
fn farthest_from_line(a: Point2D, b: Point2D, candidates: &[Point2D]) -> Option<Point2D> {
    let mut best: Option<(Point2D, f32)> = None;
    for &p in candidates {
        let distance = distance_to_line(a, b, p);
        match best {
            Some((_, best_distance)) if distance <= best_distance => {}
            _ => best = Some((p, distance)),
        }
    }
    best.map(|(p, _)| p)
}
