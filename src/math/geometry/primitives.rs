// src/math/geometry/primitives.rs

//! # Geometric Primitives
//!
//! Stateless predicates and measurements shared by the hull, triangulation,
//! spline and simplification modules.
//!
//! Orientation follows the y-up mathematical frame: `side(a, b, p) > 0` means
//! `p` lies to the left of the directed line `a -> b` (a counter-clockwise turn).
//! The predicates use exact signs without tolerance; collinearity is only
//! reported for an exact zero cross product.

use crate::math::{
    error::{MathError, MathResult},
    types::*,
    utils::{angles, comparison},
};

/// Which half-plane of the directed line `a -> b` contains `p`.
///
/// Returns the sign of `(a - p) × (b - p)`: `1` (left), `-1` (right) or `0`
/// (collinear).
#[inline]
pub fn side(a: Point2D, b: Point2D, p: Point2D) -> i32 {
    comparison::sign((a - p).perp_dot(b - p))
}

/// Inclusive point-in-triangle test that accepts either winding.
pub fn point_in_triangle(p: Point2D, v1: Point2D, v2: Point2D, v3: Point2D) -> bool {
    let d1 = side(p, v1, v2);
    let d2 = side(p, v2, v3);
    let d3 = side(p, v3, v1);

    (d1 >= 0 && d2 >= 0 && d3 >= 0) || (d1 <= 0 && d2 <= 0 && d3 <= 0)
}

/// Angle at `center` in degrees, within `[0, 180]`.
///
/// Returns `0.0` if `center` coincides with one of the other points.
pub fn angle_between(first: Point2D, center: Point2D, last: Point2D) -> f32 {
    angle_between_f64(first, center, last) as f32
}

/// Law-of-cosines angle evaluated in `f64`; angle sums over many
/// near-straight vertices stay exact to well below one degree.
pub(crate) fn angle_between_f64(first: Point2D, center: Point2D, last: Point2D) -> f64 {
    let a = length_f64(first, center);
    let b = length_f64(last, center);
    let c = length_f64(first, last);

    if a == 0.0 || b == 0.0 {
        return 0.0;
    }

    let cos_angle = ((a * a + b * b - c * c) / (2.0 * a * b)).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees()
}

fn length_f64(p: Point2D, q: Point2D) -> f64 {
    let dx = p.x as f64 - q.x as f64;
    let dy = p.y as f64 - q.y as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Shortest signed rotation from angle `a` to angle `b`, in radians within `(-π, π]`.
pub fn signed_angle_diff(a: f32, b: f32) -> f32 {
    angles::normalize_angle_signed(b - a)
}

/// Unsigned triangle area.
pub fn triangle_area(p1: Point2D, p2: Point2D, p3: Point2D) -> f32 {
    0.5 * (p2 - p1).perp_dot(p3 - p1).abs()
}

/// Axis-aligned bounds of a point sequence.
pub fn bounding_box(points: &[Point2D]) -> MathResult<Bounds2D> {
    Bounds2D::from_points_iter(points.iter().copied()).ok_or(MathError::InsufficientPoints {
        expected: 1,
        actual: 0,
    })
}

/// Whether `a -> b -> c` turns clockwise at `b`.
///
/// A vertex for which this holds is convex in a clockwise polygon and reflex in a
/// counter-clockwise one. Collinear triples are not clockwise.
#[inline]
pub fn is_convex_triple(a: Point2D, b: Point2D, c: Point2D) -> bool {
    side(a, b, c) < 0
}

/// Unsigned perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// Vertical and horizontal lines are measured directly so that no slope is ever
/// divided by zero. If `a == b` the distance to that point is returned.
pub fn distance_to_line(a: Point2D, b: Point2D, p: Point2D) -> f32 {
    if a == b {
        return a.distance(p);
    }
    if a.x == b.x {
        return (p.x - a.x).abs();
    }
    if a.y == b.y {
        return (p.y - a.y).abs();
    }

    // y = m * x + c  <=>  m * x - y + c = 0
    let m = (b.y - a.y) / (b.x - a.x);
    let c = a.y - m * a.x;
    (m * p.x - p.y + c).abs() / (m * m + 1.0).sqrt()
}
