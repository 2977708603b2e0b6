// src/math/types/point.rs
use super::*;

/// Hashbarer Schlüssel für exakte Koordinatengleichheit.
///
/// `-0.0` und `0.0` ergeben denselben Schlüssel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointKey {
    x_bits: u32,
    y_bits: u32,
}

impl PointKey {
    pub fn new(point: Point2D) -> Self {
        Self {
            x_bits: (point.x + 0.0).to_bits(),
            y_bits: (point.y + 0.0).to_bits(),
        }
    }
}

impl From<Point2D> for PointKey {
    fn from(point: Point2D) -> Self {
        Self::new(point)
    }
}

/// Prüft ob beide Koordinaten endlich sind
pub fn is_finite_point(point: Point2D) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

/// Baut eine Punktliste aus Koordinatenpaaren.
pub fn points_from_tuples(coords: &[(f32, f32)]) -> PointSet {
    coords.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_key_signed_zero() {
        assert_eq!(
            PointKey::new(Vec2::new(-0.0, 1.0)),
            PointKey::new(Vec2::new(0.0, 1.0))
        );
        assert_ne!(
            PointKey::new(Vec2::new(1.0, 2.0)),
            PointKey::new(Vec2::new(2.0, 1.0))
        );
    }

    #[test]
    fn test_points_from_tuples() {
        let points = points_from_tuples(&[(0.0, 1.0), (2.0, 3.0)]);
        assert_eq!(points, vec![Vec2::new(0.0, 1.0), Vec2::new(2.0, 3.0)]);
        assert!(is_finite_point(points[1]));
        assert!(!is_finite_point(Vec2::new(f32::NAN, 0.0)));
    }
}
