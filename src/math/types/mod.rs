// src/math/types/mod.rs
pub mod bounds;
pub mod point;

pub use bounds::*;
pub use point::*;

// Re-export häufig verwendete externe Typen
pub use bevy::math::Vec2;

// Einheitliche Typen für das gesamte Modul
pub type Point2D = Vec2;
/// Ungeordnete Punktmenge ohne Verbindungsinformation.
pub type PointSet = Vec<Point2D>;
