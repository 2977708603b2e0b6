// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Degenerate input: {reason}")]
    DegenerateInput { reason: String },

    #[error(
        "Triangulation stalled after {iterations} iterations with {remaining} vertices left (self-intersecting input?)"
    )]
    TriangulationStalled { iterations: usize, remaining: usize },

    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },
}

pub type MathResult<T> = Result<T, MathError>;
