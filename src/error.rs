//! Error types for geometry and obstacle input.

use thiserror::Error;

/// Errors raised by point construction and point arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Text that does not describe a point.
    #[error("'{0}' is not a valid point")]
    InvalidFormat(String),

    /// A coordinate sequence that is not a pair.
    #[error("expected 2 coordinates, got {0}")]
    Shape(usize),

    /// Division by a zero divisor or scaling a zero-length vector.
    #[error("division by zero")]
    DivisionByZero,
}

/// Errors raised while reading obstacle descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A non-blank line that is not `x y w h`.
    #[error("line {line}: expected 'x y w h', got '{content}'")]
    Obstacle { line: usize, content: String },

    /// A size or point argument that does not parse.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
