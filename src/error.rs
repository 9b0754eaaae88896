// src/error.rs

use thiserror::Error;

/// Input the intersection engine refuses to work with.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,

    #[error("degenerate segment: both endpoints are at ({x}, {y})")]
    DegenerateSegment { x: f64, y: f64 },

    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
}
