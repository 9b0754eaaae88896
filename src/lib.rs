// src/lib.rs

pub mod board;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod intersection;
pub mod vector;

pub use board::{Board, BoardSettings, SearchOutcome};
pub use error::GeometryError;
pub use geometry::{LineSegment, Point};
pub use intersection::{find_all_intersections, Crossing, SegmentIntersection};
pub use vector::Vector;
