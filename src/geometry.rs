// src/geometry.rs

use std::ops::{Add, Sub};

use crate::error::GeometryError;
use crate::intersection::SegmentIntersection;
use crate::vector::Vector;

/// Endpoints closer than this do not form a segment.
pub const MIN_SEGMENT_LENGTH: f64 = 1e-9;

/// A location in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `origin` to `self`, i.e. `self - origin`.
    pub fn subtract(&self, origin: &Point) -> Vector {
        Vector::new(self.x - origin.x, self.y - origin.y)
    }

    pub fn offset(&self, displacement: &Vector) -> Point {
        Point::new(self.x + displacement.x, self.y + displacement.y)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        self.subtract(other).magnitude()
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        self.subtract(&rhs)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        self.offset(&rhs)
    }
}

/// A finite segment from `point1` to `point2`. The endpoints are always
/// finite and distinct; fields stay private so that holds after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    point1: Point,
    point2: Point,
}

impl LineSegment {
    pub fn new(point1: Point, point2: Point) -> Result<Self, GeometryError> {
        for point in [point1, point2] {
            if !point.is_finite() {
                return Err(GeometryError::NonFiniteCoordinate { x: point.x, y: point.y });
            }
        }
        if point1.distance_to(&point2) <= MIN_SEGMENT_LENGTH {
            return Err(GeometryError::DegenerateSegment { x: point1.x, y: point1.y });
        }
        Ok(Self { point1, point2 })
    }

    pub fn point1(&self) -> Point {
        self.point1
    }

    pub fn point2(&self) -> Point {
        self.point2
    }

    /// `point2 - point1`. Never the zero vector.
    pub fn direction(&self) -> Vector {
        self.point2 - self.point1
    }

    pub fn length(&self) -> f64 {
        self.direction().magnitude()
    }

    /// Point at parameter `t` along the segment; `0` and `1` give the exact endpoints.
    pub fn point_at(&self, t: f64) -> Point {
        if t == 0.0 {
            self.point1
        } else if t == 1.0 {
            self.point2
        } else {
            Point::new(
                self.point1.x + t * (self.point2.x - self.point1.x),
                self.point1.y + t * (self.point2.y - self.point1.y),
            )
        }
    }

    pub fn intersection_point(&self, other: &LineSegment) -> Option<Point> {
        SegmentIntersection::between(self, other).point()
    }

    pub fn intersects_with(&self, other: &LineSegment) -> bool {
        self.intersection_point(other).is_some()
    }
}
