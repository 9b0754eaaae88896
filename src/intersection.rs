// src/intersection.rs

use log::debug;

use crate::geometry::{LineSegment, Point};

/// Segments whose unit directions have a cross product (sine of the angle
/// between them) below this are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-10;

/// Parameters this far outside `[0, 1]` are still snapped onto the segment.
pub const PARAMETER_EPSILON: f64 = 1e-9;

/// How a pair of segments relates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentIntersection {
    /// The segments meet at exactly one point.
    Point(Point),
    /// Parallel or collinear directions. Overlapping collinear segments are
    /// reported here as well and never as an intersection.
    Parallel,
    /// The supporting lines cross, but outside at least one segment.
    OutOfRange { t1: f64, t2: f64 },
    /// The parametric solve produced a vanishing or non-finite denominator.
    Unstable,
}

impl SegmentIntersection {
    /// Classifies `first` (P1 -> P2) against `second` (P3 -> P4) by solving
    /// `P1 + t1 * d1 = P3 + t2 * d2`.
    pub fn between(first: &LineSegment, second: &LineSegment) -> Self {
        let d1 = first.direction();
        let d2 = second.direction();

        // LineSegment guarantees non-zero directions; an error here means the
        // magnitude overflowed.
        let sine = match d1.cross(&d2) {
            Ok(sine) => sine,
            Err(err) => {
                debug!("Cannot compare directions {:?} and {:?}: {}", d1, d2, err);
                return SegmentIntersection::Unstable;
            }
        };
        if sine.abs() < PARALLEL_EPSILON {
            debug!("Segments are parallel or collinear, no intersection possible.");
            return SegmentIntersection::Parallel;
        }

        // Cramer's rule on the raw directions. Unlike solving through the x
        // equation first, this has no (x2 - x1) divisor, so vertical segments
        // need no special path.
        let denominator = d1.perp_dot(&d2);
        if !denominator.is_finite() || denominator.abs() < f64::MIN_POSITIVE {
            debug!("Denominator {} is unusable.", denominator);
            return SegmentIntersection::Unstable;
        }

        let offset = second.point1() - first.point1();
        let t1 = offset.perp_dot(&d2) / denominator;
        let t2 = offset.perp_dot(&d1) / denominator;
        if !t1.is_finite() || !t2.is_finite() {
            debug!("Parameters t1: {}, t2: {} are not finite.", t1, t2);
            return SegmentIntersection::Unstable;
        }
        debug!("t1: {}, t2: {}", t1, t2);

        let (Some(t1), Some(t2)) = (snap_parameter(t1), snap_parameter(t2)) else {
            debug!("Intersection is outside of line segment.");
            return SegmentIntersection::OutOfRange { t1, t2 };
        };

        // Averaging both parametrizations makes the result independent of
        // argument order.
        let point = first.point_at(t1).midpoint(&second.point_at(t2));
        debug!("Found intersection at Point({}, {})", point.x, point.y);
        SegmentIntersection::Point(point)
    }

    pub fn point(&self) -> Option<Point> {
        match self {
            SegmentIntersection::Point(point) => Some(*point),
            _ => None,
        }
    }

    pub fn is_point(&self) -> bool {
        matches!(self, SegmentIntersection::Point(_))
    }
}

fn snap_parameter(t: f64) -> Option<f64> {
    if t < -PARAMETER_EPSILON || t > 1.0 + PARAMETER_EPSILON {
        None
    } else {
        Some(t.clamp(0.0, 1.0))
    }
}

/// One intersection found by [`find_all_intersections`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
    /// Index of the earlier segment in the searched slice.
    pub first: usize,
    /// Index of the later segment; always greater than `first`.
    pub second: usize,
    pub point: Point,
}

/// Tests every unordered pair of `segments` exactly once.
pub fn find_all_intersections(segments: &[LineSegment]) -> Vec<Crossing> {
    let mut crossings = Vec::new();
    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            if let Some(point) = segments[i].intersection_point(&segments[j]) {
                crossings.push(Crossing { first: i, second: j, point });
            }
        }
    }
    crossings
}
