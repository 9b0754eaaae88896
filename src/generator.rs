// src/generator.rs

use rand::Rng;

use crate::geometry::{LineSegment, Point};

pub struct SegmentGenerator;

impl SegmentGenerator {
    /// A segment with both endpoints uniformly placed in `[0, width) x [0, height)`.
    pub fn random_segment(rng: &mut impl Rng, width: f64, height: f64) -> LineSegment {
        loop {
            let point1 = Point::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
            let point2 = Point::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
            // Only a repeated sample lands here.
            if let Ok(segment) = LineSegment::new(point1, point2) {
                return segment;
            }
        }
    }

    pub fn random_segments(
        rng: &mut impl Rng,
        count: usize,
        width: f64,
        height: f64,
    ) -> Vec<LineSegment> {
        (0..count)
            .map(|_| Self::random_segment(rng, width, height))
            .collect()
    }

    /// `count` diameters of a circle, evenly spread over half a turn. Every
    /// pair crosses at `(center_x, center_y)`.
    pub fn star(center_x: f64, center_y: f64, radius: f64, count: usize) -> Vec<LineSegment> {
        let mut segments = Vec::with_capacity(count);
        for i in 0..count {
            let angle = (i as f64) * std::f64::consts::PI / (count as f64);
            let (sin, cos) = angle.sin_cos();
            let start = Point::new(center_x - radius * cos, center_y - radius * sin);
            let end = Point::new(center_x + radius * cos, center_y + radius * sin);
            if let Ok(segment) = LineSegment::new(start, end) {
                segments.push(segment);
            }
        }
        segments
    }
}
