// src/board.rs
//
// Window-independent state of the drawing surface: placed points, the segments
// paired from them, the last search result and the pending "nothing found"
// message.

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::geometry::{LineSegment, Point};
use crate::intersection::{find_all_intersections, Crossing};

pub const NO_INTERSECTIONS_MESSAGE: &str = "No Intersections Found.";
pub const DEFAULT_MESSAGE_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Clone, Debug)]
pub struct BoardSettings {
    /// How long the "nothing found" message stays up before the board clears.
    pub message_timeout: Duration,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self { message_timeout: DEFAULT_MESSAGE_TIMEOUT }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    Found(Vec<Crossing>),
    NotEnoughSegments,
    NoneFound,
}

/// Pairs consecutive points into segments, dropping an odd trailing point.
/// Pairs that cannot form a segment are skipped.
pub fn pair_points(points: &[Point]) -> Vec<LineSegment> {
    points
        .chunks_exact(2)
        .filter_map(|pair| match LineSegment::new(pair[0], pair[1]) {
            Ok(segment) => Some(segment),
            Err(err) => {
                warn!("Skipping segment: {}", err);
                None
            }
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct Board {
    settings: BoardSettings,
    points: Vec<Point>,
    segments: Vec<LineSegment>,
    crossings: Vec<Crossing>,
    clear_deadline: Option<Instant>,
}

impl Board {
    pub fn new(settings: BoardSettings) -> Self {
        Self { settings, ..Self::default() }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn crossings(&self) -> &[Crossing] {
        &self.crossings
    }

    /// Text to show while a deferred clear is pending.
    pub fn message(&self) -> Option<&'static str> {
        self.clear_deadline.map(|_| NO_INTERSECTIONS_MESSAGE)
    }

    pub fn add_point(&mut self, point: Point) {
        info!("Creating point at: {}, {}", point.x, point.y);
        self.points.push(point);
        self.rebuild_segments();
    }

    fn rebuild_segments(&mut self) {
        if self.points.len() % 2 != 0 {
            debug!("Uneven number of points. Cannot determine where to create line segments.");
            return;
        }
        self.segments = pair_points(&self.points);
    }

    pub fn clear(&mut self) {
        info!("Clearing canvas");
        self.points.clear();
        self.segments.clear();
        self.crossings.clear();
        self.clear_deadline = None;
    }

    pub fn find_intersections(&mut self, now: Instant) -> SearchOutcome {
        if self.segments.len() < 2 {
            self.schedule_clear(now);
            return SearchOutcome::NotEnoughSegments;
        }

        info!("Finding intersections among {} segments...", self.segments.len());
        self.crossings = find_all_intersections(&self.segments);
        if self.crossings.is_empty() {
            self.schedule_clear(now);
            return SearchOutcome::NoneFound;
        }
        info!("Found {} intersection(s).", self.crossings.len());
        SearchOutcome::Found(self.crossings.clone())
    }

    fn schedule_clear(&mut self, now: Instant) {
        info!("Did not find any intersection points.");
        self.clear_deadline = Some(now + self.settings.message_timeout);
    }

    /// Runs the deferred clear once its deadline has passed. Returns whether
    /// the board was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.clear_deadline {
            Some(deadline) if now >= deadline => {
                self.clear();
                true
            }
            _ => false,
        }
    }
}
