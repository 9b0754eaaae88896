// tests/intersection_properties.rs

use assert_approx_eq::assert_approx_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use segment_intersect::generator::SegmentGenerator;
use segment_intersect::{find_all_intersections, LineSegment, Point, SegmentIntersection, Vector};

fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment {
    LineSegment::new(Point::new(x1, y1), Point::new(x2, y2)).unwrap()
}

fn assert_point(actual: Option<Point>, x: f64, y: f64) {
    let point = actual.expect("expected an intersection");
    assert_approx_eq!(point.x, x, 1e-9);
    assert_approx_eq!(point.y, y, 1e-9);
}

#[test]
fn perpendicular_diagonals_cross_in_the_middle() {
    let a = segment(0.0, 0.0, 4.0, 4.0);
    let b = segment(0.0, 4.0, 4.0, 0.0);
    assert_point(a.intersection_point(&b), 2.0, 2.0);
}

#[test]
fn vertical_segment_crosses_without_numeric_failure() {
    let a = segment(2.0, 0.0, 2.0, 4.0);
    let b = segment(0.0, 2.0, 4.0, 2.0);
    assert_point(a.intersection_point(&b), 2.0, 2.0);
    assert_point(b.intersection_point(&a), 2.0, 2.0);
}

#[test]
fn two_vertical_segments_are_parallel() {
    let a = segment(1.0, 0.0, 1.0, 5.0);
    let b = segment(3.0, 0.0, 3.0, 5.0);
    assert_eq!(SegmentIntersection::between(&a, &b), SegmentIntersection::Parallel);
}

#[test]
fn parallel_segments_do_not_intersect() {
    let a = segment(0.0, 0.0, 1.0, 0.0);
    let b = segment(0.0, 1.0, 1.0, 1.0);
    assert!(!a.intersects_with(&b));
    assert_eq!(a.intersection_point(&b), None);
}

#[test]
fn disjoint_pieces_of_one_line_do_not_intersect() {
    let a = segment(0.0, 0.0, 1.0, 1.0);
    let b = segment(2.0, 2.0, 3.0, 3.0);
    assert_eq!(a.intersection_point(&b), None);
}

#[test]
fn shared_endpoint_is_the_intersection() {
    let a = segment(0.0, 0.0, 2.0, 2.0);
    let b = segment(2.0, 2.0, 4.0, 0.0);
    assert_eq!(a.intersection_point(&b), Some(Point::new(2.0, 2.0)));
    assert_eq!(b.intersection_point(&a), Some(Point::new(2.0, 2.0)));

    // Reversed endpoint order on both sides.
    let a = segment(2.0, 2.0, 0.0, 0.0);
    let b = segment(4.0, 0.0, 2.0, 2.0);
    assert_eq!(a.intersection_point(&b), Some(Point::new(2.0, 2.0)));
}

#[test]
fn endpoint_touching_the_interior_counts() {
    let a = segment(0.0, 0.0, 10.0, 0.0);
    let b = segment(5.0, 0.0, 5.0, 3.0);
    assert_point(a.intersection_point(&b), 5.0, 0.0);
}

#[test]
fn random_pairs_are_symmetric_and_self_consistent() {
    let mut rng = StdRng::seed_from_u64(42);
    let segments = SegmentGenerator::random_segments(&mut rng, 60, 800.0, 600.0);

    let mut hits = 0;
    for a in &segments {
        for b in &segments {
            if a == b {
                continue;
            }
            let forward = a.intersection_point(b);
            let backward = b.intersection_point(a);
            assert_eq!(forward, backward, "asymmetric result for {:?} and {:?}", a, b);
            assert_eq!(a.intersects_with(b), forward.is_some());
            if forward.is_some() {
                hits += 1;
            }
        }
    }
    // Sixty random segments on a canvas this size always cross somewhere.
    assert!(hits > 0);
}

#[test]
fn found_points_lie_on_both_segments() {
    let mut rng = StdRng::seed_from_u64(7);
    let segments = SegmentGenerator::random_segments(&mut rng, 40, 500.0, 500.0);
    for crossing in find_all_intersections(&segments) {
        assert!(crossing.first < crossing.second);
        for index in [crossing.first, crossing.second] {
            let s = segments[index];
            let along = crossing.point - s.point1();
            // Distance from the supporting line, relative to the segment length.
            let off_line = s.direction().perp_dot(&along).abs() / s.length();
            assert!(off_line < 1e-6, "point {:?} is {} away from {:?}", crossing.point, off_line, s);
        }
    }
}

#[test]
fn star_spokes_all_meet_at_the_center() {
    let spokes = SegmentGenerator::star(100.0, 50.0, 40.0, 8);
    assert_eq!(spokes.len(), 8);
    let crossings = find_all_intersections(&spokes);
    assert_eq!(crossings.len(), 8 * 7 / 2);
    for crossing in crossings {
        assert_approx_eq!(crossing.point.x, 100.0, 1e-9);
        assert_approx_eq!(crossing.point.y, 50.0, 1e-9);
    }
}

#[test]
fn normalized_vectors_have_unit_magnitude() {
    let mut rng = StdRng::seed_from_u64(3);
    for segment in SegmentGenerator::random_segments(&mut rng, 100, 1000.0, 1000.0) {
        let unit = segment.direction().normalize().unwrap();
        assert_approx_eq!(unit.magnitude(), 1.0, 1e-12);
    }
    assert!(Vector::ZERO.normalize().is_err());
}
