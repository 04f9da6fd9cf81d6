use std::f64::consts::PI;
use urania::geometry::{
    angle_for_degree, angular_separation, normalize_degrees, polar_to_cartesian,
    position_for_degree, rotation_for_ascendant,
};
use urania::Point;

const EPS: f64 = 1e-9;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-6, "expected {} to be close to {}", a, b);
}

#[test]
fn test_normalize_degrees() {
    assert_close(normalize_degrees(0.0), 0.0);
    assert_close(normalize_degrees(360.0), 0.0);
    assert_close(normalize_degrees(370.0), 10.0);
    assert_close(normalize_degrees(-30.0), 330.0);
    assert_close(normalize_degrees(-720.0), 0.0);

    // Tiny negative values must not come back as 360
    let tiny = normalize_degrees(-1e-15);
    assert!(tiny >= 0.0 && tiny < 360.0);
}

#[test]
fn test_angular_separation_is_shortest_way() {
    assert_close(angular_separation(10.0, 350.0), 20.0);
    assert_close(angular_separation(0.0, 180.0), 180.0);
    assert_close(angular_separation(100.0, 280.0), 180.0);
    assert_close(angular_separation(30.0, 90.0), 60.0);
}

#[test]
fn test_rotation_for_ascendant() {
    assert_close(rotation_for_ascendant(0.0), 270.0 * PI / 180.0);
    assert_close(rotation_for_ascendant(90.0), 0.0);
    assert_close(rotation_for_ascendant(100.0), 10.0 * PI / 180.0);
}

#[test]
fn test_position_lies_on_radius() {
    let center = Point::new(300.0, 300.0);
    for degree in [0.0, 17.5, 90.0, 181.0, 359.99] {
        for ascendant in [0.0, 123.4, 271.0] {
            let p = position_for_degree(degree, ascendant, 250.0, center);
            assert_close(p.distance_to(center), 250.0);
        }
    }
}

#[test]
fn test_position_is_deterministic() {
    let center = Point::new(400.0, 400.0);
    let first = position_for_degree(123.45, 67.8, 200.0, center);
    for _ in 0..10 {
        assert_eq!(position_for_degree(123.45, 67.8, 200.0, center), first);
    }
}

#[test]
fn test_negative_degree_matches_normalized() {
    let center = Point::new(0.0, 0.0);
    let a = position_for_degree(-30.0, 15.0, 100.0, center);
    let b = position_for_degree(330.0, 15.0, 100.0, center);
    assert!((a.x - b.x).abs() < EPS);
    assert!((a.y - b.y).abs() < EPS);
}

#[test]
fn test_ascendant_sits_at_nine_oclock() {
    let center = Point::new(400.0, 400.0);
    for ascendant in [0.0, 45.0, 100.0, 215.5, 359.0] {
        let p = position_for_degree(ascendant, ascendant, 100.0, center);
        assert_close(p.x, 300.0);
        assert_close(p.y, 400.0);
    }
}

#[test]
fn test_zodiac_runs_counter_clockwise() {
    // With the ascendant on the left, ascendant + 90 lands at the bottom
    // of a y-down canvas
    let center = Point::new(0.0, 0.0);
    let p = position_for_degree(90.0, 0.0, 100.0, center);
    assert_close(p.x, 0.0);
    assert_close(p.y, 100.0);

    let q = position_for_degree(180.0, 0.0, 100.0, center);
    assert_close(q.x, 100.0);
    assert_close(q.y, 0.0);
}

#[test]
fn test_angle_and_polar_compose_to_position() {
    let center = Point::new(10.0, 20.0);
    let angle = angle_for_degree(42.0, 200.0);
    let p = polar_to_cartesian(angle, 75.0, center);
    assert_eq!(p, position_for_degree(42.0, 200.0, 75.0, center));
}
