use glam::dvec2;
use risk_gauge::data_types::{shade, Rgb};
use risk_gauge::geometry::{arc_path, needle_segment, polar, radial_segment, ArcPath};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

#[test]
fn test_polar_points() {
    let c = dvec2(100.0, 100.0);
    let p = polar(c, 10.0, -PI);
    assert!((p.x - 90.0).abs() < 1e-9);
    assert!((p.y - 100.0).abs() < 1e-9);
    let p = polar(c, 10.0, -FRAC_PI_2);
    assert!((p.x - 100.0).abs() < 1e-9);
    assert!((p.y - 90.0).abs() < 1e-9);
}

#[test]
fn test_semicircle_path() {
    let d = arc_path(150.0, 184.0, 100.0, -PI, 0.0);
    assert_eq!(d, "M 50 184 A 100 100 0 0 1 250 184");
}

#[test]
fn test_large_arc_flag() {
    let c = dvec2(0.0, 0.0);
    assert!(!ArcPath::new(c, 1.0, 0.0, PI).large_arc());
    assert!(ArcPath::new(c, 1.0, 0.0, PI + 0.01).large_arc());
    assert!(ArcPath::new(c, 1.0, 0.0, -(PI + 0.01)).large_arc());
}

#[test]
fn test_reverse_span_flips_sweep() {
    let arc = ArcPath::new(dvec2(0.0, 0.0), 10.0, 0.0, -FRAC_PI_2);
    assert!(!arc.sweep());
    assert!(arc.to_path_data().contains(" 0 0 0 "));
}

#[test]
fn test_full_circle_is_two_halves() {
    let d = ArcPath::new(dvec2(0.0, 0.0), 10.0, 0.0, TAU).to_path_data();
    assert_eq!(d.matches(" A ").count(), 2);
    assert_eq!(d, "M 10 0 A 10 10 0 0 1 -10 0 A 10 10 0 0 1 10 0");

    // Spans beyond a full turn are capped.
    let arc = ArcPath::new(dvec2(0.0, 0.0), 10.0, 0.0, 3.0 * TAU);
    assert!((arc.span() - TAU).abs() < 1e-12);
}

#[test]
fn test_tick_and_needle_segments() {
    let c = dvec2(0.0, 0.0);
    let (a, b) = radial_segment(c, 80.0, 101.0, -FRAC_PI_2);
    assert!((a.y + 80.0).abs() < 1e-9);
    assert!((b.y + 101.0).abs() < 1e-9);

    let (from, to) = needle_segment(c, 60.0, 0.0);
    assert_eq!(from, c);
    assert!((to.x - 60.0).abs() < 1e-9);
}

#[test]
fn test_shade_inner_ring_color() {
    assert_eq!(shade("#256f3a", -18.0), "#1e5b30");
    assert_eq!(shade("#ffffff", 20.0), "#ffffff");
    assert_eq!(Rgb::parse_hex("#1E5B30"), Some(Rgb::new(30, 91, 48)));
    assert_eq!(shade("not-a-color", -18.0), "not-a-color");
}
