use risk_gauge::bands::{BandClassifier, BandStyle};
use risk_gauge::data_types::{StopSet, GRADE_STOPS, RISK_STOPS};
use risk_gauge::resolver::{NumericReading, ReadingSource};
use risk_gauge::scales::{ScaleConfig, ScaleMapper};
use std::f64::consts::PI;

fn reading(v: f64) -> NumericReading {
    NumericReading::found(v, ReadingSource::Binding)
}

#[test]
fn test_remap_input_to_scale() {
    let cfg = ScaleConfig {
        input_min: 0.0,
        input_max: 1.0,
        scale_min: 0.0,
        scale_max: 5.0,
        ..ScaleConfig::default()
    };
    let stops = StopSet::from_values(&RISK_STOPS);
    let mapped = ScaleMapper::map(&reading(0.4), &cfg, &stops, false);
    assert!((mapped.scaled - 2.0).abs() < 1e-12);
    assert_eq!(mapped.snapped, mapped.scaled);
    assert_eq!(mapped.raw, 0.4);
}

#[test]
fn test_out_of_range_is_clamped() {
    let cfg = ScaleConfig::default();
    let stops = StopSet::from_values(&GRADE_STOPS);
    assert_eq!(ScaleMapper::map(&reading(7.0), &cfg, &stops, false).scaled, 1.0);
    assert_eq!(ScaleMapper::map(&reading(-7.0), &cfg, &stops, false).scaled, 0.0);
}

#[test]
fn test_snap_to_nearest_stop() {
    let cfg = ScaleConfig::default();
    let stops = StopSet::from_values(&GRADE_STOPS);
    let mapped = ScaleMapper::map(&reading(0.53), &cfg, &stops, true);
    assert!((mapped.snapped - 0.6).abs() < 1e-12);
    assert!((mapped.scaled - 0.53).abs() < 1e-12);
    assert_eq!(mapped.band_index, 2);
}

#[test]
fn test_missing_reading_displays_input_min() {
    let cfg = ScaleConfig {
        input_min: 20.0,
        input_max: 40.0,
        scale_min: 0.0,
        scale_max: 5.0,
        ..ScaleConfig::default()
    };
    let stops = StopSet::from_values(&RISK_STOPS);
    let mapped = ScaleMapper::map(&NumericReading::missing(), &cfg, &stops, false);
    assert_eq!(mapped.raw, 20.0);
    assert_eq!(mapped.scaled, 0.0);
    assert_eq!(mapped.band_index, 0);
    assert!((mapped.angle + PI).abs() < 1e-12);
}

#[test]
fn test_degenerate_input_range() {
    let cfg = ScaleConfig {
        input_min: 3.0,
        input_max: 3.0,
        scale_min: 0.0,
        scale_max: 5.0,
        ..ScaleConfig::default()
    };
    let stops = StopSet::from_values(&RISK_STOPS);
    for v in [-10.0, 3.0, 99.0] {
        let mapped = ScaleMapper::map(&reading(v), &cfg, &stops, false);
        assert!(mapped.scaled.is_finite());
        assert_eq!(mapped.scaled, 0.0);
        assert!(mapped.angle.is_finite());
    }
}

#[test]
fn test_degenerate_scale_range() {
    let cfg = ScaleConfig {
        scale_min: 2.0,
        scale_max: 2.0,
        ..ScaleConfig::default()
    };
    let stops = StopSet::from_values(&RISK_STOPS);
    let mapped = ScaleMapper::map(&reading(0.5), &cfg, &stops, false);
    assert_eq!(mapped.scaled, 2.0);
    assert!((mapped.angle + PI).abs() < 1e-12);
}

#[test]
fn test_inverted_ranges_do_not_panic() {
    let cfg = ScaleConfig {
        input_min: 1.0,
        input_max: 0.0,
        scale_min: 5.0,
        scale_max: 0.0,
        ..ScaleConfig::default()
    };
    let stops = StopSet::from_values(&RISK_STOPS);
    let mapped = ScaleMapper::map(&reading(0.25), &cfg, &stops, false);
    assert!((mapped.scaled - 1.25).abs() < 1e-12);
}

#[test]
fn test_angle_spans_semicircle() {
    let cfg = ScaleConfig::default();
    assert!((cfg.angle_of(0.0) + PI).abs() < 1e-12);
    assert!((cfg.angle_of(0.5) + PI / 2.0).abs() < 1e-12);
    assert!(cfg.angle_of(1.0).abs() < 1e-12);
}

#[test]
fn test_mapped_band_matches_classifier() {
    let cfg = ScaleConfig {
        scale_max: 5.0,
        input_max: 5.0,
        ..ScaleConfig::default()
    };
    let stops = StopSet::from_values(&RISK_STOPS);
    let mapped = ScaleMapper::map(&reading(2.5), &cfg, &stops, false);
    let c = BandClassifier::classify(mapped.snapped, &stops, &BandStyle::default(), false);
    assert_eq!(mapped.band_index, c.band_index);
    assert_eq!(c.band_index, 2);
}
