use rand::Rng;
use risk_gauge::bands::BandClassifier;
use risk_gauge::data_types::StopSet;
use risk_gauge::resolver::{NumericReading, ReadingSource};
use risk_gauge::scales::{ScaleConfig, ScaleMapper};

fn random_stops(rng: &mut impl Rng) -> StopSet {
    let n = rng.random_range(0..10);
    let raw: Vec<f64> = (0..n)
        .map(|_| match rng.random_range(0..10) {
            0 => f64::NAN,
            1 => f64::INFINITY,
            // Small integer pool so duplicates show up.
            2..=4 => rng.random_range(-3..4) as f64,
            _ => rng.random_range(-100.0..100.0),
        })
        .collect();
    StopSet::normalize(Some(raw.as_slice()), &[0.0, 1.0], (0.0, 1.0))
}

#[test]
fn test_normalized_stops_are_strictly_ascending() {
    let mut rng = rand::rng();
    for _ in 0..500 {
        let stops = random_stops(&mut rng);
        assert!(stops.len() >= 2);
        assert!(stops.as_slice().iter().all(|s| s.is_finite()));
        assert!(stops.as_slice().windows(2).all(|w| w[0] < w[1]), "{:?}", stops);
    }
}

#[test]
fn test_scaled_value_stays_within_scale() {
    let mut rng = rand::rng();
    for _ in 0..500 {
        let cfg = ScaleConfig {
            input_min: rng.random_range(-50.0..50.0),
            input_max: rng.random_range(-50.0..50.0),
            scale_min: rng.random_range(-10.0..10.0),
            scale_max: rng.random_range(-10.0..10.0),
            ..ScaleConfig::default()
        };
        let stops = random_stops(&mut rng);
        let reading = NumericReading::found(rng.random_range(-1e6..1e6), ReadingSource::Binding);
        let mapped = ScaleMapper::map(&reading, &cfg, &stops, false);
        let (lo, hi) = (cfg.scale_min.min(cfg.scale_max), cfg.scale_min.max(cfg.scale_max));
        assert!(mapped.scaled >= lo && mapped.scaled <= hi, "{:?} {:?}", cfg, mapped);
        assert!(mapped.band_index < stops.band_count());

        let snapped = ScaleMapper::map(&reading, &cfg, &stops, true).snapped;
        assert!(stops.as_slice().contains(&snapped));
    }
}

#[test]
fn test_band_index_is_monotonic() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let stops = random_stops(&mut rng);
        let mut values: Vec<f64> = (0..50).map(|_| rng.random_range(-150.0..150.0)).collect();
        values.sort_by(f64::total_cmp);
        let bands: Vec<usize> = values
            .iter()
            .map(|&v| BandClassifier::band_index(v, &stops))
            .collect();
        assert!(bands.windows(2).all(|w| w[0] <= w[1]));
        assert!(bands.iter().all(|&b| b < stops.band_count()));
    }
}
