use serde::{Deserialize, Serialize};

/// Band boundaries on the display scale.
///
/// Always strictly ascending, duplicate free and at least two entries long.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<f64>", from = "Vec<f64>")]
pub struct StopSet {
    stops: Vec<f64>,
}

pub const GRADE_STOPS: [f64; 6] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];
pub const RISK_STOPS: [f64; 6] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
pub const CLASSIC_STOPS: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

impl StopSet {
    /// Normalizes caller supplied stops.
    ///
    /// `raw` is `None` when the caller did not provide a list; `default` then
    /// substitutes. Non-finite entries are dropped, the rest sorted and
    /// deduplicated. Fewer than two survivors collapse to `[min, max]` of `span`.
    pub fn normalize(raw: Option<&[f64]>, default: &[f64], span: (f64, f64)) -> Self {
        let source = raw.unwrap_or(default);

        let mut stops: Vec<f64> = source.iter().copied().filter(|v| v.is_finite()).collect();
        stops.sort_by(f64::total_cmp);
        stops.dedup();

        if stops.len() >= 2 {
            return Self { stops };
        }

        let (lo, hi) = (span.0.min(span.1), span.0.max(span.1));
        if lo.is_finite() && hi.is_finite() && lo < hi {
            Self { stops: vec![lo, hi] }
        } else {
            Self { stops: vec![0.0, 1.0] }
        }
    }

    /// Wraps already valid stops, normalizing anything that is not.
    pub fn from_values(values: &[f64]) -> Self {
        Self::normalize(Some(values), &[0.0, 1.0], (0.0, 1.0))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Never true; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of bands, one per adjacent stop pair.
    pub fn band_count(&self) -> usize {
        self.stops.len() - 1
    }

    pub fn first(&self) -> f64 {
        self.stops[0]
    }

    pub fn last(&self) -> f64 {
        self.stops[self.stops.len() - 1]
    }

    /// Adjacent `(start, end)` pairs, lowest band first.
    pub fn bands(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }

    /// Stop of minimum absolute distance to `value`; ties keep the lower index.
    pub fn nearest(&self, value: f64) -> f64 {
        let mut best = self.stops[0];
        let mut best_dist = (value - best).abs();
        for &stop in &self.stops[1..] {
            let dist = (value - stop).abs();
            if dist < best_dist {
                best = stop;
                best_dist = dist;
            }
        }
        best
    }
}

impl From<StopSet> for Vec<f64> {
    fn from(set: StopSet) -> Self {
        set.stops
    }
}

impl From<Vec<f64>> for StopSet {
    fn from(values: Vec<f64>) -> Self {
        Self::from_values(&values)
    }
}
