//! Band lookup and per-band styling.

use crate::data_types::StopSet;
use serde::{Deserialize, Serialize};

/// Green to red.
pub const DEFAULT_BAND_COLORS: [&str; 5] = ["#256f3a", "#87c122", "#f9e339", "#ea9617", "#ea1e32"];
pub const DEFAULT_RISK_LABELS: [&str; 5] = ["Low", "Medium Low", "Medium", "Medium High", "High"];
/// Low to high, as shipped with the risk dial.
pub const ARABIC_RISK_LABELS: [&str; 5] = ["منخفض", "منخفض متوسط", "متوسط", "مرتفع متوسط", "مرتفع"];

/// Colors and labels indexed by band.
///
/// Shorter lists than the band count reuse their last entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BandStyle {
    pub colors: Vec<String>,
    pub labels: Vec<String>,
}

impl Default for BandStyle {
    fn default() -> Self {
        Self {
            colors: DEFAULT_BAND_COLORS.iter().map(|c| c.to_string()).collect(),
            labels: DEFAULT_RISK_LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl BandStyle {
    pub fn new(colors: Vec<String>, labels: Vec<String>) -> Self {
        Self { colors, labels }
    }

    pub fn color_at(&self, index: usize) -> &str {
        pick(&self.colors, index).unwrap_or(DEFAULT_BAND_COLORS[0])
    }

    pub fn label_at(&self, index: usize) -> &str {
        pick(&self.labels, index).unwrap_or("")
    }
}

fn pick(list: &[String], index: usize) -> Option<&str> {
    if list.is_empty() {
        return None;
    }
    Some(list[index.min(list.len() - 1)].as_str())
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub band_index: usize,
    /// `band_index`, mirrored when the dial is reversed. Labels are not mirrored.
    pub color_index: usize,
    pub color: String,
    pub label: String,
}

pub struct BandClassifier;

impl BandClassifier {
    /// Band whose upper stop is the first stop `>= value`.
    ///
    /// Values at or below the first stop land in band 0, values above the last
    /// stop in the last band.
    pub fn band_index(value: f64, stops: &StopSet) -> usize {
        let last_band = stops.len().saturating_sub(2);
        match stops.as_slice().iter().position(|&stop| value <= stop) {
            Some(i) => i.saturating_sub(1).min(last_band),
            None => last_band,
        }
    }

    /// Index into the style lists for band `band_index`.
    pub fn color_index(band_index: usize, stops: &StopSet, reverse: bool) -> usize {
        let last_band = stops.len().saturating_sub(2);
        let band_index = band_index.min(last_band);
        if reverse {
            last_band - band_index
        } else {
            band_index
        }
    }

    pub fn classify(value: f64, stops: &StopSet, style: &BandStyle, reverse: bool) -> Classification {
        let band_index = Self::band_index(value, stops);
        let color_index = Self::color_index(band_index, stops, reverse);
        Classification {
            band_index,
            color_index,
            color: style.color_at(color_index).to_string(),
            label: style.label_at(band_index).to_string(),
        }
    }
}
