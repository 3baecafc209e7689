use crate::bands::BandClassifier;
use crate::data_types::StopSet;
use crate::resolver::NumericReading;
use serde::{Deserialize, Serialize};

/// Input domain, display domain and angular sweep of a dial.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleConfig {
    pub input_min: f64,
    pub input_max: f64,
    pub scale_min: f64,
    pub scale_max: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
    pub reverse: bool,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            input_min: 0.0,
            input_max: 1.0,
            scale_min: 0.0,
            scale_max: 1.0,
            start_angle_deg: -180.0,
            end_angle_deg: 0.0,
            reverse: false,
        }
    }
}

/// Fully processed reading ready for drawing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MappedValue {
    pub raw: f64,
    pub scaled: f64,
    /// Equal to `scaled` unless snapping was requested.
    pub snapped: f64,
    pub band_index: usize,
    /// Needle angle in radians.
    pub angle: f64,
}

/// Clamp that tolerates inverted bounds.
pub fn clamp_between(value: f64, a: f64, b: f64) -> f64 {
    value.max(a.min(b)).min(a.max(b))
}

/// `max - min`, or 1 when the range is degenerate.
fn span_or_one(min: f64, max: f64) -> f64 {
    let span = max - min;
    if span == 0.0 || !span.is_finite() {
        1.0
    } else {
        span
    }
}

impl ScaleConfig {
    pub fn start_angle(&self) -> f64 {
        self.start_angle_deg.to_radians()
    }

    pub fn end_angle(&self) -> f64 {
        self.end_angle_deg.to_radians()
    }

    /// Linear remap from the input domain onto the display domain, clamped.
    pub fn remap(&self, raw: f64) -> f64 {
        let clamped = clamp_between(raw, self.input_min, self.input_max);
        let scaled = self.scale_min
            + (clamped - self.input_min) * (self.scale_max - self.scale_min)
                / span_or_one(self.input_min, self.input_max);
        clamp_between(scaled, self.scale_min, self.scale_max)
    }

    /// Angle in radians for a display-domain value.
    pub fn angle_of(&self, value: f64) -> f64 {
        let start = self.start_angle();
        let pct = (value - self.scale_min) / span_or_one(self.scale_min, self.scale_max);
        start + pct * (self.end_angle() - start)
    }
}

pub struct ScaleMapper;

impl ScaleMapper {
    /// Maps a reading onto the dial. Misses display `input_min`.
    pub fn map(reading: &NumericReading, cfg: &ScaleConfig, stops: &StopSet, snap: bool) -> MappedValue {
        let raw = if reading.found && reading.value.is_finite() {
            reading.value
        } else {
            cfg.input_min
        };
        let scaled = cfg.remap(raw);
        let snapped = if snap { stops.nearest(scaled) } else { scaled };

        MappedValue {
            raw,
            scaled,
            snapped,
            band_index: BandClassifier::band_index(snapped, stops),
            angle: cfg.angle_of(snapped),
        }
    }
}

impl MappedValue {
    /// Same reading, with the needle moved to an intermediate display value.
    pub fn displayed_at(&self, value: f64, cfg: &ScaleConfig, stops: &StopSet) -> Self {
        Self {
            snapped: value,
            band_index: BandClassifier::band_index(value, stops),
            angle: cfg.angle_of(value),
            ..*self
        }
    }
}
