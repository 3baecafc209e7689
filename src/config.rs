//! Typed gauge configuration, resolved once from the host's option bag.

use crate::bands::{BandStyle, ARABIC_RISK_LABELS, DEFAULT_BAND_COLORS};
use crate::data_types::{StopSet, CLASSIC_STOPS, GRADE_STOPS, RISK_STOPS};
use crate::scales::ScaleConfig;
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// The widget variants the engine reproduces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GaugePreset {
    /// 0..1 grade with ticks, labels and snapping.
    #[default]
    Grade,
    /// 0..5 risk dial with animated needle and label under the pivot.
    Risk,
    /// 0..100 dial showing the rounded value.
    Classic,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelPlacement {
    #[default]
    Center,
    BelowPivot,
}

/// How the band stroke width is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BandThickness {
    /// Fixed width in surface units.
    Fixed(f64),
    /// Fraction of the dial radius.
    RadiusFraction(f64),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeConfig {
    pub preset: GaugePreset,
    pub stops: StopSet,
    pub scale: ScaleConfig,
    pub style: BandStyle,
    pub band_thickness: BandThickness,
    pub min_band_thickness: f64,
    pub inner_band_opacity: f64,
    pub band_opacity: f64,
    pub snap_to_stops: bool,
    pub show_ticks: bool,
    pub show_labels: bool,
    pub show_value: bool,
    pub show_risk_label: bool,
    pub decimals: usize,
    pub needle_color: String,
    pub knob_color: String,
    pub tick_color: String,
    pub track_color: String,
    pub value_font_scale: f64,
    pub label_font_scale: f64,
    pub label_placement: LabelPlacement,
    pub animate: bool,
    pub animation_ms: f64,
    /// Smallest surface the dial is laid out on.
    pub min_size: (f64, f64),
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self::preset(GaugePreset::Grade)
    }
}

impl GaugePreset {
    pub fn default_stops(self) -> &'static [f64] {
        match self {
            Self::Grade => &GRADE_STOPS,
            Self::Risk => &RISK_STOPS,
            Self::Classic => &CLASSIC_STOPS,
        }
    }

    /// Whether a stop list with fewer than two entries is replaced by the
    /// default stops rather than collapsing to the scale span.
    pub fn short_stop_list_uses_default(self) -> bool {
        matches!(self, Self::Classic)
    }
}

impl GaugeConfig {
    /// Defaults of a preset with no host overrides.
    pub fn preset(preset: GaugePreset) -> Self {
        let stops = StopSet::from_values(preset.default_stops());
        let scale = ScaleConfig {
            input_min: stops.first(),
            input_max: stops.last(),
            scale_min: stops.first(),
            scale_max: stops.last(),
            ..ScaleConfig::default()
        };
        let style = BandStyle::default();
        let base = Self {
            preset,
            stops,
            scale,
            style,
            band_thickness: BandThickness::Fixed(24.0),
            min_band_thickness: 10.0,
            inner_band_opacity: 0.35,
            band_opacity: 0.96,
            snap_to_stops: true,
            show_ticks: true,
            show_labels: true,
            show_value: false,
            show_risk_label: true,
            decimals: 1,
            needle_color: "#ffffff".to_string(),
            knob_color: "#ffffff".to_string(),
            tick_color: "#9ca3af".to_string(),
            track_color: "rgba(17,24,39,0.08)".to_string(),
            value_font_scale: 0.10,
            label_font_scale: 0.045,
            label_placement: LabelPlacement::Center,
            animate: false,
            animation_ms: 420.0,
            min_size: (220.0, 160.0),
        };

        match preset {
            GaugePreset::Grade => base,
            GaugePreset::Risk => Self {
                style: BandStyle::new(
                    DEFAULT_BAND_COLORS.iter().map(|c| c.to_string()).collect(),
                    ARABIC_RISK_LABELS.iter().map(|l| l.to_string()).collect(),
                ),
                band_thickness: BandThickness::Fixed(26.0),
                min_band_thickness: 12.0,
                band_opacity: 0.98,
                snap_to_stops: false,
                show_ticks: false,
                show_labels: false,
                label_placement: LabelPlacement::BelowPivot,
                animate: true,
                min_size: (240.0, 180.0),
                ..base
            },
            GaugePreset::Classic => Self {
                style: BandStyle::new(
                    ["#2ecc71", "#f1c40f", "#e67e22", "#e74c3c", "#8e44ad"]
                        .iter()
                        .map(|c| c.to_string())
                        .collect(),
                    ["Low", "Moderate", "High", "Critical", "Severe"]
                        .iter()
                        .map(|l| l.to_string())
                        .collect(),
                ),
                band_thickness: BandThickness::RadiusFraction(0.16),
                min_band_thickness: 10.0,
                band_opacity: 0.95,
                snap_to_stops: false,
                show_value: true,
                decimals: 0,
                needle_color: "#111827".to_string(),
                knob_color: "#111827".to_string(),
                tick_color: "#6b7280".to_string(),
                label_font_scale: 0.03,
                label_placement: LabelPlacement::BelowPivot,
                min_size: (160.0, 120.0),
                ..base
            },
        }
    }

    /// Parses a JSON option bag. Only malformed JSON text is an error.
    pub fn from_json_str(text: &str, preset: GaugePreset) -> Result<Self> {
        let value: Value = serde_json::from_str(text).wrap_err("gauge options are not valid JSON")?;
        Ok(Self::from_value(&value, preset))
    }

    /// Reads the host's option bag leniently; malformed options keep their defaults.
    pub fn from_value(options: &Value, preset: GaugePreset) -> Self {
        let mut cfg = Self::preset(preset);
        let opts = Options(options);

        // Explicit bounds are read first: they also span the fallback stops.
        let explicit_min = opts.number("scaleMin");
        let explicit_max = opts.number("scaleMax");
        let raw_stops = opts
            .stops()
            .filter(|list| list.len() >= 2 || !preset.short_stop_list_uses_default());
        cfg.stops = StopSet::normalize(
            raw_stops.as_deref(),
            preset.default_stops(),
            (
                explicit_min.unwrap_or(cfg.scale.scale_min),
                explicit_max.unwrap_or(cfg.scale.scale_max),
            ),
        );

        // Risk dials follow their stops unless told otherwise.
        let (default_min, default_max) = match preset {
            GaugePreset::Risk => (cfg.stops.first(), cfg.stops.last()),
            _ => (cfg.scale.scale_min, cfg.scale.scale_max),
        };
        let scale_min = explicit_min.unwrap_or(default_min);
        let scale_max = explicit_max.unwrap_or(default_max);
        cfg.scale = ScaleConfig {
            input_min: opts.number("inputMin").unwrap_or(scale_min),
            input_max: opts.number("inputMax").unwrap_or(scale_max),
            scale_min,
            scale_max,
            start_angle_deg: opts.number("startAngle").unwrap_or(cfg.scale.start_angle_deg),
            end_angle_deg: opts.number("endAngle").unwrap_or(cfg.scale.end_angle_deg),
            reverse: opts.flag("reverse").unwrap_or(cfg.scale.reverse),
        };

        if let Some(colors) = opts.strings("bandColors") {
            cfg.style.colors = colors;
        }
        if let Some(labels) = opts.strings("riskLabels") {
            cfg.style.labels = labels;
        }
        if let Some(t) = opts.number("bandThickness") {
            cfg.band_thickness = BandThickness::Fixed(t);
        }
        cfg.inner_band_opacity = opts
            .number("innerBandOpacity")
            .map(|o| o.clamp(0.0, 1.0))
            .unwrap_or(cfg.inner_band_opacity);
        cfg.snap_to_stops = opts.flag("snapToStops").unwrap_or(cfg.snap_to_stops);
        cfg.show_ticks = opts.flag("showTicks").unwrap_or(cfg.show_ticks);
        cfg.show_labels = opts.flag("showLabels").unwrap_or(cfg.show_labels);
        cfg.show_value = opts.flag("showValue").unwrap_or(cfg.show_value);
        cfg.show_risk_label = opts.flag("showRiskLabel").unwrap_or(cfg.show_risk_label);
        cfg.decimals = opts
            .number("decimals")
            .map(|d| d.round().clamp(0.0, 10.0) as usize)
            .unwrap_or(cfg.decimals);
        if let Some(c) = opts.string("needleColor") {
            cfg.needle_color = c;
        }
        if let Some(c) = opts.string("knobColor") {
            cfg.knob_color = c;
        }
        if let Some(c) = opts.string("tickColor") {
            cfg.tick_color = c;
        }
        cfg.value_font_scale = opts
            .number("valueFontScale")
            .filter(|s| *s > 0.0)
            .unwrap_or(cfg.value_font_scale);
        cfg.label_font_scale = opts
            .number("labelFontScale")
            .filter(|s| *s > 0.0)
            .unwrap_or(cfg.label_font_scale);
        cfg.label_placement = match opts.string("labelPlacement").as_deref() {
            Some("center") => LabelPlacement::Center,
            Some("belowPivot") => LabelPlacement::BelowPivot,
            _ => cfg.label_placement,
        };
        cfg.animate = opts.flag("animate").unwrap_or(cfg.animate);
        cfg.animation_ms = opts
            .number("animationMs")
            .filter(|ms| *ms >= 0.0)
            .unwrap_or(cfg.animation_ms);

        debug!(?preset, stops = ?cfg.stops.as_slice(), scale = ?cfg.scale, "gauge config resolved");
        cfg
    }

    /// Band stroke width for a dial of `radius`, never below the floor.
    pub fn stroke_width(&self, radius: f64) -> f64 {
        let width = match self.band_thickness {
            BandThickness::Fixed(w) => w,
            BandThickness::RadiusFraction(f) => radius * f,
        };
        if width.is_finite() {
            width.max(self.min_band_thickness)
        } else {
            self.min_band_thickness
        }
    }
}

/// Lenient accessors over the raw option bag.
struct Options<'a>(&'a Value);

impl Options<'_> {
    fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    fn number(&self, key: &str) -> Option<f64> {
        let n = self.get(key).and_then(coerce_number);
        if n.is_none() && self.get(key).is_some() {
            debug!(key, "ignoring non-numeric gauge option");
        }
        n
    }

    fn flag(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_f64().map(|n| n != 0.0),
            Value::String(s) => match s.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    fn string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    /// Non-empty list of strings; non-string entries are skipped.
    fn strings(&self, key: &str) -> Option<Vec<String>> {
        let list: Vec<String> = self
            .get(key)?
            .as_array()?
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect();
        (!list.is_empty()).then_some(list)
    }

    /// Stops as a plain array or a `{ "default": [...] }` manifest entry.
    ///
    /// Entries that do not coerce become NaN and are dropped by normalization.
    fn stops(&self) -> Option<Vec<f64>> {
        let raw = self.get("stops")?;
        let list = match raw {
            Value::Array(list) => list,
            Value::Object(map) => map.get("default")?.as_array()?,
            _ => return None,
        };
        Some(list.iter().map(|v| coerce_number(v).unwrap_or(f64::NAN)).collect())
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}
