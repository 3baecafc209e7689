// Scene construction for the dial

use crate::bands::{BandClassifier, BandStyle};
use crate::config::GaugeConfig;
use crate::data_types::{
    shade, BandSegment, Circle, GaugeLabel, Knob, Line, LineCap, Scene, ScenePoint, StopSet,
    StrokedPath, TextAnchor, TextPrimitive, Tick,
};
use crate::geometry::{needle_segment, polar, radial_segment, ArcPath};
use crate::layout::DialLayout;
use crate::scales::MappedValue;

/// Shade applied to a band color for its inner ring.
pub const INNER_SHADE_PCT: f64 = -18.0;

/// Layout plus the display options the renderer needs.
#[derive(Clone, Copy)]
pub struct GeometryConfig<'a> {
    pub layout: DialLayout,
    pub config: &'a GaugeConfig,
}

impl<'a> GeometryConfig<'a> {
    pub fn new(layout: DialLayout, config: &'a GaugeConfig) -> Self {
        Self { layout, config }
    }
}

/// Builds the full scene for `mapped`. Holds no state between calls.
pub fn render(mapped: &MappedValue, stops: &StopSet, style: &BandStyle, geometry: &GeometryConfig) -> Scene {
    let layout = &geometry.layout;
    let cfg = geometry.config;
    let scale = &cfg.scale;
    let value = mapped.snapped;

    let track = StrokedPath {
        d: ArcPath::new(layout.center, layout.radius, scale.start_angle(), scale.end_angle())
            .to_path_data(),
        stroke: cfg.track_color.clone(),
        stroke_width: layout.stroke_width,
        opacity: 1.0,
        line_cap: LineCap::Round,
    };

    let bands = paint_bands(stops, style, geometry);
    let ticks = if cfg.show_ticks {
        paint_ticks(stops, geometry)
    } else {
        Vec::new()
    };

    let (from, to) = needle_segment(layout.center, layout.needle_length, mapped.angle);
    let needle = Line {
        from: from.into(),
        to: to.into(),
        stroke: cfg.needle_color.clone(),
        stroke_width: layout.needle_width,
        line_cap: LineCap::Round,
    };

    let pivot: ScenePoint = layout.center.into();
    let knob = Knob {
        ring: Circle {
            center: pivot,
            radius: layout.ring_radius,
            fill: cfg.knob_color.clone(),
            stroke: Some(cfg.knob_color.clone()),
            stroke_width: layout.ring_stroke_width,
        },
        center: Circle {
            center: pivot,
            radius: layout.knob_radius,
            fill: cfg.knob_color.clone(),
            stroke: None,
            stroke_width: 0.0,
        },
    };

    let classification = BandClassifier::classify(value, stops, style, scale.reverse);
    let label = GaugeLabel {
        text: classification.label,
        color: classification.color,
    };

    let value_text = cfg.show_value.then(|| TextPrimitive {
        text: format_value(value, cfg.decimals),
        position: layout.value_position.into(),
        font_size: layout.value_font_size,
        fill: None,
        anchor: TextAnchor::Middle,
        bold: true,
    });

    let label_text = (cfg.show_risk_label && !label.text.is_empty()).then(|| TextPrimitive {
        text: label.text.clone(),
        position: layout.label_position.into(),
        font_size: layout.label_font_size,
        fill: Some(label.color.clone()),
        anchor: TextAnchor::Middle,
        bold: true,
    });

    Scene {
        width: layout.viewport.width,
        height: layout.viewport.height,
        track,
        bands,
        ticks,
        needle,
        knob,
        value_text,
        label_text,
        value,
        band_index: classification.band_index,
        label,
    }
}

/// Outer ring and shaded inner ring for every adjacent stop pair.
fn paint_bands(stops: &StopSet, style: &BandStyle, geometry: &GeometryConfig) -> Vec<BandSegment> {
    let layout = &geometry.layout;
    let cfg = geometry.config;
    let scale = &cfg.scale;

    stops
        .bands()
        .enumerate()
        .map(|(index, (start, end))| {
            let color_index = BandClassifier::color_index(index, stops, scale.reverse);
            let color = style.color_at(color_index);
            let a1 = scale.angle_of(start);
            let a2 = scale.angle_of(end);

            BandSegment {
                index,
                start,
                end,
                outer: StrokedPath {
                    d: ArcPath::new(layout.center, layout.radius, a1, a2).to_path_data(),
                    stroke: color.to_string(),
                    stroke_width: layout.stroke_width,
                    opacity: cfg.band_opacity,
                    line_cap: LineCap::Butt,
                },
                inner: StrokedPath {
                    d: ArcPath::new(layout.center, layout.inner_radius, a1, a2).to_path_data(),
                    stroke: shade(color, INNER_SHADE_PCT),
                    stroke_width: layout.inner_stroke_width,
                    opacity: cfg.inner_band_opacity,
                    line_cap: LineCap::Butt,
                },
            }
        })
        .collect()
}

fn paint_ticks(stops: &StopSet, geometry: &GeometryConfig) -> Vec<Tick> {
    let layout = &geometry.layout;
    let cfg = geometry.config;

    stops
        .as_slice()
        .iter()
        .map(|&stop| {
            let angle = cfg.scale.angle_of(stop);
            let (from, to) = radial_segment(
                layout.center,
                layout.tick_inner_radius,
                layout.tick_outer_radius,
                angle,
            );
            let label = cfg.show_labels.then(|| TextPrimitive {
                text: format_tick(stop, cfg.decimals),
                position: polar(layout.center, layout.tick_label_radius, angle).into(),
                font_size: layout.tick_label_size,
                fill: None,
                anchor: TextAnchor::Middle,
                bold: false,
            });
            Tick {
                value: stop,
                line: Line {
                    from: from.into(),
                    to: to.into(),
                    stroke: cfg.tick_color.clone(),
                    stroke_width: layout.tick_width,
                    line_cap: LineCap::Butt,
                },
                label,
            }
        })
        .collect()
}

/// Value text with a fixed number of decimals.
pub fn format_value(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value);
    // Avoid "-0.0" for values that round to zero
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

/// Tick labels use at least one decimal on fractional scales.
pub fn format_tick(stop: f64, decimals: usize) -> String {
    if stop.fract() == 0.0 && decimals == 0 {
        format_value(stop, 0)
    } else {
        format_value(stop, decimals.max(1))
    }
}
