use serde::{Deserialize, Serialize};

/// Point in surface coordinates (y grows downwards).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
}

impl From<glam::DVec2> for ScenePoint {
    fn from(p: glam::DVec2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

/// Stroked, unfilled path given as SVG path data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokedPath {
    pub d: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub opacity: f64,
    pub line_cap: LineCap,
}

/// One band: the outer colored ring plus its shaded inner edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BandSegment {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub outer: StrokedPath,
    pub inner: StrokedPath,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub from: ScenePoint,
    pub to: ScenePoint,
    pub stroke: String,
    pub stroke_width: f64,
    pub line_cap: LineCap,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: ScenePoint,
    pub radius: f64,
    pub fill: String,
    pub stroke: Option<String>,
    pub stroke_width: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub position: ScenePoint,
    pub font_size: f64,
    /// `None` inherits the surface's current text color.
    pub fill: Option<String>,
    pub anchor: TextAnchor,
    pub bold: bool,
}

/// Radial tick at a stop, with its optional numeric label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub line: Line,
    pub label: Option<TextPrimitive>,
}

/// Pivot decoration: outer ring and the solid knob on top of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Knob {
    pub ring: Circle,
    pub center: Circle,
}

/// Classified label exposed to the host alongside the drawing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GaugeLabel {
    pub text: String,
    pub color: String,
}

/// Complete, render-ready description of one dial frame.
///
/// Draw order is field order: track, bands, ticks, needle, knob, texts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub track: StrokedPath,
    pub bands: Vec<BandSegment>,
    pub ticks: Vec<Tick>,
    pub needle: Line,
    pub knob: Knob,
    pub value_text: Option<TextPrimitive>,
    pub label_text: Option<TextPrimitive>,
    /// Value the needle points at.
    pub value: f64,
    pub band_index: usize,
    pub label: GaugeLabel,
}
