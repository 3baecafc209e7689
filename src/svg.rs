//! Standalone SVG output for a [`Scene`].

use crate::data_types::{Circle, Line, LineCap, Scene, StrokedPath, TextAnchor, TextPrimitive};
use crate::geometry::coord;
use eyre::{eyre, Result};
use facet_svg::facet_xml::SerializeOptions;
use facet_svg::{
    facet_xml, Circle as SvgCircle, Path, PathData, Svg, SvgNode, SvgStyle, Text as SvgText,
};

impl Scene {
    /// Serializes the scene as an SVG document with a `0 0 width height` view box.
    ///
    /// Elements are written in draw order: track, bands, ticks, needle, knob, texts.
    pub fn to_svg(&self) -> Result<String> {
        let mut children: Vec<SvgNode> = Vec::new();

        children.extend(path_node(&self.track));
        for band in &self.bands {
            children.extend(path_node(&band.outer));
            children.extend(path_node(&band.inner));
        }
        for tick in &self.ticks {
            children.push(line_node(&tick.line));
            if let Some(label) = &tick.label {
                children.push(text_node(label));
            }
        }
        children.push(line_node(&self.needle));
        children.push(circle_node(&self.knob.ring));
        children.push(circle_node(&self.knob.center));
        children.extend(self.value_text.as_ref().map(text_node));
        children.extend(self.label_text.as_ref().map(text_node));

        let svg = Svg {
            width: Some(coord(self.width)),
            height: Some(coord(self.height)),
            view_box: Some(format!("0 0 {} {}", coord(self.width), coord(self.height))),
            children,
        };

        fn format_float(value: f64, writer: &mut dyn std::io::Write) -> Result<(), std::io::Error> {
            write!(writer, "{}", coord(value))
        }

        let options = SerializeOptions {
            float_formatter: Some(format_float),
            ..Default::default()
        };
        facet_xml::to_string_with_options(&svg, &options)
            .map_err(|e| eyre!("SVG serialization error: {}", e))
    }
}

fn cap(cap: LineCap) -> &'static str {
    match cap {
        LineCap::Butt => "butt",
        LineCap::Round => "round",
    }
}

/// `None` when the scene holds path data the SVG model rejects.
fn path_node(path: &StrokedPath) -> Option<SvgNode> {
    let d = match PathData::parse(&path.d) {
        Ok(d) => d,
        Err(err) => {
            tracing::warn!(d = %path.d, %err, "skipping unparsable path data");
            return None;
        }
    };
    let style = style_from_entries(vec![
        ("fill", "none".to_string()),
        ("stroke", path.stroke.clone()),
        ("stroke-width", coord(path.stroke_width)),
        ("stroke-linecap", cap(path.line_cap).to_string()),
        ("opacity", coord(path.opacity)),
    ]);
    Some(SvgNode::Path(Path {
        d: Some(d),
        fill: None,
        stroke: None,
        stroke_width: None,
        stroke_dasharray: None,
        style,
    }))
}

fn line_node(line: &Line) -> SvgNode {
    let d = PathData::new()
        .m(line.from.x, line.from.y)
        .l(line.to.x, line.to.y);
    let style = style_from_entries(vec![
        ("fill", "none".to_string()),
        ("stroke", line.stroke.clone()),
        ("stroke-width", coord(line.stroke_width)),
        ("stroke-linecap", cap(line.line_cap).to_string()),
    ]);
    SvgNode::Path(Path {
        d: Some(d),
        fill: None,
        stroke: None,
        stroke_width: None,
        stroke_dasharray: None,
        style,
    })
}

fn circle_node(circle: &Circle) -> SvgNode {
    let mut entries = vec![("fill", circle.fill.clone())];
    if let Some(stroke) = &circle.stroke {
        entries.push(("stroke", stroke.clone()));
        entries.push(("stroke-width", coord(circle.stroke_width)));
    }
    SvgNode::Circle(SvgCircle {
        cx: Some(circle.center.x),
        cy: Some(circle.center.y),
        r: Some(circle.radius),
        fill: None,
        stroke: None,
        stroke_width: None,
        stroke_dasharray: None,
        style: style_from_entries(entries),
    })
}

fn text_node(text: &TextPrimitive) -> SvgNode {
    let anchor = match text.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    SvgNode::Text(SvgText {
        x: Some(text.position.x),
        y: Some(text.position.y),
        fill: Some(text.fill.clone().unwrap_or_else(|| "currentColor".to_string())),
        stroke: None,
        stroke_width: None,
        style: SvgStyle::default(),
        font_family: None,
        font_style: None,
        font_weight: text.bold.then(|| "700".to_string()),
        font_size: Some(coord(text.font_size)),
        text_anchor: Some(anchor.to_string()),
        dominant_baseline: Some("middle".to_string()),
        content: text.text.clone(),
    })
}

fn style_from_entries(entries: Vec<(&'static str, String)>) -> SvgStyle {
    let mut css = String::new();
    for (name, value) in entries {
        if value.is_empty() {
            continue;
        }
        css.push_str(name);
        css.push(':');
        css.push_str(&value);
        css.push(';');
    }
    if css.is_empty() {
        return SvgStyle::default();
    }
    match SvgStyle::parse(&css) {
        Ok(style) => style,
        Err(err) => {
            tracing::warn!(css = %css, %err, "failed to parse generated SVG style");
            SvgStyle::default()
        }
    }
}
