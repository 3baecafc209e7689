//! Surface size handling and the dial's derived radii.

use crate::config::{GaugeConfig, GaugePreset, LabelPlacement};
use glam::{dvec2, DVec2};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: f64 = 300.0;
pub const DEFAULT_HEIGHT: f64 = 200.0;

/// Drawing surface size, floored so the geometry never degenerates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Viewport {
    /// Non-positive or non-finite sizes use the default before the floor applies.
    pub fn new(width: f64, height: f64, min_size: (f64, f64)) -> Self {
        let pick = |v: f64, default: f64| if v.is_finite() && v > 0.0 { v } else { default };
        Self {
            width: pick(width, DEFAULT_WIDTH).max(min_size.0),
            height: pick(height, DEFAULT_HEIGHT).max(min_size.1),
        }
    }
}

/// Radii, stroke widths and text sizes for one viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialLayout {
    pub viewport: Viewport,
    pub center: DVec2,
    pub radius: f64,
    pub stroke_width: f64,
    pub inner_radius: f64,
    pub inner_stroke_width: f64,
    pub tick_inner_radius: f64,
    pub tick_outer_radius: f64,
    pub tick_width: f64,
    pub tick_label_radius: f64,
    pub tick_label_size: f64,
    pub needle_length: f64,
    pub needle_width: f64,
    pub ring_radius: f64,
    pub ring_stroke_width: f64,
    pub knob_radius: f64,
    pub value_font_size: f64,
    pub value_position: DVec2,
    pub label_font_size: f64,
    /// Where the risk label sits.
    pub label_position: DVec2,
}

impl DialLayout {
    pub fn compute(viewport: Viewport, cfg: &GaugeConfig) -> Self {
        let (w, h) = (viewport.width, viewport.height);
        let (center_y, radius_factor) = match cfg.preset {
            GaugePreset::Classic => (0.9, 0.45),
            _ => (0.92, 0.46),
        };
        let center = dvec2(w / 2.0, h * center_y);
        let radius = w.min(h * 2.0) * radius_factor;
        let stroke = cfg.stroke_width(radius);

        let (label_position, label_font_size) = match cfg.label_placement {
            LabelPlacement::Center => (
                dvec2(center.x, center.y - radius * 0.25),
                (w * 0.045).max(10.0),
            ),
            LabelPlacement::BelowPivot => {
                let size = (w * 0.07).clamp(14.0, 28.0);
                (dvec2(center.x, (h - 4.0).max(center.y)), size)
            }
        };

        Self {
            viewport,
            center,
            radius,
            stroke_width: stroke,
            inner_radius: radius - stroke * 0.25,
            inner_stroke_width: (stroke * 0.55).max(6.0),
            tick_inner_radius: radius - stroke * 0.75,
            tick_outer_radius: radius + stroke * 0.05,
            tick_width: (stroke * 0.06).max(1.5),
            tick_label_radius: radius + stroke * 0.45,
            tick_label_size: (w * cfg.label_font_scale).max(10.0),
            needle_length: radius - stroke * 0.6,
            needle_width: (stroke * 0.14).max(3.0),
            ring_radius: (stroke * 0.42).max(10.0),
            ring_stroke_width: (stroke * 0.10).max(2.0),
            knob_radius: (stroke * 0.26).max(6.0),
            value_font_size: (w * cfg.value_font_scale).max(16.0),
            value_position: dvec2(center.x, center.y - radius * 0.45),
            label_font_size,
            label_position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_floor() {
        let vp = Viewport::new(10.0, f64::NAN, (220.0, 160.0));
        assert_eq!(vp.width, 220.0);
        assert_eq!(vp.height, 200.0);
    }
}
