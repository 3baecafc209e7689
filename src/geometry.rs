//! Polar helpers and SVG arc path generation for the dial.

use facet_svg::fmt_num;
use glam::{dvec2, DVec2};
use std::f64::consts::{PI, TAU};
use std::fmt::Write;

/// Point at `radius` from `center` in direction `angle` (radians, y down).
pub fn polar(center: DVec2, radius: f64, angle: f64) -> DVec2 {
    center + DVec2::from_angle(angle) * radius
}

/// Circular arc around `center` from `start` to `end` (radians).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcPath {
    pub center: DVec2,
    pub radius: f64,
    pub start: f64,
    pub end: f64,
}

impl ArcPath {
    pub fn new(center: DVec2, radius: f64, start: f64, end: f64) -> Self {
        // A span beyond a full turn draws the same as a full turn.
        let span = end - start;
        let end = if span.abs() > TAU {
            start + span.clamp(-TAU, TAU)
        } else {
            end
        };
        Self {
            center,
            radius: radius.max(0.0),
            start,
            end,
        }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn start_point(&self) -> DVec2 {
        polar(self.center, self.radius, self.start)
    }

    pub fn end_point(&self) -> DVec2 {
        polar(self.center, self.radius, self.end)
    }

    /// Set when the arc covers more than half a turn.
    pub fn large_arc(&self) -> bool {
        self.span().abs() > PI
    }

    /// Set when the arc runs towards increasing angles (clockwise on screen).
    pub fn sweep(&self) -> bool {
        self.span() >= 0.0
    }

    /// SVG path data: `M x1 y1 A r r 0 large sweep x2 y2`.
    ///
    /// A full turn has coincident endpoints, which SVG renders as nothing, so it
    /// is written as two half arcs.
    pub fn to_path_data(&self) -> String {
        let start = self.start_point();
        let mut d = format!("M {} {}", coord(start.x), coord(start.y));
        if self.span().abs() >= TAU - 1e-9 {
            let mid = polar(self.center, self.radius, self.start + self.span() / 2.0);
            self.push_arc(&mut d, false, mid);
            self.push_arc(&mut d, false, self.end_point());
        } else {
            self.push_arc(&mut d, self.large_arc(), self.end_point());
        }
        d
    }

    fn push_arc(&self, d: &mut String, large: bool, to: DVec2) {
        let r = coord(self.radius);
        let _ = write!(
            d,
            " A {r} {r} 0 {} {} {} {}",
            u8::from(large),
            u8::from(self.sweep()),
            coord(to.x),
            coord(to.y)
        );
    }
}

/// Arc path data for the given circle and angular span.
pub fn arc_path(center_x: f64, center_y: f64, radius: f64, angle_start: f64, angle_end: f64) -> String {
    ArcPath::new(dvec2(center_x, center_y), radius, angle_start, angle_end).to_path_data()
}

/// Radial segment between two radii at a fixed angle (ticks).
pub fn radial_segment(center: DVec2, inner_radius: f64, outer_radius: f64, angle: f64) -> (DVec2, DVec2) {
    (
        polar(center, inner_radius, angle),
        polar(center, outer_radius, angle),
    )
}

/// Needle from the pivot to `length` along `angle`.
pub fn needle_segment(center: DVec2, length: f64, angle: f64) -> (DVec2, DVec2) {
    (center, polar(center, length.max(0.0), angle))
}

/// Path and attribute number: rounded to thousandths, written in SVG number format.
pub fn coord(v: f64) -> String {
    if !v.is_finite() {
        return fmt_num(0.0);
    }
    let rounded = (v * 1000.0).round() / 1000.0;
    // Avoid "-0".
    fmt_num(if rounded == 0.0 { 0.0 } else { rounded })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord() {
        assert_eq!(coord(1.0), "1");
        assert_eq!(coord(-0.0001), "0");
        assert_eq!(coord(12.34567), "12.346");
        assert_eq!(coord(f64::NAN), "0");
    }
}
