//! Ring gauge geometry and SVG rendering
//!
//! A gauge is two concentric circles: a full track and a foreground ring
//! whose dash pattern covers `value`% of the circumference. The filled arc
//! starts at 12 o'clock and sweeps clockwise.
//!
//! All coordinates here use a y-down frame with the origin at the top-left
//! corner of the `diameter × diameter` box, matching SVG and egui.

use serde::Serialize;
use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

use crate::error::{DashError, Result};
use crate::palette::{self, Rgb};

/// Shortest dash ever emitted, so a 0% gauge still shows its round cap
pub const MIN_DASH: f64 = 0.01;

/// Check that a ring of this size has a positive radius
pub fn validate_dimensions(diameter: f64, stroke_width: f64) -> Result<()> {
    if stroke_width > 0.0 && stroke_width < diameter {
        Ok(())
    } else {
        Err(DashError::Config(format!(
            "stroke width {} must be positive and smaller than diameter {}",
            stroke_width, diameter
        )))
    }
}

/// Arc parameters for one gauge reading
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RingGeometry {
    /// Percentage actually drawn, in `[0, 100]`
    pub value: f64,
    pub diameter: f64,
    pub stroke_width: f64,
    pub radius: f64,
    pub circumference: f64,
    /// Length of the filled dash
    pub dash: f64,
    /// Length of the trailing gap
    pub gap: f64,
}

impl RingGeometry {
    pub fn new(value: f64, diameter: f64, stroke_width: f64) -> Self {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 100.0)
        };
        let radius = (diameter - stroke_width) / 2.0;
        let circumference = 2.0 * PI * radius;
        let dash = MIN_DASH.max((value / 100.0) * circumference);
        let gap = circumference - dash;

        Self {
            value,
            diameter,
            stroke_width,
            radius,
            circumference,
            dash,
            gap,
        }
    }

    /// Centre of the ring
    pub fn center(&self) -> (f64, f64) {
        (self.diameter / 2.0, self.diameter / 2.0)
    }

    /// Angle covered by the filled arc
    pub fn sweep_radians(&self) -> f64 {
        if self.radius <= 0.0 {
            return 0.0;
        }
        (self.dash / self.circumference * TAU).min(TAU)
    }

    /// Point on the ring centreline `theta` radians clockwise from 12 o'clock
    pub fn point_at(&self, theta: f64) -> (f64, f64) {
        self.point_at_radius(theta, self.radius)
    }

    /// Same as [`point_at`](Self::point_at) on a concentric circle of `radius`
    pub fn point_at_radius(&self, theta: f64, radius: f64) -> (f64, f64) {
        let (cx, cy) = self.center();
        (cx + radius * theta.sin(), cy - radius * theta.cos())
    }

    /// Polyline of the filled arc with `segments + 1` points
    pub fn arc_points(&self, segments: usize) -> Vec<(f64, f64)> {
        let segments = segments.max(1);
        let sweep = self.sweep_radians();
        (0..=segments)
            .map(|i| self.point_at(sweep * i as f64 / segments as f64))
            .collect()
    }
}

/// A labelled gauge ready to be drawn
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RingGauge {
    pub geometry: RingGeometry,
    pub label: Option<String>,
    pub sublabel: Option<String>,
    pub accent: Rgb,
}

impl RingGauge {
    /// 160px ring with a 14px stroke and the cyan accent
    pub fn new(value: f64) -> Self {
        Self::with_size(value, 160.0, 14.0)
    }

    pub fn with_size(value: f64, diameter: f64, stroke_width: f64) -> Self {
        Self {
            geometry: RingGeometry::new(value, diameter, stroke_width),
            label: None,
            sublabel: None,
            accent: palette::ACCENT_CYAN,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn sublabel(mut self, sublabel: impl Into<String>) -> Self {
        self.sublabel = Some(sublabel.into());
        self
    }

    pub fn accent(mut self, accent: Rgb) -> Self {
        self.accent = accent;
        self
    }

    /// Centre caption, e.g. `47.1%`
    pub fn value_text(&self) -> String {
        format!("{:.1}%", self.geometry.value)
    }

    /// Standalone SVG document for this gauge
    ///
    /// The caption lines are emitted as centred `<text>` elements.
    pub fn to_svg(&self) -> String {
        let g = &self.geometry;
        let (cx, cy) = g.center();
        let mut svg = String::new();

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#,
            size = fmt_num(g.diameter)
        );
        let _ = writeln!(
            svg,
            r#"  <circle cx="{cx}" cy="{cy}" r="{r}" stroke="{track}" stroke-width="{sw}" fill="none"/>"#,
            cx = fmt_num(cx),
            cy = fmt_num(cy),
            r = fmt_num(g.radius),
            track = palette::RING_TRACK,
            sw = fmt_num(g.stroke_width),
        );
        let _ = writeln!(
            svg,
            r#"  <circle cx="{cx}" cy="{cy}" r="{r}" stroke="{accent}" stroke-linecap="round" stroke-width="{sw}" fill="none" stroke-dasharray="{dash} {gap}" transform="rotate(-90 {cx} {cy})"/>"#,
            cx = fmt_num(cx),
            cy = fmt_num(cy),
            r = fmt_num(g.radius),
            accent = self.accent,
            sw = fmt_num(g.stroke_width),
            dash = fmt_num(g.dash),
            gap = fmt_num(g.gap),
        );

        let mut lines = vec![(self.value_text(), 28.0, palette::SLATE_50)];
        if let Some(sublabel) = &self.sublabel {
            lines.push((sublabel.clone(), 11.0, palette::SLATE_400));
        }
        if let Some(label) = &self.label {
            lines.push((label.clone(), 13.0, palette::SLATE_300));
        }
        let line_gap = 18.0;
        let first_y = cy - line_gap * (lines.len() as f64 - 1.0) / 2.0;
        for (i, (text, font_size, color)) in lines.iter().enumerate() {
            let _ = writeln!(
                svg,
                r#"  <text x="{cx}" y="{y}" text-anchor="middle" dominant-baseline="middle" font-size="{font_size}" fill="{color}">{text}</text>"#,
                cx = fmt_num(cx),
                y = fmt_num(first_y + line_gap * i as f64),
                text = escape_xml(text),
            );
        }

        svg.push_str("</svg>\n");
        svg
    }
}

/// Short decimal form: integers without a fraction, others to 4 places
fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.4}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_half_gauge_reference_values() {
        let g = RingGeometry::new(50.0, 160.0, 14.0);
        assert_eq!(g.radius, 73.0);
        assert!((g.circumference - 2.0 * PI * 73.0).abs() < EPS);
        assert!((g.circumference - 458.67).abs() < 0.01);
        assert!((g.dash - 229.33).abs() < 0.01);
        assert!((g.gap - 229.33).abs() < 0.01);
        assert_eq!(g.dash + g.gap, g.circumference);
    }

    #[test]
    fn test_zero_uses_minimum_dash() {
        let g = RingGeometry::new(0.0, 160.0, 14.0);
        assert_eq!(g.dash, MIN_DASH);
        assert!((g.gap - (g.circumference - MIN_DASH)).abs() < EPS);
    }

    #[test]
    fn test_full_gauge_covers_circumference() {
        let g = RingGeometry::new(100.0, 160.0, 14.0);
        assert!((g.dash - g.circumference).abs() < EPS);
        assert!(g.gap.abs() < EPS);
        assert!((g.sweep_radians() - TAU).abs() < EPS);
    }

    #[test]
    fn test_dash_bounds_across_range() {
        for i in 0..=1000 {
            let value = i as f64 / 10.0;
            let g = RingGeometry::new(value, 160.0, 14.0);
            assert!(g.dash >= MIN_DASH, "value {}", value);
            assert!(g.dash <= g.circumference + EPS, "value {}", value);
            assert!((g.dash + g.gap - g.circumference).abs() < EPS, "value {}", value);
        }
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        assert_eq!(RingGeometry::new(140.0, 160.0, 14.0).value, 100.0);
        assert_eq!(RingGeometry::new(-5.0, 160.0, 14.0).dash, MIN_DASH);
        assert_eq!(RingGeometry::new(f64::NAN, 160.0, 14.0).value, 0.0);
    }

    #[test]
    fn test_arc_starts_at_twelve_and_runs_clockwise() {
        let g = RingGeometry::new(25.0, 160.0, 14.0);
        let points = g.arc_points(4);
        assert_eq!(points.len(), 5);
        let (x0, y0) = points[0];
        assert!((x0 - 80.0).abs() < EPS);
        assert!((y0 - 7.0).abs() < EPS);
        // a quarter turn clockwise lands at 3 o'clock
        let (x1, y1) = points[4];
        assert!((x1 - 153.0).abs() < 1e-6);
        assert!((y1 - 80.0).abs() < 1e-6);
    }

    #[test]
    fn test_svg_contains_both_rings() {
        let svg = RingGauge::new(50.0)
            .label("CPU Usage")
            .accent(palette::ACCENT_SKY)
            .to_svg();
        assert!(svg.contains(r#"r="73""#));
        assert!(svg.contains(r##"stroke="#0f172a""##));
        assert!(svg.contains(r##"stroke="#38bdf8""##));
        assert!(svg.contains(r#"stroke-linecap="round""#));
        assert!(svg.contains("stroke-dasharray=\"229.3363 229.3363\""));
        assert!(svg.contains(r#"transform="rotate(-90 80 80)""#));
        assert!(svg.contains(">50.0%</text>"));
        assert!(svg.contains(">CPU Usage</text>"));
    }

    #[test]
    fn test_svg_escapes_labels() {
        let svg = RingGauge::new(10.0).label("R&D <disk>").to_svg();
        assert!(svg.contains("R&amp;D &lt;disk&gt;"));
    }

    #[test]
    fn test_value_text_one_decimal() {
        assert_eq!(RingGauge::new(91.84).value_text(), "91.8%");
    }

    #[test]
    fn test_validate_dimensions() {
        assert!(validate_dimensions(160.0, 14.0).is_ok());
        assert!(validate_dimensions(160.0, 200.0).is_err());
        assert!(validate_dimensions(160.0, 160.0).is_err());
        assert!(validate_dimensions(160.0, 0.0).is_err());
        assert!(validate_dimensions(160.0, -4.0).is_err());
        assert!(validate_dimensions(f64::NAN, 14.0).is_err());
    }
}
