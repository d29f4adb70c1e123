//! Custom widgets for the tubedash GUI

use super::theme::{color, SlateColors};
use crate::gauge::RingGauge;
use crate::layout::StatTile;
use crate::palette;
use egui::{Align2, FontId, Pos2, Response, Sense, Shape, Stroke, Ui, Vec2, Widget};

/// Ring gauge painted from [`RingGeometry`](crate::gauge::RingGeometry)
///
/// The geometry is in gauge units; it is scaled to fit the allocated size.
pub struct RingGaugeWidget<'a> {
    gauge: &'a RingGauge,
    size: f32,
}

impl<'a> RingGaugeWidget<'a> {
    pub fn new(gauge: &'a RingGauge) -> Self {
        Self {
            gauge,
            size: gauge.geometry.diameter as f32,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

impl Widget for RingGaugeWidget<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let caption_height = 44.0;
        let desired = Vec2::new(self.size, self.size + caption_height);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let g = &self.gauge.geometry;
            let scale = self.size / g.diameter as f32;
            let origin = rect.min;
            let to_screen =
                |(x, y): (f64, f64)| Pos2::new(origin.x + x as f32 * scale, origin.y + y as f32 * scale);

            let (cx, cy) = g.center();
            let center = to_screen((cx, cy));
            let radius = g.radius as f32 * scale;
            let stroke_width = g.stroke_width as f32 * scale;
            let accent = color(self.gauge.accent);

            painter.circle_stroke(
                center,
                radius,
                Stroke::new(stroke_width, color(palette::RING_TRACK)),
            );

            let segments = ((g.sweep_radians() * g.radius) / 2.0).ceil().max(2.0) as usize;
            let points: Vec<Pos2> = g.arc_points(segments).into_iter().map(to_screen).collect();
            if let (Some(&start), Some(&end)) = (points.first(), points.last()) {
                painter.add(Shape::line(points, Stroke::new(stroke_width, accent)));
                // round caps
                painter.circle_filled(start, stroke_width / 2.0, accent);
                painter.circle_filled(end, stroke_width / 2.0, accent);
            }

            painter.text(
                center,
                Align2::CENTER_CENTER,
                self.gauge.value_text(),
                FontId::proportional(26.0 * scale.max(0.5)),
                SlateColors::TEXT_PRIMARY,
            );

            let mut caption_y = rect.min.y + self.size + 8.0;
            if let Some(sublabel) = &self.gauge.sublabel {
                painter.text(
                    Pos2::new(center.x, caption_y),
                    Align2::CENTER_TOP,
                    sublabel,
                    FontId::proportional(11.0),
                    SlateColors::TEXT_MUTED,
                );
                caption_y += 16.0;
            }
            if let Some(label) = &self.gauge.label {
                painter.text(
                    Pos2::new(center.x, caption_y),
                    Align2::CENTER_TOP,
                    label,
                    FontId::proportional(14.0),
                    SlateColors::TEXT_LABEL,
                );
            }
        }

        response
    }
}

/// Bordered card used by tiles, menu buttons and the network panel
pub fn card() -> egui::Frame {
    egui::Frame::none()
        .fill(SlateColors::SURFACE)
        .stroke(Stroke::new(1.0, SlateColors::BORDER))
        .rounding(14.0)
        .inner_margin(14.0)
}

/// Summary tile: label and value on the left, icon on the right
pub fn stat_tile(ui: &mut Ui, tile: &StatTile) {
    card().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(tile.label)
                        .size(12.0)
                        .color(SlateColors::TEXT_LABEL),
                );
                ui.label(
                    egui::RichText::new(tile.value)
                        .size(24.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(tile.icon.glyph()).size(20.0));
            });
        });
        if let Some(badge) = tile.badge {
            ui.label(
                egui::RichText::new(badge)
                    .size(11.0)
                    .color(SlateColors::TEXT_MUTED),
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_sets_allocation() {
        let gauge = RingGauge::new(50.0).label("CPU Usage");
        let ctx = egui::Context::default();
        let mut default_rect = egui::Rect::NOTHING;
        let mut sized_rect = egui::Rect::NOTHING;
        ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                default_rect = ui.add(RingGaugeWidget::new(&gauge)).rect;
                sized_rect = ui.add(RingGaugeWidget::new(&gauge).size(100.0)).rect;
            });
        });
        assert_eq!(default_rect.width(), 160.0);
        assert_eq!(sized_rect.width(), 100.0);
        assert_eq!(sized_rect.height(), 144.0);
    }
}
