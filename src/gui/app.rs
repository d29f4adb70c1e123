//! Main GUI application

use chrono::Local;
use egui::RichText;
use std::time::Instant;

use super::theme::{self, SlateColors};
use super::widgets::{self, RingGaugeWidget};
use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::layout::{self, Icon, MENU, STAT_TILES};

/// Rings shrink with narrow columns but never below this
const GAUGE_MIN_SIZE: f32 = 96.0;

/// Desktop rendition of the dashboard
pub struct DashboardApp {
    dashboard: Dashboard,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        theme::apply(&cc.egui_ctx);
        Self {
            dashboard: Dashboard::from_config(&config),
        }
    }

    fn header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            widgets::card()
                .fill(SlateColors::BRAND)
                .inner_margin(6.0)
                .rounding(6.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(Icon::PlayCircle.glyph()).color(egui::Color32::WHITE));
                });
            ui.label(RichText::new(layout::BRAND_TITLE).size(18.0).strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let clock = self.dashboard.clock();
                ui.vertical(|ui| {
                    ui.label(RichText::new(clock.formatted_time()).size(24.0).strong());
                    ui.label(
                        RichText::new(clock.formatted_date())
                            .size(11.0)
                            .color(SlateColors::TEXT_MUTED),
                    );
                });
            });
        });
    }

    fn menu(&self, ui: &mut egui::Ui) {
        ui.columns(MENU.len(), |cols| {
            for (col, entry) in cols.iter_mut().zip(MENU.iter()) {
                // Placeholders: clicks are ignored
                col.add_sized(
                    [col.available_width(), 48.0],
                    egui::Button::new(format!("{}\n{}", entry.icon.glyph(), entry.label)),
                );
            }
        });
    }

    fn tiles(&self, ui: &mut egui::Ui) {
        ui.columns(STAT_TILES.len(), |cols| {
            for (col, tile) in cols.iter_mut().zip(STAT_TILES.iter()) {
                widgets::stat_tile(col, tile);
            }
        });
    }

    fn metrics(&self, ui: &mut egui::Ui) {
        let gauges = self.dashboard.gauges();
        ui.columns(4, |cols| {
            for (col, gauge) in cols.iter_mut().zip(gauges.iter()) {
                col.vertical_centered(|ui| {
                    let max = gauge.geometry.diameter as f32;
                    let size = (ui.available_width() - 8.0).clamp(GAUGE_MIN_SIZE.min(max), max);
                    ui.add(RingGaugeWidget::new(gauge).size(size));
                });
            }

            let metrics = self.dashboard.metrics();
            widgets::card().show(&mut cols[3], |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(
                    RichText::new(format!("{} {}", Icon::Wifi.glyph(), layout::NETWORK_TITLE))
                        .size(13.0)
                        .color(SlateColors::TEXT_LABEL),
                );
                ui.add_space(12.0);
                for (figure, caption) in layout::network_rows(metrics) {
                    ui.label(RichText::new(figure).size(26.0).strong());
                    ui.label(RichText::new(caption).size(11.0).color(SlateColors::TEXT_MUTED));
                    ui.add_space(12.0);
                }
            });
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.dashboard.advance(now, Local::now());

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(SlateColors::BACKGROUND)
                    .inner_margin(24.0),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.header(ui);
                    ui.add_space(24.0);
                    self.menu(ui);
                    ui.add_space(18.0);
                    self.tiles(ui);
                    ui.add_space(18.0);
                    self.metrics(ui);
                });
            });

        if let Some(wait) = self.dashboard.time_until_next_tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
