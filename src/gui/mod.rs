//! tubedash GUI - desktop rendition of the dashboard
//!
//! Same view-model as the TUI, with the ring gauges painted as real arcs.

use eframe::egui;

use crate::config::Config;
use crate::error::{DashError, Result};

mod app;
mod theme;
mod widgets;

pub use app::DashboardApp;

/// Run the tubedash GUI application
///
/// The dashboard (and its tickers) is dropped when the window closes.
pub fn run(config: Config) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title(crate::layout::BRAND_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        "tubedash",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, config)))),
    )
    .map_err(|e| DashError::Frontend(format!("GUI error: {}", e)))
}
