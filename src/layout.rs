//! Static page content: branding, navigation menu, summary tiles and the
//! gauge/network panel descriptors.
//!
//! Menu entries are inert placeholders: they can be focused, never activated.

use serde::Serialize;
use std::fmt;

use crate::gauge::RingGauge;
use crate::metrics::MetricsState;
use crate::palette::{self, Rgb};

/// Product name shown next to the brand mark
pub const BRAND_TITLE: &str = "Private YouTube Scheduler";

/// Icons used on the page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    PlayCircle,
    LayoutDashboard,
    CalendarDays,
    GalleryHorizontal,
    Image,
    Activity,
    Video,
    Clock,
    Wifi,
}

impl Icon {
    /// Single-cell terminal glyph
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::PlayCircle => "▶",
            Icon::LayoutDashboard => "▦",
            Icon::CalendarDays => "▤",
            Icon::GalleryHorizontal => "▥",
            Icon::Image => "▣",
            Icon::Activity => "∿",
            Icon::Video => "◘",
            Icon::Clock => "◷",
            Icon::Wifi => "≋",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// One navigation button
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub label: &'static str,
    pub icon: Icon,
}

/// Navigation menu, in display order
pub const MENU: [MenuEntry; 5] = [
    MenuEntry {
        label: "Dashboard",
        icon: Icon::LayoutDashboard,
    },
    MenuEntry {
        label: "Jadwal",
        icon: Icon::CalendarDays,
    },
    MenuEntry {
        label: "Live Streaming",
        icon: Icon::PlayCircle,
    },
    MenuEntry {
        label: "Video Gallery",
        icon: Icon::GalleryHorizontal,
    },
    MenuEntry {
        label: "Thumbnails",
        icon: Icon::Image,
    },
];

/// One summary tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatTile {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    pub badge: Option<&'static str>,
}

pub const STAT_TILES: [StatTile; 4] = [
    StatTile {
        icon: Icon::CalendarDays,
        label: "Total Jadwal",
        value: "1",
        badge: None,
    },
    StatTile {
        icon: Icon::Activity,
        label: "Live Sekarang",
        value: "0",
        badge: None,
    },
    StatTile {
        icon: Icon::Video,
        label: "Video Library",
        value: "1",
        badge: None,
    },
    StatTile {
        icon: Icon::Clock,
        label: "Durasi Hari Ini",
        value: "7 min",
        badge: None,
    },
];

/// Which reading a gauge shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeKind {
    Cpu,
    Memory,
    Disk,
}

/// Label and accent for one gauge slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GaugeSlot {
    pub kind: GaugeKind,
    pub label: &'static str,
    pub accent: Rgb,
}

impl GaugeSlot {
    pub fn value(&self, metrics: &MetricsState) -> f64 {
        match self.kind {
            GaugeKind::Cpu => metrics.cpu,
            GaugeKind::Memory => metrics.mem,
            GaugeKind::Disk => metrics.disk,
        }
    }

    /// Gauge for the current reading at the given size
    pub fn gauge(&self, metrics: &MetricsState, diameter: f64, stroke_width: f64) -> RingGauge {
        RingGauge::with_size(self.value(metrics), diameter, stroke_width)
            .label(self.label)
            .accent(self.accent)
    }
}

pub const GAUGE_SLOTS: [GaugeSlot; 3] = [
    GaugeSlot {
        kind: GaugeKind::Cpu,
        label: "CPU Usage",
        accent: palette::ACCENT_SKY,
    },
    GaugeSlot {
        kind: GaugeKind::Memory,
        label: "Memory Usage",
        accent: palette::ACCENT_PINK,
    },
    GaugeSlot {
        kind: GaugeKind::Disk,
        label: "Disk Usage",
        accent: palette::ACCENT_CYAN,
    },
];

pub const NETWORK_TITLE: &str = "Network Speed";

/// Rate figure as shown in the network panel, e.g. `2.25 KB/s`
pub fn format_rate(rate: f64) -> String {
    format!("{:.2} KB/s", rate)
}

/// Rows of the network panel: `(figure, caption)`
pub fn network_rows(metrics: &MetricsState) -> [(String, &'static str); 2] {
    [
        (format_rate(metrics.download_rate), "Download"),
        (format_rate(metrics.upload_rate), "Upload"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let labels: Vec<_> = MENU.iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            ["Dashboard", "Jadwal", "Live Streaming", "Video Gallery", "Thumbnails"]
        );
    }

    #[test]
    fn test_tiles() {
        assert_eq!(STAT_TILES[0].label, "Total Jadwal");
        assert_eq!(STAT_TILES[3].value, "7 min");
        assert!(STAT_TILES.iter().all(|t| t.badge.is_none()));
    }

    #[test]
    fn test_gauge_slots_follow_metrics() {
        let metrics = MetricsState::SEED;
        let values: Vec<_> = GAUGE_SLOTS.iter().map(|s| s.value(&metrics)).collect();
        assert_eq!(values, [47.1, 91.8, 90.4]);

        let gauge = GAUGE_SLOTS[1].gauge(&metrics, 160.0, 14.0);
        assert_eq!(gauge.label.as_deref(), Some("Memory Usage"));
        assert_eq!(gauge.accent, palette::ACCENT_PINK);
        assert_eq!(gauge.value_text(), "91.8%");
    }

    #[test]
    fn test_network_rows() {
        let rows = network_rows(&MetricsState::SEED);
        assert_eq!(rows[0], ("2.25 KB/s".to_string(), "Download"));
        assert_eq!(rows[1], ("1.28 KB/s".to_string(), "Upload"));
    }
}
