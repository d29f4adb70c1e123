//! Slate theme for the tubedash GUI

use egui::{Color32, Stroke, Visuals};

use crate::palette::{self, Rgb};

pub const fn color(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

/// GUI color palette
pub struct SlateColors;

impl SlateColors {
    pub const BACKGROUND: Color32 = color(palette::SLATE_900);
    pub const SURFACE: Color32 = color(palette::SLATE_800);
    pub const BORDER: Color32 = color(palette::SLATE_700);
    pub const TEXT_PRIMARY: Color32 = color(palette::SLATE_50);
    pub const TEXT_BODY: Color32 = color(palette::SLATE_200);
    pub const TEXT_LABEL: Color32 = color(palette::SLATE_300);
    pub const TEXT_MUTED: Color32 = color(palette::SLATE_400);
    pub const BRAND: Color32 = color(palette::BRAND_RED);
}

/// Apply the dark slate look to an egui context
pub fn apply(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = SlateColors::BACKGROUND;
    visuals.window_fill = SlateColors::SURFACE;
    visuals.override_text_color = Some(SlateColors::TEXT_BODY);
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, SlateColors::BORDER);
    visuals.widgets.inactive.weak_bg_fill = SlateColors::SURFACE;
    visuals.widgets.hovered.weak_bg_fill = color(palette::SLATE_700);
    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_palette() {
        assert_eq!(SlateColors::BACKGROUND, Color32::from_rgb(15, 23, 42));
        assert_eq!(SlateColors::TEXT_PRIMARY, Color32::from_rgb(248, 250, 252));
        assert_eq!(SlateColors::BRAND, Color32::from_rgb(220, 38, 38));
    }

    #[test]
    fn test_color_is_const() {
        const TRACK: Color32 = color(palette::RING_TRACK);
        assert_eq!(TRACK, SlateColors::BACKGROUND);
        assert_eq!(color(palette::ACCENT_PINK), Color32::from_rgb(0xf4, 0x72, 0xb6));
    }
}
