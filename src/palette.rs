//! Shared color palette
//!
//! Slate background shades plus the per-gauge accents. Frontends convert
//! these into their own color types (ratatui `Color`, egui `Color32`, SVG hex).

use serde::{Serialize, Serializer};
use std::fmt;

/// An opaque 8-bit RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// `#rrggbb` form, as used in SVG attributes
    pub fn to_hex_string(self) -> String {
        self.to_string()
    }

    /// Parse `#rrggbb` or `rrggbb`
    pub fn parse(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_hex)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Page background
pub const SLATE_900: Rgb = Rgb::from_hex(0x0f172a);
/// Tile and button surfaces
pub const SLATE_800: Rgb = Rgb::from_hex(0x1e293b);
/// Tile borders and icon wells
pub const SLATE_700: Rgb = Rgb::from_hex(0x334155);
/// Secondary text
pub const SLATE_400: Rgb = Rgb::from_hex(0x94a3b8);
/// Labels
pub const SLATE_300: Rgb = Rgb::from_hex(0xcbd5e1);
/// Body text
pub const SLATE_200: Rgb = Rgb::from_hex(0xe2e8f0);
/// Headline figures
pub const SLATE_50: Rgb = Rgb::from_hex(0xf8fafc);

/// Ring track drawn behind every gauge
pub const RING_TRACK: Rgb = SLATE_900;
/// Brand mark
pub const BRAND_RED: Rgb = Rgb::from_hex(0xdc2626);

/// CPU gauge accent (sky)
pub const ACCENT_SKY: Rgb = Rgb::from_hex(0x38bdf8);
/// Memory gauge accent (pink)
pub const ACCENT_PINK: Rgb = Rgb::from_hex(0xf472b6);
/// Disk gauge accent (cyan), also the default accent
pub const ACCENT_CYAN: Rgb = Rgb::from_hex(0x22d3ee);
