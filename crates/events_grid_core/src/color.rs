//! Hex parsing and lighter/darker shade derivation for the accent palette.

use tracing::warn;

use crate::error::{EventsGridError, Result};

pub const DEFAULT_ACCENT: &str = "#2563eb";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb`, `rrggbb` and `#rgb`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || EventsGridError::InvalidColor(hex.to_string());
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let expanded: String = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(invalid()),
        };
        let num = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
        Ok(Self {
            r: (num >> 16) as u8,
            g: ((num >> 8) & 0xff) as u8,
            b: (num & 0xff) as u8,
        })
    }

    /// Blend each channel toward white by `percent` (0–100).
    pub fn lighter(&self, percent: f64) -> Self {
        let p = clamp_percent(percent);
        let blend = |c: u8| {
            let c = f64::from(c);
            (c + (255.0 - c) * p).floor().min(255.0) as u8
        };
        Self::new(blend(self.r), blend(self.g), blend(self.b))
    }

    /// Scale each channel toward black by `percent` (0–100).
    pub fn darker(&self, percent: f64) -> Self {
        let p = clamp_percent(percent);
        let scale = |c: u8| (f64::from(c) * (1.0 - p)).floor().max(0.0) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0) / 100.0
}

/// Shades used by the grid, all derived from one accent color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccentPalette {
    pub accent: Rgb,
    /// Countdown box background.
    pub soft: Rgb,
    /// Far end of the card header gradient.
    pub deep: Rgb,
}

impl AccentPalette {
    pub const SOFT_PERCENT: f64 = 85.0;
    pub const DEEP_PERCENT: f64 = 30.0;

    pub fn new(accent: Rgb) -> Self {
        Self {
            accent,
            soft: accent.lighter(Self::SOFT_PERCENT),
            deep: accent.darker(Self::DEEP_PERCENT),
        }
    }

    /// Palette for a configured accent string; falls back to [`DEFAULT_ACCENT`]
    /// when it does not parse.
    pub fn from_hex_or_default(hex: &str) -> Self {
        let accent = Rgb::from_hex(hex).unwrap_or_else(|e| {
            warn!(error = %e, fallback = DEFAULT_ACCENT, "accent color rejected");
            default_accent()
        });
        Self::new(accent)
    }

    pub fn header_gradient(&self) -> String {
        format!(
            "linear-gradient(135deg, {}, {})",
            self.accent.to_hex(),
            self.deep.to_css()
        )
    }
}

impl Default for AccentPalette {
    fn default() -> Self {
        Self::new(default_accent())
    }
}

fn default_accent() -> Rgb {
    Rgb::new(0x25, 0x63, 0xeb)
}
