//! Display options, normalized from CMS field values.
//!
//! Field values come as `{gridSettings: {..}, features: {..}}`. Every option is
//! optional; booleans may arrive as `true` or `"true"` and the accent color as
//! `{color: "#.."}` or a bare string.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::{AccentPalette, DEFAULT_ACCENT};

/// Column counts for the three layout breakpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridColumns {
    pub mobile: u8,
    pub tablet: u8,
    pub desktop: u8,
}

impl GridColumns {
    pub const MOBILE_MAX: u8 = 2;
    pub const TABLET_MAX: u8 = 3;
    pub const DESKTOP_MAX: u8 = 4;

    pub const TABLET_MIN_WIDTH_PX: u32 = 768;
    pub const DESKTOP_MIN_WIDTH_PX: u32 = 1024;

    /// Inline style for the grid container (mobile-first).
    pub fn base_style(&self) -> String {
        format!(
            "display: grid; gap: 1.5rem; grid-template-columns: repeat({}, minmax(0, 1fr));",
            self.mobile
        )
    }

    /// Media rules widening `.{class}` on tablet and desktop.
    pub fn media_css(&self, class: &str) -> String {
        format!(
            "@media (min-width: {}px) {{ .{class} {{ grid-template-columns: repeat({}, minmax(0, 1fr)) !important; }} }}\n\
             @media (min-width: {}px) {{ .{class} {{ grid-template-columns: repeat({}, minmax(0, 1fr)) !important; }} }}",
            Self::TABLET_MIN_WIDTH_PX,
            self.tablet,
            Self::DESKTOP_MIN_WIDTH_PX,
            self.desktop,
        )
    }
}

impl Default for GridColumns {
    fn default() -> Self {
        Self {
            mobile: 1,
            tablet: 2,
            desktop: 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub columns: GridColumns,
    pub show_past_events: bool,
    pub enable_filtering: bool,
    pub accent_color: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            columns: GridColumns::default(),
            show_past_events: true,
            enable_filtering: true,
            accent_color: DEFAULT_ACCENT.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Build from CMS field values; anything missing or of an unexpected shape
    /// keeps its default. Column counts are clamped to the ranges the CMS fields
    /// allow.
    pub fn from_field_values(values: &Value) -> Self {
        let defaults = Self::default();
        let grid = values.get("gridSettings");
        let features = values.get("features");

        let column = |key: &str, default: u8, max: u8| {
            grid.and_then(|g| g.get(key))
                .and_then(as_number)
                .map(|n| n.clamp(1.0, f64::from(max)) as u8)
                .unwrap_or(default)
        };
        let toggle = |key: &str, default: bool| {
            features
                .and_then(|f| f.get(key))
                .and_then(as_flag)
                .unwrap_or(default)
        };

        let accent_color = features
            .and_then(|f| f.get("accentColor"))
            .and_then(|c| match c {
                Value::String(s) => Some(s.clone()),
                Value::Object(_) => c.get("color").and_then(Value::as_str).map(String::from),
                _ => None,
            })
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.accent_color);

        Self {
            columns: GridColumns {
                mobile: column("gridColumns_mobile", defaults.columns.mobile, GridColumns::MOBILE_MAX),
                tablet: column("gridColumns_tablet", defaults.columns.tablet, GridColumns::TABLET_MAX),
                desktop: column("gridColumns_desktop", defaults.columns.desktop, GridColumns::DESKTOP_MAX),
            },
            show_past_events: toggle("showPastEvents", defaults.show_past_events),
            enable_filtering: toggle("enableFiltering", defaults.enable_filtering),
            accent_color,
        }
    }

    pub fn palette(&self) -> AccentPalette {
        AccentPalette::from_hex_or_default(&self.accent_color)
    }
}

fn as_number(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

fn as_flag(v: &Value) -> Option<bool> {
    match v {
        Value::Bool(b) => Some(*b),
        Value::String(s) => Some(s == "true"),
        _ => None,
    }
}
