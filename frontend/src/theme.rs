//! Grid theme: neutral colors, type badge colors and spacing.

use events_grid_core::EventType;

/// Fixed colors; the accent palette comes from the widget config instead.
#[derive(Clone, Copy)]
pub struct GridColors;

impl GridColors {
    pub const TITLE: &'static str = "#111827";
    pub const BODY: &'static str = "#4b5563";
    pub const MUTED: &'static str = "#6b7280";
    pub const BORDER: &'static str = "#e5e7eb";
    pub const CARD: &'static str = "#ffffff";
    pub const SKELETON: &'static str = "#e5e7eb";
    pub const URGENT: &'static str = "#ef4444";
    pub const DISABLED_BG: &'static str = "#f3f4f6";
    pub const DISABLED_TEXT: &'static str = "#9ca3af";
    pub const FILTER_INACTIVE_BG: &'static str = "#f3f4f6";

    /// (background, text) of the type badge.
    pub fn badge(type_: EventType) -> (&'static str, &'static str) {
        match type_ {
            EventType::Webinar => ("#dbeafe", "#1d4ed8"),
            EventType::Workshop => ("#dcfce7", "#15803d"),
            EventType::Conference => ("#f3e8ff", "#7e22ce"),
            EventType::Meetup => ("#ffedd5", "#c2410c"),
        }
    }
}

pub mod spacing {
    pub const XS: &str = "4px";
    pub const SM: &str = "8px";
    pub const MD: &str = "16px";
    pub const LG: &str = "24px";
    pub const XL: &str = "32px";
    pub const CARD_PADDING: &str = "20px";
}

/// CSS class shared by every grid container; target of the breakpoint rules.
pub const GRID_CLASS: &str = "events-grid";

/// Animations referenced by the inline styles.
pub const BASE_CSS: &str = "\
@keyframes events-grid-fade-in { from { opacity: 0; transform: translateY(8px); } to { opacity: 1; transform: none; } }\n\
@keyframes events-grid-pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.5; } }";
