//! Display option normalization from CMS field values.

use events_grid_core::color::{AccentPalette, DEFAULT_ACCENT};
use events_grid_core::config::{GridColumns, WidgetConfig};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn empty_field_values_give_defaults() {
    let config = WidgetConfig::from_field_values(&json!({}));
    assert_eq!(config, WidgetConfig::default());
    assert_eq!(config.columns, GridColumns { mobile: 1, tablet: 2, desktop: 3 });
    assert!(config.show_past_events);
    assert!(config.enable_filtering);
    assert_eq!(config.accent_color, DEFAULT_ACCENT);
}

#[test]
fn reads_every_field() {
    let config = WidgetConfig::from_field_values(&json!({
        "gridSettings": {
            "gridColumns_mobile": 2,
            "gridColumns_tablet": 3,
            "gridColumns_desktop": 4
        },
        "features": {
            "showPastEvents": false,
            "enableFiltering": "false",
            "accentColor": { "color": "#16a34a", "opacity": 100 }
        }
    }));
    assert_eq!(
        config,
        WidgetConfig {
            columns: GridColumns { mobile: 2, tablet: 3, desktop: 4 },
            show_past_events: false,
            enable_filtering: false,
            accent_color: "#16a34a".to_string(),
        }
    );
}

#[test]
fn string_flags_and_bare_color_are_accepted() {
    let config = WidgetConfig::from_field_values(&json!({
        "features": { "showPastEvents": "true", "enableFiltering": true, "accentColor": "#000" }
    }));
    assert!(config.show_past_events);
    assert!(config.enable_filtering);
    assert_eq!(config.accent_color, "#000");
}

#[test]
fn column_counts_are_clamped_to_field_ranges() {
    let config = WidgetConfig::from_field_values(&json!({
        "gridSettings": {
            "gridColumns_mobile": 9,
            "gridColumns_tablet": 0,
            "gridColumns_desktop": "2"
        }
    }));
    assert_eq!(config.columns, GridColumns { mobile: 2, tablet: 1, desktop: 2 });
}

#[test]
fn unexpected_shapes_keep_defaults() {
    let config = WidgetConfig::from_field_values(&json!({
        "gridSettings": { "gridColumns_mobile": null, "gridColumns_tablet": [3] },
        "features": { "showPastEvents": 1, "accentColor": { "opacity": 50 } }
    }));
    assert_eq!(config, WidgetConfig::default());
}

#[test]
fn invalid_accent_yields_default_palette() {
    let config = WidgetConfig::from_field_values(&json!({ "features": { "accentColor": "teal-ish" } }));
    assert_eq!(config.accent_color, "teal-ish");
    assert_eq!(config.palette(), AccentPalette::default());
}

#[test]
fn grid_css_uses_column_counts() {
    let columns = GridColumns { mobile: 1, tablet: 2, desktop: 4 };
    assert_eq!(
        columns.base_style(),
        "display: grid; gap: 1.5rem; grid-template-columns: repeat(1, minmax(0, 1fr));"
    );
    let css = columns.media_css("events-grid");
    assert!(css.contains("@media (min-width: 768px) { .events-grid { grid-template-columns: repeat(2, minmax(0, 1fr)) !important; } }"));
    assert!(css.contains("@media (min-width: 1024px) { .events-grid { grid-template-columns: repeat(4, minmax(0, 1fr)) !important; } }"));
}
