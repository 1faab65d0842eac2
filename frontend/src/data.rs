//! Bundled sample content: a content query result and module field values, as
//! the CMS would hand them to the grid.

use events_grid_core::adapter;
use events_grid_core::config::WidgetConfig;
use events_grid_core::Event;
use once_cell::sync::Lazy;
use serde_json::Value;
use tracing::error;

static QUERY_RESULT: Lazy<Value> = Lazy::new(|| parse("events.json", include_str!("../data/events.json")));
static FIELD_VALUES: Lazy<Value> = Lazy::new(|| parse("fields.json", include_str!("../data/fields.json")));

fn parse(name: &str, raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        error!(file = name, error = %e, "bundled sample data is not valid JSON");
        Value::Null
    })
}

pub fn sample_query_result() -> &'static Value {
    &QUERY_RESULT
}

pub fn sample_events() -> Vec<Event> {
    adapter::events_from_query_result(&QUERY_RESULT)
}

pub fn sample_config() -> WidgetConfig {
    WidgetConfig::from_field_values(&FIELD_VALUES)
}
