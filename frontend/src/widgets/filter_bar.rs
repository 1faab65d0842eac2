use dioxus::prelude::*;
use events_grid_core::view::{FilterOption, TypeFilter};

use crate::theme::{spacing, GridColors};

const BUTTON_STYLE: &str = "padding: 6px 14px; border-radius: 9999px; border: none; cursor: pointer; font-size: 0.875rem;";

#[component]
pub fn FilterBar(
    options: Vec<FilterOption>,
    active: TypeFilter,
    accent: String,
    on_select: EventHandler<TypeFilter>,
) -> Element {
    let buttons: Vec<(FilterOption, String)> = options
        .into_iter()
        .map(|option| {
            let style = if option.filter == active {
                format!("{BUTTON_STYLE} background-color: {accent}; color: #ffffff;")
            } else {
                format!(
                    "{BUTTON_STYLE} background-color: {}; color: {};",
                    GridColors::FILTER_INACTIVE_BG,
                    GridColors::BODY
                )
            };
            (option, style)
        })
        .collect();

    rsx! {
        div {
            role: "group",
            aria_label: "Filter by event type",
            style: "display: flex; flex-wrap: wrap; align-items: center; gap: {spacing::SM}; margin-bottom: {spacing::LG};",
            span { style: "font-size: 0.875rem; font-weight: 500; color: {GridColors::BODY};", "Filter by:" }
            for (option, style) in buttons {
                button {
                    key: "{option.label}",
                    onclick: move |_| on_select.call(option.filter),
                    style: "{style}",
                    "{option.label} "
                    span { style: "opacity: 0.75;", "({option.count})" }
                }
            }
        }
    }
}
