use dioxus::prelude::*;

use crate::theme::{spacing, GridColors};

#[component]
pub fn EventSkeleton() -> Element {
    let line = |width: &str| {
        format!(
            "height: 0.75rem; width: {width}; border-radius: 4px; background: {}; margin-bottom: {};",
            GridColors::SKELETON,
            spacing::SM,
        )
    };
    let lines = [line("30%"), line("60%"), line("100%"), line("80%")];

    rsx! {
        div { style: "border: 1px solid {GridColors::BORDER}; border-radius: 12px; overflow: hidden; animation: events-grid-pulse 1.5s ease-in-out infinite;",
            div { style: "height: 10rem; background: {GridColors::SKELETON};" }
            div { style: "padding: {spacing::CARD_PADDING};",
                for (i, style) in lines.into_iter().enumerate() {
                    div { key: "{i}", style: "{style}" }
                }
            }
        }
    }
}
