use dioxus::prelude::*;
use events_grid_core::capacity::CapacityInfo;

use crate::theme::{spacing, GridColors};

#[component]
pub fn CapacityBar(info: CapacityInfo, accent: String) -> Element {
    let fill_color = if info.is_urgent() { GridColors::URGENT.to_string() } else { accent };
    let width = info.fill_percent();

    rsx! {
        div { style: "margin-bottom: {spacing::MD};",
            div { style: "display: flex; justify-content: space-between; font-size: 0.75rem; color: {GridColors::MUTED}; margin-bottom: {spacing::XS};",
                span { "{info.registered} registered" }
                span { "{info.spots_left} spots left" }
            }
            div { style: "height: 6px; border-radius: 9999px; background: {GridColors::BORDER}; overflow: hidden;",
                div { style: "height: 100%; width: {width}%; background-color: {fill_color}; transition: width 0.3s;" }
            }
        }
    }
}
