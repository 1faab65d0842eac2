use dioxus::prelude::*;
use events_grid_core::EventType;

use crate::theme::{spacing, GridColors};

/// Image (or calendar placeholder) over the accent gradient, with the type and
/// virtual badges.
#[component]
pub fn CardHeader(
    gradient: String,
    image: Option<String>,
    title: String,
    kind: EventType,
    is_virtual: bool,
) -> Element {
    let (badge_bg, badge_fg) = GridColors::badge(kind);
    rsx! {
        div { style: "position: relative; height: 10rem; background: {gradient}; overflow: hidden;",
            if let Some(src) = image.as_ref() {
                img { src: "{src}", alt: "{title}", style: "width: 100%; height: 100%; object-fit: cover;" }
            } else {
                div { style: "display: flex; align-items: center; justify-content: center; height: 100%; font-size: 3rem; opacity: 0.5;",
                    "📅"
                }
            }
            div { style: "position: absolute; top: {spacing::SM}; left: {spacing::SM}; padding: 2px 10px; border-radius: 9999px; font-size: 0.75rem; font-weight: 600; background: {badge_bg}; color: {badge_fg};",
                "{kind.label()}"
            }
            if is_virtual {
                div { style: "position: absolute; top: {spacing::SM}; right: {spacing::SM}; padding: 2px 10px; border-radius: 9999px; font-size: 0.75rem; font-weight: 600; background: rgba(255,255,255,0.9); color: {GridColors::TITLE};",
                    "🎥 Virtual"
                }
            }
        }
    }
}
