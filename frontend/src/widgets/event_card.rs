use dioxus::prelude::*;
use events_grid_core::color::AccentPalette;
use events_grid_core::display::{CardAction, CardView};
use events_grid_core::Event;

use crate::theme::{spacing, GridColors};
use crate::widgets::{CapacityBar, CardHeader, Countdown};

#[component]
pub fn EventCard(event: Event, is_past: bool, palette: AccentPalette) -> Element {
    let mut hovered = use_signal(|| false);
    let card = CardView::new(&event, is_past);
    let accent = palette.accent.to_hex();
    let title_color = if hovered() { accent.clone() } else { GridColors::TITLE.to_string() };
    let opacity = if card.is_past { "0.75" } else { "1" };

    rsx! {
        div { style: "display: flex; flex-direction: column; height: 100%; background: {GridColors::CARD}; border: 1px solid {GridColors::BORDER}; border-radius: 12px; overflow: hidden; opacity: {opacity};",
            CardHeader {
                gradient: palette.header_gradient(),
                image: card.image.clone(),
                title: card.title.clone(),
                kind: card.type_,
                is_virtual: card.is_virtual,
            }
            div { style: "display: flex; flex-direction: column; flex: 1; padding: {spacing::CARD_PADDING};",
                if let Some(schedule) = card.schedule.as_ref() {
                    div { style: "font-size: 0.875rem; color: {GridColors::MUTED}; margin-bottom: {spacing::SM};", "📅 {schedule}" }
                }
                h3 {
                    style: "font-size: 1.125rem; font-weight: 600; margin: 0 0 {spacing::SM}; color: {title_color}; transition: color 0.2s;",
                    onmouseenter: move |_| hovered.set(true),
                    onmouseleave: move |_| hovered.set(false),
                    "{card.title}"
                }
                p { style: "font-size: 0.875rem; color: {GridColors::BODY}; margin: 0 0 {spacing::MD};", "{card.description}" }
                div { style: "font-size: 0.875rem; color: {GridColors::MUTED}; margin-bottom: {spacing::SM}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                    "📍 {card.location}"
                }
                if let Some(speakers) = card.speakers.as_ref() {
                    div { style: "font-size: 0.875rem; color: {GridColors::MUTED}; margin-bottom: {spacing::MD}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                        "👥 {speakers}"
                    }
                }
                if let Some(target) = card.countdown_target {
                    div { style: "margin-bottom: {spacing::MD};",
                        Countdown { target, palette: palette.clone() }
                    }
                }
                if let Some(info) = card.capacity {
                    CapacityBar { info, accent: accent.clone() }
                }
                div { style: "flex: 1;" }
                {action_button(&card.action, &accent)}
            }
        }
    }
}

fn action_button(action: &CardAction, accent: &str) -> Element {
    let label = action.label();
    match action {
        CardAction::Register(url) => rsx! {
            a {
                href: "{url}",
                target: "_blank",
                rel: "noopener noreferrer",
                style: "display: block; text-align: center; padding: 10px; border-radius: 8px; font-weight: 600; text-decoration: none; color: #ffffff; background-color: {accent};",
                "{label}"
            }
        },
        CardAction::Ended | CardAction::ComingSoon => rsx! {
            button {
                disabled: true,
                style: "width: 100%; padding: 10px; border-radius: 8px; border: none; font-weight: 600; cursor: not-allowed; background: {GridColors::DISABLED_BG}; color: {GridColors::DISABLED_TEXT};",
                "{label}"
            }
        },
    }
}
