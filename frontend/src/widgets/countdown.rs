use std::rc::Rc;

use chrono::NaiveDateTime;
use dioxus::prelude::*;
use events_grid_core::color::AccentPalette;
use events_grid_core::countdown::{now_local, time_left, TimeLeft};
use events_grid_core::display::COUNTDOWN_OVER;
use events_grid_core::ticker::Ticker;

use crate::theme::{spacing, GridColors};

/// Live time remaining until `target`, refreshed by the grid's ticker.
#[component]
pub fn Countdown(target: NaiveDateTime, palette: AccentPalette) -> Element {
    let ticker = use_context::<Ticker>();
    let now = use_signal(now_local);

    // Held for as long as the countdown is mounted; dropping it unsubscribes.
    let _subscription = use_hook(move || {
        Rc::new(ticker.subscribe(move |at| {
            let mut now = now;
            now.set(at);
        }))
    });

    let bg = palette.soft.to_css();
    let fg = palette.accent.to_hex();

    match time_left(target, now()) {
        TimeLeft::Over => rsx! {
            span { style: "font-size: 0.875rem; font-weight: 600; color: {GridColors::MUTED};", "{COUNTDOWN_OVER}" }
        },
        TimeLeft::Remaining(breakdown) => rsx! {
            div { style: "display: flex; gap: {spacing::SM};",
                for segment in breakdown.segments() {
                    div {
                        key: "{segment.unit}",
                        style: "display: flex; align-items: baseline; gap: 2px; padding: {spacing::XS} {spacing::SM}; border-radius: 6px; background-color: {bg};",
                        span { style: "font-weight: 700; font-variant-numeric: tabular-nums; color: {fg};", "{segment.value}" }
                        span { style: "font-size: 0.75rem; color: {fg};", "{segment.unit}" }
                    }
                }
            }
        },
    }
}
