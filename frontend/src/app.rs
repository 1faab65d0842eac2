use dioxus::prelude::*;

use crate::data;
use crate::screens::EventsGridScreen;

#[component]
pub fn App() -> Element {
    let events = use_hook(data::sample_events);
    let config = use_hook(data::sample_config);

    rsx! {
        div { style: "font-family: system-ui, sans-serif; width: 100%; max-width: 80rem; margin: 0 auto; padding: 2rem 1rem; box-sizing: border-box;",
            EventsGridScreen { events, config }
        }
    }
}
