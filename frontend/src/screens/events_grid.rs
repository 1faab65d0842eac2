use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use events_grid_core::config::WidgetConfig;
use events_grid_core::countdown::{now_local, TICK_INTERVAL_MS};
use events_grid_core::display::{self, EMPTY_HINT, EMPTY_TITLE, FILTER_SETTLE_MS, INITIAL_SETTLE_MS, SKELETON_COUNT};
use events_grid_core::ticker::Ticker;
use events_grid_core::view::{self, PartitionMemo, TypeFilter};
use events_grid_core::{Event, EventCatalog};

use crate::theme::{spacing, GridColors, BASE_CSS, GRID_CLASS};
use crate::timer::sleep;
use crate::widgets::{EventCard, EventSkeleton, FilterBar};

/// Catalog snapshot plus the memoized partition derived from it.
struct GridModel {
    catalog: EventCatalog,
    memo: PartitionMemo,
}

impl GridModel {
    fn new(events: &[Event]) -> Self {
        Self {
            catalog: EventCatalog::new(events.to_vec()),
            memo: PartitionMemo::default(),
        }
    }

    /// Replace the snapshot when the supplied events differ from it.
    fn sync(&mut self, events: &[Event]) {
        if self.catalog.events() != events {
            tracing::debug!(count = events.len(), "event list changed");
            self.catalog = EventCatalog::new(events.to_vec());
        }
    }
}

#[component]
pub fn EventsGridScreen(events: Vec<Event>, config: WidgetConfig) -> Element {
    let mut active = use_signal(|| TypeFilter::All);
    let mut loading = use_signal(|| true);
    let mut generation = use_signal(|| 0u64);
    let model = use_hook(|| Rc::new(RefCell::new(GridModel::new(&events))));

    // One ticker per grid; each live countdown subscribes to it. The loop is a
    // scope task, so it stops when the grid unmounts.
    let ticker = use_context_provider(Ticker::new);
    use_future(move || {
        let ticker = ticker.clone();
        async move {
            loop {
                sleep(Duration::from_millis(TICK_INTERVAL_MS)).await;
                ticker.tick(now_local());
            }
        }
    });

    use_hook(move || {
        spawn(async move {
            sleep(Duration::from_millis(INITIAL_SETTLE_MS)).await;
            if *generation.peek() == 0 {
                loading.set(false);
            }
        });
    });

    // Only the latest filter change may end the loading state.
    let on_select = move |filter: TypeFilter| {
        let ticket = *generation.peek() + 1;
        generation.set(ticket);
        loading.set(true);
        active.set(filter);
        spawn(async move {
            sleep(Duration::from_millis(FILTER_SETTLE_MS)).await;
            if *generation.peek() == ticket {
                loading.set(false);
            }
        });
    };

    let (catalog, partition) = {
        let mut guard = model.borrow_mut();
        let m = &mut *guard;
        m.sync(&events);
        let partition = m.memo.get(&m.catalog, active(), now_local());
        (m.catalog.clone(), partition)
    };

    let palette = config.palette();
    let accent = palette.accent.to_hex();
    let grid_style = config.columns.base_style();
    let css = format!("{}\n{}", BASE_CSS, config.columns.media_css(GRID_CLASS));
    let subtitle = display::upcoming_subtitle(partition.upcoming.len());
    let show_filters = view::show_filter_bar(config.enable_filtering, catalog.events());
    let options = view::filter_options(catalog.events());
    let show_past = config.show_past_events && !partition.past.is_empty();

    rsx! {
        div {
            style { "{css}" }
            div { style: "margin-bottom: {spacing::LG};",
                h2 { style: "font-size: 1.875rem; font-weight: 700; color: {GridColors::TITLE}; margin: 0 0 {spacing::SM};",
                    "Upcoming Events"
                }
                p { style: "color: {GridColors::MUTED}; margin: 0;", "{subtitle}" }
            }
            if show_filters {
                FilterBar {
                    options,
                    active: active(),
                    accent: accent.clone(),
                    on_select,
                }
            }
            if loading() {
                div { class: GRID_CLASS, style: "{grid_style}",
                    for i in 0..SKELETON_COUNT {
                        EventSkeleton { key: "{i}" }
                    }
                }
            } else if partition.upcoming.is_empty() {
                div { style: "text-align: center; padding: {spacing::XL} {spacing::MD}; color: {GridColors::MUTED};",
                    div { style: "font-size: 3rem; margin-bottom: {spacing::MD};", "📅" }
                    p { style: "margin: 0 0 {spacing::XS}; color: {GridColors::BODY};", "{EMPTY_TITLE}" }
                    p { style: "margin: 0; font-size: 0.875rem;", "{EMPTY_HINT}" }
                }
            } else {
                div { class: GRID_CLASS, style: "{grid_style}",
                    for (index, event) in partition.upcoming.iter().enumerate() {
                        div {
                            key: "{event.id}",
                            style: "animation: events-grid-fade-in 0.4s ease both; animation-delay: {index * 50}ms;",
                            EventCard { event: event.clone(), is_past: false, palette: palette.clone() }
                        }
                    }
                }
            }
            if show_past {
                div { style: "margin-top: 3rem; padding-top: {spacing::XL}; border-top: 1px solid {GridColors::BORDER};",
                    h3 { style: "font-size: 1.25rem; font-weight: 600; color: {GridColors::BODY}; margin: 0 0 {spacing::LG};",
                        "Past Events"
                    }
                    div { class: GRID_CLASS, style: "{grid_style}",
                        for (index, event) in partition.visible_past().iter().enumerate() {
                            div {
                                key: "{event.id}",
                                style: "animation: events-grid-fade-in 0.4s ease both; animation-delay: {index * 50}ms;",
                                EventCard { event: event.clone(), is_past: true, palette: palette.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}
