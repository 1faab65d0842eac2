//! Events grid frontend: sample content, theme, timers and the Dioxus UI.

pub mod data;
pub mod theme;
pub mod timer;

#[cfg(feature = "dioxus")]
pub mod app;
#[cfg(feature = "dioxus")]
pub mod screens;
#[cfg(feature = "dioxus")]
pub mod widgets;
