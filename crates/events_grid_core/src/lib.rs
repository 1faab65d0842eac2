//! Events grid view logic, free of any UI toolkit.
//!
//! Raw content records go through [`adapter`] into [`models::Event`] values,
//! which [`view`] partitions into upcoming/past lists for the active type filter.
//! [`countdown`] and [`ticker`] drive the per-card live countdown, [`color`]
//! derives the accent palette and [`display`] holds the card presentation rules.

pub mod adapter;
pub mod capacity;
pub mod color;
pub mod config;
pub mod countdown;
pub mod display;
pub mod error;
pub mod models;
pub mod ticker;
pub mod view;

pub use error::{EventsGridError, Result};
pub use models::{Event, EventCatalog, EventType};
