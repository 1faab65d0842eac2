mod catalog;
mod event;
mod event_type;

pub use catalog::EventCatalog;
pub use event::Event;
pub use event_type::EventType;
