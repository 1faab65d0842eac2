mod events_grid;

pub use events_grid::EventsGridScreen;
