mod capacity_bar;
mod card_header;
mod countdown;
mod event_card;
mod filter_bar;
mod skeleton;

pub use capacity_bar::CapacityBar;
pub use card_header::CardHeader;
pub use countdown::Countdown;
pub use event_card::EventCard;
pub use filter_bar::FilterBar;
pub use skeleton::EventSkeleton;
