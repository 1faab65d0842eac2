use thiserror::Error;

/// Parse failures surfaced by the core. Callers at the view boundary log these
/// and fall back to a default; nothing here reaches the end user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventsGridError {
    #[error("invalid hex color {0:?}")]
    InvalidColor(String),

    #[error("invalid event date {0:?}")]
    InvalidDate(String),

    #[error("invalid event time {0:?}")]
    InvalidTime(String),
}

pub type Result<T> = std::result::Result<T, EventsGridError>;
