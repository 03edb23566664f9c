use chrono::Duration;
use thiserror::Error;

use crate::display::format_duration;

#[derive(Debug, Error, PartialEq)]
pub enum WindowError {
    #[error("The start date cannot be in the past.")]
    StartInPast,
    #[error("On demand contacts can only be booked {0} days in advance.")]
    BeyondHorizon(i64),
    #[error("The start date has to be before the end date.")]
    EndNotAfterStart,
    #[error("a {} contact does not fit inside a {} pass", format_duration(*.requested), format_duration(*.available))]
    ContactTooLong {
        requested: Duration,
        available: Duration,
    },
}
