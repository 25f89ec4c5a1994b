use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::timestamp::{Timestamp, TimestampTrait};

/// A single hop of an itinerary.
///
/// Nothing forces the arrival to come after the departure: a segment that
/// arrives before it departs is representable on purpose, so that it can be
/// detected and filtered out later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    departure_date: Timestamp,
    arrival_date: Timestamp,
}

impl Segment {
    pub fn new(departure_date: Timestamp, arrival_date: Timestamp) -> Self {
        Self {
            departure_date,
            arrival_date,
        }
    }

    #[inline]
    pub fn departure_date(&self) -> Timestamp {
        self.departure_date
    }

    #[inline]
    pub fn arrival_date(&self) -> Timestamp {
        self.arrival_date
    }

    /// Time in the air. Negative for a segment arriving before it departs.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.arrival_date - self.departure_date
    }

    #[inline]
    pub fn arrives_before_departure(&self) -> bool {
        self.arrival_date < self.departure_date
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}|{}]",
            self.departure_date.to_string_minutes(),
            self.arrival_date.to_string_minutes()
        )
    }
}
