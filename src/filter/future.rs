use log::{debug, trace};

use super::flight_filter::FlightFilter;
use crate::model::{self, Flight, Timestamp, TimestampTrait};

#[derive(Debug, Clone, Copy)]
enum Clock {
    System,
    Fixed(Timestamp),
}

/// Keeps flights whose first segment departs strictly after "now".
///
/// "Now" is read once per `filter()` call so every flight of a batch is
/// compared against the same instant. Flights without segments have nothing
/// to compare and are kept.
#[derive(Debug, Clone, Copy)]
pub struct FutureDepartureFilter {
    clock: Clock,
}

impl FutureDepartureFilter {
    pub fn new() -> Self {
        Self {
            clock: Clock::System,
        }
    }

    /// A filter evaluating against a pinned instant instead of the wall clock.
    pub fn at(now: Timestamp) -> Self {
        Self {
            clock: Clock::Fixed(now),
        }
    }

    fn now(&self) -> Timestamp {
        match self.clock {
            Clock::System => model::now(),
            Clock::Fixed(now) => now,
        }
    }
}

impl Default for FutureDepartureFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightFilter for FutureDepartureFilter {
    fn filter<'a>(&self, flights: &[&'a Flight]) -> Vec<&'a Flight> {
        let now = self.now();

        let kept: Vec<&Flight> = flights
            .iter()
            .copied()
            .filter(|flight| match flight.first_segment() {
                Some(first) if first.departure_date() <= now => {
                    trace!(
                        "flight {} departs at {}, not after {}",
                        flight,
                        first.departure_date().to_string_minutes(),
                        now.to_string_minutes()
                    );
                    false
                }
                _ => true,
            })
            .collect();

        debug!(
            "future departure filter kept {} of {} flights",
            kept.len(),
            flights.len()
        );
        kept
    }
}
