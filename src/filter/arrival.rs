use log::{debug, trace};

use super::flight_filter::FlightFilter;
use crate::model::Flight;

/// Drops flights having at least one segment that arrives before it departs.
///
/// Each segment is checked on its own; ordering between segments is the
/// ground-time filter's concern.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrivalBeforeDepartureFilter {}

impl ArrivalBeforeDepartureFilter {
    pub fn new() -> Self {
        Self {}
    }
}

impl FlightFilter for ArrivalBeforeDepartureFilter {
    fn filter<'a>(&self, flights: &[&'a Flight]) -> Vec<&'a Flight> {
        let kept: Vec<&Flight> = flights
            .iter()
            .copied()
            .filter(|flight| {
                match flight
                    .segments()
                    .iter()
                    .find(|segment| segment.arrives_before_departure())
                {
                    Some(segment) => {
                        trace!(
                            "flight {} has segment {} arriving {} min before departure",
                            flight,
                            segment,
                            -segment.duration().num_minutes()
                        );
                        false
                    }
                    None => true,
                }
            })
            .collect();

        debug!(
            "arrival before departure filter kept {} of {} flights",
            kept.len(),
            flights.len()
        );
        kept
    }
}
