use chrono::Duration;
use log::{debug, trace};

use super::flight_filter::FlightFilter;
use crate::model::Flight;

/// Drops flights with any single layover longer than `max_ground_time`.
///
/// A layover is `departure[i + 1] - arrival[i]`. Negative layovers (bad data)
/// are compared as they are; run `ArrivalBeforeDepartureFilter` first if they
/// matter.
#[derive(Debug, Clone, Copy)]
pub struct GroundTimeFilter {
    max_ground_time: Duration,
}

impl GroundTimeFilter {
    pub fn new(max_ground_time: Duration) -> Self {
        Self { max_ground_time }
    }

    #[inline]
    pub fn max_ground_time(&self) -> Duration {
        self.max_ground_time
    }
}

impl FlightFilter for GroundTimeFilter {
    fn filter<'a>(&self, flights: &[&'a Flight]) -> Vec<&'a Flight> {
        let kept: Vec<&Flight> = flights
            .iter()
            .copied()
            .filter(|flight| {
                match flight
                    .ground_times()
                    .find(|ground_time| *ground_time > self.max_ground_time())
                {
                    Some(ground_time) => {
                        trace!(
                            "flight {} stays on the ground for {} min",
                            flight,
                            ground_time.num_minutes()
                        );
                        false
                    }
                    None => true,
                }
            })
            .collect();

        debug!(
            "ground time filter (max {} min) kept {} of {} flights",
            self.max_ground_time().num_minutes(),
            kept.len(),
            flights.len()
        );
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::testing::{at, flight};
    use crate::model::Segment;

    #[test]
    fn test_valid_ground_time() {
        let flights = vec![flight(&[
            at(25, 8, 0),
            at(25, 10, 0),
            at(25, 12, 0),
            at(25, 13, 0),
        ])];

        let filtered = GroundTimeFilter::new(Duration::hours(2)).apply(&flights);
        assert_eq!(vec![&flights[0]], filtered);
    }

    #[test]
    fn test_excessive_ground_time() {
        let flights = vec![flight(&[
            at(25, 8, 0),
            at(25, 10, 0),
            at(25, 13, 0),
            at(25, 14, 0),
        ])];

        assert!(GroundTimeFilter::new(Duration::hours(1))
            .apply(&flights)
            .is_empty());
    }

    #[test]
    fn test_multiple_segments() {
        // 1.5h then exactly 1h on the ground.
        let flights = vec![flight(&[
            at(25, 8, 0),
            at(25, 10, 0),
            at(25, 11, 30),
            at(25, 12, 0),
            at(25, 13, 0),
            at(25, 14, 0),
        ])];

        assert!(GroundTimeFilter::new(Duration::hours(1))
            .apply(&flights)
            .is_empty());
    }

    #[test]
    fn test_each_gap_is_checked_separately() {
        // 1h + 2h on the ground adds up to 3h, but no single gap exceeds 2h.
        let flights = vec![flight(&[
            at(25, 8, 0),
            at(25, 10, 0),
            at(25, 11, 0),
            at(25, 12, 0),
            at(25, 14, 0),
            at(25, 15, 0),
        ])];

        assert_eq!(1, GroundTimeFilter::new(Duration::hours(2)).apply(&flights).len());
    }

    #[test]
    fn test_negative_ground_time_is_kept() {
        let flights = vec![flight(&[
            at(25, 8, 0),
            at(25, 12, 0),
            at(25, 10, 0),
            at(25, 13, 0),
        ])];

        assert_eq!(1, GroundTimeFilter::new(Duration::zero()).apply(&flights).len());
    }

    #[test]
    fn test_flights_without_pairs_are_kept() {
        let flights = vec![
            Flight::default(),
            Flight::new(vec![Segment::new(at(25, 8, 0), at(25, 10, 0))]),
        ];

        let filtered = GroundTimeFilter::new(Duration::zero()).apply(&flights);
        assert_eq!(vec![&flights[0], &flights[1]], filtered);
    }

    #[test]
    fn test_max_ground_time() {
        let filter = GroundTimeFilter::new(Duration::minutes(90));
        assert_eq!(Duration::minutes(90), filter.max_ground_time());
    }

    #[test]
    fn test_empty_list() {
        assert!(GroundTimeFilter::new(Duration::hours(1)).apply(&[]).is_empty());
    }
}
