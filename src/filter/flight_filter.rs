use crate::model::Flight;

/// Selects a subset of flights.
///
/// Implementations must be pure: the result holds references into the input,
/// in input order, and the input is never changed. Filtering an already
/// filtered list again with the same filter yields the same list.
pub trait FlightFilter: Send + Sync {
    fn filter<'a>(&self, flights: &[&'a Flight]) -> Vec<&'a Flight>;

    fn apply<'a>(&self, flights: &'a [Flight]) -> Vec<&'a Flight> {
        self.filter(&flights.iter().collect::<Vec<_>>())
    }
}
