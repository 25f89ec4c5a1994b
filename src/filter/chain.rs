use super::flight_filter::FlightFilter;
use crate::model::Flight;

/// Runs filters one after another, each narrowing the previous result.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn FlightFilter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    pub fn with<F: FlightFilter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn push(&mut self, filter: Box<dyn FlightFilter>) {
        self.filters.push(filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl FlightFilter for FilterChain {
    fn filter<'a>(&self, flights: &[&'a Flight]) -> Vec<&'a Flight> {
        self.filters
            .iter()
            .fold(flights.to_vec(), |kept, filter| filter.filter(&kept))
    }
}
