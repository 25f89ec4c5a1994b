mod arrival;
mod chain;
mod flight_filter;
mod future;
mod ground_time;

pub use arrival::ArrivalBeforeDepartureFilter;
pub use chain::FilterChain;
pub use flight_filter::FlightFilter;
pub use future::FutureDepartureFilter;
pub use ground_time::GroundTimeFilter;
