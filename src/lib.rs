//! Flight itinerary filters.
//!
//! The core is the [`filter::FlightFilter`] trait and its three
//! implementations. Everything else (input decoding, sample data, output
//! formatting and the command line) is plumbing for the `flight-filter`
//! binary.

pub mod cliopt;
pub mod error;
pub mod filter;
pub mod format;
pub mod input;
pub mod model;
pub mod output;
pub mod parser;
pub mod runner;
pub mod sample;
