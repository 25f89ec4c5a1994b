mod reader;

pub use reader::FlightReader;
