mod flight;
mod segment;
mod timestamp;

pub use flight::*;
pub use segment::*;
pub use timestamp::*;
