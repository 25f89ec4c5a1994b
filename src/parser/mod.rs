mod duration;
mod result;

pub use duration::parse_duration;
pub use result::{IResult, ParseError, Span};
