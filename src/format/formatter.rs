use crate::error::Result;
use crate::model::Flight;

/// Result of one filter stage, ready to be printed.
#[derive(Debug)]
pub struct Section<'a> {
    pub title: &'a str,
    pub flights: &'a [&'a Flight],
    // Size of the list the stage was given.
    pub total: usize,
}

pub trait Formatter {
    fn format(&self, section: &Section) -> Result<Vec<u8>>;
}
