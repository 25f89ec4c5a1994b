use serde::Serialize;

use super::formatter::{Formatter, Section};
use crate::error::{Error, Result};
use crate::model::Flight;

#[derive(Serialize)]
struct SectionRepr<'a> {
    filter: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<usize>,
    flights: &'a [&'a Flight],
}

pub struct JSONFormatter {
    verbose: bool,
}

impl JSONFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for JSONFormatter {
    fn format(&self, section: &Section) -> Result<Vec<u8>> {
        let repr = SectionRepr {
            filter: section.title,
            total: if self.verbose {
                Some(section.total)
            } else {
                None
            },
            flights: section.flights,
        };

        serde_json::to_vec(&repr).map_err(|e| Error::with_source("JSON serialization failed", e))
    }
}
