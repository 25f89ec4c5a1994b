use log::debug;

use crate::error::{Error, Result};
use crate::filter::FlightFilter;
use crate::format::{Formatter, Section};
use crate::model::Flight;
use crate::output::Writer;

// flights -> Stage [-> Stage ...] -> Formatter -> Writer
//
// Every stage sees the full list of flights and produces one section of
// output. Narrowing stages (a chain) are expressed as a single stage wrapping
// a FilterChain.

pub struct Stage {
    title: String,
    filter: Box<dyn FlightFilter>,
}

impl Stage {
    pub fn new<T: Into<String>>(title: T, filter: Box<dyn FlightFilter>) -> Self {
        Self {
            title: title.into(),
            filter,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn filter(&self) -> &dyn FlightFilter {
        self.filter.as_ref()
    }
}

pub struct Runner {
    flights: Vec<Flight>,
    stages: Vec<Stage>,
    consumer: Consumer,
}

impl Runner {
    pub fn new(
        flights: Vec<Flight>,
        stages: Vec<Stage>,
        formatter: Box<dyn Formatter>,
        writer: Box<dyn Writer>,
    ) -> Self {
        Self {
            flights,
            stages,
            consumer: Consumer::new(writer, formatter),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        for stage in &self.stages {
            let kept = stage.filter().apply(&self.flights);
            debug!(
                "stage '{}' kept {} of {} flights",
                stage.title(),
                kept.len(),
                self.flights.len()
            );

            self.consumer.write(&Section {
                title: stage.title(),
                flights: &kept,
                total: self.flights.len(),
            })?;
        }
        Ok(())
    }
}

struct Consumer {
    writer: Box<dyn Writer>,
    formatter: Box<dyn Formatter>,
}

impl Consumer {
    fn new(writer: Box<dyn Writer>, formatter: Box<dyn Formatter>) -> Self {
        Self { writer, formatter }
    }

    fn write(&mut self, section: &Section) -> Result<()> {
        let buf = self.formatter.format(section)?;

        self.writer
            .write(&buf)
            .map_err(|e| Error::with_source("writer failed", e))
    }
}
