use std::io::BufRead;

use log::{debug, info};
use serde_json::Deserializer;

use crate::error::{Error, Result};
use crate::model::Flight;

/// Reads flights serialized as JSON.
///
/// Two layouts are accepted: a single JSON array of flights, or a stream of
/// flight objects separated by whitespace (usually one per line, but an
/// object may span several lines). A `null` in place of the array or of a
/// stream entry stands for "nothing" and is skipped.
pub struct FlightReader<R> {
    inner: R,
}

impl<R: BufRead> FlightReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn read_all(mut self) -> Result<Vec<Flight>> {
        let mut buf = Vec::new();
        self.inner
            .read_to_end(&mut buf)
            .map_err(|e| Error::with_source("reading flights failed", e))?;

        let flights = match buf.iter().copied().find(|b| !b.is_ascii_whitespace()) {
            Some(b'[') => decode_document(&buf)?,
            _ => decode_stream(&buf)?,
        };

        info!("loaded {} flights", flights.len());
        Ok(flights)
    }
}

fn decode_document(buf: &[u8]) -> Result<Vec<Flight>> {
    let flights: Vec<Option<Flight>> =
        serde_json::from_slice(buf).map_err(|e| Error::with_source("flights decoding failed", e))?;
    Ok(flights.into_iter().flatten().collect())
}

fn decode_stream(buf: &[u8]) -> Result<Vec<Flight>> {
    let mut flights = Vec::new();

    let stream = Deserializer::from_slice(buf).into_iter::<Option<Flight>>();
    for (entry_no, entry) in stream.enumerate() {
        let entry = entry.map_err(|e| {
            Error::with_source(&format!("flight decoding failed at entry {}", entry_no + 1), e)
        })?;

        match entry {
            Some(flight) => flights.push(flight),
            None => debug!("skipping null entry {}", entry_no + 1),
        }
    }

    Ok(flights)
}
