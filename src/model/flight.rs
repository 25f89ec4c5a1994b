use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Deserializer, Serialize};

use super::segment::Segment;
use super::timestamp::Timestamp;
use crate::error::{Error, Result};

/// An itinerary: segments in travel order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    // Missing and null segment lists both decode as an empty itinerary.
    #[serde(default, deserialize_with = "null_as_empty")]
    segments: Vec<Segment>,
}

impl Flight {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Builds a flight out of `dep, arr, dep, arr, ...` dates.
    pub fn from_dates(dates: &[Timestamp]) -> Result<Self> {
        if dates.len() % 2 != 0 {
            return Err(Error::new("you must pass an even number of dates"));
        }

        Ok(Self::new(
            dates
                .chunks(2)
                .map(|pair| Segment::new(pair[0], pair[1]))
                .collect(),
        ))
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn first_segment(&self) -> Option<&Segment> {
        self.segments.first()
    }

    /// Gaps between each arrival and the following departure.
    pub fn ground_times(&self) -> impl Iterator<Item = Duration> + '_ {
        self.segments
            .windows(2)
            .map(|pair| pair[1].departure_date() - pair[0].arrival_date())
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "[]");
        }

        let parts: Vec<String> = self.segments.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", parts.join(" "))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Segment>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Segment>>::deserialize(deserializer)?.unwrap_or_default())
}
