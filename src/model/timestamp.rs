use chrono::prelude::*;

use crate::error::{Error, Result};

// Wall-clock time, no timezone attached.
pub type Timestamp = NaiveDateTime;

pub trait TimestampTrait {
    fn to_string_minutes(&self) -> String;
}

impl TimestampTrait for Timestamp {
    fn to_string_minutes(&self) -> String {
        self.format("%Y-%m-%dT%H:%M").to_string()
    }
}

/// Current local wall-clock time.
pub fn now() -> Timestamp {
    Local::now().naive_local()
}

pub fn parse_timestamp(s: &str) -> Result<Timestamp> {
    try_parse_timestamp(s).ok_or_else(|| Error::from(format!("couldn't parse timestamp '{}'", s)))
}

pub fn try_parse_timestamp(s: &str) -> Option<Timestamp> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    for format in &FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, format) {
            return Some(ts);
        }
    }

    // Date only, midnight.
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
