use std::convert::TryFrom;
use std::time::Duration;

use nom::{branch::alt, bytes::complete::tag, character::complete::digit1};

use super::result::{IResult, ParseError, Span};
use crate::error::{Error, Result};

/// Parses a maximum ground time literal such as `2h`, `1h30m` or `90m`.
pub fn parse_duration(s: &str) -> Result<Duration> {
    match duration(Span::new(s)) {
        Ok((rest, _)) if !rest.fragment().is_empty() => Err(Error::from(format!(
            "unexpected trailing input '{}' at offset {}",
            rest.fragment(),
            rest.location_offset()
        ))),
        Ok((_, d)) => Ok(d),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(Error::from(format!(
            "invalid duration '{}': {} at offset {}",
            s,
            e.message(),
            e.offset()
        ))),
        Err(nom::Err::Incomplete(_)) => Err(Error::new("incomplete duration")),
    }
}

/// Go-like duration: `2s`, `1d12h`, `1h30m`.
/// - No negative durations; `0s` is a valid (zero) duration.
/// - No fractional units.
/// - Units are always ordered from longest to shortest.
pub(super) fn duration(input: Span) -> IResult<Duration> {
    duration_inner(input, Unit::Year)
}

#[derive(Clone, Copy)]
enum Unit {
    Millisecond,
    Second, // 1000 milliseconds
    Minute, // 60 seconds
    Hour,   // 60 minutes
    Day,    // 24 hours
    Week,   // 7 days
    Year,   // 365 days, always
}

impl Unit {
    fn milliseconds(&self) -> u64 {
        use Unit::*;
        match self {
            Millisecond => 1,
            Second => 1000,
            Minute => 60 * 1000,
            Hour => 60 * 60 * 1000,
            Day => 24 * 60 * 60 * 1000,
            Week => 7 * 24 * 60 * 60 * 1000,
            Year => 365 * 24 * 60 * 60 * 1000,
        }
    }

    fn descendant(&self) -> Option<Self> {
        use Unit::*;
        match self {
            Millisecond => None,
            Second => Some(Millisecond),
            Minute => Some(Second),
            Hour => Some(Minute),
            Day => Some(Hour),
            Week => Some(Day),
            Year => Some(Week),
        }
    }
}

impl TryFrom<&str> for Unit {
    type Error = Error;

    fn try_from(u: &str) -> Result<Self> {
        use Unit::*;

        match u {
            "y" => Ok(Year),
            "w" => Ok(Week),
            "d" => Ok(Day),
            "h" => Ok(Hour),
            "m" => Ok(Minute),
            "s" => Ok(Second),
            "ms" => Ok(Millisecond),
            _ => Err(Error::new("unknown duration unit")),
        }
    }
}

fn duration_inner(input: Span, max_allowed_unit: Unit) -> IResult<Duration> {
    let (rest, multiplier) = digit1(input)?;

    let (rest, unit) = alt((
        tag("ms"),
        tag("s"),
        tag("m"),
        tag("h"),
        tag("d"),
        tag("w"),
        tag("y"),
    ))(rest)?;

    let failure = |message: &str| nom::Err::Failure(ParseError::new(message.to_owned(), input));

    let unit = Unit::try_from(*unit.fragment()).map_err(|e| failure(e.message()))?;
    if unit.milliseconds() > max_allowed_unit.milliseconds() {
        return Err(failure("invalid duration literal"));
    }

    let multiplier = multiplier
        .fragment()
        .parse::<u32>()
        .map_err(|_| failure("duration multiplier is too large"))?;
    let duration = Duration::from_millis(unit.milliseconds())
        .checked_mul(multiplier)
        .ok_or_else(|| failure("duration overflow occurred"))?;

    let next_unit = match unit.descendant() {
        Some(next_unit) => next_unit,
        None => return Ok((rest, duration)),
    };

    let (rest, more_duration) = match duration_inner(rest, next_unit) {
        Ok((rest, more_duration)) => (rest, more_duration),
        Err(nom::Err::Error(_)) => (rest, Duration::from_millis(0)),
        Err(e) => return Err(e),
    };

    let total = duration
        .checked_add(more_duration)
        .ok_or_else(|| failure("duration overflow occurred"))?;
    Ok((rest, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: u64 = 1000;
    const MINUTE: u64 = 60 * SECOND;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;

    #[test]
    fn test_valid_duration() -> Result<()> {
        #[rustfmt::skip]
        let tests = [
            ("2h", Duration::from_millis(2 * HOUR)),
            ("90m", Duration::from_millis(90 * MINUTE)),
            ("1h30m", Duration::from_millis(HOUR + 30 * MINUTE)),
            ("0h45m", Duration::from_millis(45 * MINUTE)),
            ("1d2h3m4s5ms", Duration::from_millis(DAY + 2 * HOUR + 3 * MINUTE + 4 * SECOND + 5)),
            ("1w", Duration::from_millis(7 * DAY)),
            ("0s", Duration::from_millis(0)),
            ("0h0m", Duration::from_millis(0)),
        ];

        for (input, expected_duration) in &tests {
            assert_eq!(
                *expected_duration,
                parse_duration(input)?,
                "while parsing {}",
                input
            );
        }
        Ok(())
    }

    #[test]
    fn test_invalid_duration() {
        #[rustfmt::skip]
        let tests = [
            "",
            "foo",
            "2",
            "1ns",
            "30m2h",
            "2h ",
            "-1h",
            "1.5h",
            "99999999999h",
        ];

        for input in &tests {
            let ret = parse_duration(input);
            assert!(
                ret.is_err(),
                "Expected error, got {:?} while parsing {}",
                ret,
                input
            );
        }
    }
}
