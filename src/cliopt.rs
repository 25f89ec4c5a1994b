use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use structopt::StructOpt;

use crate::error::{Error, Result};
use crate::filter::{
    ArrivalBeforeDepartureFilter, FilterChain, FlightFilter, FutureDepartureFilter,
    GroundTimeFilter,
};
use crate::format::{Formatter, HumanReadableFormatter, JSONFormatter};
use crate::model::{parse_timestamp, Timestamp};
use crate::parser::parse_duration;
use crate::runner::Stage;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "flight-filter",
    about = "Filter flight itineraries by departure time, segment validity and ground time"
)]
pub struct CliOpt {
    /// JSON file with flights, `-` or nothing for stdin.
    #[structopt(parse(from_os_str))]
    pub input: Option<PathBuf>,

    /// Use the built-in sample flights instead of reading input.
    #[structopt(long = "sample", conflicts_with = "input")]
    pub sample: bool,

    /// Filter to run: future, arrival or ground-time. Repeat to run several.
    #[structopt(long = "filter", short = "f", number_of_values = 1)]
    pub filters: Vec<FilterKind>,

    #[structopt(
        long = "max-ground-time",
        short = "g",
        default_value = "2h",
        parse(try_from_str = parse_duration)
    )]
    pub max_ground_time: Duration,

    /// Evaluate as if the current time were this one.
    #[structopt(long = "now", short = "n", parse(try_from_str = parse_timestamp))]
    pub now: Option<Timestamp>,

    /// Apply the filters one after another and print only the survivors.
    #[structopt(long = "chain", short = "c")]
    pub chain: bool,

    /// Output encoding: h (human readable) or json.
    #[structopt(long = "encode", short = "e")]
    pub encode: Option<String>,

    #[structopt(long = "verbose", short = "v")]
    pub verbose: bool,
}

impl CliOpt {
    /// Selected filters in command line order, all of them when none given.
    pub fn filter_kinds(&self) -> Vec<FilterKind> {
        if self.filters.is_empty() {
            vec![
                FilterKind::Future,
                FilterKind::Arrival,
                FilterKind::GroundTime,
            ]
        } else {
            self.filters.clone()
        }
    }

    pub fn stages(&self) -> Result<Vec<Stage>> {
        let kinds = self.filter_kinds();

        if !self.chain {
            return kinds
                .iter()
                .map(|kind| Ok(Stage::new(kind.name(), self.build(*kind)?)))
                .collect();
        }

        let mut chain = FilterChain::new();
        for kind in &kinds {
            chain.push(self.build(*kind)?);
        }

        let title = kinds
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(" | ");
        Ok(vec![Stage::new(title, Box::new(chain))])
    }

    pub fn formatter(&self) -> Result<Box<dyn Formatter>> {
        match self.encode.as_deref() {
            None | Some("h") | Some("human") => {
                Ok(Box::new(HumanReadableFormatter::new(self.verbose)))
            }
            Some("json") => Ok(Box::new(JSONFormatter::new(self.verbose))),
            Some(other) => Err(Error::from(format!("unknown encoding '{}'", other))),
        }
    }

    fn build(&self, kind: FilterKind) -> Result<Box<dyn FlightFilter>> {
        Ok(match kind {
            FilterKind::Future => match self.now {
                Some(now) => Box::new(FutureDepartureFilter::at(now)),
                None => Box::new(FutureDepartureFilter::new()),
            },
            FilterKind::Arrival => Box::new(ArrivalBeforeDepartureFilter::new()),
            FilterKind::GroundTime => Box::new(GroundTimeFilter::new(
                chrono::Duration::from_std(self.max_ground_time)
                    .map_err(|e| Error::with_source("max ground time is out of range", e))?,
            )),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Future,
    Arrival,
    GroundTime,
}

impl FilterKind {
    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::Future => "future",
            FilterKind::Arrival => "arrival",
            FilterKind::GroundTime => "ground-time",
        }
    }
}

impl FromStr for FilterKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "future" => Ok(FilterKind::Future),
            "arrival" => Ok(FilterKind::Arrival),
            "ground-time" => Ok(FilterKind::GroundTime),
            _ => Err(Error::from(format!(
                "unknown filter '{}', expected future, arrival or ground-time",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(args: &[&str]) -> CliOpt {
        CliOpt::from_iter(std::iter::once("flight-filter").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let opt = opt(&[]);
        assert_eq!(None, opt.input);
        assert_eq!(Duration::from_secs(2 * 60 * 60), opt.max_ground_time);
        assert_eq!(
            vec![
                FilterKind::Future,
                FilterKind::Arrival,
                FilterKind::GroundTime
            ],
            opt.filter_kinds()
        );
        assert!(!opt.chain);
    }

    #[test]
    fn test_filters_keep_order() -> Result<()> {
        let opt = opt(&[
            "-f",
            "ground-time",
            "--filter",
            "future",
            "-g",
            "1h30m",
            "--now",
            "2025-02-20 00:00",
            "flights.json",
        ]);

        assert_eq!(Some(PathBuf::from("flights.json")), opt.input);
        assert_eq!(Duration::from_secs(90 * 60), opt.max_ground_time);
        assert_eq!(Some(parse_timestamp("2025-02-20T00:00")?), opt.now);

        let titles: Vec<String> = opt
            .stages()?
            .iter()
            .map(|s| s.title().to_owned())
            .collect();
        assert_eq!(vec!["ground-time", "future"], titles);
        Ok(())
    }

    #[test]
    fn test_chain_is_a_single_stage() -> Result<()> {
        let stages = opt(&["--chain"]).stages()?;
        assert_eq!(1, stages.len());
        assert_eq!("future | arrival | ground-time", stages[0].title());
        Ok(())
    }

    #[test]
    fn test_zero_max_ground_time() -> Result<()> {
        let opt = opt(&["-g", "0s", "-f", "ground-time"]);
        assert_eq!(Duration::from_secs(0), opt.max_ground_time);
        assert_eq!(1, opt.stages()?.len());
        Ok(())
    }

    #[test]
    fn test_invalid_options() {
        #[rustfmt::skip]
        let tests: [&[&str]; 4] = [
            &["-f", "past"],
            &["-g", "2x"],
            &["--now", "tomorrow"],
            &["--sample", "flights.json"],
        ];

        for args in &tests {
            let ret = CliOpt::from_iter_safe(
                std::iter::once("flight-filter").chain(args.iter().copied()),
            );
            assert!(ret.is_err(), "expected error for {:?}", args);
        }
    }

    #[test]
    fn test_formatter() {
        assert!(opt(&[]).formatter().is_ok());
        assert!(opt(&["-e", "json"]).formatter().is_ok());
        assert!(opt(&["-e", "yaml"]).formatter().is_err());
    }
}
