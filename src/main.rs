use std::fs::File;
use std::io::{self, BufReader};

use env_logger::Env;
use structopt::StructOpt;

use flight_filter::cliopt::CliOpt;
use flight_filter::error::Error;
use flight_filter::input::FlightReader;
use flight_filter::model;
use flight_filter::output::LineWriter;
use flight_filter::runner::Runner;
use flight_filter::sample;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let opt = CliOpt::from_args();

    let flights = if opt.sample {
        sample::flights(opt.now.unwrap_or_else(model::now))?
    } else {
        match &opt.input {
            Some(path) if path.as_os_str() != "-" => {
                let file = File::open(path).map_err(|e| {
                    Error::with_source(&format!("couldn't open {}", path.display()), e)
                })?;
                FlightReader::new(BufReader::new(file)).read_all()?
            }
            _ => FlightReader::new(io::stdin().lock()).read_all()?,
        }
    };

    let mut runner = Runner::new(
        flights,
        opt.stages()?,
        opt.formatter()?,
        Box::new(LineWriter::new(io::stdout())),
    );
    runner.run()?;

    Ok(())
}
