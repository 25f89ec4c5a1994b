use super::formatter::{Formatter, Section};
use crate::error::Result;

pub struct HumanReadableFormatter {
    verbose: bool,
}

impl HumanReadableFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn format_title(&self, section: &Section) -> String {
        if self.verbose {
            format!(
                "{} ({} of {}):",
                section.title,
                section.flights.len(),
                section.total
            )
        } else {
            format!("{}:", section.title)
        }
    }
}

impl Formatter for HumanReadableFormatter {
    fn format(&self, section: &Section) -> Result<Vec<u8>> {
        let mut lines = vec![self.format_title(section)];
        lines.extend(section.flights.iter().map(|flight| flight.to_string()));
        Ok(lines.join("\n").into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{parse_timestamp, Flight};

    #[test]
    fn test_format() -> Result<()> {
        let flights = vec![
            Flight::from_dates(&[
                parse_timestamp("2025-02-25T10:00")?,
                parse_timestamp("2025-02-25T12:00")?,
            ])?,
            Flight::default(),
        ];
        let kept: Vec<&Flight> = flights.iter().collect();
        let section = Section {
            title: "future",
            flights: &kept,
            total: 3,
        };

        assert_eq!(
            "future:\n[2025-02-25T10:00|2025-02-25T12:00]\n[]",
            String::from_utf8_lossy(&HumanReadableFormatter::new(false).format(&section)?)
        );
        assert_eq!(
            "future (2 of 3):\n[2025-02-25T10:00|2025-02-25T12:00]\n[]",
            String::from_utf8_lossy(&HumanReadableFormatter::new(true).format(&section)?)
        );
        Ok(())
    }

    #[test]
    fn test_format_empty_section() -> Result<()> {
        let section = Section {
            title: "arrival",
            flights: &[],
            total: 0,
        };
        assert_eq!(
            b"arrival:".to_vec(),
            HumanReadableFormatter::new(false).format(&section)?
        );
        Ok(())
    }
}
