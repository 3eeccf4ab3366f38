//! Output formatting for solver results

use crate::runner::Report;
use chrono::TimeDelta;
use std::io::{self, Write};

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Write one line per solved part
    pub fn write_report(&self, out: &mut impl Write, report: &Report) -> io::Result<()> {
        for result in &report.results {
            if self.quiet {
                writeln!(out, "{}", result.answer)?;
            } else {
                writeln!(
                    out,
                    "{}/{:02} Part {}: {} (parse: {}, solve: {})",
                    report.year,
                    report.day,
                    result.part,
                    result.answer,
                    format_duration(report.parse_duration),
                    format_duration(result.duration()),
                )?;
            }
        }
        Ok(())
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
