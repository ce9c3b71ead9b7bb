use std::fmt::Write;

use anyhow::Result;

use crate::stats::Stats;

const GROUP_WIDTH: usize = 40;

/// Nanoseconds to milliseconds, rounded to 3 decimal digits. Display only.
pub fn ms(ns: f64) -> f64 {
  (ns / 1_000_000.0 * 1000.0).round() / 1000.0
}

/// One report line: the group name padded to a fixed width, each variant's
/// estimate in milliseconds, and the speedup when one was computed for the
/// line as a whole.
pub fn row(group: &str, estimates_ns: &[f64], speedup: Option<f64>) -> Result<String> {
  let mut row = format!("{group:<GROUP_WIDTH$}");

  for &ns in estimates_ns {
    write!(row, "\t{}", ms(ns))?;
  }

  if let Some(speedup) = speedup {
    write!(row, "\tx{speedup:.2}")?;
  }

  Ok(row)
}

/// The three closing lines of a report.
pub fn summary(stats: &Stats) -> Result<String> {
  let mut lines = String::new();

  writeln!(lines, "Average: x{:.2}", stats.average())?;
  writeln!(lines, "Max: x{:.2}", stats.max())?;
  writeln!(lines, "Min: x{:.2}", stats.min())?;

  Ok(lines)
}
