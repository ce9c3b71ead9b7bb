use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::ext::PathExt;

/// Criterion's estimate file for the most recent run of one benchmark,
/// relative to the benchmark group's directory.
const ESTIMATES_FILE: &str = "new/estimates.json";

/// The subset of an `estimates.json` document we consume. Criterion writes
/// several more fields (medians, confidence intervals, standard errors), all
/// ignored here.
#[derive(Deserialize)]
pub struct Estimates {
  slope: Option<Estimate>,
  mean: Option<Estimate>,
}

#[derive(Deserialize)]
struct Estimate {
  point_estimate: f64,
}

impl Estimates {
  /// The point estimate in nanoseconds, taken from the slope when criterion
  /// computed one and from the mean otherwise.
  ///
  /// # Errors
  ///
  /// This will return an error if both estimates are null or absent.
  pub fn point_estimate(&self) -> Result<f64> {
    let estimate = self.slope.as_ref().or(self.mean.as_ref()).context("neither slope nor mean estimate present")?;

    Ok(estimate.point_estimate)
  }
}

/// Reads the point estimate in nanoseconds for one variant of a benchmark
/// group, from `<group_dir>/<variant>/new/estimates.json`.
pub fn read<P: AsRef<Path>>(group_dir: P, variant: &str) -> Result<f64> {
  let path = group_dir.as_ref().join(variant).join(ESTIMATES_FILE);

  let estimates: Estimates = path.read_json()?;

  estimates.point_estimate().with_context(|| format!("{path:?}"))
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::TempDir;

  use super::*;

  fn parse(json: &str) -> Estimates {
    serde_json::from_str(json).unwrap()
  }

  #[test]
  fn slope_takes_precedence() {
    let estimates = parse(r#"{"slope": {"point_estimate": 5.0}, "mean": {"point_estimate": 7.0}}"#);

    assert_eq!(estimates.point_estimate().unwrap(), 5.0);
  }

  #[test]
  fn null_slope_falls_back_to_mean() {
    let estimates = parse(r#"{"slope": null, "mean": {"point_estimate": 7.0}}"#);

    assert_eq!(estimates.point_estimate().unwrap(), 7.0);
  }

  #[test]
  fn both_estimates_missing_is_an_error() {
    assert!(parse(r#"{"slope": null, "mean": null}"#).point_estimate().is_err());
    assert!(parse(r#"{}"#).point_estimate().is_err());
  }

  #[test]
  fn unknown_fields_are_ignored() {
    let estimates = parse(r#"{"mean": {"point_estimate": 7.0, "standard_error": 0.1}, "median": {"point_estimate": 6.0}}"#);

    assert_eq!(estimates.point_estimate().unwrap(), 7.0);
  }

  #[test]
  fn reads_the_group_layout() {
    let dir = TempDir::new().unwrap();
    let variant_dir = dir.path().join("Sequential/new");

    fs::create_dir_all(&variant_dir).unwrap();
    fs::write(
      variant_dir.join("estimates.json"),
      r#"{"slope": {"point_estimate": 123.0}, "mean": {"point_estimate": 456.0}}"#,
    )
    .unwrap();

    assert_eq!(read(dir.path(), "Sequential").unwrap(), 123.0);
  }

  #[test]
  fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();

    assert!(read(dir.path(), "Sequential").is_err());
  }
}
