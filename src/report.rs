use std::{fmt::Write, fs, path::PathBuf};

use anyhow::{Context, Result};

use crate::{estimates, format, stats::Stats};

/// Sequential/parallel pairs measured by the block benchmarks.
const MEMORY_VARIANTS: &[[&str; 2]] = &[["Sequential", "Parallel"]];

/// The cross of execution mode and storage backend measured by the
/// storage-aware benchmarks.
const STORAGE_VARIANTS: &[[&str; 2]] = &[
  ["Sequential_In Memory", "Parallel_In Memory"],
  ["Sequential_On Disk", "Parallel_On Disk"],
];

/// A single pass over criterion's output directory.
pub struct Report {
  /// Where criterion wrote its results.
  criterion_dir: PathBuf,
  /// Benchmark groups must start with this to be reported.
  prefix: String,
  /// Whether to report the storage-backend cross instead of the plain
  /// sequential/parallel pair.
  storage: bool,
}

impl Report {
  pub fn new(criterion_dir: PathBuf, prefix: String, storage: bool) -> Self {
    Self {
      criterion_dir,
      prefix,
      storage,
    }
  }

  /// Reads every matching benchmark group and renders the full report: one
  /// line per group, then the average/max/min speedup summary.
  ///
  /// Any missing or malformed estimate file fails the whole run.
  pub fn run(&self) -> Result<String> {
    let mut stats = Stats::default();
    let mut out = String::new();

    for group in self.groups().context("groups")? {
      let group_dir = self.criterion_dir.join(&group);

      let mut estimates_ns = Vec::new();
      let mut speedups = Vec::new();

      for &[sequential, parallel] in self.variants() {
        let sequential_ns = estimates::read(&group_dir, sequential)?;
        let parallel_ns = estimates::read(&group_dir, parallel)?;

        speedups.push(stats.record(sequential_ns, parallel_ns).with_context(|| group.clone())?);
        estimates_ns.extend([sequential_ns, parallel_ns]);
      }

      // A per-line speedup only makes sense when the line holds one pair.
      let speedup = match speedups.as_slice() {
        &[speedup] => Some(speedup),
        _ => None,
      };

      writeln!(out, "{}", format::row(&group, &estimates_ns, speedup)?)?;
    }

    if stats.is_empty() {
      return Ok("No benchmarks found.\n".to_string());
    }

    out.push_str(&format::summary(&stats)?);

    Ok(out)
  }

  /// The benchmark group directories to report, in directory order.
  fn groups(&self) -> Result<Vec<String>> {
    let mut groups = Vec::new();

    for entry in fs::read_dir(&self.criterion_dir).context("read dir")? {
      let name = entry.context("read entry")?.file_name().to_string_lossy().into_owned();

      if name.starts_with(&self.prefix) {
        groups.push(name);
      }
    }

    Ok(groups)
  }

  fn variants(&self) -> &'static [[&'static str; 2]] {
    if self.storage {
      STORAGE_VARIANTS
    } else {
      MEMORY_VARIANTS
    }
  }
}
