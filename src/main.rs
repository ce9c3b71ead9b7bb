mod estimates;
mod ext;
mod format;
mod report;
mod stats;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use self::report::Report;

/// Prints sequential vs parallel timings from the latest criterion run,
/// followed by the average, max, and min speedup across all benchmarks.
///
/// Criterion exposes neither its measurements nor its estimate types through
/// a Rust API, so this reads the JSON files it leaves behind on disk.
#[derive(Parser)]
struct Args {
  /// Directory criterion writes its results to.
  #[arg(long, default_value = "target/criterion")]
  criterion_dir: PathBuf,
  /// Only benchmark groups whose directory name starts with this prefix are
  /// reported.
  #[arg(long, default_value = "Block")]
  prefix: String,
  /// Report the in-memory and on-disk storage variants of each benchmark
  /// instead of the plain sequential/parallel pair.
  #[arg(long)]
  storage: bool,
}

fn main() -> Result<()> {
  let args = Args::parse();

  if !args.criterion_dir.exists() {
    anyhow::bail!("{:?} does not exist", args.criterion_dir);
  }

  let report = Report::new(args.criterion_dir, args.prefix, args.storage);
  print!("{}", report.run().context("report")?);

  Ok(())
}
