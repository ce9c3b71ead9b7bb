use anyhow::Result;

/// Running sums and extremes collected over one report, meant to represent
/// the overall speedup across all benchmark groups.
pub struct Stats {
  /// Summed sequential estimates, in nanoseconds.
  sequential_ns: f64,
  /// Summed parallel estimates, in nanoseconds.
  parallel_ns: f64,
  /// Extremes of the per-pair speedups, unrounded.
  max: f64,
  min: f64,
  pairs: usize,
}

impl Default for Stats {
  fn default() -> Self {
    Self {
      sequential_ns: 0.0,
      parallel_ns: 0.0,
      max: f64::NEG_INFINITY,
      min: f64::INFINITY,
      pairs: 0,
    }
  }
}

impl Stats {
  /// Folds in one sequential/parallel estimate pair and returns its speedup.
  ///
  /// # Errors
  ///
  /// This will return an error if the parallel estimate is zero.
  pub fn record(&mut self, sequential_ns: f64, parallel_ns: f64) -> Result<f64> {
    if parallel_ns == 0.0 {
      anyhow::bail!("parallel estimate is zero");
    }

    let speedup = sequential_ns / parallel_ns;

    self.sequential_ns += sequential_ns;
    self.parallel_ns += parallel_ns;
    self.max = self.max.max(speedup);
    self.min = self.min.min(speedup);
    self.pairs += 1;

    Ok(speedup)
  }

  pub fn is_empty(&self) -> bool {
    self.pairs == 0
  }

  /// Overall speedup, weighing each benchmark by its runtime: the ratio of
  /// the summed estimates, not the mean of the per-pair speedups.
  pub fn average(&self) -> f64 {
    self.sequential_ns / self.parallel_ns
  }

  pub fn max(&self) -> f64 {
    self.max
  }

  pub fn min(&self) -> f64 {
    self.min
  }
}
