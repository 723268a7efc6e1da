//! Parallel frequency-point evaluation using rayon.
//!
//! Every frequency point of a sweep is independent: components are immutable
//! and hold no evaluation state, so points can be spread across rayon's
//! work-stealing pool without synchronization. Small sweeps stay sequential.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for parallel sweep execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelSweepConfig {
    /// Minimum points to use parallel execution (below this, sequential is faster).
    pub min_points_for_parallel: usize,
    /// Minimum points handed to one rayon task. None = rayon default.
    pub chunk_size: Option<usize>,
}

impl Default for ParallelSweepConfig {
    fn default() -> Self {
        Self {
            min_points_for_parallel: 1024,
            chunk_size: None,
        }
    }
}

impl ParallelSweepConfig {
    /// Never run in parallel.
    pub fn sequential() -> Self {
        Self {
            min_points_for_parallel: usize::MAX,
            chunk_size: None,
        }
    }

    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = Some(size);
        self
    }

    pub fn with_min_parallel(mut self, min: usize) -> Self {
        self.min_points_for_parallel = min;
        self
    }

    /// Whether a sweep of `points` frequencies should run in parallel.
    pub fn use_parallel(&self, points: usize) -> bool {
        points >= self.min_points_for_parallel && rayon::current_num_threads() > 1
    }
}

/// Evaluate `eval` at every frequency, in order.
///
/// The first error encountered (in any thread) is returned.
pub(crate) fn map_frequencies<T, F>(
    frequencies: &[f64],
    config: &ParallelSweepConfig,
    eval: F,
) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(f64) -> Result<T> + Sync + Send,
{
    if !config.use_parallel(frequencies.len()) {
        return frequencies.iter().map(|&f| eval(f)).collect();
    }

    log::info!(
        "Evaluating sweep in parallel ({} points, {} threads)",
        frequencies.len(),
        rayon::current_num_threads()
    );

    let min_len = config.chunk_size.unwrap_or(1).max(1);
    frequencies
        .par_iter()
        .with_min_len(min_len)
        .map(|&f| eval(f))
        .collect()
}
