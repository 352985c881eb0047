//! Rayon-based parallelisation utilities.
//!
//! This module provides helpers for evaluating spot sweeps in parallel
//! using Rayon. All helpers preserve input order.
//!
//! # Performance Targets
//!
//! - Sequential evaluation for short sweeps (no thread-pool overhead)
//! - Batch processing for optimal cache utilisation on long sweeps

use rayon::prelude::*;

/// Batch size for parallel processing.
///
/// Empirically tuned for cache efficiency.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Sweep length from which parallel evaluation is used by default.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// Processes items in parallel batches.
///
/// # Arguments
///
/// * `items` - Slice of items to process
/// * `batch_size` - Number of items per batch
/// * `processor` - Function to apply to each batch
///
/// # Returns
///
/// Vector of results from each batch, in batch order.
pub fn process_in_batches<T, R, F>(items: &[T], batch_size: usize, processor: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&[T]) -> R + Sync + Send,
{
    items.par_chunks(batch_size.max(1)).map(processor).collect()
}

/// Maps items sequentially or in parallel batches depending on `config`.
///
/// The result is identical either way, in input order.
pub fn map_with_config<T, R, F>(items: &[T], config: &ParallelConfig, mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    if !config.should_parallelize(items.len()) {
        return items.iter().map(mapper).collect();
    }

    process_in_batches(items, config.batch_size, |batch| {
        batch.iter().map(&mapper).collect::<Vec<R>>()
    })
    .into_iter()
    .flatten()
    .collect()
}

/// Configuration for parallel execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Batch size for chunked processing
    pub batch_size: usize,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            parallel_threshold,
        }
    }

    /// Configuration that never parallelises.
    pub fn sequential() -> Self {
        Self::new(DEFAULT_BATCH_SIZE, usize::MAX)
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_in_batches() {
        let items: Vec<i32> = (0..100).collect();
        let sums: Vec<i32> = process_in_batches(&items, 10, |batch| batch.iter().sum());

        assert_eq!(sums.len(), 10);
        assert_eq!(sums.iter().sum::<i32>(), (0..100).sum());
        assert_eq!(sums[0], (0..10).sum());
    }

    #[test]
    fn test_map_with_config_preserves_order() {
        let items: Vec<i32> = (0..1000).rev().collect();
        let parallel = map_with_config(&items, &ParallelConfig::new(7, 0), |&x| x + 1);
        let sequential = map_with_config(&items, &ParallelConfig::sequential(), |&x| x + 1);

        assert_eq!(parallel, sequential);
        assert_eq!(parallel[0], 1000);
        assert_eq!(parallel[999], 1);
    }

    #[test]
    fn test_map_with_config_empty() {
        let items: Vec<f64> = Vec::new();
        let out: Vec<f64> = map_with_config(&items, &ParallelConfig::new(1, 0), |&x| x);
        assert!(out.is_empty());
    }

    #[test]
    fn test_parallel_config_default() {
        let config = ParallelConfig::default();
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn test_should_parallelize() {
        let config = ParallelConfig::new(64, 100);
        assert!(!config.should_parallelize(50));
        assert!(config.should_parallelize(100));
        assert!(config.should_parallelize(1000));
        assert!(!ParallelConfig::sequential().should_parallelize(1_000_000));
    }

    #[test]
    fn test_zero_batch_size_clamped() {
        assert_eq!(ParallelConfig::new(0, 10).batch_size, 1);
    }
}
