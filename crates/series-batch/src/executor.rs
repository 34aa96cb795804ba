//! Bounded-concurrency batch execution
//!
//! Fans N independent work items out over a dedicated thread pool of fixed
//! size and returns exactly N results in submission order, whatever order
//! items actually finish in. One item's failure lands in its own result
//! slot and never aborts the rest; cancellation stops items that have not
//! started while letting in-flight items finish.

use crate::progress::{ProgressBus, ProgressHandler};
use crate::token::CancellationToken;
use chrono::{DateTime, Utc};
use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};
use series_core::{Error, Result, TimeSeries};
use std::sync::Mutex;

/// Validated executor configuration
#[derive(Debug, Clone)]
pub struct BatchConfig {
    concurrency: usize,
}

impl BatchConfig {
    /// Create a configuration with an explicit concurrency cap
    pub fn new(concurrency: usize) -> Result<Self> {
        if concurrency == 0 {
            return Err(Error::InvalidParameter(
                "Batch concurrency must be at least 1".to_string(),
            ));
        }
        Ok(Self { concurrency })
    }

    /// Maximum number of items allowed to run at once
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            concurrency: num_cpus::get().max(1),
        }
    }
}

/// Per-item outcome, tagged with the item's submission position
#[derive(Debug)]
pub struct BatchResult<T> {
    /// Position of the originating item in the submitted work list
    pub index: usize,
    /// The item's value, or the error that settled it
    pub outcome: Result<T>,
}

impl<T> BatchResult<T> {
    /// Did the item produce a value?
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The value, if the item succeeded
    pub fn value(&self) -> Option<&T> {
        self.outcome.as_ref().ok()
    }
}

/// Fixed-concurrency batch executor
///
/// `execute` blocks until every submitted item has settled; there is no
/// partial or streaming return. Analyzer-style consumers get the full,
/// position-addressable result list in one piece.
pub struct BatchExecutor {
    config: BatchConfig,
    progress: ProgressBus,
}

impl BatchExecutor {
    /// Create an executor from a validated configuration
    pub fn new(config: BatchConfig) -> Self {
        Self {
            config,
            progress: ProgressBus::new(),
        }
    }

    /// Create an executor sized to the machine's logical CPUs
    pub fn with_default_config() -> Self {
        Self::new(BatchConfig::default())
    }

    /// Configured concurrency cap
    pub fn concurrency(&self) -> usize {
        self.config.concurrency()
    }

    /// Register a progress handler; updates arrive serialized
    pub fn register_progress_handler<H>(&self, handler: H)
    where
        H: ProgressHandler + 'static,
    {
        self.progress.register(handler);
    }

    /// Execute `items` under the concurrency cap
    ///
    /// Returns one [`BatchResult`] per item, in submission order. The token
    /// is checked immediately before each item runs: once cancelled, every
    /// not-yet-started item settles as `ExecutionCancelled`. A worker error
    /// becomes `ItemFailure` in that item's slot only. The outer `Result`
    /// fails only when the thread pool itself cannot be built.
    pub fn execute<I, T, F>(
        &self,
        items: Vec<I>,
        token: &CancellationToken,
        work: F,
    ) -> Result<Vec<BatchResult<T>>>
    where
        I: Send,
        T: Send,
        F: Fn(usize, I) -> Result<T> + Sync,
    {
        let total = items.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        let threads = self.config.concurrency().min(total);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| Error::Execution(format!("Failed to build thread pool: {e}")))?;

        log::debug!("Executing batch of {total} items on {threads} workers");

        // Completion counting and progress delivery share one lock so
        // handlers always observe a monotonically increasing count.
        let completed = Mutex::new(0usize);

        let results: Vec<BatchResult<T>> = pool.install(|| {
            items
                .into_par_iter()
                .enumerate()
                .map(|(index, item)| {
                    let outcome = if token.is_cancelled() {
                        Err(Error::ExecutionCancelled)
                    } else {
                        work(index, item).map_err(|e| match e {
                            Error::ExecutionCancelled => Error::ExecutionCancelled,
                            other => Error::ItemFailure(other.to_string()),
                        })
                    };

                    if let Ok(mut count) = completed.lock() {
                        *count += 1;
                        self.progress.emit(*count, total);
                    }

                    BatchResult { index, outcome }
                })
                .collect()
        });

        let failures = results.iter().filter(|r| !r.is_success()).count();
        if failures > 0 {
            log::debug!("Batch finished with {failures}/{total} failed or cancelled items");
        }
        Ok(results)
    }
}

/// Assemble the successful `(time, value)` outcomes of a batch into a series
///
/// Failed or cancelled slots are skipped; the caller still has them in the
/// original result list for retry decisions.
pub fn assemble_series(
    name: impl Into<String>,
    results: &[BatchResult<(DateTime<Utc>, f64)>],
) -> TimeSeries {
    let samples = results
        .iter()
        .filter_map(|r| r.value().copied())
        .collect();
    TimeSeries::from_samples(name, samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[test]
    fn test_config_validation() {
        assert!(BatchConfig::new(0).is_err());
        assert!(BatchConfig::new(1).is_ok());
        assert!(BatchConfig::default().concurrency() >= 1);
    }

    #[test]
    fn test_results_keep_submission_order() {
        let executor = BatchExecutor::new(BatchConfig::new(4).unwrap());
        let token = CancellationToken::new();
        let items: Vec<usize> = (0..50).collect();

        let results = executor
            .execute(items, &token, |_, item| {
                // Finish out of order on purpose
                std::thread::sleep(Duration::from_micros((50 - item as u64) * 10));
                Ok(item * 2)
            })
            .unwrap();

        assert_eq!(results.len(), 50);
        for (i, r) in results.iter().enumerate() {
            assert_eq!(r.index, i);
            assert_eq!(*r.value().unwrap(), i * 2);
        }
    }

    #[test]
    fn test_single_failure_is_isolated() {
        let executor = BatchExecutor::new(BatchConfig::new(3).unwrap());
        let token = CancellationToken::new();
        let items: Vec<usize> = (0..10).collect();

        let results = executor
            .execute(items, &token, |_, item| {
                if item == 3 {
                    Err(Error::Computation("sensor dropout".to_string()))
                } else {
                    Ok(item)
                }
            })
            .unwrap();

        assert_eq!(results.len(), 10);
        for (i, r) in results.iter().enumerate() {
            if i == 3 {
                assert!(matches!(r.outcome, Err(Error::ItemFailure(_))));
            } else {
                assert_eq!(*r.value().unwrap(), i);
            }
        }
    }

    #[test]
    fn test_concurrency_cap_is_respected() {
        let cap = 3;
        let executor = BatchExecutor::new(BatchConfig::new(cap).unwrap());
        let token = CancellationToken::new();
        let in_flight = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);

        let results = executor
            .execute((0..40).collect::<Vec<usize>>(), &token, |_, item| {
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                std::thread::sleep(Duration::from_millis(2));
                in_flight.fetch_sub(1, Ordering::SeqCst);
                Ok(item)
            })
            .unwrap();

        assert_eq!(results.len(), 40);
        assert!(peak.load(Ordering::SeqCst) <= cap);
    }

    #[test]
    fn test_limit_larger_than_item_count() {
        let executor = BatchExecutor::new(BatchConfig::new(10).unwrap());
        let token = CancellationToken::new();

        let results = executor
            .execute(vec![1, 2, 3], &token, |_, item| Ok(item + 100))
            .unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(*results[1].value().unwrap(), 102);
    }

    #[test]
    fn test_pre_cancelled_token_settles_everything() {
        let executor = BatchExecutor::new(BatchConfig::new(2).unwrap());
        let token = CancellationToken::new();
        token.cancel();

        let results = executor
            .execute((0..5).collect::<Vec<usize>>(), &token, |_, item| Ok(item))
            .unwrap();

        assert_eq!(results.len(), 5);
        assert!(results
            .iter()
            .all(|r| matches!(r.outcome, Err(Error::ExecutionCancelled))));
    }

    #[test]
    fn test_empty_batch() {
        let executor = BatchExecutor::new(BatchConfig::new(2).unwrap());
        let token = CancellationToken::new();
        let results: Vec<BatchResult<usize>> =
            executor.execute(Vec::<usize>::new(), &token, |_, item| Ok(item)).unwrap();
        assert!(results.is_empty());
    }
}
