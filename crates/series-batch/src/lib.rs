//! Bounded concurrent batch execution
//!
//! The executor fans out many independent query items under a fixed
//! concurrency cap and hands back an order-preserving, per-item
//! fault-isolated result list — the raw-material gathering stage in front
//! of the analyzers.
//!
//! # Example
//!
//! ```rust
//! use series_batch::{BatchConfig, BatchExecutor, CancellationToken};
//!
//! let executor = BatchExecutor::new(BatchConfig::new(4).unwrap());
//! let token = CancellationToken::new();
//!
//! let results = executor
//!     .execute((0..16).collect::<Vec<u32>>(), &token, |_, zone| Ok(zone * 10))
//!     .unwrap();
//!
//! assert_eq!(results.len(), 16);
//! assert_eq!(*results[3].value().unwrap(), 30);
//! ```

pub mod executor;
pub mod progress;
pub mod token;

// Re-exports
pub use executor::{assemble_series, BatchConfig, BatchExecutor, BatchResult};
pub use progress::{ProgressBus, ProgressHandler, SharedProgress};
pub use token::CancellationToken;
