//! `record-pipeline` is a small library of chained, closure-driven sequence operations over an
//! in-memory [`types::Record`] set, plus a fixed-size worker pool for fire-and-forget tasks.
//!
//! ## What you can do
//!
//! **Pipeline operations** ([`processing`]), all generic over [`IntoIterator`]:
//!
//! - for-each, filter (single, chained, or composed with [`processing::Predicate`]), limit
//! - stable sort by comparator or key
//! - max/min by key or comparator (first element wins on ties; empty input is an error)
//! - map (side effects allowed, e.g. over `iter_mut()`), reduce, seeded fold
//! - collect into a map with a caller-supplied merge policy, or into a list
//! - summary statistics (count, sum, min, max, average)
//!
//! **Background work** ([`execution`]): submit a [`execution::Task`] value or a closure to a
//! [`execution::WorkerPool`]; nothing is awaited.
//!
//! ## Quick example
//!
//! ```rust
//! use record_pipeline::processing::{filter, keep_last, max_by_key, summarize, to_map};
//! use record_pipeline::types::sample_records;
//!
//! # fn main() -> Result<(), record_pipeline::PipelineError> {
//! let records = sample_records();
//!
//! let older: Vec<_> = filter(&records, |r| r.age() > 1).collect();
//! assert_eq!(older.len(), 3);
//!
//! let oldest = max_by_key(&records, |r| r.age())?;
//! assert_eq!(oldest.age(), 4);
//!
//! // Every sample record shares one name, so the last one wins.
//! let by_name = to_map(&records, |r| r.name().to_string(), |r| r.age(), keep_last);
//! assert_eq!(by_name.len(), 1);
//!
//! let stats = summarize(records.iter().map(|r| r.age()));
//! assert_eq!(stats.average(), Some(2.5));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: the record model and the fixed sample set
//! - [`processing`]: sequence operations
//! - [`execution`]: worker pool, observers and metrics
//! - [`demo`]: printable demonstrations of every operation (used by the `record-demo` binary)
//! - [`error`]: error type shared across the crate

pub mod demo;
pub mod error;
pub mod execution;
pub mod processing;
pub mod types;

pub use error::{PipelineError, PipelineResult};
