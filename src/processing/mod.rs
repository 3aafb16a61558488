//! In-memory sequence transformations.
//!
//! Every operation is generic over [`IntoIterator`], so it accepts owned vectors, slices
//! (`&records`), mutable iterators (`records.iter_mut()`) or the output of another operation.
//! Intermediate operations ([`filter()`], [`limit()`], [`map()`]) are lazy; terminal operations
//! consume their input.
//!
//! Currently implemented:
//!
//! - [`for_each()`]: side-effecting visit of every element
//! - [`filter()`] / [`filter_all()`] / [`Predicate`]: predicate filtering and composition
//! - [`limit()`]: prefix selection
//! - [`sorted_by()`] / [`sorted_by_key()`]: stable sorting into a new `Vec`
//! - [`max_by_key()`] / [`min_by_key()`] (and comparator forms): extreme element, first wins on
//!   ties
//! - [`map()`]: element-wise transformation (side effects allowed)
//! - [`reduce()`] / [`fold()`] / [`reduce_with()`]: folding
//! - [`to_map()`] / [`to_map_unique()`] / [`to_list()`]: collection
//! - [`summarize()`]: [`SummaryStatistics`] over integers
//!
//! ## Example: filter → map → reduce
//!
//! ```rust
//! use record_pipeline::processing::{filter, map, reduce, Predicate};
//! use record_pipeline::types::{sample_records, Record, FEMALE};
//!
//! let records = sample_records();
//!
//! // Keep records older than one and tagged female.
//! let older = Predicate::new(|r: &Record| r.age() > 1);
//! let female = Predicate::new(|r: &Record| r.sex() == FEMALE);
//! let both = older.and(female);
//! let kept = filter(&records, |r| both.test(r));
//!
//! // Double each surviving age and sum them.
//! let total = reduce(map(kept, |r| r.age() * 2), |a, b| a + b).unwrap();
//! assert_eq!(total, 8);
//! ```

pub mod collect;
pub mod extrema;
pub mod filter;
pub mod for_each;
pub mod limit;
pub mod map;
pub mod reduce;
pub mod sort;
pub mod stats;

pub use collect::{keep_first, keep_last, to_list, to_map, to_map_unique};
pub use extrema::{max_by, max_by_key, min_by, min_by_key};
pub use filter::{filter, filter_all, Predicate};
pub use for_each::for_each;
pub use limit::limit;
pub use map::map;
pub use reduce::{fold, reduce, reduce_with, ReduceOp};
pub use sort::{sorted_by, sorted_by_key};
pub use stats::{summarize, SummaryStatistics};
