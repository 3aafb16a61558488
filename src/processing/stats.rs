//! Summary statistics over integer values.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Count, sum, min, max and average of a stream of `i64` values.
///
/// Statistics are built incrementally with [`SummaryStatistics::accept`], from an iterator via
/// [`FromIterator`], or by merging partial results with [`SummaryStatistics::combine`].
///
/// For empty input `min`, `max` and `average` are undefined and reported as `None`.
///
/// Serializes as `{count, sum, min, max, average}`, with `null` for undefined values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryStatistics {
    count: u64,
    sum: i128,
    min: Option<i64>,
    max: Option<i64>,
}

impl SummaryStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one value.
    pub fn accept(&mut self, value: i64) {
        self.count += 1;
        self.sum += i128::from(value);
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    /// Fold another set of statistics into this one.
    pub fn combine(&mut self, other: &SummaryStatistics) {
        self.count += other.count;
        self.sum += other.sum;
        self.min = match (self.min, other.min) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.max = match (self.max, other.max) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of all values. Accumulated in `i128` so that summing `i64` values cannot overflow.
    pub fn sum(&self) -> i128 {
        self.sum
    }

    pub fn min(&self) -> Option<i64> {
        self.min
    }

    pub fn max(&self) -> Option<i64> {
        self.max
    }

    /// `sum / count` as a float, or `None` when no values were recorded.
    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum as f64 / self.count as f64)
        }
    }
}

impl Extend<i64> for SummaryStatistics {
    fn extend<T: IntoIterator<Item = i64>>(&mut self, iter: T) {
        for v in iter {
            self.accept(v);
        }
    }
}

impl FromIterator<i64> for SummaryStatistics {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

impl fmt::Display for SummaryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn opt<T: fmt::Display>(v: Option<T>) -> String {
            v.map_or_else(|| "undefined".to_string(), |v| v.to_string())
        }
        write!(
            f,
            "count={}, sum={}, min={}, max={}, average={}",
            self.count,
            self.sum,
            opt(self.min),
            opt(self.max),
            opt(self.average())
        )
    }
}

impl Serialize for SummaryStatistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SummaryStatistics", 5)?;
        s.serialize_field("count", &self.count)?;
        s.serialize_field("sum", &self.sum)?;
        s.serialize_field("min", &self.min)?;
        s.serialize_field("max", &self.max)?;
        s.serialize_field("average", &self.average())?;
        s.end()
    }
}

/// Compute summary statistics over `values`.
pub fn summarize<I>(values: I) -> SummaryStatistics
where
    I: IntoIterator<Item = i64>,
{
    values.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::{summarize, SummaryStatistics};
    use crate::types::sample_records;

    #[test]
    fn summary_of_sample_ages() {
        let stats = summarize(sample_records().iter().map(|r| r.age()));
        assert_eq!(stats.count(), 4);
        assert_eq!(stats.sum(), 10);
        assert_eq!(stats.min(), Some(1));
        assert_eq!(stats.max(), Some(4));
        assert_eq!(stats.average(), Some(2.5));
        assert_eq!(
            stats.to_string(),
            "count=4, sum=10, min=1, max=4, average=2.5"
        );
    }

    #[test]
    fn empty_input_leaves_extremes_and_average_undefined() {
        let stats = summarize(std::iter::empty());
        assert_eq!(stats.count(), 0);
        assert_eq!(stats.sum(), 0);
        assert_eq!(stats.min(), None);
        assert_eq!(stats.max(), None);
        assert_eq!(stats.average(), None);
        assert!(stats.to_string().contains("average=undefined"));
    }

    #[test]
    fn combine_matches_single_pass() {
        let mut left: SummaryStatistics = vec![5, -3].into_iter().collect();
        let right: SummaryStatistics = vec![10, 0].into_iter().collect();
        left.combine(&right);

        assert_eq!(left, summarize(vec![5, -3, 10, 0]));

        let mut empty = SummaryStatistics::new();
        empty.combine(&right);
        assert_eq!(empty, right);
    }

    #[test]
    fn sum_does_not_overflow() {
        let stats = summarize(vec![i64::MAX, i64::MAX]);
        assert_eq!(stats.sum(), 2 * i128::from(i64::MAX));
        assert_eq!(stats.max(), Some(i64::MAX));
    }

    #[test]
    fn json_includes_average_and_nulls_when_empty() {
        let stats = summarize(sample_records().iter().map(|r| r.age()));
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["count"].as_u64(), Some(4));
        assert_eq!(json["sum"].as_i64(), Some(10));
        assert_eq!(json["min"].as_i64(), Some(1));
        assert_eq!(json["max"].as_i64(), Some(4));
        assert_eq!(json["average"].as_f64(), Some(2.5));

        let empty = serde_json::to_value(SummaryStatistics::new()).unwrap();
        assert_eq!(empty["count"].as_u64(), Some(0));
        assert!(empty["min"].is_null());
        assert!(empty["max"].is_null());
        assert!(empty["average"].is_null());
    }
}
