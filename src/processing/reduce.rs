//! Reduction (fold) operations.

use crate::error::{PipelineError, PipelineResult};

/// Built-in reductions over integer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Sum of all values.
    Sum,
    /// Minimum value.
    Min,
    /// Maximum value.
    Max,
}

impl ReduceOp {
    /// `None` when the sum leaves the `i64` range.
    fn apply(self, acc: i64, v: i64) -> Option<i64> {
        match self {
            ReduceOp::Sum => acc.checked_add(v),
            ReduceOp::Min => Some(acc.min(v)),
            ReduceOp::Max => Some(acc.max(v)),
        }
    }

    fn name(self) -> &'static str {
        match self {
            ReduceOp::Sum => "sum",
            ReduceOp::Min => "min",
            ReduceOp::Max => "max",
        }
    }
}

/// Combines values left to right with `combine`, seeded by the first element.
///
/// Fails with [`PipelineError::EmptyInput`] when `values` is empty.
pub fn reduce<I, F>(values: I, combine: F) -> PipelineResult<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    values
        .into_iter()
        .reduce(combine)
        .ok_or_else(|| PipelineError::empty("reduce"))
}

/// Seeded fold. Never fails; returns `init` for empty input.
///
/// This is similar to `Iterator::fold`.
pub fn fold<I, A, F>(values: I, init: A, combine: F) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    values.into_iter().fold(init, combine)
}

/// Reduce integer values using a built-in [`ReduceOp`].
///
/// Fails with [`PipelineError::EmptyInput`] when `values` is empty, and with
/// [`PipelineError::Overflow`] when a running sum leaves the `i64` range.
pub fn reduce_with<I>(values: I, op: ReduceOp) -> PipelineResult<i64>
where
    I: IntoIterator<Item = i64>,
{
    let mut values = values.into_iter();
    let first = values
        .next()
        .ok_or_else(|| PipelineError::empty(op.name()))?;
    values.try_fold(first, |acc, v| {
        op.apply(acc, v).ok_or(PipelineError::Overflow {
            operation: op.name(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::{fold, reduce, reduce_with, ReduceOp};
    use crate::error::PipelineError;
    use crate::types::{sample_records, Record};

    #[test]
    fn reduce_sums_ages() {
        let records = sample_records();
        let total = reduce(records.iter().map(Record::age), |sum, age| sum + age).unwrap();
        assert_eq!(total, 10);
    }

    #[test]
    fn reduce_single_element_returns_it_unchanged() {
        let total = reduce(vec![7_i64], |_, _| unreachable!("combiner must not run")).unwrap();
        assert_eq!(total, 7);
    }

    #[test]
    fn reduce_applies_in_sequence_order() {
        let joined = reduce(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            |acc, s| acc + &s,
        )
        .unwrap();
        assert_eq!(joined, "abc");
    }

    #[test]
    fn reduce_on_empty_input_is_an_error() {
        let err = reduce(Vec::<i64>::new(), |a, b| a + b).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyInput { operation: "reduce" }));
    }

    #[test]
    fn fold_with_seed_handles_empty_input() {
        assert_eq!(fold(Vec::<i64>::new(), 5, |a, b| a + b), 5);
        assert_eq!(fold(vec![1_i64, 2, 3], 5, |a, b| a + b), 11);
    }

    #[test]
    fn reduce_with_builtin_ops() {
        let ages = || sample_records().into_iter().map(|r| r.age());
        assert_eq!(reduce_with(ages(), ReduceOp::Sum).unwrap(), 10);
        assert_eq!(reduce_with(ages(), ReduceOp::Min).unwrap(), 1);
        assert_eq!(reduce_with(ages(), ReduceOp::Max).unwrap(), 4);

        let err = reduce_with(std::iter::empty(), ReduceOp::Max).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyInput { operation: "max" }));
    }

    #[test]
    fn reduce_with_sum_reports_overflow() {
        let err = reduce_with(vec![i64::MAX, 1], ReduceOp::Sum).unwrap_err();
        assert!(matches!(err, PipelineError::Overflow { operation: "sum" }));

        let err = reduce_with(vec![i64::MIN, -1], ReduceOp::Sum).unwrap_err();
        assert!(matches!(err, PipelineError::Overflow { operation: "sum" }));

        // Extremes are fine as long as no sum leaves the range.
        assert_eq!(reduce_with(vec![i64::MAX, -1, 1], ReduceOp::Sum).unwrap(), i64::MAX);
        assert_eq!(reduce_with(vec![i64::MIN, i64::MAX], ReduceOp::Min).unwrap(), i64::MIN);
        assert_eq!(reduce_with(vec![i64::MIN, i64::MAX], ReduceOp::Max).unwrap(), i64::MAX);
    }
}
