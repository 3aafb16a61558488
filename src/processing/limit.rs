//! Prefix selection.

/// Returns a lazy iterator over the first `min(n, len)` elements of `items`, in order.
pub fn limit<I>(items: I, n: usize) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
{
    items.into_iter().take(n)
}

#[cfg(test)]
mod tests {
    use super::limit;
    use crate::types::{sample_records, Record};

    #[test]
    fn limit_takes_a_prefix() {
        let records = sample_records();
        let out: Vec<&Record> = limit(&records, 2).collect();
        assert_eq!(out, vec![&records[0], &records[1]]);
    }

    #[test]
    fn limit_larger_than_input_returns_everything() {
        let records = sample_records();
        assert_eq!(limit(&records, 10).count(), records.len());
    }

    #[test]
    fn limit_zero_is_empty() {
        let records = sample_records();
        assert_eq!(limit(&records, 0).count(), 0);
    }
}
