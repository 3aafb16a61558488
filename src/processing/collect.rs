//! Collecting into maps and lists.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::{PipelineError, PipelineResult};

/// Collects `items` into a map keyed by `key`, with values from `value`.
///
/// When a key repeats, the stored value becomes `merge(existing, incoming)`, applied in
/// iteration order. Pass [`keep_last`] or [`keep_first`] for the common policies.
pub fn to_map<I, K, V, KF, VF, M>(
    items: I,
    mut key: KF,
    mut value: VF,
    mut merge: M,
) -> HashMap<K, V>
where
    I: IntoIterator,
    K: Eq + Hash,
    KF: FnMut(&I::Item) -> K,
    VF: FnMut(I::Item) -> V,
    M: FnMut(V, V) -> V,
{
    let mut out = HashMap::new();
    for item in items {
        let k = key(&item);
        let incoming = value(item);
        let v = match out.remove(&k) {
            Some(existing) => merge(existing, incoming),
            None => incoming,
        };
        out.insert(k, v);
    }
    out
}

/// Like [`to_map`], but a repeated key is an error instead of being merged.
///
/// Fails with [`PipelineError::DuplicateKey`] on the first collision.
pub fn to_map_unique<I, K, V, KF, VF>(
    items: I,
    mut key: KF,
    mut value: VF,
) -> PipelineResult<HashMap<K, V>>
where
    I: IntoIterator,
    K: Eq + Hash + fmt::Debug,
    KF: FnMut(&I::Item) -> K,
    VF: FnMut(I::Item) -> V,
{
    let mut out = HashMap::new();
    for item in items {
        let k = key(&item);
        if out.contains_key(&k) {
            return Err(PipelineError::DuplicateKey {
                key: format!("{k:?}"),
            });
        }
        out.insert(k, value(item));
    }
    Ok(out)
}

/// Merge policy: the incoming value replaces the existing one.
pub fn keep_last<V>(_existing: V, incoming: V) -> V {
    incoming
}

/// Merge policy: the first value seen for a key is kept.
pub fn keep_first<V>(existing: V, _incoming: V) -> V {
    existing
}

/// Collects `mapper(item)` for every element into a `Vec`, same order and length.
pub fn to_list<I, U, F>(items: I, mapper: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    items.into_iter().map(mapper).collect()
}

#[cfg(test)]
mod tests {
    use super::{keep_first, keep_last, to_list, to_map, to_map_unique};
    use crate::error::PipelineError;
    use crate::types::{sample_records, Record, SAMPLE_NAME};

    #[test]
    fn to_map_keep_last_resolves_duplicates_to_last_element() {
        let records = sample_records();
        let by_name = to_map(&records, |r| r.name().to_string(), |r| r.clone(), keep_last);

        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[SAMPLE_NAME].age(), 4);
    }

    #[test]
    fn to_map_keep_first_resolves_duplicates_to_first_element() {
        let records = sample_records();
        let by_sex = to_map(&records, |r| r.sex().to_string(), |r| r.age(), keep_first);

        assert_eq!(by_sex.len(), 2);
        assert_eq!(by_sex["女"], 1);
        assert_eq!(by_sex["男"], 2);
    }

    #[test]
    fn to_map_merge_sees_existing_then_incoming() {
        let records = sample_records();
        let mut calls = Vec::new();
        let sums = to_map(
            &records,
            |r| r.sex().to_string(),
            |r| r.age(),
            |existing, incoming| {
                calls.push((existing, incoming));
                existing + incoming
            },
        );

        assert_eq!(sums["女"], 5);
        assert_eq!(sums["男"], 5);
        assert_eq!(calls, vec![(2, 3), (1, 4)]);
    }

    #[test]
    fn to_map_unique_rejects_duplicates() {
        let records = sample_records();
        let err = to_map_unique(&records, |r| r.name().to_string(), |r| r.age()).unwrap_err();
        assert!(matches!(err, PipelineError::DuplicateKey { .. }));
        assert!(err.to_string().contains(SAMPLE_NAME));

        let by_age = to_map_unique(&records, |r| r.age(), |r| r.sex().to_string()).unwrap();
        assert_eq!(by_age.len(), 4);
    }

    #[test]
    fn to_list_preserves_order() {
        let records = sample_records();
        let names = to_list(&records, |r| r.name().to_string());
        assert_eq!(names, vec![SAMPLE_NAME; 4]);

        let ages = to_list(records, |r: Record| r.age());
        assert_eq!(ages, vec![1, 2, 3, 4]);
    }
}
