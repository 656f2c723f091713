use std::cmp::Ordering;

use crate::{OrderingContext, SeqStatsError, SeqStatsResult};

/// Stably sorts `(index, value)` pairs by value, failing if any two values
/// (or a value with itself) cannot be compared.
fn sorted_indexed<T: PartialOrd>(
    values: &[T],
    context: OrderingContext,
) -> SeqStatsResult<Vec<(usize, &T)>> {
    if values.iter().any(|value| value.partial_cmp(value).is_none()) {
        return Err(SeqStatsError::Comparison(context));
    }
    let mut incomparable = false;
    let mut indexed: Vec<_> = values.iter().enumerate().collect();
    indexed.sort_by(|(_, a), (_, b)| {
        a.partial_cmp(b).unwrap_or_else(|| {
            incomparable = true;
            Ordering::Equal
        })
    });
    if incomparable {
        return Err(SeqStatsError::Comparison(context));
    }
    Ok(indexed)
}

/// Indices that would sort `values` ascending. Ties keep their order of appearance.
pub fn order<T: PartialOrd>(values: &[T]) -> SeqStatsResult<Vec<usize>> {
    Ok(sorted_indexed(values, OrderingContext::Order)?
        .into_iter()
        .map(|(index, _)| index)
        .collect())
}

/// Zero-based rank of each value, i.e. where it lands in the sorted
/// sequence. Ties are ranked by order of appearance, so the result is always
/// a permutation of `0..values.len()` and the inverse of `order`.
pub fn rank<T: PartialOrd>(values: &[T]) -> SeqStatsResult<Vec<usize>> {
    let mut ranks = vec![0; values.len()];
    for (position, index) in order(values)?.into_iter().enumerate() {
        if let Some(slot) = ranks.get_mut(index) {
            *slot = position;
        }
    }
    Ok(ranks)
}

fn sort_entries<K: Ord, V: PartialOrd>(
    entries: impl IntoIterator<Item = (K, V)>,
    descending: bool,
) -> SeqStatsResult<Vec<(K, V)>> {
    let mut entries: Vec<_> = entries.into_iter().collect();
    if entries.iter().any(|(_, v)| v.partial_cmp(v).is_none()) {
        return Err(SeqStatsError::Comparison(OrderingContext::SortByValue));
    }
    let mut incomparable = false;
    entries.sort_by(|(ka, va), (kb, vb)| {
        let ordering = va
            .partial_cmp(vb)
            .unwrap_or_else(|| {
                incomparable = true;
                Ordering::Equal
            })
            .then_with(|| ka.cmp(kb));
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
    if incomparable {
        return Err(SeqStatsError::Comparison(OrderingContext::SortByValue));
    }
    Ok(entries)
}

/// Entries sorted by value, then by key.
pub fn sort_by_value<K: Ord, V: PartialOrd>(
    entries: impl IntoIterator<Item = (K, V)>,
) -> SeqStatsResult<Vec<(K, V)>> {
    sort_entries(entries, false)
}

/// Entries sorted by value, then by key, both descending.
pub fn sort_by_value_desc<K: Ord, V: PartialOrd>(
    entries: impl IntoIterator<Item = (K, V)>,
) -> SeqStatsResult<Vec<(K, V)>> {
    sort_entries(entries, true)
}
