use std::{collections::HashMap, hash::Hash};

use itertools::Itertools;

use crate::Real;

/// Number of occurrences of each distinct item.
pub fn count_all<T, II>(items: II) -> HashMap<T, usize>
where
    T: Eq + Hash,
    II: IntoIterator<Item = T>,
{
    items.into_iter().counts()
}

/// Share of the total taken by each distinct item. Empty input gives an empty map.
pub fn proportions<T, II>(items: II) -> HashMap<T, Real>
where
    T: Eq + Hash,
    II: IntoIterator<Item = T>,
{
    let counts = count_all(items);
    let total = counts.values().sum::<usize>() as Real;
    counts
        .into_iter()
        .map(|(item, count)| (item, count as Real / total))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn counts_characters() {
        let counts = count_all("ACGTAAC".chars());
        assert_eq!(counts.get(&'A'), Some(&3));
        assert_eq!(counts.get(&'C'), Some(&2));
        assert_eq!(counts.get(&'G'), Some(&1));
        assert_eq!(counts.get(&'T'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn proportions_sum_to_one() {
        let shares = proportions([1, 1, 2, 3]);
        assert_approx_eq!(shares[&1], 0.5);
        assert_approx_eq!(shares[&2], 0.25);
        assert_approx_eq!(shares.values().sum::<Real>(), 1.0);
    }

    #[test]
    fn empty_input() {
        assert!(count_all(Vec::<u8>::new()).is_empty());
        assert!(proportions(Vec::<u8>::new()).is_empty());
    }
}
