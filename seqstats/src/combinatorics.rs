use itertools::Itertools;
use num::{BigUint, One, ToPrimitive, Zero};

use crate::{SeqStatsError, SeqStatsResult};

/// Exact binomial coefficient `n choose k`; zero when `k > n`.
pub fn choose(n: u64, k: u64) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    // Each partial product is itself a binomial coefficient, so the division is exact.
    (0..k.min(n - k)).fold(BigUint::one(), |acc, i| acc * (n - i) / (i + 1))
}

pub fn choose_u64(n: u64, k: u64) -> SeqStatsResult<u64> {
    choose(n, k).to_u64().ok_or(SeqStatsError::Overflow { n, k })
}

/// Every unordered pair `(items[i], items[j])` with `i < j`, in input order.
pub fn pairwise<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> + '_ {
    items.iter().tuple_combinations()
}
