use rand::{
    Rng,
    distr::{Distribution, weighted::WeightedIndex},
    seq::IndexedRandom,
};
use tracing::debug;

use crate::{Parameter, Real, SeqStatsError, SeqStatsResult};

/// Draws `k` keys with replacement, each with probability proportional to
/// its weight.
pub fn weighted_sample<K, R>(
    population: &[(K, Real)],
    k: usize,
    rng: &mut R,
) -> SeqStatsResult<Vec<K>>
where
    K: Clone,
    R: Rng + ?Sized,
{
    let distr = WeightedIndex::<Real>::new(population.iter().map(|(_, weight)| *weight))?;
    debug!(population = population.len(), k, "Weighted sampling");
    Ok((0..k)
        .filter_map(|_| population.get(distr.sample(rng)))
        .map(|(key, _)| key.clone())
        .collect())
}

/// Draws `size` items uniformly, with or without replacement.
pub fn sample<T, R>(
    population: &[T],
    size: usize,
    replacement: bool,
    rng: &mut R,
) -> SeqStatsResult<Vec<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if replacement {
        if population.is_empty() && size > 0 {
            return Err(SeqStatsError::invalid(
                Parameter::SampleSize,
                "cannot draw from an empty population",
            ));
        }
        Ok((0..size)
            .filter_map(|_| population.choose(rng))
            .cloned()
            .collect())
    } else {
        if size > population.len() {
            return Err(SeqStatsError::invalid(
                Parameter::SampleSize,
                format!(
                    "{size} exceeds population of {} without replacement",
                    population.len()
                ),
            ));
        }
        Ok(population.choose_multiple(rng, size).cloned().collect())
    }
}
