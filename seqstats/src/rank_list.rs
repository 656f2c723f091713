use std::cmp::Ordering;

use tracing::trace;

use crate::{OrderingContext, Parameter, SeqStatsError, SeqStatsResult};

/// Capacity used by `RankList::default`.
pub const DEFAULT_MAXLEN: usize = 5;

/// Keeps the `maxlen` smallest values added so far, sorted ascending.
///
/// Equal values keep their insertion order: a new value is placed after any
/// existing values that compare equal to it. Once the list holds more than
/// `maxlen` values the largest are dropped from the tail.
#[derive(Debug, Clone, PartialEq)]
pub struct RankList<T> {
    elements: Vec<T>,
    maxlen: usize,
}

impl<T> Default for RankList<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            maxlen: DEFAULT_MAXLEN,
        }
    }
}

impl<T> RankList<T> {
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn maxlen(&self) -> usize {
        self.maxlen
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: PartialOrd> RankList<T> {
    pub fn new(maxlen: usize) -> SeqStatsResult<Self> {
        if maxlen == 0 {
            return Err(SeqStatsError::invalid(
                Parameter::MaxLen,
                "must be positive",
            ));
        }
        Ok(Self {
            elements: Vec::new(),
            maxlen,
        })
    }

    /// Inserts `value` at its sorted position, then truncates to `maxlen`.
    /// On a comparison failure the list is left unchanged.
    pub fn add(&mut self, value: T) -> SeqStatsResult<()> {
        let index = self.insertion_point(&value)?;
        if index >= self.maxlen {
            trace!(index, maxlen = self.maxlen, "Value ranks beyond capacity");
            return Ok(());
        }
        self.elements.insert(index, value);
        if self.elements.len() > self.maxlen {
            trace!(maxlen = self.maxlen, "Dropping largest value");
            self.elements.truncate(self.maxlen);
        }
        Ok(())
    }

    /// Adds each value in turn, stopping at the first failure.
    pub fn try_extend<II>(&mut self, values: II) -> SeqStatsResult<()>
    where
        II: IntoIterator<Item = T>,
    {
        values.into_iter().try_for_each(|value| self.add(value))
    }

    /// The rightmost index at which `value` can be inserted keeping the list
    /// sorted, i.e. the number of elements that are `<= value`.
    fn insertion_point(&self, value: &T) -> SeqStatsResult<usize> {
        if value.partial_cmp(value).is_none() {
            return Err(SeqStatsError::Comparison(OrderingContext::RankListAdd));
        }
        let (mut low, mut high) = (0, self.elements.len());
        while low < high {
            let mid = low + (high - low) / 2;
            let Some(element) = self.elements.get(mid) else {
                break;
            };
            match value.partial_cmp(element) {
                Some(Ordering::Less) => high = mid,
                Some(_) => low = mid + 1,
                None => return Err(SeqStatsError::Comparison(OrderingContext::RankListAdd)),
            }
        }
        Ok(low)
    }
}

impl<'a, T> IntoIterator for &'a RankList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
