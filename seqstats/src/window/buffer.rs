use std::collections::{VecDeque, vec_deque};

use crate::{Parameter, SeqStatsError, SeqStatsResult};

/// A fixed-capacity FIFO holding the most recent values of a stream.
/// Pushing onto a full buffer evicts the oldest value.
#[derive(Debug, Clone)]
pub struct WindowBuffer<T> {
    capacity: usize,
    values: VecDeque<T>,
}

impl<T> WindowBuffer<T> {
    pub fn new(capacity: usize) -> SeqStatsResult<Self> {
        if capacity == 0 {
            return Err(SeqStatsError::invalid(
                Parameter::WindowSize,
                "window must hold at least one value",
            ));
        }
        Ok(Self {
            capacity,
            values: VecDeque::new(),
        })
    }

    /// Appends `value`, returning the evicted value if the buffer was full.
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.is_full() {
            self.values.pop_front()
        } else {
            None
        };
        self.values.push_back(value);
        evicted
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    /// Iterates from the oldest value to the newest.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.values.iter()
    }

    pub fn as_slices(&self) -> (&[T], &[T]) {
        self.values.as_slices()
    }

    pub fn newest(&self) -> Option<&T> {
        self.values.back()
    }
}

impl<T: Clone> WindowBuffer<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.values.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a WindowBuffer<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
