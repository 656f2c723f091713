use std::{
    iter::{Chain, FusedIterator},
    vec,
};

use num::traits::AsPrimitive;
use tracing::debug;

use super::{Mean, SummaryStat, WindowBuffer, WindowParameters};
use crate::{Real, SeqStatsResult};

/// Slides a fixed-size window over `source`, emitting `stat` applied to the
/// window once every `output_interval` values, provided the window holds at
/// least the warm-up threshold of values.
///
/// The iterator pulls from its source only when asked for the next summary,
/// and cannot be restarted; build a new one for a second pass.
pub struct SlidingWindow<I, S>
where
    I: Iterator,
    S: SummaryStat<I::Item>,
{
    source: Chain<vec::IntoIter<I::Item>, I>,
    buffer: WindowBuffer<I::Item>,
    stat: S,
    output_interval: usize,
    warm_up: usize,
    stride: usize,
}

impl<I, S> SlidingWindow<I, S>
where
    I: Iterator,
    I::Item: Clone,
    S: SummaryStat<I::Item>,
{
    /// Validates `parameters` before touching `source`. With `flip_start`
    /// the first `window_size` values are read up front to build the
    /// mirrored prefix.
    pub fn new<II>(source: II, parameters: WindowParameters, stat: S) -> SeqStatsResult<Self>
    where
        II: IntoIterator<IntoIter = I>,
    {
        parameters.validate()?;
        let buffer = WindowBuffer::new(parameters.window_size)?;

        let mut source = source.into_iter();
        let prefix = if parameters.flip_start {
            let head: Vec<_> = source.by_ref().take(parameters.window_size).collect();
            let mut prefix: Vec<_> = head.iter().rev().cloned().collect();
            prefix.extend(head);
            prefix
        } else {
            Vec::new()
        };
        debug!(prefix_length = prefix.len(), "Sliding window ready");

        Ok(SlidingWindow {
            source: prefix.into_iter().chain(source),
            buffer,
            stat,
            output_interval: parameters.output_interval,
            warm_up: parameters.warm_up_threshold(),
            stride: 0,
        })
    }
}

impl<I, S> SlidingWindow<I, S>
where
    I: Iterator,
    S: SummaryStat<I::Item>,
{
    pub fn buffer(&self) -> &WindowBuffer<I::Item> {
        &self.buffer
    }
}

impl<I, S> Iterator for SlidingWindow<I, S>
where
    I: Iterator,
    S: SummaryStat<I::Item>,
{
    type Item = S::Output;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let value = self.source.next()?;
            self.buffer.push(value);
            self.stride += 1;
            if self.stride == self.output_interval {
                self.stride = 0;
                if self.buffer.len() >= self.warm_up {
                    return Some(self.stat.summarize(&self.buffer));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.source.size_hint();
        (
            0,
            upper.map(|remaining| remaining.saturating_add(self.stride) / self.output_interval),
        )
    }
}

impl<I, S> FusedIterator for SlidingWindow<I, S>
where
    I: FusedIterator,
    S: SummaryStat<I::Item>,
{
}

pub trait SlidingWindowFilter<I, S>
where
    I: Iterator,
    S: SummaryStat<I::Item>,
{
    fn sliding_window(
        self,
        parameters: WindowParameters,
        stat: S,
    ) -> SeqStatsResult<SlidingWindow<I, S>>;
}

impl<I, S> SlidingWindowFilter<I, S> for I
where
    I: Iterator,
    I::Item: Clone,
    S: SummaryStat<I::Item>,
{
    fn sliding_window(
        self,
        parameters: WindowParameters,
        stat: S,
    ) -> SeqStatsResult<SlidingWindow<I, S>> {
        SlidingWindow::new(self, parameters, stat)
    }
}

/// Moving average over windows of `window_size`, one value per input once the
/// window is full.
pub fn sliding_window<II>(
    sequence: II,
    window_size: usize,
) -> SeqStatsResult<SlidingWindow<II::IntoIter, Mean>>
where
    II: IntoIterator,
    II::Item: AsPrimitive<Real>,
{
    SlidingWindow::new(sequence, WindowParameters::new(window_size), Mean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Median, Parameter, SeqStatsError, StandardDeviation, StatisticError, Sum,
    };
    use assert_approx_eq::assert_approx_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn mean_of(values: &[Real]) -> Real {
        values.iter().sum::<Real>() / values.len() as Real
    }

    #[test]
    fn moving_average() {
        let output: Vec<_> = sliding_window(0..9, 3).unwrap().collect();
        assert_eq!(output, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn flip_start_mirrors_first_window() {
        let input: Vec<Real> = (0..9).map(Real::from).collect();
        let parameters = WindowParameters::new(3).with_flip_start(true);
        let mut itr = input
            .iter()
            .copied()
            .sliding_window(parameters, |w: &WindowBuffer<Real>| w.to_vec())
            .unwrap();
        // Augmented input is [2,1,0,0,1,2,3,4,5,6,7,8]
        assert_eq!(itr.next(), Some(vec![2.0, 1.0, 0.0]));
        assert_eq!(itr.next(), Some(vec![1.0, 0.0, 0.0]));
        assert_eq!(itr.next(), Some(vec![0.0, 0.0, 1.0]));
        assert_eq!(itr.count(), 12 - 3 + 1 - 3);
    }

    #[test]
    fn flip_start_means() {
        let input: Vec<Real> = (0..9).map(Real::from).collect();
        let output: Vec<_> = input
            .into_iter()
            .sliding_window(WindowParameters::new(3).with_flip_start(true), Mean)
            .unwrap()
            .collect();
        assert_eq!(output.len(), 10);
        assert_approx_eq!(output[0], 1.0);
        assert_approx_eq!(output[1], 1. / 3.);
        assert_approx_eq!(output[2], 1. / 3.);
        assert_approx_eq!(output[3], 1.0);
        assert_approx_eq!(output[9], 7.0);
    }

    #[test]
    fn flip_start_with_short_input() {
        let parameters = WindowParameters::new(5).with_flip_start(true);
        let output: Vec<_> = [1, 2]
            .into_iter()
            .sliding_window(parameters, |w: &WindowBuffer<i32>| w.to_vec())
            .unwrap()
            .collect();
        // Augmented input is [2,1,1,2], never reaching five values
        assert!(output.is_empty());

        let output: Vec<_> = [1, 2]
            .into_iter()
            .sliding_window(
                parameters.with_start_output_frac(0.8),
                |w: &WindowBuffer<i32>| w.to_vec(),
            )
            .unwrap()
            .collect();
        assert_eq!(output, vec![vec![2, 1, 1, 2]]);
    }

    #[test]
    fn no_data() {
        let data: [Real; 0] = [];
        assert!(sliding_window(data, 3).unwrap().next().is_none());
    }

    #[test]
    fn insufficient_data() {
        assert!(sliding_window([4.0, 3.0], 3).unwrap().next().is_none());
    }

    #[test]
    fn invalid_parameters_consume_nothing() {
        let mut source = [1, 2, 3].into_iter();
        assert!(matches!(
            source
                .by_ref()
                .sliding_window(WindowParameters::new(0).with_flip_start(true), Mean),
            Err(SeqStatsError::InvalidParameter {
                parameter: Parameter::WindowSize,
                ..
            })
        ));
        assert_eq!(source.next(), Some(1));

        let result = sliding_window_with_interval(0);
        assert!(matches!(
            result,
            Err(SeqStatsError::InvalidParameter {
                parameter: Parameter::OutputInterval,
                ..
            })
        ));
    }

    fn sliding_window_with_interval(
        output_interval: usize,
    ) -> SeqStatsResult<SlidingWindow<std::ops::Range<i32>, Sum>> {
        SlidingWindow::new(
            0..10,
            WindowParameters::new(3).with_output_interval(output_interval),
            Sum,
        )
    }

    #[test]
    fn output_interval_strides() {
        let output: Vec<_> = sliding_window_with_interval(2).unwrap().collect();
        // Emission points are the 2nd, 4th, ... values; the 2nd is still warming up
        assert_eq!(
            output,
            vec![1. + 2. + 3., 3. + 4. + 5., 5. + 6. + 7., 7. + 8. + 9.]
        );
    }

    #[test]
    fn output_interval_longer_than_window() {
        let output: Vec<_> = sliding_window_with_interval(4).unwrap().collect();
        assert_eq!(output, vec![1. + 2. + 3., 5. + 6. + 7.]);
    }

    #[test]
    fn start_output_frac_zero_emits_immediately() {
        let output: Vec<_> = (1..=4)
            .sliding_window(WindowParameters::new(3).with_start_output_frac(0.0), Mean)
            .unwrap()
            .collect();
        assert_eq!(output, vec![1.0, 1.5, 2.0, 3.0]);
    }

    #[test]
    fn partial_warm_up() {
        let output: Vec<_> = (1..=5)
            .sliding_window(
                WindowParameters::new(4).with_start_output_frac(0.5),
                |w: &WindowBuffer<i32>| w.len(),
            )
            .unwrap()
            .collect();
        assert_eq!(output, vec![2, 3, 4, 4]);
    }

    #[test]
    fn failing_statistic_is_yielded() {
        let output: Vec<_> = [1.0, 2.0, 4.0]
            .into_iter()
            .sliding_window(
                WindowParameters::new(2).with_start_output_frac(0.0),
                StandardDeviation,
            )
            .unwrap()
            .collect();
        assert_eq!(
            output[0],
            Err(StatisticError::InsufficientData {
                statistic: "standard deviation",
                required: 2,
                found: 1
            })
        );
        assert_approx_eq!(output[1].unwrap(), Real::sqrt(0.5));
        assert_approx_eq!(output[2].unwrap(), Real::sqrt(2.0));

        let collected: Result<Vec<_>, _> = [1.0, 2.0, 4.0]
            .into_iter()
            .sliding_window(
                WindowParameters::new(2).with_start_output_frac(0.0),
                StandardDeviation,
            )
            .unwrap()
            .collect();
        assert!(collected.is_err());
    }

    #[test]
    fn lazy_consumption() {
        let mut consumed = 0;
        let source = (0..100).inspect(|_| consumed += 1);
        let first = sliding_window(source, 5).unwrap().next();
        assert_eq!(first, Some(2.0));
        assert_eq!(consumed, 5);
    }

    #[test]
    fn size_hint_bounds_remaining_output() {
        let itr = sliding_window_with_interval(3).unwrap();
        assert_eq!(itr.size_hint(), (0, Some(3)));
        let count = itr.count();
        assert!(count <= 3);
    }

    #[test]
    fn huge_window_size() {
        assert_eq!(sliding_window([1.0, 2.0, 3.0], usize::MAX).unwrap().count(), 0);
    }

    /// Yields one value, then reports a loose upper bound forever.
    struct LooseBound(Option<Real>);

    impl Iterator for LooseBound {
        type Item = Real;

        fn next(&mut self) -> Option<Real> {
            self.0.take()
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (0, Some(usize::MAX))
        }
    }

    #[test]
    fn size_hint_saturates() {
        let mut itr = LooseBound(Some(1.0))
            .sliding_window(WindowParameters::new(1).with_output_interval(2), Mean)
            .unwrap();
        assert_eq!(itr.next(), None);
        assert_eq!(itr.size_hint(), (0, Some(usize::MAX / 2)));
    }

    #[test]
    fn buffer_matches_last_values() {
        let mut itr = sliding_window(0..10, 4).unwrap();
        itr.next();
        itr.next();
        assert_eq!(itr.buffer().to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn contiguous_slices_property() {
        let mut rng = StdRng::seed_from_u64(7);
        let data: Vec<Real> = (0..500).map(|_| rng.random()).collect();

        for window_size in 1..40 {
            let output: Vec<_> = sliding_window(data.iter().copied(), window_size)
                .unwrap()
                .collect();
            assert_eq!(output.len(), data.len() - window_size + 1);
            for (value, slice) in output.iter().zip(data.windows(window_size)) {
                assert_approx_eq!(*value, mean_of(slice));
            }
        }
    }

    #[test]
    fn never_emits_below_warm_up() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let window_size = rng.random_range(1..12);
            let parameters = WindowParameters::new(window_size)
                .with_output_interval(rng.random_range(1..15))
                .with_flip_start(rng.random())
                .with_start_output_frac(rng.random_range(0.0..=1.0));
            let threshold = parameters.warm_up_threshold();
            let length = rng.random_range(0..40);
            let lengths: Vec<_> = (0..length)
                .sliding_window(parameters, |w: &WindowBuffer<i32>| w.len())
                .unwrap()
                .collect();
            assert!(lengths.iter().all(|&len| len >= threshold && len <= window_size));
        }
    }

    #[test]
    fn median_of_trace() {
        let data = [4.0, 3.0, 1.0, 5.0, 3.0];
        let output: Vec<_> = data
            .into_iter()
            .sliding_window(WindowParameters::new(3), Median)
            .unwrap()
            .collect();
        assert_eq!(output, vec![3.0, 3.0, 3.0]);
    }
}
