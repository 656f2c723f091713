use std::fmt::{Display, Formatter, Result as FmtResult};

use num::traits::AsPrimitive;
use thiserror::Error;

use super::WindowBuffer;
use crate::Real;

/// Reduces the current contents of a window to a single value.
///
/// Any `FnMut(&WindowBuffer<T>) -> O` is a summary statistic, so closures can
/// be passed wherever a built-in statistic is accepted. A statistic that can
/// fail should return a `Result` as its `Output`; the aggregator hands that
/// value to the caller untouched.
pub trait SummaryStat<T> {
    type Output;

    fn summarize(&mut self, window: &WindowBuffer<T>) -> Self::Output;
}

impl<T, O, F> SummaryStat<T> for F
where
    F: FnMut(&WindowBuffer<T>) -> O,
{
    type Output = O;

    fn summarize(&mut self, window: &WindowBuffer<T>) -> O {
        self(window)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StatisticError {
    #[error("{statistic} requires at least {required} values, window holds {found}")]
    InsufficientData {
        statistic: &'static str,
        required: usize,
        found: usize,
    },
}

fn values<T: AsPrimitive<Real>>(window: &WindowBuffer<T>) -> impl Iterator<Item = Real> + '_ {
    window.iter().map(|value| value.as_())
}

fn mean<T: AsPrimitive<Real>>(window: &WindowBuffer<T>) -> Real {
    values(window).sum::<Real>() / window.len() as Real
}

fn sample_variance<T: AsPrimitive<Real>>(window: &WindowBuffer<T>) -> Real {
    let mean = mean(window);
    values(window).map(|x| (x - mean).powi(2)).sum::<Real>() / (window.len() as Real - 1.)
}

/// Arithmetic mean. `NaN` for an empty window.
#[derive(Default, Debug, Clone, Copy)]
pub struct Mean;

impl<T: AsPrimitive<Real>> SummaryStat<T> for Mean {
    type Output = Real;

    fn summarize(&mut self, window: &WindowBuffer<T>) -> Real {
        mean(window)
    }
}

/// Middle value, or the average of the two middle values for an even count.
#[derive(Default, Debug, Clone, Copy)]
pub struct Median;

impl<T: AsPrimitive<Real>> SummaryStat<T> for Median {
    type Output = Real;

    fn summarize(&mut self, window: &WindowBuffer<T>) -> Real {
        let mut sorted: Vec<Real> = values(window).collect();
        sorted.sort_by(Real::total_cmp);
        let mid = sorted.len() / 2;
        let upper = sorted.get(mid).copied().unwrap_or(Real::NAN);
        if sorted.len() % 2 == 1 {
            upper
        } else {
            let lower = mid
                .checked_sub(1)
                .and_then(|i| sorted.get(i))
                .copied()
                .unwrap_or(Real::NAN);
            (lower + upper) / 2.
        }
    }
}

#[derive(Default, Debug, Clone, Copy)]
pub struct Sum;

impl<T: AsPrimitive<Real>> SummaryStat<T> for Sum {
    type Output = Real;

    fn summarize(&mut self, window: &WindowBuffer<T>) -> Real {
        values(window).sum()
    }
}

#[derive(Default, Debug, Clone, Copy)]
pub struct Min;

impl<T: AsPrimitive<Real>> SummaryStat<T> for Min {
    type Output = Real;

    fn summarize(&mut self, window: &WindowBuffer<T>) -> Real {
        values(window).reduce(Real::min).unwrap_or(Real::NAN)
    }
}

#[derive(Default, Debug, Clone, Copy)]
pub struct Max;

impl<T: AsPrimitive<Real>> SummaryStat<T> for Max {
    type Output = Real;

    fn summarize(&mut self, window: &WindowBuffer<T>) -> Real {
        values(window).reduce(Real::max).unwrap_or(Real::NAN)
    }
}

/// Sample variance (divisor `n - 1`). Fails on windows of fewer than two values.
#[derive(Default, Debug, Clone, Copy)]
pub struct Variance;

impl<T: AsPrimitive<Real>> SummaryStat<T> for Variance {
    type Output = Result<Real, StatisticError>;

    fn summarize(&mut self, window: &WindowBuffer<T>) -> Self::Output {
        if window.len() < 2 {
            return Err(StatisticError::InsufficientData {
                statistic: "variance",
                required: 2,
                found: window.len(),
            });
        }
        Ok(sample_variance(window))
    }
}

/// Sample standard deviation. Fails on windows of fewer than two values.
#[derive(Default, Debug, Clone, Copy)]
pub struct StandardDeviation;

impl<T: AsPrimitive<Real>> SummaryStat<T> for StandardDeviation {
    type Output = Result<Real, StatisticError>;

    fn summarize(&mut self, window: &WindowBuffer<T>) -> Self::Output {
        if window.len() < 2 {
            return Err(StatisticError::InsufficientData {
                statistic: "standard deviation",
                required: 2,
                found: window.len(),
            });
        }
        Ok(sample_variance(window).sqrt())
    }
}

/// Descriptive statistics of a window together with its newest value.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct WindowStats {
    pub latest: Real,
    pub mean: Real,
    pub variance: Real,
}

impl From<Real> for WindowStats {
    fn from(value: Real) -> Self {
        WindowStats {
            latest: value,
            mean: value,
            variance: 0.,
        }
    }
}

impl Display for WindowStats {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "({}, {}, {})", self.latest, self.mean, self.variance)
    }
}

/// Produces a `WindowStats`. A single-value window has zero variance.
#[derive(Default, Debug, Clone, Copy)]
pub struct Describe;

impl<T: AsPrimitive<Real>> SummaryStat<T> for Describe {
    type Output = WindowStats;

    fn summarize(&mut self, window: &WindowBuffer<T>) -> WindowStats {
        let latest = window.newest().map_or(Real::NAN, |value| value.as_());
        if window.len() < 2 {
            return WindowStats::from(latest);
        }
        WindowStats {
            latest,
            mean: mean(window),
            variance: sample_variance(window),
        }
    }
}
