use std::str::FromStr;

use anyhow::{Error, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use seqstats::{
    Max, Mean, Median, Min, Real, StandardDeviation, StatisticError, Sum, SummaryStat, Variance,
    WindowBuffer, WindowParameters,
};

/// Comma separated list of values, e.g. `3,1.5,-2`.
#[derive(Default, Debug, Clone)]
pub(crate) struct ValueList(pub(crate) Vec<Real>);

impl FromStr for ValueList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(|val| {
                Real::from_str(val.trim())
                    .map_err(|e| anyhow!("Invalid value '{val}' in list '{s}': {e}"))
            })
            .collect::<Result<_, _>>()
            .map(ValueList)
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, ValueEnum, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub(crate) enum StatKind {
    #[default]
    Mean,
    Median,
    Variance,
    StdDev,
    Min,
    Max,
    Sum,
}

impl StatKind {
    pub(crate) fn summarize(self, window: &WindowBuffer<Real>) -> Result<Real, StatisticError> {
        match self {
            StatKind::Mean => Ok(Mean.summarize(window)),
            StatKind::Median => Ok(Median.summarize(window)),
            StatKind::Variance => Variance.summarize(window),
            StatKind::StdDev => StandardDeviation.summarize(window),
            StatKind::Min => Ok(Min.summarize(window)),
            StatKind::Max => Ok(Max.summarize(window)),
            StatKind::Sum => Ok(Sum.summarize(window)),
        }
    }
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct WindowDemoParameters {
    /// Number of points of the noisy sine wave.
    #[clap(long, default_value = "10000")]
    pub(crate) samples: usize,

    #[clap(long, default_value = "10")]
    pub(crate) window_size: usize,

    #[clap(long, default_value = "1")]
    pub(crate) output_interval: usize,

    /// Prime the window with a mirror image of the first values.
    #[clap(long)]
    pub(crate) flip_start: bool,

    #[clap(long, default_value = "1.0")]
    pub(crate) start_output_frac: Real,

    #[clap(long, value_enum, default_value_t)]
    pub(crate) stat: StatKind,

    /// Standard deviation of the gaussian noise added to the sine wave.
    #[clap(long, default_value = "0.3")]
    pub(crate) noise: Real,
}

impl WindowDemoParameters {
    pub(crate) fn window_parameters(&self) -> WindowParameters {
        WindowParameters::new(self.window_size)
            .with_output_interval(self.output_interval)
            .with_flip_start(self.flip_start)
            .with_start_output_frac(self.start_output_frac)
    }
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct RankDemoParameters {
    /// Number of uniform values to draw when no explicit values are given.
    #[clap(long, default_value = "1000")]
    pub(crate) count: usize,

    /// Number of smallest values to keep.
    #[clap(long, default_value = "5")]
    pub(crate) keep: usize,

    /// Explicit values, in insertion order, e.g. `10,3,7,1`.
    #[clap(long)]
    pub(crate) values: Option<ValueList>,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct SitesDemoParameters {
    #[clap(long, default_value = "60")]
    pub(crate) length: usize,

    /// Print the reverse complement instead, still numbered from 1.
    #[clap(long)]
    pub(crate) reverse_complement: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Mode {
    #[clap(about = "Smooths a noisy sine wave with a sliding window. Prints x,y pairs as CSV.")]
    Window(WindowDemoParameters),
    #[clap(about = "Keeps the smallest values of a stream in a bounded rank list.")]
    Rank(RankDemoParameters),
    #[clap(about = "Prints a random DNA sequence with its positions written vertically.")]
    Sites(SitesDemoParameters),
}
