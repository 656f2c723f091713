//! This crate provides helpers for ad-hoc statistical work over sequential
//! data. Its two central pieces are a streaming sliding-window aggregator and
//! a bounded online rank structure.
//!
//! The aggregator is an iterator adapter. Typical usage may look like:
//! ```rust
//! use seqstats::{Median, SlidingWindowFilter, WindowParameters};
//!
//! let trace = [4.0, 3.0, 1.0, 5.0, 3.0, 7.0];
//! let medians = trace
//!     .into_iter()
//!     .sliding_window(                                    // A window of the 3 most recent values,
//!         WindowParameters::new(3).with_output_interval(2), // emitting every second value consumed
//!         Median,
//!     )?
//!     .collect::<Vec<_>>();
//! assert_eq!(medians, vec![3.0, 5.0]);
//! # Ok::<(), seqstats::SeqStatsError>(())
//! ```
//!
//! The rank list keeps the `maxlen` smallest values seen so far:
//! ```rust
//! use seqstats::RankList;
//!
//! let mut smallest = RankList::new(3)?;
//! smallest.try_extend([10, 3, 7, 1])?;
//! assert_eq!(smallest.elements(), &[1, 3, 7]);
//! # Ok::<(), seqstats::SeqStatsError>(())
//! ```

pub mod combinatorics;
pub mod counting;
pub mod error;
pub mod rank_list;
pub mod ranking;
pub mod sampling;
pub mod sequence;
pub mod window;

pub use error::{OrderingContext, Parameter, SeqStatsError, SeqStatsResult};
pub use rank_list::RankList;
pub use window::{
    Describe, Max, Mean, Median, Min, SlidingWindow, SlidingWindowFilter, StandardDeviation,
    StatisticError, Sum, SummaryStat, Variance, WindowBuffer, WindowParameters, WindowStats,
    sliding_window,
};

pub type Real = f64;
