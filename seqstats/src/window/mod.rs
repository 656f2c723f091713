pub mod buffer;
pub mod iter;
pub mod parameters;
pub mod summary;

pub use buffer::WindowBuffer;
pub use iter::{SlidingWindow, SlidingWindowFilter, sliding_window};
pub use parameters::WindowParameters;
pub use summary::{
    Describe, Max, Mean, Median, Min, StandardDeviation, StatisticError, Sum, SummaryStat,
    Variance, WindowStats,
};
