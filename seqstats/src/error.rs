use rand::distr::weighted::Error as WeightError;
use thiserror::Error;

pub type SeqStatsResult<T> = Result<T, SeqStatsError>;

/// Names the argument rejected by an `InvalidParameter` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Parameter {
    #[strum(to_string = "window_size")]
    WindowSize,
    #[strum(to_string = "output_interval")]
    OutputInterval,
    #[strum(to_string = "start_output_frac")]
    StartOutputFrac,
    #[strum(to_string = "maxlen")]
    MaxLen,
    #[strum(to_string = "sample size")]
    SampleSize,
    #[strum(to_string = "chunk size")]
    ChunkSize,
}

/// The operation that was attempting to order values when a comparison failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum OrderingContext {
    #[strum(to_string = "RankList::add")]
    RankListAdd,
    #[strum(to_string = "order")]
    Order,
    #[strum(to_string = "sort_by_value")]
    SortByValue,
}

#[derive(Debug, Error)]
pub enum SeqStatsError {
    #[error("Invalid {parameter}: {reason}")]
    InvalidParameter {
        parameter: Parameter,
        reason: String,
    },
    #[error("Values are not mutually orderable in {0}")]
    Comparison(OrderingContext),
    #[error("Invalid sampling weights: {0}")]
    Sampling(#[from] WeightError),
    #[error("Binomial coefficient C({n}, {k}) does not fit in 64 bits")]
    Overflow { n: u64, k: u64 },
}

impl SeqStatsError {
    pub(crate) fn invalid(parameter: Parameter, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}
