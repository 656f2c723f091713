use tracing::debug;

use crate::{Parameter, Real, SeqStatsError, SeqStatsResult};

/// Controls how a `SlidingWindow` consumes its input and when it emits.
///
/// * `window_size` - number of most recent values held in the window.
/// * `output_interval` - number of values consumed between two emissions.
///   It may exceed `window_size`.
/// * `flip_start` - prepend a mirror image of the first `window_size` values,
///   so that the window is full from the start of the real input.
/// * `start_output_frac` - fraction of `window_size` the window must hold
///   before anything is emitted. Must lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowParameters {
    pub window_size: usize,
    pub output_interval: usize,
    pub flip_start: bool,
    pub start_output_frac: Real,
}

impl WindowParameters {
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            output_interval: 1,
            flip_start: false,
            start_output_frac: 1.0,
        }
    }

    pub fn with_output_interval(self, output_interval: usize) -> Self {
        Self {
            output_interval,
            ..self
        }
    }

    pub fn with_flip_start(self, flip_start: bool) -> Self {
        Self { flip_start, ..self }
    }

    pub fn with_start_output_frac(self, start_output_frac: Real) -> Self {
        Self {
            start_output_frac,
            ..self
        }
    }

    pub fn validate(&self) -> SeqStatsResult<()> {
        if self.window_size == 0 {
            return Err(SeqStatsError::invalid(
                Parameter::WindowSize,
                "must be positive",
            ));
        }
        if self.output_interval == 0 {
            return Err(SeqStatsError::invalid(
                Parameter::OutputInterval,
                "must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.start_output_frac) {
            return Err(SeqStatsError::invalid(
                Parameter::StartOutputFrac,
                format!("{} is outside [0, 1]", self.start_output_frac),
            ));
        }
        debug!(
            window_size = self.window_size,
            output_interval = self.output_interval,
            flip_start = self.flip_start,
            start_output_frac = self.start_output_frac,
            "Window parameters accepted"
        );
        Ok(())
    }

    /// The minimum number of buffered values before any emission, i.e.
    /// `ceil(window_size * start_output_frac)`.
    pub fn warm_up_threshold(&self) -> usize {
        (self.window_size as Real * self.start_output_frac).ceil() as usize
    }
}
