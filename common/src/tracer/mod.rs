mod tracer_engine;

pub use tracer_engine::{LogWriter, TracerEngine, TracerError, TracerOptions};

/// Should be called at the start of each binary.
/// Expands to a call to `TracerEngine::new` with the binary and module names
/// filled in, so that the initial log line is attributed to the caller.
#[macro_export]
macro_rules! init_tracer {
    ($options:expr) => {{
        $crate::tracer::TracerEngine::new($options, env!("CARGO_BIN_NAME"), module_path!())
    }};
}
