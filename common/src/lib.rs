pub mod tracer;

/// Directive applied to the log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";
