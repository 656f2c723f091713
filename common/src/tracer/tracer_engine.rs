use clap::{Args, ValueEnum};
use thiserror::Error;
use tracing::{debug, subscriber::SetGlobalDefaultError};
use tracing_subscriber::{
    EnvFilter, Layer, filter::ParseError, fmt::MakeWriter, layer::SubscriberExt,
};

use crate::DEFAULT_LOG_DIRECTIVE;

#[derive(Debug, Error)]
pub enum TracerError {
    #[error("Invalid log directive: {0}")]
    Directive(#[from] ParseError),
    #[error("Tracer already initialised: {0}")]
    AlreadyInitialised(#[from] SetGlobalDefaultError),
}

/// Where formatted log lines are written.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogWriter {
    Stdout,
    #[default]
    Stderr,
}

/// Command line options controlling the tracer, intended to be flattened
/// into a binary's `Cli` struct.
#[derive(Debug, Clone, Args)]
pub struct TracerOptions {
    /// Filter directive used when `RUST_LOG` is not set, e.g. `debug` or `seqstats=trace`.
    #[clap(long, default_value = DEFAULT_LOG_DIRECTIVE)]
    pub log_directive: String,

    /// Stream receiving log lines. Defaults to stderr so that stdout stays free for data.
    #[clap(long, value_enum, default_value_t)]
    pub log_writer: LogWriter,
}

impl Default for TracerOptions {
    fn default() -> Self {
        Self {
            log_directive: DEFAULT_LOG_DIRECTIVE.to_owned(),
            log_writer: LogWriter::default(),
        }
    }
}

/// This object initialises the global tracing subscriber, given a
/// TracerOptions struct.
pub struct TracerEngine {
    service_name: String,
}

impl TracerEngine {
    /// Initialises the formatted tracer for the crate
    /// #Arguments
    /// * `options` - The caller-specified instance of TracerOptions.
    /// * `service_name` - The name of the binary installing the tracer.
    /// * `module_name` - The name of the current module.
    /// #Returns
    /// An instance of TracerEngine, or an error if the filter directive is
    /// malformed or a global subscriber has already been installed.
    pub fn new(
        options: TracerOptions,
        service_name: &str,
        module_name: &str,
    ) -> Result<Self, TracerError> {
        let log_filter =
            build_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok(), &options.log_directive)?;

        match options.log_writer {
            LogWriter::Stdout => install(std::io::stdout, log_filter)?,
            LogWriter::Stderr => install(std::io::stderr, log_filter)?,
        }

        debug!(service_name, module_name, "Tracer initialised");
        Ok(Self {
            service_name: service_name.to_owned(),
        })
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

/// A set environment directive takes precedence and must parse; the
/// fallback directive is used only when the variable is unset.
fn build_filter(
    env_directive: Option<String>,
    fallback_directive: &str,
) -> Result<EnvFilter, TracerError> {
    let filter = match env_directive {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_new(fallback_directive)?,
    };
    Ok(filter)
}

fn install<W>(writer: W, log_filter: EnvFilter) -> Result<(), SetGlobalDefaultError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(writer);
    let subscriber =
        tracing_subscriber::Registry::default().with(fmt_layer.with_filter(log_filter));
    tracing::subscriber::set_global_default(subscriber)
}
