mod parameters;
mod processing;

use anyhow::Result;
use clap::Parser;
use parameters::Mode;
use rand::{SeedableRng, rngs::StdRng};
use seqstats_common::{init_tracer, tracer::TracerOptions};
use std::io::{BufWriter, Write};
use tracing::info;

// cargo run --bin seqstats-demo -- --seed 1 window --window-size 10 --stat median > smoothed.csv

// cargo run --bin seqstats-demo -- rank --keep 3 --values 10,3,7,1

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Seed for the random number generator. A fresh seed is drawn when omitted.
    #[clap(long)]
    seed: Option<u64>,

    #[clap(flatten)]
    tracer_options: TracerOptions,

    #[command(subcommand)]
    mode: Mode,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let tracer = init_tracer!(args.tracer_options.clone())?;

    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    info!(service = tracer.service_name(), seed, "Starting");
    let mut rng = StdRng::seed_from_u64(seed);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match &args.mode {
        Mode::Window(parameters) => {
            processing::smooth_sine(parameters, &mut rng, &mut out)?;
        }
        Mode::Rank(parameters) => {
            processing::keep_smallest(parameters, &mut rng, &mut out)?;
        }
        Mode::Sites(parameters) => {
            processing::print_sites(parameters, &mut rng, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}
