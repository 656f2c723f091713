use std::io::Write;

use anyhow::Result;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use seqstats::{
    Mean, RankList, Real, SlidingWindowFilter, WindowBuffer,
    sampling::sample,
    sequence::{format_sites_with_positions, reverse_complement},
};
use tracing::info;

use crate::parameters::{
    RankDemoParameters, SitesDemoParameters, ValueList, WindowDemoParameters,
};

const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Smooths `sin(x) + noise` and writes one `x,y` line per window emission.
/// The x coordinate is the mean position of the window.
pub(crate) fn smooth_sine<R, W>(
    parameters: &WindowDemoParameters,
    rng: &mut R,
    out: &mut W,
) -> Result<usize>
where
    R: Rng + ?Sized,
    W: Write,
{
    let noise = Normal::new(0.0, parameters.noise)?;
    let positions: Vec<Real> = (0..parameters.samples).map(|i| i as Real / 100.).collect();
    let trace: Vec<Real> = positions
        .iter()
        .map(|x| x.sin() + noise.sample(rng))
        .collect();

    let window_parameters = parameters.window_parameters();
    let stat = parameters.stat;
    let centres = positions
        .into_iter()
        .sliding_window(window_parameters, Mean)?;
    let values = trace
        .into_iter()
        .sliding_window(window_parameters, |window: &WindowBuffer<Real>| {
            stat.summarize(window)
        })?;

    let mut emitted = 0;
    for (x, y) in centres.zip(values) {
        writeln!(out, "{x},{}", y?)?;
        emitted += 1;
    }
    info!(emitted, %stat, "Sliding window complete");
    Ok(emitted)
}

/// Feeds values into a `RankList` and writes the survivors, one per line.
pub(crate) fn keep_smallest<R, W>(
    parameters: &RankDemoParameters,
    rng: &mut R,
    out: &mut W,
) -> Result<Vec<Real>>
where
    R: Rng + ?Sized,
    W: Write,
{
    let values = match &parameters.values {
        Some(ValueList(values)) => values.clone(),
        None => (0..parameters.count).map(|_| rng.random()).collect(),
    };
    let mut smallest = RankList::new(parameters.keep)?;
    smallest.try_extend(values.iter().copied())?;
    for value in &smallest {
        writeln!(out, "{value}")?;
    }
    info!(
        added = values.len(),
        kept = smallest.len(),
        "Rank list complete"
    );
    Ok(smallest.into_vec())
}

/// Writes a random DNA sequence above its vertically printed positions.
pub(crate) fn print_sites<R, W>(
    parameters: &SitesDemoParameters,
    rng: &mut R,
    out: &mut W,
) -> Result<String>
where
    R: Rng + ?Sized,
    W: Write,
{
    let mut sequence: String = sample(&BASES, parameters.length, true, rng)?
        .into_iter()
        .collect();
    if parameters.reverse_complement {
        sequence = reverse_complement(&sequence);
    }
    let sites: Vec<_> = sequence.chars().zip(1..).collect();
    let layout = format_sites_with_positions(&sites);
    writeln!(out, "{layout}")?;
    info!(length = sequence.len(), "Sites printed");
    Ok(sequence)
}
