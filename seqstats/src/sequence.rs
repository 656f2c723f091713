use std::slice::Chunks;

use crate::{Parameter, SeqStatsError, SeqStatsResult};

fn complement(base: char) -> char {
    match base {
        'A' => 'T',
        'C' => 'G',
        'G' => 'C',
        'T' => 'A',
        'a' => 't',
        'c' => 'g',
        'g' => 'c',
        't' => 'a',
        other => other,
    }
}

/// Reverse complement of a DNA sequence. Only `ACGT` (either case) are
/// complemented; any other character is carried over unchanged.
pub fn reverse_complement(sequence: &str) -> String {
    sequence.chars().rev().map(complement).collect()
}

pub fn flatten<T, Outer, Inner>(nested: Outer) -> Vec<T>
where
    Outer: IntoIterator<Item = Inner>,
    Inner: IntoIterator<Item = T>,
{
    nested.into_iter().flatten().collect()
}

/// Consecutive `size`-long slices of `items`; the last one may be shorter.
pub fn chunks<T>(items: &[T], size: usize) -> SeqStatsResult<Chunks<'_, T>> {
    if size == 0 {
        return Err(SeqStatsError::invalid(
            Parameter::ChunkSize,
            "must be positive",
        ));
    }
    Ok(items.chunks(size))
}

/// Lays out residues on one line with their positions written vertically
/// beneath, one line per digit place:
/// ```text
/// ATG
/// 111
///  00
///   0
/// ```
/// for the sites `[('A', 1), ('T', 10), ('G', 100)]`.
pub fn format_sites_with_positions(sites: &[(char, usize)]) -> String {
    if sites.is_empty() {
        return String::new();
    }
    let residues: String = sites.iter().map(|(residue, _)| *residue).collect();
    let positions: Vec<Vec<char>> = sites
        .iter()
        .map(|(_, position)| position.to_string().chars().collect())
        .collect();
    let max_digits = positions.iter().map(Vec::len).max().unwrap_or_default();

    let mut lines = vec![residues];
    lines.extend((0..max_digits).map(|place| {
        positions
            .iter()
            .map(|digits| digits.get(place).copied().unwrap_or(' '))
            .collect::<String>()
    }));
    lines.join("\n")
}
