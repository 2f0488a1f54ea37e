//! Letter frequency counting fanned out across a rayon worker pool.
//!
//! Each input chunk is counted independently and the partial maps are
//! merged, so the result is identical to a sequential count.

use rayon::prelude::*;
use std::collections::HashMap;

/// Count letter frequencies across `input`, case-insensitively, splitting
/// the work into `worker_count` rayon tasks. Non-alphabetic characters are
/// ignored.
pub fn frequency(input: &[&str], worker_count: usize) -> HashMap<char, usize> {
    let worker_count = worker_count.max(1);
    let chunk_size = input.len().div_ceil(worker_count).max(1);

    input
        .par_chunks(chunk_size)
        .map(count_chunk)
        .reduce(HashMap::new, |mut acc, partial| {
            for (letter, count) in partial {
                *acc.entry(letter).or_insert(0) += count;
            }
            acc
        })
}

fn count_chunk(lines: &[&str]) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for line in lines {
        for c in line.chars().filter(|c| c.is_alphabetic()) {
            for lower in c.to_lowercase() {
                *counts.entry(lower).or_insert(0) += 1;
            }
        }
    }
    counts
}
