//! Word frequency counting, case-insensitive, with embedded apostrophes
//! kept (contractions) but quoting apostrophes stripped.

use std::collections::HashMap;

pub fn word_count(input: &str) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for raw in input.split(|c: char| !c.is_ascii_alphanumeric() && c != '\'') {
        let word = raw.trim_matches('\'').to_ascii_lowercase();
        if !word.is_empty() {
            *counts.entry(word).or_insert(0) += 1;
        }
    }
    counts
}
