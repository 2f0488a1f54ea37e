//! Alphametics solver.
//!
//! Each letter in `TERM + TERM + ... == RESULT` stands for a distinct digit
//! and leading letters of multi-digit terms are nonzero. The equation is
//! reduced to one signed coefficient per letter (positional weights summed
//! across terms, negated for the result), so an assignment solves the
//! puzzle exactly when the weighted digit sum is zero.

use std::collections::{HashMap, HashSet};

pub fn solve(input: &str) -> Option<HashMap<char, u8>> {
    let (lhs, rhs) = input.split_once("==")?;
    let terms: Vec<&str> = lhs
        .split('+')
        .map(str::trim)
        .chain(std::iter::once(rhs.trim()))
        .collect();
    if terms.iter().any(|t| t.is_empty() || !t.chars().all(|c| c.is_ascii_uppercase())) {
        return None;
    }

    let mut coefficients: HashMap<char, i64> = HashMap::new();
    let mut leading: HashSet<char> = HashSet::new();
    let result_index = terms.len() - 1;

    for (i, term) in terms.iter().enumerate() {
        let sign: i64 = if i == result_index { -1 } else { 1 };
        let mut weight: i64 = 1;
        for c in term.chars().rev() {
            *coefficients.entry(c).or_insert(0) += sign * weight;
            weight *= 10;
        }
        if term.len() > 1 {
            leading.insert(term.chars().next().expect("term is nonempty"));
        }
    }

    let letters: Vec<char> = coefficients.keys().copied().collect();
    if letters.len() > 10 {
        return None;
    }

    let mut assignment = vec![0u8; letters.len()];
    let mut used = [false; 10];
    if assign(
        0,
        &letters,
        &coefficients,
        &leading,
        &mut assignment,
        &mut used,
    ) {
        Some(
            letters
                .iter()
                .zip(assignment)
                .map(|(&c, d)| (c, d))
                .collect(),
        )
    } else {
        None
    }
}

fn assign(
    index: usize,
    letters: &[char],
    coefficients: &HashMap<char, i64>,
    leading: &HashSet<char>,
    assignment: &mut Vec<u8>,
    used: &mut [bool; 10],
) -> bool {
    if index == letters.len() {
        let sum: i64 = letters
            .iter()
            .zip(assignment.iter())
            .map(|(c, &d)| coefficients[c] * d as i64)
            .sum();
        return sum == 0;
    }

    let letter = letters[index];
    let min_digit = if leading.contains(&letter) { 1 } else { 0 };
    for digit in min_digit..=9u8 {
        if used[digit as usize] {
            continue;
        }
        used[digit as usize] = true;
        assignment[index] = digit;
        if assign(index + 1, letters, coefficients, leading, assignment, used) {
            return true;
        }
        used[digit as usize] = false;
    }
    false
}
