//! Word search: locate words in a letter grid along any of the eight
//! straight directions, reporting 1-based (column, row) endpoints.

use std::collections::HashMap;

pub type Position = (usize, usize);

const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// For every word, the start and end coordinates of its first occurrence
/// (scanning rows top-down, cells left-right, directions in fixed order),
/// or `None` when absent.
pub fn find_words(
    grid: &[&str],
    words: &[&str],
) -> HashMap<String, Option<(Position, Position)>> {
    let cells: Vec<Vec<char>> = grid.iter().map(|row| row.chars().collect()).collect();
    words
        .iter()
        .map(|&word| (word.to_string(), find_word(&cells, word)))
        .collect()
}

fn find_word(cells: &[Vec<char>], word: &str) -> Option<(Position, Position)> {
    let letters: Vec<char> = word.chars().collect();
    if letters.is_empty() {
        return None;
    }

    for (row, line) in cells.iter().enumerate() {
        for col in 0..line.len() {
            for (dx, dy) in DIRECTIONS {
                if let Some(end) = matches_from(cells, &letters, row, col, dx, dy) {
                    return Some(((col + 1, row + 1), (end.0 + 1, end.1 + 1)));
                }
            }
        }
    }
    None
}

/// Walk from `(row, col)` in direction `(dx, dy)`; on a full match return
/// the (col, row) of the final letter.
fn matches_from(
    cells: &[Vec<char>],
    letters: &[char],
    row: usize,
    col: usize,
    dx: isize,
    dy: isize,
) -> Option<(usize, usize)> {
    let mut r = row as isize;
    let mut c = col as isize;
    for (i, &letter) in letters.iter().enumerate() {
        if r < 0 || c < 0 {
            return None;
        }
        let (ru, cu) = (r as usize, c as usize);
        if ru >= cells.len() || cu >= cells[ru].len() || cells[ru][cu] != letter {
            return None;
        }
        if i + 1 < letters.len() {
            r += dy;
            c += dx;
        }
    }
    Some((c as usize, r as usize))
}
