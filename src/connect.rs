//! Winner detection for the Hex board game.
//!
//! `X` wins by connecting the left and right edges, `O` the top and bottom.
//! The board arrives as rows of space-separated cells, each row indented one
//! further than the last to suggest the hex skew; parsing just drops the
//! whitespace. Connectivity is a flood fill over the six hex neighbors.

use std::collections::VecDeque;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Winner {
    X,
    O,
}

pub fn winner(board: &[&str]) -> Option<Winner> {
    let grid: Vec<Vec<char>> = board
        .iter()
        .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect())
        .collect();
    if grid.is_empty() || grid[0].is_empty() {
        return None;
    }

    if wins(&grid, 'X') {
        Some(Winner::X)
    } else if wins(&grid, 'O') {
        Some(Winner::O)
    } else {
        None
    }
}

/// Flood from the player's starting edge and see if the far edge is reached.
/// X flows left to right, O top to bottom.
fn wins(grid: &[Vec<char>], player: char) -> bool {
    let rows = grid.len();
    let cols = grid[0].len();

    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    let mut seen = vec![vec![false; cols]; rows];

    let seeds: Vec<(usize, usize)> = if player == 'X' {
        (0..rows).map(|r| (r, 0)).collect()
    } else {
        (0..cols).map(|c| (0, c)).collect()
    };
    for (r, c) in seeds {
        if grid[r][c] == player {
            seen[r][c] = true;
            queue.push_back((r, c));
        }
    }

    while let Some((r, c)) = queue.pop_front() {
        let at_goal = if player == 'X' { c == cols - 1 } else { r == rows - 1 };
        if at_goal {
            return true;
        }

        let neighbors = [
            (r as isize, c as isize - 1),
            (r as isize, c as isize + 1),
            (r as isize - 1, c as isize),
            (r as isize - 1, c as isize + 1),
            (r as isize + 1, c as isize - 1),
            (r as isize + 1, c as isize),
        ];
        for (nr, nc) in neighbors {
            if nr < 0 || nc < 0 || nr as usize >= rows || nc as usize >= cols {
                continue;
            }
            let (nr, nc) = (nr as usize, nc as usize);
            if !seen[nr][nc] && grid[nr][nc] == player {
                seen[nr][nc] = true;
                queue.push_back((nr, nc));
            }
        }
    }
    false
}
