//! Classify a tic-tac-toe board: ongoing, drawn, or won — or reject boards
//! that could never arise in a legal game.
//!
//! X always moves first, so the X count is equal to or one greater than the
//! O count, and nobody moves once the game is won.

#[derive(Debug, PartialEq, Eq)]
pub enum GameState {
    Ongoing,
    Draw,
    Win(char),
}

#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// The mark counts are impossible under alternating turns.
    InvalidTurnOrder,
    /// Moves were made after the game was already decided.
    PlayAfterWin,
    /// A cell holds something other than 'X', 'O', or ' '.
    InvalidCharacter(char),
}

pub fn analyze(board: &[&str; 3]) -> Result<GameState, BoardError> {
    let mut cells = [[' '; 3]; 3];
    for (r, row) in board.iter().enumerate() {
        for (c, ch) in row.chars().enumerate().take(3) {
            match ch {
                'X' | 'O' | ' ' => cells[r][c] = ch,
                other => return Err(BoardError::InvalidCharacter(other)),
            }
        }
    }

    let count = |mark: char| {
        cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == mark)
            .count()
    };
    let xs = count('X');
    let os = count('O');
    if xs < os || xs > os + 1 {
        return Err(BoardError::InvalidTurnOrder);
    }

    let x_wins = has_line(&cells, 'X');
    let o_wins = has_line(&cells, 'O');
    match (x_wins, o_wins) {
        (true, true) => Err(BoardError::PlayAfterWin),
        // X winning means X just moved, so X must be one ahead
        (true, false) if xs == os => Err(BoardError::PlayAfterWin),
        (false, true) if xs > os => Err(BoardError::PlayAfterWin),
        (true, false) => Ok(GameState::Win('X')),
        (false, true) => Ok(GameState::Win('O')),
        (false, false) if xs + os == 9 => Ok(GameState::Draw),
        (false, false) => Ok(GameState::Ongoing),
    }
}

fn has_line(cells: &[[char; 3]; 3], mark: char) -> bool {
    let lines: [[(usize, usize); 3]; 8] = [
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(0, 0), (1, 1), (2, 2)],
        [(0, 2), (1, 1), (2, 0)],
    ];
    lines
        .iter()
        .any(|line| line.iter().all(|&(r, c)| cells[r][c] == mark))
}
