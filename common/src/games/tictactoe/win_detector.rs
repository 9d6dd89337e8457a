use super::board::Board;
use super::types::{Mark, Outcome, WIN_LINES};

pub fn check_win_with_line(board: &Board) -> Option<(Mark, [usize; 3])> {
    let cells = board.cells();
    WIN_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            Some((mark, line))
        } else {
            None
        }
    })
}

pub fn is_winner(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    let cells = board.cells();
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&index| cells[index] == mark))
}

pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some((mark, line)) = check_win_with_line(board) {
        return Outcome::Win { mark, line };
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Lowest empty cell where placing `mark` completes a line. Placement here is
/// hypothetical and does not evict.
pub fn find_immediate_win(board: &Board, mark: Mark) -> Option<usize> {
    if mark == Mark::Empty {
        return None;
    }

    let mut scratch = *board;
    for cell in 0..scratch.cells().len() {
        if !scratch.is_empty_cell(cell) {
            continue;
        }
        scratch.set(cell, mark);
        let wins = is_winner(&scratch, mark);
        scratch.clear(cell);

        if wins {
            return Some(cell);
        }
    }
    None
}
