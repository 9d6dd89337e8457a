use super::board::Board;
use super::placement_queue::PlacementQueue;
use super::types::{CELL_COUNT, IllegalMove, Mark, Outcome};
use super::win_detector::evaluate_outcome;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchSnapshot {
    pub board: Board,
    pub x_queue: Vec<usize>,
    pub o_queue: Vec<usize>,
    pub current_mark: Mark,
    pub outcome: Outcome,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub cell: usize,
    pub mark: Mark,
    pub evicted: Option<usize>,
    pub snapshot: MatchSnapshot,
}

/// One match of sliding tic-tac-toe. Every mutation goes through
/// [`MatchState::apply_move`] or [`MatchState::reset`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchState {
    board: Board,
    x_queue: PlacementQueue,
    o_queue: PlacementQueue,
    current_mark: Mark,
    outcome: Outcome,
    last_move: Option<usize>,
    last_evicted: Option<usize>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            x_queue: PlacementQueue::new(),
            o_queue: PlacementQueue::new(),
            current_mark: Mark::X,
            outcome: Outcome::InProgress,
            last_move: None,
            last_evicted: None,
        }
    }

    /// Starts from an arbitrary board. Queues stay empty, so the board need
    /// not be reachable through play.
    pub fn from_board(board: Board, current_mark: Mark) -> Self {
        Self {
            board,
            current_mark,
            outcome: evaluate_outcome(&board),
            ..Self::new()
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn queue(&self, mark: Mark) -> Option<&PlacementQueue> {
        match mark {
            Mark::X => Some(&self.x_queue),
            Mark::O => Some(&self.o_queue),
            Mark::Empty => None,
        }
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn last_evicted(&self) -> Option<usize> {
        self.last_evicted
    }

    pub fn apply_move(&mut self, cell: usize) -> Result<MoveReport, IllegalMove> {
        if self.outcome.is_terminal() {
            return Err(IllegalMove::GameOver);
        }

        if cell >= CELL_COUNT {
            return Err(IllegalMove::OutOfBounds(cell));
        }

        if !self.board.is_empty_cell(cell) {
            return Err(IllegalMove::CellOccupied(cell));
        }

        let mark = self.current_mark;
        let queue = match mark {
            Mark::X => &mut self.x_queue,
            Mark::O => &mut self.o_queue,
            Mark::Empty => return Err(IllegalMove::GameOver),
        };

        self.board.set(cell, mark);
        let evicted = queue.push(cell);
        if let Some(old_cell) = evicted {
            self.board.clear(old_cell);
        }

        self.last_move = Some(cell);
        self.last_evicted = evicted;
        self.outcome = evaluate_outcome(&self.board);

        if !self.outcome.is_terminal() {
            self.switch_turn();
        }

        Ok(MoveReport {
            cell,
            mark,
            evicted,
            snapshot: self.snapshot(),
        })
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            board: self.board,
            x_queue: self.x_queue.to_vec(),
            o_queue: self.o_queue.to_vec(),
            current_mark: self.current_mark,
            outcome: self.outcome,
        }
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;
    use crate::games::tictactoe::board::get_available_moves;

    fn play(state: &mut MatchState, cells: &[usize]) {
        for &cell in cells {
            state.apply_move(cell).unwrap();
        }
    }

    #[test]
    fn test_new_match_starts_with_x() {
        let state = MatchState::new();
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert!(state.queue(Mark::X).unwrap().is_empty());
        assert!(state.queue(Mark::O).unwrap().is_empty());
    }

    #[test]
    fn test_top_row_win() {
        let mut state = MatchState::new();
        play(&mut state, &[0, 4, 1, 5]);
        let report = state.apply_move(2).unwrap();

        assert_eq!(
            report.snapshot.outcome,
            Outcome::Win { mark: Mark::X, line: [0, 1, 2] }
        );
        assert_eq!(report.snapshot.x_queue, vec![0, 1, 2]);
        assert_eq!(report.snapshot.o_queue, vec![4, 5]);
        assert_eq!(report.evicted, None);
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_fourth_piece_evicts_oldest() {
        let mut state = MatchState::new();
        // X: 0, 1, 5  O: 4, 8, 6
        play(&mut state, &[0, 4, 1, 8, 5, 6]);
        let report = state.apply_move(3).unwrap();

        assert_eq!(report.evicted, Some(0));
        assert_eq!(report.snapshot.x_queue, vec![1, 5, 3]);
        assert_eq!(state.board().get(0), Some(Mark::Empty));
        assert_eq!(state.board().get(3), Some(Mark::X));
        assert_eq!(report.snapshot.outcome, Outcome::InProgress);
        assert_eq!(state.current_mark(), Mark::O);
    }

    #[test]
    fn test_eviction_happens_before_win_check() {
        let mut state = MatchState::new();
        // X holds 3, 0, 1; O holds 4, 5, 8
        play(&mut state, &[3, 4, 0, 5, 1, 8]);
        // 2 would complete the top row, but 3 leaves first; the line holds.
        let report = state.apply_move(2).unwrap();
        assert_eq!(report.evicted, Some(3));
        assert_eq!(
            report.snapshot.outcome,
            Outcome::Win { mark: Mark::X, line: [0, 1, 2] }
        );

        let mut state = MatchState::new();
        // X holds 0, 1, 6; O holds 4, 5, 8
        play(&mut state, &[0, 4, 1, 5, 6, 8]);
        // 2 evicts 0, so the top row is broken.
        let report = state.apply_move(2).unwrap();
        assert_eq!(report.evicted, Some(0));
        assert_eq!(report.snapshot.outcome, Outcome::InProgress);
        assert_eq!(report.snapshot.x_queue, vec![1, 6, 2]);
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_change() {
        let mut state = MatchState::new();
        play(&mut state, &[4]);
        let before = state.clone();

        assert_eq!(state.apply_move(4), Err(IllegalMove::CellOccupied(4)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut state = MatchState::new();
        let before = state.clone();
        assert_eq!(state.apply_move(9), Err(IllegalMove::OutOfBounds(9)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_terminal_match_rejects_moves_until_reset() {
        let mut state = MatchState::new();
        play(&mut state, &[0, 4, 1, 5, 2]);
        let before = state.clone();

        assert_eq!(state.apply_move(8), Err(IllegalMove::GameOver));
        assert_eq!(state, before);

        state.reset();
        assert_eq!(state, MatchState::new());
        assert!(state.apply_move(8).is_ok());
    }

    #[test]
    fn test_turn_alternates() {
        let mut state = MatchState::new();
        let mut expected = Mark::X;
        for cell in [0, 4, 8, 2, 6, 3] {
            assert_eq!(state.current_mark(), expected);
            let report = state.apply_move(cell).unwrap();
            assert_eq!(report.mark, expected);
            expected = expected.opponent().unwrap();
        }
    }

    #[test]
    fn test_injected_full_board_is_draw() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            Mark::X, Mark::O, Mark::X,
            Mark::X, Mark::O, Mark::O,
            Mark::O, Mark::X, Mark::X,
        ]);
        let mut state = MatchState::from_board(board, Mark::X);
        assert_eq!(state.outcome(), Outcome::Draw);
        assert_eq!(state.apply_move(0), Err(IllegalMove::GameOver));
    }

    #[test]
    fn test_random_playouts_keep_invariants() {
        let mut rng = SessionRng::new(7);
        for _ in 0..200 {
            let mut state = MatchState::new();
            for _ in 0..60 {
                if state.is_over() {
                    break;
                }
                let moves = get_available_moves(state.board());
                let cell = moves[rng.random_range(0..moves.len())];
                let mover = state.current_mark();
                let before_len = state.queue(mover).unwrap().len();
                let oldest = state.queue(mover).unwrap().oldest();

                let report = state.apply_move(cell).unwrap();

                let x_queue = state.queue(Mark::X).unwrap();
                let o_queue = state.queue(Mark::O).unwrap();
                assert!(x_queue.len() <= 3 && o_queue.len() <= 3);
                if before_len == 3 {
                    assert_eq!(report.evicted, oldest);
                    assert_eq!(state.board().get(oldest.unwrap()), Some(Mark::Empty));
                } else {
                    assert_eq!(report.evicted, None);
                }

                for index in 0..CELL_COUNT {
                    let expected = if x_queue.contains(index) {
                        Mark::X
                    } else if o_queue.contains(index) {
                        Mark::O
                    } else {
                        Mark::Empty
                    };
                    assert_eq!(state.board().get(index), Some(expected));
                }

                if state.is_over() {
                    assert_eq!(state.current_mark(), mover);
                } else {
                    assert_eq!(state.current_mark(), mover.opponent().unwrap());
                }
            }
        }
    }
}
