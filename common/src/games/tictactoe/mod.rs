mod board;
mod bot_controller;
mod game_state;
mod placement_queue;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{
    BotDecision, BotInput, BotMove, DecisionSource, calculate_move, select_ai_move, suggest_hint,
};
pub use game_state::{MatchSnapshot, MatchState, MoveReport};
pub use placement_queue::PlacementQueue;
pub use types::{CELL_COUNT, Difficulty, IllegalMove, MAX_PIECES, Mark, Outcome, WIN_LINES};
pub use win_detector::{check_win_with_line, evaluate_outcome, find_immediate_win, is_winner};
