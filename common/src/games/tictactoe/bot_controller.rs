use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::game_state::{MatchState, MoveReport};
use super::types::{Difficulty, IllegalMove, Mark};
use super::win_detector::{find_immediate_win, is_winner};

/// Probability that the random policy hands the decision to the smart one.
const SMART_DEFER_CHANCE: f64 = 0.2;
const SEARCH_DEPTH: i32 = 2;
const WIN_SCORE: f64 = 10.0;
const BLEND_WEIGHT: f64 = 0.5;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &MatchState) -> Self {
        Self {
            board: *state.board(),
            current_mark: state.current_mark(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionSource {
    Random,
    Winning,
    Blocking,
    Search,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BotDecision {
    pub cell: usize,
    pub source: DecisionSource,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotMove {
    pub decision: BotDecision,
    pub report: MoveReport,
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<BotDecision> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Normal | Difficulty::Hard => calculate_smart_move(input, rng),
        Difficulty::Hell => calculate_search_move(input, rng),
    }
}

/// Picks a cell for the side to move and plays it.
pub fn select_ai_move(
    state: &mut MatchState,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<BotMove, IllegalMove> {
    if state.is_over() {
        return Err(IllegalMove::GameOver);
    }

    let input = BotInput::from_game_state(state);
    let decision = calculate_move(difficulty, &input, rng).ok_or(IllegalMove::NoMoveAvailable)?;
    let report = state.apply_move(decision.cell)?;
    Ok(BotMove { decision, report })
}

pub fn suggest_hint(board: &Board, mark: Mark) -> Option<usize> {
    find_immediate_win(board, mark)
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<BotDecision> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }

    if rng.chance(SMART_DEFER_CHANCE) {
        return calculate_smart_move(input, rng);
    }

    rng.choose(&available_moves).map(|cell| BotDecision {
        cell,
        source: DecisionSource::Random,
    })
}

fn calculate_smart_move(input: &BotInput, rng: &mut SessionRng) -> Option<BotDecision> {
    let bot_mark = input.current_mark;
    let opponent_mark = bot_mark.opponent()?;

    if let Some(cell) = find_immediate_win(&input.board, bot_mark) {
        return Some(BotDecision {
            cell,
            source: DecisionSource::Winning,
        });
    }

    if let Some(cell) = find_immediate_win(&input.board, opponent_mark) {
        return Some(BotDecision {
            cell,
            source: DecisionSource::Blocking,
        });
    }

    calculate_random_move(input, rng)
}

fn calculate_search_move(input: &BotInput, rng: &mut SessionRng) -> Option<BotDecision> {
    match search_best_move(&input.board, input.current_mark, SEARCH_DEPTH) {
        Some(cell) => Some(BotDecision {
            cell,
            source: DecisionSource::Search,
        }),
        None => calculate_smart_move(input, rng),
    }
}

fn search_best_move(board: &Board, bot_mark: Mark, depth: i32) -> Option<usize> {
    let opponent_mark = bot_mark.opponent()?;
    let mut board = *board;

    let mut best_move = None;
    let mut best_score = f64::NEG_INFINITY;

    for cell in get_available_moves(&board) {
        board.set(cell, bot_mark);
        if is_winner(&board, bot_mark) {
            return Some(cell);
        }
        let score = evaluate_position(&mut board, bot_mark, opponent_mark, depth - 1);
        board.clear(cell);

        if score > best_score {
            best_score = score;
            best_move = Some(cell);
        }
    }

    best_move
}

/// Weighted blend over every empty cell: the bot's placement adds half of
/// the child score, the opponent's placement subtracts half. Not minimax.
pub(crate) fn evaluate_position(
    board: &mut Board,
    bot_mark: Mark,
    opponent_mark: Mark,
    depth: i32,
) -> f64 {
    if is_winner(board, bot_mark) {
        return WIN_SCORE + depth as f64;
    }
    if is_winner(board, opponent_mark) {
        return -WIN_SCORE - depth as f64;
    }
    if board.is_full() || depth <= 0 {
        return 0.0;
    }

    let mut score = 0.0;
    for cell in get_available_moves(board) {
        board.set(cell, bot_mark);
        score += evaluate_position(board, bot_mark, opponent_mark, depth - 1) * BLEND_WEIGHT;
        board.set(cell, opponent_mark);
        score -= evaluate_position(board, bot_mark, opponent_mark, depth - 1) * BLEND_WEIGHT;
        board.clear(cell);
    }
    score
}
