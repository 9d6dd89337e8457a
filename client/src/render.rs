use common::games::tictactoe::{CELL_COUNT, MAX_PIECES, Mark, MatchState};
use common::games::{GameMode, Scoreboard};
use common::i18n::Text;
use common::settings::Language;

/// Board as three text rows. Empty cells show their 1-based number, cells on
/// the winning line are bracketed, and the piece that will vanish next for
/// the side to move is marked with `*`.
pub fn render_board(state: &MatchState) -> String {
    let winning_line = state.outcome().winning_line();
    let next_to_vanish = state
        .queue(state.current_mark())
        .filter(|queue| queue.len() == MAX_PIECES)
        .and_then(|queue| queue.oldest());

    let cells: Vec<String> = (0..CELL_COUNT)
        .map(|index| {
            let mark = state.board().get(index).unwrap_or(Mark::Empty);
            let glyph = match mark {
                Mark::Empty => char::from_digit(index as u32 + 1, 10).unwrap_or('?'),
                other => other.symbol(),
            };
            if winning_line.is_some_and(|line| line.contains(&index)) {
                format!("[{}]", glyph)
            } else if next_to_vanish == Some(index) && !state.is_over() {
                format!(" {}*", glyph)
            } else {
                format!(" {} ", glyph)
            }
        })
        .collect();

    cells
        .chunks(3)
        .map(|row| row.join("|"))
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

pub fn render_scoreboard(scoreboard: Scoreboard, mode: GameMode, language: Language) -> String {
    let (you, opponent, games) = match (language, mode) {
        (Language::Zh, GameMode::SinglePlayer) => ("你", "AI", "局數"),
        (Language::Zh, GameMode::TwoPlayer) => ("你", "玩家 O", "局數"),
        (Language::En, GameMode::SinglePlayer) => ("You", "AI", "Games"),
        (Language::En, GameMode::TwoPlayer) => ("You", "Player O", "Games"),
    };
    format!(
        "{}: {} | {}: {} | {}: {}",
        you,
        scoreboard.player_score,
        opponent,
        scoreboard.opponent_score,
        games,
        scoreboard.game_count
    )
}

/// Keys offered once a match is resolved. `q` leaves the program.
pub fn render_end_prompt(language: Language) -> String {
    format!(
        "r: {}  q: {}",
        Text::PlayAgain.render(language),
        Text::Quit.render(language)
    )
}

pub fn render_status(state: &MatchState, language: Language) -> String {
    let result = match state.outcome().winner() {
        Some(mark) => Text::WinMessage(mark),
        None if state.is_over() => Text::DrawMessage,
        None => return Text::TurnIndicator(state.current_mark()).render(language),
    };
    format!("{} {}", Text::GameOver.render(language), result.render(language))
}
