use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use crate::games::tictactoe::{
    BotMove, Difficulty, IllegalMove, Mark, MatchState, MoveReport, Outcome, select_ai_move,
    suggest_hint,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    SinglePlayer,
    TwoPlayer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPhase {
    WaitingForHuman,
    AiThinking,
    Resolved,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub player_score: u32,
    pub opponent_score: u32,
    pub game_count: u32,
}

/// Proof that the AI turn was requested for a specific match generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AiTicket {
    generation: u64,
}

impl AiTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// In single player the human always plays X and the AI plays O.
pub struct GameSession {
    state: MatchState,
    mode: GameMode,
    difficulty: Difficulty,
    phase: MatchPhase,
    generation: u64,
    scoreboard: Scoreboard,
    rng: SessionRng,
}

impl GameSession {
    pub fn new(mode: GameMode, difficulty: Difficulty, rng: SessionRng) -> Self {
        Self {
            state: MatchState::new(),
            mode,
            difficulty,
            phase: MatchPhase::WaitingForHuman,
            generation: 0,
            scoreboard: Scoreboard::default(),
            rng,
        }
    }

    pub fn with_scoreboard(mut self, scoreboard: Scoreboard) -> Self {
        self.scoreboard = scoreboard;
        self
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn start_game(&mut self, mode: GameMode) {
        self.mode = mode;
        self.scoreboard.game_count += 1;
        self.reset();
    }

    /// Any AI ticket issued before this call becomes stale.
    pub fn reset(&mut self) {
        self.state.reset();
        self.generation += 1;
        self.phase = MatchPhase::WaitingForHuman;
    }

    pub fn human_move(&mut self, cell: usize) -> Result<MoveReport, IllegalMove> {
        match self.phase {
            MatchPhase::AiThinking => return Err(IllegalMove::AwaitingAi),
            MatchPhase::Resolved => return Err(IllegalMove::GameOver),
            MatchPhase::WaitingForHuman => {}
        }

        let report = self.state.apply_move(cell)?;
        self.after_move(&report);
        Ok(report)
    }

    pub fn begin_ai_turn(&self) -> Option<AiTicket> {
        if self.phase == MatchPhase::AiThinking {
            Some(AiTicket {
                generation: self.generation,
            })
        } else {
            None
        }
    }

    /// Applies the AI move for `ticket`. A ticket from an earlier generation
    /// is dropped without touching the session.
    pub fn resolve_ai_turn(&mut self, ticket: AiTicket) -> Result<Option<BotMove>, IllegalMove> {
        if ticket.generation != self.generation || self.phase != MatchPhase::AiThinking {
            return Ok(None);
        }

        let bot_move = select_ai_move(&mut self.state, self.difficulty, &mut self.rng)?;
        self.after_move(&bot_move.report);
        Ok(Some(bot_move))
    }

    pub fn hint(&self) -> Option<usize> {
        if self.phase != MatchPhase::WaitingForHuman || self.state.current_mark() != Mark::X {
            return None;
        }
        suggest_hint(self.state.board(), Mark::X)
    }

    fn after_move(&mut self, report: &MoveReport) {
        match report.snapshot.outcome {
            Outcome::Win { mark, .. } => {
                if mark == Mark::X {
                    self.scoreboard.player_score += 1;
                } else {
                    self.scoreboard.opponent_score += 1;
                }
                self.phase = MatchPhase::Resolved;
            }
            Outcome::Draw => self.phase = MatchPhase::Resolved,
            Outcome::InProgress => {
                let ai_to_move = self.mode == GameMode::SinglePlayer
                    && report.snapshot.current_mark == Mark::O;
                self.phase = if ai_to_move {
                    MatchPhase::AiThinking
                } else {
                    MatchPhase::WaitingForHuman
                };
            }
        }
    }
}
