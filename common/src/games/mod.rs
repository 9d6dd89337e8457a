mod session;
mod session_rng;

pub mod tictactoe;

pub use session::{AiTicket, GameMode, GameSession, MatchPhase, Scoreboard};
pub use session_rng::SessionRng;
