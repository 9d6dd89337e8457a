pub mod config;
pub mod games;
pub mod i18n;
pub mod logger;
pub mod settings;
pub mod tutorial;

pub use games::tictactoe::{Difficulty, IllegalMove, Mark, Outcome};
pub use settings::{Language, Settings, Theme};
