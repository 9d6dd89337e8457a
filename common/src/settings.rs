use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::games::tictactoe::Difficulty;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Default,
    Dark,
    Pixel,
    Tech,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Default, Theme::Dark, Theme::Pixel, Theme::Tech];

    pub fn next(self) -> Theme {
        match self {
            Theme::Default => Theme::Dark,
            Theme::Dark => Theme::Pixel,
            Theme::Pixel => Theme::Tech,
            Theme::Tech => Theme::Default,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    pub fn toggle(self) -> Language {
        match self {
            Language::Zh => Language::En,
            Language::En => Language::Zh,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
    pub difficulty: Difficulty,
    pub language: Language,
    pub volume: f32,
    pub animations_on: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Default,
            difficulty: Difficulty::Normal,
            language: Language::Zh,
            volume: 0.5,
            animations_on: true,
        }
    }
}

impl Settings {
    pub fn volume_percent(&self) -> u32 {
        (self.volume * 100.0).round() as u32
    }

    /// Sets the volume from a 0-100 percentage. Anything above 100 is
    /// rejected and leaves the volume unchanged.
    pub fn set_volume_percent(&mut self, percent: u32) -> Result<(), String> {
        if percent > 100 {
            return Err(format!("Volume must be between 0 and 100, got {}", percent));
        }
        self.volume = percent as f32 / 100.0;
        Ok(())
    }

    pub fn toggle_animations(&mut self) -> bool {
        self.animations_on = !self.animations_on;
        self.animations_on
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(format!("Volume must be between 0 and 1, got {}", self.volume));
        }
        Ok(())
    }
}
