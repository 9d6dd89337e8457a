use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::Scoreboard;
use common::logger::ErrorEntry;
use common::settings::Settings;
use common::tutorial::Tutorial;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "vanish_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub type ClientConfigManager =
    ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn get_config_manager(path: Option<&str>) -> ClientConfigManager {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub game_count: u32,
    #[serde(default)]
    pub player_score: u32,
    #[serde(default)]
    pub opponent_score: u32,
    #[serde(default)]
    pub total_time_secs: f64,
}

impl Stats {
    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            player_score: self.player_score,
            opponent_score: self.opponent_score,
            game_count: self.game_count,
        }
    }

    pub fn record(&mut self, scoreboard: Scoreboard, elapsed_secs: f64) {
        self.game_count = scoreboard.game_count;
        self.player_score = scoreboard.player_score;
        self.opponent_score = scoreboard.opponent_score;
        self.total_time_secs += elapsed_secs.max(0.0);
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub settings: Settings,
    #[serde(default)]
    pub tutorial: Tutorial,
    #[serde(default)]
    pub stats: Stats,
    /// Error history carried over between runs.
    #[serde(default)]
    pub errors: Vec<ErrorEntry>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.settings.validate()?;
        if self.stats.total_time_secs < 0.0 {
            return Err("total_time_secs must not be negative".to_string());
        }
        Ok(())
    }
}
