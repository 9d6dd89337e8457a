mod app;
mod config;
mod input;
mod render;

use std::time::Duration;

use clap::{Parser, ValueEnum};
use common::games::{GameMode, GameSession, SessionRng};
use common::i18n::Text;
use common::{Difficulty, log, log_error, logger};

use app::App;
use config::get_config_manager;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Single,
    Two,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => GameMode::SinglePlayer,
            ModeArg::Two => GameMode::TwoPlayer,
        }
    }
}

fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    Difficulty::parse(value).ok_or_else(|| format!("Unknown difficulty: {}", value))
}

#[derive(Parser)]
#[command(name = "vanish_client", about = "Tic-tac-toe where your oldest piece vanishes")]
struct Args {
    #[arg(long, value_enum, default_value = "single")]
    mode: ModeArg,

    /// Overrides the saved difficulty and stores the new value.
    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,

    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 700)]
    ai_delay_ms: u64,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = match config_manager.get_config() {
        Ok(config) => {
            logger::restore_errors(config.errors.clone());
            config
        }
        Err(err) => {
            log_error!("Failed to load config, using defaults: {}", err);
            Default::default()
        }
    };

    if let Some(difficulty) = args.difficulty {
        config.settings.difficulty = difficulty;
        println!("{}", Text::DifficultySet(difficulty).render(config.settings.language));
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed {}", rng.seed());

    let mode: GameMode = args.mode.into();
    let mut session = GameSession::new(mode, config.settings.difficulty, rng)
        .with_scoreboard(config.stats.scoreboard());
    session.start_game(mode);
    log!(
        "Starting {:?} game {} at {} difficulty",
        mode,
        session.scoreboard().game_count,
        session.difficulty()
    );

    let app = App::new(
        session,
        config_manager,
        config,
        Duration::from_millis(args.ai_delay_ms),
    );
    app.run().await
}
