use std::future::Future;
use std::time::{Duration, Instant};

use common::games::{AiTicket, GameSession, MatchPhase};
use common::games::tictactoe::MoveReport;
use common::i18n::Text;
use common::tutorial::TutorialAction;
use common::{log, log_error, logger};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::{ClientConfigManager, Config};
use crate::input::{Command, parse_command};
use crate::render::{render_board, render_end_prompt, render_scoreboard, render_status};

pub struct App {
    session: GameSession,
    config_manager: ClientConfigManager,
    config: Config,
    ai_delay: Duration,
    match_started: Instant,
}

/// Sleeps until `deadline`, or forever when there is none.
fn wait_for_ai(deadline: Option<tokio::time::Instant>) -> impl Future<Output = ()> {
    async move {
        match deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending::<()>().await,
        }
    }
}

impl App {
    pub fn new(
        session: GameSession,
        config_manager: ClientConfigManager,
        config: Config,
        ai_delay: Duration,
    ) -> Self {
        Self {
            session,
            config_manager,
            config,
            ai_delay,
            match_started: Instant::now(),
        }
    }

    pub async fn run(mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut pending_ai: Option<(AiTicket, tokio::time::Instant)> = None;

        self.show_tutorial_prompt();
        self.show_board();

        loop {
            if pending_ai.is_none()
                && let Some(ticket) = self.session.begin_ai_turn()
            {
                println!("{}", Text::AiThinking.render(self.language()));
                pending_ai = Some((ticket, tokio::time::Instant::now() + self.ai_delay));
            }

            tokio::select! {
                _ = wait_for_ai(pending_ai.map(|(_, deadline)| deadline)) => {
                    if let Some((ticket, _)) = pending_ai.take() {
                        self.resolve_ai(ticket);
                    }
                }
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        break;
                    };
                    if line.trim().is_empty() {
                        continue;
                    }
                    match parse_command(&line) {
                        Ok(Command::Quit) => break,
                        Ok(command) => self.handle_command(command),
                        Err(message) => println!("{}", message),
                    }
                }
            }
        }

        self.config.stats.game_count = self.session.scoreboard().game_count;
        self.save();
        Ok(())
    }

    fn language(&self) -> common::Language {
        self.config.settings.language
    }

    fn handle_command(&mut self, command: Command) {
        let language = self.language();
        match command {
            Command::Place(cell) => match self.session.human_move(cell) {
                Ok(report) => self.after_move(&report),
                Err(err) => println!("{}", err),
            },
            Command::Hint => {
                if self.session.phase() != MatchPhase::WaitingForHuman {
                    return;
                }
                let text = match self.session.hint() {
                    Some(cell) => Text::HintSuggestion(cell),
                    None => Text::NoHint,
                };
                println!("{}", text.render(language));
            }
            Command::Restart => {
                if self.session.phase() == MatchPhase::Resolved {
                    self.session.start_game(self.session.mode());
                } else {
                    self.session.reset();
                }
                self.match_started = Instant::now();
                log!("Match restarted, generation {}", self.session.generation());
                self.show_board();
            }
            Command::NextTheme => {
                self.config.settings.theme = self.config.settings.theme.next();
                self.save();
                println!("{}", Text::CurrentTheme(self.config.settings.theme).render(language));
            }
            Command::NextDifficulty => {
                let difficulty = self.session.difficulty().next();
                self.session.set_difficulty(difficulty);
                self.config.settings.difficulty = difficulty;
                self.save();
                println!("{}", Text::DifficultySet(difficulty).render(language));
            }
            Command::SetVolume(percent) => {
                match self.config.settings.set_volume_percent(percent) {
                    Ok(()) => {
                        self.save();
                        println!("{}", Text::VolumeSet(percent).render(language));
                    }
                    Err(err) => println!("{}", err),
                }
            }
            Command::ToggleAnimations => {
                let animations_on = self.config.settings.toggle_animations();
                self.save();
                println!("{}", Text::AnimationsSet(animations_on).render(language));
            }
            Command::ReplayTutorial => {
                self.config.tutorial.reset();
                self.save();
                println!("{}", Text::TutorialReset.render(language));
                self.show_tutorial_prompt();
            }
            Command::ShowErrors => {
                for entry in logger::recent_errors() {
                    println!("[{}] {}", entry.timestamp, entry.message);
                }
            }
            Command::ToggleLanguage => {
                self.config.settings.language = language.toggle();
                self.save();
                self.show_board();
            }
            Command::TutorialNext | Command::TutorialSkip => {
                let action = match (command, self.config.tutorial.prompt()) {
                    (Command::TutorialSkip, _) => TutorialAction::Skip,
                    (_, Some(prompt)) if prompt.actions.contains(&TutorialAction::StartPlaying) => {
                        TutorialAction::StartPlaying
                    }
                    _ => TutorialAction::Next,
                };
                if self.config.tutorial.respond(action) {
                    self.save();
                    self.show_tutorial_prompt();
                }
            }
            Command::Quit => {}
        }
    }

    fn resolve_ai(&mut self, ticket: AiTicket) {
        match self.session.resolve_ai_turn(ticket) {
            Ok(Some(bot_move)) => {
                log!(
                    "AI ({}) played cell {} via {:?}",
                    self.session.difficulty(),
                    bot_move.decision.cell + 1,
                    bot_move.decision.source
                );
                self.after_move(&bot_move.report);
            }
            Ok(None) => log!("Discarded AI move from generation {}", ticket.generation()),
            Err(err) => log_error!("AI move failed: {}", err),
        }
    }

    fn after_move(&mut self, report: &MoveReport) {
        if let Some(evicted) = report.evicted {
            log!("{} piece at cell {} vanished", report.mark, evicted + 1);
        }
        self.show_board();

        if self.session.phase() == MatchPhase::Resolved {
            let elapsed = self.match_started.elapsed().as_secs_f64();
            self.config.stats.record(self.session.scoreboard(), elapsed);
            self.save();
            let scoreboard = self.session.scoreboard();
            println!(
                "{}",
                render_scoreboard(scoreboard, self.session.mode(), self.language())
            );
            println!("{}", render_end_prompt(self.language()));
        }
    }

    fn show_board(&self) {
        println!();
        println!("{}", render_board(self.session.state()));
        println!("{}", render_status(self.session.state(), self.language()));
    }

    fn show_tutorial_prompt(&self) {
        let Some(prompt) = self.config.tutorial.prompt() else {
            return;
        };
        let language = self.language();
        let actions: Vec<String> = prompt
            .actions
            .iter()
            .map(|action| {
                let key = match action {
                    TutorialAction::Skip => "s",
                    TutorialAction::Next | TutorialAction::StartPlaying => "n",
                };
                format!("{}: {}", key, action.label().render(language))
            })
            .collect();
        println!("{}", prompt.message.render(language));
        println!("{}", actions.join("  "));
    }

    fn save(&mut self) {
        self.config.errors = logger::recent_errors();
        if let Err(err) = self.config_manager.set_config(&self.config) {
            log_error!("Failed to save config: {}", err);
        }
    }
}
