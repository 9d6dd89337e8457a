//! Player-facing strings. Every message is a variant of [`Text`] and every
//! language renders every variant, so a missing translation is a compile
//! error rather than a raw key on screen.

use crate::games::tictactoe::{Difficulty, Mark};
use crate::settings::{Language, Theme};

pub const TUTORIAL_STEPS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    StartGame,
    AdjustDifficulty,
    SoundSettings,
    SwitchTheme,
    CurrentTheme(Theme),
    TurnIndicator(Mark),
    WinMessage(Mark),
    DrawMessage,
    Hint,
    Restart,
    BackToMenu,
    DifficultySet(Difficulty),
    TutorialStep(usize),
    SkipTutorial,
    StartPlaying,
    NextStep,
    AiThinking,
    GameOver,
    PlayAgain,
    HintSuggestion(usize),
    NoHint,
    TutorialReset,
    VolumeSet(u32),
    AnimationsSet(bool),
    Quit,
}

impl Text {
    pub fn render(&self, language: Language) -> String {
        match language {
            Language::Zh => self.render_zh(),
            Language::En => self.render_en(),
        }
    }

    fn render_zh(&self) -> String {
        match self {
            Text::StartGame => "開始遊戲".to_string(),
            Text::AdjustDifficulty => "難度調整".to_string(),
            Text::SoundSettings => "音效設定".to_string(),
            Text::SwitchTheme => "切換主題".to_string(),
            Text::CurrentTheme(theme) => format!("當前主題：{}", theme_name(*theme, Language::Zh)),
            Text::TurnIndicator(mark) => format!("現在輪到：{}", mark),
            Text::WinMessage(mark) => format!("玩家 {} 贏了！", mark),
            Text::DrawMessage => "平手！".to_string(),
            Text::Hint => "提示".to_string(),
            Text::Restart => "重新開始".to_string(),
            Text::BackToMenu => "返回主介面".to_string(),
            Text::DifficultySet(level) => {
                format!("難度設為：{}", difficulty_name(*level, Language::Zh))
            }
            Text::TutorialStep(step) => match step {
                0 => "【規則1】歡迎！點擊棋盤即可落子。".to_string(),
                1 => "【規則2】雙方輪流下棋。你的棋子是 \"X\"，對手是 \"O\"。".to_string(),
                2 => "【重要規則】每人場上最多只能有3個棋子！當你下第4個棋子時，你最早放的第1個棋子將會消失。".to_string(),
                3 => "【勝利條件】讓你的3個棋子連成一線即可獲勝！".to_string(),
                _ => "教學結束！祝你好運！".to_string(),
            },
            Text::SkipTutorial => "跳過教學".to_string(),
            Text::StartPlaying => "開始遊戲".to_string(),
            Text::NextStep => "下一步".to_string(),
            Text::AiThinking => "AI 思考中...".to_string(),
            Text::GameOver => "遊戲結束！".to_string(),
            Text::PlayAgain => "再來一局".to_string(),
            Text::HintSuggestion(cell) => format!("建議：放置棋子在格子 {}", cell + 1),
            Text::NoHint => "沒有明顯的最佳移動，隨機選擇吧！".to_string(),
            Text::TutorialReset => "教學已重設。".to_string(),
            Text::VolumeSet(percent) => format!("音量：{}%", percent),
            Text::AnimationsSet(true) => "動畫：開啟".to_string(),
            Text::AnimationsSet(false) => "動畫：關閉".to_string(),
            Text::Quit => "離開遊戲".to_string(),
        }
    }

    fn render_en(&self) -> String {
        match self {
            Text::StartGame => "Start Game".to_string(),
            Text::AdjustDifficulty => "Adjust Difficulty".to_string(),
            Text::SoundSettings => "Sound Settings".to_string(),
            Text::SwitchTheme => "Switch Theme".to_string(),
            Text::CurrentTheme(theme) => {
                format!("Current Theme: {}", theme_name(*theme, Language::En))
            }
            Text::TurnIndicator(mark) => format!("Now it's: {}", mark),
            Text::WinMessage(mark) => format!("Player {} wins!", mark),
            Text::DrawMessage => "It's a draw!".to_string(),
            Text::Hint => "Hint".to_string(),
            Text::Restart => "Restart".to_string(),
            Text::BackToMenu => "Back to Menu".to_string(),
            Text::DifficultySet(level) => {
                format!("Difficulty set to: {}", difficulty_name(*level, Language::En))
            }
            Text::TutorialStep(step) => match step {
                0 => "[Rule 1] Welcome! Pick a cell to place your piece.".to_string(),
                1 => "[Rule 2] Players take turns. Your piece is \"X\", opponent is \"O\".".to_string(),
                2 => "[Key Rule] Each player can have up to 3 pieces on the board! When you place a 4th piece, the earliest one disappears!".to_string(),
                3 => "[Win Condition] Get 3 of your pieces in a row to win!".to_string(),
                _ => "Tutorial complete! Good luck!".to_string(),
            },
            Text::SkipTutorial => "Skip Tutorial".to_string(),
            Text::StartPlaying => "Start Playing".to_string(),
            Text::NextStep => "Next".to_string(),
            Text::AiThinking => "AI is thinking...".to_string(),
            Text::GameOver => "Game Over!".to_string(),
            Text::PlayAgain => "Play Again".to_string(),
            Text::HintSuggestion(cell) => format!("Suggestion: Place piece at cell {}", cell + 1),
            Text::NoHint => "No obvious best move, choose randomly!".to_string(),
            Text::TutorialReset => "Tutorial has been reset.".to_string(),
            Text::VolumeSet(percent) => format!("Volume: {}%", percent),
            Text::AnimationsSet(true) => "Animations: on".to_string(),
            Text::AnimationsSet(false) => "Animations: off".to_string(),
            Text::Quit => "Quit".to_string(),
        }
    }
}

pub fn theme_name(theme: Theme, language: Language) -> &'static str {
    match (language, theme) {
        (Language::Zh, Theme::Default) => "預設藍色",
        (Language::Zh, Theme::Dark) => "黑暗模式",
        (Language::Zh, Theme::Pixel) => "像素風格",
        (Language::Zh, Theme::Tech) => "未來科技",
        (Language::En, Theme::Default) => "Default Blue",
        (Language::En, Theme::Dark) => "Dark Mode",
        (Language::En, Theme::Pixel) => "Pixel Style",
        (Language::En, Theme::Tech) => "Future Tech",
    }
}

pub fn difficulty_name(difficulty: Difficulty, language: Language) -> &'static str {
    match (language, difficulty) {
        (Language::Zh, Difficulty::Easy) => "簡單",
        (Language::Zh, Difficulty::Normal) => "普通",
        (Language::Zh, Difficulty::Hard) => "困難",
        (Language::Zh, Difficulty::Hell) => "地獄",
        (Language::En, Difficulty::Easy) => "Easy",
        (Language::En, Difficulty::Normal) => "Normal",
        (Language::En, Difficulty::Hard) => "Hard",
        (Language::En, Difficulty::Hell) => "Hell",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_suggestion_is_one_based() {
        assert_eq!(
            Text::HintSuggestion(0).render(Language::En),
            "Suggestion: Place piece at cell 1"
        );
        assert_eq!(Text::HintSuggestion(8).render(Language::Zh), "建議：放置棋子在格子 9");
    }

    #[test]
    fn test_parameters_are_substituted() {
        assert_eq!(Text::WinMessage(Mark::O).render(Language::En), "Player O wins!");
        assert_eq!(Text::TurnIndicator(Mark::X).render(Language::Zh), "現在輪到：X");
        assert_eq!(
            Text::CurrentTheme(Theme::Tech).render(Language::En),
            "Current Theme: Future Tech"
        );
        assert_eq!(
            Text::DifficultySet(Difficulty::Hell).render(Language::Zh),
            "難度設為：地獄"
        );
    }

    #[test]
    fn test_settings_feedback() {
        assert_eq!(Text::VolumeSet(35).render(Language::En), "Volume: 35%");
        assert_eq!(Text::AnimationsSet(false).render(Language::Zh), "動畫：關閉");
        assert_eq!(Text::Quit.render(Language::En), "Quit");
    }

    #[test]
    fn test_tutorial_steps_differ_per_language() {
        for step in 0..TUTORIAL_STEPS {
            let zh = Text::TutorialStep(step).render(Language::Zh);
            let en = Text::TutorialStep(step).render(Language::En);
            assert!(!zh.is_empty());
            assert_ne!(zh, en);
        }
    }
}
