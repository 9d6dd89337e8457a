use serde::{Deserialize, Serialize};

use crate::i18n::{TUTORIAL_STEPS, Text};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TutorialAction {
    Next,
    Skip,
    StartPlaying,
}

impl TutorialAction {
    pub fn label(&self) -> Text {
        match self {
            TutorialAction::Next => Text::NextStep,
            TutorialAction::Skip => Text::SkipTutorial,
            TutorialAction::StartPlaying => Text::StartPlaying,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorialPrompt {
    pub step: usize,
    pub message: Text,
    pub actions: Vec<TutorialAction>,
}

/// First-run walkthrough. Persisted so a half-read tutorial resumes at the
/// same step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutorial {
    pub step: usize,
    pub seen: bool,
}

impl Tutorial {
    pub fn is_active(&self) -> bool {
        !self.seen && self.step < TUTORIAL_STEPS
    }

    pub fn prompt(&self) -> Option<TutorialPrompt> {
        if !self.is_active() {
            return None;
        }

        let actions = if self.step == TUTORIAL_STEPS - 1 {
            vec![TutorialAction::StartPlaying]
        } else if self.step == 0 {
            vec![TutorialAction::Next, TutorialAction::Skip]
        } else {
            vec![TutorialAction::Next]
        };

        Some(TutorialPrompt {
            step: self.step,
            message: Text::TutorialStep(self.step),
            actions,
        })
    }

    fn offers(&self, action: TutorialAction) -> bool {
        self.prompt()
            .is_some_and(|prompt| prompt.actions.contains(&action))
    }

    /// Moves to the next step. Only valid before the last step.
    pub fn advance(&mut self) -> bool {
        if !self.offers(TutorialAction::Next) {
            return false;
        }
        self.step += 1;
        true
    }

    /// Leaves the tutorial from its first step.
    pub fn skip(&mut self) -> bool {
        if !self.offers(TutorialAction::Skip) {
            return false;
        }
        self.seen = true;
        true
    }

    /// Closes the tutorial from its last step.
    pub fn finish(&mut self) -> bool {
        if !self.offers(TutorialAction::StartPlaying) {
            return false;
        }
        self.seen = true;
        true
    }

    /// Applies `action` if the current prompt offers it. Returns whether it
    /// was accepted.
    pub fn respond(&mut self, action: TutorialAction) -> bool {
        match action {
            TutorialAction::Next => self.advance(),
            TutorialAction::Skip => self.skip(),
            TutorialAction::StartPlaying => self.finish(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step_offers_skip() {
        let tutorial = Tutorial::default();
        let prompt = tutorial.prompt().unwrap();
        assert_eq!(prompt.step, 0);
        assert_eq!(prompt.actions, vec![TutorialAction::Next, TutorialAction::Skip]);
    }

    #[test]
    fn test_walk_through_to_the_end() {
        let mut tutorial = Tutorial::default();
        for step in 1..TUTORIAL_STEPS {
            assert!(tutorial.respond(TutorialAction::Next));
            let prompt = tutorial.prompt().unwrap();
            assert_eq!(prompt.step, step);
            assert_eq!(prompt.message, Text::TutorialStep(step));
        }

        let last = tutorial.prompt().unwrap();
        assert_eq!(last.actions, vec![TutorialAction::StartPlaying]);
        assert!(!tutorial.respond(TutorialAction::Next));
        assert!(tutorial.respond(TutorialAction::StartPlaying));
        assert!(tutorial.seen);
        assert!(tutorial.prompt().is_none());
    }

    #[test]
    fn test_skip_only_on_first_step() {
        let mut tutorial = Tutorial::default();
        tutorial.respond(TutorialAction::Next);
        assert!(!tutorial.respond(TutorialAction::Skip));
        assert!(!tutorial.seen);

        tutorial.reset();
        assert!(tutorial.respond(TutorialAction::Skip));
        assert!(!tutorial.is_active());
    }

    #[test]
    fn test_step_methods_follow_offered_actions() {
        let mut tutorial = Tutorial::default();
        assert!(!tutorial.finish());
        assert!(tutorial.advance());
        assert!(!tutorial.skip());

        while tutorial.step < TUTORIAL_STEPS - 1 {
            assert!(tutorial.advance());
        }
        assert!(!tutorial.advance());
        assert_eq!(tutorial.step, TUTORIAL_STEPS - 1);
        assert!(tutorial.finish());
        assert!(!tutorial.is_active());
        assert!(!tutorial.finish());
    }

    #[test]
    fn test_reset_restarts_tutorial() {
        let mut tutorial = Tutorial { step: 3, seen: true };
        tutorial.reset();
        assert!(tutorial.is_active());
        assert_eq!(tutorial.prompt().unwrap().step, 0);
    }
}
