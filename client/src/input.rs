#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Hint,
    Restart,
    NextTheme,
    NextDifficulty,
    SetVolume(u32),
    ToggleAnimations,
    ToggleLanguage,
    ReplayTutorial,
    ShowErrors,
    TutorialNext,
    TutorialSkip,
    Quit,
}

fn parse_volume(argument: &str) -> Result<Command, String> {
    match argument.trim().parse::<u32>() {
        Ok(percent @ 0..=100) => Ok(Command::SetVolume(percent)),
        Ok(percent) => Err(format!("Volume {} is out of range, use 0-100", percent)),
        Err(_) => Err(format!("Invalid volume: {}", argument.trim())),
    }
}

/// Cells are typed 1-9 in reading order and stored 0-8.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim().to_ascii_lowercase();
    if let Some((name, argument)) = trimmed.split_once(char::is_whitespace)
        && matches!(name, "v" | "volume")
    {
        return parse_volume(argument);
    }

    match trimmed.as_str() {
        "h" | "hint" => Ok(Command::Hint),
        "r" | "restart" => Ok(Command::Restart),
        "t" | "theme" => Ok(Command::NextTheme),
        "d" | "difficulty" => Ok(Command::NextDifficulty),
        "v" | "volume" => Err("Usage: v <0-100>".to_string()),
        "a" | "animations" => Ok(Command::ToggleAnimations),
        "l" | "lang" | "language" => Ok(Command::ToggleLanguage),
        "tutorial" => Ok(Command::ReplayTutorial),
        "errors" => Ok(Command::ShowErrors),
        "n" | "next" => Ok(Command::TutorialNext),
        "s" | "skip" => Ok(Command::TutorialSkip),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        other => match other.parse::<usize>() {
            Ok(cell @ 1..=9) => Ok(Command::Place(cell - 1)),
            Ok(cell) => Err(format!("Cell {} is out of range, use 1-9", cell)),
            Err(_) => Err(format!("Unknown command: {}", other)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_one_based() {
        assert_eq!(parse_command("1"), Ok(Command::Place(0)));
        assert_eq!(parse_command(" 9 \n"), Ok(Command::Place(8)));
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
    }

    #[test]
    fn test_letter_commands() {
        assert_eq!(parse_command("H"), Ok(Command::Hint));
        assert_eq!(parse_command("restart"), Ok(Command::Restart));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("s"), Ok(Command::TutorialSkip));
        assert_eq!(parse_command("d"), Ok(Command::NextDifficulty));
        assert_eq!(parse_command("Tutorial"), Ok(Command::ReplayTutorial));
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn test_volume_command() {
        assert_eq!(parse_command("v 35"), Ok(Command::SetVolume(35)));
        assert_eq!(parse_command("Volume   0"), Ok(Command::SetVolume(0)));
        assert_eq!(parse_command("a"), Ok(Command::ToggleAnimations));
        assert!(parse_command("v").is_err());
        assert!(parse_command("v loud").is_err());
    }

    #[test]
    fn test_volume_above_hundred_is_rejected() {
        assert_eq!(
            parse_command("v 150"),
            Err("Volume 150 is out of range, use 0-100".to_string())
        );
        assert!(parse_command("v -5").is_err());
    }
}
