use common::games::tictactoe::{CELL_COUNT, Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    /// Zero-based cell index.
    PlaceMark(usize),
    SetDifficulty(Difficulty),
    Reset,
    Scores,
    Help,
    Quit,
}

/// Cells are typed as 1-9 and mapped to indices 0-8.
pub fn parse_command(line: &str) -> Result<ClientCommand, String> {
    let input = line.trim().to_ascii_lowercase();
    if input.is_empty() {
        return Err("Type a cell number (1-9) or 'help'".to_string());
    }

    if let Ok(cell) = input.parse::<usize>() {
        return match cell {
            1..=CELL_COUNT => Ok(ClientCommand::PlaceMark(cell - 1)),
            _ => Err(format!("Cell must be between 1 and {}", CELL_COUNT)),
        };
    }

    match input.as_str() {
        "r" | "reset" | "new" => Ok(ClientCommand::Reset),
        "s" | "scores" => Ok(ClientCommand::Scores),
        "h" | "help" | "?" => Ok(ClientCommand::Help),
        "q" | "quit" | "exit" => Ok(ClientCommand::Quit),
        other => other
            .parse::<Difficulty>()
            .map(ClientCommand::SetDifficulty)
            .map_err(|_| format!("Unknown command '{}', type 'help' for the list", other)),
    }
}
