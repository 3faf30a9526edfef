//! Line-oriented command parser for the text front end.
//!
//! The command name is the first whitespace-separated word and is matched
//! case-sensitively. `mark` takes exactly two coordinates; every other
//! command ignores anything after its name.

use derive_more::{Display, Error};

/// A parsed text command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCommand {
    Mark { x: u32, y: u32 },
    Undo,
    Redo,
    Help,
    Status,
    Reset,
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    #[display("Unrecognized command. Type 'help' for a list of available commands.")]
    Unrecognized,
    #[display("Invalid input for 'mark <x> <y>' command.")]
    InvalidMarkArguments,
}

/// Parse one input line.
///
/// # Examples
///
/// ```
/// use tui_tictactoe_input::{parse_command, CommandError, TextCommand};
///
/// assert_eq!(parse_command("mark 1 2"), Ok(TextCommand::Mark { x: 1, y: 2 }));
/// assert_eq!(parse_command("  quit "), Ok(TextCommand::Quit));
/// assert_eq!(parse_command("mark 1"), Err(CommandError::InvalidMarkArguments));
/// assert_eq!(parse_command("Undo"), Err(CommandError::Unrecognized));
/// ```
pub fn parse_command(line: &str) -> Result<TextCommand, CommandError> {
    let mut words = line.split_whitespace();
    let command = match words.next().ok_or(CommandError::Unrecognized)? {
        "mark" => {
            let x = words.next().and_then(parse_coordinate);
            let y = words.next().and_then(parse_coordinate);
            match (x, y, words.next()) {
                (Some(x), Some(y), None) => TextCommand::Mark { x, y },
                _ => return Err(CommandError::InvalidMarkArguments),
            }
        }
        "undo" => TextCommand::Undo,
        "redo" => TextCommand::Redo,
        "help" => TextCommand::Help,
        "status" => TextCommand::Status,
        "reset" => TextCommand::Reset,
        "quit" | "exit" => TextCommand::Quit,
        _ => return Err(CommandError::Unrecognized),
    };
    Ok(command)
}

/// Unsigned integer strictly below `u16::MAX`.
fn parse_coordinate(word: &str) -> Option<u32> {
    word.parse::<u32>()
        .ok()
        .filter(|&value| value < u16::MAX as u32)
}
