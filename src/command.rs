use crate::controls::Button;
use thiserror::Error;

pub const HELP_MESSAGE: &str =
    "Use 'move u d l r i a' to move around the grid. Use 'submit' to press the goal button.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Directional presses, applied one transaction at a time.
    Move(Vec<Button>),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("'move' needs at least one step")]
    MissingSteps,
    #[error("unknown move step {0:?}; expected one of u d l r i a")]
    BadStep(String),
    #[error("'submit' takes no arguments")]
    SubmitArguments,
    #[error("unknown command {0:?}")]
    Unknown(String),
}

pub fn step_button(step: &str) -> Option<Button> {
    let button = match step {
        "u" => Button::Up,
        "d" => Button::Down,
        "l" => Button::Left,
        "r" => Button::Right,
        "i" => Button::Zig,
        "a" => Button::Zag,
        _ => return None,
    };
    Some(button)
}

pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let lowered = input.trim().to_ascii_lowercase();
    let mut parts = lowered.split_whitespace();
    let Some(name) = parts.next() else {
        return Err(CommandError::Empty);
    };
    let args: Vec<&str> = parts.collect();

    match name {
        "move" => {
            if args.is_empty() {
                return Err(CommandError::MissingSteps);
            }
            args.iter()
                .map(|&step| step_button(step).ok_or_else(|| CommandError::BadStep(step.to_string())))
                .collect::<Result<Vec<_>, _>>()
                .map(Command::Move)
        }
        "submit" if args.is_empty() => Ok(Command::Submit),
        "submit" => Err(CommandError::SubmitArguments),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}
