pub mod action_log;
pub mod command;
pub mod config;
pub mod controls;
pub mod grid;
pub mod orientation;
pub mod puzzle;
pub mod setup;
pub mod symbols;

pub use action_log::{ActionLog, ActionOutcome, LoggedAction, StrikeReason};
pub use command::{parse_command, Command, CommandError};
pub use config::{ConfigError, PuzzleConfig};
pub use controls::{Button, LocalDirection};
pub use grid::{Axis, Dimension, Location};
pub use orientation::ShipFrame;
pub use puzzle::{DisplayState, PressOutcome, Puzzle, PuzzleStatus, StrikeReport};
pub use setup::{generate_layout, PuzzleLayout, SetupError};
