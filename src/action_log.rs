use crate::controls::{Button, LocalDirection};
use crate::grid::Location;
use crate::orientation::ShipFrame;
use crate::symbols::{symbol_at, symbol_name};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrikeReason {
    FlyIntoWall,
    NotOnTarget,
}

impl fmt::Display for StrikeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrikeReason::FlyIntoWall => f.write_str("flew into a wall"),
            StrikeReason::NotOnTarget => f.write_str("not on target"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Moved { to: Location },
    FlewIntoWall,
    TargetConfirmed { index: usize },
    NotOnTarget { expected: usize, actual: usize },
}

impl ActionOutcome {
    pub fn strike_reason(&self) -> Option<StrikeReason> {
        match self {
            ActionOutcome::FlewIntoWall => Some(StrikeReason::FlyIntoWall),
            ActionOutcome::NotOnTarget { .. } => Some(StrikeReason::NotOnTarget),
            ActionOutcome::Moved { .. } | ActionOutcome::TargetConfirmed { .. } => None,
        }
    }
}

/// One press, with copies of the frame before and after.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedAction {
    pub start_location: Location,
    pub start_frame: ShipFrame,
    pub location_is_identified: bool,
    pub button: Button,
    /// Candidate frame for directional presses, committed or not.
    pub end_frame: Option<ShipFrame>,
    pub outcome: ActionOutcome,
}

impl LoggedAction {
    pub fn end_location(&self) -> Location {
        match self.outcome {
            ActionOutcome::Moved { to } => to,
            _ => self.start_location,
        }
    }
}

/// Names the frame axes, then what lies in each ship-relative direction.
pub fn describe_orientation(location: Location, frame: &ShipFrame) -> String {
    let surroundings: Vec<String> = LocalDirection::ALL
        .iter()
        .map(|&direction| {
            let axis = direction.axis(frame);
            let seen = if frame.is_wall(axis, location) {
                "wall"
            } else {
                symbol_at(frame.neighbor_at(axis, location))
            };
            format!("{}: {}", direction.label(), seen)
        })
        .collect();
    format!("{frame}. Around you: {}.", surroundings.join(", "))
}

pub fn describe_action(action: &LoggedAction, first: bool) -> String {
    let mut msg = String::new();

    if first {
        msg.push_str(&format!(
            "Starting at {}. {} ",
            symbol_at(action.start_location),
            describe_orientation(action.start_location, &action.start_frame)
        ));
        if action.location_is_identified {
            msg.push_str("This is the most recent location where the symbol is shown on the module. ");
        }
    }

    msg.push_str(&format!("Pressing {}. ", action.button));
    match action.outcome {
        ActionOutcome::NotOnTarget { expected, actual } => {
            msg.push_str(&format!(
                "You are not at {}, you are at {}!",
                symbol_name(expected),
                symbol_name(actual)
            ));
        }
        ActionOutcome::TargetConfirmed { index } => {
            msg.push_str(&format!("{} identified correctly.", symbol_name(index)));
        }
        ActionOutcome::FlewIntoWall | ActionOutcome::Moved { .. } => {
            if let Some(end_frame) = action.end_frame {
                msg.push_str(&format!(
                    "New orientation: {} ",
                    describe_orientation(action.start_location, &end_frame)
                ));
            }
            match action.outcome {
                ActionOutcome::Moved { to } => {
                    msg.push_str(&format!("Moving forward to {}.", symbol_at(to)));
                }
                _ => msg.push_str("Moving forward. You fly into a wall!"),
            }
        }
    }
    msg
}

/// Presses since the ship was last on an identified node.
#[derive(Clone, Debug, Default)]
pub struct ActionLog {
    entries: Vec<LoggedAction>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: LoggedAction) {
        self.entries.push(action);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LoggedAction] {
        &self.entries
    }

    pub fn transcript(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, action)| describe_action(action, i == 0))
            .collect()
    }

    /// Renders the transcript and empties the log.
    pub fn drain_transcript(&mut self) -> Vec<String> {
        let transcript = self.transcript();
        self.entries.clear();
        transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Axis, Dimension};

    fn wall_action() -> LoggedAction {
        let start_frame = ShipFrame::canonical();
        LoggedAction {
            start_location: Location::new(0, 0, 0, 0),
            start_frame,
            location_is_identified: true,
            button: Button::Down,
            end_frame: Button::Down.rotate(start_frame),
            outcome: ActionOutcome::FlewIntoWall,
        }
    }

    #[test]
    fn orientation_lists_every_direction() {
        let text = describe_orientation(Location::new(0, 0, 0, 0), &ShipFrame::canonical());
        assert!(text.starts_with("Right: +X Forward: +Y Up: +Z Zag: +W."));
        assert!(text.contains("forward: Triangle"));
        assert!(text.contains("backward: wall"));
        assert!(text.contains("right: Alarm"));
        assert!(text.contains("left: wall"));
        assert!(text.contains("up: Law"));
        assert!(text.contains("zag: Chip"));
        assert!(text.contains("zig: wall"));
    }

    #[test]
    fn wall_entry_wording() {
        let line = describe_action(&wall_action(), true);
        assert!(line.starts_with("Starting at Snowflake. "));
        assert!(line.contains("This is the most recent location where the symbol is shown on the module."));
        assert!(line.contains("Pressing Down. New orientation: Right: +X Forward: -Z"));
        assert!(line.ends_with("Moving forward. You fly into a wall!"));
    }

    #[test]
    fn later_entries_skip_the_preamble() {
        let moved = LoggedAction {
            start_location: Location::new(0, 0, 0, 0),
            start_frame: ShipFrame::canonical(),
            location_is_identified: false,
            button: Button::Right,
            end_frame: Some(ShipFrame::canonical().rotated(Axis::positive(Dimension::X), 1)),
            outcome: ActionOutcome::Moved { to: Location::new(1, 0, 0, 0) },
        };
        let line = describe_action(&moved, false);
        assert!(line.starts_with("Pressing Right. New orientation: "));
        assert!(line.ends_with("Moving forward to Alarm."));
        assert_eq!(moved.end_location(), Location::new(1, 0, 0, 0));
    }

    #[test]
    fn target_mismatch_names_both_cells() {
        let action = LoggedAction {
            start_location: Location::new(0, 0, 0, 0),
            start_frame: ShipFrame::canonical(),
            location_is_identified: false,
            button: Button::Target,
            end_frame: None,
            outcome: ActionOutcome::NotOnTarget { expected: 80, actual: 0 },
        };
        let line = describe_action(&action, false);
        assert_eq!(line, "Pressing Target. You are not at Hourglass, you are at Snowflake!");
        assert_eq!(action.outcome.strike_reason(), Some(StrikeReason::NotOnTarget));
    }

    #[test]
    fn drain_empties_log() {
        let mut log = ActionLog::new();
        log.push(wall_action());
        log.push(wall_action());
        let transcript = log.drain_transcript();
        assert_eq!(transcript.len(), 2);
        assert!(transcript[0].starts_with("Starting at"));
        assert!(transcript[1].starts_with("Pressing Down."));
        assert!(log.is_empty());
    }
}
