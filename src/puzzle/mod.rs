use crate::action_log::{describe_orientation, ActionLog, ActionOutcome, LoggedAction, StrikeReason};
use crate::config::PuzzleConfig;
use crate::controls::{Button, LocalDirection};
use crate::grid::{Location, CELL_COUNT, CENTER_INDEX};
use crate::orientation::ShipFrame;
use crate::setup::{generate_layout, PuzzleLayout, SetupError};
use crate::symbols::{symbol_at, symbol_name};
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeSet;


#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum PuzzleStatus {
    Active,
    Solved,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StrikeReport {
    pub reason: StrikeReason,
    /// Every press since the log was last cleared, oldest first.
    pub transcript: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum PressOutcome {
    /// The puzzle is already solved.
    Ignored,
    Moved { to: Location },
    TargetIdentified { next_target: usize },
    Solved,
    Strike(StrikeReport),
}

impl PressOutcome {
    pub fn is_strike(&self) -> bool {
        matches!(self, PressOutcome::Strike(_))
    }
}

/// What the module face shows for the current state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub forward_wall: bool,
    pub left_wall: bool,
    pub right_wall: bool,
    pub up_wall: bool,
    pub down_wall: bool,
    pub zig_wall: bool,
    pub zag_wall: bool,
    pub symbol_visible: bool,
    pub symbol: &'static str,
    pub target_symbol: Option<&'static str>,
}

#[derive(Clone, Debug)]
pub struct Puzzle {
    id: u32,
    location: Location,
    frame: ShipFrame,
    identified: BTreeSet<usize>,
    targets: Vec<usize>,
    current_target: usize,
    status: PuzzleStatus,
    log: ActionLog,
}

impl Puzzle {
    /// Builds a puzzle from an explicit layout. Only structural checks run here: a
    /// hand-built layout may start on an identified cell or lack an adjacent
    /// identified pair. [`Puzzle::generate`] is the path that guarantees both.
    pub fn new(id: u32, layout: PuzzleLayout) -> Result<Self, SetupError> {
        validate_layout(&layout)?;
        Ok(Self {
            id,
            location: layout.start,
            frame: layout.frame,
            identified: layout.identified,
            targets: layout.targets,
            current_target: 0,
            status: PuzzleStatus::Active,
            log: ActionLog::new(),
        })
    }

    pub fn generate<R: Rng + ?Sized>(
        id: u32,
        config: &PuzzleConfig,
        rng: &mut R,
    ) -> Result<Self, SetupError> {
        let puzzle = Self::new(id, generate_layout(config, rng)?)?;
        puzzle.log_setup();
        Ok(puzzle)
    }

    fn tag(&self) -> String {
        format!("[4D Tunnels #{}]", self.id)
    }

    fn log_setup(&self) {
        log::info!(
            "{} Identified nodes: {}",
            self.tag(),
            symbol_list(self.identified.iter())
        );
        log::info!("{} Target nodes: {}", self.tag(), symbol_list(self.targets.iter()));
        log::info!(
            "{} Starting at {}. {}",
            self.tag(),
            symbol_at(self.location),
            describe_orientation(self.location, &self.frame)
        );
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn frame(&self) -> ShipFrame {
        self.frame
    }

    pub fn identified(&self) -> &BTreeSet<usize> {
        &self.identified
    }

    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    pub fn current_target_index(&self) -> usize {
        self.current_target
    }

    /// Grid index of the active target, `None` once solved.
    pub fn current_target(&self) -> Option<usize> {
        match self.status {
            PuzzleStatus::Active => self.targets.get(self.current_target).copied(),
            PuzzleStatus::Solved => None,
        }
    }

    pub fn status(&self) -> PuzzleStatus {
        self.status
    }

    pub fn is_solved(&self) -> bool {
        self.status == PuzzleStatus::Solved
    }

    pub fn action_log(&self) -> &ActionLog {
        &self.log
    }

    pub fn location_is_identified(&self) -> bool {
        self.identified.contains(&self.location.to_index())
    }

    pub fn is_wall_toward(&self, direction: LocalDirection) -> bool {
        self.frame.is_wall(direction.axis(&self.frame), self.location)
    }

    pub fn display_state(&self) -> DisplayState {
        DisplayState {
            forward_wall: self.is_wall_toward(LocalDirection::Forward),
            left_wall: self.is_wall_toward(LocalDirection::Left),
            right_wall: self.is_wall_toward(LocalDirection::Right),
            up_wall: self.is_wall_toward(LocalDirection::Up),
            down_wall: self.is_wall_toward(LocalDirection::Down),
            zig_wall: self.is_wall_toward(LocalDirection::Zig),
            zag_wall: self.is_wall_toward(LocalDirection::Zag),
            symbol_visible: self.location_is_identified(),
            symbol: symbol_at(self.location),
            target_symbol: self.current_target().map(symbol_name),
        }
    }

    pub fn orientation_description(&self) -> String {
        describe_orientation(self.location, &self.frame)
    }

    /// Dispatches any of the seven buttons.
    pub fn press(&mut self, button: Button) -> PressOutcome {
        match button {
            Button::Target => self.submit_target(),
            _ => self.apply_move(button),
        }
    }

    /// Turns with `button`, then flies one cell forward under the new frame. Hitting
    /// a wall is a strike and leaves location and frame untouched.
    pub fn apply_move(&mut self, button: Button) -> PressOutcome {
        if self.is_solved() {
            return PressOutcome::Ignored;
        }
        let Some(candidate) = button.rotate(self.frame) else {
            return self.submit_target();
        };

        let start_location = self.location;
        let start_frame = self.frame;
        let location_is_identified = self.location_is_identified();
        if location_is_identified {
            self.log.clear();
        }

        let outcome = if candidate.is_wall(candidate.forwards, start_location) {
            ActionOutcome::FlewIntoWall
        } else {
            self.frame = candidate;
            self.location = candidate.move_forward(start_location);
            log::debug!("{} {}", self.tag(), self.frame);
            log::debug!(
                "{} (X, Y, Z, W) = ({}, {}, {}, {})",
                self.tag(),
                self.location.x,
                self.location.y,
                self.location.z,
                self.location.w
            );
            ActionOutcome::Moved { to: self.location }
        };

        let strike = self.record(LoggedAction {
            start_location,
            start_frame,
            location_is_identified,
            button,
            end_frame: Some(candidate),
            outcome,
        });
        match strike {
            Some(report) => PressOutcome::Strike(report),
            None => PressOutcome::Moved { to: self.location },
        }
    }

    /// Confirms the active target at the current location.
    pub fn submit_target(&mut self) -> PressOutcome {
        if self.is_solved() {
            return PressOutcome::Ignored;
        }
        let Some(expected) = self.targets.get(self.current_target).copied() else {
            return PressOutcome::Ignored;
        };

        let actual = self.location.to_index();
        let outcome = if actual == expected {
            log::info!("{} {} identified correctly.", self.tag(), symbol_name(actual));
            if self.current_target + 1 == self.targets.len() {
                log::info!("{} Module solved!", self.tag());
                self.status = PuzzleStatus::Solved;
            } else {
                self.identified.insert(actual);
                self.current_target += 1;
            }
            ActionOutcome::TargetConfirmed { index: actual }
        } else {
            ActionOutcome::NotOnTarget { expected, actual }
        };

        let strike = self.record(LoggedAction {
            start_location: self.location,
            start_frame: self.frame,
            // Only directional presses anchor the transcript at an identified cell.
            location_is_identified: false,
            button: Button::Target,
            end_frame: None,
            outcome,
        });
        if let Some(report) = strike {
            return PressOutcome::Strike(report);
        }
        match self.current_target() {
            Some(next_target) => PressOutcome::TargetIdentified { next_target },
            None => PressOutcome::Solved,
        }
    }

    /// Appends to the action log; a strike drains it into the returned report.
    fn record(&mut self, action: LoggedAction) -> Option<StrikeReport> {
        let reason = action.outcome.strike_reason();
        self.log.push(action);
        reason.map(|reason| self.report_strike(reason))
    }

    fn report_strike(&mut self, reason: StrikeReason) -> StrikeReport {
        let transcript = self.log.drain_transcript();
        log::info!("{} You got a strike. Action log:", self.tag());
        log::debug!("{} strike reason: {reason}", self.tag());
        for line in &transcript {
            log::info!("{} {}", self.tag(), line);
        }
        StrikeReport { reason, transcript }
    }
}

fn symbol_list<'a>(indices: impl Iterator<Item = &'a usize>) -> String {
    indices
        .map(|&index| symbol_name(index))
        .collect::<Vec<_>>()
        .join(", ")
}

fn validate_layout(layout: &PuzzleLayout) -> Result<(), SetupError> {
    if layout.targets.is_empty() {
        return Err(SetupError::InvalidLayout("no target nodes"));
    }
    if !layout.start.is_in_bounds() {
        return Err(SetupError::InvalidLayout("start outside the grid"));
    }
    if !layout.frame.is_valid() {
        return Err(SetupError::InvalidLayout("frame axes are not a permutation"));
    }
    if layout.identified.iter().any(|&index| index >= CELL_COUNT) {
        return Err(SetupError::InvalidLayout("identified node outside the grid"));
    }
    for (i, &target) in layout.targets.iter().enumerate() {
        if target >= CELL_COUNT || target == CENTER_INDEX {
            return Err(SetupError::InvalidLayout("target is the center or outside the grid"));
        }
        if layout.identified.contains(&target) {
            return Err(SetupError::InvalidLayout("target is already identified"));
        }
        if layout.targets[..i].contains(&target) {
            return Err(SetupError::InvalidLayout("duplicate target"));
        }
    }
    Ok(())
}
