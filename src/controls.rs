use crate::grid::Axis;
use crate::orientation::ShipFrame;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Up,
    Right,
    Down,
    Left,
    Zig,
    Zag,
    Target,
}

impl Button {
    pub const DIRECTIONAL: [Button; 6] = [
        Button::Up,
        Button::Right,
        Button::Down,
        Button::Left,
        Button::Zig,
        Button::Zag,
    ];

    /// The `(toward, parity)` pair this button feeds into [`ShipFrame::rotated`],
    /// read from the frame at press time. `None` for the target button.
    pub fn rotation(self, frame: &ShipFrame) -> Option<(Axis, i32)> {
        let rotation = match self {
            Button::Left => (frame.right.reversed(), -1),
            Button::Right => (frame.right, 1),
            Button::Up => (frame.up, 1),
            Button::Down => (frame.up.reversed(), -1),
            Button::Zig => (frame.zag.reversed(), -1),
            Button::Zag => (frame.zag, 1),
            Button::Target => return None,
        };
        Some(rotation)
    }

    pub fn rotate(self, frame: ShipFrame) -> Option<ShipFrame> {
        self.rotation(&frame)
            .map(|(toward, parity)| frame.rotated(toward, parity))
    }

    pub fn is_directional(self) -> bool {
        self != Button::Target
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Directions as seen from inside the ship.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocalDirection {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
    Zig,
    Zag,
}

impl LocalDirection {
    pub const ALL: [LocalDirection; 8] = [
        LocalDirection::Forward,
        LocalDirection::Backward,
        LocalDirection::Left,
        LocalDirection::Right,
        LocalDirection::Up,
        LocalDirection::Down,
        LocalDirection::Zig,
        LocalDirection::Zag,
    ];

    pub fn axis(self, frame: &ShipFrame) -> Axis {
        match self {
            LocalDirection::Forward => frame.forwards,
            LocalDirection::Backward => frame.forwards.reversed(),
            LocalDirection::Left => frame.right.reversed(),
            LocalDirection::Right => frame.right,
            LocalDirection::Up => frame.up,
            LocalDirection::Down => frame.up.reversed(),
            LocalDirection::Zig => frame.zag.reversed(),
            LocalDirection::Zag => frame.zag,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LocalDirection::Forward => "forward",
            LocalDirection::Backward => "backward",
            LocalDirection::Left => "left",
            LocalDirection::Right => "right",
            LocalDirection::Up => "up",
            LocalDirection::Down => "down",
            LocalDirection::Zig => "zig",
            LocalDirection::Zag => "zag",
        }
    }
}
