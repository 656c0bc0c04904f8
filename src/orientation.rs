use crate::grid::{Axis, Dimension, Location, GRID_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ship-relative frame. The four axes always cover X, Y, Z and W exactly once,
/// each with an independent sign.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipFrame {
    pub right: Axis,
    pub forwards: Axis,
    pub up: Axis,
    pub zag: Axis,
}

impl Default for ShipFrame {
    fn default() -> Self {
        Self::canonical()
    }
}

impl ShipFrame {
    pub const fn canonical() -> Self {
        Self {
            right: Axis::positive(Dimension::X),
            forwards: Axis::positive(Dimension::Y),
            up: Axis::positive(Dimension::Z),
            zag: Axis::positive(Dimension::W),
        }
    }

    /// Turns the ship 90 degrees in the plane spanned by the current forwards axis
    /// and `toward`, so that `toward` becomes the new forwards. Whichever of
    /// right/up/zag held `toward`'s dimension takes over the old forwards dimension,
    /// with sign `-old_forwards.sign * parity`.
    ///
    /// `toward` must not share the forwards dimension; the six buttons never do.
    pub fn rotated(self, toward: Axis, parity: i32) -> Self {
        debug_assert_ne!(
            toward.dimension, self.forwards.dimension,
            "rotation toward the forwards dimension is degenerate"
        );
        self.swung(toward, parity)
    }

    /// Same substitution as [`ShipFrame::rotated`] without the precondition. Heading
    /// along the forwards dimension only replaces forwards, which may flip its sign.
    pub fn swung(self, toward: Axis, parity: i32) -> Self {
        let old_forwards = self.forwards;
        let swing = |axis: Axis| {
            if axis.dimension == toward.dimension {
                Axis::new(old_forwards.dimension, -old_forwards.sign * parity)
            } else {
                axis
            }
        };
        Self {
            right: swing(self.right),
            forwards: toward,
            up: swing(self.up),
            zag: swing(self.zag),
        }
    }

    pub fn axes(&self) -> [Axis; 4] {
        [self.right, self.forwards, self.up, self.zag]
    }

    pub fn is_valid(&self) -> bool {
        let mut seen = [false; 4];
        for axis in self.axes() {
            if axis.sign.abs() != 1 {
                return false;
            }
            let slot = &mut seen[axis.dimension as usize];
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }

    pub fn neighbor_at(&self, axis: Axis, location: Location) -> Location {
        location.offset(axis)
    }

    pub fn is_wall(&self, axis: Axis, location: Location) -> bool {
        let shifted = location.coord(axis.dimension) + axis.sign;
        !(0..GRID_SIZE).contains(&shifted)
    }

    pub fn move_forward(&self, location: Location) -> Location {
        debug_assert!(!self.is_wall(self.forwards, location));
        self.neighbor_at(self.forwards, location)
    }
}

impl fmt::Display for ShipFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Right: {} Forward: {} Up: {} Zag: {}",
            self.right, self.forwards, self.up, self.zag
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::Button;

    fn frame(right: Axis, forwards: Axis, up: Axis, zag: Axis) -> ShipFrame {
        ShipFrame { right, forwards, up, zag }
    }

    fn press_all(mut frame: ShipFrame, buttons: &[Button]) -> ShipFrame {
        for &button in buttons {
            frame = button.rotate(frame).unwrap_or(frame);
        }
        frame
    }

    #[test]
    fn right_turn_from_canonical() {
        let turned = ShipFrame::canonical().rotated(Axis::positive(Dimension::X), 1);
        assert_eq!(
            turned,
            frame(
                Axis::new(Dimension::Y, -1),
                Axis::positive(Dimension::X),
                Axis::positive(Dimension::Z),
                Axis::positive(Dimension::W),
            )
        );
    }

    #[test]
    fn rotation_only_touches_matching_axis() {
        let start = ShipFrame::canonical();
        let turned = start.rotated(Axis::new(Dimension::W, -1), -1);
        assert_eq!(turned.right, start.right);
        assert_eq!(turned.up, start.up);
        assert_eq!(turned.forwards, Axis::new(Dimension::W, -1));
        assert_eq!(turned.zag, Axis::positive(Dimension::Y));
    }

    #[test]
    fn frames_stay_permutations() {
        // Every sequence of up to five presses.
        let buttons = Button::DIRECTIONAL;
        let mut frontier = vec![ShipFrame::canonical()];
        for _ in 0..5 {
            let mut next = Vec::with_capacity(frontier.len() * buttons.len());
            for f in &frontier {
                for button in buttons {
                    let turned = press_all(*f, &[button]);
                    assert!(turned.is_valid(), "{turned} after {button:?}");
                    next.push(turned);
                }
            }
            frontier = next;
        }
    }

    #[test]
    fn opposite_presses_cancel() {
        let pairs = [
            (Button::Right, Button::Left),
            (Button::Left, Button::Right),
            (Button::Up, Button::Down),
            (Button::Down, Button::Up),
            (Button::Zag, Button::Zig),
            (Button::Zig, Button::Zag),
        ];
        let start = press_all(ShipFrame::canonical(), &[Button::Up, Button::Zag, Button::Left]);
        for (first, second) in pairs {
            let there = press_all(start, &[first]);
            assert_ne!(there.forwards, start.forwards);
            assert_eq!(press_all(there, &[second]), start, "{first:?} then {second:?}");
        }
    }

    #[test]
    fn four_turns_return_home() {
        for button in Button::DIRECTIONAL {
            let start = ShipFrame::canonical();
            assert_eq!(press_all(start, &[button; 4]), start, "{button:?} x4");
        }
    }

    #[test]
    fn turns_do_not_commute() {
        let right_then_up = press_all(ShipFrame::canonical(), &[Button::Right, Button::Up]);
        let up_then_right = press_all(ShipFrame::canonical(), &[Button::Up, Button::Right]);

        assert_eq!(
            right_then_up,
            frame(
                Axis::new(Dimension::Y, -1),
                Axis::positive(Dimension::Z),
                Axis::new(Dimension::X, -1),
                Axis::positive(Dimension::W),
            )
        );
        assert_eq!(
            up_then_right,
            frame(
                Axis::new(Dimension::Z, -1),
                Axis::positive(Dimension::X),
                Axis::new(Dimension::Y, -1),
                Axis::positive(Dimension::W),
            )
        );
    }

    #[test]
    fn wall_matches_bounds() {
        let f = ShipFrame::canonical();
        for dimension in Dimension::ALL {
            for value in 0..GRID_SIZE {
                let location = Location::default().with_coord(dimension, value);
                assert_eq!(f.is_wall(Axis::new(dimension, -1), location), value == 0);
                assert_eq!(f.is_wall(Axis::new(dimension, 1), location), value == GRID_SIZE - 1);
                for other in Dimension::ALL.into_iter().filter(|&d| d != dimension) {
                    assert!(f.is_wall(Axis::new(other, -1), location));
                    assert!(!f.is_wall(Axis::new(other, 1), location));
                }
            }
        }
    }

    #[test]
    fn swing_along_forwards_only_replaces_forwards() {
        let start = ShipFrame::canonical();
        let flipped = start.swung(Axis::new(Dimension::Y, -1), 1);
        assert_eq!(flipped.forwards, Axis::new(Dimension::Y, -1));
        assert_eq!(flipped.right, start.right);
        assert_eq!(flipped.up, start.up);
        assert_eq!(flipped.zag, start.zag);
        assert!(flipped.is_valid());
        assert_eq!(start.swung(Axis::positive(Dimension::X), 1), start.rotated(Axis::positive(Dimension::X), 1));
    }

    #[test]
    fn neighbor_is_unclamped() {
        let f = ShipFrame::canonical();
        let origin = Location::default();
        assert_eq!(f.neighbor_at(Axis::new(Dimension::Y, -1), origin), Location::new(0, -1, 0, 0));
        assert_eq!(f.move_forward(origin), Location::new(0, 1, 0, 0));
    }
}
