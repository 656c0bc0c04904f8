use crate::grid::{Location, CELL_COUNT};

/// Symbol shown for each grid index. Rows of nine cover one (y, w) slice, three
/// slices per w layer.
pub const SYMBOL_NAMES: [&str; CELL_COUNT] = [
    "Snowflake", "Alarm", "Animation", "Law", "Lightning", "Bomb", "Book", "Bookmark", "Shutter",
    "Triangle", "Hanger", "Pawn", "Circle", "Cookie", "Crop", "Corners", "Crown", "Cyclone",
    "Database", "Diamond", "Server", "Leaf", "Compass", "Sigma", "Grid", "Cross", "Hexagon",

    "Chip", "Ring", "Drop", "Cube", "Cloud", "Command", "Heart monitor", "Anchor", "Medal",
    "Lock", "Crossing", "Moon", "Globe", "Heart", "Link", "Eye", "Feather", "Flag",
    "Chart", "Umbrella", "Wind", "Shield", "Star", "Sun", "Quarter", "Radio", "Gear",

    "Trophy", "Plane", "Target", "Ball", "Omega", "Send", "Tag", "Science", "School",
    "Rocket", "Power", "Planet", "Pentagon", "Palette", "Brain", "Arrow", "Reticule", "Note",
    "Fire", "Fan", "Map", "Cocktail", "Bulb", "Key", "Pin", "Pen", "Hourglass",
];

pub fn symbol_name(index: usize) -> &'static str {
    SYMBOL_NAMES.get(index).copied().unwrap_or("?")
}

pub fn symbol_at(location: Location) -> &'static str {
    if location.is_in_bounds() {
        symbol_name(location.to_index())
    } else {
        "?"
    }
}

pub fn index_of_symbol(name: &str) -> Option<usize> {
    SYMBOL_NAMES
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CENTER_INDEX;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let unique: HashSet<_> = SYMBOL_NAMES.iter().collect();
        assert_eq!(unique.len(), CELL_COUNT);
    }

    #[test]
    fn lookups() {
        assert_eq!(symbol_name(0), "Snowflake");
        assert_eq!(symbol_name(CENTER_INDEX), "Heart");
        assert_eq!(symbol_name(80), "Hourglass");
        assert_eq!(symbol_name(81), "?");
        assert_eq!(symbol_at(Location::new(1, 1, 1, 1)), "Heart");
        assert_eq!(symbol_at(Location::new(-1, 0, 0, 0)), "?");
        assert_eq!(index_of_symbol("heart monitor"), Some(33));
    }
}
