use serde::{Deserialize, Serialize};
use std::fmt;

pub const GRID_SIZE: i32 = 3;
pub const CELL_COUNT: usize = 81;
/// Index of (1, 1, 1, 1).
pub const CENTER_INDEX: usize = 40;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    X,
    Y,
    Z,
    W,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [Dimension::X, Dimension::Y, Dimension::Z, Dimension::W];

    pub fn from_index(index: usize) -> Option<Dimension> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::X => "X",
            Dimension::Y => "Y",
            Dimension::Z => "Z",
            Dimension::W => "W",
        };
        f.write_str(name)
    }
}

/// A directed axis in grid space. `sign` is always -1 or +1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Axis {
    pub dimension: Dimension,
    pub sign: i32,
}

impl Axis {
    pub const fn new(dimension: Dimension, sign: i32) -> Self {
        Self { dimension, sign }
    }

    pub const fn positive(dimension: Dimension) -> Self {
        Self::new(dimension, 1)
    }

    pub fn reversed(self) -> Self {
        Self::new(self.dimension, -self.sign)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.sign < 0 { '-' } else { '+' };
        write!(f, "{sign}{}", self.dimension)
    }
}

/// A cell of the 3x3x3x3 grid. Coordinates may temporarily leave `0..=2`
/// when produced by a neighbor lookup; check with [`Location::is_in_bounds`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
}

impl Location {
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { x, y, z, w }
    }

    pub fn to_index(self) -> usize {
        debug_assert!(self.is_in_bounds(), "encoding out-of-grid location {self}");
        (((self.w * GRID_SIZE + self.y) * GRID_SIZE + self.z) * GRID_SIZE + self.x) as usize
    }

    /// Inverse of [`Location::to_index`]: x is the fastest-varying digit, then z, y, w.
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < CELL_COUNT, "grid index {index} out of range");
        let size = GRID_SIZE as usize;
        let mut rest = index;
        let x = rest % size;
        rest /= size;
        let z = rest % size;
        rest /= size;
        let y = rest % size;
        let w = rest / size;
        Self::new(x as i32, y as i32, z as i32, w as i32)
    }

    pub fn coord(self, dimension: Dimension) -> i32 {
        match dimension {
            Dimension::X => self.x,
            Dimension::Y => self.y,
            Dimension::Z => self.z,
            Dimension::W => self.w,
        }
    }

    pub fn with_coord(mut self, dimension: Dimension, value: i32) -> Self {
        match dimension {
            Dimension::X => self.x = value,
            Dimension::Y => self.y = value,
            Dimension::Z => self.z = value,
            Dimension::W => self.w = value,
        }
        self
    }

    pub fn offset(self, axis: Axis) -> Self {
        self.with_coord(axis.dimension, self.coord(axis.dimension) + axis.sign)
    }

    pub fn is_in_bounds(self) -> bool {
        Dimension::ALL
            .iter()
            .all(|&dimension| (0..GRID_SIZE).contains(&self.coord(dimension)))
    }

    pub fn abs_diff(self, other: Location) -> [i32; 4] {
        Dimension::ALL.map(|dimension| (self.coord(dimension) - other.coord(dimension)).abs())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Adjacency {
    /// One coordinate differs by 1.
    Face,
    /// Two coordinates differ by 1 each.
    Edge,
}

pub fn adjacency(a: Location, b: Location) -> Option<Adjacency> {
    let diffs = a.abs_diff(b);
    let zeros = diffs.iter().filter(|&&d| d == 0).count();
    let ones = diffs.iter().filter(|&&d| d == 1).count();
    match (zeros, ones) {
        (3, 1) => Some(Adjacency::Face),
        (2, 2) => Some(Adjacency::Edge),
        _ => None,
    }
}

/// True if the set holds two distinct non-center indices that are face- or edge-adjacent.
pub fn has_adjacent_pair<'a, I>(indices: I) -> bool
where
    I: IntoIterator<Item = &'a usize>,
{
    let cells: Vec<Location> = indices
        .into_iter()
        .filter(|&&index| index != CENTER_INDEX)
        .map(|&index| Location::from_index(index))
        .collect();

    cells.iter().enumerate().any(|(i, &a)| {
        cells[i + 1..]
            .iter()
            .any(|&b| adjacency(a, b).is_some())
    })
}
