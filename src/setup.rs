use crate::config::{ConfigError, PuzzleConfig};
use crate::grid::{has_adjacent_pair, Axis, Dimension, Location, CELL_COUNT, CENTER_INDEX};
use crate::orientation::ShipFrame;
use rand::seq::{index, SliceRandom};
use rand::Rng;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("no identified-node set with an adjacent pair after {attempts} attempts")]
    AdjacencyNotFound { attempts: usize },
    #[error("no free cell left for the starting location")]
    NoStartCell,
    #[error("invalid layout: {0}")]
    InvalidLayout(&'static str),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Everything the state machine needs to start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleLayout {
    pub identified: BTreeSet<usize>,
    pub targets: Vec<usize>,
    pub start: Location,
    pub frame: ShipFrame,
}

/// Builds a random layout. With 18 of 81 cells drawn, a set without any face- or
/// edge-adjacent pair is vanishingly rare, so the attempt cap only guards against
/// a broken random source.
pub fn generate_layout<R: Rng + ?Sized>(
    config: &PuzzleConfig,
    rng: &mut R,
) -> Result<PuzzleLayout, SetupError> {
    config.validate()?;

    let identified = choose_identified(config.identified_count, config.max_setup_attempts, rng)?;
    let targets = choose_targets(&identified, config.target_count, rng);
    let start = choose_start(&identified, rng).ok_or(SetupError::NoStartCell)?;
    let frame = scrambled_frame(config.scramble_rotations, rng);

    Ok(PuzzleLayout {
        identified,
        targets,
        start,
        frame,
    })
}

pub fn choose_identified<R: Rng + ?Sized>(
    count: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<BTreeSet<usize>, SetupError> {
    for attempt in 1..=max_attempts {
        let candidate: BTreeSet<usize> = index::sample(rng, CELL_COUNT, count).into_iter().collect();
        if has_adjacent_pair(&candidate) {
            if attempt > 1 {
                log::debug!("identified nodes accepted after {attempt} attempts");
            }
            return Ok(candidate);
        }
    }
    log::warn!("gave up placing identified nodes after {max_attempts} attempts");
    Err(SetupError::AdjacencyNotFound {
        attempts: max_attempts,
    })
}

/// Draws targets in visiting order, never the center or an identified cell.
pub fn choose_targets<R: Rng + ?Sized>(
    identified: &BTreeSet<usize>,
    count: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..CELL_COUNT)
        .filter(|index| *index != CENTER_INDEX && !identified.contains(index))
        .collect();
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

pub fn choose_start<R: Rng + ?Sized>(identified: &BTreeSet<usize>, rng: &mut R) -> Option<Location> {
    let free: Vec<usize> = (0..CELL_COUNT)
        .filter(|index| !identified.contains(index))
        .collect();
    free.choose(rng).map(|&index| Location::from_index(index))
}

/// Applies random turns to the canonical frame: any dimension, random sign and
/// parity. A turn along the forwards dimension just resets forwards.
pub fn scrambled_frame<R: Rng + ?Sized>(rotations: usize, rng: &mut R) -> ShipFrame {
    let mut frame = ShipFrame::canonical();
    for _ in 0..rotations {
        frame = scramble_step(frame, rng);
    }
    frame
}

fn scramble_step<R: Rng + ?Sized>(frame: ShipFrame, rng: &mut R) -> ShipFrame {
    let dimension = Dimension::ALL[rng.gen_range(0..Dimension::ALL.len())];
    let sign = if rng.gen_bool(0.5) { -1 } else { 1 };
    let parity = if rng.gen_bool(0.5) { -1 } else { 1 };
    frame.swung(Axis::new(dimension, sign), parity)
}
