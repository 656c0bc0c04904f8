use crate::grid::CELL_COUNT;
use std::str::FromStr;
use thiserror::Error;

pub const ENV_IDENTIFIED: &str = "FOUR_D_TUNNELS_IDENTIFIED";
pub const ENV_TARGETS: &str = "FOUR_D_TUNNELS_TARGETS";
pub const ENV_SCRAMBLE: &str = "FOUR_D_TUNNELS_SCRAMBLE";
pub const ENV_MAX_ATTEMPTS: &str = "FOUR_D_TUNNELS_MAX_ATTEMPTS";
pub const ENV_SEED: &str = "FOUR_D_TUNNELS_SEED";
pub const ENV_STEP_DELAY_MS: &str = "FOUR_D_TUNNELS_STEP_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("need at least one target node")]
    NoTargets,
    #[error("need at least two identified nodes to place an adjacent pair, got {0}")]
    TooFewIdentified(usize),
    #[error("{identified} identified + {targets} target nodes do not fit in the {available} non-center cells")]
    TooManyNodes {
        identified: usize,
        targets: usize,
        available: usize,
    },
    #[error("max setup attempts must be at least 1")]
    NoSetupAttempts,
    #[error("invalid value {value:?} for {name}")]
    InvalidEnv { name: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleConfig {
    pub identified_count: usize,
    pub target_count: usize,
    pub scramble_rotations: usize,
    pub max_setup_attempts: usize,
    pub seed: Option<u64>,
    /// Pause between the steps of a scripted move.
    pub step_delay_ms: u64,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl PuzzleConfig {
    pub fn with_defaults() -> Self {
        Self {
            identified_count: 18,
            target_count: 3,
            scramble_rotations: 4,
            max_setup_attempts: 10_000,
            seed: None,
            step_delay_ms: 200,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_defaults().apply_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides from any name -> value lookup; blank values are ignored.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = read_var(&lookup, ENV_IDENTIFIED)? {
            self.identified_count = value;
        }
        if let Some(value) = read_var(&lookup, ENV_TARGETS)? {
            self.target_count = value;
        }
        if let Some(value) = read_var(&lookup, ENV_SCRAMBLE)? {
            self.scramble_rotations = value;
        }
        if let Some(value) = read_var(&lookup, ENV_MAX_ATTEMPTS)? {
            self.max_setup_attempts = value;
        }
        if let Some(value) = read_var(&lookup, ENV_SEED)? {
            self.seed = Some(value);
        }
        if let Some(value) = read_var(&lookup, ENV_STEP_DELAY_MS)? {
            self.step_delay_ms = value;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_count == 0 {
            return Err(ConfigError::NoTargets);
        }
        if self.identified_count < 2 {
            return Err(ConfigError::TooFewIdentified(self.identified_count));
        }
        // The center may be identified but never a target, and the start needs a free cell.
        let available = CELL_COUNT - 1;
        if self.identified_count + self.target_count > available {
            return Err(ConfigError::TooManyNodes {
                identified: self.identified_count,
                targets: self.target_count,
                available,
            });
        }
        if self.max_setup_attempts == 0 {
            return Err(ConfigError::NoSetupAttempts);
        }
        Ok(())
    }
}

fn read_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnv {
            name,
            value: trimmed.to_string(),
        })
}
