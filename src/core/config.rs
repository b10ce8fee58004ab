//! Game configuration.
//!
//! Front ends build a `GameConfig` (or deserialize one from their settings
//! file) and hand it to `GameEngine::with_config`. The engine validates it
//! before any state is created.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Board dimension used when none is configured.
pub const DEFAULT_DIMENSION: usize = 5;

/// Largest accepted board dimension. Keeps every edge and cell count far
/// from `usize` overflow.
pub const MAX_DIMENSION: usize = 1024;

/// Configuration for a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of cells along each side of the square board.
    pub dimension: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
        }
    }
}

impl GameConfig {
    /// Create a configuration for an `dimension`×`dimension` board.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    /// Set the board dimension.
    #[must_use]
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Check that the configuration describes a playable board, with a
    /// dimension in `1..=MAX_DIMENSION`.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(1..=MAX_DIMENSION).contains(&self.dimension) {
            return Err(GameError::InvalidConfiguration {
                dimension: self.dimension,
            });
        }
        Ok(())
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.dimension.saturating_mul(self.dimension)
    }
}
