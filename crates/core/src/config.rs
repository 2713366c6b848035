//! Level size and cross-layer tuning supplied by level progression.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub width: usize,
    pub height: usize,
    pub layers: usize,
    /// Upper bound on teleportation pads (cross-layer edges) in one maze.
    pub max_cross_layer_edges: usize,
    /// A walk must take strictly more lateral steps than this since its last
    /// layer change before it may change layer again.
    pub min_lateral_run: usize,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self { width: 10, height: 10, layers: 2, max_cross_layer_edges: 11, min_lateral_run: 2 }
    }
}

/// Describes why a level configuration cannot produce a maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    ZeroDimension { width: usize, height: usize },
    NoLayers,
    /// Layers can only be joined away from the goal column, so a stacked maze
    /// needs at least two cells per layer.
    SingleCellLayers { layers: usize },
    /// Joining `layers` layers into one tree takes at least `layers - 1` pads.
    CrossLayerBudgetTooSmall { layers: usize, budget: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "maze dimensions must be positive, got {width}x{height}")
            }
            Self::NoLayers => write!(f, "maze needs at least one layer"),
            Self::SingleCellLayers { layers } => {
                write!(f, "a {layers}-layer maze needs at least two cells per layer")
            }
            Self::CrossLayerBudgetTooSmall { layers, budget } => write!(
                f,
                "a {layers}-layer maze needs a cross-layer budget of at least {}, got {budget}",
                layers - 1
            ),
        }
    }
}

impl Error for ConfigError {}

impl LevelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension { width: self.width, height: self.height });
        }
        if self.layers == 0 {
            return Err(ConfigError::NoLayers);
        }
        if self.layers > 1 && self.width * self.height < 2 {
            return Err(ConfigError::SingleCellLayers { layers: self.layers });
        }
        if self.max_cross_layer_edges + 1 < self.layers {
            return Err(ConfigError::CrossLayerBudgetTooSmall {
                layers: self.layers,
                budget: self.max_cross_layer_edges,
            });
        }
        Ok(())
    }
}
