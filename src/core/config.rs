//! Externally-supplied configuration records.
//!
//! Unit definitions, the match reward table, and the spin economy tuning are
//! authored outside this crate and loaded as opaque records. Defaults mirror
//! the constants module so tests and tools can run without a config file.

use serde::{Deserialize, Serialize};

use crate::core::constants::*;
use crate::grid::patterns::MatchType;
use crate::grid::types::Archetype;

/// Immutable stat block for one combatant, set once at spawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitConfig {
    pub name: String,
    pub archetype: Archetype,
    pub max_health: f64,
    pub attack: f64,
    #[serde(default)]
    pub shield: f64,
    #[serde(default)]
    pub resistance: f64,
    #[serde(default = "default_crit_rate")]
    pub crit_rate_percent: f64,
    #[serde(default = "default_crit_multiplier")]
    pub crit_multiplier_percent: f64,
}

fn default_crit_rate() -> f64 {
    DEFAULT_CRIT_RATE_PERCENT
}

fn default_crit_multiplier() -> f64 {
    DEFAULT_CRIT_MULTIPLIER_PERCENT
}

/// Tuning for the symbol distribution and the per-turn spin price curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinTuning {
    pub empty_weight: f64,
    pub min_archetype_weight: f64,
    pub empty_weight_floor: f64,
    pub base_spin_cost: u32,
    pub spin_cost_step: u32,
    pub first_spin_free: bool,
}

impl Default for SpinTuning {
    fn default() -> Self {
        Self {
            empty_weight: EMPTY_WEIGHT,
            min_archetype_weight: MIN_ARCHETYPE_WEIGHT,
            empty_weight_floor: EMPTY_WEIGHT_FLOOR,
            base_spin_cost: BASE_SPIN_COST,
            spin_cost_step: SPIN_COST_STEP,
            first_spin_free: FIRST_SPIN_FREE,
        }
    }
}

/// Gold paid out per non-single match, keyed by pattern type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardTable {
    pub horizontal: u32,
    pub vertical: u32,
    pub diagonal: u32,
    pub zigzag: u32,
    pub x_shape: u32,
    pub full_grid: u32,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            horizontal: REWARD_HORIZONTAL,
            vertical: REWARD_VERTICAL,
            diagonal: REWARD_DIAGONAL,
            zigzag: REWARD_ZIGZAG,
            x_shape: REWARD_X_SHAPE,
            full_grid: REWARD_FULL_GRID,
        }
    }
}

impl RewardTable {
    /// Single matches are informational and never pay out.
    pub fn gold_for(&self, match_type: MatchType) -> u32 {
        match match_type {
            MatchType::Single => 0,
            MatchType::Horizontal => self.horizontal,
            MatchType::Vertical => self.vertical,
            MatchType::Diagonal => self.diagonal,
            MatchType::Zigzag => self.zigzag,
            MatchType::XShape => self.x_shape,
            MatchType::FullGrid => self.full_grid,
        }
    }
}

/// Top-level configuration handed to the turn engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub spin: SpinTuning,
    pub rewards: RewardTable,
}

impl GameConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
