// Grid geometry (fixed for the lifetime of a session)
pub const GRID_ROWS: usize = 3;
pub const GRID_COLS: usize = 3;
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLS;

// Symbol distribution
// Base probability mass reserved for Empty; the rest is split evenly across
// the distinct living archetypes. If the even split falls below the minimum,
// the empty weight shrinks toward its hard floor until the minimum fits.
pub const EMPTY_WEIGHT: f64 = 0.35;
pub const MIN_ARCHETYPE_WEIGHT: f64 = 0.15;
pub const EMPTY_WEIGHT_FLOOR: f64 = 0.1;

// Spin economy
pub const BASE_SPIN_COST: u32 = 10;
pub const SPIN_COST_STEP: u32 = 5;
pub const FIRST_SPIN_FREE: bool = true;

// Match rewards: gold per non-single match, by pattern type
pub const REWARD_HORIZONTAL: u32 = 10;
pub const REWARD_VERTICAL: u32 = 10;
pub const REWARD_DIAGONAL: u32 = 15;
pub const REWARD_ZIGZAG: u32 = 25;
pub const REWARD_X_SHAPE: u32 = 30;
pub const REWARD_FULL_GRID: u32 = 100;

// Combat
pub const HEALTH_EPSILON: f64 = 0.01;
pub const RESISTANCE_SCALING: f64 = 10.0;

// Status effects
pub const FULL_GRID_BLEED_MAGNITUDE: f64 = 5.0;
pub const FULL_GRID_BLEED_TURNS: u32 = 2;

// Unit configuration defaults
pub const DEFAULT_CRIT_RATE_PERCENT: f64 = 5.0;
pub const DEFAULT_CRIT_MULTIPLIER_PERCENT: f64 = 150.0;
