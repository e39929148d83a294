//! Error taxonomy for the simulation core.
//!
//! Everything here is recoverable at the boundary that detects it: a failed
//! spin leaves the wallet untouched, a rejected symbol array leaves the grid
//! unchanged, and an unresolvable match simply executes no attacks.

use thiserror::Error;

use crate::engine::turn::TurnPhase;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Spin was refused because the wallet could not cover the cost.
    /// No state was mutated.
    #[error("not enough gold to spin: need {needed}, have {available}")]
    InsufficientGold { needed: u32, available: u32 },

    /// A symbol array of the wrong length was offered to the grid.
    /// Rejected before any cell is written.
    #[error("expected {expected} symbols for the grid, got {actual}")]
    SymbolCountMismatch { expected: usize, actual: usize },

    /// A coordinate outside the fixed grid geometry.
    #[error("cell ({row}, {col}) is outside the grid")]
    CellOutOfRange { row: usize, col: usize },

    /// A roster slot index beyond the roster's fixed capacity.
    #[error("roster slot {slot} is out of range (capacity {capacity})")]
    SlotOutOfRange { slot: usize, capacity: usize },

    /// The engine was asked to spin outside a spin phase.
    #[error("cannot spin during the {0:?} phase")]
    OutOfPhase(TurnPhase),
}
