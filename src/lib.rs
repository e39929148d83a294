//! Reelbound - simulation core for a slot-grid deck-building combat game.
//!
//! The crate models one battle: a 3x3 symbol grid whose spin outcome is
//! driven by the rosters on both sides, a pattern-matching engine that turns
//! grid outcomes into combat triggers, a phase-based turn engine, and a
//! stacked, timed status-effect ledger. Rendering, input, and content
//! pipelines live outside this crate; the engine only emits events.

pub mod core;
pub mod economy;
pub mod effects;
pub mod engine;
pub mod error;
pub mod generator;
pub mod grid;
pub mod save;
pub mod units;

pub use crate::core::config::GameConfig;
pub use crate::economy::{Economy, Wallet};
pub use crate::engine::events::{EngineEvent, Side};
pub use crate::engine::turn::{TurnEngine, TurnPhase};
pub use crate::error::EngineError;
pub use crate::grid::types::{Archetype, SlotGrid, Symbol};
pub use crate::units::roster::Roster;
pub use crate::units::types::Combatant;
