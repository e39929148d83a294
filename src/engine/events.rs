//! Events emitted by the engine for the presentation layer.
//!
//! The engine never renders anything. UI and animation layers map these to
//! whatever they need; dropping them on the floor is also fine (the
//! simulator does exactly that).

use serde::{Deserialize, Serialize};

use crate::effects::types::EffectType;

/// Which roster is acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

/// A single observable occurrence inside the turn loop.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    // ── Spin ────────────────────────────────────────────────────
    /// A spin was paid for (cost 0 for free/enemy spins) and the grid was
    /// refilled.
    SpinStarted { side: Side, cost: u32 },

    /// Match detection finished for the current grid.
    MatchesResolved {
        side: Side,
        match_count: usize,
        gold_earned: u32,
    },

    // ── Combat ──────────────────────────────────────────────────
    /// One attack was executed against the lowest-health defender.
    UnitAttacked {
        attacker: String,
        defender: String,
        damage: f64,
        was_crit: bool,
    },

    /// A status effect was stacked onto a combatant.
    EffectApplied {
        target: String,
        effect: EffectType,
        magnitude: f64,
    },

    /// A start-of-round effect dealt damage or healed.
    EffectTick {
        target: String,
        effect: EffectType,
        amount: f64,
    },

    /// A combatant's health reached zero.
    UnitDied { side: Side, name: String },

    // ── Turn flow ───────────────────────────────────────────────
    /// One side finished its combat phase.
    TurnEnded { side: Side },

    /// Both sides acted; round-only effects were swept.
    RoundEnded { round: u32 },

    /// Every enemy occupant is dead.
    BattleWon,

    /// Every player occupant is dead.
    BattleLost,
}
