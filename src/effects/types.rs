use serde::{Deserialize, Serialize};

/// Resolution timing class: which sweep advances an effect's countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectTrigger {
    /// Counted down (and ticked, for damage/heal effects) when a new round
    /// begins.
    StartOfRound,
    /// Counted down when the owning side's turn resolves.
    TurnResolve,
}

/// Classification of a status effect. Buckets a combatant's stacked
/// instances; each type belongs to exactly one trigger class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectType {
    /// Damage over time, dealt at the start of each round.
    Bleed,
    /// Healing over time, applied at the start of each round.
    Regen,
    /// Flat attack bonus while active.
    AttackUp,
    /// Flat attack penalty while active.
    Weaken,
}

impl EffectType {
    pub const ALL: [EffectType; 4] = [
        EffectType::Bleed,
        EffectType::Regen,
        EffectType::AttackUp,
        EffectType::Weaken,
    ];

    pub fn trigger(&self) -> EffectTrigger {
        match self {
            EffectType::Bleed | EffectType::Regen => EffectTrigger::StartOfRound,
            EffectType::AttackUp | EffectType::Weaken => EffectTrigger::TurnResolve,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EffectType::Bleed => "Bleed",
            EffectType::Regen => "Regen",
            EffectType::AttackUp => "Attack Up",
            EffectType::Weaken => "Weaken",
        }
    }
}

/// How long an instance lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectDuration {
    /// Counts down one step per matching resolve; dropped at zero.
    Turns(u32),
    /// Ignored by resolve countdowns; removed only by the end-of-round
    /// sweep owned by the turn engine.
    ThisRoundOnly,
}

/// One stacked application of an effect. Owned by exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectInstance {
    pub magnitude: f64,
    pub remaining: EffectDuration,
}
