//! Per-combatant effect ledger.
//!
//! An `EffectMap` keys one `EffectObject` per active effect type. The map
//! invariant: a key exists only while its bucket holds at least one live
//! instance; any resolve step that empties a bucket removes the key in the
//! same step, so "absent" and "expired" are the same observable state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::effects::types::{EffectDuration, EffectInstance, EffectTrigger, EffectType};

/// Ordered stack of instances for one effect type on one combatant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EffectObject {
    instances: Vec<EffectInstance>,
}

impl EffectObject {
    pub fn add(&mut self, magnitude: f64, remaining: EffectDuration) {
        self.instances.push(EffectInstance {
            magnitude,
            remaining,
        });
    }

    /// Aggregate magnitude over all live instances.
    pub fn magnitude(&self) -> f64 {
        self.instances.iter().map(|i| i.magnitude).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn stack_count(&self) -> usize {
        self.instances.len()
    }

    /// Counts down turn-based instances and drops the ones reaching zero.
    /// `ThisRoundOnly` instances are left untouched; the round sweep clears
    /// them. A no-op on an already-empty bucket.
    pub fn resolve(&mut self) {
        self.instances.retain_mut(|instance| match instance.remaining {
            EffectDuration::Turns(turns) => {
                if turns <= 1 {
                    false
                } else {
                    instance.remaining = EffectDuration::Turns(turns - 1);
                    true
                }
            }
            EffectDuration::ThisRoundOnly => true,
        });
    }

    /// Drops every `ThisRoundOnly` instance.
    pub fn sweep_round(&mut self) {
        self.instances
            .retain(|instance| instance.remaining != EffectDuration::ThisRoundOnly);
    }
}

/// All active effect buckets for one combatant, keyed by effect type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EffectMap {
    buckets: HashMap<EffectType, EffectObject>,
}

impl EffectMap {
    /// Stacks an instance into the type's bucket, creating the bucket if
    /// absent. An existing bucket is never replaced.
    pub fn add_effect(&mut self, effect: EffectType, magnitude: f64, remaining: EffectDuration) {
        self.buckets
            .entry(effect)
            .or_default()
            .add(magnitude, remaining);
    }

    /// Summed magnitude for a type; 0 when the bucket is absent.
    pub fn magnitude(&self, effect: EffectType) -> f64 {
        self.buckets.get(&effect).map_or(0.0, EffectObject::magnitude)
    }

    pub fn has(&self, effect: EffectType) -> bool {
        self.buckets.contains_key(&effect)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn active_types(&self) -> impl Iterator<Item = EffectType> + '_ {
        self.buckets.keys().copied()
    }

    /// Counts down every bucket whose type belongs to the given trigger
    /// class, removing buckets emptied by the countdown. Buckets of the
    /// other trigger class are untouched.
    pub fn resolve(&mut self, trigger: EffectTrigger) {
        self.buckets.retain(|effect, bucket| {
            if effect.trigger() == trigger {
                bucket.resolve();
            }
            !bucket.is_empty()
        });
    }

    /// End-of-round sweep for `ThisRoundOnly` instances across all buckets.
    /// Owned by the turn engine, which calls it once per completed round.
    pub fn sweep_round_effects(&mut self) {
        self.buckets.retain(|_, bucket| {
            bucket.sweep_round();
            !bucket.is_empty()
        });
    }
}
