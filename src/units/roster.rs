//! Fixed-capacity ordered roster of optional combatants.

use serde::{Deserialize, Serialize};

use crate::core::config::UnitConfig;
use crate::error::EngineError;
use crate::grid::types::Archetype;
use crate::units::types::{Combatant, Row};

/// One side's deck: a fixed number of position slots, each optionally
/// holding a combatant. The front/back classification per slot comes from
/// external configuration and outlives any occupant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    slots: Vec<Option<Combatant>>,
    layout: Vec<Row>,
}

impl Roster {
    pub fn new(layout: &[Row]) -> Self {
        Self {
            slots: vec![None; layout.len()],
            layout: layout.to_vec(),
        }
    }

    pub fn max_size(&self) -> usize {
        self.slots.len()
    }

    pub fn unit_at(&self, slot: usize) -> Option<&Combatant> {
        self.slots.get(slot).and_then(|s| s.as_ref())
    }

    pub fn unit_at_mut(&mut self, slot: usize) -> Option<&mut Combatant> {
        self.slots.get_mut(slot).and_then(|s| s.as_mut())
    }

    /// Spawns a combatant into a slot from its configuration record,
    /// replacing any previous occupant. Stats reset to config defaults.
    pub fn set_unit(&mut self, slot: usize, config: &UnitConfig) -> Result<(), EngineError> {
        if slot >= self.slots.len() {
            return Err(EngineError::SlotOutOfRange {
                slot,
                capacity: self.slots.len(),
            });
        }
        let row = self.layout[slot];
        self.slots[slot] = Some(Combatant::from_config(config, row));
        Ok(())
    }

    /// Removes a slot's occupant entirely (distinct from death, which keeps
    /// the combatant in place).
    pub fn clear_slot(&mut self, slot: usize) {
        if let Some(entry) = self.slots.get_mut(slot) {
            *entry = None;
        }
    }

    /// Populated slots in roster order.
    pub fn iter_units(&self) -> impl Iterator<Item = (usize, &Combatant)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|u| (i, u)))
    }

    /// Living combatants in roster order.
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, &Combatant)> {
        self.iter_units().filter(|(_, u)| u.is_alive())
    }

    pub fn living_count(&self) -> usize {
        self.iter_alive().count()
    }

    /// True when every occupant (if any) is dead.
    pub fn all_dead(&self) -> bool {
        self.iter_units().all(|(_, u)| !u.is_alive())
    }

    /// Distinct archetypes among living combatants, in `Archetype::ALL`
    /// order so distribution iteration stays stable.
    pub fn distinct_alive_archetypes(&self) -> Vec<Archetype> {
        Archetype::ALL
            .into_iter()
            .filter(|a| self.iter_alive().any(|(_, u)| u.archetype == *a))
            .collect()
    }

    /// Slot index of the living unit with the lowest current health.
    ///
    /// Linear scan replacing the running best only on a strictly lower
    /// value, so equal-health ties keep the earliest index. Callers must
    /// re-acquire after every attack in case the target died.
    pub fn lowest_health_target(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (slot, unit) in self.iter_alive() {
            match best {
                Some((_, health)) if unit.current_health < health => {
                    best = Some((slot, unit.current_health));
                }
                None => best = Some((slot, unit.current_health)),
                _ => {}
            }
        }
        best.map(|(slot, _)| slot)
    }
}
