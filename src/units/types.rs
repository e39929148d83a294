use serde::{Deserialize, Serialize};

use crate::core::config::UnitConfig;
use crate::core::constants::HEALTH_EPSILON;
use crate::effects::ledger::EffectMap;
use crate::grid::types::Archetype;

/// Front/back position classification for a roster slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Row {
    Front,
    Back,
}

/// A living (or dead) unit occupying a roster slot.
///
/// Stats are seeded from immutable configuration at spawn. Death is a state,
/// not removal: a dead combatant stays in its slot until the slot is
/// cleared, and ignores further damage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub archetype: Archetype,
    pub max_health: f64,
    pub current_health: f64,
    pub current_shield: f64,
    pub attack: f64,
    pub resistance: f64,
    pub crit_rate_percent: f64,
    pub crit_multiplier_percent: f64,
    pub row: Row,
    pub is_dead: bool,
    #[serde(default)]
    pub effects: EffectMap,
}

impl Combatant {
    pub fn from_config(config: &UnitConfig, row: Row) -> Self {
        Self {
            name: config.name.clone(),
            archetype: config.archetype,
            max_health: config.max_health,
            current_health: config.max_health,
            current_shield: config.shield,
            attack: config.attack,
            resistance: config.resistance,
            crit_rate_percent: config.crit_rate_percent,
            crit_multiplier_percent: config.crit_multiplier_percent,
            row,
            is_dead: false,
            effects: EffectMap::default(),
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead
    }

    /// Applies damage: shield absorbs first, then health, clamped at 0.
    /// Returns true when this call killed the unit. Already-dead combatants
    /// ignore further damage.
    pub fn receive_damage(&mut self, amount: f64) -> bool {
        if self.is_dead || amount <= 0.0 {
            return false;
        }

        let absorbed = amount.min(self.current_shield);
        self.current_shield -= absorbed;
        let remainder = amount - absorbed;

        self.current_health = (self.current_health - remainder).max(0.0);
        if self.current_health <= HEALTH_EPSILON {
            self.current_health = 0.0;
            self.is_dead = true;
            return true;
        }
        false
    }

    /// Heals up to max health. No effect on the dead.
    pub fn heal(&mut self, amount: f64) {
        if self.is_dead || amount <= 0.0 {
            return;
        }
        self.current_health = (self.current_health + amount).min(self.max_health);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(name: &str, health: f64) -> UnitConfig {
        UnitConfig {
            name: name.to_string(),
            archetype: Archetype::Holy,
            max_health: health,
            attack: 10.0,
            shield: 0.0,
            resistance: 0.0,
            crit_rate_percent: 0.0,
            crit_multiplier_percent: 150.0,
        }
    }

    #[test]
    fn test_spawn_resets_stats_to_config() {
        let unit = Combatant::from_config(&config("Acolyte", 40.0), Row::Front);
        assert_eq!(unit.current_health, 40.0);
        assert_eq!(unit.max_health, 40.0);
        assert!(unit.is_alive());
        assert!(unit.effects.is_empty());
    }

    #[test]
    fn test_damage_clamps_at_zero_and_kills() {
        let mut unit = Combatant::from_config(&config("Acolyte", 40.0), Row::Front);
        let died = unit.receive_damage(100.0);
        assert!(died);
        assert_eq!(unit.current_health, 0.0);
        assert!(unit.is_dead);
    }

    #[test]
    fn test_damage_after_death_is_ignored() {
        let mut unit = Combatant::from_config(&config("Acolyte", 40.0), Row::Front);
        assert!(unit.receive_damage(100.0));
        // Second kill attempt reports no new death and changes nothing
        assert!(!unit.receive_damage(50.0));
        assert_eq!(unit.current_health, 0.0);
    }

    #[test]
    fn test_shield_absorbs_before_health() {
        let mut config = config("Bulwark", 40.0);
        config.shield = 15.0;
        let mut unit = Combatant::from_config(&config, Row::Front);

        assert!(!unit.receive_damage(10.0));
        assert_eq!(unit.current_shield, 5.0);
        assert_eq!(unit.current_health, 40.0);

        assert!(!unit.receive_damage(10.0));
        assert_eq!(unit.current_shield, 0.0);
        assert_eq!(unit.current_health, 35.0);
    }

    #[test]
    fn test_health_at_epsilon_triggers_death() {
        let mut unit = Combatant::from_config(&config("Acolyte", 40.0), Row::Front);
        assert!(unit.receive_damage(40.0 - HEALTH_EPSILON / 2.0));
        assert!(unit.is_dead);
        assert_eq!(unit.current_health, 0.0);
    }

    #[test]
    fn test_heal_clamps_at_max_and_skips_dead() {
        let mut unit = Combatant::from_config(&config("Acolyte", 40.0), Row::Front);
        unit.receive_damage(10.0);
        unit.heal(100.0);
        assert_eq!(unit.current_health, 40.0);

        unit.receive_damage(100.0);
        unit.heal(10.0);
        assert_eq!(unit.current_health, 0.0);
    }
}
