//! Maps spin matches to attacks.
//!
//! Second phase of the two-phase match construction: a `RawMatch` from the
//! detector is bound to the acting roster here, producing a
//! `ResolvedMatch` per attacker before each strike.

use log::warn;
use rand::Rng;

use crate::core::constants::{
    FULL_GRID_BLEED_MAGNITUDE, FULL_GRID_BLEED_TURNS, RESISTANCE_SCALING,
};
use crate::effects::types::{EffectDuration, EffectType};
use crate::engine::events::{EngineEvent, Side};
use crate::grid::detector::RawMatch;
use crate::grid::patterns::{Cell, MatchType};
use crate::grid::result::SpinResult;
use crate::grid::types::{Archetype, Symbol};
use crate::units::roster::Roster;
use crate::units::types::Combatant;

/// A match bound to the live roster: archetype resolved, attacker named.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMatch {
    pub match_type: MatchType,
    pub symbol: Symbol,
    pub cells: Vec<Cell>,
    pub archetype: Archetype,
    pub attacker: String,
}

impl ResolvedMatch {
    fn bind(raw: &RawMatch, archetype: Archetype, attacker: &Combatant) -> Self {
        Self {
            match_type: raw.match_type,
            symbol: raw.symbol,
            cells: raw.cells.clone(),
            archetype,
            attacker: attacker.name.clone(),
        }
    }
}

/// One attack's damage under the crit/resistance formula, with active
/// attack modifiers folded into the base.
fn attack_damage(attacker: &Combatant, defender: &Combatant, rng: &mut impl Rng) -> (f64, bool) {
    let modifier = attacker.effects.magnitude(EffectType::AttackUp)
        - attacker.effects.magnitude(EffectType::Weaken);
    let mut damage = (attacker.attack + modifier).max(0.0);

    let was_crit = rng.gen_range(0.0..100.0) < attacker.crit_rate_percent;
    if was_crit {
        damage *= attacker.crit_multiplier_percent / 100.0;
    }

    damage *= 100.0 / (100.0 + defender.resistance * RESISTANCE_SCALING);
    (damage, was_crit)
}

/// Executes combat for every non-single match in the spin result.
///
/// For each match, every living attacker of the match's archetype fires
/// once at the defending roster's lowest-health living unit. The target is
/// re-acquired before every strike, so a kill mid-match redirects the
/// remaining attackers; when no living defender remains, the rest of the
/// match is skipped. A symbol that resolves to no archetype (a defect in
/// the detector's input) degrades to a no-op for that match.
pub fn resolve_combat(
    result: &SpinResult,
    attackers: &mut Roster,
    defenders: &mut Roster,
    defender_side: Side,
    rng: &mut impl Rng,
) -> Vec<EngineEvent> {
    let mut events = Vec::new();

    for raw in result.combat_matches() {
        let Some(archetype) = raw.symbol.archetype() else {
            warn!(
                "skipping {:?} match with no resolvable archetype",
                raw.match_type
            );
            continue;
        };

        let acting: Vec<usize> = attackers
            .iter_alive()
            .filter(|(_, unit)| unit.archetype == archetype)
            .map(|(slot, _)| slot)
            .collect();

        for attacker_slot in acting {
            // Attackers collected up front can have died since (future
            // retaliation hooks); skip rather than index blindly.
            let Some(attacker) = attackers.unit_at(attacker_slot) else {
                continue;
            };
            if !attacker.is_alive() {
                continue;
            }

            let Some(target_slot) = defenders.lowest_health_target() else {
                break;
            };
            let Some(defender) = defenders.unit_at(target_slot) else {
                break;
            };

            let resolved = ResolvedMatch::bind(raw, archetype, attacker);
            let (damage, was_crit) = attack_damage(attacker, defender, rng);

            let defender = defenders
                .unit_at_mut(target_slot)
                .expect("target re-acquired above");
            let died = defender.receive_damage(damage);

            events.push(EngineEvent::UnitAttacked {
                attacker: resolved.attacker,
                defender: defender.name.clone(),
                damage,
                was_crit,
            });

            if resolved.match_type == MatchType::FullGrid && !died {
                defender.effects.add_effect(
                    EffectType::Bleed,
                    FULL_GRID_BLEED_MAGNITUDE,
                    EffectDuration::Turns(FULL_GRID_BLEED_TURNS),
                );
                events.push(EngineEvent::EffectApplied {
                    target: defender.name.clone(),
                    effect: EffectType::Bleed,
                    magnitude: FULL_GRID_BLEED_MAGNITUDE,
                });
            }

            if died {
                events.push(EngineEvent::UnitDied {
                    side: defender_side,
                    name: defender.name.clone(),
                });
            }
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::UnitConfig;
    use crate::units::types::Row;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn unit_config(name: &str, archetype: Archetype) -> UnitConfig {
        UnitConfig {
            name: name.to_string(),
            archetype,
            max_health: 50.0,
            attack: 10.0,
            shield: 0.0,
            resistance: 0.0,
            crit_rate_percent: 0.0,
            crit_multiplier_percent: 150.0,
        }
    }

    fn horizontal_match(archetype: Archetype) -> RawMatch {
        RawMatch {
            match_type: MatchType::Horizontal,
            symbol: Symbol::Unit(archetype),
            cells: vec![(0, 0), (0, 1), (0, 2)],
        }
    }

    fn result_with(matches: Vec<RawMatch>) -> SpinResult {
        let mut result = SpinResult::new();
        result.set_matches(matches, 0);
        result
    }

    #[test]
    fn test_forced_crit_and_resistance_formula() {
        let mut attackers = Roster::new(&[Row::Front]);
        let mut config = unit_config("Zealot", Archetype::Holy);
        config.attack = 100.0;
        config.crit_rate_percent = 100.0;
        config.crit_multiplier_percent = 200.0;
        attackers.set_unit(0, &config).unwrap();

        let mut defenders = Roster::new(&[Row::Front]);
        let mut target = unit_config("Ghoul", Archetype::Undead);
        target.max_health = 500.0;
        target.resistance = 5.0;
        defenders.set_unit(0, &target).unwrap();

        let result = result_with(vec![horizontal_match(Archetype::Holy)]);
        let events = resolve_combat(
            &result,
            &mut attackers,
            &mut defenders,
            Side::Enemy,
            &mut create_test_rng(),
        );

        // 100 * 2.0 * 100/(100 + 5*10) = 133.33...
        let expected = 400.0 / 3.0;
        match &events[0] {
            EngineEvent::UnitAttacked {
                damage, was_crit, ..
            } => {
                assert!(*was_crit);
                assert!((damage - expected).abs() < 1e-9, "damage was {}", damage);
            }
            other => panic!("expected attack event, got {:?}", other),
        }
        let remaining = defenders.unit_at(0).unwrap().current_health;
        assert!((remaining - (500.0 - expected)).abs() < 1e-9);
    }

    #[test]
    fn test_single_matches_trigger_no_attacks() {
        let mut attackers = Roster::new(&[Row::Front]);
        attackers.set_unit(0, &unit_config("Zealot", Archetype::Holy)).unwrap();
        let mut defenders = Roster::new(&[Row::Front]);
        defenders.set_unit(0, &unit_config("Ghoul", Archetype::Undead)).unwrap();

        let result = result_with(vec![RawMatch {
            match_type: MatchType::Single,
            symbol: Symbol::Unit(Archetype::Holy),
            cells: vec![(0, 0)],
        }]);
        let events = resolve_combat(
            &result,
            &mut attackers,
            &mut defenders,
            Side::Enemy,
            &mut create_test_rng(),
        );
        assert!(events.is_empty());
        assert_eq!(defenders.unit_at(0).unwrap().current_health, 50.0);
    }

    #[test]
    fn test_only_matching_archetype_attacks() {
        let mut attackers = Roster::new(&[Row::Front, Row::Front]);
        attackers.set_unit(0, &unit_config("Zealot", Archetype::Holy)).unwrap();
        attackers.set_unit(1, &unit_config("Sprite", Archetype::Elf)).unwrap();

        let mut defenders = Roster::new(&[Row::Front]);
        let mut tank = unit_config("Ghoul", Archetype::Undead);
        tank.max_health = 1000.0;
        defenders.set_unit(0, &tank).unwrap();

        let result = result_with(vec![horizontal_match(Archetype::Holy)]);
        let events = resolve_combat(
            &result,
            &mut attackers,
            &mut defenders,
            Side::Enemy,
            &mut create_test_rng(),
        );

        let attacks: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                EngineEvent::UnitAttacked { attacker, .. } => Some(attacker.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(attacks, vec!["Zealot".to_string()]);
    }

    #[test]
    fn test_target_reacquired_after_mid_match_kill() {
        // Two Holy attackers; the first kills the weak defender, so the
        // second must redirect to the remaining one.
        let mut attackers = Roster::new(&[Row::Front, Row::Front]);
        let mut strong = unit_config("Zealot", Archetype::Holy);
        strong.attack = 100.0;
        attackers.set_unit(0, &strong).unwrap();
        attackers.set_unit(1, &strong).unwrap();

        let mut defenders = Roster::new(&[Row::Front, Row::Back]);
        let mut weak = unit_config("Wisp", Archetype::Mob);
        weak.max_health = 5.0;
        let mut sturdy = unit_config("Ogre", Archetype::Mob);
        sturdy.max_health = 500.0;
        defenders.set_unit(0, &sturdy).unwrap();
        defenders.set_unit(1, &weak).unwrap();

        let result = result_with(vec![horizontal_match(Archetype::Holy)]);
        let events = resolve_combat(
            &result,
            &mut attackers,
            &mut defenders,
            Side::Enemy,
            &mut create_test_rng(),
        );

        let defenders_hit: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                EngineEvent::UnitAttacked { defender, .. } => Some(defender.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(defenders_hit, vec!["Wisp", "Ogre"]);
        assert!(events
            .iter()
            .any(|e| matches!(e, EngineEvent::UnitDied { name, .. } if name == "Wisp")));
    }

    #[test]
    fn test_remaining_attackers_skip_when_no_living_defender() {
        let mut attackers = Roster::new(&[Row::Front, Row::Front, Row::Front]);
        let mut strong = unit_config("Zealot", Archetype::Holy);
        strong.attack = 100.0;
        for i in 0..3 {
            attackers.set_unit(i, &strong).unwrap();
        }

        let mut defenders = Roster::new(&[Row::Front]);
        let mut weak = unit_config("Wisp", Archetype::Mob);
        weak.max_health = 5.0;
        defenders.set_unit(0, &weak).unwrap();

        let result = result_with(vec![horizontal_match(Archetype::Holy)]);
        let events = resolve_combat(
            &result,
            &mut attackers,
            &mut defenders,
            Side::Enemy,
            &mut create_test_rng(),
        );

        let attack_count = events
            .iter()
            .filter(|e| matches!(e, EngineEvent::UnitAttacked { .. }))
            .count();
        assert_eq!(attack_count, 1);
    }

    #[test]
    fn test_full_grid_match_applies_bleed() {
        let mut attackers = Roster::new(&[Row::Front]);
        attackers.set_unit(0, &unit_config("Zealot", Archetype::Holy)).unwrap();

        let mut defenders = Roster::new(&[Row::Front]);
        let mut tank = unit_config("Ogre", Archetype::Mob);
        tank.max_health = 500.0;
        defenders.set_unit(0, &tank).unwrap();

        let result = result_with(vec![RawMatch {
            match_type: MatchType::FullGrid,
            symbol: Symbol::Unit(Archetype::Holy),
            cells: crate::grid::patterns::FULL_GRID.to_vec(),
        }]);
        let events = resolve_combat(
            &result,
            &mut attackers,
            &mut defenders,
            Side::Enemy,
            &mut create_test_rng(),
        );

        assert!(events
            .iter()
            .any(|e| matches!(e, EngineEvent::EffectApplied { effect, .. } if *effect == EffectType::Bleed)));
        assert_eq!(
            defenders
                .unit_at(0)
                .unwrap()
                .effects
                .magnitude(EffectType::Bleed),
            FULL_GRID_BLEED_MAGNITUDE
        );
    }

    #[test]
    fn test_attack_modifiers_fold_into_base_damage() {
        let mut attackers = Roster::new(&[Row::Front]);
        attackers.set_unit(0, &unit_config("Zealot", Archetype::Holy)).unwrap();
        attackers
            .unit_at_mut(0)
            .unwrap()
            .effects
            .add_effect(EffectType::AttackUp, 5.0, EffectDuration::Turns(1));

        let mut defenders = Roster::new(&[Row::Front]);
        let mut tank = unit_config("Ogre", Archetype::Mob);
        tank.max_health = 500.0;
        defenders.set_unit(0, &tank).unwrap();

        let result = result_with(vec![horizontal_match(Archetype::Holy)]);
        let events = resolve_combat(
            &result,
            &mut attackers,
            &mut defenders,
            Side::Enemy,
            &mut create_test_rng(),
        );

        match &events[0] {
            EngineEvent::UnitAttacked { damage, .. } => {
                assert!((damage - 15.0).abs() < 1e-9);
            }
            other => panic!("expected attack event, got {:?}", other),
        }
    }
}
