//! The turn engine: phase state machine, spin economy, and win checks.
//!
//! One battle is a loop of rounds. Each round the player spins (paying an
//! escalating price for re-spins), matches are resolved into gold and
//! combat, then the enemy side runs the same machinery without cost
//! bookkeeping. Phases advance one step per `advance` call; the caller
//! decides pacing (animation delays live in the presentation layer, not
//! here). Every phase commits atomically: abandoning the engine between
//! calls never leaves the grid or effect ledgers half-updated.

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::constants::GRID_CELLS;
use crate::economy::Economy;
use crate::effects::types::{EffectTrigger, EffectType};
use crate::engine::combat::resolve_combat;
use crate::engine::events::{EngineEvent, Side};
use crate::error::EngineError;
use crate::generator::symbols_for_grid;
use crate::grid::detector::detect;
use crate::grid::result::SpinResult;
use crate::grid::types::SlotGrid;
use crate::units::roster::Roster;

/// Phase of the turn state machine. `Victory` and `Defeat` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    PlayerSpin,
    PlayerResolve,
    PlayerCombat,
    WinCheck,
    EnemySpin,
    EnemyResolve,
    EnemyCombat,
    Victory,
    Defeat,
}

impl TurnPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnPhase::Victory | TurnPhase::Defeat)
    }
}

/// Owns both rosters, the grid, and the current spin result for one battle.
///
/// Everything is injected: the economy arrives as a trait object per call,
/// the RNG as a generic parameter, rosters and config at construction.
/// There are no process-wide lookups.
#[derive(Debug)]
pub struct TurnEngine {
    grid: SlotGrid,
    result: SpinResult,
    player: Roster,
    enemy: Roster,
    config: GameConfig,
    phase: TurnPhase,
    spins_this_turn: u32,
    round: u32,
}

impl TurnEngine {
    pub fn new(player: Roster, enemy: Roster, config: GameConfig) -> Self {
        Self {
            grid: SlotGrid::new(),
            result: SpinResult::new(),
            player,
            enemy,
            config,
            phase: TurnPhase::PlayerSpin,
            spins_this_turn: 0,
            round: 1,
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    pub fn spin_result(&self) -> &SpinResult {
        &self.result
    }

    pub fn player(&self) -> &Roster {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Roster {
        &mut self.player
    }

    pub fn enemy(&self) -> &Roster {
        &self.enemy
    }

    pub fn enemy_mut(&mut self) -> &mut Roster {
        &mut self.enemy
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Price of the next spin this turn. Spins beyond the first increase by
    /// a fixed step; the first may be free per configuration.
    pub fn spin_cost(&self) -> u32 {
        let tuning = &self.config.spin;
        if tuning.first_spin_free {
            if self.spins_this_turn == 0 {
                0
            } else {
                tuning.base_spin_cost + tuning.spin_cost_step * (self.spins_this_turn - 1)
            }
        } else {
            tuning.base_spin_cost + tuning.spin_cost_step * self.spins_this_turn
        }
    }

    /// Player spin: charges the economy, ticks start-of-round effects on
    /// the first spin of a round, refills the grid from the player roster,
    /// and moves to the resolve phase.
    ///
    /// Legal from `PlayerSpin`, and from `PlayerResolve` as a re-spin: the
    /// player may pay the escalating price to re-roll an outcome that has
    /// not been committed yet. Once the resolve phase advances, the spin is
    /// locked in for the turn.
    ///
    /// Refusals (wrong phase, unaffordable cost) mutate nothing.
    pub fn try_spin(
        &mut self,
        economy: &mut dyn Economy,
        rng: &mut impl Rng,
    ) -> Result<Vec<EngineEvent>, EngineError> {
        if !matches!(self.phase, TurnPhase::PlayerSpin | TurnPhase::PlayerResolve) {
            return Err(EngineError::OutOfPhase(self.phase));
        }

        let cost = self.spin_cost();
        if cost > 0 && !economy.spend_gold(cost) {
            return Err(EngineError::InsufficientGold {
                needed: cost,
                available: economy.gold(),
            });
        }

        let mut events = Vec::new();
        if self.spins_this_turn == 0 {
            self.start_of_round(&mut events);
            // Start-of-round bleed can decide the battle before the reel
            // moves; don't fill the grid for a finished fight.
            if self.check_terminal(&mut events) {
                return Ok(events);
            }
        }

        let symbols = symbols_for_grid(&self.player, GRID_CELLS, &self.config.spin, rng);
        self.grid.fill(&symbols)?;
        self.spins_this_turn += 1;
        self.phase = TurnPhase::PlayerResolve;
        debug!("player spin {} (cost {})", self.spins_this_turn, cost);

        events.push(EngineEvent::SpinStarted {
            side: Side::Player,
            cost,
        });
        Ok(events)
    }

    /// Advances exactly one non-spin phase. Returns the events the phase
    /// produced; an empty vector when waiting for a spin or already in a
    /// terminal phase.
    pub fn advance(&mut self, economy: &mut dyn Economy, rng: &mut impl Rng) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        match self.phase {
            TurnPhase::PlayerSpin | TurnPhase::Victory | TurnPhase::Defeat => {}

            TurnPhase::PlayerResolve => {
                let gold = self.resolve_grid(Side::Player, &mut events);
                economy.add_gold(gold);
                self.phase = TurnPhase::PlayerCombat;
            }

            TurnPhase::PlayerCombat => {
                events.extend(resolve_combat(
                    &self.result,
                    &mut self.player,
                    &mut self.enemy,
                    Side::Enemy,
                    rng,
                ));
                Self::resolve_turn_effects(&mut self.player);
                events.push(EngineEvent::TurnEnded { side: Side::Player });
                self.phase = TurnPhase::WinCheck;
            }

            TurnPhase::WinCheck => {
                if !self.check_terminal(&mut events) {
                    self.phase = TurnPhase::EnemySpin;
                }
            }

            TurnPhase::EnemySpin => {
                let symbols = symbols_for_grid(&self.enemy, GRID_CELLS, &self.config.spin, rng);
                match self.grid.fill(&symbols) {
                    Ok(()) => {
                        self.phase = TurnPhase::EnemyResolve;
                        events.push(EngineEvent::SpinStarted {
                            side: Side::Enemy,
                            cost: 0,
                        });
                    }
                    Err(err) => {
                        // Generator output is engine-internal; a mismatch
                        // is a bug we degrade to a skipped enemy turn.
                        warn!("enemy spin rejected: {}", err);
                        self.result.clear();
                        events.extend(self.finish_round());
                    }
                }
            }

            TurnPhase::EnemyResolve => {
                // Enemy matches trigger combat but never accrue gold.
                self.resolve_grid(Side::Enemy, &mut events);
                self.phase = TurnPhase::EnemyCombat;
            }

            TurnPhase::EnemyCombat => {
                events.extend(resolve_combat(
                    &self.result,
                    &mut self.enemy,
                    &mut self.player,
                    Side::Player,
                    rng,
                ));
                Self::resolve_turn_effects(&mut self.enemy);
                events.push(EngineEvent::TurnEnded { side: Side::Enemy });
                if !self.check_terminal(&mut events) {
                    events.extend(self.finish_round());
                }
            }
        }
        events
    }

    /// Detects matches on the current grid, stores the spin result, and
    /// reports the reward gold for the acting side.
    fn resolve_grid(&mut self, side: Side, events: &mut Vec<EngineEvent>) -> u32 {
        let matches = detect(&self.grid);
        let gold: u32 = if side == Side::Player {
            matches
                .iter()
                .filter(|m| !m.match_type.is_single())
                .map(|m| self.config.rewards.gold_for(m.match_type))
                .sum()
        } else {
            0
        };

        events.push(EngineEvent::MatchesResolved {
            side,
            match_count: matches.len(),
            gold_earned: gold,
        });
        self.result.set_matches(matches, gold);
        gold
    }

    /// Ticks start-of-round effects (bleed damage, regen healing) on both
    /// sides, then counts their durations down.
    fn start_of_round(&mut self, events: &mut Vec<EngineEvent>) {
        Self::round_ticks(&mut self.player, Side::Player, events);
        Self::round_ticks(&mut self.enemy, Side::Enemy, events);
    }

    fn round_ticks(roster: &mut Roster, side: Side, events: &mut Vec<EngineEvent>) {
        for slot in 0..roster.max_size() {
            let Some(unit) = roster.unit_at_mut(slot) else {
                continue;
            };
            if !unit.is_alive() {
                continue;
            }

            let bleed = unit.effects.magnitude(EffectType::Bleed);
            if bleed > 0.0 {
                let died = unit.receive_damage(bleed);
                events.push(EngineEvent::EffectTick {
                    target: unit.name.clone(),
                    effect: EffectType::Bleed,
                    amount: bleed,
                });
                if died {
                    events.push(EngineEvent::UnitDied {
                        side,
                        name: unit.name.clone(),
                    });
                }
            }

            let regen = unit.effects.magnitude(EffectType::Regen);
            if regen > 0.0 && unit.is_alive() {
                unit.heal(regen);
                events.push(EngineEvent::EffectTick {
                    target: unit.name.clone(),
                    effect: EffectType::Regen,
                    amount: regen,
                });
            }

            unit.effects.resolve(EffectTrigger::StartOfRound);
        }
    }

    /// Counts down per-turn-resolve effects on a side when its turn ends.
    fn resolve_turn_effects(roster: &mut Roster) {
        for slot in 0..roster.max_size() {
            if let Some(unit) = roster.unit_at_mut(slot) {
                unit.effects.resolve(EffectTrigger::TurnResolve);
            }
        }
    }

    /// Moves to a terminal phase when either roster is wiped. Returns true
    /// if the battle ended.
    fn check_terminal(&mut self, events: &mut Vec<EngineEvent>) -> bool {
        if self.enemy.all_dead() {
            self.phase = TurnPhase::Victory;
            events.push(EngineEvent::BattleWon);
            return true;
        }
        if self.player.all_dead() {
            self.phase = TurnPhase::Defeat;
            events.push(EngineEvent::BattleLost);
            return true;
        }
        false
    }

    /// Closes the round: sweeps round-only effects on both sides, resets
    /// the spin counter, and hands the reel back to the player.
    fn finish_round(&mut self) -> Vec<EngineEvent> {
        for slot in 0..self.player.max_size() {
            if let Some(unit) = self.player.unit_at_mut(slot) {
                unit.effects.sweep_round_effects();
            }
        }
        for slot in 0..self.enemy.max_size() {
            if let Some(unit) = self.enemy.unit_at_mut(slot) {
                unit.effects.sweep_round_effects();
            }
        }

        let finished = self.round;
        self.round += 1;
        self.spins_this_turn = 0;
        self.phase = TurnPhase::PlayerSpin;
        debug!("round {} complete", finished);
        vec![EngineEvent::RoundEnded { round: finished }]
    }

    // Snapshot plumbing lives in crate::save; these expose the pieces the
    // snapshot needs without making the fields public.
    pub(crate) fn snapshot_parts(&self) -> (Roster, Roster, TurnPhase, u32, u32) {
        (
            self.player.clone(),
            self.enemy.clone(),
            self.phase,
            self.spins_this_turn,
            self.round,
        )
    }

    pub(crate) fn from_parts(
        player: Roster,
        enemy: Roster,
        phase: TurnPhase,
        spins_this_turn: u32,
        round: u32,
        config: GameConfig,
    ) -> Self {
        Self {
            grid: SlotGrid::new(),
            result: SpinResult::new(),
            player,
            enemy,
            config,
            phase,
            spins_this_turn,
            round,
        }
    }
}
