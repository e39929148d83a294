//! Symbol probability model and grid fill.
//!
//! The spin outcome is driven by the acting side's roster: living
//! archetypes split the probability mass left over after the empty weight,
//! subject to a per-archetype minimum. Distributions are cheap to build and
//! must be recomputed by the caller whenever the roster's alive-set may
//! have changed between draws; nothing here caches.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::config::SpinTuning;
use crate::grid::types::Symbol;
use crate::units::roster::Roster;

/// Probability distribution over symbols for one roster snapshot.
///
/// Stable iteration order: `Empty` first, then living archetypes in
/// `Archetype::ALL` order. Probabilities are normalized to sum to exactly 1.
pub fn symbol_distribution(roster: &Roster, tuning: &SpinTuning) -> Vec<(Symbol, f64)> {
    let archetypes = roster.distinct_alive_archetypes();
    if archetypes.is_empty() {
        return vec![(Symbol::Empty, 1.0)];
    }

    let count = archetypes.len() as f64;
    let mut empty_weight = tuning.empty_weight;
    let mut share = (1.0 - empty_weight) / count;

    // Shrink the empty weight (never below its hard floor) until every
    // archetype can receive the configured minimum.
    if share < tuning.min_archetype_weight {
        empty_weight = (1.0 - tuning.min_archetype_weight * count).max(tuning.empty_weight_floor);
        share = (1.0 - empty_weight) / count;
    }

    let mut distribution = Vec::with_capacity(archetypes.len() + 1);
    distribution.push((Symbol::Empty, empty_weight));
    distribution.extend(archetypes.into_iter().map(|a| (Symbol::Unit(a), share)));

    // Floating-point correction so the walk in draw_symbol covers [0, 1)
    let total: f64 = distribution.iter().map(|(_, p)| p).sum();
    for (_, p) in &mut distribution {
        *p /= total;
    }
    distribution
}

/// Draws one symbol: uniform roll in [0, 1), cumulative walk in the
/// distribution's stable order, `Empty` fallback if rounding leaves the
/// roll uncovered.
pub fn draw_symbol(distribution: &[(Symbol, f64)], rng: &mut impl Rng) -> Symbol {
    let roll: f64 = rng.gen();
    let mut cumulative = 0.0;
    for (symbol, probability) in distribution {
        cumulative += probability;
        if roll <= cumulative {
            return *symbol;
        }
    }
    Symbol::Empty
}

/// Draws a full grid's worth of symbols with deterministic coverage: every
/// living unit contributes one symbol of its archetype (capped at
/// `cell_count`), the remainder is filled by weighted draws, and the final
/// sequence is shuffled so the guaranteed slots are not positionally
/// predictable.
pub fn symbols_for_grid(
    roster: &Roster,
    cell_count: usize,
    tuning: &SpinTuning,
    rng: &mut impl Rng,
) -> Vec<Symbol> {
    let mut symbols: Vec<Symbol> = roster
        .iter_alive()
        .map(|(_, unit)| Symbol::Unit(unit.archetype))
        .take(cell_count)
        .collect();

    let distribution = symbol_distribution(roster, tuning);
    while symbols.len() < cell_count {
        symbols.push(draw_symbol(&distribution, rng));
    }

    symbols.shuffle(rng);
    symbols
}
