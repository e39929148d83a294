//! Pure, deterministic match detection over a filled grid.
//!
//! Detection is archetype-agnostic: it reports which pattern shapes hold a
//! uniform non-empty symbol, without knowing anything about rosters. The
//! combat resolver later binds a match to live units (two-phase
//! construction, `RawMatch` here vs `ResolvedMatch` in the engine).

use std::collections::HashSet;

use crate::grid::patterns::{Cell, MatchType, NON_SINGLE_PATTERNS};
use crate::grid::types::{SlotGrid, Symbol};

/// A detected set of grid cells sharing one non-empty symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    pub match_type: MatchType,
    pub symbol: Symbol,
    pub cells: Vec<Cell>,
}

/// Governs whether non-overlapping singles surface alongside larger
/// patterns. The default policy emits both sets.
#[derive(Debug, Clone, Copy)]
pub struct DetectPolicy {
    pub include_singles: bool,
}

impl Default for DetectPolicy {
    fn default() -> Self {
        Self {
            include_singles: true,
        }
    }
}

/// Scans the grid for every matching pattern, leaving the grid unmodified.
pub fn detect(grid: &SlotGrid) -> Vec<RawMatch> {
    detect_with_policy(grid, DetectPolicy::default())
}

/// Overlapping larger patterns are independent: a cell may belong to more
/// than one large pattern at once (a diagonal and the full grid, say). Only
/// singles are excluded once a cell is claimed, and at most one single is
/// emitted per distinct symbol, taken from the first unclaimed cell in
/// row-major scan order.
pub fn detect_with_policy(grid: &SlotGrid, policy: DetectPolicy) -> Vec<RawMatch> {
    let mut matches = Vec::new();
    let mut claimed: HashSet<Cell> = HashSet::new();

    for (match_type, cells) in NON_SINGLE_PATTERNS {
        let (row, col) = cells[0];
        let first = grid.at(row, col);
        if first.is_empty() {
            continue;
        }
        if cells.iter().all(|&(r, c)| grid.at(r, c) == first) {
            matches.push(RawMatch {
                match_type,
                symbol: first,
                cells: cells.to_vec(),
            });
            claimed.extend(cells.iter().copied());
        }
    }

    if policy.include_singles {
        let mut emitted: HashSet<Symbol> = HashSet::new();
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let symbol = grid.at(row, col);
                if symbol.is_empty()
                    || claimed.contains(&(row, col))
                    || emitted.contains(&symbol)
                {
                    continue;
                }
                emitted.insert(symbol);
                matches.push(RawMatch {
                    match_type: MatchType::Single,
                    symbol,
                    cells: vec![(row, col)],
                });
            }
        }
    }

    matches
}
