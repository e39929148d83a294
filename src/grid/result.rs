//! Aggregation of one spin's matches into grouped views.

use std::collections::HashMap;

use crate::grid::detector::RawMatch;
use crate::grid::patterns::MatchType;
use crate::grid::types::Symbol;

/// Owns the match list for one spin plus the gold it earned.
///
/// Grouped views are rebuilt on `set_matches` and read without mutation:
/// matches by pattern type, and the unique single match per symbol (unique
/// by construction of the detector). Replaced wholesale each spin; `clear`
/// keeps allocations for reuse between spins.
#[derive(Debug, Clone, Default)]
pub struct SpinResult {
    matches: Vec<RawMatch>,
    gold_earned: u32,
    by_type: HashMap<MatchType, Vec<usize>>,
    single_by_symbol: HashMap<Symbol, usize>,
}

impl SpinResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_matches(&mut self, matches: Vec<RawMatch>, gold_earned: u32) {
        self.clear();
        self.gold_earned = gold_earned;
        for (index, m) in matches.iter().enumerate() {
            self.by_type.entry(m.match_type).or_default().push(index);
            if m.match_type.is_single() {
                self.single_by_symbol.insert(m.symbol, index);
            }
        }
        self.matches = matches;
    }

    pub fn clear(&mut self) {
        self.matches.clear();
        self.gold_earned = 0;
        self.by_type.clear();
        self.single_by_symbol.clear();
    }

    pub fn matches(&self) -> &[RawMatch] {
        &self.matches
    }

    pub fn gold_earned(&self) -> u32 {
        self.gold_earned
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn of_type(&self, match_type: MatchType) -> Vec<&RawMatch> {
        self.by_type
            .get(&match_type)
            .map(|indexes| indexes.iter().map(|&i| &self.matches[i]).collect())
            .unwrap_or_default()
    }

    pub fn single_for(&self, symbol: Symbol) -> Option<&RawMatch> {
        self.single_by_symbol
            .get(&symbol)
            .map(|&index| &self.matches[index])
    }

    /// Matches that trigger combat and rewards (everything but singles).
    pub fn combat_matches(&self) -> impl Iterator<Item = &RawMatch> {
        self.matches.iter().filter(|m| !m.match_type.is_single())
    }
}
