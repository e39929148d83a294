use serde::{Deserialize, Serialize};

use crate::core::constants::{GRID_CELLS, GRID_COLS, GRID_ROWS};
use crate::error::EngineError;

/// Combatant classification that symbols and match rewards key off of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Holy,
    Undead,
    Elf,
    Mob,
}

impl Archetype {
    /// Stable iteration order for distributions and coverage checks.
    pub const ALL: [Archetype; 4] = [
        Archetype::Holy,
        Archetype::Undead,
        Archetype::Elf,
        Archetype::Mob,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Holy => "Holy",
            Archetype::Undead => "Undead",
            Archetype::Elf => "Elf",
            Archetype::Mob => "Mob",
        }
    }
}

/// A grid cell's drawn value: either empty or one archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Empty,
    Unit(Archetype),
}

impl Symbol {
    pub fn is_empty(&self) -> bool {
        matches!(self, Symbol::Empty)
    }

    pub fn archetype(&self) -> Option<Archetype> {
        match self {
            Symbol::Empty => None,
            Symbol::Unit(archetype) => Some(*archetype),
        }
    }
}

/// The 3x3 symbol matrix, cleared and refilled once per spin.
///
/// Size is fixed for the lifetime of a session; every cell always holds
/// exactly one symbol. A fill with the wrong number of symbols is rejected
/// before any cell is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotGrid {
    cells: Vec<Symbol>,
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotGrid {
    pub fn new() -> Self {
        Self {
            cells: vec![Symbol::Empty; GRID_CELLS],
        }
    }

    pub fn rows(&self) -> usize {
        GRID_ROWS
    }

    pub fn cols(&self) -> usize {
        GRID_COLS
    }

    pub fn cell_count(&self) -> usize {
        GRID_CELLS
    }

    /// Row-major cell access. Pattern tables only carry in-range coordinates.
    pub fn at(&self, row: usize, col: usize) -> Symbol {
        self.cells[row * GRID_COLS + col]
    }

    /// Bounds-checked cell access for externally-supplied coordinates.
    pub fn get(&self, row: usize, col: usize) -> Result<Symbol, EngineError> {
        if row >= GRID_ROWS || col >= GRID_COLS {
            return Err(EngineError::CellOutOfRange { row, col });
        }
        Ok(self.at(row, col))
    }

    /// Replaces the whole grid with a freshly drawn symbol sequence.
    /// Rejects a wrong-length sequence without touching any cell.
    pub fn fill(&mut self, symbols: &[Symbol]) -> Result<(), EngineError> {
        if symbols.len() != GRID_CELLS {
            return Err(EngineError::SymbolCountMismatch {
                expected: GRID_CELLS,
                actual: symbols.len(),
            });
        }
        self.cells.copy_from_slice(symbols);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells.fill(Symbol::Empty);
    }

    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }
}
