//! Static pattern geometry for the 3x3 grid.
//!
//! Patterns are immutable coordinate templates computed once at compile
//! time. Coordinates are (row, col), row-major.

use serde::{Deserialize, Serialize};

/// One grid coordinate: (row, col).
pub type Cell = (usize, usize);

/// Canonical pattern shapes a match can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    Single,
    Horizontal,
    Vertical,
    Diagonal,
    Zigzag,
    XShape,
    FullGrid,
}

impl MatchType {
    pub fn is_single(&self) -> bool {
        matches!(self, MatchType::Single)
    }
}

pub const HORIZONTAL_TOP: [Cell; 3] = [(0, 0), (0, 1), (0, 2)];
pub const HORIZONTAL_MID: [Cell; 3] = [(1, 0), (1, 1), (1, 2)];
pub const HORIZONTAL_BOTTOM: [Cell; 3] = [(2, 0), (2, 1), (2, 2)];

pub const VERTICAL_LEFT: [Cell; 3] = [(0, 0), (1, 0), (2, 0)];
pub const VERTICAL_MID: [Cell; 3] = [(0, 1), (1, 1), (2, 1)];
pub const VERTICAL_RIGHT: [Cell; 3] = [(0, 2), (1, 2), (2, 2)];

pub const DIAGONAL_MAIN: [Cell; 3] = [(0, 0), (1, 1), (2, 2)];
pub const DIAGONAL_ANTI: [Cell; 3] = [(0, 2), (1, 1), (2, 0)];

// Five-cell S/Z shapes threading the middle row.
pub const ZIGZAG_DOWN: [Cell; 5] = [(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)];
pub const ZIGZAG_UP: [Cell; 5] = [(2, 0), (1, 0), (1, 1), (1, 2), (0, 2)];

// Four corners plus center.
pub const X_SHAPE: [Cell; 5] = [(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)];

pub const FULL_GRID: [Cell; 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, 0),
    (2, 1),
    (2, 2),
];

/// Every non-single pattern instance the detector scans, in a fixed order.
pub const NON_SINGLE_PATTERNS: [(MatchType, &[Cell]); 12] = [
    (MatchType::Horizontal, &HORIZONTAL_TOP),
    (MatchType::Horizontal, &HORIZONTAL_MID),
    (MatchType::Horizontal, &HORIZONTAL_BOTTOM),
    (MatchType::Vertical, &VERTICAL_LEFT),
    (MatchType::Vertical, &VERTICAL_MID),
    (MatchType::Vertical, &VERTICAL_RIGHT),
    (MatchType::Diagonal, &DIAGONAL_MAIN),
    (MatchType::Diagonal, &DIAGONAL_ANTI),
    (MatchType::Zigzag, &ZIGZAG_DOWN),
    (MatchType::Zigzag, &ZIGZAG_UP),
    (MatchType::XShape, &X_SHAPE),
    (MatchType::FullGrid, &FULL_GRID),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{GRID_COLS, GRID_ROWS};

    #[test]
    fn test_all_pattern_cells_in_range() {
        for (_, cells) in NON_SINGLE_PATTERNS {
            for (row, col) in cells {
                assert!(*row < GRID_ROWS && *col < GRID_COLS);
            }
        }
    }

    #[test]
    fn test_pattern_instance_counts() {
        let count = |ty: MatchType| {
            NON_SINGLE_PATTERNS
                .iter()
                .filter(|(t, _)| *t == ty)
                .count()
        };
        assert_eq!(count(MatchType::Horizontal), 3);
        assert_eq!(count(MatchType::Vertical), 3);
        assert_eq!(count(MatchType::Diagonal), 2);
        assert_eq!(count(MatchType::Zigzag), 2);
        assert_eq!(count(MatchType::XShape), 1);
        assert_eq!(count(MatchType::FullGrid), 1);
    }

    #[test]
    fn test_five_cell_shapes() {
        assert_eq!(ZIGZAG_DOWN.len(), 5);
        assert_eq!(ZIGZAG_UP.len(), 5);
        assert_eq!(X_SHAPE.len(), 5);
    }

    #[test]
    fn test_patterns_have_no_duplicate_cells() {
        for (_, cells) in NON_SINGLE_PATTERNS {
            let mut seen = std::collections::HashSet::new();
            for cell in cells {
                assert!(seen.insert(cell), "duplicate cell in pattern: {:?}", cell);
            }
        }
    }
}
