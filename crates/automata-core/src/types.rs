//! Core type definitions shared by both automata.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hit points a living battle cell starts with and is reset to on conversion
pub const MAX_HP: i32 = 10;

/// Hit points of a freshly constructed, not yet randomized battle cell
pub const DEFAULT_HP: i32 = 20;

/// 2D position on a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn add(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Apply toroidal wrapping for given grid dimensions
    pub fn wrap(&self, width: i32, height: i32) -> Self {
        Self {
            x: ((self.x % width) + width) % width,
            y: ((self.y % height) + height) % height,
        }
    }

    /// Whether the position lies inside a `width` x `height` grid without wrapping
    pub fn in_bounds(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }
}

/// One of the eight neighbour directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    West,
    East,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// Scan order used by every neighbourhood walk: axis-aligned first, then diagonals.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    pub fn to_delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (1, -1),
            Direction::SouthWest => (-1, 1),
            Direction::SouthEast => (1, 1),
        }
    }
}

/// Species of a battle cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CellType {
    Scissors,
    Rock,
    Paper,
    None,
}

impl CellType {
    /// Declaration order; random initialization draws an index into this table.
    pub const ALL: [CellType; 4] = [
        CellType::Scissors,
        CellType::Rock,
        CellType::Paper,
        CellType::None,
    ];

    /// Whether `self` inflicts damage on `other`
    pub fn beats(&self, other: CellType) -> bool {
        matches!(
            (self, other),
            (CellType::Rock, CellType::Scissors)
                | (CellType::Paper, CellType::Rock)
                | (CellType::Scissors, CellType::Paper)
        )
    }

    pub fn index(&self) -> usize {
        match self {
            CellType::Scissors => 0,
            CellType::Rock => 1,
            CellType::Paper => 2,
            CellType::None => 3,
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellType::Scissors => "scissors",
            CellType::Rock => "rock",
            CellType::Paper => "paper",
            CellType::None => "none",
        };
        f.write_str(name)
    }
}

/// A cell of the Rock-Scissors-Paper automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleCell {
    pub hp: i32,
    pub cell_type: CellType,
}

impl BattleCell {
    pub fn new(cell_type: CellType, hp: i32) -> Self {
        Self { hp, cell_type }
    }

    /// A living cell of the given type at full health
    pub fn spawn(cell_type: CellType) -> Self {
        Self::new(cell_type, MAX_HP)
    }

    pub fn is_empty(&self) -> bool {
        self.cell_type == CellType::None
    }
}

impl Default for BattleCell {
    fn default() -> Self {
        Self {
            hp: DEFAULT_HP,
            cell_type: CellType::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_wrap() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.wrap(10, 10), Position::new(5, 5));

        let pos = Position::new(-1, -1);
        assert_eq!(pos.wrap(10, 10), Position::new(9, 9));

        let pos = Position::new(10, 10);
        assert_eq!(pos.wrap(10, 10), Position::new(0, 0));

        let pos = Position::new(-23, 47);
        assert_eq!(pos.wrap(10, 7), Position::new(7, 5));
    }

    #[test]
    fn test_in_bounds() {
        assert!(Position::new(0, 0).in_bounds(3, 3));
        assert!(Position::new(2, 2).in_bounds(3, 3));
        assert!(!Position::new(-1, 0).in_bounds(3, 3));
        assert!(!Position::new(0, 3).in_bounds(3, 3));
    }

    #[test]
    fn test_direction_order() {
        let deltas: Vec<_> = Direction::ALL.iter().map(|d| d.to_delta()).collect();
        assert_eq!(
            deltas,
            vec![(0, -1), (0, 1), (-1, 0), (1, 0), (-1, -1), (1, -1), (-1, 1), (1, 1)]
        );
    }

    #[test]
    fn test_dominance_is_cyclic() {
        assert!(CellType::Rock.beats(CellType::Scissors));
        assert!(CellType::Paper.beats(CellType::Rock));
        assert!(CellType::Scissors.beats(CellType::Paper));

        assert!(!CellType::Scissors.beats(CellType::Rock));
        assert!(!CellType::Rock.beats(CellType::Paper));
        assert!(!CellType::Paper.beats(CellType::Scissors));

        for t in CellType::ALL {
            assert!(!t.beats(t));
            assert!(!t.beats(CellType::None));
            assert!(!CellType::None.beats(t));
        }
    }

    #[test]
    fn test_cell_defaults() {
        let cell = BattleCell::default();
        assert_eq!(cell.hp, DEFAULT_HP);
        assert!(cell.is_empty());

        let rock = BattleCell::spawn(CellType::Rock);
        assert_eq!(rock.hp, MAX_HP);
        assert!(!rock.is_empty());
    }

    #[test]
    fn test_type_index_matches_table() {
        for (i, t) in CellType::ALL.iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }
}
