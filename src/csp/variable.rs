#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Word-slot variables.
//!
//! A [`Variable`] identifies one slot in the puzzle: where it starts, which
//! way it runs, and how many cells it spans. Identity (equality, hashing and
//! ordering) is the `(row, col, direction)` triple; the length is carried
//! data derived from the grid, not part of the identity.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// The two directions a word slot can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// A single word slot: starting cell, direction and required word length.
#[derive(Debug, Clone, Copy)]
pub struct Variable {
    /// Row of the slot's first cell.
    pub row: usize,
    /// Column of the slot's first cell.
    pub col: usize,
    /// Which way the slot runs.
    pub direction: Direction,
    /// Number of cells the slot spans (always at least 2).
    pub length: usize,
}

impl Variable {
    /// Creates a variable starting at `(row, col)`, running `direction`,
    /// spanning `length` cells.
    #[must_use]
    pub const fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    /// The `(row, col)` cells this slot occupies, in word order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (dr, dc) = match self.direction {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        };
        (0..self.length).map(move |k| (self.row + k * dr, self.col + k * dc))
    }

    const fn identity(&self) -> (usize, usize, Direction) {
        (self.row, self.col, self.direction)
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} length {}",
            self.row, self.col, self.direction, self.length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(var: &Variable) -> u64 {
        let mut hasher = DefaultHasher::new();
        var.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn identity_is_position_and_direction() {
        let a = Variable::new(0, 1, Direction::Down, 3);
        let b = Variable::new(0, 1, Direction::Down, 5);
        let c = Variable::new(0, 1, Direction::Across, 3);

        assert_eq!(a, b, "length is not part of identity");
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c, "direction is part of identity");
    }

    #[test]
    fn cells_across() {
        let var = Variable::new(2, 1, Direction::Across, 3);
        let cells: Vec<_> = var.cells().collect();
        assert_eq!(cells, vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn cells_down() {
        let var = Variable::new(0, 4, Direction::Down, 4);
        let cells: Vec<_> = var.cells().collect();
        assert_eq!(cells, vec![(0, 4), (1, 4), (2, 4), (3, 4)]);
    }

    #[test]
    fn ordering_is_positional() {
        let mut vars = vec![
            Variable::new(1, 0, Direction::Across, 3),
            Variable::new(0, 2, Direction::Down, 3),
            Variable::new(0, 0, Direction::Across, 4),
        ];
        vars.sort_unstable();
        assert_eq!(vars[0], Variable::new(0, 0, Direction::Across, 4));
        assert_eq!(vars[1], Variable::new(0, 2, Direction::Down, 3));
        assert_eq!(vars[2], Variable::new(1, 0, Direction::Across, 3));
    }
}
