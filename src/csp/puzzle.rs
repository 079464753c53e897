#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The constraint graph derived from a [`Grid`].
//!
//! A [`Puzzle`] precomputes, once, everything the consistency engine and
//! the search need to know about the grid: the word-slot variables, the
//! overlap map (for every pair of crossing slots, the character position
//! within each slot at which they must agree), and per-variable neighbour
//! lists. It is immutable after construction.

use crate::csp::grid::Grid;
use crate::csp::variable::Variable;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Cell lists are short: word slots rarely exceed a dozen cells.
type CellList = SmallVec<[(usize, usize); 16]>;

/// A grid together with its derived variables and overlap structure.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    variables: Vec<Variable>,
    overlaps: FxHashMap<(Variable, Variable), (usize, usize)>,
    neighbors: FxHashMap<Variable, Vec<Variable>>,
}

impl Puzzle {
    /// Derives the variables and overlap map from `grid`.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let variables = grid.variables();

        let cells: Vec<CellList> = variables
            .iter()
            .map(|var| var.cells().collect())
            .collect();

        let mut overlaps = FxHashMap::default();
        let mut neighbors: FxHashMap<Variable, Vec<Variable>> =
            variables.iter().map(|&var| (var, Vec::new())).collect();

        for ((ix, &x), (iy, &y)) in variables.iter().enumerate().tuple_combinations() {
            // Two distinct maximal runs share at most one cell.
            let shared = cells[ix].iter().enumerate().find_map(|(i, cell)| {
                cells[iy]
                    .iter()
                    .position(|other| other == cell)
                    .map(|j| (i, j))
            });

            if let Some((i, j)) = shared {
                let _ = overlaps.insert((x, y), (i, j));
                let _ = overlaps.insert((y, x), (j, i));
                if let Some(list) = neighbors.get_mut(&x) {
                    list.push(y);
                }
                if let Some(list) = neighbors.get_mut(&y) {
                    list.push(x);
                }
            }
        }

        Self {
            grid,
            variables,
            overlaps,
            neighbors,
        }
    }

    /// The underlying cell matrix.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// All word-slot variables, in derivation order.
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Number of word-slot variables.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// The character positions at which `x` and `y` must agree, or `None`
    /// if the two slots share no cell. Symmetric: `overlap(x, y)` and
    /// `overlap(y, x)` describe the same crossing with indices swapped.
    ///
    /// # Panics
    ///
    /// If `x == y`, or if either variable is not part of this puzzle. Both
    /// are contract violations by the caller, not data conditions.
    #[must_use]
    pub fn overlap(&self, x: &Variable, y: &Variable) -> Option<(usize, usize)> {
        assert!(x != y, "overlap queried for a variable with itself: {x}");
        assert!(
            self.neighbors.contains_key(x),
            "variable not in this puzzle: {x}"
        );
        assert!(
            self.neighbors.contains_key(y),
            "variable not in this puzzle: {y}"
        );
        self.overlaps.get(&(*x, *y)).copied()
    }

    /// Every variable sharing at least one cell with `x`.
    ///
    /// # Panics
    ///
    /// If `x` is not part of this puzzle.
    #[must_use]
    pub fn neighbors(&self, x: &Variable) -> &[Variable] {
        self.neighbors
            .get(x)
            .unwrap_or_else(|| panic!("variable not in this puzzle: {x}"))
    }
}
