#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The top-level solve pipeline.
//!
//! A [`CrosswordSolver`] owns the derived [`Puzzle`] and one
//! [`DomainStore`], and runs the whole solve as a single synchronous
//! computation: node consistency, then AC-3, then backtracking search.
//! The result is either a complete valid [`Assignment`] or `None` for an
//! unsatisfiable puzzle. A puzzle with no word slots at all solves to an
//! empty (and complete) assignment, never to `None`.

use crate::csp::assignment::Assignment;
use crate::csp::consistency::{ConsistencyEngine, EmptyDomain};
use crate::csp::domains::{Dictionary, DomainStore};
use crate::csp::grid::Grid;
use crate::csp::puzzle::Puzzle;
use crate::csp::search::Backtracker;
use crate::csp::value_ordering::{LeastConstraining, ValueOrdering};
use crate::csp::variable_selection::{MinimumRemaining, VariableSelection};
use log::debug;

/// A complete crossword solve: construction from the parsed inputs and a
/// single `solve` call producing an assignment or "no solution".
pub trait Solver {
    /// Builds a solver for `grid` over the vocabulary `words`.
    fn new(grid: Grid, words: &Dictionary) -> Self;

    /// Runs the solve. `None` means unsatisfiable, which is a defined
    /// outcome rather than an error.
    fn solve(&mut self) -> Option<Assignment>;
}

/// The AC-3 + backtracking crossword solver, generic over the search
/// strategies.
#[derive(Debug, Clone)]
pub struct CrosswordSolver<V = MinimumRemaining, O = LeastConstraining> {
    puzzle: Puzzle,
    domains: DomainStore,
    selector: V,
    ordering: O,
}

impl<V: VariableSelection, O: ValueOrdering> CrosswordSolver<V, O> {
    /// Builds a solver with explicit strategies.
    #[must_use]
    pub fn with_strategies(grid: Grid, words: &Dictionary, selector: V, ordering: O) -> Self {
        let puzzle = Puzzle::new(grid);
        let domains = DomainStore::new(&puzzle, words);
        Self {
            puzzle,
            domains,
            selector,
            ordering,
        }
    }

    /// The derived constraint graph.
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }
}

impl<V, O> Solver for CrosswordSolver<V, O>
where
    V: VariableSelection + Default,
    O: ValueOrdering + Default,
{
    fn new(grid: Grid, words: &Dictionary) -> Self {
        Self::with_strategies(grid, words, V::default(), O::default())
    }

    fn solve(&mut self) -> Option<Assignment> {
        let engine = ConsistencyEngine::new(&self.puzzle);

        engine.enforce_node_consistency(&mut self.domains);
        if let Some(&var) = self
            .puzzle
            .variables()
            .iter()
            .find(|var| self.domains.is_empty(var))
        {
            debug!("unsatisfiable after node consistency: {}", EmptyDomain(var));
            return None;
        }

        if let Err(emptied) = engine.ac3(&mut self.domains, None) {
            debug!("unsatisfiable during propagation: {emptied}");
            return None;
        }

        Backtracker::with_strategies(&self.puzzle, &self.selector, &self.ordering)
            .search(&self.domains)
    }
}
