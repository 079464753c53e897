#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Backtracking search over partial assignments.
//!
//! The search consumes the pruned [`DomainStore`] read-only: candidate
//! filtering during a branch is local to the recursion, and a retracted
//! binding leaves no trace. Each tentative binding is checked only against
//! the variable's already-assigned neighbours plus the global-distinctness
//! and length constraints, which is equivalent to re-checking the whole
//! assignment, since every earlier pair was verified when it was formed. The
//! full check is kept public as [`assignment_consistent`].

use crate::csp::assignment::Assignment;
use crate::csp::domains::DomainStore;
use crate::csp::puzzle::Puzzle;
use crate::csp::variable::Variable;
use crate::csp::value_ordering::{LeastConstraining, ValueOrdering};
use crate::csp::variable_selection::{MinimumRemaining, VariableSelection};
use log::debug;
use rustc_hash::FxHashSet;

/// The full consistency check of a (partial or complete) assignment: no
/// word is used twice, every word fits its slot's length, and every
/// assigned crossing pair agrees at its overlap positions.
#[must_use]
pub fn assignment_consistent(puzzle: &Puzzle, assignment: &Assignment) -> bool {
    let mut used = FxHashSet::default();

    for (var, word) in assignment.iter() {
        if !used.insert(word) {
            return false;
        }
        if word.chars().count() != var.length {
            return false;
        }
        for neighbor in puzzle.neighbors(var) {
            let Some(other) = assignment.get(neighbor) else {
                continue;
            };
            let Some((i, j)) = puzzle.overlap(var, neighbor) else {
                continue;
            };
            if word.chars().nth(i) != other.chars().nth(j) {
                return false;
            }
        }
    }

    true
}

/// Recursive backtracking search, generic over the variable-selection and
/// value-ordering strategies.
#[derive(Debug, Clone)]
pub struct Backtracker<'p, V = MinimumRemaining, O = LeastConstraining> {
    puzzle: &'p Puzzle,
    selector: V,
    ordering: O,
}

impl<'p> Backtracker<'p> {
    /// A search over `puzzle` with the default strategies.
    #[must_use]
    pub const fn new(puzzle: &'p Puzzle) -> Self {
        Self::with_strategies(puzzle, MinimumRemaining, LeastConstraining)
    }
}

impl<'p, V: VariableSelection, O: ValueOrdering> Backtracker<'p, V, O> {
    /// A search over `puzzle` with explicit strategies.
    #[must_use]
    pub const fn with_strategies(puzzle: &'p Puzzle, selector: V, ordering: O) -> Self {
        Self {
            puzzle,
            selector,
            ordering,
        }
    }

    /// Searches for a complete valid assignment over the pruned `domains`.
    ///
    /// `None` means the search space is exhausted: the puzzle is
    /// unsatisfiable. That is a normal outcome, not a fault.
    #[must_use]
    pub fn search(&self, domains: &DomainStore) -> Option<Assignment> {
        let mut assignment = Assignment::new();
        if self.recurse(domains, &mut assignment) {
            debug!("search completed with {} bindings", assignment.len());
            Some(assignment)
        } else {
            debug!("search exhausted every branch: unsatisfiable");
            None
        }
    }

    fn recurse(&self, domains: &DomainStore, assignment: &mut Assignment) -> bool {
        if assignment.is_complete(self.puzzle.variable_count()) {
            return true;
        }

        let Some(var) = self.selector.pick(self.puzzle, domains, assignment) else {
            return false;
        };

        for word in self.ordering.order(self.puzzle, domains, assignment, &var) {
            if !self.compatible(assignment, &var, &word) {
                continue;
            }
            let _ = assignment.insert(var, word);
            if self.recurse(domains, assignment) {
                return true;
            }
            // Failed branch: retract the binding before the next candidate.
            let _ = assignment.remove(&var);
        }

        false
    }

    /// Whether binding `var` to `word` keeps the assignment consistent:
    /// slot length, global word distinctness, and agreement with every
    /// already-assigned crossing neighbour.
    fn compatible(&self, assignment: &Assignment, var: &Variable, word: &str) -> bool {
        if word.chars().count() != var.length || assignment.uses_word(word) {
            return false;
        }

        self.puzzle.neighbors(var).iter().all(|neighbor| {
            match (assignment.get(neighbor), self.puzzle.overlap(var, neighbor)) {
                (Some(other), Some((i, j))) => word.chars().nth(i) == other.chars().nth(j),
                _ => true,
            }
        })
    }
}
