#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Strategies for picking the next unassigned variable.
//!
//! Any deterministic total order is a correct policy; the quality policy is
//! "most constrained, most constraining": fewest remaining candidates,
//! ties broken towards the variable crossing the most others.

use crate::csp::assignment::Assignment;
use crate::csp::domains::DomainStore;
use crate::csp::puzzle::Puzzle;
use crate::csp::variable::Variable;

/// Picks the next variable for the backtracking search to branch on.
pub trait VariableSelection {
    /// The unassigned variable to branch on next, or `None` when every
    /// variable is assigned.
    fn pick(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<Variable>;
}

impl<V: VariableSelection + ?Sized> VariableSelection for &V {
    fn pick(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<Variable> {
        (**self).pick(puzzle, domains, assignment)
    }
}

/// Minimum-remaining-values: the unassigned variable with the fewest
/// candidates left, ties broken by highest degree, then positionally.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumRemaining;

impl VariableSelection for MinimumRemaining {
    fn pick(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<Variable> {
        puzzle
            .variables()
            .iter()
            .filter(|var| !assignment.contains(var))
            .min_by(|a, b| {
                domains
                    .size(a)
                    .cmp(&domains.size(b))
                    .then_with(|| puzzle.neighbors(b).len().cmp(&puzzle.neighbors(a).len()))
                    .then_with(|| a.cmp(b))
            })
            .copied()
    }
}

/// The first unassigned variable in grid-derivation order. Slower on hard
/// puzzles but equally correct.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputOrder;

impl VariableSelection for InputOrder {
    fn pick(
        &self,
        puzzle: &Puzzle,
        _domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<Variable> {
        puzzle
            .variables()
            .iter()
            .find(|var| !assignment.contains(var))
            .copied()
    }
}
