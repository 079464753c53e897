#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Consistency enforcement over the constraint graph.
//!
//! Two phases prune the [`DomainStore`] before search:
//!
//! 1. **Node consistency** drops every candidate whose length disagrees
//!    with its variable's slot length (the only unary constraint).
//! 2. **Arc consistency (AC-3)** repeatedly revises ordered pairs of
//!    crossing variables until every remaining candidate has a supporting
//!    candidate at each overlap, or some domain empties.
//!
//! Both phases only ever remove words. An emptied domain means the puzzle
//! is unsatisfiable and is reported immediately via [`EmptyDomain`], a
//! defined outcome rather than a fault.

use crate::csp::domains::DomainStore;
use crate::csp::puzzle::Puzzle;
use crate::csp::variable::Variable;
use core::fmt;
use itertools::Itertools;
use log::{debug, trace};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Propagation wiped out this variable's domain: no candidate word is left
/// for it, so no solution exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyDomain(pub Variable);

impl fmt::Display for EmptyDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no candidates remain for variable {}", self.0)
    }
}

/// The outcome of a propagation pass: success, or the domain it emptied.
pub type PropagationResult = Result<(), EmptyDomain>;

/// Node- and arc-consistency enforcement for one puzzle.
#[derive(Debug, Clone, Copy)]
pub struct ConsistencyEngine<'p> {
    puzzle: &'p Puzzle,
}

impl<'p> ConsistencyEngine<'p> {
    /// An engine operating over `puzzle`'s constraint graph.
    #[must_use]
    pub const fn new(puzzle: &'p Puzzle) -> Self {
        Self { puzzle }
    }

    /// Removes from every domain each word whose character count differs
    /// from the variable's slot length. Runs once, cannot fail.
    pub fn enforce_node_consistency(&self, domains: &mut DomainStore) {
        for var in self.puzzle.variables() {
            let length = var.length;
            let removed = domains.retain(var, |word| word.chars().count() == length);
            if removed > 0 {
                debug!("node consistency removed {removed} candidates from {var}");
            }
        }
    }

    /// Makes `x` arc-consistent with `y`: removes from `x`'s domain every
    /// word with no supporting word in `y`'s domain at the pair's overlap
    /// position. A no-op when the pair does not overlap.
    ///
    /// Returns whether any word was removed.
    pub fn revise(&self, domains: &mut DomainStore, x: &Variable, y: &Variable) -> bool {
        let Some((i, j)) = self.puzzle.overlap(x, y) else {
            return false;
        };

        let supported: FxHashSet<char> = domains
            .candidates(y)
            .iter()
            .filter_map(|word| word.chars().nth(j))
            .collect();

        let removed = domains.retain(x, |word| {
            word.chars().nth(i).is_some_and(|c| supported.contains(&c))
        });
        if removed > 0 {
            trace!("revise removed {removed} candidates from {x} against {y}");
        }
        removed > 0
    }

    /// AC-3 worklist propagation.
    ///
    /// Starts from `arcs` when supplied (for incremental re-propagation),
    /// otherwise from every ordered pair of distinct variables. Each popped
    /// pair `(x, y)` is revised; if that shrank `x`'s domain, every
    /// neighbour `z != y` is re-enqueued as `(z, x)`. Pop order is LIFO,
    /// which is correctness-neutral.
    ///
    /// # Errors
    ///
    /// [`EmptyDomain`] as soon as any revision empties a domain: the
    /// puzzle is unsatisfiable and the whole solve should stop.
    pub fn ac3(
        &self,
        domains: &mut DomainStore,
        arcs: Option<Vec<(Variable, Variable)>>,
    ) -> PropagationResult {
        let mut worklist: VecDeque<(Variable, Variable)> = match arcs {
            Some(arcs) => arcs.into(),
            None => {
                let vars = self.puzzle.variables();
                vars.iter()
                    .cartesian_product(vars.iter())
                    .filter(|(x, y)| x != y)
                    .map(|(&x, &y)| (x, y))
                    .collect()
            }
        };

        while let Some((x, y)) = worklist.pop_back() {
            if self.revise(domains, &x, &y) {
                if domains.is_empty(&x) {
                    debug!("arc consistency wiped out the domain of {x}");
                    return Err(EmptyDomain(x));
                }
                for &z in self.puzzle.neighbors(&x) {
                    if z != y {
                        worklist.push_back((z, x));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::domains::Dictionary;
    use crate::csp::grid::Grid;
    use crate::csp::variable::Direction;

    fn dictionary(words: &[&str]) -> Dictionary {
        words.iter().map(ToString::to_string).collect()
    }

    // ___
    // #_#
    // #_#
    //
    // One across slot of length 3 crossing one down slot of length 3 at the
    // across slot's index 1 / the down slot's index 0.
    fn crossing() -> (Puzzle, Variable, Variable) {
        let puzzle = Puzzle::new(Grid::from_pattern(&["___", "#_#", "#_#"]));
        let across = Variable::new(0, 0, Direction::Across, 3);
        let down = Variable::new(0, 1, Direction::Down, 3);
        (puzzle, across, down)
    }

    #[test]
    fn node_consistency_keeps_only_matching_lengths() {
        let (puzzle, across, down) = crossing();
        let mut domains = DomainStore::new(&puzzle, &dictionary(&["cat", "to", "horse"]));

        ConsistencyEngine::new(&puzzle).enforce_node_consistency(&mut domains);

        for var in [&across, &down] {
            assert!(
                domains
                    .candidates(var)
                    .iter()
                    .all(|word| word.chars().count() == var.length),
                "every surviving word matches the slot length"
            );
            assert_eq!(domains.size(var), 1, "only \"cat\" is length 3");
        }
    }

    #[test]
    fn revise_is_a_noop_without_an_overlap() {
        let puzzle = Puzzle::new(Grid::from_pattern(&["__#__"]));
        let left = Variable::new(0, 0, Direction::Across, 2);
        let right = Variable::new(0, 3, Direction::Across, 2);
        let mut domains = DomainStore::new(&puzzle, &dictionary(&["at", "to"]));

        let engine = ConsistencyEngine::new(&puzzle);
        assert!(!engine.revise(&mut domains, &left, &right));
        assert_eq!(domains.size(&left), 2);
    }

    #[test]
    fn revise_drops_unsupported_words_only() {
        let (puzzle, across, down) = crossing();
        let mut domains = DomainStore::new(&puzzle, &dictionary(&["car", "ant", "rat"]));
        let engine = ConsistencyEngine::new(&puzzle);

        // The across slot's second letter must match some down word's first
        // letter (c, a or r). "ant" has 'n' there: no support.
        assert!(engine.revise(&mut domains, &across, &down));
        assert!(!domains.candidates(&across).contains("ant"));
        assert_eq!(domains.size(&across), 2);

        // Repeating the revision removes nothing further.
        assert!(!engine.revise(&mut domains, &across, &down));
    }

    #[test]
    fn ac3_reaches_full_arc_consistency() {
        let (puzzle, across, down) = crossing();
        let mut domains = DomainStore::new(&puzzle, &dictionary(&["car", "ant", "rat"]));
        let engine = ConsistencyEngine::new(&puzzle);

        assert_eq!(engine.ac3(&mut domains, None), Ok(()));

        // Only "ant" starts with a letter some across word carries at its
        // crossing position, and only "car"/"rat" carry that letter.
        assert_eq!(domains.candidates(&down), &dictionary(&["ant"]));
        assert_eq!(domains.candidates(&across), &dictionary(&["car", "rat"]));

        // Support property: every survivor has a partner at the overlap.
        let (i, j) = puzzle.overlap(&across, &down).unwrap();
        for word_x in domains.candidates(&across) {
            assert!(domains.candidates(&down).iter().any(|word_y| {
                word_x.chars().nth(i) == word_y.chars().nth(j)
            }));
        }
    }

    #[test]
    fn ac3_is_idempotent() {
        let (puzzle, across, down) = crossing();
        let mut domains = DomainStore::new(&puzzle, &dictionary(&["car", "ant", "rat"]));
        let engine = ConsistencyEngine::new(&puzzle);

        assert_eq!(engine.ac3(&mut domains, None), Ok(()));
        let sizes = (domains.size(&across), domains.size(&down));

        assert_eq!(engine.ac3(&mut domains, None), Ok(()));
        assert_eq!(
            (domains.size(&across), domains.size(&down)),
            sizes,
            "a second pass removes nothing"
        );
    }

    #[test]
    fn ac3_reports_the_wiped_out_variable() {
        let (puzzle, across, down) = crossing();
        // No word's second letter matches any word's first letter.
        let mut domains = DomainStore::new(&puzzle, &dictionary(&["cat", "dog"]));
        let engine = ConsistencyEngine::new(&puzzle);

        let result = engine.ac3(&mut domains, None);
        let emptied = result.expect_err("propagation must fail");
        assert!(emptied.0 == across || emptied.0 == down);
        assert!(domains.is_empty(&emptied.0));
    }

    #[test]
    fn ac3_accepts_a_caller_supplied_worklist() {
        let (puzzle, across, down) = crossing();
        let mut domains = DomainStore::new(&puzzle, &dictionary(&["car", "ant", "rat"]));
        let engine = ConsistencyEngine::new(&puzzle);

        // Only the (across, down) arc: the down domain stays untouched
        // because the shrunk variable's sole neighbour is the excluded `y`.
        assert_eq!(
            engine.ac3(&mut domains, Some(vec![(across, down)])),
            Ok(())
        );
        assert!(!domains.candidates(&across).contains("ant"));
    }

    #[test]
    fn empty_domain_names_the_variable() {
        let var = Variable::new(0, 1, Direction::Down, 3);
        let message = EmptyDomain(var).to_string();
        assert!(message.contains("(0, 1) down"), "got: {message}");
    }
}
