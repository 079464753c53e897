#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Strategies for ordering a variable's candidate words during search.
//!
//! Ordering affects only how quickly a solution is found, never which
//! puzzles are solvable. The quality policy tries the least-constraining
//! value first: the word ruling out the fewest candidates across the
//! variable's unassigned neighbours.

use crate::csp::assignment::Assignment;
use crate::csp::domains::DomainStore;
use crate::csp::puzzle::Puzzle;
use crate::csp::variable::Variable;
use itertools::Itertools;

/// Orders the candidate words the search will try for a variable.
pub trait ValueOrdering {
    /// `var`'s remaining candidates, in the order the search should try
    /// them.
    fn order(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
        var: &Variable,
    ) -> Vec<String>;
}

impl<O: ValueOrdering + ?Sized> ValueOrdering for &O {
    fn order(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
        var: &Variable,
    ) -> Vec<String> {
        (**self).order(puzzle, domains, assignment, var)
    }
}

/// Least-constraining-value: fewest neighbour candidates ruled out first,
/// ties broken lexicographically.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastConstraining;

impl ValueOrdering for LeastConstraining {
    fn order(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
        var: &Variable,
    ) -> Vec<String> {
        let crossings: Vec<(Variable, (usize, usize))> = puzzle
            .neighbors(var)
            .iter()
            .filter(|z| !assignment.contains(z))
            .filter_map(|&z| puzzle.overlap(var, &z).map(|positions| (z, positions)))
            .collect();

        domains
            .candidates(var)
            .iter()
            .map(|word| {
                let ruled_out: usize = crossings
                    .iter()
                    .map(|(z, (i, j))| {
                        let ours = word.chars().nth(*i);
                        domains
                            .candidates(z)
                            .iter()
                            .filter(|other| other.chars().nth(*j) != ours)
                            .count()
                    })
                    .sum();
                (ruled_out, word.clone())
            })
            .sorted_unstable()
            .map(|(_, word)| word)
            .collect()
    }
}

/// Plain lexicographic order: the deterministic baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct DictionaryOrder;

impl ValueOrdering for DictionaryOrder {
    fn order(
        &self,
        _puzzle: &Puzzle,
        domains: &DomainStore,
        _assignment: &Assignment,
        var: &Variable,
    ) -> Vec<String> {
        domains
            .candidates(var)
            .iter()
            .cloned()
            .sorted_unstable()
            .collect()
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
    fn crossing() -> (Puzzle, Variable, Variable) {
        let puzzle = Puzzle::new(Grid::from_pattern(&["___", "#_#", "#_#"]));
        let across = Variable::new(0, 0, Direction::Across, 3);
        let down = Variable::new(0, 1, Direction::Down, 3);
        (puzzle, across, down)
    }

    #[test]
    fn least_constraining_tries_the_gentlest_word_first() {
        let (puzzle, across, down) = crossing();
        let mut domains =
            DomainStore::new(&puzzle, &dictionary(&["car", "rat", "cat", "art", "tar"]));
        // Shape the two domains by hand.
        let _ = domains.retain(&across, |word| matches!(word, "car" | "rat" | "cat"));
        let _ = domains.retain(&down, |word| matches!(word, "art" | "tar"));

        // Every across word has 'a' at the crossing, so "art" rules out
        // nothing while "tar" rules out all three.
        let ordered = LeastConstraining.order(&puzzle, &domains, &Assignment::new(), &down);
        assert_eq!(ordered, vec!["art".to_owned(), "tar".to_owned()]);
    }

    #[test]
    fn least_constraining_ignores_assigned_neighbours() {
        let (puzzle, across, down) = crossing();
        let domains = DomainStore::new(&puzzle, &dictionary(&["art", "tar"]));
        let mut assignment = Assignment::new();
        let _ = assignment.insert(across, "car".to_owned());

        // With the only neighbour assigned nothing is ruled out, so the
        // order falls back to the lexicographic tie-break.
        let ordered = LeastConstraining.order(&puzzle, &domains, &assignment, &down);
        assert_eq!(ordered, vec!["art".to_owned(), "tar".to_owned()]);
    }

    #[test]
    fn dictionary_order_is_lexicographic() {
        let (puzzle, across, _) = crossing();
        let domains = DomainStore::new(&puzzle, &dictionary(&["tar", "art", "car"]));

        let ordered = DictionaryOrder.order(&puzzle, &domains, &Assignment::new(), &across);
        assert_eq!(
            ordered,
            vec!["art".to_owned(), "car".to_owned(), "tar".to_owned()]
        );
    }
}
