#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Per-variable candidate-word sets.
//!
//! A [`DomainStore`] is created once per solve attempt with every variable's
//! domain initialised to the full dictionary, then pruned monotonically by
//! the consistency engine. Nothing ever adds a word back during a solve.
//! The search reads domains but does not mutate them.

use crate::csp::puzzle::Puzzle;
use crate::csp::variable::Variable;
use rustc_hash::{FxHashMap, FxHashSet};

/// The shared read-only vocabulary of candidate words.
pub type Dictionary = FxHashSet<String>;

/// Mapping from each variable to its remaining candidate words.
#[derive(Debug, Clone)]
pub struct DomainStore {
    domains: FxHashMap<Variable, FxHashSet<String>>,
}

impl DomainStore {
    /// Initialises every variable's domain to the full dictionary.
    #[must_use]
    pub fn new(puzzle: &Puzzle, words: &Dictionary) -> Self {
        Self {
            domains: puzzle
                .variables()
                .iter()
                .map(|&var| (var, words.clone()))
                .collect(),
        }
    }

    /// The candidate words still considered possible for `var`.
    ///
    /// # Panics
    ///
    /// If `var` has no domain in this store (contract violation).
    #[must_use]
    pub fn candidates(&self, var: &Variable) -> &FxHashSet<String> {
        self.domains
            .get(var)
            .unwrap_or_else(|| panic!("variable has no domain in this store: {var}"))
    }

    /// Removes `word` from `var`'s domain. Returns whether it was present.
    ///
    /// # Panics
    ///
    /// If `var` has no domain in this store (contract violation).
    pub fn remove(&mut self, var: &Variable, word: &str) -> bool {
        self.domains
            .get_mut(var)
            .unwrap_or_else(|| panic!("variable has no domain in this store: {var}"))
            .remove(word)
    }

    /// Keeps only the words in `var`'s domain satisfying `keep`. Returns the
    /// number of words removed.
    ///
    /// # Panics
    ///
    /// If `var` has no domain in this store (contract violation).
    pub fn retain(&mut self, var: &Variable, mut keep: impl FnMut(&str) -> bool) -> usize {
        let domain = self
            .domains
            .get_mut(var)
            .unwrap_or_else(|| panic!("variable has no domain in this store: {var}"));
        let before = domain.len();
        domain.retain(|word| keep(word));
        before - domain.len()
    }

    /// Number of candidates remaining for `var`.
    #[must_use]
    pub fn size(&self, var: &Variable) -> usize {
        self.candidates(var).len()
    }

    /// Whether `var` has no candidates left.
    #[must_use]
    pub fn is_empty(&self, var: &Variable) -> bool {
        self.candidates(var).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::grid::Grid;
    use crate::csp::variable::Direction;

    fn store() -> (Puzzle, DomainStore) {
        let puzzle = Puzzle::new(Grid::from_pattern(&["___", "#_#", "#_#"]));
        let words: Dictionary = ["cat", "car", "tar"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let domains = DomainStore::new(&puzzle, &words);
        (puzzle, domains)
    }

    #[test]
    fn every_domain_starts_as_the_full_dictionary() {
        let (puzzle, domains) = store();
        for var in puzzle.variables() {
            assert_eq!(domains.size(var), 3);
            assert!(domains.candidates(var).contains("tar"));
        }
    }

    #[test]
    fn removal_is_reported_and_permanent() {
        let (puzzle, mut domains) = store();
        let var = puzzle.variables()[0];

        assert!(domains.remove(&var, "cat"));
        assert!(!domains.remove(&var, "cat"), "already gone");
        assert_eq!(domains.size(&var), 2);
        assert!(!domains.is_empty(&var));
    }

    #[test]
    fn retain_reports_removal_count() {
        let (puzzle, mut domains) = store();
        let var = puzzle.variables()[0];

        let removed = domains.retain(&var, |word| word.starts_with('c'));
        assert_eq!(removed, 1);
        assert_eq!(domains.size(&var), 2);
    }

    #[test]
    #[should_panic(expected = "no domain in this store")]
    fn unknown_variable_is_a_contract_violation() {
        let (_, domains) = store();
        let stranger = Variable::new(9, 9, Direction::Down, 4);
        let _ = domains.size(&stranger);
    }
}
