#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Partial assignments of words to variables.

use crate::csp::variable::Variable;
use rustc_hash::FxHashMap;

/// A partial mapping from variables to chosen words, built up incrementally
/// by the backtracking search and discarded on failed branches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    map: FxHashMap<Variable, String>,
}

impl Assignment {
    /// An empty assignment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The word assigned to `var`, if any.
    #[must_use]
    pub fn get(&self, var: &Variable) -> Option<&str> {
        self.map.get(var).map(String::as_str)
    }

    /// Whether `var` has been assigned a word.
    #[must_use]
    pub fn contains(&self, var: &Variable) -> bool {
        self.map.contains_key(var)
    }

    /// Whether any variable has been assigned `word`.
    #[must_use]
    pub fn uses_word(&self, word: &str) -> bool {
        self.map.values().any(|assigned| assigned == word)
    }

    /// Binds `var` to `word`, returning any previous binding.
    pub fn insert(&mut self, var: Variable, word: String) -> Option<String> {
        self.map.insert(var, word)
    }

    /// Retracts `var`'s binding, returning it if one existed.
    pub fn remove(&mut self, var: &Variable) -> Option<String> {
        self.map.remove(var)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether every one of the puzzle's `variable_count` variables is bound.
    #[must_use]
    pub fn is_complete(&self, variable_count: usize) -> bool {
        self.map.len() == variable_count
    }

    /// Iterates over the bound `(variable, word)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &str)> {
        self.map.iter().map(|(var, word)| (var, word.as_str()))
    }
}
