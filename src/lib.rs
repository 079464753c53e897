//! A crossword generator core: constraint-satisfaction solving over word
//! slots derived from a puzzle grid.
//!
//! Callers supply an in-memory fillable/blocked cell matrix and a word
//! dictionary; the solver enforces node consistency, propagates binary arc
//! consistency (AC-3) over the crossing constraints, and runs backtracking
//! search over the pruned domains. The result is a complete assignment of
//! words to slots, or an explicit "no solution". Parsing structure files
//! and rendering filled grids are left to the host application.

/// The `csp` module implements the constraint-satisfaction solver: grid
/// model, domain store, consistency engine and backtracking search.
pub mod csp;
