#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
pub mod assignment;
pub mod consistency;
pub mod domains;
pub mod grid;
pub mod puzzle;
pub mod search;
pub mod solver;
pub mod value_ordering;
pub mod variable;
pub mod variable_selection;
