//! This crate provides a best-first search solver that turns a Rack-O rack
//! into non-decreasing order by drawing deck cards and placing them into
//! rack slots.
mod heuristic;
mod solver;
mod state;

use crate::state::*;

pub use crate::heuristic::min_replacements;
pub use crate::solver::{DEFAULT_MAX_STATES, SolveError, SolveResult, Solver, solve};
pub use crate::state::PuzzleState;
