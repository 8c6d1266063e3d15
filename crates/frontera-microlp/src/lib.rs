//! Bridge from frontera models to the `microlp` simplex solver.
//!
//! This crate lowers a `frontera_core::Model` to a `microlp::Problem`,
//! runs the solve, and maps the outcome back onto the solver-agnostic
//! [`frontera_core::Solution`]. The simplex algorithm itself lives in
//! the external `microlp` crate.

pub mod solver;
mod status;

pub use solver::MicrolpSolver;
