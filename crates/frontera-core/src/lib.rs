//! Solver-agnostic linear programming model layer.
//!
//! This crate provides the model-building side of the frontera workspace:
//! typed variable and constraint ids, linear expressions, a column-first
//! [`Model`] builder, and the [`Solver`]/[`Solution`] boundary that solver
//! backends implement.

pub mod expr;
pub mod ids;
pub mod model;
pub mod solver;
pub mod types;

pub use expr::{ComparisonSense, ConstraintExpr, Expr, linear_sum};
pub use ids::{ConstraintId, VariableId};
pub use model::{Model, ModelError};
pub use solver::{Solution, Solver, SolverError, SolverStatus};
pub use types::{Bounds, Constraint, Objective, Sense, Variable};
