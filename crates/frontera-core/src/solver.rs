//! Solver boundary: status vocabulary, solution type, and the backend trait.
//!
//! Solver outcomes (including infeasibility and unboundedness) come back as
//! an [`Ok`] [`Solution`] carrying the corresponding [`SolverStatus`]; the
//! [`SolverError`] path is reserved for models a backend cannot even begin
//! to solve. This keeps one bad program from aborting a batch.

use crate::Model;
use std::collections::BTreeMap;

/// Outcome of a solve attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverStatus {
    /// Optimal solution found.
    Optimal,
    /// Constraints cannot be satisfied simultaneously.
    Infeasible,
    /// The objective is unbounded.
    Unbounded,
    /// The solve was not carried to completion (e.g. a backend limit).
    NotSolved,
    /// The backend failed internally; no meaningful outcome.
    Undefined,
}

impl SolverStatus {
    /// Check if the status indicates an optimal solution.
    pub fn is_optimal(self) -> bool {
        matches!(self, SolverStatus::Optimal)
    }

    /// Check if the status indicates infeasibility.
    pub fn is_infeasible(self) -> bool {
        matches!(self, SolverStatus::Infeasible)
    }

    /// Check if the status indicates unboundedness.
    pub fn is_unbounded(self) -> bool {
        matches!(self, SolverStatus::Unbounded)
    }

    /// Get a human-readable string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            SolverStatus::Optimal => "optimal",
            SolverStatus::Infeasible => "infeasible",
            SolverStatus::Unbounded => "unbounded",
            SolverStatus::NotSolved => "not_solved",
            SolverStatus::Undefined => "undefined",
        }
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for solver operations.
#[derive(Debug, Clone)]
pub enum SolverError {
    /// Model has no variables.
    EmptyModel,
    /// No objective function set.
    NoObjective,
    /// The model uses a feature the backend cannot express.
    UnsupportedModel(String),
    /// Backend failure before a solve outcome was available.
    Backend(String),
}

impl SolverError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::EmptyModel => "SOLVER_EMPTY_MODEL",
            SolverError::NoObjective => "SOLVER_NO_OBJECTIVE",
            SolverError::UnsupportedModel(_) => "SOLVER_UNSUPPORTED_MODEL",
            SolverError::Backend(_) => "SOLVER_BACKEND",
        }
    }
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::EmptyModel => write!(f, "[{}] Model has no variables", self.code()),
            SolverError::NoObjective => write!(f, "[{}] Model has no objective", self.code()),
            SolverError::UnsupportedModel(msg) => {
                write!(f, "[{}] Unsupported model: {}", self.code(), msg)
            }
            SolverError::Backend(msg) => {
                write!(f, "[{}] Solver backend error: {}", self.code(), msg)
            }
        }
    }
}

impl std::error::Error for SolverError {}

/// Solver-agnostic result of a solve attempt.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Primal values of variables indexed by their id position. Empty when
    /// the status carries no solution.
    pub primal_values: Vec<f64>,
    /// Objective value; NaN when the status carries no solution.
    pub objective_value: f64,
    /// Outcome of the solve.
    pub status: SolverStatus,
    /// Solve time in seconds.
    pub solve_time_seconds: f64,
    /// Backend metadata (iteration counts, gaps, ...).
    pub metadata: BTreeMap<String, f64>,
}

impl Solution {
    /// A solution for a solve that ended with a non-optimal outcome.
    pub fn without_values(status: SolverStatus, solve_time_seconds: f64) -> Self {
        Self {
            primal_values: Vec::new(),
            objective_value: f64::NAN,
            status,
            solve_time_seconds,
            metadata: BTreeMap::new(),
        }
    }

    /// Get the primal value at the given index.
    pub fn get_primal(&self, index: usize) -> Option<f64> {
        self.primal_values.get(index).copied()
    }

    /// Check if the solution is optimal.
    pub fn is_optimal(&self) -> bool {
        self.status.is_optimal()
    }

    /// Check if the solution is infeasible.
    pub fn is_infeasible(&self) -> bool {
        self.status.is_infeasible()
    }

    /// Check if the solution is unbounded.
    pub fn is_unbounded(&self) -> bool {
        self.status.is_unbounded()
    }

    /// Get a human-readable status string.
    pub fn status_string(&self) -> &'static str {
        self.status.as_str()
    }
}

/// Trait that all solver backends implement.
pub trait Solver {
    /// Solve the given model and return a solver-agnostic solution.
    fn solve(&mut self, model: &Model) -> Result<Solution, SolverError>;
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn status_predicates() {
        assert!(SolverStatus::Optimal.is_optimal());
        assert!(!SolverStatus::Infeasible.is_optimal());
        assert!(!SolverStatus::NotSolved.is_optimal());
        assert!(!SolverStatus::Undefined.is_optimal());

        assert!(SolverStatus::Infeasible.is_infeasible());
        assert!(!SolverStatus::Optimal.is_infeasible());

        assert!(SolverStatus::Unbounded.is_unbounded());
        assert!(!SolverStatus::Optimal.is_unbounded());
    }

    #[test]
    fn status_as_str() {
        assert_eq!(SolverStatus::Optimal.as_str(), "optimal");
        assert_eq!(SolverStatus::Infeasible.as_str(), "infeasible");
        assert_eq!(SolverStatus::Unbounded.as_str(), "unbounded");
        assert_eq!(SolverStatus::NotSolved.as_str(), "not_solved");
        assert_eq!(SolverStatus::Undefined.as_str(), "undefined");
        assert_eq!(format!("{}", SolverStatus::Optimal), "optimal");
    }

    #[test]
    fn solver_error_display() {
        assert_eq!(SolverError::EmptyModel.code(), "SOLVER_EMPTY_MODEL");
        assert!(SolverError::EmptyModel.to_string().contains("no variables"));
        assert!(
            SolverError::NoObjective
                .to_string()
                .contains("no objective")
        );
        assert!(
            SolverError::UnsupportedModel("ranged row".to_string())
                .to_string()
                .contains("ranged row")
        );
        assert!(
            SolverError::Backend("oops".to_string())
                .to_string()
                .contains("oops")
        );
    }

    #[test]
    fn solution_accessors() {
        let solution = Solution {
            primal_values: vec![1.0, 2.0, 3.0],
            objective_value: 10.0,
            status: SolverStatus::Optimal,
            solve_time_seconds: 0.1,
            metadata: BTreeMap::new(),
        };

        assert_eq!(solution.get_primal(0), Some(1.0));
        assert_eq!(solution.get_primal(3), None);
        assert!(solution.is_optimal());
        assert_eq!(solution.status_string(), "optimal");
    }

    #[test]
    fn without_values_has_nan_objective() {
        let solution = Solution::without_values(SolverStatus::Infeasible, 0.0);
        assert!(solution.objective_value.is_nan());
        assert!(solution.primal_values.is_empty());
        assert!(solution.is_infeasible());
    }
}
