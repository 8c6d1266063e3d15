//! DEA error types.
//!
//! Data and configuration errors are raised eagerly, before any solver
//! call; solver-reported outcomes (infeasible, unbounded, ...) are never
//! errors here — they land in the result's status column per DMU.

use frontera_core::{ModelError, SolverError};

/// Errors raised by dataset validation, configuration, model construction,
/// or result aggregation.
#[derive(Debug)]
pub enum DeaError {
    /// A table row has the wrong number of columns.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A table has no rows or no columns.
    EmptyTable { role: &'static str },
    /// Input and output tables disagree on the number of DMUs.
    RowCountMismatch { inputs: usize, outputs: usize },
    /// Row labels do not match the number of DMUs.
    LabelCountMismatch { labels: usize, rows: usize },
    /// Unrecognized returns-to-scale mode.
    UnknownReturns(String),
    /// Unrecognized solve kind.
    UnknownSolveKind(String),
    /// Model construction failed.
    Model(ModelError),
    /// A solver backend failed before producing an outcome.
    Solver(SolverError),
    /// A registered weight variable has no value in the solver output;
    /// model builder and aggregator have drifted out of sync.
    MissingWeightValue { dmu: usize, variable: u32 },
}

impl DeaError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            DeaError::RaggedRow { .. } => "DATA_RAGGED_ROW",
            DeaError::EmptyTable { .. } => "DATA_EMPTY_TABLE",
            DeaError::RowCountMismatch { .. } => "DATA_ROW_MISMATCH",
            DeaError::LabelCountMismatch { .. } => "DATA_LABEL_MISMATCH",
            DeaError::UnknownReturns(_) => "CONFIG_UNKNOWN_RETURNS",
            DeaError::UnknownSolveKind(_) => "CONFIG_UNKNOWN_SOLVE_KIND",
            DeaError::Model(_) => "MODEL_BUILD",
            DeaError::Solver(_) => "SOLVER_BACKEND",
            DeaError::MissingWeightValue { .. } => "WEIGHT_VALUE_MISSING",
        }
    }
}

impl std::fmt::Display for DeaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeaError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "[{}] Row {} has {} columns, expected {}",
                self.code(),
                row,
                found,
                expected
            ),
            DeaError::EmptyTable { role } => {
                write!(f, "[{}] The {} table has no data", self.code(), role)
            }
            DeaError::RowCountMismatch { inputs, outputs } => write!(
                f,
                "[{}] Inputs have {} rows but outputs have {}",
                self.code(),
                inputs,
                outputs
            ),
            DeaError::LabelCountMismatch { labels, rows } => write!(
                f,
                "[{}] {} row labels supplied for {} rows",
                self.code(),
                labels,
                rows
            ),
            DeaError::UnknownReturns(value) => write!(
                f,
                "[{}] Unrecognized returns-to-scale mode: {:?}",
                self.code(),
                value
            ),
            DeaError::UnknownSolveKind(value) => write!(
                f,
                "[{}] Unrecognized solve kind: {:?}",
                self.code(),
                value
            ),
            DeaError::Model(err) => write!(f, "[{}] {}", self.code(), err),
            DeaError::Solver(err) => write!(f, "[{}] {}", self.code(), err),
            DeaError::MissingWeightValue { dmu, variable } => write!(
                f,
                "[{}] DMU {} solution has no value for weight variable {}",
                self.code(),
                dmu,
                variable
            ),
        }
    }
}

impl std::error::Error for DeaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeaError::Model(err) => Some(err),
            DeaError::Solver(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelError> for DeaError {
    fn from(err: ModelError) -> Self {
        DeaError::Model(err)
    }
}

impl From<SolverError> for DeaError {
    fn from(err: SolverError) -> Self {
        DeaError::Solver(err)
    }
}
