//! Model module for building linear programs.
//!
//! - [`error`]: model error types
//! - [`builder`]: methods for adding variables, constraints, and objectives
//! - [`metadata`]: variable and constraint naming

mod builder;
mod error;
mod metadata;

use crate::ids::{ConstraintId, VariableId};
use crate::types::{Constraint, Objective, Variable};
use std::collections::BTreeMap;

pub use error::ModelError;

/// A builder for linear programs.
///
/// Variables, constraints, and the objective can be added in any order.
/// Coefficients are kept in column-first sparse storage; [`Model::rows`]
/// derives the row-wise view that solver adapters consume.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub(crate) variables: BTreeMap<VariableId, Variable>,
    pub(crate) constraints: BTreeMap<ConstraintId, Constraint>,
    pub(crate) objective: Objective,
    // Column-first sparse storage: variable id -> (constraint id, coefficient)
    pub(crate) columns: BTreeMap<VariableId, Vec<(ConstraintId, f64)>>,
    pub(crate) next_variable_id: u32,
    pub(crate) next_constraint_id: u32,
    // Lazy-allocated name storage
    pub(crate) variable_names: Option<BTreeMap<VariableId, String>>,
    pub(crate) constraint_names: Option<BTreeMap<ConstraintId, String>>,
}

impl Model {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the objective.
    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    /// Number of variables.
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Number of constraints.
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Number of stored coefficients.
    pub fn num_coefficients(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    /// Get a variable by id.
    pub fn get_variable(&self, id: VariableId) -> Result<&Variable, ModelError> {
        self.variables
            .get(&id)
            .ok_or(ModelError::InvalidVariableId(id))
    }

    /// Get a constraint by id.
    pub fn get_constraint(&self, id: ConstraintId) -> Result<&Constraint, ModelError> {
        self.constraints
            .get(&id)
            .ok_or(ModelError::InvalidConstraintId(id))
    }

    /// Get the coefficient column of a variable, if any coefficients are set.
    pub fn get_column(&self, id: VariableId) -> Option<&Vec<(ConstraintId, f64)>> {
        self.columns.get(&id)
    }

    /// Iterate variables in id order.
    pub fn variables(&self) -> impl Iterator<Item = (VariableId, &Variable)> {
        self.variables.iter().map(|(id, var)| (*id, var))
    }

    /// Iterate constraints in id order.
    pub fn constraints(&self) -> impl Iterator<Item = (ConstraintId, &Constraint)> {
        self.constraints.iter().map(|(id, con)| (*id, con))
    }

    /// Row-wise view of the coefficient matrix, derived from the column store.
    ///
    /// Rows come back keyed by constraint id with entries in variable id order.
    pub fn rows(&self) -> BTreeMap<ConstraintId, Vec<(VariableId, f64)>> {
        let mut rows: BTreeMap<ConstraintId, Vec<(VariableId, f64)>> = BTreeMap::new();
        for (var_id, column) in &self.columns {
            for (constraint_id, coeff) in column {
                rows.entry(*constraint_id).or_default().push((*var_id, *coeff));
            }
        }
        rows
    }

    pub(crate) fn ensure_variable_exists(&self, id: VariableId) -> Result<(), ModelError> {
        if self.variables.contains_key(&id) {
            Ok(())
        } else {
            Err(ModelError::InvalidVariableId(id))
        }
    }

    pub(crate) fn ensure_constraint_exists(&self, id: ConstraintId) -> Result<(), ModelError> {
        if self.constraints.contains_key(&id) {
            Ok(())
        } else {
            Err(ModelError::InvalidConstraintId(id))
        }
    }

    pub(crate) fn normalize_terms(&self, terms: Vec<(VariableId, f64)>) -> Vec<(VariableId, f64)> {
        let mut merged: BTreeMap<VariableId, f64> = BTreeMap::new();
        for (var_id, coeff) in terms {
            if coeff == 0.0 {
                continue;
            }
            *merged.entry(var_id).or_insert(0.0) += coeff;
        }
        merged
            .into_iter()
            .filter(|(_, coeff)| *coeff != 0.0)
            .collect()
    }
}
