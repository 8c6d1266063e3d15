//! Envelopment (multiplier-form) LP construction.
//!
//! For each DMU j0 the builder produces one maximization program:
//!
//! ```text
//! max  sum_r outputWeight[j0][r] * outputs[j0][r]  -  w
//! s.t. sum_i inputWeight[j0][i] * inputs[j0][i]  == 1        (Norm_constraint)
//!      sum_r outputWeight[j0][r] * outputs[j1][r]
//!        - sum_i inputWeight[j0][i] * inputs[j1][i] - w <= 0 (DMU_constraint_<j1>, all j1)
//! ```
//!
//! Under constant returns to scale the scale term `w` is the constant 0;
//! under variable returns it is a free variable, which relaxes the program
//! and can only raise efficiency scores.
//!
//! Each program declares weight variables for every (DMU, column) pair even
//! though only the j0 slice appears in its objective and constraints. The
//! full allocation keeps the `inputWeight_<j>_<i>` / `outputWeight_<j>_<r>`
//! / `w_<j>_<r>` naming identical across programs, which external tooling
//! keyed on those names relies on.

use crate::dataset::Dataset;
use crate::error::DeaError;
use frontera_core::{linear_sum, Bounds, Expr, Model, Variable, VariableId};
use std::str::FromStr;

/// Returns-to-scale assumption of the envelopment model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnsMode {
    /// Constant returns to scale (CCR).
    #[default]
    Crs,
    /// Variable returns to scale (BCC).
    Vrs,
}

impl ReturnsMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ReturnsMode::Crs => "CRS",
            ReturnsMode::Vrs => "VRS",
        }
    }
}

impl FromStr for ReturnsMode {
    type Err = DeaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "CRS" => Ok(ReturnsMode::Crs),
            "VRS" => Ok(ReturnsMode::Vrs),
            other => Err(DeaError::UnknownReturns(other.to_string())),
        }
    }
}

impl std::fmt::Display for ReturnsMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bound pair applied uniformly to a weight family. An absent side means
/// unbounded in that direction; the default is `[0, +inf)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightBound {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl WeightBound {
    pub fn new(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self { lower, upper }
    }

    pub(crate) fn bounds(&self) -> Bounds {
        Bounds::new(
            self.lower.unwrap_or(f64::NEG_INFINITY),
            self.upper.unwrap_or(f64::INFINITY),
        )
    }
}

impl Default for WeightBound {
    fn default() -> Self {
        Self {
            lower: Some(0.0),
            upper: None,
        }
    }
}

/// Which weight family a handle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightRole {
    Input,
    Output,
}

/// Structured link from a reported weight back to its decision variable:
/// role, owning DMU, dataset column, and the variable id inside the model.
#[derive(Debug, Clone, Copy)]
pub struct WeightHandle {
    pub role: WeightRole,
    pub dmu: usize,
    pub column: usize,
    pub variable: VariableId,
}

/// One DMU's envelopment program plus the weight registry needed to read
/// its solution back out.
#[derive(Debug, Clone)]
pub struct DmuModel {
    pub name: String,
    pub dmu: usize,
    pub model: Model,
    pub weight_handles: Vec<WeightHandle>,
}

/// Build the J independent envelopment programs for a dataset.
pub fn build_models(
    dataset: &Dataset,
    returns: ReturnsMode,
    in_weights: &WeightBound,
    out_weights: &WeightBound,
) -> Result<Vec<DmuModel>, DeaError> {
    (0..dataset.num_dmus())
        .map(|j0| build_model(dataset, j0, returns, in_weights, out_weights))
        .collect()
}

fn build_model(
    dataset: &Dataset,
    j0: usize,
    returns: ReturnsMode,
    in_weights: &WeightBound,
    out_weights: &WeightBound,
) -> Result<DmuModel, DeaError> {
    let j = dataset.num_dmus();
    let i_count = dataset.num_inputs();
    let r_count = dataset.num_outputs();

    let mut model = Model::new();

    // inputWeight_<j>_<i> for every (j, i) pair.
    let mut input_vars = vec![Vec::with_capacity(i_count); j];
    for (j1, row) in input_vars.iter_mut().enumerate() {
        for i in 0..i_count {
            let var = model.add_variable(Variable::continuous(in_weights.bounds()))?;
            model.set_variable_name(var, format!("inputWeight_{j1}_{i}"))?;
            row.push(var);
        }
    }

    // outputWeight_<j>_<r> for every (j, r) pair.
    let mut output_vars = vec![Vec::with_capacity(r_count); j];
    for (j1, row) in output_vars.iter_mut().enumerate() {
        for r in 0..r_count {
            let var = model.add_variable(Variable::continuous(out_weights.bounds()))?;
            model.set_variable_name(var, format!("outputWeight_{j1}_{r}"))?;
            row.push(var);
        }
    }

    // Under VRS a free w_<j>_<r> family is declared alongside the weights;
    // only w_<j0>_0 enters this program as the scale variable.
    let scale_var = match returns {
        ReturnsMode::Crs => None,
        ReturnsMode::Vrs => {
            let mut scale = None;
            for j1 in 0..j {
                for r in 0..r_count {
                    let var = model.add_variable(Variable::free())?;
                    model.set_variable_name(var, format!("w_{j1}_{r}"))?;
                    if j1 == j0 && r == 0 {
                        scale = Some(var);
                    }
                }
            }
            scale
        }
    };

    let scale_expr = || match scale_var {
        Some(var) => Expr::var(var),
        None => Expr::default(),
    };

    // Objective: weighted outputs of j0 minus the scale term.
    let own_outputs = linear_sum(
        (0..r_count).map(|r| Expr::term(output_vars[j0][r], dataset.output(j0, r))),
    );
    model.maximize(own_outputs - scale_expr())?;

    // Normalization: weighted inputs of j0 equal one.
    let own_inputs = linear_sum(
        (0..i_count).map(|i| Expr::term(input_vars[j0][i], dataset.input(j0, i))),
    );
    let norm = model.add_constraint_expr(own_inputs.eq_scalar(1.0))?;
    model.set_constraint_name(norm, "Norm_constraint".to_string())?;

    // Envelopment: no peer may score above one under j0's weights.
    for j1 in 0..j {
        let peer_outputs = linear_sum(
            (0..r_count).map(|r| Expr::term(output_vars[j0][r], dataset.output(j1, r))),
        );
        let peer_inputs = linear_sum(
            (0..i_count).map(|i| Expr::term(input_vars[j0][i], dataset.input(j1, i))),
        );
        let constraint =
            model.add_constraint_expr((peer_outputs - peer_inputs - scale_expr()).le_scalar(0.0))?;
        model.set_constraint_name(constraint, format!("DMU_constraint_{j1}"))?;
    }

    let mut weight_handles =
        Vec::with_capacity(i_count + r_count);
    for (i, var) in input_vars[j0].iter().enumerate() {
        weight_handles.push(WeightHandle {
            role: WeightRole::Input,
            dmu: j0,
            column: i,
            variable: *var,
        });
    }
    for (r, var) in output_vars[j0].iter().enumerate() {
        weight_handles.push(WeightHandle {
            role: WeightRole::Output,
            dmu: j0,
            column: r,
            variable: *var,
        });
    }

    Ok(DmuModel {
        name: format!("DMU_{j0}"),
        dmu: j0,
        model,
        weight_handles,
    })
}
