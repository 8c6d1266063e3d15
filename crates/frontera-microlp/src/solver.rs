//! microlp solver implementation.

use crate::status::microlp_error_to_status;
use frontera_core::{Model, Sense, Solution, Solver, SolverError, SolverStatus};
use microlp::{ComparisonOp, OptimizationDirection, Problem};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::debug;

/// Solver backend lowering frontera models to `microlp` problems.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        Self
    }
}

fn validate_model(model: &Model) -> Result<Sense, SolverError> {
    if model.num_variables() == 0 {
        return Err(SolverError::EmptyModel);
    }
    model.objective().sense.ok_or(SolverError::NoObjective)
}

impl Solver for MicrolpSolver {
    fn solve(&mut self, model: &Model) -> Result<Solution, SolverError> {
        let sense = validate_model(model)?;
        let started = Instant::now();

        let direction = match sense {
            Sense::Minimize => OptimizationDirection::Minimize,
            Sense::Maximize => OptimizationDirection::Maximize,
        };
        let mut problem = Problem::new(direction);

        // Dense objective coefficients keyed by variable id.
        let objective: BTreeMap<_, _> = model.objective().terms.iter().copied().collect();

        // Variables are added in id order, so the position of a microlp
        // handle matches the variable's id position in the model.
        let mut handles = Vec::with_capacity(model.num_variables());
        let mut positions = BTreeMap::new();
        for (position, (var_id, variable)) in model.variables().enumerate() {
            let coeff = objective.get(&var_id).copied().unwrap_or(0.0);
            let in_rows = model
                .get_column(var_id)
                .is_some_and(|column| !column.is_empty());
            let handle = if coeff == 0.0 && !in_rows {
                // A column outside every row with no objective weight cannot
                // influence the solve, but microlp treats a free one as
                // making the program unbounded. Pin it to a point inside its
                // bounds instead.
                let pinned = 0.0_f64
                    .max(variable.bounds.lower)
                    .min(variable.bounds.upper);
                problem.add_var(0.0, (pinned, pinned))
            } else {
                problem.add_var(coeff, (variable.bounds.lower, variable.bounds.upper))
            };
            handles.push(handle);
            positions.insert(var_id, position);
        }

        let rows = model.rows();
        for (constraint_id, constraint) in model.constraints() {
            let bounds = constraint.bounds;
            let terms: Vec<(microlp::Variable, f64)> = rows
                .get(&constraint_id)
                .map(|row| {
                    row.iter()
                        .map(|(var_id, coeff)| (handles[positions[var_id]], *coeff))
                        .collect()
                })
                .unwrap_or_default();

            if terms.is_empty() {
                // A row with no coefficients is satisfied iff 0 lies in its bounds.
                if bounds.lower > 0.0 || bounds.upper < 0.0 {
                    return Ok(Solution::without_values(
                        SolverStatus::Infeasible,
                        started.elapsed().as_secs_f64(),
                    ));
                }
                continue;
            }

            if bounds.is_fixed() {
                problem.add_constraint(terms, ComparisonOp::Eq, bounds.lower);
            } else {
                let lower_finite = bounds.lower.is_finite();
                let upper_finite = bounds.upper.is_finite();
                match (lower_finite, upper_finite) {
                    (true, true) => {
                        problem.add_constraint(terms.clone(), ComparisonOp::Ge, bounds.lower);
                        problem.add_constraint(terms, ComparisonOp::Le, bounds.upper);
                    }
                    (true, false) => {
                        problem.add_constraint(terms, ComparisonOp::Ge, bounds.lower);
                    }
                    (false, true) => {
                        problem.add_constraint(terms, ComparisonOp::Le, bounds.upper);
                    }
                    // Free row, nothing to enforce.
                    (false, false) => {}
                }
            }
        }

        let solution = match problem.solve() {
            Ok(solved) => {
                let primal_values = handles.iter().map(|handle| *solved.var_value(*handle)).collect();
                Solution {
                    primal_values,
                    objective_value: solved.objective(),
                    status: SolverStatus::Optimal,
                    solve_time_seconds: started.elapsed().as_secs_f64(),
                    metadata: BTreeMap::new(),
                }
            }
            Err(err) => {
                Solution::without_values(microlp_error_to_status(&err), started.elapsed().as_secs_f64())
            }
        };

        debug!(
            component = "solver",
            operation = "solve",
            status = solution.status.as_str(),
            variables = model.num_variables() as u64,
            constraints = model.num_constraints() as u64,
            duration_ms = solution.solve_time_seconds * 1000.0,
            "microlp solve finished"
        );

        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontera_core::{Expr, Variable};

    #[test]
    fn empty_model_is_rejected() {
        let model = Model::new();
        let result = MicrolpSolver::new().solve(&model);
        assert!(matches!(result, Err(SolverError::EmptyModel)));
    }

    #[test]
    fn missing_objective_is_rejected() {
        let mut model = Model::new();
        model.add_variable(Variable::nonnegative()).unwrap();
        let result = MicrolpSolver::new().solve(&model);
        assert!(matches!(result, Err(SolverError::NoObjective)));
    }

    #[test]
    fn empty_infeasible_row_short_circuits() {
        let mut model = Model::new();
        let var = model.add_variable(Variable::nonnegative()).unwrap();
        model.maximize(Expr::term(var, 1.0)).unwrap();
        // Constraint with no coefficients demanding a positive value.
        model
            .add_expr_constraint(Expr::default(), frontera_core::Bounds::new(1.0, 2.0))
            .unwrap();

        let solution = MicrolpSolver::new().solve(&model).unwrap();
        assert_eq!(solution.status, SolverStatus::Infeasible);
    }
}
