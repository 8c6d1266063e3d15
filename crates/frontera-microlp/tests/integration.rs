#![allow(clippy::float_cmp)]

use frontera_core::{Bounds, Expr, Model, Solver, SolverStatus, Variable};
use frontera_microlp::MicrolpSolver;

/// Minimize 2x + 3y subject to x + y >= 5, x,y >= 0.
#[test]
fn simple_lp_reaches_known_optimum() {
    let mut model = Model::new();
    let x = model.add_variable(Variable::nonnegative()).unwrap();
    let y = model.add_variable(Variable::nonnegative()).unwrap();

    model
        .add_constraint_expr((Expr::var(x) + Expr::var(y)).ge_scalar(5.0))
        .unwrap();
    model
        .minimize(Expr::term(x, 2.0) + Expr::term(y, 3.0))
        .unwrap();

    let solution = MicrolpSolver::new().solve(&model).expect("solve failed");

    // Optimal: x = 5, y = 0, objective = 10.
    assert_eq!(solution.status, SolverStatus::Optimal);
    assert!(
        (solution.objective_value - 10.0).abs() < 1e-6,
        "expected objective 10.0, got {}",
        solution.objective_value
    );
    assert!((solution.get_primal(x.index()).unwrap() - 5.0).abs() < 1e-6);
    assert!(solution.get_primal(y.index()).unwrap().abs() < 1e-6);
}

/// Maximize x + 2y subject to x + y <= 4 and 2x + y >= 2 with 0 <= y <= 3.
#[test]
fn bounded_variable_lp() {
    let mut model = Model::new();
    let x = model.add_variable(Variable::nonnegative()).unwrap();
    let y = model
        .add_variable(Variable::continuous(Bounds::new(0.0, 3.0)))
        .unwrap();

    model
        .add_constraint_expr((Expr::var(x) + Expr::var(y)).le_scalar(4.0))
        .unwrap();
    model
        .add_constraint_expr((Expr::term(x, 2.0) + Expr::var(y)).ge_scalar(2.0))
        .unwrap();
    model.maximize(Expr::var(x) + Expr::term(y, 2.0)).unwrap();

    let solution = MicrolpSolver::new().solve(&model).expect("solve failed");

    // Optimal: x = 1, y = 3, objective = 7.
    assert_eq!(solution.status, SolverStatus::Optimal);
    assert!((solution.objective_value - 7.0).abs() < 1e-6);
    assert!((solution.get_primal(x.index()).unwrap() - 1.0).abs() < 1e-6);
    assert!((solution.get_primal(y.index()).unwrap() - 3.0).abs() < 1e-6);
}

/// An equality row pins the normalization the DEA models rely on.
#[test]
fn equality_constraint_is_respected() {
    let mut model = Model::new();
    let x = model.add_variable(Variable::nonnegative()).unwrap();
    let y = model.add_variable(Variable::nonnegative()).unwrap();

    model
        .add_constraint_expr((Expr::term(x, 2.0) + Expr::term(y, 4.0)).eq_scalar(1.0))
        .unwrap();
    model.maximize(Expr::var(x)).unwrap();

    let solution = MicrolpSolver::new().solve(&model).expect("solve failed");

    assert_eq!(solution.status, SolverStatus::Optimal);
    assert!((solution.objective_value - 0.5).abs() < 1e-6);
    let x_value = solution.get_primal(x.index()).unwrap();
    let y_value = solution.get_primal(y.index()).unwrap();
    assert!((2.0 * x_value + 4.0 * y_value - 1.0).abs() < 1e-6);
}

/// Contradictory rows come back as an Infeasible solution, not an error.
#[test]
fn infeasible_program_reports_status() {
    let mut model = Model::new();
    let x = model.add_variable(Variable::nonnegative()).unwrap();

    model
        .add_constraint_expr(Expr::var(x).ge_scalar(5.0))
        .unwrap();
    model
        .add_constraint_expr(Expr::var(x).le_scalar(1.0))
        .unwrap();
    model.minimize(Expr::var(x)).unwrap();

    let solution = MicrolpSolver::new().solve(&model).expect("solve failed");

    assert_eq!(solution.status, SolverStatus::Infeasible);
    assert!(solution.objective_value.is_nan());
    assert!(solution.primal_values.is_empty());
}

/// A maximized variable with no upper bound is Unbounded, not an error.
#[test]
fn unbounded_program_reports_status() {
    let mut model = Model::new();
    let x = model.add_variable(Variable::nonnegative()).unwrap();
    let y = model.add_variable(Variable::nonnegative()).unwrap();

    // Only y is constrained; x can grow without limit.
    model
        .add_constraint_expr(Expr::var(y).le_scalar(1.0))
        .unwrap();
    model.maximize(Expr::var(x) + Expr::var(y)).unwrap();

    let solution = MicrolpSolver::new().solve(&model).expect("solve failed");

    assert_eq!(solution.status, SolverStatus::Unbounded);
    assert!(solution.objective_value.is_nan());
}

/// Free variables (the VRS scale variable) are lowered with infinite bounds.
#[test]
fn free_variable_can_go_negative() {
    let mut model = Model::new();
    let x = model.add_variable(Variable::free()).unwrap();

    model
        .add_constraint_expr(Expr::var(x).ge_scalar(-2.0))
        .unwrap();
    model.minimize(Expr::var(x)).unwrap();

    let solution = MicrolpSolver::new().solve(&model).expect("solve failed");

    assert_eq!(solution.status, SolverStatus::Optimal);
    assert!((solution.objective_value + 2.0).abs() < 1e-6);
}

/// A free variable outside every row and the objective must not make the
/// program unbounded; it is pinned and reports 0.
#[test]
fn unused_free_variable_does_not_unbound_the_program() {
    let mut model = Model::new();
    let x = model.add_variable(Variable::nonnegative()).unwrap();
    let unused = model.add_variable(Variable::free()).unwrap();

    model
        .add_constraint_expr(Expr::var(x).le_scalar(3.0))
        .unwrap();
    model.maximize(Expr::var(x)).unwrap();

    let solution = MicrolpSolver::new().solve(&model).expect("solve failed");

    assert_eq!(solution.status, SolverStatus::Optimal);
    assert!((solution.objective_value - 3.0).abs() < 1e-6);
    assert_eq!(solution.get_primal(unused.index()), Some(0.0));
}

/// The same free variable referenced by a row keeps its full range.
#[test]
fn referenced_free_variable_keeps_its_range() {
    let mut model = Model::new();
    let x = model.add_variable(Variable::nonnegative()).unwrap();
    let w = model.add_variable(Variable::free()).unwrap();

    model
        .add_constraint_expr((Expr::var(x) + Expr::var(w)).le_scalar(1.0))
        .unwrap();
    model
        .add_constraint_expr(Expr::var(w).ge_scalar(-4.0))
        .unwrap();
    model.maximize(Expr::var(x)).unwrap();

    let solution = MicrolpSolver::new().solve(&model).expect("solve failed");

    // x is pushed to 5 by driving w down to its row bound.
    assert_eq!(solution.status, SolverStatus::Optimal);
    assert!((solution.objective_value - 5.0).abs() < 1e-6);
    assert!((solution.get_primal(w.index()).unwrap() + 4.0).abs() < 1e-6);
}

/// Pinning picks a point inside the variable's own bounds.
#[test]
fn unused_variable_pinned_within_its_bounds() {
    let mut model = Model::new();
    let x = model.add_variable(Variable::nonnegative()).unwrap();
    let shelf = model
        .add_variable(Variable::continuous(Bounds::new(1.0, 2.0)))
        .unwrap();

    model
        .add_constraint_expr(Expr::var(x).le_scalar(1.0))
        .unwrap();
    model.maximize(Expr::var(x)).unwrap();

    let solution = MicrolpSolver::new().solve(&model).expect("solve failed");
    assert_eq!(solution.status, SolverStatus::Optimal);
    assert_eq!(solution.get_primal(shelf.index()), Some(1.0));
}

/// Two-sided finite rows are lowered as a Ge/Le pair.
#[test]
fn ranged_row_is_enforced_on_both_sides() {
    let mut model = Model::new();
    let x = model.add_variable(Variable::nonnegative()).unwrap();

    model
        .add_expr_constraint(Expr::var(x), Bounds::new(2.0, 3.0))
        .unwrap();
    model.minimize(Expr::var(x)).unwrap();

    let solution = MicrolpSolver::new().solve(&model).expect("solve failed");
    assert_eq!(solution.status, SolverStatus::Optimal);
    assert!((solution.objective_value - 2.0).abs() < 1e-6);
}
