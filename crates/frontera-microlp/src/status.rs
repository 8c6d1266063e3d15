//! Status mapping between microlp outcomes and the frontera vocabulary.

use frontera_core::SolverStatus;

/// Map a `microlp` solve error onto the status it represents.
///
/// Infeasibility and unboundedness are solve outcomes, not adapter
/// failures; internal simplex errors carry no outcome at all.
pub(crate) fn microlp_error_to_status(err: &microlp::Error) -> SolverStatus {
    match err {
        microlp::Error::Infeasible => SolverStatus::Infeasible,
        microlp::Error::Unbounded => SolverStatus::Unbounded,
        microlp::Error::InternalError(_) => SolverStatus::Undefined,
    }
}
