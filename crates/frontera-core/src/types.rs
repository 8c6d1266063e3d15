//! Core model types: senses, bounds, variables, constraints, objectives.

use crate::ids::VariableId;

/// Optimization sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Minimize,
    Maximize,
}

/// Lower/upper bounds for a variable or constraint row.
///
/// An absent side is represented by the corresponding infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// `[0, +inf)`.
    pub fn nonnegative() -> Self {
        Self::new(0.0, f64::INFINITY)
    }

    /// `(-inf, +inf)`.
    pub fn free() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// `[value, value]`.
    pub fn fixed(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Whether lower and upper coincide (an equality row).
    pub fn is_fixed(&self) -> bool {
        self.lower == self.upper
    }
}

/// A continuous decision variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variable {
    pub bounds: Bounds,
}

impl Variable {
    /// Create a variable with the given bounds.
    pub fn continuous(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// Create a variable bounded below by zero.
    pub fn nonnegative() -> Self {
        Self {
            bounds: Bounds::nonnegative(),
        }
    }

    /// Create an unbounded variable.
    pub fn free() -> Self {
        Self {
            bounds: Bounds::free(),
        }
    }
}

/// A constraint row with two-sided bounds.
///
/// `lower == upper` is an equality, `(-inf, rhs]` a `<=` row and
/// `[rhs, +inf)` a `>=` row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub bounds: Bounds,
}

/// Linear objective with a sense and sparse terms.
#[derive(Debug, Clone)]
pub struct Objective {
    pub sense: Option<Sense>,
    pub terms: Vec<(VariableId, f64)>,
}

impl Objective {
    /// Create a new empty objective.
    pub fn new() -> Self {
        Self {
            sense: None,
            terms: Vec::new(),
        }
    }
}

impl Default for Objective {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn bounds_constructors() {
        assert_eq!(Bounds::nonnegative().lower, 0.0);
        assert!(Bounds::nonnegative().upper.is_infinite());
        assert!(Bounds::free().lower.is_infinite());
        assert!(Bounds::fixed(1.0).is_fixed());
        assert!(!Bounds::new(0.0, 1.0).is_fixed());
    }

    #[test]
    fn variable_constructors() {
        assert_eq!(Variable::nonnegative().bounds, Bounds::nonnegative());
        assert_eq!(Variable::free().bounds, Bounds::free());
        let var = Variable::continuous(Bounds::new(1.0, 2.0));
        assert_eq!(var.bounds.lower, 1.0);
        assert_eq!(var.bounds.upper, 2.0);
    }

    #[test]
    fn objective_starts_empty() {
        let objective = Objective::new();
        assert!(objective.sense.is_none());
        assert!(objective.terms.is_empty());
    }
}
