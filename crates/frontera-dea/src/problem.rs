//! The DEA problem facade: dataset + configuration + eager model arena.

use crate::dataset::{Dataset, TabularInput};
use crate::envelopment::{build_models, DmuModel, ReturnsMode, WeightBound};
use crate::error::DeaError;
use crate::result::{aggregate, DeaResult};
use frontera_core::{Solution, Solver};
use frontera_microlp::MicrolpSolver;
use rayon::prelude::*;
use std::str::FromStr;
use std::time::Instant;

/// Which efficiency the solve reports.
///
/// Only technical efficiency is implemented; the price-aware kinds fall
/// back to it with a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolveKind {
    #[default]
    Technical,
    Allocative,
    Economic,
}

impl SolveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SolveKind::Technical => "technical",
            SolveKind::Allocative => "allocative",
            SolveKind::Economic => "economic",
        }
    }
}

impl FromStr for SolveKind {
    type Err = DeaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "technical" => Ok(SolveKind::Technical),
            "allocative" => Ok(SolveKind::Allocative),
            "economic" => Ok(SolveKind::Economic),
            other => Err(DeaError::UnknownSolveKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for SolveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully configured DEA problem.
///
/// Construction validates the dataset and builds all J envelopment
/// programs up front, so a shape or bound error surfaces before any
/// solver runs. The problem is immutable afterwards; [`DeaProblem::solve`]
/// can be called repeatedly and yields identical results.
#[derive(Debug)]
pub struct DeaProblem {
    dataset: Dataset,
    returns: ReturnsMode,
    dmus: Vec<DmuModel>,
}

impl DeaProblem {
    /// Constant returns to scale with the default `[0, +inf)` weight bounds.
    pub fn new(
        inputs: impl Into<TabularInput>,
        outputs: impl Into<TabularInput>,
    ) -> Result<Self, DeaError> {
        Self::with_options(
            inputs,
            outputs,
            ReturnsMode::Crs,
            WeightBound::default(),
            WeightBound::default(),
        )
    }

    /// Full configuration: returns-to-scale mode and uniform bounds for the
    /// input and output weight families.
    pub fn with_options(
        inputs: impl Into<TabularInput>,
        outputs: impl Into<TabularInput>,
        returns: ReturnsMode,
        in_weights: WeightBound,
        out_weights: WeightBound,
    ) -> Result<Self, DeaError> {
        let dataset = Dataset::new(inputs, outputs)?;
        let dmus = build_models(&dataset, returns, &in_weights, &out_weights)?;
        tracing::debug!(
            component = "dea",
            operation = "build",
            returns = returns.as_str(),
            num_dmus = dataset.num_dmus(),
            num_inputs = dataset.num_inputs(),
            num_outputs = dataset.num_outputs(),
            "envelopment programs built"
        );
        Ok(Self {
            dataset,
            returns,
            dmus,
        })
    }

    /// Attach DMU labels to the result rows.
    pub fn with_row_labels(
        mut self,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, DeaError> {
        self.dataset = self.dataset.with_row_labels(labels)?;
        Ok(self)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn returns(&self) -> ReturnsMode {
        self.returns
    }

    /// The per-DMU envelopment programs, in DMU order.
    pub fn dmu_models(&self) -> &[DmuModel] {
        &self.dmus
    }

    /// Solve every DMU's program and aggregate the outcomes.
    ///
    /// The J programs are independent and run in parallel; results are
    /// collected back in DMU order. A DMU whose program is infeasible or
    /// unbounded gets a NaN efficiency and empty weights, without affecting
    /// the others.
    pub fn solve(&self, kind: SolveKind) -> Result<DeaResult, DeaError> {
        if kind != SolveKind::Technical {
            tracing::warn!(
                component = "dea",
                operation = "solve",
                requested = kind.as_str(),
                "solve kind not implemented, falling back to technical efficiency"
            );
        }

        let start = Instant::now();
        let solutions: Vec<Solution> = self
            .dmus
            .par_iter()
            .map(|dmu| MicrolpSolver::new().solve(&dmu.model))
            .collect::<Result<Vec<_>, _>>()?;

        let result = aggregate(&self.dataset, &self.dmus, &solutions)?;
        tracing::info!(
            component = "dea",
            operation = "solve",
            kind = kind.as_str(),
            returns = self.returns.as_str(),
            num_dmus = self.dmus.len(),
            num_optimal = result
                .statuses()
                .iter()
                .filter(|status| status.is_optimal())
                .count(),
            duration_seconds = start.elapsed().as_secs_f64(),
            "solved all envelopment programs"
        );
        Ok(result)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::dataset::Table;

    fn problem() -> DeaProblem {
        let inputs = Table::from_rows(vec![vec![2.0], vec![4.0]]).unwrap();
        let outputs = Table::from_rows(vec![vec![10.0], vec![8.0]]).unwrap();
        DeaProblem::new(inputs, outputs).unwrap()
    }

    #[test]
    fn solve_kind_parses_known_values_only() {
        assert_eq!(
            "technical".parse::<SolveKind>().unwrap(),
            SolveKind::Technical
        );
        assert_eq!(
            "allocative".parse::<SolveKind>().unwrap(),
            SolveKind::Allocative
        );
        assert_eq!("economic".parse::<SolveKind>().unwrap(), SolveKind::Economic);
        let err = "fiscal".parse::<SolveKind>().unwrap_err();
        assert_eq!(err.code(), "CONFIG_UNKNOWN_SOLVE_KIND");
    }

    #[test]
    fn construction_builds_all_programs_eagerly() {
        let problem = problem();
        assert_eq!(problem.dmu_models().len(), 2);
        assert_eq!(problem.returns(), ReturnsMode::Crs);
    }

    #[test]
    fn unimplemented_kinds_fall_back_to_technical() {
        let problem = problem();
        let technical = problem.solve(SolveKind::Technical).unwrap();
        let allocative = problem.solve(SolveKind::Allocative).unwrap();
        assert_eq!(technical.statuses(), allocative.statuses());
        assert_eq!(technical.efficiency(), allocative.efficiency());
    }

    #[test]
    fn single_input_single_output_ratio() {
        // Efficiency reduces to (output/input) normalized by the best ratio:
        // DMU 0 at 10/2 = 5 is the frontier, DMU 1 at 8/4 = 2 scores 0.4.
        let result = problem().solve(SolveKind::Technical).unwrap();
        assert!(result.statuses().iter().all(|s| s.is_optimal()));
        assert!((result.efficiency()[0] - 1.0).abs() < 1e-9);
        assert!((result.efficiency()[1] - 0.4).abs() < 1e-9);
        assert_eq!(result.efficient_dmus(1e-6), vec!["0"]);
    }
}
