//! Result assembly: per-DMU status, efficiency, and named weights.

use crate::dataset::Dataset;
use crate::envelopment::{DmuModel, WeightRole};
use crate::error::DeaError;
use frontera_core::{Solution, SolverStatus};
use serde_json::json;

/// Weights table: one row per DMU, one column per semantic weight name
/// (`in_<input_column>` / `out_<output_column>`). A cell is `None` when the
/// DMU's solve produced no value for that weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    columns: Vec<String>,
    values: Vec<Vec<Option<f64>>>,
}

impl WeightTable {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn num_rows(&self) -> usize {
        self.values.len()
    }

    /// Look up a weight by row index and semantic column name.
    pub fn get(&self, row: usize, column: &str) -> Option<f64> {
        let col = self.columns.iter().position(|name| name == column)?;
        self.values.get(row).and_then(|cells| cells[col])
    }

    /// One DMU's weight row. Panics when `row` is out of range.
    pub fn row(&self, row: usize) -> &[Option<f64>] {
        &self.values[row]
    }
}

/// Solved DEA results: three aligned columns indexed by DMU.
///
/// Read-only once produced; re-solving builds a fresh result.
#[derive(Debug, Clone)]
pub struct DeaResult {
    row_labels: Vec<String>,
    statuses: Vec<SolverStatus>,
    efficiency: Vec<f64>,
    weights: WeightTable,
}

impl DeaResult {
    pub fn num_dmus(&self) -> usize {
        self.row_labels.len()
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Solver outcome per DMU.
    pub fn statuses(&self) -> &[SolverStatus] {
        &self.statuses
    }

    /// Efficiency score per DMU; NaN where the solve carried no solution.
    pub fn efficiency(&self) -> &[f64] {
        &self.efficiency
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Labels of DMUs on the efficient frontier: optimal status and an
    /// efficiency score within `tolerance` of 1.0.
    pub fn efficient_dmus(&self, tolerance: f64) -> Vec<&str> {
        self.row_labels
            .iter()
            .zip(self.statuses.iter().zip(&self.efficiency))
            .filter(|(_, (status, efficiency))| {
                status.is_optimal() && (*efficiency - 1.0).abs() <= tolerance
            })
            .map(|(label, _)| label.as_str())
            .collect()
    }

    /// Export the three result columns as JSON. NaN efficiencies become
    /// nulls, as do absent weight cells.
    pub fn to_json(&self) -> serde_json::Value {
        let status: Vec<_> = self.statuses.iter().map(|s| s.as_str()).collect();
        let efficiency: Vec<serde_json::Value> = self
            .efficiency
            .iter()
            .map(|value| {
                if value.is_nan() {
                    serde_json::Value::Null
                } else {
                    json!(value)
                }
            })
            .collect();
        let weights: Vec<serde_json::Value> = self
            .weights
            .values
            .iter()
            .map(|row| {
                let cells: serde_json::Map<String, serde_json::Value> = self
                    .weights
                    .columns
                    .iter()
                    .zip(row)
                    .map(|(name, cell)| (name.clone(), json!(cell)))
                    .collect();
                serde_json::Value::Object(cells)
            })
            .collect();

        json!({
            "index": self.row_labels,
            "Status": status,
            "Efficiency": efficiency,
            "Weights": weights,
        })
    }
}

/// Semantic weight column names in dataset order: inputs then outputs.
pub(crate) fn weight_columns(dataset: &Dataset) -> Vec<String> {
    dataset
        .input_columns()
        .iter()
        .map(|name| format!("in_{name}"))
        .chain(
            dataset
                .output_columns()
                .iter()
                .map(|name| format!("out_{name}")),
        )
        .collect()
}

/// Collect per-DMU solutions into a [`DeaResult`].
///
/// Status and objective are recorded verbatim. Weight values are read
/// through each model's handle registry; a registered handle whose primal
/// is absent from an optimal solution is a hard error.
pub(crate) fn aggregate(
    dataset: &Dataset,
    dmus: &[DmuModel],
    solutions: &[Solution],
) -> Result<DeaResult, DeaError> {
    let columns = weight_columns(dataset);
    let input_count = dataset.num_inputs();

    let mut statuses = Vec::with_capacity(dmus.len());
    let mut efficiency = Vec::with_capacity(dmus.len());
    let mut values = Vec::with_capacity(dmus.len());

    for (dmu, solution) in dmus.iter().zip(solutions) {
        statuses.push(solution.status);
        efficiency.push(if solution.is_optimal() {
            solution.objective_value
        } else {
            f64::NAN
        });

        let mut row: Vec<Option<f64>> = vec![None; columns.len()];
        if solution.is_optimal() {
            for handle in &dmu.weight_handles {
                let value = solution
                    .get_primal(handle.variable.index())
                    .ok_or(DeaError::MissingWeightValue {
                        dmu: dmu.dmu,
                        variable: handle.variable.inner(),
                    })?;
                let col = match handle.role {
                    WeightRole::Input => handle.column,
                    WeightRole::Output => input_count + handle.column,
                };
                row[col] = Some(value);
            }
        }
        values.push(row);
    }

    Ok(DeaResult {
        row_labels: dataset.row_labels().to_vec(),
        statuses,
        efficiency,
        weights: WeightTable { columns, values },
    })
}
