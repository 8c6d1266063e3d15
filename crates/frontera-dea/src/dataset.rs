//! Validated input/output data for a DEA problem.
//!
//! A [`Dataset`] holds the input and output tables for J decision-making
//! units, row-aligned by DMU. All shape validation happens at construction;
//! the dataset is immutable afterwards and read-only during solving.

use crate::error::DeaError;

/// A column-labeled numeric table, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl Table {
    /// Create a table with explicit column names.
    ///
    /// Every row must have exactly one value per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, DeaError> {
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(DeaError::RaggedRow {
                    row: index,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Create a table from rows, naming columns `"0"`, `"1"`, ... by position.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DeaError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let columns = (0..width).map(|i| i.to_string()).collect();
        Self::new(columns, rows)
    }

    /// Promote a plain series to a single-column table.
    pub fn from_series(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            columns: vec![name.into()],
            rows: values.into_iter().map(|value| vec![value]).collect(),
        }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Value at a cell. Panics when `row` or `column` is out of range.
    pub fn value(&self, row: usize, column: usize) -> f64 {
        self.rows[row][column]
    }

    /// One row of values. Panics when `row` is out of range.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.rows[row]
    }
}

/// Tabular input accepted by [`Dataset::new`]: either a full table or a
/// plain series, which is promoted to a single-column table.
#[derive(Debug, Clone)]
pub enum TabularInput {
    Series(Vec<f64>),
    Table(Table),
}

impl From<Vec<f64>> for TabularInput {
    fn from(values: Vec<f64>) -> Self {
        TabularInput::Series(values)
    }
}

impl From<Table> for TabularInput {
    fn from(table: Table) -> Self {
        TabularInput::Table(table)
    }
}

impl TabularInput {
    fn into_table(self) -> Table {
        match self {
            // The promoted column takes the positional name, matching
            // auto-named tables.
            TabularInput::Series(values) => Table::from_series("0", values),
            TabularInput::Table(table) => table,
        }
    }
}

/// Validated inputs and outputs for J DMUs.
#[derive(Debug, Clone)]
pub struct Dataset {
    inputs: Table,
    outputs: Table,
    row_labels: Vec<String>,
}

impl Dataset {
    /// Validate and assemble a dataset.
    ///
    /// Fails if either table is empty or the row counts differ. Row labels
    /// default to `"0".."J-1"`.
    pub fn new(
        inputs: impl Into<TabularInput>,
        outputs: impl Into<TabularInput>,
    ) -> Result<Self, DeaError> {
        let inputs = inputs.into().into_table();
        let outputs = outputs.into().into_table();

        if inputs.num_rows() == 0 || inputs.num_columns() == 0 {
            return Err(DeaError::EmptyTable { role: "input" });
        }
        if outputs.num_rows() == 0 || outputs.num_columns() == 0 {
            return Err(DeaError::EmptyTable { role: "output" });
        }
        if inputs.num_rows() != outputs.num_rows() {
            return Err(DeaError::RowCountMismatch {
                inputs: inputs.num_rows(),
                outputs: outputs.num_rows(),
            });
        }

        let row_labels = (0..inputs.num_rows()).map(|j| j.to_string()).collect();
        Ok(Self {
            inputs,
            outputs,
            row_labels,
        })
    }

    /// Replace the default positional row labels.
    pub fn with_row_labels(
        mut self,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, DeaError> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != self.num_dmus() {
            return Err(DeaError::LabelCountMismatch {
                labels: labels.len(),
                rows: self.num_dmus(),
            });
        }
        self.row_labels = labels;
        Ok(self)
    }

    /// Number of DMUs (J).
    pub fn num_dmus(&self) -> usize {
        self.inputs.num_rows()
    }

    /// Number of input columns (I).
    pub fn num_inputs(&self) -> usize {
        self.inputs.num_columns()
    }

    /// Number of output columns (R).
    pub fn num_outputs(&self) -> usize {
        self.outputs.num_columns()
    }

    pub fn input(&self, dmu: usize, column: usize) -> f64 {
        self.inputs.value(dmu, column)
    }

    pub fn output(&self, dmu: usize, column: usize) -> f64 {
        self.outputs.value(dmu, column)
    }

    pub fn input_columns(&self) -> &[String] {
        self.inputs.columns()
    }

    pub fn output_columns(&self) -> &[String] {
        self.outputs.columns()
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }
}
