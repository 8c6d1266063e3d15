//! Data envelopment analysis (DEA) on top of the frontera LP layer.
//!
//! Given J decision-making units (DMUs), each with a vector of inputs and a
//! vector of outputs, DEA scores every unit's relative efficiency by solving
//! one envelopment linear program per unit. [`DeaProblem`] is the entry
//! point: it validates the dataset, builds all J programs eagerly, and
//! [`DeaProblem::solve`] runs them and assembles a [`DeaResult`] with
//! per-unit status, efficiency, and named weight values.
//!
//! ```no_run
//! use frontera_dea::{DeaProblem, SolveKind, Table};
//!
//! let inputs = Table::from_rows(vec![vec![100.0, 70.0], vec![50.0, 20.0]]).unwrap();
//! let outputs = Table::from_rows(vec![vec![1540.0], vec![690.0]]).unwrap();
//! let problem = DeaProblem::new(inputs, outputs).unwrap();
//! let result = problem.solve(SolveKind::Technical).unwrap();
//! for (label, efficiency) in result.row_labels().iter().zip(result.efficiency()) {
//!     println!("{label}: {efficiency:.4}");
//! }
//! ```

pub mod dataset;
pub mod envelopment;
pub mod error;
pub mod problem;
pub mod result;

pub use dataset::{Dataset, Table, TabularInput};
pub use envelopment::{DmuModel, ReturnsMode, WeightBound};
pub use error::DeaError;
pub use problem::{DeaProblem, SolveKind};
pub use result::{DeaResult, WeightTable};
