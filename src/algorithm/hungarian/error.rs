//! # Solver errors
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fmt;

/// A `SolveError` is returned when no assignment can be computed, or when the computed
/// assignment can't be trusted.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum SolveError {
    /// There are more demand rows than supply columns.
    ///
    /// Padding the matrix with synthetic columns would let rows fall back on fake donors instead
    /// of competing for real ones, so this is a configuration error rather than something to
    /// work around.
    SupplyShortage {
        /// Number of rows.
        demand: usize,
        /// Number of columns.
        supply: usize,
    },
    /// The reduce, cover and shift loop did not reach a perfect matching within the iteration
    /// limit.
    NonConvergence {
        /// Number of shifts performed.
        iterations: usize,
        /// Size of the last maximum matching.
        matching_size: usize,
        /// Size of the padded square matrix.
        size: usize,
    },
    /// A live row ended up unassigned while a column that no live row uses is feasible for it.
    ///
    /// Such an assignment is not optimal, which means that the solver is wrong.
    InconsistentResult {
        /// Index of the row, in the original matrix.
        row: usize,
        /// Index of the unused feasible column.
        column: usize,
    },
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::SupplyShortage { demand, supply } => write!(
                f, "Supply must be at least demand: {} donors for {} recipients", supply, demand,
            ),
            SolveError::NonConvergence { iterations, matching_size, size } => write!(
                f,
                "No perfect matching after {} iterations (matching of size {} on {} rows)",
                iterations, matching_size, size,
            ),
            SolveError::InconsistentResult { row, column } => write!(
                f,
                "Row {} is unassigned although column {} is unused and feasible for it",
                row, column,
            ),
        }
    }
}

impl Error for SolveError {}
