//! # Cost matrices
//!
//! Costs of assigning a supply entity (a column, a donor) to a demand entity (a row, a
//! recipient).
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fmt;
use std::slice::Iter;

use crate::data::number_types::traits::Cost;

/// A rectangular table of non-negative costs.
///
/// Dimensions are fixed at creation. Which of the entries are infeasible is not a property of the
/// matrix, but of the `SolverConfig` it is solved with.
#[derive(Clone, Debug, PartialEq)]
pub struct CostMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Cost> CostMatrix<F> {
    /// Create a new cost matrix from rows of costs.
    ///
    /// # Arguments
    ///
    /// * `data`: One `Vec` per demand row, each holding one cost per supply column.
    ///
    /// # Return value
    ///
    /// The matrix, if all rows have the same length and all values are non-negative.
    ///
    /// # Errors
    ///
    /// A `MatrixError` describing the first offending row or entry. A value that can't be
    /// compared with zero (like a floating point NaN) is reported as a negative cost.
    pub fn new(data: Vec<Vec<F>>) -> Result<Self, MatrixError> {
        let nr_rows = data.len();
        let nr_columns = data.first().map_or(0, Vec::len);

        for (i, row) in data.iter().enumerate() {
            if row.len() != nr_columns {
                return Err(MatrixError::Ragged { row: i, expected: nr_columns, found: row.len() });
            }
            if let Some(j) = row.iter().position(|value| !(value >= &F::zero())) {
                return Err(MatrixError::NegativeCost { row: i, column: j });
            }
        }

        Ok(Self { data, nr_rows, nr_columns })
    }

    /// Cost at coordinate (`i`, `j`).
    pub fn get(&self, i: usize, j: usize) -> &F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &self.data[i][j]
    }

    /// All costs of demand row `i`.
    pub fn row(&self, i: usize) -> Iter<'_, F> {
        debug_assert!(i < self.nr_rows);

        self.data[i].iter()
    }

    /// Number of demand entities.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of supply entities.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

impl<F: Cost> Display for CostMatrix<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cost matrix ({} x {})", self.nr_rows, self.nr_columns)?;
        for row in &self.data {
            let values = row.iter().map(ToString::to_string).collect::<Vec<_>>();
            writeln!(f, "{}", values.join("\t"))?;
        }

        Ok(())
    }
}

/// A `MatrixError` is created when data can't be used as a cost matrix.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum MatrixError {
    /// A row does not have as many values as the first row.
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A value is smaller than zero, or can't be compared with zero.
    NegativeCost {
        /// Row index of the value.
        row: usize,
        /// Column index of the value.
        column: usize,
    },
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Ragged { row, expected, found } => write!(
                f, "Row {} has {} values, expected {} like the first row", row, found, expected,
            ),
            MatrixError::NegativeCost { row, column } => write!(
                f, "Cost at ({}, {}) is negative or not a number", row, column,
            ),
        }
    }
}

impl Error for MatrixError {}
