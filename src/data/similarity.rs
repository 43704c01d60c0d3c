//! # Similarity scores
//!
//! Matching problems are often stated in terms of how similar a recipient and a donor are, on a
//! scale from 0 (nothing in common) to 1 (identical). This module turns such scores into a cost
//! matrix with an infeasibility threshold.
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fmt;

use crate::algorithm::hungarian::SolverConfig;
use crate::data::cost_matrix::{CostMatrix, MatrixError};

/// Conversion from similarity scores to costs.
///
/// The cost of a pair is `1 - similarity`, rounded to `precision` decimals. Pairs that are less
/// similar than `min_similarity` are infeasible.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Conversion {
    /// Number of decimals costs are rounded to.
    pub precision: u32,
    /// Smallest similarity that still allows a pair to be assigned.
    pub min_similarity: f64,
}

impl Default for Conversion {
    fn default() -> Self {
        Self { precision: 2, min_similarity: 0.6, }
    }
}

impl Conversion {
    /// Create a new conversion.
    ///
    /// # Arguments
    ///
    /// * `precision`: Number of decimals costs are rounded to.
    /// * `min_similarity`: Pairs with a lower similarity are never assigned.
    pub fn new(precision: u32, min_similarity: f64) -> Self {
        Self { precision, min_similarity, }
    }

    /// Largest cost that is still feasible, rounded like the costs themselves.
    pub fn max_cost(&self) -> f64 {
        self.round(1_f64 - self.min_similarity)
    }

    /// Cost of a single pair, ignoring the threshold.
    pub fn cost(&self, similarity: f64) -> f64 {
        self.round(1_f64 - similarity)
    }

    /// Build a cost matrix with a matching solver configuration.
    ///
    /// Infeasible pairs get the sentinel value as their cost. The sentinel is one more than the
    /// number of rows: each row contributes a cost of at most 1, so no finite total reaches it.
    ///
    /// # Arguments
    ///
    /// * `similarities`: Score per recipient (row) and donor (column), each in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// If the threshold or a score lies outside of `[0, 1]` (this includes `NaN`), or if the rows
    /// don't all have the same length.
    pub fn convert(
        &self,
        similarities: Vec<Vec<f64>>,
    ) -> Result<(CostMatrix<f64>, SolverConfig<f64>), ConversionError> {
        if !is_score(self.min_similarity) {
            return Err(ConversionError::Threshold(self.min_similarity));
        }

        let sentinel = similarities.len() as f64 + 1_f64;
        let max_cost = self.max_cost();

        let costs = similarities.into_iter()
            .enumerate()
            .map(|(i, row)| row.into_iter()
                .enumerate()
                .map(|(j, similarity)| {
                    if !is_score(similarity) {
                        return Err(ConversionError::OutOfRange { row: i, column: j, similarity });
                    }

                    let cost = self.cost(similarity);
                    Ok(if cost > max_cost { sentinel } else { cost })
                })
                .collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        let matrix = CostMatrix::new(costs).map_err(ConversionError::Matrix)?;

        Ok((matrix, SolverConfig::new(sentinel)))
    }

    fn round(&self, value: f64) -> f64 {
        let factor = 10_f64.powi(self.precision as i32);
        (value * factor).round() / factor
    }
}

fn is_score(value: f64) -> bool {
    (0_f64..=1_f64).contains(&value)
}

/// A `ConversionError` is returned when similarity scores can't be turned into costs.
#[derive(Debug, PartialEq)]
pub enum ConversionError {
    /// The minimum similarity is not in `[0, 1]`.
    Threshold(f64),
    /// A similarity score is not in `[0, 1]`.
    OutOfRange {
        /// Row index of the score.
        row: usize,
        /// Column index of the score.
        column: usize,
        /// The score.
        similarity: f64,
    },
    /// The scores don't form a valid matrix.
    Matrix(MatrixError),
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::Threshold(value) => write!(
                f, "Minimum similarity {} is not between 0 and 1", value,
            ),
            ConversionError::OutOfRange { row, column, similarity } => write!(
                f, "Similarity {} at ({}, {}) is not between 0 and 1", similarity, row, column,
            ),
            ConversionError::Matrix(error) => error.fmt(f),
        }
    }
}

impl Error for ConversionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConversionError::Matrix(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::hungarian::solve;
    use crate::data::cost_matrix::MatrixError;
    use crate::data::similarity::{Conversion, ConversionError};

    #[test]
    fn defaults() {
        let conversion = Conversion::default();
        assert_eq!(conversion.precision, 2);
        assert_eq!(conversion.max_cost(), 0.4);
        assert_eq!(conversion.cost(0.876), 0.12);
    }

    #[test]
    fn threshold() {
        let (matrix, config) = Conversion::default().convert(vec![
            vec![0.9, 0.6, 0.59],
            vec![0.0, 1.0, 0.75],
        ]).unwrap();

        assert_eq!(config.infeasible(), &3_f64);
        assert_eq!(matrix.get(0, 0), &0.1);
        // Exactly at the threshold is still feasible
        assert_eq!(matrix.get(0, 1), &0.4);
        assert_eq!(matrix.get(0, 2), &3_f64);
        assert_eq!(matrix.get(1, 0), &3_f64);
        assert_eq!(matrix.get(1, 1), &0_f64);
    }

    #[test]
    fn precision() {
        let conversion = Conversion::new(1, 0.5);
        assert_eq!(conversion.cost(0.66), 0.3);
        assert_eq!(conversion.max_cost(), 0.5);
    }

    #[test]
    fn solve_similarities() {
        let (matrix, config) = Conversion::default().convert(vec![
            vec![0.9, 0.95, 0.1],
            vec![0.8, 0.7, 0.2],
            vec![0.1, 0.2, 0.3],
        ]).unwrap();
        let assignment = solve(&matrix, &config).unwrap();

        // Row 2 is too dissimilar from every donor
        assert_eq!(assignment.mapping(), &[Some(1), Some(0), None]);
    }

    #[test]
    fn invalid() {
        let conversion = Conversion::default();
        assert_eq!(
            conversion.convert(vec![vec![0.5, 1.5]]).unwrap_err(),
            ConversionError::OutOfRange { row: 0, column: 1, similarity: 1.5 },
        );
        assert!(matches!(
            conversion.convert(vec![vec![f64::NAN]]),
            Err(ConversionError::OutOfRange { row: 0, column: 0, .. }),
        ));
        assert_eq!(
            conversion.convert(vec![vec![0.5, 0.5], vec![0.5]]).unwrap_err(),
            ConversionError::Matrix(MatrixError::Ragged { row: 1, expected: 2, found: 1 }),
        );
        assert_eq!(
            Conversion::new(2, -0.1).convert(vec![]).unwrap_err(),
            ConversionError::Threshold(-0.1),
        );
    }
}
