//! # Algorithms
use crate::algorithm::hungarian::{SolveError, SolverConfig};
use crate::data::assignment::Assignment;
use crate::data::cost_matrix::CostMatrix;
use crate::data::number_types::traits::Cost;

pub mod hungarian;
pub mod matching;

/// A problem formulation for which an optimal assignment can be computed.
pub trait SolveAssignment {
    /// Type of the cost values.
    type F: Cost;

    /// Assign rows to distinct columns.
    ///
    /// # Return value
    ///
    /// An assignment that uses as many feasible pairs as possible, and has minimum total cost
    /// among those that do.
    fn solve_assignment(&self, config: &SolverConfig<Self::F>) -> Result<Assignment, SolveError>;
}

impl<F: Cost> SolveAssignment for CostMatrix<F> {
    type F = F;

    fn solve_assignment(&self, config: &SolverConfig<F>) -> Result<Assignment, SolveError> {
        hungarian::solve(self, config)
    }
}
