//! # Feasibility partitioning
//!
//! Rows without any feasible entry can't take part in an assignment and are removed before the
//! search. The remaining rows are padded with synthetic rows of zero cost until the matrix is
//! square; a column matched to a synthetic row is simply not claimed by any real row.
use index_utils::remove_indices;
use itertools::repeat_n;

use crate::algorithm::hungarian::reduce::ReducedMatrix;
use crate::data::cost_matrix::CostMatrix;
use crate::data::number_types::traits::Cost;
use crate::data::number_types::weight::Weight;

/// Rows of the original problem that take part in the search.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Partition {
    /// Original indices of the live rows, sorted.
    ///
    /// Position `k` in this list is row `k` of the padded matrix.
    live: Vec<usize>,
    /// Original indices of the rows without any feasible entry, sorted.
    dead: Vec<usize>,
}

impl Partition {
    /// Split the rows of a matrix into live and dead rows.
    ///
    /// # Arguments
    ///
    /// * `matrix`: Problem to partition.
    /// * `infeasible`: Sentinel value; entries at or above it are infeasible.
    pub fn new<F: Cost>(matrix: &CostMatrix<F>, infeasible: &F) -> Self {
        let mut live = (0..matrix.nr_rows()).collect::<Vec<_>>();
        let dead = (0..matrix.nr_rows())
            .filter(|&i| matrix.row(i).all(|value| is_infeasible(value, infeasible)))
            .collect::<Vec<_>>();
        remove_indices(&mut live, &dead);

        Self { live, dead }
    }

    /// Whether no row has a feasible entry.
    pub fn is_degenerate(&self) -> bool {
        self.live.is_empty()
    }

    /// Original indices of the live rows.
    pub fn live_rows(&self) -> &[usize] {
        &self.live
    }

    /// Original indices of the dead rows.
    pub fn dead_rows(&self) -> &[usize] {
        &self.dead
    }

    /// Build the padded square matrix.
    ///
    /// Row `k < nr_live` is live row `k`, with infeasible entries replaced by a symbolic
    /// penalty. All later rows are synthetic rows of zeros.
    ///
    /// # Arguments
    ///
    /// * `matrix`: The matrix this partition was computed for, with at least as many columns as
    /// rows.
    /// * `infeasible`: Sentinel value that was used to compute this partition.
    pub fn padded<F: Cost>(&self, matrix: &CostMatrix<F>, infeasible: &F) -> ReducedMatrix<F> {
        let n = matrix.nr_columns();
        debug_assert!(self.live.len() <= n);

        let live_rows = self.live.iter().map(|&i| {
            matrix.row(i)
                .map(|value| if is_infeasible(value, infeasible) {
                    Weight::infeasible()
                } else {
                    Weight::feasible(value.clone())
                })
                .collect::<Vec<_>>()
        });
        let synthetic_rows = repeat_n(
            repeat_n(Weight::feasible(F::zero()), n).collect::<Vec<_>>(),
            n - self.live.len(),
        );

        ReducedMatrix::new(live_rows.chain(synthetic_rows).collect())
    }
}

/// Whether a value should never be selected.
pub fn is_infeasible<F: Cost>(value: &F, infeasible: &F) -> bool {
    value >= infeasible
}
