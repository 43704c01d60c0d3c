//! # Properties of optimal assignments
//!
//! Randomly generated problems, checked against exhaustive search.
use itertools::Itertools;

use donor_assign::data::assignment::Assignment;
use donor_assign::data::cost_matrix::CostMatrix;
use donor_assign::data::number_types::traits::Cost;

#[allow(missing_docs)]
mod test;

/// Best number of feasible pairs and the lowest total cost achieving it.
///
/// # Arguments
///
/// * `matrix`: Problem with at most as many rows as columns.
/// * `infeasible`: Sentinel value.
fn exhaustive<F: Cost>(matrix: &CostMatrix<F>, infeasible: &F) -> (usize, F) {
    (0..matrix.nr_columns())
        .permutations(matrix.nr_rows())
        .map(|columns| columns.into_iter()
            .enumerate()
            .map(|(i, j)| matrix.get(i, j))
            .filter(|&cost| cost < infeasible)
            .fold((0, F::zero()), |(count, total), cost| (count + 1, total + cost.clone())))
        .min_by(|(count, total), (other_count, other_total)| other_count.cmp(count)
            .then_with(|| total.partial_cmp(other_total).unwrap()))
        .unwrap_or((0, F::zero()))
}

/// Check the postconditions that don't depend on optimality.
fn assert_valid<F: Cost>(assignment: &Assignment, matrix: &CostMatrix<F>, infeasible: &F) {
    assert_eq!(assignment.len(), matrix.nr_rows());

    let columns = assignment.pairs().map(|(_, j)| j).collect::<Vec<_>>();
    assert!(columns.iter().all(|&j| j < matrix.nr_columns()));
    assert!(columns.iter().all_unique());

    for (i, j) in assignment.pairs() {
        assert!(matrix.get(i, j) < infeasible, "({}, {}) is infeasible", i, j);
    }
    for i in 0..matrix.nr_rows() {
        if matrix.row(i).all(|value| value >= infeasible) {
            assert_eq!(assignment.column(i), None);
        }
    }

    if assignment.nr_assigned() == 0 {
        assert!(assignment.total_cost(matrix).is_zero());
    }
}
