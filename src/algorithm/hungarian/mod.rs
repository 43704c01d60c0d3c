//! # Hungarian method with maximum matchings
//!
//! The classical Hungarian method keeps track of an alternating tree with starred and primed
//! zeros. This variant instead recomputes, after each change of the reduced matrix, a maximum
//! matching of the zero graph with Hopcroft-Karp (seeded with the previous matching) and derives
//! a minimum line cover from it with König's theorem.
//!
//! Rectangular problems with more columns than rows are padded with synthetic rows; rows without
//! any feasible entry are left out of the search entirely.
use tracing::{debug, trace, warn};

use crate::algorithm::hungarian::partition::{is_infeasible, Partition};
use crate::algorithm::hungarian::reduce::ReducedMatrix;
use crate::algorithm::matching::Matching;
use crate::algorithm::matching::cover::LineCover;
use crate::data::assignment::Assignment;
use crate::data::cost_matrix::CostMatrix;
use crate::data::number_types::traits::Cost;

pub use error::SolveError;

pub mod error;
pub mod partition;
pub mod reduce;


/// Parameters of a single solve.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig<F> {
    /// Entries at or above this value may never be assigned.
    ///
    /// Should be larger than any total of finite costs that an assignment can have.
    infeasible: F,
    /// Maximum number of shift iterations, `None` for the default.
    iteration_limit: Option<usize>,
}

impl<F: Cost> SolverConfig<F> {
    /// Create a new configuration.
    ///
    /// # Arguments
    ///
    /// * `infeasible`: Sentinel value marking pairs that should never be assigned.
    pub fn new(infeasible: F) -> Self {
        Self { infeasible, iteration_limit: None, }
    }

    /// Override the maximum number of iterations.
    ///
    /// Only useful to bound the running time more tightly than the default, which is never hit by
    /// a correct computation.
    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    /// The sentinel value.
    pub fn infeasible(&self) -> &F {
        &self.infeasible
    }

    /// Maximum number of iterations for a padded matrix of size `n`.
    ///
    /// Between two growths of the matching at most `n` shifts can happen, and the matching grows
    /// at most `n` times.
    pub fn iteration_limit(&self, n: usize) -> usize {
        self.iteration_limit.unwrap_or(n * n + n)
    }
}

/// Compute a minimum cost assignment.
///
/// # Arguments
///
/// * `matrix`: Costs with a row for each recipient and a column for each donor.
/// * `config`: Holds the value marking infeasible pairs.
///
/// # Return value
///
/// An assignment with an entry for each row. Among all assignments using only feasible pairs, it
/// assigns as many rows as possible, and has minimum total cost among those.
///
/// # Errors
///
/// If there are more rows than columns, or if the solver fails to converge or produces an
/// assignment that is provably not optimal.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(rows = matrix.nr_rows(), columns = matrix.nr_columns()),
)]
pub fn solve<F: Cost>(
    matrix: &CostMatrix<F>,
    config: &SolverConfig<F>,
) -> Result<Assignment, SolveError> {
    if matrix.nr_rows() > matrix.nr_columns() {
        return Err(SolveError::SupplyShortage {
            demand: matrix.nr_rows(),
            supply: matrix.nr_columns(),
        });
    }

    let partition = Partition::new(matrix, config.infeasible());
    if !partition.dead_rows().is_empty() {
        debug!(dead = ?partition.dead_rows(), "Rows without a feasible entry");
    }
    if partition.is_degenerate() {
        return Ok(Assignment::unassigned(matrix.nr_rows()));
    }

    let padded = partition.padded(matrix, config.infeasible());
    let limit = config.iteration_limit(padded.len());
    let matching = perfect_matching(padded, limit)?;

    map_to_rows(matrix, config.infeasible(), &partition, &matching)
}

/// Find a perfect matching on the zeros of a reduced version of the matrix.
///
/// # Arguments
///
/// * `matrix`: Square, non-empty matrix in which every row has a feasible entry.
/// * `iteration_limit`: Maximum number of shifts.
///
/// # Return value
///
/// A perfect matching of minimum total weight.
fn perfect_matching<F: Cost>(
    matrix: ReducedMatrix<F>,
    iteration_limit: usize,
) -> Result<Matching, SolveError> {
    let n = matrix.len();
    debug_assert!(n > 0);

    let mut matrix = matrix.reduce();
    let mut matching = Matching::empty(n, n);
    let mut iterations = 0;

    loop {
        let graph = matrix.zero_graph();
        let dropped = matching.retain_edges(&graph);
        let augmentations = matching.maximize(&graph);
        trace!(
            iterations, size = matching.size(), augmentations, dropped, edges = graph.nr_edges(),
            "Maximum matching on zero graph",
        );

        if matching.is_perfect() {
            debug!(iterations, "Perfect matching found");
            return Ok(matching);
        }

        let non_convergence = SolveError::NonConvergence {
            iterations,
            matching_size: matching.size(),
            size: n,
        };
        if iterations >= iteration_limit {
            warn!(iterations, size = matching.size(), n, "Iteration limit reached");
            return Err(non_convergence);
        }

        let cover = LineCover::koenig(&graph, &matching);
        let Some(delta) = matrix.min_uncovered(&cover) else {
            // Only possible when the cover is complete, which contradicts the matching size
            return Err(non_convergence);
        };
        trace!(
            rows = cover.nr_covered_rows(), columns = cover.nr_covered_columns(), %delta,
            "Shifting by minimum uncovered value",
        );

        matrix = matrix.shift(&cover, &delta);
        iterations += 1;
    }
}

/// Translate a perfect matching of the padded matrix to an assignment of the original rows.
///
/// Live rows matched through an infeasible entry are left unassigned; this happens when more
/// rows depend on a set of donors than that set has members.
fn map_to_rows<F: Cost>(
    matrix: &CostMatrix<F>,
    infeasible: &F,
    partition: &Partition,
    matching: &Matching,
) -> Result<Assignment, SolveError> {
    debug_assert!(matching.is_perfect());

    let mut mapping = vec![None; matrix.nr_rows()];
    let mut used = vec![false; matrix.nr_columns()];
    for (k, &i) in partition.live_rows().iter().enumerate() {
        let Some(j) = matching.column(k) else { continue };

        if is_infeasible(matrix.get(i, j), infeasible) {
            debug!(row = i, "No feasible donor left, unassigned");
        } else {
            mapping[i] = Some(j);
            used[j] = true;
        }
    }

    for &i in partition.live_rows() {
        if mapping[i].is_some() {
            continue;
        }
        let unused_feasible = (0..matrix.nr_columns())
            .find(|&j| !used[j] && !is_infeasible(matrix.get(i, j), infeasible));
        if let Some(j) = unused_feasible {
            return Err(SolveError::InconsistentResult { row: i, column: j });
        }
    }

    Ok(Assignment::new(mapping))
}
