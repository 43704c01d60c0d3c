//! # Reduction and shifting
//!
//! The square working matrix of the Hungarian method. Its operations never change which perfect
//! matchings are optimal: every step adds the same constant to the total of every perfect
//! matching. Each step consumes the matrix and returns the updated one.
use crate::algorithm::matching::BipartiteGraph;
use crate::algorithm::matching::cover::LineCover;
use crate::data::number_types::traits::Cost;
use crate::data::number_types::weight::Weight;

/// Square matrix of weights, non-negative after `reduce`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct ReducedMatrix<F> {
    data: Vec<Vec<Weight<F>>>,
    /// Largest finite part of the initial feasible weights, the magnitude for zero tests.
    scale: F,
}

impl<F: Cost> ReducedMatrix<F> {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `data`: Square matrix, as rows.
    pub fn new(data: Vec<Vec<Weight<F>>>) -> Self {
        debug_assert!(data.iter().all(|row| row.len() == data.len()));

        let scale = data.iter()
            .flatten()
            .filter(|value| value.nr_penalties() == 0)
            .map(Weight::cost)
            .fold(F::zero(), |largest, cost| if cost > &largest { cost.clone() } else { largest });

        Self { data, scale }
    }

    /// Number of rows, which equals the number of columns.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix has no rows and no columns.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at coordinate (`i`, `j`).
    pub fn get(&self, i: usize, j: usize) -> &Weight<F> {
        &self.data[i][j]
    }

    /// Whether the value at coordinate (`i`, `j`) counts as zero.
    pub fn is_zero(&self, i: usize, j: usize) -> bool {
        self.data[i][j].is_negligible(&self.scale)
    }

    /// Subtract from each row its minimum, and then from each column its minimum.
    ///
    /// Afterwards, all values are non-negative and each row and each column contains a zero.
    pub fn reduce(mut self) -> Self {
        for row in &mut self.data {
            if let Some(minimum) = minimum(row.iter()).cloned() {
                for value in row.iter_mut() {
                    *value = value.clone() - minimum.clone();
                }
            }
        }

        for j in 0..self.len() {
            if let Some(minimum) = minimum(self.data.iter().map(|row| &row[j])).cloned() {
                for row in &mut self.data {
                    row[j] = row[j].clone() - minimum.clone();
                }
            }
        }

        debug_assert!(self.is_nonnegative());

        self
    }

    /// Graph connecting row `i` with column `j` when the value at (`i`, `j`) is zero.
    pub fn zero_graph(&self) -> BipartiteGraph {
        let adjacency = self.data.iter()
            .map(|row| row.iter()
                .enumerate()
                .filter(|(_, value)| value.is_negligible(&self.scale))
                .map(|(j, _)| j)
                .collect())
            .collect();

        BipartiteGraph::new(adjacency, self.len())
    }

    /// Smallest value that is covered by neither a row nor a column of the cover.
    ///
    /// # Return value
    ///
    /// `None` if all rows or all columns are covered.
    pub fn min_uncovered(&self, cover: &LineCover) -> Option<Weight<F>> {
        let uncovered = self.data.iter()
            .enumerate()
            .filter(|&(i, _)| !cover.is_row_covered(i))
            .flat_map(|(_, row)| row.iter()
                .enumerate()
                .filter(|&(j, _)| !cover.is_column_covered(j))
                .map(|(_, value)| value));

        minimum(uncovered).cloned()
    }

    /// Subtract `delta` from the values not covered at all, and add it to the values covered
    /// twice.
    ///
    /// # Arguments
    ///
    /// * `cover`: A line cover of the zeros of this matrix.
    /// * `delta`: The result of `min_uncovered` for that cover.
    pub fn shift(mut self, cover: &LineCover, delta: &Weight<F>) -> Self {
        for (i, row) in self.data.iter_mut().enumerate() {
            let row_covered = cover.is_row_covered(i);
            for (j, value) in row.iter_mut().enumerate() {
                match (row_covered, cover.is_column_covered(j)) {
                    (false, false) => *value = value.clone() - delta.clone(),
                    (true, true) => *value = value.clone() + delta.clone(),
                    _ => {},
                }
            }
        }

        debug_assert!(self.is_nonnegative());

        self
    }

    fn is_nonnegative(&self) -> bool {
        let zero = Weight::feasible(F::zero());
        self.data.iter().flatten().all(|value| value.is_negligible(&self.scale) || value > &zero)
    }
}

/// Smallest value of an iterator of partially ordered values.
///
/// Incomparable values are never selected over a value already found.
fn minimum<'a, T: PartialOrd + 'a>(values: impl Iterator<Item=&'a T>) -> Option<&'a T> {
    values.fold(None, |best, value| match best {
        Some(best) if !(value < best) => Some(best),
        _ => Some(value),
    })
}
