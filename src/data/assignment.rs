//! # Assignments
//!
//! The outcome of solving an assignment problem.
use std::fmt::{Display, Formatter};
use std::fmt;

use crate::data::cost_matrix::CostMatrix;
use crate::data::number_types::traits::Cost;

/// For each demand row, the supply column it is assigned to, if any.
///
/// No two rows share a column.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Assignment {
    mapping: Vec<Option<usize>>,
}

impl Assignment {
    /// Create a new assignment.
    ///
    /// # Arguments
    ///
    /// * `mapping`: Column per row, `None` if the row is unassigned. Assigned columns should be
    /// distinct.
    pub fn new(mapping: Vec<Option<usize>>) -> Self {
        debug_assert!({
            let mut columns = mapping.iter().flatten().collect::<Vec<_>>();
            columns.sort_unstable();
            columns.windows(2).all(|w| w[0] != w[1])
        });

        Self { mapping }
    }

    /// An assignment of `nr_rows` rows in which no row is assigned.
    pub fn unassigned(nr_rows: usize) -> Self {
        Self { mapping: vec![None; nr_rows] }
    }

    /// Number of rows, assigned or not.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Whether there are no rows at all.
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// The column row `i` is assigned to.
    pub fn column(&self, i: usize) -> Option<usize> {
        debug_assert!(i < self.len());

        self.mapping[i]
    }

    /// Column per row.
    pub fn mapping(&self) -> &[Option<usize>] {
        &self.mapping
    }

    /// Number of rows that are assigned a column.
    pub fn nr_assigned(&self) -> usize {
        self.mapping.iter().filter(|column| column.is_some()).count()
    }

    /// Iterate over the assigned (row, column) pairs.
    pub fn pairs(&self) -> impl Iterator<Item=(usize, usize)> + '_ {
        self.mapping.iter()
            .enumerate()
            .filter_map(|(i, column)| column.map(|j| (i, j)))
    }

    /// Sum of the costs of all assigned pairs.
    ///
    /// # Arguments
    ///
    /// * `matrix`: The matrix this assignment was computed for.
    pub fn total_cost<F: Cost>(&self, matrix: &CostMatrix<F>) -> F {
        debug_assert_eq!(self.len(), matrix.nr_rows());

        self.pairs().fold(F::zero(), |total, (i, j)| total + matrix.get(i, j).clone())
    }

    /// Integer representation, `-1` marking unassigned rows.
    ///
    /// This is the format the command line tool writes.
    pub fn to_indices(&self) -> Vec<i64> {
        self.mapping.iter()
            .map(|column| column.map_or(-1, |j| j as i64))
            .collect()
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, column) in self.mapping.iter().enumerate() {
            match column {
                Some(j) => writeln!(f, "{} -> {}", i, j)?,
                None => writeln!(f, "{} -> unassigned", i)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::data::assignment::Assignment;
    use crate::data::cost_matrix::CostMatrix;

    #[test]
    fn accessors() {
        let assignment = Assignment::new(vec![Some(2), None, Some(0)]);
        assert_eq!(assignment.len(), 3);
        assert_eq!(assignment.nr_assigned(), 2);
        assert_eq!(assignment.column(1), None);
        assert_eq!(assignment.pairs().collect::<Vec<_>>(), vec![(0, 2), (2, 0)]);
        assert_eq!(assignment.to_indices(), vec![2, -1, 0]);
        assert_eq!(assignment.to_string(), "0 -> 2\n1 -> unassigned\n2 -> 0\n");
    }

    #[test]
    fn total_cost() {
        let matrix = CostMatrix::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(Assignment::new(vec![Some(2), Some(0)]).total_cost(&matrix), 7);
        assert_eq!(Assignment::unassigned(2).total_cost(&matrix), 0);
    }
}
