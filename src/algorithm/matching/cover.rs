//! # Minimum line covers
//!
//! By König's theorem, a maximum matching of a bipartite graph determines a minimum vertex cover
//! of the same size. For the zero graph of a matrix, such a cover is a minimum set of lines
//! (rows and columns) containing every zero.
use itertools::repeat_n;

use crate::algorithm::matching::{BipartiteGraph, Matching};

/// Sets of covered rows and columns.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct LineCover {
    rows: Vec<bool>,
    columns: Vec<bool>,
}

impl LineCover {
    /// Derive a minimum cover from a maximum matching.
    ///
    /// All vertices reachable from an unmatched row by alternating paths (unmatched edges from
    /// rows to columns, matched edges from columns back to rows) are marked. The cover consists
    /// of the unmarked rows and the marked columns.
    ///
    /// # Arguments
    ///
    /// * `graph`: Bipartite graph.
    /// * `matching`: A maximum matching of that graph.
    pub fn koenig(graph: &BipartiteGraph, matching: &Matching) -> Self {
        let mut reached_rows = repeat_n(false, graph.nr_rows()).collect::<Vec<_>>();
        let mut reached_columns = repeat_n(false, graph.nr_columns()).collect::<Vec<_>>();

        let mut stack = matching.unmatched_rows().collect::<Vec<_>>();
        for &i in &stack {
            reached_rows[i] = true;
        }

        while let Some(i) = stack.pop() {
            for &j in graph.neighbours(i) {
                if reached_columns[j] {
                    continue;
                }
                reached_columns[j] = true;

                // Unmatched columns can't be reached in a maximum matching
                debug_assert!(matching.row(j).is_some());
                if let Some(next) = matching.row(j) {
                    if !reached_rows[next] {
                        reached_rows[next] = true;
                        stack.push(next);
                    }
                }
            }
        }

        let cover = Self {
            rows: reached_rows.into_iter().map(|reached| !reached).collect(),
            columns: reached_columns,
        };
        debug_assert_eq!(cover.size(), matching.size());

        cover
    }

    /// Whether row `i` is covered.
    pub fn is_row_covered(&self, i: usize) -> bool {
        self.rows[i]
    }

    /// Whether column `j` is covered.
    pub fn is_column_covered(&self, j: usize) -> bool {
        self.columns[j]
    }

    /// Number of covered rows.
    pub fn nr_covered_rows(&self) -> usize {
        self.rows.iter().filter(|&&covered| covered).count()
    }

    /// Number of covered columns.
    pub fn nr_covered_columns(&self) -> usize {
        self.columns.iter().filter(|&&covered| covered).count()
    }

    /// Total number of lines in the cover.
    pub fn size(&self) -> usize {
        self.nr_covered_rows() + self.nr_covered_columns()
    }
}
