//! # Maximum bipartite matching
//!
//! Hopcroft-Karp on a bipartite graph between the rows and the columns of a square matrix. The
//! search can be seeded with an existing matching, such that repeated searches on slowly
//! changing graphs only pay for the augmentations that are actually new.
use fifo_set::FIFOSet;
use itertools::repeat_n;

pub mod cover;

/// Layer value of a row that is not (or no longer) on a shortest augmenting path.
const UNREACHABLE: usize = usize::MAX;

/// Bipartite graph stored as, for each row, the columns it is adjacent to.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct BipartiteGraph {
    adjacency: Vec<Vec<usize>>,
    nr_columns: usize,
}

impl BipartiteGraph {
    /// Create a new graph.
    ///
    /// # Arguments
    ///
    /// * `adjacency`: For each row, the columns it is adjacent to, without duplicates.
    /// * `nr_columns`: Number of column vertices. All column indices should be below this value.
    pub fn new(adjacency: Vec<Vec<usize>>, nr_columns: usize) -> Self {
        debug_assert!(adjacency.iter().flatten().all(|&j| j < nr_columns));

        Self { adjacency, nr_columns }
    }

    /// Columns adjacent to row `i`.
    pub fn neighbours(&self, i: usize) -> &[usize] {
        debug_assert!(i < self.nr_rows());

        &self.adjacency[i]
    }

    /// Whether row `i` and column `j` are adjacent.
    pub fn contains_edge(&self, i: usize, j: usize) -> bool {
        self.adjacency[i].contains(&j)
    }

    /// Number of row vertices.
    pub fn nr_rows(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of column vertices.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Total number of edges.
    pub fn nr_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}

/// A matching, kept consistent in both directions.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Matching {
    row_to_column: Vec<Option<usize>>,
    column_to_row: Vec<Option<usize>>,
}

impl Matching {
    /// The matching without any pairs.
    pub fn empty(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            row_to_column: repeat_n(None, nr_rows).collect(),
            column_to_row: repeat_n(None, nr_columns).collect(),
        }
    }

    /// Column matched to row `i`.
    pub fn column(&self, i: usize) -> Option<usize> {
        self.row_to_column[i]
    }

    /// Row matched to column `j`.
    pub fn row(&self, j: usize) -> Option<usize> {
        self.column_to_row[j]
    }

    /// Number of matched pairs.
    pub fn size(&self) -> usize {
        self.row_to_column.iter().filter(|j| j.is_some()).count()
    }

    /// Whether every row and every column is matched.
    pub fn is_perfect(&self) -> bool {
        self.row_to_column.len() == self.column_to_row.len() && self.size() == self.row_to_column.len()
    }

    /// Iterate over the rows without a partner.
    pub fn unmatched_rows(&self) -> impl Iterator<Item=usize> + '_ {
        self.row_to_column.iter().enumerate()
            .filter(|(_, j)| j.is_none())
            .map(|(i, _)| i)
    }

    /// Match row `i` with column `j`.
    ///
    /// The previous partners of both are not unmatched; this is only used while flipping an
    /// augmenting path, which rematches them.
    fn match_pair(&mut self, i: usize, j: usize) {
        self.row_to_column[i] = Some(j);
        self.column_to_row[j] = Some(i);
    }

    /// Remove all pairs that are not an edge of the graph.
    ///
    /// # Return value
    ///
    /// The number of pairs removed.
    pub fn retain_edges(&mut self, graph: &BipartiteGraph) -> usize {
        debug_assert_eq!(self.row_to_column.len(), graph.nr_rows());
        debug_assert_eq!(self.column_to_row.len(), graph.nr_columns());

        let mut removed = 0;
        for i in 0..self.row_to_column.len() {
            if let Some(j) = self.row_to_column[i] {
                if !graph.contains_edge(i, j) {
                    self.row_to_column[i] = None;
                    self.column_to_row[j] = None;
                    removed += 1;
                }
            }
        }

        removed
    }

    /// Grow this matching until it is a maximum matching of the graph.
    ///
    /// Hopcroft-Karp: repeatedly layer the graph breadth-first from all unmatched rows up to the
    /// length of a shortest augmenting path, and augment along a maximal set of shortest paths
    /// depth-first.
    ///
    /// # Arguments
    ///
    /// * `graph`: Graph whose edges contain all pairs of the current matching.
    ///
    /// # Return value
    ///
    /// The number of augmentations performed.
    pub fn maximize(&mut self, graph: &BipartiteGraph) -> usize {
        debug_assert!(self.pairs_are_edges(graph));

        let mut layers = vec![UNREACHABLE; graph.nr_rows()];
        let mut next_edge = vec![0; graph.nr_rows()];
        let mut augmentations = 0;

        while let Some(shortest) = self.layer(graph, &mut layers) {
            next_edge.iter_mut().for_each(|e| *e = 0);

            let free_rows = self.unmatched_rows().collect::<Vec<_>>();
            let mut augmented = false;
            for root in free_rows {
                if self.augment_from(graph, root, shortest, &mut layers, &mut next_edge) {
                    augmentations += 1;
                    augmented = true;
                }
            }

            if !augmented {
                break;
            }
        }

        augmentations
    }

    /// Breadth-first layering from all unmatched rows.
    ///
    /// Rows get the number of matched edges between them and the closest unmatched row, rows
    /// further away than the closest unmatched column stay unreachable.
    ///
    /// # Return value
    ///
    /// The length of a shortest augmenting path, counted in rows, if one exists.
    fn layer(&self, graph: &BipartiteGraph, layers: &mut [usize]) -> Option<usize> {
        layers.iter_mut().for_each(|layer| *layer = UNREACHABLE);

        let mut queue = self.unmatched_rows().collect::<FIFOSet<_>>();
        for i in self.unmatched_rows() {
            layers[i] = 0;
        }

        let mut shortest = UNREACHABLE;
        while let Some(i) = queue.pop() {
            if layers[i] >= shortest {
                continue;
            }

            for &j in graph.neighbours(i) {
                match self.column_to_row[j] {
                    None => shortest = shortest.min(layers[i] + 1),
                    Some(next) if layers[next] == UNREACHABLE => {
                        layers[next] = layers[i] + 1;
                        queue.push(next);
                    },
                    Some(_) => {},
                }
            }
        }

        if shortest == UNREACHABLE {
            None
        } else {
            Some(shortest)
        }
    }

    /// Depth-first search for an augmenting path starting at an unmatched row, following the
    /// layers only. The path is flipped when found.
    ///
    /// Only paths of the shortest length found by the layering are considered. The search uses
    /// an explicit stack. `next_edge` holds, per row, the first adjacent column
    /// that was not yet tried in this phase; rows from which no path exists are marked
    /// unreachable.
    ///
    /// # Return value
    ///
    /// Whether an augmenting path was found.
    fn augment_from(
        &mut self,
        graph: &BipartiteGraph,
        root: usize,
        shortest: usize,
        layers: &mut [usize],
        next_edge: &mut [usize],
    ) -> bool {
        if layers[root] != 0 {
            return false;
        }

        // Rows on the current path, and the columns connecting them to their successor
        let mut rows = vec![root];
        let mut columns = Vec::new();

        while let Some(&i) = rows.last() {
            let neighbours = graph.neighbours(i);

            let mut step = None;
            while next_edge[i] < neighbours.len() {
                let j = neighbours[next_edge[i]];
                next_edge[i] += 1;

                match self.column_to_row[j] {
                    None if layers[i] + 1 == shortest => {
                        step = Some((j, None));
                        break;
                    },
                    None => {},
                    Some(next) if layers[next] != UNREACHABLE && layers[next] == layers[i] + 1 => {
                        step = Some((j, Some(next)));
                        break;
                    },
                    Some(_) => {},
                }
            }

            match step {
                Some((j, None)) => {
                    columns.push(j);
                    for (&row, &column) in rows.iter().zip(&columns) {
                        self.match_pair(row, column);
                    }
                    // Path rows are done for this phase
                    for &row in &rows {
                        layers[row] = UNREACHABLE;
                    }
                    return true;
                },
                Some((j, Some(next))) => {
                    columns.push(j);
                    rows.push(next);
                },
                None => {
                    layers[i] = UNREACHABLE;
                    rows.pop();
                    columns.pop();
                },
            }
        }

        false
    }

    fn pairs_are_edges(&self, graph: &BipartiteGraph) -> bool {
        self.row_to_column.iter().enumerate()
            .all(|(i, j)| j.is_none_or(|j| graph.contains_edge(i, j)))
            && self.column_to_row.iter().enumerate()
            .all(|(j, i)| i.is_none_or(|i| self.row_to_column[i] == Some(j)))
    }
}
