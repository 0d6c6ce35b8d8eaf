//! Four-way linked sparse matrix, the structure behind the dancing links
//! technique.
//!
//! Instead of owning pointers, every node lives in a single `Vec` arena and
//! the `left`/`right`/`up`/`down` links are indices into it. Unlinking a
//! node leaves its own links intact, which is what makes the O(1)
//! cover/uncover reversal work: relinking reads the stale links back.
//!
//! Arena layout: index 0 is the root sentinel, indices `1..=num_columns` are
//! the column headers (header of column `c` is at `c + 1`), and the data
//! nodes of each row follow contiguously in row-insertion order.

use crate::{matrix::Matrix, problem::Problem};

/// Index of the root sentinel anchoring the chain of active primary columns.
const ROOT: usize = 0;

#[derive(Debug, Clone, Copy)]
struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,
    /// Column this node belongs to; `usize::MAX` for the root.
    column: usize,
    /// Row this node belongs to; `usize::MAX` for headers and the root.
    row: usize,
}

/// The linked sparse representation of a [`Problem`].
///
/// Primary column headers are chained into a circular list anchored by a
/// root sentinel, in declaration order. Secondary headers are self-linked
/// horizontally: they never appear in the root chain (so the column choice
/// heuristic cannot pick them and they are never required to reach size
/// zero), yet [`cover`]/[`uncover`] treat them uniformly when a selected row
/// propagates into them.
///
/// [`cover`]: Matrix::cover
/// [`uncover`]: Matrix::uncover
#[derive(Debug, Clone)]
pub struct LinkedMatrix {
    nodes: Vec<Node>,
    /// Live-row count per column, updated on every unlink/relink.
    sizes: Vec<usize>,
    /// Arena span of each row's data nodes as `(first, len)`.
    rows: Vec<(usize, usize)>,
}

impl LinkedMatrix {
    fn header(column: usize) -> usize {
        column + 1
    }

    /// Append a node at the bottom of its column's vertical chain.
    fn push_node(&mut self, column: usize, row: usize) -> usize {
        let ix = self.nodes.len();
        let header = Self::header(column);
        let up = self.nodes[header].up;
        self.nodes.push(Node {
            left: ix,
            right: ix,
            up,
            down: header,
            column,
            row,
        });
        self.nodes[up].down = ix;
        self.nodes[header].up = ix;
        self.sizes[column] += 1;
        ix
    }
}

impl Matrix for LinkedMatrix {
    fn new(problem: &Problem) -> Self {
        let num_columns = problem.num_columns();
        let num_nodes: usize = problem.rows().iter().map(Vec::len).sum();

        let mut nodes = Vec::with_capacity(1 + num_columns + num_nodes);
        nodes.push(Node {
            left: ROOT,
            right: ROOT,
            up: ROOT,
            down: ROOT,
            column: usize::MAX,
            row: usize::MAX,
        });
        for column in 0..num_columns {
            let header = Self::header(column);
            nodes.push(Node {
                left: header,
                right: header,
                up: header,
                down: header,
                column,
                row: usize::MAX,
            });
        }

        // Chain the primary headers through the root; secondary headers stay
        // self-linked.
        for column in 0..problem.num_primary() {
            let header = Self::header(column);
            let last = nodes[ROOT].left;
            nodes[header].left = last;
            nodes[header].right = ROOT;
            nodes[last].right = header;
            nodes[ROOT].left = header;
        }

        let mut matrix = Self {
            nodes,
            sizes: vec![0; num_columns],
            rows: Vec::with_capacity(problem.num_rows()),
        };

        for (row, columns) in problem.rows().iter().enumerate() {
            let first = matrix.nodes.len();
            for &column in columns {
                matrix.push_node(column, row);
            }
            let len = matrix.nodes.len() - first;
            // Close the horizontal circle over the row's contiguous nodes.
            for ix in first..first + len {
                let next = if ix + 1 == first + len { first } else { ix + 1 };
                matrix.nodes[ix].right = next;
                matrix.nodes[next].left = ix;
            }
            matrix.rows.push((first, len));
        }

        matrix
    }

    fn choose_column(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        let mut header = self.nodes[ROOT].right;
        while header != ROOT {
            let column = self.nodes[header].column;
            let size = self.sizes[column];
            // Strict comparison keeps the earliest minimal column.
            match best {
                Some((_, smallest)) if size >= smallest => {}
                _ => best = Some((column, size)),
            }
            header = self.nodes[header].right;
        }
        best.map(|(column, _)| column)
    }

    fn live_columns(&self) -> Vec<usize> {
        let mut columns = Vec::new();
        let mut header = self.nodes[ROOT].right;
        while header != ROOT {
            columns.push(self.nodes[header].column);
            header = self.nodes[header].right;
        }
        columns
    }

    fn column_size(&self, column: usize) -> usize {
        self.sizes[column]
    }

    fn live_rows(&self, column: usize) -> Vec<usize> {
        let header = Self::header(column);
        let mut rows = Vec::with_capacity(self.sizes[column]);
        let mut ix = self.nodes[header].down;
        while ix != header {
            rows.push(self.nodes[ix].row);
            ix = self.nodes[ix].down;
        }
        rows
    }

    fn cover(&mut self, column: usize) {
        let header = Self::header(column);

        // Drop the header out of the horizontal chain. For a self-linked
        // secondary header these writes are no-ops.
        let (left, right) = (self.nodes[header].left, self.nodes[header].right);
        self.nodes[left].right = right;
        self.nodes[right].left = left;

        // Delete every row covering this column from all other columns,
        // top to bottom, left to right.
        let mut ix = self.nodes[header].down;
        while ix != header {
            let mut sibling = self.nodes[ix].right;
            while sibling != ix {
                let (up, down) = (self.nodes[sibling].up, self.nodes[sibling].down);
                self.nodes[up].down = down;
                self.nodes[down].up = up;
                self.sizes[self.nodes[sibling].column] -= 1;
                sibling = self.nodes[sibling].right;
            }
            ix = self.nodes[ix].down;
        }
    }

    fn uncover(&mut self, column: usize) {
        let header = Self::header(column);

        // Replay the cover walk in exact reverse order (rows bottom to top,
        // siblings right to left) so that every vertical relink undoes the
        // matching unlink last-removed-first-restored.
        let mut ix = self.nodes[header].up;
        while ix != header {
            let mut sibling = self.nodes[ix].left;
            while sibling != ix {
                let (up, down) = (self.nodes[sibling].up, self.nodes[sibling].down);
                self.nodes[up].down = sibling;
                self.nodes[down].up = sibling;
                self.sizes[self.nodes[sibling].column] += 1;
                sibling = self.nodes[sibling].left;
            }
            ix = self.nodes[ix].up;
        }

        let (left, right) = (self.nodes[header].left, self.nodes[header].right);
        self.nodes[left].right = header;
        self.nodes[right].left = header;
    }

    fn cover_siblings(&mut self, row: usize, except: usize) {
        let (first, len) = self.rows[row];
        for ix in first..first + len {
            let column = self.nodes[ix].column;
            if column != except {
                self.cover(column);
            }
        }
    }

    fn uncover_siblings(&mut self, row: usize, except: usize) {
        let (first, len) = self.rows[row];
        for ix in (first..first + len).rev() {
            let column = self.nodes[ix].column;
            if column != except {
                self.uncover(column);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wikipedia_fixture() -> Problem {
        let mut problem = Problem::new(["A", "B", "C", "D", "E", "F", "G"], 0).unwrap();
        problem.add_row(["C", "E", "F"]).unwrap();
        problem.add_row(["A", "D", "G"]).unwrap();
        problem.add_row(["B", "C", "F"]).unwrap();
        problem.add_row(["A", "D"]).unwrap();
        problem.add_row(["B", "G"]).unwrap();
        problem.add_row(["D", "E", "G"]).unwrap();
        problem
    }

    /// Everything observable about the structure, for before/after
    /// comparisons.
    fn snapshot(matrix: &LinkedMatrix, num_columns: usize) -> (Vec<usize>, Vec<usize>, Vec<Vec<usize>>) {
        (
            matrix.live_columns(),
            (0..num_columns).map(|c| matrix.column_size(c)).collect(),
            (0..num_columns).map(|c| matrix.live_rows(c)).collect(),
        )
    }

    #[test]
    fn builds_expected_shape() {
        let problem = wikipedia_fixture();
        let matrix = LinkedMatrix::new(&problem);

        assert_eq!(matrix.live_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(matrix.column_size(0), 2); // A: rows 1, 3
        assert_eq!(matrix.column_size(3), 3); // D: rows 1, 3, 5
        assert_eq!(matrix.live_rows(3), vec![1, 3, 5]);
        assert_eq!(matrix.live_rows(6), vec![1, 4, 5]);
    }

    #[test]
    fn cover_then_uncover_restores_structure() {
        let problem = wikipedia_fixture();
        let mut matrix = LinkedMatrix::new(&problem);

        let before = snapshot(&matrix, 7);
        matrix.cover(3);
        matrix.uncover(3);
        assert_eq!(snapshot(&matrix, 7), before);
    }

    #[test]
    fn nested_cover_uncover_restores_structure() {
        let problem = wikipedia_fixture();
        let mut matrix = LinkedMatrix::new(&problem);

        let before = snapshot(&matrix, 7);
        matrix.cover(0);
        matrix.cover_siblings(1, 0);
        matrix.cover(1);
        matrix.uncover(1);
        matrix.uncover_siblings(1, 0);
        matrix.uncover(0);
        assert_eq!(snapshot(&matrix, 7), before);
    }

    #[test]
    fn cover_updates_sibling_sizes() {
        let problem = wikipedia_fixture();
        let mut matrix = LinkedMatrix::new(&problem);

        matrix.cover(0);
        // Rows 1 and 3 covered A; both also cover D, row 1 also covers G.
        assert_eq!(matrix.column_size(3), 1);
        assert_eq!(matrix.column_size(6), 2);
        assert_eq!(matrix.live_rows(3), vec![5]);
        assert!(!matrix.live_columns().contains(&0));
    }

    #[test]
    fn chooses_smallest_column_with_leftmost_tie_break() {
        let mut problem = Problem::new(["A", "B", "C"], 0).unwrap();
        problem.add_row(["A", "B"]).unwrap();
        problem.add_row(["A", "C"]).unwrap();
        problem.add_row(["B"]).unwrap();
        problem.add_row(["C"]).unwrap();
        let matrix = LinkedMatrix::new(&problem);

        // A has size 2; B and C both have size 2. All tie, so A wins.
        assert_eq!(matrix.choose_column(), Some(0));

        let mut problem = Problem::new(["A", "B", "C"], 0).unwrap();
        problem.add_row(["A", "B"]).unwrap();
        problem.add_row(["A", "C"]).unwrap();
        problem.add_row(["B"]).unwrap();
        let matrix = LinkedMatrix::new(&problem);

        // B and C have size 2 and 1; C is the unique minimum.
        assert_eq!(matrix.choose_column(), Some(2));
    }

    #[test]
    fn secondary_columns_stay_out_of_the_root_chain() {
        let mut problem = Problem::new(["P", "Q", "x"], 1).unwrap();
        problem.add_row(["P", "x"]).unwrap();
        problem.add_row(["Q", "x"]).unwrap();
        let mut matrix = LinkedMatrix::new(&problem);

        assert_eq!(matrix.live_columns(), vec![0, 1]);
        assert_eq!(matrix.column_size(2), 2);

        // Covering a row into the secondary column decrements its size but
        // never makes it choosable.
        matrix.cover(0);
        assert_eq!(matrix.column_size(2), 1);
        assert_eq!(matrix.choose_column(), Some(1));

        matrix.uncover(0);
        assert_eq!(matrix.column_size(2), 2);
    }
}
