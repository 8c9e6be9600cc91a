use std::iter;

use crate::error::Error;
use crate::grid::Grid;
use crate::indices::{ColumnIndex, NodeIndex, RowIndex};

/// A constraint column in the sparse matrix of a [`Matrix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Column {
    /// Whether a solution must cover this column exactly once (`true`),
    /// or at most once (`false`). Fixed at creation; the header is never
    /// mandatory.
    pub(crate) mandatory: bool,
    /// Possibly the previous column in the (horizontal) list of active
    /// columns, in cyclic order. The contents of this variable are preserved
    /// when the column is removed from the linked list. This property makes
    /// it possible to apply the dancing links technique on the list of
    /// active columns.
    ///
    /// This field corresponds to the `LLINK` pointer in Knuth's data structure.
    pub(crate) left: ColumnIndex,
    /// Possibly the next column in the (horizontal) list of active columns,
    /// in cyclic order. The contents of this variable are preserved when
    /// the column is removed from the linked list. (See `self.left` for
    /// details.)
    ///
    /// This field corresponds to the `RLINK` pointer in Knuth's data structure.
    pub(crate) right: ColumnIndex,
    /// The first node in the vertical list for this column, if any.
    ///
    /// This field corresponds to the `DLINK` pointer in Knuth's data structure.
    ///
    /// # Invariant
    ///
    /// `first_node` is [`None`] if and only if `last_node` is [`None`].
    pub(crate) first_node: Option<NodeIndex>,
    /// The last node in the vertical list for this column, if any.
    ///
    /// This field corresponds to the `ULINK` pointer in Knuth's data structure.
    pub(crate) last_node: Option<NodeIndex>,
    /// The number of elements in the vertical list for this column.
    ///
    /// # Invariants
    ///
    /// - `size == 0` if and only if `first_node` and `last_node` are [`None`].
    /// - `size == 1` if and only if `first_node == last_node`.
    pub(crate) size: usize,
}

impl Column {
    /// Creates a column that points to its predecessor and successor in the
    /// horizontal list, and whose vertical list is empty.
    fn new(mandatory: bool, left: ColumnIndex, right: ColumnIndex) -> Self {
        Self {
            mandatory,
            left,
            right,
            first_node: None,
            last_node: None,
            size: 0,
        }
    }
}

/// The position of the special column in the `columns` table of a [`Matrix`]
/// that anchors the horizontal list of all columns; Knuth called this the
/// _root_ in the paper "Dancing links", [arXiv:cs/0011047][dl] [cs.DS] (2000).
///
/// The header is not mandatory and has no vertical list, so a scan of the
/// mandatory prefix of the horizontal list needs only a single "is this
/// column mandatory" check to know where to stop.
///
/// [dl]: https://arxiv.org/pdf/cs/0011047.pdf
pub(crate) const HEADER: ColumnIndex = ColumnIndex::new(0);

/// An internal node in the toroidal data structure of a [`Matrix`]; each of
/// these nodes represents one cell of the sparse matrix, at the intersection
/// of a row and a column.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    /// The column associated with this node.
    ///
    /// This field corresponds to the `TOP` pointer in Knuth's data structure.
    pub(crate) column: ColumnIndex,
    /// The row this node belongs to, as a position in the `rows` table of
    /// the owning [`Matrix`]. Never changes after creation; only the link
    /// pointers of a node dance during the search.
    pub(crate) row: RowIndex,
    /// The previous node in the vertical list for `column`, if any.
    ///
    /// This field corresponds to the `ULINK` pointer in Knuth's data structure,
    /// except that it equals [`None`] instead of `column` when a node belongs
    /// to the first row that covers `column`.
    pub(crate) above: Option<NodeIndex>,
    /// The next node in the vertical list for `column`, if any.
    ///
    /// This field corresponds to the `DLINK` pointer in Knuth's data structure,
    /// except that it equals [`None`] instead of `column` when a node belongs
    /// to the last row that covers `column`.
    pub(crate) below: Option<NodeIndex>,
}

/// A spacer node between the nodes of two rows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Spacer {
    /// The first node in the preceding row, or [`None`] if this is the
    /// spacer that comes before the first row.
    ///
    /// This field is an aid to traversing such row in cyclic order, from
    /// left to right. It corresponds to the `ULINK` pointer in Knuth's
    /// data structure.
    pub(crate) first_in_prev: Option<NodeIndex>,
    /// The last node in the succeeding row, or [`None`] if this is the
    /// spacer that comes after the last row.
    ///
    /// This field is an aid to traversing such row in cyclic order, from
    /// right to left. It corresponds to the `DLINK` pointer in Knuth's
    /// data structure.
    pub(crate) last_in_next: Option<NodeIndex>,
}

/// A record in the sequential node table of a [`Matrix`] that either is a
/// separator between the nodes of two rows, or one of those nodes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Record {
    /// A spacer between rows.
    Spacer(Spacer),
    /// A cell of the sparse matrix.
    Node(Node),
}

impl Record {
    /// Creates a spacer, where `first_in_prev` and `last_in_next` are
    /// respectively the indices of the first and last nodes in the rows
    /// before and after the spacer (if any).
    fn spacer(first_in_prev: Option<NodeIndex>, last_in_next: Option<NodeIndex>) -> Self {
        Self::Spacer(Spacer {
            first_in_prev,
            last_in_next,
        })
    }
}

/// The sparse 0/1 matrix of an exact cover problem, in dancing links form.
///
/// A matrix is built once from a [`Grid`] and consumed by a single call to
/// [`solve`](`Self::solve`): the search mutates the link structure in place,
/// and once the call returns (by exhaustion or cancellation) the whole
/// structure is abandoned. Dropping the arenas releases every node at once;
/// no cycle-breaking traversal is needed because links are plain indices,
/// not ownership relations.
pub struct Matrix<R> {
    /// The header plus one column per constraint, mandatory columns first.
    pub(crate) columns: Vec<Column>,
    /// The row [nodes](`Node`) within the vertical lists, with
    /// [spacers](`Spacer`) between consecutive rows.
    pub(crate) nodes: Vec<Record>,
    /// The caller-supplied row identifiers, in arrival order.
    pub(crate) rows: Vec<R>,
    /// A stack of node pointers used for backtracking; the nodes on it
    /// identify the rows committed to the current search path.
    pub(crate) pointers: Vec<NodeIndex>,
    /// The number of mandatory columns, fixed at build time.
    pub(crate) mandatory: usize,
}

impl<R: Clone> Matrix<R> {
    // Setup routines.

    /// Builds the link structure for the given grid.
    ///
    /// One column is allocated per constraint index (mandatory if and only
    /// if the index is below `grid.constraints()`), and all columns plus the
    /// header are linked into a single circular horizontal list with the
    /// mandatory columns in front. Each grid row then appends one node to
    /// the bottom of every referenced column's vertical list, so that the
    /// arrival order of rows determines their order within each column.
    ///
    /// Rows covering no constraints are skipped. A row referencing a
    /// constraint index outside the declared range is rejected before any
    /// of its nodes are inserted.
    pub fn build<G>(grid: &G) -> Result<Self, Error>
    where
        G: Grid<Row = R>,
    {
        let mandatory = grid.constraints();
        let n = mandatory + grid.optional_constraints();
        // Construct the horizontal list.
        let header = Column::new(false, ColumnIndex::new(n), ColumnIndex::new(1));
        let columns = (0..n).map(|prev_ix| {
            let cur_ix = ColumnIndex::new(prev_ix + 1);
            Column::new(prev_ix < mandatory, ColumnIndex::new(prev_ix), cur_ix.increment())
        });
        let mut columns: Vec<Column> = iter::once(header).chain(columns).collect();
        // Close the cycle: the last column (or the header itself, if the
        // grid declares no constraints) wraps around to the header.
        columns[n].right = HEADER;

        let mut matrix = Self {
            columns,
            // Create the node arena, and insert the first spacer.
            nodes: vec![Record::spacer(None, None)],
            rows: Vec::new(),
            pointers: Vec::new(),
            mandatory,
        };
        let mut failure = None;
        // The grid-sequence position of the current row, counting the rows
        // the builder skips; `rows.len()` would drift past any empty row.
        let mut position = 0;
        grid.for_each_row(|row, constraints| {
            // A row arriving after a bad one is ignored; the matrix is
            // discarded as a whole once the closure returns.
            if failure.is_none() {
                if let Err(err) = matrix.append_row(row, constraints, position) {
                    failure = Some(err);
                }
            }
            position += 1;
        });
        match failure {
            Some(err) => Err(err),
            None => Ok(matrix),
        }
    }

    /// Appends a row to the matrix, creating one node per referenced column
    /// and a trailing spacer. `position` is the row's place in the grid's
    /// row sequence, used for error reporting.
    fn append_row(&mut self, row: R, constraints: &[usize], position: usize) -> Result<(), Error> {
        let columns = self.columns.len() - 1;
        for (ix, &constraint) in constraints.iter().enumerate() {
            if constraint >= columns {
                return Err(Error::ConstraintOutOfRange {
                    row: position,
                    index: constraint,
                    columns,
                });
            }
            // A duplicate index would link two nodes of the same row into
            // one vertical list, silently breaking the exactly-once
            // property. Only check this in debug mode; it needs $O(k^2)$
            // steps per row.
            debug_assert!(
                !constraints[..ix].contains(&constraint),
                "constraint {constraint} appears twice in row {position}"
            );
        }
        if constraints.is_empty() {
            // Not an error: a row covering nothing can never appear in a
            // solution, so it is simply left out of the link structure.
            return Ok(());
        }
        let row_ix = self.rows.len();
        self.rows.push(row);
        // We will create one node per referenced column and a trailing spacer.
        self.nodes.reserve(constraints.len() + 1);
        let first_node_ix = NodeIndex::new(self.nodes.len());
        let mut node_ix = first_node_ix;
        for &constraint in constraints {
            self.append_node(ColumnIndex::new(constraint + 1), row_ix, node_ix);
            node_ix = node_ix.increment();
        }
        // Link the previous spacer to the last node in the row.
        // The first spacer cannot be referenced directly; see `NodeIndex`.
        let prev_spacer = &mut self.nodes[first_node_ix.get() - 1];
        if let Record::Spacer(Spacer { last_in_next, .. }) = prev_spacer {
            *last_in_next = node_ix.decrement();
        } else {
            panic!("the record before the first node should be a spacer");
        }
        // Create the next spacer, and link it to the first node in the row.
        self.nodes.push(Record::spacer(Some(first_node_ix), None));
        Ok(())
    }

    /// Appends a new node to the bottom of the specified column's
    /// vertical list.
    fn append_node(&mut self, column_ix: ColumnIndex, row_ix: RowIndex, ix: NodeIndex) {
        let column = self.column_mut(column_ix);
        column.size += 1;
        let above = if let Some(prev_last_ix) = column.last_node.replace(ix) {
            // Update the `below` link of the new node's predecessor
            // in the vertical list of `column`.
            let prev = self.node_mut(prev_last_ix);
            prev.below = Some(ix);
            Some(prev_last_ix)
        } else {
            // This is the first row that covers `column`.
            column.first_node = Some(ix);
            None
        };
        self.nodes.push(Record::Node(Node {
            column: column_ix,
            row: row_ix,
            above,
            below: None,
        }));
    }

    // Link-mutation routines of Algorithm X.

    /// Marks a column as covered by deleting it from the horizontal list of
    /// columns remaining to be covered, and by deleting every row that
    /// covers the column from the vertical lists of all other columns.
    ///
    /// No node is discarded: the unlinked records keep their own pointers,
    /// so the symmetric [`uncover`](`Self::uncover`) can restore the prior
    /// state exactly.
    pub(crate) fn cover(&mut self, ix: ColumnIndex) {
        let column = self.column(ix);
        let mut node_ix = column.first_node;

        // Delete `column` from the horizontal list.
        let (left_ix, right_ix) = (column.left, column.right);
        self.column_mut(left_ix).right = right_ix;
        self.column_mut(right_ix).left = left_ix;

        // Hide all rows covering `column`, from top to bottom.
        while let Some(ix) = node_ix {
            self.hide(ix);
            node_ix = self.node(ix).below;
        }
    }

    /// Hides a row that cannot appear in an exact cover for the columns
    /// remaining in the horizontal list. This step traverses the siblings
    /// both to the left and to the right of the node with index `ix`, and
    /// deletes them from their corresponding vertical lists.
    pub(crate) fn hide(&mut self, ix: NodeIndex) {
        // Proceed cyclically through the nodes of the row associated with
        // the given node, from left to right. The nodes of a row are stored
        // contiguously in the `self.nodes` arena, so their indices form a
        // sequence of consecutive integers. The end of this sublist is
        // delimited by a spacer whose `first_in_prev` link points to the
        // node of the row's first column. Thus, to visit the relevant nodes
        // we can advance from the node at index `ix` until reaching a
        // spacer; then we return back to the row's first node and continue
        // removing nodes from their vertical lists until reaching the given
        // index `ix`.
        let mut cur_ix = ix.increment();
        while cur_ix != ix {
            cur_ix = match *self.record(cur_ix.get()) {
                Record::Spacer(Spacer { first_in_prev, .. }) => {
                    // Return to the first node in the row.
                    first_in_prev.unwrap()
                }
                Record::Node(Node {
                    column,
                    above,
                    below,
                    ..
                }) => {
                    if let Some(above) = above {
                        self.node_mut(above).below = below;
                    } else {
                        self.column_mut(column).first_node = below;
                    }
                    if let Some(below) = below {
                        self.node_mut(below).above = above;
                    } else {
                        self.column_mut(column).last_node = above;
                    }
                    // Update the length of the vertical list.
                    self.column_mut(column).size -= 1;
                    // Continue to go rightwards.
                    cur_ix.increment()
                }
            };
        }
    }

    /// Undoes the updates made by the last [covering](`Self::cover`)
    /// operation. This step puts the column at index `ix` back into the
    /// horizontal list, and reinserts every row that covers the column into
    /// the vertical lists of all other columns.
    ///
    /// Traversal order is the exact mirror of `cover`: rows from bottom to
    /// top, siblings from right to left. The unlink operations captured no
    /// extra state, so only a reversed walk restores every pointer and
    /// size to its prior value.
    pub(crate) fn uncover(&mut self, ix: ColumnIndex) {
        let column = self.column(ix);
        let mut node_ix = column.last_node;

        // Put back `column` into the horizontal list.
        let (left_ix, right_ix) = (column.left, column.right);
        self.column_mut(left_ix).right = ix;
        self.column_mut(right_ix).left = ix;

        // Unhide all rows covering `column`, from bottom to top.
        while let Some(ix) = node_ix {
            self.unhide(ix);
            node_ix = self.node(ix).above;
        }
    }

    /// Undoes the updates made by the last [hiding](`Self::hide`) operation.
    /// This step visits the siblings both to the left and to the right of
    /// the node at index `ix`, and puts them back into their corresponding
    /// vertical lists.
    pub(crate) fn unhide(&mut self, ix: NodeIndex) {
        // See `Self::hide` for an explanation. There is an important
        // difference between these two methods, however: since the first
        // spacer cannot be referenced using a `NodeIndex` and we traverse
        // the table of nodes in reverse order, we need to use raw indices.
        let ix = ix.get();
        let mut cur_ix = ix - 1;
        while cur_ix != ix {
            cur_ix = match *self.record(cur_ix) {
                Record::Spacer(Spacer { last_in_next, .. }) => {
                    // Return to the last node in the row.
                    last_in_next
                        .expect("spacer should have a last_in_next link")
                        .get()
                }
                Record::Node(Node {
                    column,
                    above,
                    below,
                    ..
                }) => {
                    // Reinsert the node into its vertical list. The record
                    // is not a spacer, so `cur_ix` is positive.
                    let wrapped_ix = Some(NodeIndex::new(cur_ix));
                    if let Some(above) = above {
                        self.node_mut(above).below = wrapped_ix;
                    } else {
                        self.column_mut(column).first_node = wrapped_ix;
                    }
                    if let Some(below) = below {
                        self.node_mut(below).above = wrapped_ix;
                    } else {
                        self.column_mut(column).last_node = wrapped_ix;
                    }
                    // Update the length of the vertical list.
                    self.column_mut(column).size += 1;
                    // Continue to go leftwards.
                    cur_ix - 1
                }
            };
        }
    }

    // Accessor methods.

    /// Returns the number of constraint columns, mandatory plus optional.
    /// The header is not counted.
    pub fn column_count(&self) -> usize {
        self.columns.len() - 1
    }

    /// Returns the number of rows linked into the matrix. Rows that covered
    /// no constraints were skipped at build time and are not counted.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns a reference to the column at the given position.
    ///
    /// # Panics
    ///
    /// This function panics if the index is out of bounds.
    pub(crate) fn column(&self, ix: ColumnIndex) -> &Column {
        &self.columns[ix.get()]
    }

    /// Returns a mutable reference to the column at the given position.
    ///
    /// # Panics
    ///
    /// This function panics if the index is out of bounds.
    pub(crate) fn column_mut(&mut self, ix: ColumnIndex) -> &mut Column {
        &mut self.columns[ix.get()]
    }

    /// Returns a reference to the record at the given raw position.
    ///
    /// # Panics
    ///
    /// This function panics if the index is out of bounds.
    pub(crate) fn record(&self, ix: usize) -> &Record {
        &self.nodes[ix]
    }

    /// Returns a reference to the row node at the given position.
    ///
    /// # Panics
    ///
    /// This function panics if the index is out of bounds, or if the record
    /// referenced is a [spacer](`Record::Spacer`) rather than a node.
    pub(crate) fn node(&self, ix: NodeIndex) -> &Node {
        if let Record::Node(node) = self.record(ix.get()) {
            node
        } else {
            panic!("record at index {ix:?} is not a row node")
        }
    }

    /// Returns a mutable reference to the row node at the given position.
    ///
    /// # Panics
    ///
    /// This function panics if the index is out of bounds, or if the record
    /// referenced is a [spacer](`Record::Spacer`) rather than a node.
    pub(crate) fn node_mut(&mut self, ix: NodeIndex) -> &mut Node {
        if let Record::Node(node) = &mut self.nodes[ix.get()] {
            node
        } else {
            panic!("record at index {ix:?} is not a row node")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::DenseGrid;

    /// A problem in the style of the toy example from Section 7.2.2.1 of
    /// TAOCP 4B: seven mandatory columns, six rows, and the unique
    /// solution {0, 3, 4}.
    fn knuth_example() -> DenseGrid<usize> {
        let mut grid = DenseGrid::new(7, 0);
        grid.push_row(0, [2, 4, 5]);
        grid.push_row(1, [0, 3, 6]);
        grid.push_row(2, [1, 2, 5]);
        grid.push_row(3, [0, 3]);
        grid.push_row(4, [1, 6]);
        grid.push_row(5, [3, 4, 6]);
        grid
    }

    #[test]
    fn build_links_columns_mandatory_first() {
        let mut grid = DenseGrid::new(2, 1);
        grid.push_row('a', [0, 2]);
        grid.push_row('b', [1]);
        let matrix = Matrix::build(&grid).unwrap();
        assert_eq!(matrix.column_count(), 3);
        assert_eq!(matrix.row_count(), 2);

        // Header <-> 1 <-> 2 <-> 3 <-> Header, with 1 and 2 mandatory.
        let header = matrix.column(HEADER);
        assert!(!header.mandatory);
        assert_eq!(header.left, ColumnIndex::new(3));
        assert_eq!(header.right, ColumnIndex::new(1));

        let one = matrix.column(ColumnIndex::new(1));
        assert!(one.mandatory);
        assert_eq!(one.left, HEADER);
        assert_eq!(one.right, ColumnIndex::new(2));
        assert_eq!(one.size, 1);

        let two = matrix.column(ColumnIndex::new(2));
        assert!(two.mandatory);
        assert_eq!(two.left, ColumnIndex::new(1));
        assert_eq!(two.right, ColumnIndex::new(3));
        assert_eq!(two.size, 1);

        let three = matrix.column(ColumnIndex::new(3));
        assert!(!three.mandatory);
        assert_eq!(three.left, ColumnIndex::new(2));
        assert_eq!(three.right, HEADER);
        assert_eq!(three.size, 1);
    }

    #[test]
    fn build_without_constraints_closes_the_cycle() {
        let grid: DenseGrid<u8> = DenseGrid::new(0, 0);
        let matrix = Matrix::build(&grid).unwrap();
        assert_eq!(matrix.column_count(), 0);
        let header = matrix.column(HEADER);
        assert_eq!(header.left, HEADER);
        assert_eq!(header.right, HEADER);
    }

    #[test]
    fn build_appends_rows_in_arrival_order() {
        let matrix = Matrix::build(&knuth_example()).unwrap();
        // Column 3 is covered by rows 1, 3 and 5, in that vertical order.
        let column = matrix.column(ColumnIndex::new(4));
        assert_eq!(column.size, 3);
        let first = column.first_node.unwrap();
        assert_eq!(matrix.node(first).row, 1);
        let second = matrix.node(first).below.unwrap();
        assert_eq!(matrix.node(second).row, 3);
        let third = matrix.node(second).below.unwrap();
        assert_eq!(matrix.node(third).row, 5);
        assert_eq!(matrix.node(third).below, None);
        assert_eq!(column.last_node, Some(third));
    }

    #[test]
    fn build_skips_rows_without_constraints() {
        let mut grid = DenseGrid::new(2, 0);
        grid.push_row('a', [0]);
        grid.push_row('b', []);
        grid.push_row('c', [1]);
        let matrix = Matrix::build(&grid).unwrap();
        assert_eq!(matrix.row_count(), 2);
        assert_eq!(matrix.column(ColumnIndex::new(1)).size, 1);
        assert_eq!(matrix.column(ColumnIndex::new(2)).size, 1);
    }

    #[test]
    fn build_rejects_out_of_range_constraint() {
        let mut grid = DenseGrid::new(2, 1);
        grid.push_row('a', [0]);
        grid.push_row('b', [1, 3]);
        match Matrix::build(&grid) {
            Err(err) => assert_eq!(
                err,
                Error::ConstraintOutOfRange {
                    row: 1,
                    index: 3,
                    columns: 3,
                }
            ),
            Ok(_) => panic!("expected an out-of-range error"),
        }
    }

    #[test]
    fn out_of_range_error_counts_skipped_rows() {
        // The skipped empty row still occupies position 0 in the grid's
        // row sequence, so the bad row must be reported at position 1.
        let mut grid = DenseGrid::new(2, 0);
        grid.push_row('a', []);
        grid.push_row('b', [9]);
        match Matrix::build(&grid) {
            Err(err) => assert_eq!(
                err,
                Error::ConstraintOutOfRange {
                    row: 1,
                    index: 9,
                    columns: 2,
                }
            ),
            Ok(_) => panic!("expected an out-of-range error"),
        }
    }

    impl<R: Clone> Matrix<R> {
        /// Captures the complete link state for round-trip comparisons.
        fn snapshot(&self) -> (Vec<Column>, Vec<Record>) {
            (self.columns.clone(), self.nodes.clone())
        }
    }

    #[test]
    fn cover_then_uncover_restores_link_state() {
        let mut matrix = Matrix::build(&knuth_example()).unwrap();
        let before = matrix.snapshot();

        let target = ColumnIndex::new(1);
        matrix.cover(target);
        // Covering removed the column and its rows from their lists.
        assert_ne!(matrix.snapshot(), before);
        assert_eq!(matrix.column(HEADER).right, ColumnIndex::new(2));

        matrix.uncover(target);
        assert_eq!(matrix.snapshot(), before);
    }

    #[test]
    fn nested_cover_uncover_restores_under_lifo_discipline() {
        let mut matrix = Matrix::build(&knuth_example()).unwrap();
        let before = matrix.snapshot();

        let outer = ColumnIndex::new(4);
        let inner = ColumnIndex::new(2);
        matrix.cover(outer);
        let mid = matrix.snapshot();
        matrix.cover(inner);
        matrix.uncover(inner);
        assert_eq!(matrix.snapshot(), mid);
        matrix.uncover(outer);
        assert_eq!(matrix.snapshot(), before);
    }

    #[test]
    fn cover_updates_sizes_of_touched_columns() {
        let mut matrix = Matrix::build(&knuth_example()).unwrap();
        // Covering column 0 hides rows 1 and 3, which also cover columns
        // 3 and 6.
        matrix.cover(ColumnIndex::new(1));
        assert_eq!(matrix.column(ColumnIndex::new(4)).size, 1);
        assert_eq!(matrix.column(ColumnIndex::new(7)).size, 2);
        // Untouched columns keep their sizes.
        assert_eq!(matrix.column(ColumnIndex::new(3)).size, 2);
    }
}
