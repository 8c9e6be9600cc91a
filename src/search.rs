use std::cell::Cell;

use crate::indices::{ColumnIndex, NodeIndex};
use crate::matrix::{Matrix, Node, Record, Spacer, HEADER};

/// A rule for picking the next mandatory column to branch on.
///
/// The choice never affects *which* solutions exist, only the order in which
/// the search discovers them and the size of the tree it explores along
/// the way.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Branch on the first uncovered mandatory column, in declaration order.
    ///
    /// Constant-time selection, but the search tree can be much larger than
    /// with [`MinimumSize`](`Self::MinimumSize`) on constrained problems.
    Naive,
    /// Branch on an uncovered mandatory column with the fewest remaining
    /// rows, breaking ties in favor of the leftmost candidate. Knuth calls
    /// this the _minimum remaining values_ (MRV) heuristic, and recommends
    /// it in Section 7.2.2.1 of TAOCP 4B for keeping the search tree small.
    ///
    /// The scan stops as soon as it finds a column no row can cover, since
    /// no smaller vertical list exists and the search must backtrack anyway.
    #[default]
    MinimumSize,
}

/// A handle for cooperative cancellation of a running search, passed to the
/// solution callback on every invocation.
///
/// Requesting termination is idempotent and cannot be revoked; the search
/// checks the flag after each callback return and winds down before exploring
/// any further branch.
#[derive(Debug, Default)]
pub struct SearchState {
    terminated: Cell<bool>,
}

impl SearchState {
    /// Asks the search to stop after the current callback returns.
    pub fn terminate(&self) {
        self.terminated.set(true);
    }

    /// Returns whether termination has been requested.
    pub fn is_terminated(&self) -> bool {
        self.terminated.get()
    }
}

impl<R: Clone> Matrix<R> {
    /// Visits all exact covers of the mandatory columns, in backtracking
    /// order, calling `visit` once per solution found.
    ///
    /// Each solution is presented as the slice of row identifiers committed
    /// to the search path, ordered by commitment (outermost branch first);
    /// the slice is borrowed from the search and must be copied out if the
    /// caller wants to keep it. The callback also receives a [`SearchState`]
    /// whose [`terminate`](`SearchState::terminate`) method stops the
    /// enumeration after the callback returns.
    ///
    /// The search consumes the matrix: the dancing links mutate in place and
    /// the structure is dropped when the call returns, whether by exhausting
    /// the search space or by cancellation.
    ///
    /// A matrix with no mandatory columns is a degenerate problem: nothing
    /// requires covering, so by convention it has no solutions and `visit`
    /// is never called. (Accepting the empty cover instead would make every
    /// purely-optional problem trivially solvable.)
    pub fn solve<F>(mut self, strategy: Strategy, mut visit: F)
    where
        F: FnMut(&[R], &SearchState),
    {
        if self.mandatory == 0 {
            return;
        }
        let state = SearchState::default();
        // The solution currently under construction, kept in lockstep with
        // the `pointers` stack so each visit needs no link traversal.
        let mut solution: Vec<R> = Vec::new();
        'outer: loop {
            if let Some(column_ix) = self.choose_column(strategy) {
                // Try to cover `column` with the first row in its
                // vertical list.
                self.cover(column_ix);
                if let Some(node_ix) = self.column(column_ix).first_node {
                    solution.push(self.rows[self.node(node_ix).row].clone());
                    self.pointers.push(node_ix);
                    self.cover_siblings_of(node_ix);
                    continue;
                }
                // No row covers `column`; this branch is a dead end.
                self.uncover(column_ix);
            } else {
                // Only optional columns remain uncovered, so the rows on
                // the `pointers` stack form a solution.
                visit(&solution, &state);
                if state.is_terminated() {
                    return;
                }
            }
            // Backtrack: revisit the most recent branching point that still
            // has an unexplored row, covering with that row instead.
            while let Some(node_ix) = self.pointers.pop() {
                solution.pop();
                self.uncover_siblings_of(node_ix);
                let node = *self.node(node_ix);
                if let Some(below_ix) = node.below {
                    solution.push(self.rows[self.node(below_ix).row].clone());
                    self.pointers.push(below_ix);
                    self.cover_siblings_of(below_ix);
                    continue 'outer;
                }
                // Every row of this column has been tried; restore it and
                // keep unwinding.
                self.uncover(node.column);
            }
            // The stack is empty, so all branches have been explored.
            return;
        }
    }

    /// Selects the next mandatory column to branch on according to the
    /// given strategy, or returns [`None`] if every mandatory column has
    /// been covered (that is, if the current search path is a solution).
    ///
    /// Mandatory columns occupy a prefix of the horizontal list, so the
    /// scan can stop at the first non-mandatory column it meets; the
    /// header itself is not mandatory, which also ends the scan when only
    /// the header remains.
    fn choose_column(&self, strategy: Strategy) -> Option<ColumnIndex> {
        let first_ix = self.column(HEADER).right;
        let first = self.column(first_ix);
        if !first.mandatory {
            return None;
        }
        match strategy {
            Strategy::Naive => Some(first_ix),
            Strategy::MinimumSize => {
                let mut best_ix = first_ix;
                let mut best_size = first.size;
                let mut cur_ix = first.right;
                while best_size > 0 {
                    let column = self.column(cur_ix);
                    if !column.mandatory {
                        break;
                    }
                    if column.size < best_size {
                        best_ix = cur_ix;
                        best_size = column.size;
                    }
                    cur_ix = column.right;
                }
                Some(best_ix)
            }
        }
    }

    /// Covers the columns of all nodes in the same row as the node at
    /// index `ix`, from left to right, skipping the column of the node
    /// itself (which the caller has covered already).
    fn cover_siblings_of(&mut self, ix: NodeIndex) {
        let mut cur_ix = ix.increment();
        while cur_ix != ix {
            cur_ix = match *self.record(cur_ix.get()) {
                Record::Spacer(Spacer { first_in_prev, .. }) => {
                    // Return to the first node in the row.
                    first_in_prev.unwrap()
                }
                Record::Node(Node { column, .. }) => {
                    self.cover(column);
                    cur_ix.increment()
                }
            };
        }
    }

    /// Uncovers the columns of all nodes in the same row as the node at
    /// index `ix`, from right to left. This step undoes the updates made
    /// by the last call to [`cover_siblings_of`](`Self::cover_siblings_of`).
    fn uncover_siblings_of(&mut self, ix: NodeIndex) {
        // As in `Matrix::unhide`, traversal in reverse order must use raw
        // indices because the first spacer has no `NodeIndex`.
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
                Record::Node(Node { column, .. }) => {
                    self.uncover(column);
                    cur_ix - 1
                }
            };
        }
    }
}
