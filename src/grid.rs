/// A read-only description of an exact cover problem.
///
/// A grid declares how many mandatory and optional constraint columns the
/// problem has, and produces the rows of the sparse 0/1 matrix on demand.
/// Mandatory constraints occupy the indices `0..constraints`, optional
/// constraints the indices `constraints..constraints + optional_constraints`.
///
/// Implementors encode a concrete problem (sudoku, N-Queens, set packing,
/// and so on) as rows of constraint indices; the engine knows nothing about
/// the problem domain and only enforces the abstract exact cover property.
/// Decoding a solution back into domain terms is the caller's job, via the
/// row identifiers it supplied here.
pub trait Grid {
    /// An opaque identifier for a row, echoed back in solutions.
    ///
    /// Identifiers need only be distinguishable values; the engine assumes
    /// no ordering between them.
    type Row: Clone;

    /// The number of mandatory constraints, each of which must be covered
    /// exactly once by a solution.
    fn constraints(&self) -> usize;

    /// The number of optional constraints, each of which may be covered
    /// at most once by a solution.
    fn optional_constraints(&self) -> usize {
        0
    }

    /// Calls a closure on each row of the matrix, in a fixed order.
    ///
    /// Each row is presented as its identifier together with the constraint
    /// indices it covers. The order of indices within a row carries no
    /// meaning, but the arrival order of rows determines their position in
    /// each column's vertical list, and therefore the enumeration order of
    /// otherwise-tied search branches. Rows covering no constraints are
    /// permitted; the matrix builder skips them.
    fn for_each_row<F>(&self, f: F)
    where
        F: FnMut(Self::Row, &[usize]);
}

/// A [`Grid`] backed by explicit row lists.
///
/// This is the construction surface for callers without a bespoke problem
/// encoder, and the one the crate's own tests use:
///
/// ```
/// use xcover::DenseGrid;
///
/// // Two mandatory constraints; rows are labeled by `&str`.
/// let mut grid = DenseGrid::new(2, 0);
/// grid.push_row("left", [0]);
/// grid.push_row("right", [1]);
/// grid.push_row("both", [0, 1]);
///
/// let solutions = xcover::solve_all(&grid, Default::default(), None).unwrap();
/// assert_eq!(solutions.len(), 2); // {"left", "right"} and {"both"}
/// ```
#[derive(Debug, Clone)]
pub struct DenseGrid<R> {
    constraints: usize,
    optional_constraints: usize,
    rows: Vec<(R, Vec<usize>)>,
}

impl<R: Clone> DenseGrid<R> {
    /// Creates an empty grid with the given numbers of mandatory and
    /// optional constraints.
    pub fn new(constraints: usize, optional_constraints: usize) -> Self {
        Self {
            constraints,
            optional_constraints,
            rows: Vec::new(),
        }
    }

    /// Appends a row covering the given constraint indices.
    ///
    /// Indices are not validated here; the matrix builder bounds-checks
    /// them and reports an [`Error`](`crate::Error`) for the first
    /// out-of-range reference.
    pub fn push_row<I>(&mut self, row: R, constraints: I)
    where
        I: IntoIterator<Item = usize>,
    {
        self.rows.push((row, constraints.into_iter().collect()));
    }

    /// Returns the number of rows added so far.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl<R: Clone> Grid for DenseGrid<R> {
    type Row = R;

    fn constraints(&self) -> usize {
        self.constraints
    }

    fn optional_constraints(&self) -> usize {
        self.optional_constraints
    }

    fn for_each_row<F>(&self, mut f: F)
    where
        F: FnMut(R, &[usize]),
    {
        for (row, constraints) in &self.rows {
            f(row.clone(), constraints);
        }
    }
}
