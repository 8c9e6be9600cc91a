//! This crate provides a generic solver for the exact cover problem, built
//! on D. E. Knuth's dancing links technique.
//!
//! Suppose we're given a 0/1 matrix whose columns represent _constraints_
//! and whose rows represent _candidate parts_ of a solution; the _exact
//! cover_ problem is to find a subset of rows such that each column contains
//! a 1 in exactly one chosen row. Knuth proposed a method that achieves this
//! goal in the paper "Dancing links", [arXiv:cs/0011047][dl] [cs.DS] (2000),
//! whose title refers to a clever yet simple technique for deleting and
//! restoring the nodes of a doubly linked list. His backtracking scheme,
//! called _Algorithm X_, employs this "waltzing" of links to visit all exact
//! covers in a depth-first manner. [For further information, see Section
//! 7.2.2.1 of [_The Art of Computer Programming_ **4B** (2022)][taocp4b],
//! Part 2, 65–70.]
//!
//! A slight modification of Algorithm X solves the more general problem in
//! which constraints fall into one of two categories: _mandatory_ and
//! _optional_. Now the task is to find a subset of rows that cover every
//! mandatory constraint _exactly_ once, while covering every optional
//! constraint _at most_ once. Many placement puzzles need this relaxation;
//! in the $N$ queens problem, for instance, every rank and file must hold
//! exactly one queen, but a diagonal may just as well hold none.
//!
//! The solver knows nothing about any particular problem domain. A caller
//! describes its problem through the [`Grid`] trait (or the ready-made
//! [`DenseGrid`] implementation) as rows of abstract constraint indices,
//! and receives solutions as lists of the row identifiers it supplied:
//!
//! ```
//! use xcover::{DenseGrid, Strategy};
//!
//! // The toy problem from the beginning of Section 7.2.2.1 of TAOCP 4B:
//! // cover the constraints a, b, c, d, e, f, g (here numbered 0 to 6)
//! // using some of six candidate rows.
//! let mut grid = DenseGrid::new(7, 0);
//! grid.push_row("c e",   [2, 4]);
//! grid.push_row("a d g", [0, 3, 6]);
//! grid.push_row("b c f", [1, 2, 5]);
//! grid.push_row("a d f", [0, 3, 5]);
//! grid.push_row("b g",   [1, 6]);
//! grid.push_row("d e g", [3, 4, 6]);
//!
//! let solutions = xcover::solve_all(&grid, Strategy::MinimumSize, None)?;
//! assert_eq!(solutions.len(), 1);
//! let mut rows = solutions[0].clone();
//! rows.sort_unstable();
//! assert_eq!(rows, ["a d f", "b g", "c e"]);
//! # Ok::<(), xcover::Error>(())
//! ```
//!
//! The [`solve`], [`solve_all`] and [`solve_first`] functions cover the
//! common calling patterns; [`Matrix`] exposes the underlying build-then-
//! search steps for callers that want to report progress or stop the
//! enumeration through the [`SearchState`] handle.
//!
//! [dl]: https://arxiv.org/pdf/cs/0011047.pdf
//! [taocp4b]: https://www-cs-faculty.stanford.edu/~knuth/taocp.html#vol4

mod error;
mod grid;
mod indices;
mod matrix;
mod search;

pub use error::Error;
pub use grid::{DenseGrid, Grid};
pub use matrix::Matrix;
pub use search::{SearchState, Strategy};

/// Visits all solutions of the given grid, calling `visit` once per
/// solution found.
///
/// This is shorthand for [`Matrix::build`] followed by [`Matrix::solve`];
/// see the latter for the callback conventions and the cancellation
/// protocol.
///
/// # Errors
///
/// Returns an error if a row of the grid references a constraint index
/// outside the declared range. No row is visited in that case.
pub fn solve<G, F>(grid: &G, strategy: Strategy, visit: F) -> Result<(), Error>
where
    G: Grid,
    F: FnMut(&[G::Row], &SearchState),
{
    Matrix::build(grid)?.solve(strategy, visit);
    Ok(())
}

/// Collects the solutions of the given grid into a vector, in the order the
/// search discovers them.
///
/// If `limit` is `Some(n)`, the enumeration stops after the first `n`
/// solutions; the result is then a prefix of the unlimited enumeration.
/// A limit of zero returns an empty vector without searching at all.
///
/// # Errors
///
/// Returns an error if a row of the grid references a constraint index
/// outside the declared range.
pub fn solve_all<G>(
    grid: &G,
    strategy: Strategy,
    limit: Option<usize>,
) -> Result<Vec<Vec<G::Row>>, Error>
where
    G: Grid,
{
    let matrix = Matrix::build(grid)?;
    let mut solutions = Vec::new();
    if limit == Some(0) {
        return Ok(solutions);
    }
    matrix.solve(strategy, |solution, state| {
        solutions.push(solution.to_vec());
        if limit.is_some_and(|limit| solutions.len() >= limit) {
            state.terminate();
        }
    });
    Ok(solutions)
}

/// Returns the first solution the search discovers, or [`None`] if the
/// grid has no solutions.
///
/// Equivalent to [`solve_all`] with a limit of one, but spelled out for
/// the common satisfiability check.
///
/// # Errors
///
/// Returns an error if a row of the grid references a constraint index
/// outside the declared range.
pub fn solve_first<G>(grid: &G, strategy: Strategy) -> Result<Option<Vec<G::Row>>, Error>
where
    G: Grid,
{
    let mut first = None;
    Matrix::build(grid)?.solve(strategy, |solution, state| {
        first = Some(solution.to_vec());
        state.terminate();
    });
    Ok(first)
}
