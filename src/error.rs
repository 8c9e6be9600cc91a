use std::error;
use std::fmt;

/// An input-correctness failure detected while building a [`Matrix`]
/// from a [`Grid`].
///
/// A grid with no mandatory constraints is *not* an error: it is a valid
/// degenerate problem with zero solutions. Likewise, a problem without
/// solutions and a cooperatively cancelled search are normal outcomes
/// that never surface through this type.
///
/// [`Matrix`]: `crate::Matrix`
/// [`Grid`]: `crate::Grid`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A row produced by the grid references a constraint index outside
    /// `0..constraints + optional_constraints`. The matrix builder rejects
    /// such rows before inserting any of their nodes, so the link structure
    /// is never corrupted by bad input.
    ConstraintOutOfRange {
        /// The position of the offending row in the grid's row sequence.
        row: usize,
        /// The out-of-range constraint index.
        index: usize,
        /// The total number of constraint columns (mandatory plus optional).
        columns: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConstraintOutOfRange {
                row,
                index,
                columns,
            } => {
                write!(
                    f,
                    "row {row} references constraint {index}, but the grid declares only {columns} constraints"
                )
            }
        }
    }
}

impl error::Error for Error {}
