use std::num::NonZeroUsize;

/// The position of a column in a sequential table.
///
/// See the `columns` arena in the [`Matrix`] structure for an example of
/// this construction.
///
/// [`Matrix`]: `crate::matrix::Matrix`
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
#[repr(transparent)]
pub(crate) struct ColumnIndex(usize);

impl ColumnIndex {
    /// Creates a new index.
    #[must_use]
    pub const fn new(ix: usize) -> Self {
        Self(ix)
    }

    /// Returns the index value as a primitive type.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns the position of the next column in the table, if any.
    ///
    /// The result is meaningful only if `self` is less than [`usize::MAX`].
    #[must_use]
    pub fn increment(self) -> Self {
        Self(self.0 + 1)
    }
}

/// The position of a row identifier in the `rows` table of a [`Matrix`].
///
/// [`Matrix`]: `crate::matrix::Matrix`
pub(crate) type RowIndex = usize;

/// The position of a row node in a sequential table, whose first record
/// with index 0 cannot be referenced. See the `nodes` arena in the
/// [`Matrix`] structure for an example of this construction.
///
/// The restriction to positive index values may seem awkward, but it is the
/// only way to exploit the memory layout advantages of [`NonZeroUsize`] while
/// letting [`NodeIndex::get`] be a simple getter that performs no conversion
/// through e.g. bitwise complementation. Fortunately the solver rarely if
/// ever needs to access the zeroth record by index, because it is a spacer
/// (see [`Matrix`] for details).
///
/// [`Matrix`]: `crate::matrix::Matrix`
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
#[repr(transparent)]
pub(crate) struct NodeIndex(NonZeroUsize);

impl NodeIndex {
    /// Creates a new index.
    ///
    /// # Panics
    ///
    /// This function panics if `ix` is zero.
    #[must_use]
    pub const fn new(ix: usize) -> Self {
        // Workaround for `Option::expect` not being `const fn` in stable Rust.
        Self(if let Some(ix) = NonZeroUsize::new(ix) {
            ix
        } else {
            panic!("node index must be positive")
        })
    }

    /// Returns the index value as a primitive type.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Returns the position of the previous node in the table, or `None`
    /// if this index refers to the second record in the table (that is,
    /// whenever `self.get() == 1`).
    #[must_use]
    pub const fn decrement(self) -> Option<Self> {
        // Workaround for `Option::map` not being `const fn` in stable Rust.
        if let Some(ix) = NonZeroUsize::new(self.0.get() - 1) {
            Some(Self(ix))
        } else {
            None
        }
    }

    /// Returns the position of the next record in the table, if any.
    ///
    /// # Safety
    ///
    /// To avoid overflow, the caller must make sure that the current index is
    /// less than [`usize::MAX`]. This function is not marked `unsafe` because
    /// this condition is almost always true in practice: a node arena can
    /// usually hold at most [`isize::MAX`] elements.
    #[must_use]
    pub const fn increment(self) -> Self {
        Self(unsafe { NonZeroUsize::new_unchecked(self.0.get() + 1) })
    }
}
