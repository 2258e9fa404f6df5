//! Error types for tuple construction and update.

/// Represents a failed tuple construction or component update.
///
/// # Examples
///
/// ```rust
/// use tandem::tuple::{Tuple3, TupleError};
///
/// let error = Tuple3::from_slice(&[1, 2]).unwrap_err();
/// assert_eq!(error, TupleError::LengthMismatch { expected: 3, actual: 2 });
/// assert_eq!(format!("{error}"), "expected 3 components, got 2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TupleError {
    /// A slice had the wrong number of components for the tuple.
    LengthMismatch {
        /// The dimension of the tuple being built.
        expected: usize,
        /// The length of the slice that was supplied.
        actual: usize,
    },
    /// A component index was not below the tuple's dimension.
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The dimension of the tuple.
        dimension: usize,
    },
}

impl std::fmt::Display for TupleError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(formatter, "expected {expected} components, got {actual}")
            }
            Self::IndexOutOfBounds { index, dimension } => write!(
                formatter,
                "component index {index} is out of bounds for a tuple of dimension {dimension}"
            ),
        }
    }
}

impl std::error::Error for TupleError {}
