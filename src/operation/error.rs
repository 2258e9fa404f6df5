//! Error types for operation composition.

/// Represents a composition that was given an absent operand.
///
/// Composing with a missing operation is a programming error. The `try_*`
/// combinators of [`Operation`](super::Operation) report it immediately, before
/// anything is composed, instead of deferring it to invocation time.
///
/// # Examples
///
/// ```rust
/// use tandem::operation::CompositionError;
///
/// let error = CompositionError::MissingOperand {
///     combinator: "of",
///     position: 2,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "of: operand at position 2 is missing"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositionError {
    /// An operand was `None`.
    MissingOperand {
        /// The name of the combinator that rejected the operand.
        combinator: &'static str,
        /// The zero-based position of the operand among the combinator's
        /// operation arguments.
        position: usize,
    },
}

impl std::fmt::Display for CompositionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperand {
                combinator,
                position,
            } => write!(
                formatter,
                "{combinator}: operand at position {position} is missing"
            ),
        }
    }
}

impl std::error::Error for CompositionError {}
