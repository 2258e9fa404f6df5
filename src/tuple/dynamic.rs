//! Tuples whose dimension is chosen at runtime.

use std::ops::Index;

use super::TupleView;

/// A tuple of any dimension, backed by a boxed slice.
///
/// `TupleN` is the general form the fixed tuples compare against: a
/// [`Tuple3`](super::Tuple3) equals a `TupleN` of dimension 3 with the same
/// components.
///
/// # Examples
///
/// ```rust
/// use tandem::tuple::{TupleN, TupleView};
///
/// let tuple: TupleN<u8> = (1..=5).collect();
/// assert_eq!(tuple.dimension(), 5);
/// assert_eq!(tuple.component(4), Some(&5));
/// assert_eq!(tuple.component(5), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TupleN<T> {
    components: Box<[T]>,
}

impl<T> TupleN<T> {
    /// Creates a tuple from the given components.
    #[must_use]
    pub fn new(components: Vec<T>) -> Self {
        Self {
            components: components.into_boxed_slice(),
        }
    }

    /// Creates a tuple by cloning the components of a slice.
    #[must_use]
    pub fn from_slice(components: &[T]) -> Self
    where
        T: Clone,
    {
        Self {
            components: components.into(),
        }
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    /// Consumes the tuple, returning its components.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.components.into_vec()
    }
}

impl<T> TupleView<T> for TupleN<T> {
    fn dimension(&self) -> usize {
        self.components.len()
    }

    fn component(&self, index: usize) -> Option<&T> {
        self.components.get(index)
    }
}

impl<T> Index<usize> for TupleN<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.components[index]
    }
}

impl<T> From<Vec<T>> for TupleN<T> {
    fn from(components: Vec<T>) -> Self {
        Self::new(components)
    }
}

impl<T, const N: usize> From<[T; N]> for TupleN<T> {
    fn from(components: [T; N]) -> Self {
        Self::new(Vec::from(components))
    }
}

impl<T> FromIterator<T> for TupleN<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self {
            components: iterator.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_tuple_has_no_components() {
        let tuple: TupleN<String> = TupleN::default();
        assert_eq!(tuple.dimension(), 0);
        assert_eq!(tuple.components().count(), 0);
    }

    #[rstest]
    fn from_slice_clones_components() {
        let source = vec![String::from("a"), String::from("b")];
        let tuple = TupleN::from_slice(&source);
        assert_eq!(tuple.as_slice(), source.as_slice());
        assert_eq!(tuple.into_vec(), source);
    }

    #[rstest]
    fn index_returns_component() {
        let tuple = TupleN::from([10, 20, 30]);
        assert_eq!(tuple[1], 20);
    }

    #[rstest]
    #[should_panic(expected = "index out of bounds")]
    fn index_out_of_range_panics() {
        let tuple = TupleN::from([10, 20, 30]);
        let _component = &tuple[3];
    }
}
