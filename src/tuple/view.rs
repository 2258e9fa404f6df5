//! Index-based view shared by every tuple type.

use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Read access to the components of a tuple by index.
///
/// Implemented by every tuple in this module. Cross-type equality is defined
/// once, in [`structural_eq`], in terms of this trait.
pub trait TupleView<T> {
    /// Returns the number of components.
    #[must_use]
    fn dimension(&self) -> usize;

    /// Returns the component at `index`, or `None` if `index` is not below
    /// [`dimension`](Self::dimension).
    #[must_use]
    fn component(&self, index: usize) -> Option<&T>;

    /// Returns an iterator over the components in order.
    #[must_use]
    fn components(&self) -> Components<'_, T, Self> {
        Components::new(self)
    }

    /// Returns `true` if the absolute value of every component is at most
    /// `tolerance`.
    ///
    /// A `NaN` component is never zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tandem::tuple::{Tuple3, TupleView};
    ///
    /// assert!(Tuple3::new(0.0_f32, -0.0, 0.0).is_zero(0.0));
    /// assert!(Tuple3::new(0.01, -0.01, 0.0).is_zero(0.01));
    /// assert!(!Tuple3::new(0.01, -0.02, 0.0).is_zero(0.01));
    /// ```
    #[must_use]
    fn is_zero(&self, tolerance: T) -> bool
    where
        T: Real,
    {
        self.components().all(|component| component.absolute() <= tolerance)
    }

    /// Returns `true` if every component is finite (neither infinite nor
    /// `NaN`).
    #[must_use]
    fn is_finite(&self) -> bool
    where
        T: Real,
    {
        self.components().all(|component| component.finite())
    }
}

/// Returns `true` if both tuples have the same dimension and equal components
/// at every index.
///
/// # Examples
///
/// ```rust
/// use tandem::tuple::{Tuple2, Tuple2Mut, structural_eq};
///
/// assert!(structural_eq(&Tuple2::new('a', 'b'), &Tuple2Mut::new('a', 'b')));
/// assert!(!structural_eq(&Tuple2::new('a', 'b'), &Tuple2Mut::new('b', 'a')));
/// ```
#[must_use]
pub fn structural_eq<T, Left, Right>(left: &Left, right: &Right) -> bool
where
    T: PartialEq,
    Left: TupleView<T> + ?Sized,
    Right: TupleView<T> + ?Sized,
{
    left.dimension() == right.dimension() && left.components().eq(right.components())
}

/// Floating-point component types supporting [`TupleView::is_zero`] and
/// [`TupleView::is_finite`].
pub trait Real: Copy + PartialOrd {
    /// Returns the absolute value.
    fn absolute(self) -> Self;

    /// Returns `true` if the value is neither infinite nor `NaN`.
    fn finite(self) -> bool;
}

impl Real for f32 {
    #[inline]
    fn absolute(self) -> Self {
        self.abs()
    }

    #[inline]
    fn finite(self) -> bool {
        self.is_finite()
    }
}

impl Real for f64 {
    #[inline]
    fn absolute(self) -> Self {
        self.abs()
    }

    #[inline]
    fn finite(self) -> bool {
        self.is_finite()
    }
}

/// Iterator over the components of a tuple, created by
/// [`TupleView::components`].
pub struct Components<'a, T, View: ?Sized> {
    view: &'a View,
    index: usize,
    marker: PhantomData<&'a T>,
}

impl<'a, T, View: TupleView<T> + ?Sized> Components<'a, T, View> {
    const fn new(view: &'a View) -> Self {
        Self {
            view,
            index: 0,
            marker: PhantomData,
        }
    }
}

impl<'a, T: 'a, View: TupleView<T> + ?Sized> Iterator for Components<'a, T, View> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let component = self.view.component(self.index)?;
        self.index += 1;
        Some(component)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.dimension().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'a, T: 'a, View: TupleView<T> + ?Sized> ExactSizeIterator for Components<'a, T, View> {}

impl<'a, T: 'a, View: TupleView<T> + ?Sized> FusedIterator for Components<'a, T, View> {}
