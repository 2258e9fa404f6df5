//! Tuples of two, three and four components.
//!
//! Each dimension comes as an immutable tuple (`Tuple3`) backed by an array
//! and a mutable record (`Tuple3Mut`) with public fields. Both are generated
//! by `define_tuple!`.

use std::ops::{Index, IndexMut};

use super::{TupleError, TupleN, TupleView, structural_eq};

macro_rules! component_type {
    ($field:ident) => {
        T
    };
}

macro_rules! define_tuple {
    (
        $dimension:literal,
        $name:ident,
        $mutable:ident,
        $($field:ident : $index:tt),+
    ) => {
        paste::paste! {
            #[doc = concat!("An immutable tuple of ", stringify!($dimension), " components.")]
            ///
            /// Components are fixed at construction. The `with_*` methods
            /// return a new tuple with one component replaced.
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $name<T> {
                components: [T; $dimension],
            }

            impl<T> $name<T> {
                /// Creates a tuple from its components.
                #[must_use]
                pub const fn new($($field: T),+) -> Self {
                    Self {
                        components: [$($field),+],
                    }
                }

                $(
                    #[doc = concat!("Returns the `", stringify!($field), "` component.")]
                    #[must_use]
                    pub const fn $field(&self) -> &T {
                        &self.components[$index]
                    }

                    #[doc = concat!(
                        "Returns this tuple with the `",
                        stringify!($field),
                        "` component replaced by `value`."
                    )]
                    #[must_use]
                    pub fn [<with_ $field>](self, value: T) -> Self {
                        let mut components = self.components;
                        components[$index] = value;
                        Self { components }
                    }
                )+

                /// Returns the components as an array.
                #[must_use]
                pub const fn as_array(&self) -> &[T; $dimension] {
                    &self.components
                }

                /// Consumes the tuple, returning its components as an array.
                #[must_use]
                pub fn into_array(self) -> [T; $dimension] {
                    self.components
                }

                /// Applies `function` to every component, in order.
                #[must_use]
                pub fn map<U, F>(self, function: F) -> $name<U>
                where
                    F: FnMut(T) -> U,
                {
                    $name {
                        components: self.components.map(function),
                    }
                }

                /// Returns a mutable copy of this tuple.
                #[must_use]
                pub fn to_mut(&self) -> $mutable<T>
                where
                    T: Clone,
                {
                    $mutable::from(self.clone())
                }
            }

            impl<T: Clone> $name<T> {
                /// Creates a tuple by cloning the components of a slice.
                ///
                /// # Errors
                ///
                /// Returns [`TupleError::LengthMismatch`] if the slice does not
                /// have exactly as many elements as the tuple has components.
                pub fn from_slice(components: &[T]) -> Result<Self, TupleError> {
                    if components.len() != $dimension {
                        return Err(TupleError::LengthMismatch {
                            expected: $dimension,
                            actual: components.len(),
                        });
                    }
                    Ok(Self {
                        components: std::array::from_fn(|index| components[index].clone()),
                    })
                }
            }

            #[doc = concat!("A mutable tuple of ", stringify!($dimension), " components.")]
            ///
            /// Components are public fields and can be replaced in place.
            #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
            pub struct $mutable<T> {
                $(
                    #[doc = concat!("The `", stringify!($field), "` component.")]
                    pub $field: T,
                )+
            }

            impl<T> $mutable<T> {
                /// Creates a tuple from its components.
                #[must_use]
                pub const fn new($($field: T),+) -> Self {
                    Self { $($field),+ }
                }

                $(
                    #[doc = concat!(
                        "Replaces the `",
                        stringify!($field),
                        "` component, returning the previous value."
                    )]
                    pub fn [<set_ $field>](&mut self, value: T) -> T {
                        std::mem::replace(&mut self.$field, value)
                    }
                )+

                /// Replaces the component at `index`, returning the previous
                /// value.
                ///
                /// # Errors
                ///
                /// Returns [`TupleError::IndexOutOfBounds`] if `index` is not a
                /// component index. The tuple is left unchanged.
                pub fn set(&mut self, index: usize, value: T) -> Result<T, TupleError> {
                    match index {
                        $($index => Ok(std::mem::replace(&mut self.$field, value)),)+
                        _ => Err(TupleError::IndexOutOfBounds {
                            index,
                            dimension: $dimension,
                        }),
                    }
                }

                /// Returns a mutable reference to the component at `index`.
                pub fn component_mut(&mut self, index: usize) -> Option<&mut T> {
                    match index {
                        $($index => Some(&mut self.$field),)+
                        _ => None,
                    }
                }

                #[doc = concat!("Converts into the immutable [`", stringify!($name), "`].")]
                #[must_use]
                pub fn freeze(self) -> $name<T> {
                    $name::from(self)
                }

                /// Consumes the tuple, returning its components as an array.
                #[must_use]
                pub fn into_array(self) -> [T; $dimension] {
                    [$(self.$field),+]
                }
            }

            impl<T> TupleView<T> for $name<T> {
                fn dimension(&self) -> usize {
                    $dimension
                }

                fn component(&self, index: usize) -> Option<&T> {
                    self.components.get(index)
                }
            }

            impl<T> TupleView<T> for $mutable<T> {
                fn dimension(&self) -> usize {
                    $dimension
                }

                fn component(&self, index: usize) -> Option<&T> {
                    match index {
                        $($index => Some(&self.$field),)+
                        _ => None,
                    }
                }
            }

            impl<T> Index<usize> for $name<T> {
                type Output = T;

                fn index(&self, index: usize) -> &T {
                    &self.components[index]
                }
            }

            impl<T> Index<usize> for $mutable<T> {
                type Output = T;

                fn index(&self, index: usize) -> &T {
                    match index {
                        $($index => &self.$field,)+
                        _ => panic!(
                            "index out of bounds: the dimension is {} but the index is {index}",
                            $dimension
                        ),
                    }
                }
            }

            impl<T> IndexMut<usize> for $mutable<T> {
                fn index_mut(&mut self, index: usize) -> &mut T {
                    match index {
                        $($index => &mut self.$field,)+
                        _ => panic!(
                            "index out of bounds: the dimension is {} but the index is {index}",
                            $dimension
                        ),
                    }
                }
            }

            impl<T> From<[T; $dimension]> for $name<T> {
                fn from(components: [T; $dimension]) -> Self {
                    Self { components }
                }
            }

            impl<T> From<$name<T>> for [T; $dimension] {
                fn from(tuple: $name<T>) -> Self {
                    tuple.components
                }
            }

            impl<T> From<($(component_type!($field),)+)> for $name<T> {
                fn from(($($field,)+): ($(component_type!($field),)+)) -> Self {
                    Self::new($($field),+)
                }
            }

            impl<T> From<[T; $dimension]> for $mutable<T> {
                fn from([$($field),+]: [T; $dimension]) -> Self {
                    Self::new($($field),+)
                }
            }

            impl<T> From<$mutable<T>> for [T; $dimension] {
                fn from(tuple: $mutable<T>) -> Self {
                    tuple.into_array()
                }
            }

            impl<T> From<($(component_type!($field),)+)> for $mutable<T> {
                fn from(($($field,)+): ($(component_type!($field),)+)) -> Self {
                    Self::new($($field),+)
                }
            }

            impl<T> From<$mutable<T>> for $name<T> {
                fn from(tuple: $mutable<T>) -> Self {
                    Self::new($(tuple.$field),+)
                }
            }

            impl<T> From<$name<T>> for $mutable<T> {
                fn from(tuple: $name<T>) -> Self {
                    Self::from(tuple.components)
                }
            }

            impl<T: PartialEq> PartialEq<$mutable<T>> for $name<T> {
                fn eq(&self, other: &$mutable<T>) -> bool {
                    structural_eq::<T, _, _>(self, other)
                }
            }

            impl<T: PartialEq> PartialEq<$name<T>> for $mutable<T> {
                fn eq(&self, other: &$name<T>) -> bool {
                    structural_eq::<T, _, _>(self, other)
                }
            }

            impl<T: PartialEq> PartialEq<TupleN<T>> for $name<T> {
                fn eq(&self, other: &TupleN<T>) -> bool {
                    structural_eq::<T, _, _>(self, other)
                }
            }

            impl<T: PartialEq> PartialEq<$name<T>> for TupleN<T> {
                fn eq(&self, other: &$name<T>) -> bool {
                    structural_eq::<T, _, _>(self, other)
                }
            }

            impl<T: PartialEq> PartialEq<TupleN<T>> for $mutable<T> {
                fn eq(&self, other: &TupleN<T>) -> bool {
                    structural_eq::<T, _, _>(self, other)
                }
            }

            impl<T: PartialEq> PartialEq<$mutable<T>> for TupleN<T> {
                fn eq(&self, other: &$mutable<T>) -> bool {
                    structural_eq::<T, _, _>(self, other)
                }
            }
        }
    };
}

define_tuple!(2, Tuple2, Tuple2Mut, x: 0, y: 1);
define_tuple!(3, Tuple3, Tuple3Mut, x: 0, y: 1, z: 2);
define_tuple!(4, Tuple4, Tuple4Mut, x: 0, y: 1, z: 2, w: 3);
