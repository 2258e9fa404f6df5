//! Fixed-arity tuple records.
//!
//! This module provides small aggregates of components of a single type:
//!
//! - [`Tuple2`], [`Tuple3`], [`Tuple4`]: immutable, components fixed at
//!   construction and updated by returning a new tuple (`with_x`, ...)
//! - [`Tuple2Mut`], [`Tuple3Mut`], [`Tuple4Mut`]: mutable, with public fields
//!   that can be replaced in place
//! - [`TupleN`]: a tuple whose dimension is chosen at runtime
//!
//! Components are ordered `x, y, z, w`.
//!
//! # Structural Equality
//!
//! Every tuple implements [`TupleView`], an index-based view of its
//! components. Comparisons between different tuple types (immutable against
//! mutable, fixed against [`TupleN`]) all go through [`structural_eq`]: two
//! tuples are equal when they have the same dimension and equal components at
//! every index.
//!
//! ```rust
//! use tandem::tuple::{Tuple3, Tuple3Mut, TupleN};
//!
//! let fixed = Tuple3::new(1, 2, 3);
//! let mut mutable = Tuple3Mut::new(1, 2, 0);
//! assert_ne!(fixed, mutable);
//!
//! mutable.z = 3;
//! assert_eq!(fixed, mutable);
//! assert_eq!(fixed, TupleN::from(vec![1, 2, 3]));
//! assert_ne!(fixed, TupleN::from(vec![1, 2, 3, 4]));
//! ```
//!
//! # Numeric Checks
//!
//! For floating-point components ([`Real`]), [`TupleView::is_zero`] and
//! [`TupleView::is_finite`] check every component:
//!
//! ```rust
//! use tandem::tuple::{Tuple2, TupleView};
//!
//! assert!(Tuple2::new(1e-9, -1e-9).is_zero(1e-6));
//! assert!(!Tuple2::new(0.0, f64::NAN).is_finite());
//! ```

mod dynamic;
mod error;
mod fixed;
mod view;

pub use dynamic::TupleN;
pub use error::TupleError;
pub use fixed::{Tuple2, Tuple2Mut, Tuple3, Tuple3Mut, Tuple4, Tuple4Mut};
pub use view::{Components, Real, TupleView, structural_eq};
