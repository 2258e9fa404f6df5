//! # tandem
//!
//! Composable side-effect operations and fixed-arity tuple records.
//!
//! ## Overview
//!
//! - **Operations**: [`Operation`](operation::Operation) wraps "run this code
//!   against N arguments" (N from 1 to 4) and combines such actions with
//!   `then`, `before` and `of`. Fallibility is part of the type: an operation
//!   with error type [`Infallible`](std::convert::Infallible) cannot fail, and
//!   fallible operations are turned into infallible ones with `handle_failure`,
//!   `ignore_failure` or `on_failure`.
//! - **Tuples**: `Tuple2`..`Tuple4` (immutable), `Tuple2Mut`..`Tuple4Mut`
//!   (mutable) and the variable-length `TupleN`, all comparable through one
//!   index-based structural equality.
//!
//! ## Feature Flags
//!
//! - `operation`: Composable operations (default)
//! - `tuple`: Tuple records (default)
//! - `arc`: Use `Arc` instead of `Rc` for shared closures, making operations
//!   `Send + Sync`
//! - `tracing`: Emit `tracing` events from the failure-adaptation combinators
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use tandem::prelude::*;
//!
//! # #[cfg(not(feature = "arc"))]
//! # {
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let record = |name: &'static str| {
//!     let log = Rc::clone(&log);
//!     Operation::unary(move |value: &i32| log.borrow_mut().push(format!("{name}{value}")))
//! };
//!
//! let all = Operation::of([record("a"), record("b"), record("c")]);
//! let Ok(()) = all.invoke(&1);
//! assert_eq!(*log.borrow(), vec!["a1", "b1", "c1"]);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use tandem::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "operation")]
    pub use crate::operation::*;

    #[cfg(feature = "tuple")]
    pub use crate::tuple::*;
}

#[cfg(feature = "operation")]
pub mod operation;

#[cfg(feature = "tuple")]
pub mod tuple;
