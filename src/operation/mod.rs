//! Composable side-effect operations.
//!
//! An [`Operation`] represents "run this code against N arguments" for N from
//! 1 to 4. Operations are immutable handles to a shared closure; combinators
//! never modify their operands, they build a new operation that closes over
//! them.
//!
//! # Overview
//!
//! - [`Operation::then`]: run `self`, then the other operation
//! - [`Operation::before`]: run the other operation, then `self`
//! - [`Operation::of`]: run a batch of operations in order
//! - [`Operation::handle_failure`], [`Operation::ignore_failure`],
//!   [`Operation::on_failure`]: turn a fallible operation into one that
//!   recovers locally
//! - [`Operation::map_failure`], [`Operation::into_fallible`]: adjust the error
//!   type so operations with different error types can be sequenced
//!
//! # Arguments
//!
//! The argument list is written as a tuple type: `Operation<(i32,)>` takes one
//! `i32`, `Operation<(String, u8)>` takes a `String` and a `u8`. Arguments are
//! passed by reference, so the same values reach every step of a composition.
//!
//! # Fallibility
//!
//! The second type parameter is the failure type and defaults to
//! [`Infallible`](std::convert::Infallible). The result of invoking an
//! infallible operation can be destructured irrefutably:
//!
//! ```rust
//! use tandem::operation::Operation;
//!
//! let check = Operation::binary(|name: &String, count: &usize| {
//!     assert_eq!(name.len(), *count);
//! });
//! let Ok(()) = check.invoke(&"four".to_string(), &4);
//! ```
//!
//! A fallible operation propagates the first failure and skips the rest:
//!
//! ```rust
//! use tandem::operation::Operation;
//!
//! let positive = Operation::unary_fallible(|value: &i32| {
//!     if *value > 0 { Ok(()) } else { Err(format!("{value} is not positive")) }
//! });
//! let even = Operation::unary_fallible(|value: &i32| {
//!     if value % 2 == 0 { Ok(()) } else { Err(format!("{value} is odd")) }
//! });
//!
//! let both = positive.then(even);
//! assert_eq!(both.invoke(&4), Ok(()));
//! assert_eq!(both.invoke(&-3), Err("-3 is not positive".to_string()));
//! assert_eq!(both.invoke(&3), Err("3 is odd".to_string()));
//! ```
//!
//! # Laws
//!
//! Writing `≡` for "performs the same effects in the same order with the same
//! outcome":
//!
//! - **Associativity**: `f.then(g).then(h) ≡ f.then(g.then(h))`
//! - **Identity**: `Operation::noop().then(f) ≡ f ≡ f.then(Operation::noop())`
//! - **Mirror**: `f.before(g) ≡ g.then(f)`
//! - **Batch**: `Operation::of([f, g, h]) ≡ f.then(g).then(h)`
//!
//! # Thread Safety
//!
//! Closures are shared through `Rc` by default. With the `arc` feature they are
//! shared through `Arc`, every closure must be `Send + Sync` (the [`Shareable`]
//! bound), and operations are `Send + Sync` themselves.

/// The reference-counted pointer used to share closures.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which allows operations to cross thread boundaries.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// Bound required of every closure stored in an [`Operation`].
///
/// Without the `arc` feature this is implemented for every type. With the
/// `arc` feature it is `Send + Sync`.
#[cfg(feature = "arc")]
pub trait Shareable: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Send + Sync + ?Sized> Shareable for T {}

/// Bound required of every closure stored in an [`Operation`].
///
/// Without the `arc` feature this is implemented for every type. With the
/// `arc` feature it is `Send + Sync`.
#[cfg(not(feature = "arc"))]
pub trait Shareable {}

#[cfg(not(feature = "arc"))]
impl<T: ?Sized> Shareable for T {}

/// Expands to a trait object type carrying the auto traits [`Shareable`]
/// stands for.
#[cfg(feature = "arc")]
macro_rules! shared_dyn {
    ($($signature:tt)*) => { dyn $($signature)* + Send + Sync };
}

#[cfg(not(feature = "arc"))]
macro_rules! shared_dyn {
    ($($signature:tt)*) => { dyn $($signature)* };
}

/// Callback receiving the failure of an operation.
pub(crate) type FailureHandler<E> = shared_dyn!(Fn(E));

/// Conversion from one failure type into another.
pub(crate) type FailureMapper<E, F> = shared_dyn!(Fn(E) -> F);

/// Emits a `debug` event when the `tracing` feature is enabled.
macro_rules! failure_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "tandem::operation", $($argument)*);
    };
}

mod arity;
mod error;
#[allow(clippy::module_inception)]
mod operation;

pub use arity::Arity;
pub use error::CompositionError;
pub use operation::Operation;

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_shares_closure() {
        let closure: ReferenceCounter<dyn Fn(i32) -> i32> =
            ReferenceCounter::new(|value| value + 1);
        let closure_clone = ReferenceCounter::clone(&closure);
        assert!(ReferenceCounter::ptr_eq(&closure, &closure_clone));
        assert_eq!(ReferenceCounter::strong_count(&closure), 2);
        assert_eq!(closure_clone(1), 2);
    }
}
