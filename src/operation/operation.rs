//! The `Operation` type and its generic combinators.

use std::convert::Infallible;
use std::fmt;

use smallvec::smallvec;

use super::arity::Steps;
use super::{Arity, CompositionError, FailureHandler, FailureMapper, ReferenceCounter, Shareable};

/// A side-effecting action over a fixed list of arguments.
///
/// `Args` is the argument list as a tuple type (`(A,)` through
/// `(A, B, C, D)`), `E` the failure type. With the default
/// `E = Infallible` the operation cannot fail.
///
/// An `Operation` is an immutable handle: cloning it shares the wrapped
/// closure, and every combinator returns a new operation without touching its
/// operands.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use tandem::operation::Operation;
///
/// # #[cfg(not(feature = "arc"))]
/// # {
/// let log = Rc::new(RefCell::new(Vec::new()));
///
/// let log_sum = {
///     let log = Rc::clone(&log);
///     Operation::binary(move |left: &i32, right: &i32| log.borrow_mut().push(left + right))
/// };
/// let log_product = {
///     let log = Rc::clone(&log);
///     Operation::binary(move |left: &i32, right: &i32| log.borrow_mut().push(left * right))
/// };
///
/// let both = log_sum.before(log_product);
/// let Ok(()) = both.invoke(&3, &4);
/// assert_eq!(*log.borrow(), vec![12, 7]);
/// # }
/// ```
pub struct Operation<Args: Arity, E: 'static = Infallible> {
    pub(super) action: ReferenceCounter<Args::Action<E>>,
}

impl<Args: Arity, E: 'static> Operation<Args, E> {
    pub(super) const fn from_action(action: ReferenceCounter<Args::Action<E>>) -> Self {
        Self { action }
    }

    /// Creates an operation that does nothing and always succeeds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tandem::operation::Operation;
    ///
    /// let nothing: Operation<(String, u8)> = Operation::noop();
    /// let Ok(()) = nothing.invoke(&String::from("ignored"), &0);
    /// ```
    #[must_use]
    pub fn noop() -> Self {
        Self::from_action(Args::noop())
    }

    /// Returns an operation that runs `self`, then `next`, with the same
    /// arguments.
    ///
    /// If `self` fails, `next` is not run and the failure is returned
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tandem::operation::Operation;
    ///
    /// let reject = Operation::unary_fallible(|_: &u8| Err("rejected"));
    /// let unreachable = Operation::unary_fallible(|_: &u8| -> Result<(), &'static str> {
    ///     panic!("must not run after a failure")
    /// });
    ///
    /// assert_eq!(reject.then(unreachable).invoke(&1), Err("rejected"));
    /// ```
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self::from_action(Args::sequence(smallvec![self.action, next.action]))
    }

    /// Returns an operation that runs `previous`, then `self`, with the same
    /// arguments.
    ///
    /// This is the mirror image of [`then`](Self::then):
    /// `f.before(g)` behaves as `g.then(f)`.
    #[must_use]
    pub fn before(self, previous: Self) -> Self {
        previous.then(self)
    }

    /// Combines a batch of operations into one that runs each in order.
    ///
    /// - No operations: the result is [`noop`](Self::noop).
    /// - One operation: the result is that operation itself, not a wrapper
    ///   (see [`ptr_eq`](Self::ptr_eq)).
    /// - More: the result runs every operation in iteration order and stops at
    ///   the first failure. Operations are neither reordered nor
    ///   deduplicated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tandem::operation::Operation;
    ///
    /// let single: Operation<(i32,)> = Operation::unary(|_: &i32| {});
    /// let batch = Operation::of([single.clone()]);
    /// assert!(Operation::ptr_eq(&batch, &single));
    /// ```
    #[must_use]
    pub fn of<I>(operations: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut steps: Steps<Args, E> = operations
            .into_iter()
            .map(|operation| operation.action)
            .collect();

        if steps.len() <= 1 {
            return steps.pop().map_or_else(Self::noop, Self::from_action);
        }

        Self::from_action(Args::sequence(steps))
    }

    /// Like [`of`](Self::of), for operands that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::MissingOperand`] with the position of the
    /// first `None`. Nothing is composed in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tandem::operation::{CompositionError, Operation};
    ///
    /// let present: Operation<(i32,)> = Operation::unary(|_: &i32| {});
    /// let result = Operation::try_of([Some(present.clone()), None, Some(present)]);
    ///
    /// assert_eq!(
    ///     result.err(),
    ///     Some(CompositionError::MissingOperand { combinator: "of", position: 1 })
    /// );
    /// ```
    pub fn try_of<I>(operations: I) -> Result<Self, CompositionError>
    where
        I: IntoIterator<Item = Option<Self>>,
    {
        let operations = operations
            .into_iter()
            .enumerate()
            .map(|(position, operation)| {
                operation.ok_or(CompositionError::MissingOperand {
                    combinator: "of",
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::of(operations))
    }

    /// Like [`then`](Self::then), for an operand that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::MissingOperand`] if `next` is `None`.
    pub fn try_then(self, next: Option<Self>) -> Result<Self, CompositionError> {
        let next = next.ok_or(CompositionError::MissingOperand {
            combinator: "then",
            position: 0,
        })?;
        Ok(self.then(next))
    }

    /// Like [`before`](Self::before), for an operand that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::MissingOperand`] if `previous` is `None`.
    pub fn try_before(self, previous: Option<Self>) -> Result<Self, CompositionError> {
        let previous = previous.ok_or(CompositionError::MissingOperand {
            combinator: "before",
            position: 0,
        })?;
        Ok(self.before(previous))
    }

    /// Returns an infallible operation that passes any failure of `self` to
    /// `handler` instead of returning it.
    ///
    /// The handler runs exactly once per failed invocation and never on
    /// success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use tandem::operation::Operation;
    ///
    /// # #[cfg(not(feature = "arc"))]
    /// # {
    /// let failures = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&failures);
    ///
    /// let parse = Operation::unary_fallible(|text: &String| text.parse::<i32>().map(drop));
    /// let lenient = parse.handle_failure(move |_| counter.set(counter.get() + 1));
    ///
    /// let Ok(()) = lenient.invoke(&"12".to_string());
    /// let Ok(()) = lenient.invoke(&"twelve".to_string());
    /// assert_eq!(failures.get(), 1);
    /// # }
    /// ```
    #[must_use]
    pub fn handle_failure<Handler>(self, handler: Handler) -> Operation<Args, Infallible>
    where
        Handler: Fn(E) + Shareable + 'static,
    {
        let handler: ReferenceCounter<FailureHandler<E>> =
            ReferenceCounter::new(move |failure: E| {
                failure_event!("operation failure passed to handler");
                handler(failure);
            });
        Operation::from_action(Args::handle(self.action, handler))
    }

    /// Returns an infallible operation that discards any failure of `self`.
    #[must_use]
    pub fn ignore_failure(self) -> Operation<Args, Infallible> {
        let handler: ReferenceCounter<FailureHandler<E>> = ReferenceCounter::new(|_: E| {
            failure_event!("operation failure ignored");
        });
        Operation::from_action(Args::handle(self.action, handler))
    }

    /// Returns an operation that runs `fallback` with the same arguments when
    /// `self` fails.
    ///
    /// The failure of `self` is discarded. The fallback's error type becomes
    /// the error type of the result, so an infallible fallback yields an
    /// infallible operation. If `self` succeeds, `fallback` is not run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tandem::operation::Operation;
    ///
    /// let primary = Operation::unary_fallible(|value: &i32| {
    ///     if *value >= 0 { Ok(()) } else { Err("negative") }
    /// });
    /// let fallback = Operation::unary_fallible(|value: &i32| {
    ///     if *value > -10 { Ok(()) } else { Err(format!("{value} is out of range")) }
    /// });
    ///
    /// let combined = primary.on_failure(fallback);
    /// assert_eq!(combined.invoke(&5), Ok(()));
    /// assert_eq!(combined.invoke(&-5), Ok(()));
    /// assert_eq!(combined.invoke(&-50), Err("-50 is out of range".to_string()));
    /// ```
    #[must_use]
    pub fn on_failure<F: 'static>(self, fallback: Operation<Args, F>) -> Operation<Args, F> {
        Operation::from_action(Args::fallback(self.action, fallback.action))
    }

    /// Like [`on_failure`](Self::on_failure), for a fallback that may be
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::MissingOperand`] if `fallback` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tandem::operation::{CompositionError, Operation};
    ///
    /// let primary = Operation::unary_fallible(|_: &i32| Err("unavailable"));
    /// let missing: Option<Operation<(i32,)>> = None;
    ///
    /// assert_eq!(
    ///     primary.try_on_failure(missing).err(),
    ///     Some(CompositionError::MissingOperand { combinator: "on_failure", position: 0 })
    /// );
    /// ```
    pub fn try_on_failure<F: 'static>(
        self,
        fallback: Option<Operation<Args, F>>,
    ) -> Result<Operation<Args, F>, CompositionError> {
        let fallback = fallback.ok_or(CompositionError::MissingOperand {
            combinator: "on_failure",
            position: 0,
        })?;
        Ok(self.on_failure(fallback))
    }

    /// Returns an operation whose failures are converted by `mapper`.
    ///
    /// Control flow is unchanged: the result fails exactly when `self` fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tandem::operation::Operation;
    ///
    /// let strict = Operation::unary_fallible(|value: &u32| {
    ///     if *value < 100 { Ok(()) } else { Err(*value) }
    /// });
    /// let described = strict.map_failure(|value| format!("{value} is too large"));
    ///
    /// assert_eq!(described.invoke(&250), Err("250 is too large".to_string()));
    /// ```
    #[must_use]
    pub fn map_failure<F: 'static, Mapper>(self, mapper: Mapper) -> Operation<Args, F>
    where
        Mapper: Fn(E) -> F + Shareable + 'static,
    {
        let mapper: ReferenceCounter<FailureMapper<E, F>> = ReferenceCounter::new(mapper);
        Operation::from_action(Args::map_failure(self.action, mapper))
    }

    /// Returns `true` if both operations share the same closure.
    ///
    /// Clones of an operation are `ptr_eq`; operations built separately, even
    /// from identical closures, are not.
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&this.action, &other.action)
    }
}

impl<Args: Arity> Operation<Args, Infallible> {
    /// Widens the error type of an infallible operation.
    ///
    /// The result never fails; this only lets the operation be sequenced with
    /// fallible ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tandem::operation::Operation;
    ///
    /// let announce = Operation::unary(|_: &u8| {});
    /// let validate = Operation::unary_fallible(|value: &u8| {
    ///     if *value != 0 { Ok(()) } else { Err("zero") }
    /// });
    ///
    /// let checked = announce.into_fallible().then(validate);
    /// assert_eq!(checked.invoke(&0), Err("zero"));
    /// ```
    #[must_use]
    pub fn into_fallible<E: 'static>(self) -> Operation<Args, E> {
        self.map_failure::<E, _>(|never: Infallible| match never {})
    }
}

impl<Args: Arity, E: 'static> Clone for Operation<Args, E> {
    fn clone(&self) -> Self {
        Self {
            action: ReferenceCounter::clone(&self.action),
        }
    }
}

impl<Args: Arity, E: 'static> Default for Operation<Args, E> {
    fn default() -> Self {
        Self::noop()
    }
}

impl<Args: Arity, E: 'static> fmt::Debug for Operation<Args, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Operation")
            .field("arity", &Args::COUNT)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Operation<(i32,)>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Operation<(String, Vec<u8>, u64, bool), String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Operation<(i32,)>: Send, Sync);
