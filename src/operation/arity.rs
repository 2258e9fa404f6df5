//! Argument lists accepted by an [`Operation`].
//!
//! [`Arity`] is implemented for the tuple types `(A,)`, `(A, B)`, `(A, B, C)`
//! and `(A, B, C, D)`. Each implementation knows how to build the closures the
//! generic combinators of [`Operation`] need (sequencing, recovery, error
//! conversion) for its own parameter list, so the combinators themselves are
//! written once.
//!
//! The same macro also generates the per-arity constructors
//! (`unary`, `binary`, `ternary`, `quaternary` and their `_fallible`
//! counterparts) and `invoke`.

use std::convert::Infallible;

use smallvec::SmallVec;

use super::{FailureHandler, FailureMapper, Operation, ReferenceCounter, Shareable};

mod sealed {
    pub trait Sealed {}
}

/// Steps of a sequenced operation. Most compositions have at most four steps.
pub(super) type Steps<Args, E> =
    SmallVec<[ReferenceCounter<<Args as Arity>::Action<E>>; 4]>;

/// An argument list an [`Operation`] can be invoked with.
///
/// This trait is sealed: it is implemented for tuples of one to four
/// `'static` types and cannot be implemented outside this crate.
///
/// # Examples
///
/// ```rust
/// use tandem::operation::Arity;
///
/// assert_eq!(<(i32,) as Arity>::COUNT, 1);
/// assert_eq!(<(i32, String, u8, bool) as Arity>::COUNT, 4);
/// ```
pub trait Arity: sealed::Sealed + 'static {
    /// The number of arguments.
    const COUNT: usize;

    /// The shared closure type: a function of one reference per argument
    /// returning `Result<(), E>`.
    #[doc(hidden)]
    type Action<E: 'static>: ?Sized + 'static;

    /// A closure that does nothing and succeeds.
    #[doc(hidden)]
    fn noop<E: 'static>() -> ReferenceCounter<Self::Action<E>>;

    /// A closure running every step in order, stopping at the first failure.
    #[doc(hidden)]
    fn sequence<E: 'static>(steps: Steps<Self, E>) -> ReferenceCounter<Self::Action<E>>;

    /// A closure running `primary` and, if it fails, `fallback` with the same
    /// arguments.
    #[doc(hidden)]
    fn fallback<E: 'static, F: 'static>(
        primary: ReferenceCounter<Self::Action<E>>,
        fallback: ReferenceCounter<Self::Action<F>>,
    ) -> ReferenceCounter<Self::Action<F>>;

    /// A closure running `primary` and passing its failure to `handler`.
    #[doc(hidden)]
    fn handle<E: 'static>(
        primary: ReferenceCounter<Self::Action<E>>,
        handler: ReferenceCounter<FailureHandler<E>>,
    ) -> ReferenceCounter<Self::Action<Infallible>>;

    /// A closure running `primary` and converting its failure with `mapper`.
    #[doc(hidden)]
    fn map_failure<E: 'static, F: 'static>(
        primary: ReferenceCounter<Self::Action<E>>,
        mapper: ReferenceCounter<FailureMapper<E, F>>,
    ) -> ReferenceCounter<Self::Action<F>>;
}

macro_rules! impl_arity {
    (
        $count:literal,
        $count_word:literal,
        $constructor:ident,
        $fallible_constructor:ident,
        $($argument:ident : $parameter:ident),+
    ) => {
        impl<$($parameter),+> sealed::Sealed for ($($parameter,)+) {}

        impl<$($parameter: 'static),+> Arity for ($($parameter,)+) {
            const COUNT: usize = $count;

            type Action<E: 'static> = shared_dyn!(Fn($(&$parameter),+) -> Result<(), E>);

            fn noop<E: 'static>() -> ReferenceCounter<Self::Action<E>> {
                ReferenceCounter::new(|$(_: &$parameter),+| -> Result<(), E> { Ok(()) })
            }

            fn sequence<E: 'static>(steps: Steps<Self, E>) -> ReferenceCounter<Self::Action<E>> {
                ReferenceCounter::new(move |$($argument: &$parameter),+| -> Result<(), E> {
                    for step in &steps {
                        step($($argument),+)?;
                    }
                    Ok(())
                })
            }

            fn fallback<E: 'static, F: 'static>(
                primary: ReferenceCounter<Self::Action<E>>,
                fallback: ReferenceCounter<Self::Action<F>>,
            ) -> ReferenceCounter<Self::Action<F>> {
                ReferenceCounter::new(move |$($argument: &$parameter),+| -> Result<(), F> {
                    primary($($argument),+).or_else(|_| {
                        failure_event!("operation failed, running fallback");
                        fallback($($argument),+)
                    })
                })
            }

            fn handle<E: 'static>(
                primary: ReferenceCounter<Self::Action<E>>,
                handler: ReferenceCounter<FailureHandler<E>>,
            ) -> ReferenceCounter<Self::Action<Infallible>> {
                ReferenceCounter::new(move |$($argument: &$parameter),+| -> Result<(), Infallible> {
                    if let Err(failure) = primary($($argument),+) {
                        handler(failure);
                    }
                    Ok(())
                })
            }

            fn map_failure<E: 'static, F: 'static>(
                primary: ReferenceCounter<Self::Action<E>>,
                mapper: ReferenceCounter<FailureMapper<E, F>>,
            ) -> ReferenceCounter<Self::Action<F>> {
                ReferenceCounter::new(move |$($argument: &$parameter),+| -> Result<(), F> {
                    primary($($argument),+).map_err(&*mapper)
                })
            }
        }

        impl<$($parameter: 'static),+> Operation<($($parameter,)+)> {
            #[doc = concat!("Creates an infallible operation of ", $count_word, " from a closure.")]
            ///
            /// The closure receives each argument by reference.
            #[must_use]
            pub fn $constructor<Function>(action: Function) -> Self
            where
                Function: Fn($(&$parameter),+) + Shareable + 'static,
            {
                let shared: ReferenceCounter<<($($parameter,)+) as Arity>::Action<Infallible>> =
                    ReferenceCounter::new(move |$($argument: &$parameter),+| -> Result<(), Infallible> {
                        action($($argument),+);
                        Ok(())
                    });
                Self::from_action(shared)
            }
        }

        impl<$($parameter: 'static),+, E: 'static> Operation<($($parameter,)+), E> {
            #[doc = concat!("Creates a fallible operation of ", $count_word, " from a closure.")]
            ///
            /// The closure receives each argument by reference and reports
            /// failure by returning `Err`.
            #[must_use]
            pub fn $fallible_constructor<Function>(action: Function) -> Self
            where
                Function: Fn($(&$parameter),+) -> Result<(), E> + Shareable + 'static,
            {
                let shared: ReferenceCounter<<($($parameter,)+) as Arity>::Action<E>> =
                    ReferenceCounter::new(action);
                Self::from_action(shared)
            }

            /// Runs the operation against the given arguments.
            ///
            /// # Errors
            ///
            /// Returns the failure of the first step that fails. An operation
            /// with error type `Infallible` never returns `Err`.
            pub fn invoke(&self, $($argument: &$parameter),+) -> Result<(), E> {
                (self.action)($($argument),+)
            }
        }
    };
}

impl_arity!(1, "one argument", unary, unary_fallible, first: A);
impl_arity!(2, "two arguments", binary, binary_fallible, first: A, second: B);
impl_arity!(3, "three arguments", ternary, ternary_fallible, first: A, second: B, third: C);
impl_arity!(
    4,
    "four arguments",
    quaternary,
    quaternary_fallible,
    first: A,
    second: B,
    third: C,
    fourth: D
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use smallvec::smallvec;
    use std::cell::RefCell;

    thread_local! {
        static TRACE: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    fn record(entry: String) {
        TRACE.with(|trace| trace.borrow_mut().push(entry));
    }

    fn take_trace() -> Vec<String> {
        TRACE.with(|trace| trace.take())
    }

    #[rstest]
    fn arity_counts_match_tuple_lengths() {
        assert_eq!(<(u8,) as Arity>::COUNT, 1);
        assert_eq!(<(u8, u16) as Arity>::COUNT, 2);
        assert_eq!(<(u8, u16, u32) as Arity>::COUNT, 3);
        assert_eq!(<(u8, u16, u32, u64) as Arity>::COUNT, 4);
    }

    #[rstest]
    fn sequence_passes_all_arguments_to_each_step() {
        let _ = take_trace();
        let first: ReferenceCounter<<(i32, char, bool) as Arity>::Action<()>> =
            ReferenceCounter::new(|number: &i32, letter: &char, flag: &bool| {
                record(format!("first {number} {letter} {flag}"));
                Ok(())
            });
        let second: ReferenceCounter<<(i32, char, bool) as Arity>::Action<()>> =
            ReferenceCounter::new(|number: &i32, letter: &char, flag: &bool| {
                record(format!("second {number} {letter} {flag}"));
                Ok(())
            });

        let sequenced = <(i32, char, bool)>::sequence(smallvec![first, second]);

        assert_eq!(sequenced(&7, &'q', &true), Ok(()));
        assert_eq!(take_trace(), vec!["first 7 q true", "second 7 q true"]);
    }

    #[rstest]
    fn sequence_of_no_steps_succeeds() {
        let sequenced = <(i32,)>::sequence::<String>(SmallVec::new());
        assert_eq!(sequenced(&1), Ok(()));
    }

    #[rstest]
    fn noop_ignores_arguments() {
        let noop = <(String, String, String, String)>::noop::<()>();
        let text = String::from("unused");
        assert_eq!(noop(&text, &text, &text, &text), Ok(()));
    }

    #[rstest]
    fn handle_receives_failure_value() {
        let _ = take_trace();
        let failing: ReferenceCounter<<(u8, u8) as Arity>::Action<u16>> =
            ReferenceCounter::new(|left: &u8, right: &u8| {
                Err(u16::from(*left) * u16::from(*right))
            });
        let handler: ReferenceCounter<FailureHandler<u16>> =
            ReferenceCounter::new(|failure: u16| record(format!("handled {failure}")));

        let handled = <(u8, u8)>::handle(failing, handler);

        assert_eq!(handled(&3, &5), Ok(()));
        assert_eq!(take_trace(), vec!["handled 15"]);
    }

    #[rstest]
    fn map_failure_keeps_success() {
        let succeeding: ReferenceCounter<<(u8,) as Arity>::Action<u8>> =
            ReferenceCounter::new(|_: &u8| Ok(()));
        let mapper: ReferenceCounter<FailureMapper<u8, String>> =
            ReferenceCounter::new(|failure: u8| failure.to_string());

        let mapped = <(u8,)>::map_failure(succeeding, mapper);

        assert_eq!(mapped(&0), Ok(()));
    }
}
