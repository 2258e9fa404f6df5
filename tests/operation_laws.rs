#![cfg(feature = "operation")]
//! Property-based tests for operation composition laws.
//!
//! ## Sequencing Laws
//! - **Associativity**: `f.then(g).then(h) ≡ f.then(g.then(h))`
//! - **Left Identity**: `noop().then(f) ≡ f`
//! - **Right Identity**: `f.then(noop()) ≡ f`
//! - **Mirror**: `f.before(g) ≡ g.then(f)`
//!
//! ## Batch Laws
//! - **Fold**: `of([f1, ..., fn]) ≡ f1.then(f2)...then(fn)`
//! - **Order**: `of` runs every operation exactly once, in order
//!
//! ## Failure Laws
//! - **Short Circuit**: the first failing step is the last one run
//! - **Ignore**: `ignore_failure` runs the same steps and never fails
//!
//! `≡` means: same journal entries, same outcome.

use std::sync::{Arc, Mutex};

use proptest::prelude::*;
use tandem::operation::Operation;

type Journal = Arc<Mutex<Vec<(usize, i32)>>>;

/// An operation that records `(id, argument)` and fails when `fails` is set.
fn step(journal: &Journal, id: usize, fails: bool) -> Operation<(i32,), usize> {
    let journal = Arc::clone(journal);
    Operation::unary_fallible(move |argument: &i32| {
        journal.lock().unwrap().push((id, *argument));
        if fails { Err(id) } else { Ok(()) }
    })
}

/// Runs an operation against `argument` with a fresh journal.
fn observe<Build>(argument: i32, build: Build) -> (Result<(), usize>, Vec<(usize, i32)>)
where
    Build: FnOnce(&Journal) -> Operation<(i32,), usize>,
{
    let journal = Journal::default();
    let operation = build(&journal);
    let outcome = operation.invoke(&argument);
    let entries = journal.lock().unwrap().clone();
    (outcome, entries)
}

proptest! {
    #[test]
    fn prop_then_associativity(argument in any::<i32>(), failures in prop::array::uniform3(any::<bool>())) {
        let left = observe(argument, |journal| {
            step(journal, 0, failures[0])
                .then(step(journal, 1, failures[1]))
                .then(step(journal, 2, failures[2]))
        });
        let right = observe(argument, |journal| {
            step(journal, 0, failures[0])
                .then(step(journal, 1, failures[1]).then(step(journal, 2, failures[2])))
        });

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_then_identity(argument in any::<i32>(), fails in any::<bool>()) {
        let plain = observe(argument, |journal| step(journal, 0, fails));
        let left = observe(argument, |journal| Operation::noop().then(step(journal, 0, fails)));
        let right = observe(argument, |journal| step(journal, 0, fails).then(Operation::noop()));

        prop_assert_eq!(&left, &plain);
        prop_assert_eq!(&right, &plain);
    }

    #[test]
    fn prop_before_mirrors_then(argument in any::<i32>(), failures in prop::array::uniform2(any::<bool>())) {
        let before = observe(argument, |journal| {
            step(journal, 0, failures[0]).before(step(journal, 1, failures[1]))
        });
        let then = observe(argument, |journal| {
            step(journal, 1, failures[1]).then(step(journal, 0, failures[0]))
        });

        prop_assert_eq!(before, then);
    }

    #[test]
    fn prop_of_equals_fold_of_then(argument in any::<i32>(), failures in prop::collection::vec(any::<bool>(), 0..8)) {
        let batch = observe(argument, |journal| {
            Operation::of(failures.iter().enumerate().map(|(id, fails)| step(journal, id, *fails)))
        });
        let folded = observe(argument, |journal| {
            failures
                .iter()
                .enumerate()
                .map(|(id, fails)| step(journal, id, *fails))
                .fold(Operation::noop(), Operation::then)
        });

        prop_assert_eq!(batch, folded);
    }

    #[test]
    fn prop_of_runs_each_once_in_order(argument in any::<i32>(), count in 0_usize..16) {
        let (outcome, entries) = observe(argument, |journal| {
            Operation::of((0..count).map(|id| step(journal, id, false)))
        });

        prop_assert_eq!(outcome, Ok(()));
        prop_assert_eq!(entries, (0..count).map(|id| (id, argument)).collect::<Vec<_>>());
    }

    #[test]
    fn prop_first_failure_stops_the_sequence(argument in any::<i32>(), failures in prop::collection::vec(any::<bool>(), 1..8)) {
        let (outcome, entries) = observe(argument, |journal| {
            Operation::of(failures.iter().enumerate().map(|(id, fails)| step(journal, id, *fails)))
        });

        match failures.iter().position(|fails| *fails) {
            Some(first) => {
                prop_assert_eq!(outcome, Err(first));
                prop_assert_eq!(entries.len(), first + 1);
            }
            None => {
                prop_assert_eq!(outcome, Ok(()));
                prop_assert_eq!(entries.len(), failures.len());
            }
        }
    }

    #[test]
    fn prop_ignore_failure_runs_same_steps(argument in any::<i32>(), failures in prop::collection::vec(any::<bool>(), 0..8)) {
        let (_, expected) = observe(argument, |journal| {
            Operation::of(failures.iter().enumerate().map(|(id, fails)| step(journal, id, *fails)))
        });
        let (outcome, entries) = observe(argument, |journal| {
            Operation::of(failures.iter().enumerate().map(|(id, fails)| step(journal, id, *fails)))
                .ignore_failure()
                .into_fallible()
        });

        prop_assert_eq!(outcome, Ok(()));
        prop_assert_eq!(entries, expected);
    }
}
