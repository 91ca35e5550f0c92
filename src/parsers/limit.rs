//! Left-recursion guard
//!
//! A rule that calls itself at the same position without consuming anything would recurse until
//! the stack overflows. [`Limit`] remembers which inputs it is currently parsing and refuses to
//! start a second evaluation of the same input while the first is still running.
//!
//! Inputs are identified by where they start in memory and how long they are: every input a
//! parser sees during one top-level parse is a suffix of the same string, so equal start and
//! length means equal position. The calling thread is part of the key, so parses running in
//! parallel on a shared grammar never block each other.

use crate::parser::{Parse, Parser};
use crate::result::ParseResult;
use log::debug;
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};
use std::thread::{self, ThreadId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Position {
    thread: ThreadId,
    start: usize,
    len: usize,
}

impl Position {
    fn of(input: &str) -> Self {
        Self {
            thread: thread::current().id(),
            start: input.as_ptr() as usize,
            len: input.len(),
        }
    }
}

/// Refuses re-entrant evaluation of the wrapped parser at the same input position
#[derive(Debug)]
pub struct Limit {
    parser: Parser,
    in_flight: Mutex<HashSet<Position>>,
}

/// Marks a position as in flight until dropped, including during unwinding
struct InFlight<'g> {
    positions: &'g Mutex<HashSet<Position>>,
    position: Position,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.positions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.position);
    }
}

impl Limit {
    pub fn new(parser: impl Into<Parser>) -> Self {
        Self {
            parser: parser.into(),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    fn enter(&self, position: Position) -> Option<InFlight<'_>> {
        let inserted = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(position);
        // A refused entry must not build a guard: dropping it would release the caller's mark.
        inserted.then(|| InFlight {
            positions: &self.in_flight,
            position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::{Lazy, LazyContainer};
    use crate::testing::assert_result;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn passes_through_non_recursive_parsers() {
        let limit = Limit::new("a");
        assert_result(&limit.parse("ab")).is_ok().text("a").unparsed("b");
        assert_eq!(limit.in_flight(), 0);
    }

    #[test]
    fn unwinding_releases_the_mark() {
        let limit = Limit::new(Lazy::container().proxy("missing"));
        let input = "x";

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| limit.parse(input).ok()));
        assert!(outcome.is_err());
        assert_eq!(limit.in_flight(), 0);
        assert!(limit.enter(Position::of(input)).is_some());
    }

    #[test]
    fn same_text_at_a_different_position_is_not_recursion() {
        let limit = Limit::new("a");
        let input = "aa";
        let _guard = limit.enter(Position::of(input)).unwrap();
        assert_result(&limit.parse(&input[1..])).is_ok();
        assert_result(&limit.parse(input)).is_error().unparsed("aa");
    }
}
