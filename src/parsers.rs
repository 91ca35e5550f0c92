//! Primitive matchers and structural combinators
//!
//! Primitives consume input:
//!
//!     any()          one symbol (grapheme cluster by default)
//!     text("ab")     a literal
//!     pattern("\d+") a regular expression anchored at the start of the input
//!
//! Combinators wrap other parsers. Anything that takes a parser also takes a literal, which is
//! turned into a [`Text`] matcher when the combinator is built.
//!
//! [`Lazily`] and [`Limit`] are the parsers handed out by the lazy containers in
//! [`containers`](crate::containers); they are not meant to be built by hand.

mod all_or_nothing;
mod any;
mod either;
mod end;
mod except;
mod ignore;
mod lazily;
mod limit;
mod map;
mod maybe;
mod optional;
mod pattern;
mod repeatable;
mod sequence;
mod text;

pub use all_or_nothing::AllOrNothing;
pub use any::Any;
pub use either::Either;
pub use end::End;
pub use except::Except;
pub use ignore::Ignore;
pub use lazily::Lazily;
pub use limit::Limit;
pub use map::{FullyMap, Map};
pub use maybe::Maybe;
pub use optional::Optional;
pub use pattern::Pattern;
pub use repeatable::Repeatable;
pub use sequence::Sequence;
pub use text::Text;

use crate::parser::Parser;

/// Match any single symbol
pub fn any() -> Parser {
    Any::symbol()
}

/// Match a literal
pub fn text(literal: impl Into<String>) -> Parser {
    Text::is(literal)
}

/// Match a regular expression at the start of the input.
///
/// # Panics
///
/// Panics when the expression does not compile. Use [`Pattern::new`] to handle that case.
pub fn pattern(expression: &str) -> Parser {
    pattern_with(expression, "")
}

/// Match a regular expression with modifiers such as `i` for case insensitivity.
///
/// # Panics
///
/// Panics when the expression does not compile or a modifier is unknown.
pub fn pattern_with(expression: &str, modifiers: &str) -> Parser {
    match Pattern::new(expression, modifiers) {
        Ok(pattern) => Parser::new(pattern),
        Err(err) => panic!("{}", err),
    }
}

/// Build a [`Sequence`] from a mix of parsers and literals
#[macro_export]
macro_rules! sequence {
    ($($parser:expr),* $(,)?) => {
        $crate::parsers::Sequence::of([$($crate::parser::Parser::from($parser)),*])
    };
}

/// Build an [`Either`] from a mix of parsers and literals
#[macro_export]
macro_rules! either {
    ($($parser:expr),* $(,)?) => {
        $crate::parsers::Either::of([$($crate::parser::Parser::from($parser)),*])
    };
}
