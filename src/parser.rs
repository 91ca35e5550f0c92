//! The parsing unit
//!
//! [`Parse`] is the single capability every matcher and combinator implements. [`Parser`] is the
//! shared handle grammars are built from: cloning it is cheap, and the same sub-rule can sit in
//! any number of parent combinators.
//!
//! The methods on [`Parser`] are shortcuts for the combinator constructors in
//! [`parsers`](crate::parsers) and [`helpers`](crate::helpers). They only build new parsers; no
//! input is consumed until [`Parser::parse`] is called.

use crate::helpers::{AtLeast, AtMost, Between, First, Item, Join, NonEmpty, Split};
use crate::parsers::{
    AllOrNothing, Either, End, Except, FullyMap, Ignore, Map, Maybe, Optional, Repeatable,
    Sequence, Text,
};
use crate::result::ParseResult;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Something that turns input into a [`ParseResult`]
pub trait Parse: fmt::Debug + Send + Sync {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a>;

    /// The alternatives of a choice, so that `or` extends it instead of nesting
    fn alternatives(&self) -> Option<&[Parser]> {
        None
    }

    /// The steps of a sequence, so that `and_then` extends it instead of nesting
    fn steps(&self) -> Option<&[Parser]> {
        None
    }
}

/// Shared handle to a parser
#[derive(Clone)]
pub struct Parser(Arc<dyn Parse>);

impl Parser {
    pub fn new(parser: impl Parse + 'static) -> Self {
        Parser(Arc::new(parser))
    }

    pub fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        self.0.parse(input)
    }

    pub(crate) fn alternatives(&self) -> Option<&[Parser]> {
        self.0.alternatives()
    }

    pub(crate) fn steps(&self) -> Option<&[Parser]> {
        self.0.steps()
    }

    /// Transform the data of used results
    pub fn map<F>(self, map: F) -> Parser
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Map::the(self, map)
    }

    /// Transform the whole result, successful or not
    pub fn full_map<F>(self, map: F) -> Parser
    where
        F: for<'a> Fn(ParseResult<'a>) -> ParseResult<'a> + Send + Sync + 'static,
    {
        FullyMap::the(self, map)
    }

    /// Refuse empty data
    pub fn non_empty(self) -> Parser {
        NonEmpty::result(self)
    }

    /// Skip instead of failing
    pub fn maybe(self) -> Parser {
        Maybe::that(self)
    }

    /// Require a match, but leave its data out
    pub fn ignore(self) -> Parser {
        Ignore::the(self)
    }

    /// Consume a match if there is one, never contributing data or failure
    pub fn optional(self) -> Parser {
        Optional::ignored(self)
    }

    /// Fail at the start of the input rather than wherever the failure happened inside
    pub fn all_or_nothing(self) -> Parser {
        AllOrNothing::of(self)
    }

    /// Refuse input that `refusal` matches
    pub fn except(self, refusal: impl Into<Parser>) -> Parser {
        Except::refusing(refusal, self)
    }

    /// Concatenate list data into text, separated by `glue`
    pub fn join(self, glue: &str) -> Parser {
        Join::with(glue, self)
    }

    pub fn first(self) -> Parser {
        First::of(self)
    }

    pub fn item(self, n: usize) -> Parser {
        Item::number(n, self)
    }

    /// Match this parser between two delimiters, keeping only its own data
    pub fn between(self, from: impl Into<Parser>, to: impl Into<Parser>) -> Parser {
        Between::these(from, to, self)
    }

    /// Zero or more separators between matches of this parser
    pub fn split(self, separator: impl Into<Parser>) -> Parser {
        Split::optional(separator, self)
    }

    /// At least one separator between matches of this parser
    pub fn must_split(self, separator: impl Into<Parser>) -> Parser {
        Split::with(separator, self)
    }

    /// Fold `self (separator self)*` into `{separator: [left, right]}` trees
    pub fn keep_split<I, P>(self, separators: I) -> Parser
    where
        I: IntoIterator<Item = P>,
        P: Into<Parser>,
    {
        Split::keep(separators, self)
    }

    /// Fold `self (separator self)*` with a custom combining function
    pub fn keep_split_with<I, P, F>(self, separators: I, combine: F) -> Parser
    where
        I: IntoIterator<Item = P>,
        P: Into<Parser>,
        F: Fn(Value, Value, Value) -> Value + Send + Sync + 'static,
    {
        Split::keep_with(separators, self, combine)
    }

    /// Zero or more matches, as a list
    pub fn repeatable(self) -> Parser {
        Repeatable::parser(self)
    }

    /// Zero or more matches, concatenated into text
    pub fn repeatable_string(self) -> Parser {
        Join::the(Repeatable::parser(self))
    }

    /// Try this parser, then `other` on the same input
    pub fn or(self, other: impl Into<Parser>) -> Parser {
        Either::extend(self, other.into())
    }

    /// Follow this parser with `other`
    pub fn and_then(self, other: impl Into<Parser>) -> Parser {
        Sequence::extend(self, other.into())
    }

    pub fn at_least(self, n: usize) -> Parser {
        AtLeast::results(n, self)
    }

    pub fn at_most(self, n: usize) -> Parser {
        AtMost::results(n, self)
    }

    /// Refuse input that is not fully consumed
    pub fn end(self) -> Parser {
        End::with(self)
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl From<&str> for Parser {
    fn from(text: &str) -> Self {
        Text::is(text)
    }
}

impl From<String> for Parser {
    fn from(text: String) -> Self {
        Text::is(text)
    }
}

impl From<&String> for Parser {
    fn from(text: &String) -> Self {
        Text::is(text.as_str())
    }
}

impl From<&Parser> for Parser {
    fn from(parser: &Parser) -> Self {
        parser.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_promote_to_text_parsers() {
        let parser: Parser = "abc".into();
        assert!(format!("{:?}", parser).starts_with("Text"));
        assert_eq!(*parser.parse("abcd").data(), "abc");
    }

    #[test]
    fn or_extends_an_existing_choice() {
        let parser = Parser::from("a").or("b").or("c");
        assert_eq!(parser.alternatives().map(<[Parser]>::len), Some(3));
    }

    #[test]
    fn and_then_extends_an_existing_sequence() {
        let parser = Parser::from("a").and_then("b").and_then("c");
        assert_eq!(parser.steps().map(<[Parser]>::len), Some(3));
        let result = parser.parse("abcdef");
        assert_eq!(result.into_data(), Value::list(["a", "b", "c"]));
    }

    #[test]
    fn parsers_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Parser>();
    }
}
