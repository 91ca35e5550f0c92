//! Results produced by parsers
//!
//! Every parser returns a [`ParseResult`]. There are three outcomes:
//!
//!     Ok      parsed, and the data should be used by enclosing combinators
//!     Skip    parsed, but the data is excluded from any enclosing aggregate
//!     Error   refused; `unparsed` points at the offending input
//!
//! Combinators only ever rely on the four accessors ([`data`](ParseResult::data),
//! [`unparsed`](ParseResult::unparsed), [`ok`](ParseResult::ok), [`used`](ParseResult::used)),
//! never on the variant itself.
//!
//! The `'a` lifetime ties `unparsed` to the input handed to the parser, so a result can only
//! ever point at a suffix of that input.

use crate::value::Value;
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

static NULL: Value = Value::Null;

/// Outcome of applying a parser to some input
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult<'a> {
    Ok { data: Value, unparsed: &'a str },
    Skip { unparsed: &'a str },
    Error { unparsed: &'a str },
}

impl<'a> ParseResult<'a> {
    /// A usable success
    pub fn success(data: impl Into<Value>, unparsed: &'a str) -> Self {
        ParseResult::Ok {
            data: data.into(),
            unparsed,
        }
    }

    /// A success that enclosing combinators leave out of their data
    pub fn skip(unparsed: &'a str) -> Self {
        ParseResult::Skip { unparsed }
    }

    /// A failure located at `unparsed`
    pub fn failure(unparsed: &'a str) -> Self {
        ParseResult::Error { unparsed }
    }

    /// The parsed data.
    ///
    /// Skip results carry null, and failures carry a message describing the offending symbol,
    /// e.g. `unexpected a` or `unexpected end`.
    pub fn data(&self) -> Cow<'_, Value> {
        match self {
            ParseResult::Ok { data, .. } => Cow::Borrowed(data),
            ParseResult::Skip { .. } => Cow::Borrowed(&NULL),
            ParseResult::Error { unparsed } => Cow::Owned(Value::Text(unexpected(unparsed))),
        }
    }

    /// Consume the result, keeping only its data
    pub fn into_data(self) -> Value {
        match self {
            ParseResult::Ok { data, .. } => data,
            ParseResult::Skip { .. } => Value::Null,
            ParseResult::Error { unparsed } => Value::Text(unexpected(unparsed)),
        }
    }

    /// What is left of the input
    pub fn unparsed(&self) -> &'a str {
        match self {
            ParseResult::Ok { unparsed, .. }
            | ParseResult::Skip { unparsed }
            | ParseResult::Error { unparsed } => unparsed,
        }
    }

    /// Whether parsing succeeded
    pub fn ok(&self) -> bool {
        !matches!(self, ParseResult::Error { .. })
    }

    /// Whether enclosing combinators should collect the data
    pub fn used(&self) -> bool {
        matches!(self, ParseResult::Ok { .. })
    }
}

/// Describe the first symbol of the remaining input
fn unexpected(unparsed: &str) -> String {
    match unparsed.graphemes(true).next() {
        Some(symbol) => format!("unexpected {}", symbol),
        None => "unexpected end".to_string(),
    }
}
