//! Grammar-definition errors
//!
//! Parse failures are ordinary [`ParseResult`](crate::result::ParseResult) values and never show up
//! here. These errors describe grammars that were built wrong: a rule looked up before it was
//! registered, an invalid regular expression, a cardinality check on data that is not a list.

use thiserror::Error;

/// Errors raised while building or resolving a grammar
#[derive(Error, Debug)]
pub enum GrammarError {
    /// An eager container was asked for a rule it does not hold
    #[error("Missing the parser `{name}`")]
    MissingParser { name: String },

    /// A lazy proxy was evaluated after its rule was removed, or before it was ever registered
    #[error("Missing the lazy parser `{name}` for input `{input}`")]
    MissingLazyParser { name: String, input: String },

    /// The expression handed to a pattern matcher does not compile
    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Pattern modifiers are single letters; this one is not supported
    #[error("Unknown pattern modifier `{0}`")]
    UnknownModifier(char),

    /// A list-only operation received a scalar
    #[error("`{operation}` expects a list result, found {found}")]
    NotASequence {
        operation: &'static str,
        found: String,
    },
}

/// Result alias for grammar construction and lookup
pub type GrammarResult<T> = std::result::Result<T, GrammarError>;
