//! Regular-expression matcher
//!
//! The expression is compiled once, wrapped as `^(?flags:expression)` so that it can only match
//! at the start of the input whatever the modifiers say about line anchors. What the match
//! yields depends on the capturing groups in the expression:
//!
//!     no group          the whole match
//!     one group         that group's text
//!     several groups    the list of group texts, "" for groups that did not participate
//!
//! The remainder after the whole match is left unparsed.

use crate::error::{GrammarError, GrammarResult};
use crate::parser::Parse;
use crate::result::ParseResult;
use crate::value::Value;
use regex::{Captures, Regex};

/// Matches a regular expression anchored at the start of the input
#[derive(Debug, Clone)]
pub struct Pattern {
    expression: String,
    regex: Regex,
}

impl Pattern {
    /// Compile `expression` with the given modifiers.
    ///
    /// Supported modifiers: `i` (case insensitive), `m` (multi-line), `s` (dot matches newline),
    /// `x` (verbose), `U` (swap greediness) and `u`, which is accepted for compatibility since
    /// matching is always Unicode-aware.
    pub fn new(expression: &str, modifiers: &str) -> GrammarResult<Self> {
        let flags = flags(modifiers)?;
        let anchored = if flags.is_empty() {
            format!("^(?:{})", expression)
        } else if flags.contains('x') {
            // A trailing comment would otherwise swallow the closing parenthesis.
            format!("^(?{}:{}\n)", flags, expression)
        } else {
            format!("^(?{}:{})", flags, expression)
        };
        let regex = Regex::new(&anchored).map_err(|source| GrammarError::InvalidPattern {
            pattern: expression.to_string(),
            source,
        })?;
        Ok(Self {
            expression: expression.to_string(),
            regex,
        })
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    fn data(&self, captures: &Captures<'_>) -> Value {
        let group = |i: usize| captures.get(i).map_or("", |m| m.as_str());
        match self.regex.captures_len() {
            1 => Value::from(group(0)),
            2 => Value::from(group(1)),
            n => Value::list((1..n).map(group)),
        }
    }
}

impl Parse for Pattern {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        match self.regex.captures(input) {
            Some(captures) => {
                let end = captures.get(0).map_or(0, |m| m.end());
                ParseResult::success(self.data(&captures), &input[end..])
            }
            None => ParseResult::failure(input),
        }
    }
}

fn flags(modifiers: &str) -> GrammarResult<String> {
    let mut flags = String::new();
    for modifier in modifiers.chars() {
        match modifier {
            'i' | 'm' | 's' | 'x' | 'U' => {
                if !flags.contains(modifier) {
                    flags.push(modifier);
                }
            }
            'u' => {}
            other => return Err(GrammarError::UnknownModifier(other)),
        }
    }
    Ok(flags)
}
