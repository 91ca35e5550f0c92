//! Testing utilities for parse results
//!
//!     Grammar tests mostly ask the same three questions of a result: did it succeed, what data
//!     did it produce, and how much input is left. [`assert_result`] answers them fluently, with
//!     failure messages that show the whole result:
//!
//!     ```rust,ignore
//!     use combinate::testing::assert_result;
//!
//!     let result = text("foo").parse("foobar");
//!     assert_result(&result).is_ok().text("foo").unparsed("bar");
//!
//!     let result = text("foo").parse("fox");
//!     assert_result(&result).is_error().message("unexpected x").unparsed("x");
//!     ```
//!
//!     Structured data is compared with [`ResultAssertion::data`], which accepts anything that
//!     converts into a [`Value`].

mod matchers;

pub use matchers::TextMatch;

use crate::result::ParseResult;
use crate::value::Value;

/// Create an assertion builder for a result
pub fn assert_result<'r, 'a>(result: &'r ParseResult<'a>) -> ResultAssertion<'r, 'a> {
    ResultAssertion {
        context: format!("{:?}", result),
        result,
    }
}

pub struct ResultAssertion<'r, 'a> {
    result: &'r ParseResult<'a>,
    context: String,
}

impl<'r, 'a> ResultAssertion<'r, 'a> {
    /// Assert a usable success
    pub fn is_ok(self) -> Self {
        assert!(
            self.result.ok() && self.result.used(),
            "{}: Expected an Ok result",
            self.context
        );
        self
    }

    /// Assert a success whose data is not used
    pub fn is_skip(self) -> Self {
        assert!(
            self.result.ok() && !self.result.used(),
            "{}: Expected a Skip result",
            self.context
        );
        self
    }

    /// Assert a failure
    pub fn is_error(self) -> Self {
        assert!(!self.result.ok(), "{}: Expected an Error result", self.context);
        self
    }

    /// Assert the data is exactly this text
    pub fn text(self, expected: &str) -> Self {
        self.text_matches(TextMatch::Exact(expected.to_string()))
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        self.text_matches(TextMatch::StartsWith(prefix.to_string()))
    }

    pub fn text_contains(self, substring: &str) -> Self {
        self.text_matches(TextMatch::Contains(substring.to_string()))
    }

    /// Assert the failure message, e.g. `unexpected x`
    pub fn message(self, expected: &str) -> Self {
        self.is_error_unchecked();
        self.text(expected)
    }

    /// Assert the data equals `expected`
    pub fn data(self, expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        assert_eq!(
            *self.result.data(),
            expected,
            "{}: Unexpected data",
            self.context
        );
        self
    }

    /// Assert what is left of the input
    pub fn unparsed(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(self.result.unparsed(), &self.context);
        self
    }

    pub fn unparsed_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(self.result.unparsed(), &self.context);
        self
    }

    fn text_matches(self, matcher: TextMatch) -> Self {
        {
            let data = self.result.data();
            match data.as_str() {
                Some(actual) => matcher.assert(actual, &self.context),
                None => panic!(
                    "{}: Expected text data, found {}",
                    self.context,
                    data.kind()
                ),
            }
        }
        self
    }

    fn is_error_unchecked(&self) {
        assert!(
            !self.result.ok(),
            "{}: Expected an Error result carrying a message",
            self.context
        );
    }
}
