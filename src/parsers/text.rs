use crate::parser::{Parse, Parser};
use crate::result::ParseResult;

/// Matches a literal.
///
/// On failure the result points at the first character where the input stops agreeing with the
/// literal, so choices can report whichever alternative got furthest.
#[derive(Debug, Clone)]
pub struct Text {
    text: String,
}

impl Text {
    pub fn is(text: impl Into<String>) -> Parser {
        Parser::new(Text { text: text.into() })
    }

    /// Byte offset of the first character where `input` differs from the literal
    fn divergence(&self, input: &str) -> usize {
        let mut expected = self.text.chars();
        for (offset, actual) in input.char_indices() {
            match expected.next() {
                Some(c) if c == actual => continue,
                _ => return offset,
            }
        }
        input.len()
    }
}

impl Parse for Text {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        match input.strip_prefix(self.text.as_str()) {
            Some(rest) => ParseResult::success(self.text.as_str(), rest),
            None => ParseResult::failure(&input[self.divergence(input)..]),
        }
    }
}
