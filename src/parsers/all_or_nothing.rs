use crate::parser::{Parse, Parser};
use crate::result::ParseResult;

/// Matches the entire parser or nothing at all.
///
/// Successful results are untouched; failures are moved back to where this parser started, so a
/// choice sees the whole block as failing at its start rather than somewhere inside.
#[derive(Debug, Clone)]
pub struct AllOrNothing {
    parser: Parser,
}

impl AllOrNothing {
    pub fn of(parser: impl Into<Parser>) -> Parser {
        Parser::new(AllOrNothing {
            parser: parser.into(),
        })
    }
}

impl Parse for AllOrNothing {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let result = self.parser.parse(input);
        if result.ok() {
            return result;
        }
        ParseResult::failure(input)
    }
}
