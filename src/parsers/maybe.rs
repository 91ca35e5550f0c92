use crate::parser::{Parse, Parser};
use crate::result::ParseResult;

/// Returns the result if successful, or a skip result that consumes nothing otherwise
#[derive(Debug, Clone)]
pub struct Maybe {
    maybe: Parser,
}

impl Maybe {
    pub fn that(parser: impl Into<Parser>) -> Parser {
        Parser::new(Maybe {
            maybe: parser.into(),
        })
    }
}

impl Parse for Maybe {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let result = self.maybe.parse(input);
        if result.ok() {
            return result;
        }
        ParseResult::skip(input)
    }
}
