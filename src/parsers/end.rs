use crate::parser::{Parse, Parser};
use crate::result::ParseResult;

/// Fails when input is left over after parsing, pointing at the leftover
#[derive(Debug, Clone)]
pub struct End {
    parser: Parser,
}

impl End {
    pub fn with(parser: impl Into<Parser>) -> Parser {
        Parser::new(End {
            parser: parser.into(),
        })
    }
}

impl Parse for End {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let result = self.parser.parse(input);
        if result.unparsed().is_empty() {
            return result;
        }
        ParseResult::failure(result.unparsed())
    }
}
