use crate::parser::{Parse, Parser};
use crate::result::ParseResult;

/// Consumes whatever the parser matched, yielding a skip result whether it succeeded or not
#[derive(Debug, Clone)]
pub struct Optional {
    parser: Parser,
}

impl Optional {
    pub fn ignored(parser: impl Into<Parser>) -> Parser {
        Parser::new(Optional {
            parser: parser.into(),
        })
    }
}

impl Parse for Optional {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        ParseResult::skip(self.parser.parse(input).unparsed())
    }
}
