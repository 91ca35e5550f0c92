use crate::parser::{Parse, Parser};
use crate::result::ParseResult;

/// Refuses input that another parser matches, before trying the actual parser
#[derive(Debug, Clone)]
pub struct Except {
    refuse: Parser,
    parser: Parser,
}

impl Except {
    pub fn refusing(refusal: impl Into<Parser>, parser: impl Into<Parser>) -> Parser {
        Parser::new(Except {
            refuse: refusal.into(),
            parser: parser.into(),
        })
    }
}

impl Parse for Except {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        if self.refuse.parse(input).ok() {
            return ParseResult::failure(input);
        }
        self.parser.parse(input)
    }
}
