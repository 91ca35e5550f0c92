use crate::parser::{Parse, Parser};
use crate::result::ParseResult;

/// Requires a successful result, and then ignores it.
///
/// Used for delimiters and keywords that must be present but carry no meaning of their own.
#[derive(Debug, Clone)]
pub struct Ignore {
    ignored: Parser,
}

impl Ignore {
    pub fn the(ignored: impl Into<Parser>) -> Parser {
        Parser::new(Ignore {
            ignored: ignored.into(),
        })
    }
}

impl Parse for Ignore {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let result = self.ignored.parse(input);
        if result.ok() {
            return ParseResult::skip(result.unparsed());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_result;

    #[test]
    fn skips_successful_results() {
        assert_result(&Ignore::the("foo").parse("foobar"))
            .is_skip()
            .unparsed("bar");
    }

    #[test]
    fn passes_failures_through() {
        assert_result(&Ignore::the("foo").parse("fob"))
            .is_error()
            .unparsed("b");
    }
}
