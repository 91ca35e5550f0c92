use crate::parser::{Parse, Parser};
use crate::result::ParseResult;

/// Returns the first alternative that matches.
///
/// Every alternative sees the same input. When none match, the failure that got furthest (the
/// one with the least input left) is returned; ties go to the earlier alternative.
#[derive(Debug, Clone)]
pub struct Either {
    options: Vec<Parser>,
}

impl Either {
    pub fn of<I, P>(options: I) -> Parser
    where
        I: IntoIterator<Item = P>,
        P: Into<Parser>,
    {
        Parser::new(Either {
            options: options.into_iter().map(Into::into).collect(),
        })
    }

    /// Add `other` as a further alternative, flattening `parser` when it already is a choice
    pub fn extend(parser: Parser, other: Parser) -> Parser {
        let mut options = match parser.alternatives() {
            Some(options) => options.to_vec(),
            None => vec![parser],
        };
        options.push(other);
        Parser::new(Either { options })
    }
}

impl Parse for Either {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let mut furthest: Option<ParseResult<'a>> = None;
        for parser in &self.options {
            let result = parser.parse(input);
            if result.ok() {
                return result;
            }
            let further = furthest
                .as_ref()
                .map_or(true, |error| result.unparsed().len() < error.unparsed().len());
            if further {
                furthest = Some(result);
            }
        }
        furthest.unwrap_or_else(|| ParseResult::failure(input))
    }

    fn alternatives(&self) -> Option<&[Parser]> {
        Some(&self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::Sequence;
    use crate::testing::assert_result;

    #[test]
    fn returns_the_first_match() {
        assert_result(&Either::of(["foo", "bar"]).parse("bar1"))
            .is_ok()
            .text("bar")
            .unparsed("1");
    }

    #[test]
    fn earlier_alternatives_win() {
        assert_result(&Either::of(["a", "ab"]).parse("abc"))
            .is_ok()
            .text("a")
            .unparsed("bc");
    }

    #[test]
    fn reports_the_failure_that_got_furthest() {
        let parser = Either::of([Sequence::of(["a", "c"]), Sequence::of(["a", "b", "c", "d"])]);
        assert_result(&parser.parse("abcx"))
            .is_error()
            .message("unexpected x")
            .unparsed("x");
    }

    #[test]
    fn ties_keep_the_first_failure() {
        let parser = Either::of(["ax", "ay"]);
        let result = parser.parse("az");
        assert_result(&result).is_error().unparsed("z");
    }

    #[test]
    fn no_alternatives_fail_at_the_input() {
        let parser = Either::of(Vec::<Parser>::new());
        assert_result(&parser.parse("abc")).is_error().unparsed("abc");
    }

    #[test]
    fn or_appends_without_nesting() {
        let parser = Either::of(["a", "b"]).or("c");
        assert_eq!(parser.alternatives().map(<[Parser]>::len), Some(3));
        assert_result(&parser.parse("c")).is_ok().text("c");
    }
}
