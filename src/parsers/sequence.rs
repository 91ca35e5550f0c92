use crate::parser::{Parse, Parser};
use crate::result::ParseResult;
use crate::value::Value;

/// Runs parsers one after the other.
///
/// The first failure is returned as-is. On success the data is the list of every step's data,
/// leaving out steps whose results are not used (see [`Ignore`](super::Ignore)).
#[derive(Debug, Clone)]
pub struct Sequence {
    parsers: Vec<Parser>,
}

impl Sequence {
    pub fn of<I, P>(parsers: I) -> Parser
    where
        I: IntoIterator<Item = P>,
        P: Into<Parser>,
    {
        Parser::new(Sequence {
            parsers: parsers.into_iter().map(Into::into).collect(),
        })
    }

    /// Append `next` to `parser`, reusing its steps when it already is a sequence
    pub fn extend(parser: Parser, next: Parser) -> Parser {
        let mut parsers = match parser.steps() {
            Some(steps) => steps.to_vec(),
            None => vec![parser],
        };
        parsers.push(next);
        Parser::new(Sequence { parsers })
    }
}

impl Parse for Sequence {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let mut sequence = Vec::new();
        let mut unparsed = input;
        for parser in &self.parsers {
            let result = parser.parse(unparsed);
            if !result.ok() {
                return result;
            }
            unparsed = result.unparsed();
            if result.used() {
                sequence.push(result.into_data());
            }
        }
        ParseResult::success(Value::List(sequence), unparsed)
    }

    fn steps(&self) -> Option<&[Parser]> {
        Some(&self.parsers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_result;

    #[test]
    fn parses_steps_in_order() {
        let result = Sequence::of(["a", "b", "c"]).parse("abcdef");
        assert_result(&result).is_ok().unparsed("def");
        assert_eq!(result.into_data(), Value::list(["a", "b", "c"]));
    }

    #[test]
    fn returns_the_first_failure() {
        assert_result(&Sequence::of(["a", "bc", "d"]).parse("abxd"))
            .is_error()
            .message("unexpected x")
            .unparsed("xd");
    }

    #[test]
    fn leaves_out_ignored_steps() {
        let parser = Sequence::of([Parser::from("("), Parser::from("a").ignore(), ")".into()]);
        let result = parser.parse("(a)");
        assert_result(&result).is_ok().unparsed("");
        assert_eq!(result.into_data(), Value::list(["(", ")"]));
    }

    #[test]
    fn empty_sequence_succeeds_without_consuming() {
        let result = Sequence::of(Vec::<Parser>::new()).parse("abc");
        assert_result(&result).is_ok().unparsed("abc");
        assert_eq!(result.into_data(), Value::List(vec![]));
    }

    #[test]
    fn macro_accepts_mixed_parsers_and_literals() {
        let digit = crate::parsers::pattern("\\d");
        let parser = crate::sequence!["x", digit, "y"];
        assert_eq!(parser.parse("x4y").into_data(), Value::list(["x", "4", "y"]));
    }
}
