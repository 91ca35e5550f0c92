use crate::parser::{Parse, Parser};
use crate::result::ParseResult;
use crate::value::Value;
use std::fmt;

type DataFn = dyn Fn(Value) -> Value + Send + Sync;
type ResultFn = dyn for<'a> Fn(ParseResult<'a>) -> ParseResult<'a> + Send + Sync;

/// Applies a function to the data of used results.
///
/// Failures and skipped results pass through untouched.
pub struct Map {
    parser: Parser,
    on_success: Box<DataFn>,
}

impl Map {
    pub fn the<F>(parser: impl Into<Parser>, on_success: F) -> Parser
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Parser::new(Map {
            parser: parser.into(),
            on_success: Box::new(on_success),
        })
    }
}

impl Parse for Map {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let result = self.parser.parse(input);
        if !result.used() {
            return result;
        }
        let unparsed = result.unparsed();
        ParseResult::success((self.on_success)(result.into_data()), unparsed)
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("parser", &self.parser).finish_non_exhaustive()
    }
}

/// Applies a function to the whole result, whether it succeeded or not.
///
/// This is the one place where a grammar can turn failures into successes (or the reverse).
pub struct FullyMap {
    parser: Parser,
    map: Box<ResultFn>,
}

impl FullyMap {
    pub fn the<F>(parser: impl Into<Parser>, map: F) -> Parser
    where
        F: for<'a> Fn(ParseResult<'a>) -> ParseResult<'a> + Send + Sync + 'static,
    {
        Parser::new(FullyMap {
            parser: parser.into(),
            map: Box::new(map),
        })
    }
}

impl Parse for FullyMap {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        (self.map)(self.parser.parse(input))
    }
}

impl fmt::Debug for FullyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FullyMap").field("parser", &self.parser).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::pattern;
    use crate::testing::assert_result;

    fn number() -> Parser {
        pattern("\\d+").map(|data| Value::Int(data.to_text().parse().unwrap_or_default()))
    }

    #[test]
    fn maps_successful_data() {
        let result = number().parse("42 apples");
        assert_result(&result).is_ok().unparsed(" apples");
        assert_eq!(result.into_data(), Value::Int(42));
    }

    #[test]
    fn leaves_failures_alone() {
        assert_result(&number().parse("apples"))
            .is_error()
            .message("unexpected a")
            .unparsed("apples");
    }

    #[test]
    fn leaves_skipped_results_alone() {
        let parser = Map::the(Parser::from("a").ignore(), |_| Value::from("mapped"));
        let result = parser.parse("ab");
        assert_result(&result).is_skip().unparsed("b");
    }

    #[test]
    fn full_map_can_recover_failures() {
        let parser = FullyMap::the("a", |result| {
            if result.ok() {
                result
            } else {
                ParseResult::success("default", result.unparsed())
            }
        });
        assert_result(&parser.parse("bc")).is_ok().text("default").unparsed("bc");
        assert_result(&parser.parse("ac")).is_ok().text("a").unparsed("c");
    }

    #[test]
    fn full_map_can_refuse_successes() {
        let parser = FullyMap::the("a", |result| ParseResult::failure(result.unparsed()));
        assert_result(&parser.parse("ab")).is_error().unparsed("b");
    }
}
