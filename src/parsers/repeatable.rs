use crate::config::RepeatConfig;
use crate::parser::{Parse, Parser};
use crate::result::ParseResult;
use crate::value::Value;

/// Parses zero or more occurrences, yielding the list of their data.
///
/// Always succeeds. The repetition ends at the first failing attempt and leaves the input as it
/// was before that attempt. Skip results consume input without adding to the list.
///
/// With [`RepeatConfig::stop_without_progress`] set (the default), an attempt that succeeds
/// without consuming anything also ends the repetition, and its data is not collected. Without
/// it, a child that can match the empty string repeats forever.
#[derive(Debug, Clone)]
pub struct Repeatable {
    parser: Parser,
    config: RepeatConfig,
}

impl Repeatable {
    pub fn parser(parser: impl Into<Parser>) -> Parser {
        Self::with_config(parser, &RepeatConfig::default())
    }

    pub fn with_config(parser: impl Into<Parser>, config: &RepeatConfig) -> Parser {
        Parser::new(Repeatable {
            parser: parser.into(),
            config: *config,
        })
    }
}

impl Parse for Repeatable {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let mut results = Vec::new();
        let mut unparsed = input;
        loop {
            let result = self.parser.parse(unparsed);
            if !result.ok() {
                return ParseResult::success(Value::List(results), unparsed);
            }
            if self.config.stop_without_progress && result.unparsed().len() == unparsed.len() {
                return ParseResult::success(Value::List(results), unparsed);
            }
            unparsed = result.unparsed();
            if result.used() {
                results.push(result.into_data());
            }
        }
    }
}
