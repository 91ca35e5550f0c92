use crate::config::{SymbolConfig, SymbolUnit};
use crate::parser::{Parse, Parser};
use crate::result::ParseResult;
use unicode_segmentation::UnicodeSegmentation;

/// Matches any single symbol.
///
/// A symbol is a user-perceived character by default, so combining marks and flag sequences are
/// consumed whole. Fails on empty input.
#[derive(Debug, Clone, Copy)]
pub struct Any {
    unit: SymbolUnit,
}

impl Any {
    pub fn symbol() -> Parser {
        Self::with_config(&SymbolConfig::default())
    }

    pub fn with_config(config: &SymbolConfig) -> Parser {
        Parser::new(Any { unit: config.unit })
    }

    fn symbol_len(&self, input: &str) -> Option<usize> {
        match self.unit {
            SymbolUnit::Grapheme => input.graphemes(true).next().map(str::len),
            SymbolUnit::Char => input.chars().next().map(char::len_utf8),
        }
    }
}

impl Parse for Any {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        match self.symbol_len(input) {
            Some(len) => ParseResult::success(&input[..len], &input[len..]),
            None => ParseResult::failure(input),
        }
    }
}
