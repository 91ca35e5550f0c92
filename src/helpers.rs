//! Convenience combinators
//!
//! Everything here is built from the combinators in [`parsers`](crate::parsers) and adds no
//! evaluation rules of its own: mapping list data, matching delimited content, splitting on
//! separators, and bounding how many entries a list may have.

use crate::error::GrammarError;
use crate::parser::Parser;
use crate::parsers::{any, AllOrNothing, Either, FullyMap, Ignore, Map, Repeatable, Sequence};
use crate::result::ParseResult;
use crate::value::Value;
use std::collections::BTreeMap;

/// Concatenates list data into text
pub struct Join;

impl Join {
    pub fn the(parser: impl Into<Parser>) -> Parser {
        Join::with("", parser)
    }

    pub fn with(glue: &str, parser: impl Into<Parser>) -> Parser {
        let glue = glue.to_string();
        Map::the(parser, move |data| match data {
            Value::List(items) => Value::Text(
                items
                    .iter()
                    .map(Value::to_text)
                    .collect::<Vec<_>>()
                    .join(&glue),
            ),
            other => other,
        })
    }
}

/// Replaces list data with its first entry
pub struct First;

impl First {
    pub fn of(parser: impl Into<Parser>) -> Parser {
        Item::number(0, parser)
    }
}

/// Replaces list data with its `n`th entry; other data, or a list that is too short, is kept
pub struct Item;

impl Item {
    pub fn number(n: usize, parser: impl Into<Parser>) -> Parser {
        Map::the(parser, move |data| match data {
            Value::List(mut items) if n < items.len() => items.swap_remove(n),
            other => other,
        })
    }
}

/// Matches content between delimiters
pub struct Between;

impl Between {
    pub fn these(
        from: impl Into<Parser>,
        to: impl Into<Parser>,
        search: impl Into<Parser>,
    ) -> Parser {
        Map::the(
            Sequence::of([Ignore::the(from), search.into(), Ignore::the(to)]),
            // A skipped search leaves nothing between the delimiters.
            |data| match data {
                Value::List(mut items) if !items.is_empty() => items.swap_remove(0),
                _ => Value::Null,
            },
        )
    }

    /// Text between `from` and `to`, where `escape` followed by `to` stands for a literal `to`.
    ///
    /// The escape character itself is written as `escape2 escape` (or doubled when `escape2` is
    /// not given), e.g. `\\` for a backslash or `""` for a quote in CSV.
    pub fn escaped(from: &str, to: &str, escape: &str, escape2: Option<&str>) -> Parser {
        let literal_escape = escape.to_string();
        let escaped_escape = format!("{}{}", escape2.unwrap_or(escape), escape);
        let content = Either::of([
            Map::the(escaped_escape.as_str(), move |_| {
                Value::from(literal_escape.as_str())
            }),
            Join::the(Sequence::of([Ignore::the(escape), to.into()])),
            any().except(to),
        ]);
        Between::these(
            from,
            to,
            Join::the(Repeatable::parser(AllOrNothing::of(content))),
        )
    }
}

/// Splits content on a separator
pub struct Split;

impl Split {
    /// One or more occurrences, separated
    pub fn optional(separator: impl Into<Parser>, subject: impl Into<Parser>) -> Parser {
        Self::make(separator.into(), subject.into(), 0, flatten_pairs)
    }

    /// Two or more occurrences: at least one separator must be present
    pub fn with(separator: impl Into<Parser>, subject: impl Into<Parser>) -> Parser {
        Self::make(separator.into(), subject.into(), 1, flatten_pairs)
    }

    /// Left-fold `subject (separator subject)*` into `{separator: [left, right]}`
    pub fn keep<I, P>(separators: I, subject: impl Into<Parser>) -> Parser
    where
        I: IntoIterator<Item = P>,
        P: Into<Parser>,
    {
        Self::keep_with(separators, subject, |op, left, right| {
            let mut node = BTreeMap::new();
            node.insert(op.to_text(), Value::List(vec![left, right]));
            Value::Map(node)
        })
    }

    /// Left-fold `subject (separator subject)*` with `combine(separator, left, right)`
    pub fn keep_with<I, P, F>(separators: I, subject: impl Into<Parser>, combine: F) -> Parser
    where
        I: IntoIterator<Item = P>,
        P: Into<Parser>,
        F: Fn(Value, Value, Value) -> Value + Send + Sync + 'static,
    {
        let mut separators: Vec<Parser> = separators.into_iter().map(Into::into).collect();
        let separator = if separators.len() == 1 {
            separators.remove(0)
        } else {
            Either::of(separators)
        };
        Self::make(separator, subject.into(), 1, move |data| {
            let (head, pairs) = split_head(data);
            pairs.into_iter().fold(head, |left, pair| match pair {
                Value::List(mut pair) if pair.len() >= 2 => {
                    let right = pair.swap_remove(1);
                    let op = pair.swap_remove(0);
                    combine(op, left, right)
                }
                _ => left,
            })
        })
    }

    fn make<F>(separator: Parser, subject: Parser, min: usize, mapping: F) -> Parser
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Map::the(
            Sequence::of([
                subject.clone(),
                AtLeast::results(min, Repeatable::parser(Sequence::of([separator, subject]))),
            ]),
            mapping,
        )
    }
}

/// Separate the first subject's data from the list of `[separator, subject]` pairs.
///
/// When the subject itself is ignored the sequence only holds the pairs.
fn split_head(data: Value) -> (Value, Vec<Value>) {
    let mut parts = match data {
        Value::List(parts) => parts,
        other => return (other, Vec::new()),
    };
    let pairs = match parts.pop() {
        Some(Value::List(pairs)) => pairs,
        Some(other) => vec![other],
        None => Vec::new(),
    };
    (parts.pop().unwrap_or_default(), pairs)
}

/// Subject data followed by the subject half of every pair; pairs without one are dropped
fn flatten_pairs(data: Value) -> Value {
    let had_head = matches!(&data, Value::List(parts) if parts.len() > 1);
    let (head, pairs) = split_head(data);
    let mut items = Vec::with_capacity(pairs.len() + 1);
    if had_head {
        items.push(head);
    }
    items.extend(pairs.into_iter().filter_map(|pair| match pair {
        Value::List(mut pair) if pair.len() > 1 => Some(pair.swap_remove(1)),
        _ => None,
    }));
    Value::List(items)
}

fn list_len(operation: &'static str, data: &Value) -> usize {
    match data.as_list() {
        Some(items) => items.len(),
        None => panic!(
            "{}",
            GrammarError::NotASequence {
                operation,
                found: data.kind().to_string(),
            }
        ),
    }
}

/// Refuses list results with fewer than `n` entries
pub struct AtLeast;

impl AtLeast {
    /// # Panics
    ///
    /// Parsing panics when the wrapped parser succeeds with data that is not a list.
    pub fn results(n: usize, parser: impl Into<Parser>) -> Parser {
        FullyMap::the(parser, move |result| {
            if !result.used() || list_len("at_least", &result.data()) >= n {
                return result;
            }
            ParseResult::failure(result.unparsed())
        })
    }
}

/// Refuses list results with more than `n` entries.
///
/// The failure points at the text of the surplus entries followed by the unparsed remainder,
/// when that text is still a suffix of the input; otherwise at the remainder.
pub struct AtMost;

impl AtMost {
    /// # Panics
    ///
    /// Parsing panics when the wrapped parser succeeds with data that is not a list.
    pub fn results(n: usize, parser: impl Into<Parser>) -> Parser {
        let parser = parser.into();
        Parser::new(AtMostParser { n, parser })
    }
}

#[derive(Debug)]
struct AtMostParser {
    n: usize,
    parser: Parser,
}

impl crate::parser::Parse for AtMostParser {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let result = self.parser.parse(input);
        if !result.used() || list_len("at_most", &result.data()) <= self.n {
            return result;
        }
        let unparsed = result.unparsed();
        let surplus: String = result
            .data()
            .as_list()
            .map(|items| items[self.n..].iter().map(Value::to_text).collect())
            .unwrap_or_default();
        let consumed = input.len() - unparsed.len();
        let start = consumed.saturating_sub(surplus.len());
        match input.get(start..) {
            Some(rest) if rest.strip_suffix(unparsed) == Some(surplus.as_str()) => {
                ParseResult::failure(rest)
            }
            _ => ParseResult::failure(unparsed),
        }
    }
}

/// Refuses empty data, and skipped results
pub struct NonEmpty;

impl NonEmpty {
    pub fn result(parser: impl Into<Parser>) -> Parser {
        FullyMap::the(parser, |result| {
            if result.ok() && (!result.used() || result.data().is_empty()) {
                return ParseResult::failure(result.unparsed());
            }
            result
        })
    }
}
