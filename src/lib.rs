//! # combinate
//!
//! A parser-combinator engine. Grammars are built at runtime by composing small parsers into
//! bigger ones, and applied to text to produce a [`ParseResult`]:
//!
//!     ```rust,ignore
//!     use combinate::{pattern, text, Value};
//!
//!     let number = pattern("\\d+").map(|n| Value::Int(n.to_text().parse().unwrap_or_default()));
//!     let list = number.split(text(",")).between("[", "]").end();
//!
//!     assert_eq!(list.parse("[1,2,3]").into_data(), Value::list([1i64, 2, 3]));
//!     ```
//!
//! ## Layout
//!
//!     result       the three-outcome parse result
//!     value        dynamic data carried by successful results
//!     parser       the `Parse` trait and the shared `Parser` handle with its fluent methods
//!     parsers      primitive matchers and structural combinators
//!     helpers      conveniences built from the combinators (split, between, join, ...)
//!     containers   named rule registries, including lazy and recursion-guarded ones
//!     testing      fluent assertions for results
//!     config       engine knobs, loaded from TOML (re-exported from `combinate-config`)
//!
//! Recursive grammars are written through a [`Grammar`](containers::Grammar): rules are
//! referenced by name before they are defined, and wrapping the lazy side in
//! [`Limited`](containers::Limited) makes left recursion terminate.

pub mod containers;
pub mod error;
pub mod helpers;
pub mod parser;
pub mod parsers;
pub mod result;
pub mod testing;
pub mod value;

pub use combinate_config as config;

pub use error::{GrammarError, GrammarResult};
pub use parser::{Parse, Parser};
pub use parsers::{any, pattern, pattern_with, text};
pub use result::ParseResult;
pub use value::Value;
