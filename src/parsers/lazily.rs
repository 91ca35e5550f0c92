use crate::containers::{Lazy, LazyContainer};
use crate::error::GrammarError;
use crate::parser::Parse;
use crate::result::ParseResult;
use log::trace;
use std::fmt;

/// Lazy-loading proxy for a named rule.
///
/// The name is resolved against the container each time the proxy parses, never when it is
/// built. That is what lets a rule appear inside combinators, including its own definition,
/// before it has been registered.
pub struct Lazily {
    lazy: Lazy,
    name: String,
}

impl Lazily {
    pub(crate) fn new(lazy: Lazy, name: &str) -> Self {
        Self {
            lazy,
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Parse for Lazily {
    /// # Panics
    ///
    /// Panics when no rule is registered under the proxy's name. That is a mistake in the
    /// grammar rather than in the input, so it is not reported as a parse failure.
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let Some(factory) = self.lazy.factory(&self.name) else {
            panic!(
                "{}",
                GrammarError::MissingLazyParser {
                    name: self.name.clone(),
                    input: input.to_string(),
                }
            );
        };
        trace!("resolving lazy rule `{}`", self.name);
        factory().parse(input)
    }
}

impl fmt::Debug for Lazily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazily").field("name", &self.name).finish()
    }
}
