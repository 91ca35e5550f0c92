use super::{Container, Eager, Lazy, LazyContainer};
use crate::error::GrammarResult;
use crate::parser::Parser;

/// Mixes an eager and a lazy container under one namespace.
///
/// Lookups prefer eager rules and fall back to lazy proxies, so a grammar can register its
/// leaf rules directly and its recursive rules lazily, and refer to both by name.
#[derive(Debug, Clone, Default)]
pub struct Grammar<L = Lazy> {
    eager: Eager,
    lazy: L,
}

impl Grammar<Lazy> {
    pub fn container() -> Self {
        Self::with(Lazy::container())
    }
}

impl<L: LazyContainer> Grammar<L> {
    /// Use `lazy` (or a clone sharing its registry) for the lazy side
    pub fn with(lazy: L) -> Self {
        Self {
            eager: Eager::container(),
            lazy,
        }
    }

    /// Register a rule on the lazy side
    pub fn register_lazy(&self, name: &str, parser: Parser) {
        self.lazy.set(name, parser);
    }

    /// The eager rule registered under `name`, or a lazy proxy for it
    pub fn rule(&self, name: &str) -> Parser {
        match self.eager.get(name) {
            Ok(parser) => parser,
            Err(_) => self.lazy.proxy(name),
        }
    }
}

impl<L: LazyContainer> Container for Grammar<L> {
    fn get(&self, name: &str) -> GrammarResult<Parser> {
        Ok(self.rule(name))
    }

    fn set(&self, name: &str, parser: Parser) {
        self.eager.set(name, parser);
    }

    fn has(&self, name: &str) -> bool {
        self.eager.has(name) || self.lazy.has(name)
    }

    fn remove(&self, name: &str) {
        self.eager.remove(name);
    }
}
