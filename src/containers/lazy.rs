use super::{Container, Factory, LazyContainer};
use crate::error::GrammarResult;
use crate::parser::Parser;
use crate::parsers::Lazily;
use log::debug;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Manages lazy loading, which recursive grammars depend on.
///
/// [`get`](Container::get) and [`proxy`](LazyContainer::proxy) hand out a [`Lazily`] proxy
/// immediately. The proxy looks its rule up each time it parses, so rules may be registered
/// after they are used and may refer to themselves.
///
/// A rule that refers to itself keeps the registry alive through its own proxy; such grammars
/// live until the process ends or the rule is removed.
#[derive(Clone, Default)]
pub struct Lazy {
    registry: Arc<RwLock<HashMap<String, Factory>>>,
}

impl Lazy {
    pub fn container() -> Self {
        Self::default()
    }

    /// Register a factory that builds the rule on demand
    pub fn register_factory<F>(&self, name: &str, factory: F)
    where
        F: Fn() -> Parser + Send + Sync + 'static,
    {
        debug!("registering lazy rule `{}`", name);
        self.registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), Arc::new(factory));
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let registry = self.registry.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = registry.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Container for Lazy {
    fn get(&self, name: &str) -> GrammarResult<Parser> {
        Ok(self.proxy(name))
    }

    fn set(&self, name: &str, parser: Parser) {
        self.register_factory(name, move || parser.clone());
    }

    fn has(&self, name: &str) -> bool {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    fn remove(&self, name: &str) {
        debug!("removing lazy rule `{}`", name);
        self.registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
    }
}

impl LazyContainer for Lazy {
    fn factory(&self, name: &str) -> Option<Factory> {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    fn proxy(&self, name: &str) -> Parser {
        Parser::new(Lazily::new(self.clone(), name))
    }
}

impl fmt::Debug for Lazy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy").field("names", &self.names()).finish()
    }
}
