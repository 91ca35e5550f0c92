use super::{Container, Factory, Lazy, LazyContainer};
use crate::error::GrammarResult;
use crate::parser::Parser;
use crate::parsers::Limit;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Lazy container whose proxies refuse left recursion.
///
/// Every name maps to one cached [`Limit`] around the wrapped container's proxy, so all uses of
/// a rule share the same record of which positions are being parsed.
#[derive(Clone)]
pub struct Limited<L = Lazy> {
    container: L,
    cache: Arc<RwLock<HashMap<String, Parser>>>,
}

impl<L: LazyContainer> Limited<L> {
    pub fn recursion(container: L) -> Self {
        Self {
            container,
            cache: Arc::default(),
        }
    }
}

impl<L: LazyContainer> Container for Limited<L> {
    fn get(&self, name: &str) -> GrammarResult<Parser> {
        Ok(self.proxy(name))
    }

    fn set(&self, name: &str, parser: Parser) {
        self.container.set(name, parser);
    }

    fn has(&self, name: &str) -> bool {
        self.container.has(name)
    }

    fn remove(&self, name: &str) {
        self.container.remove(name);
    }
}

impl<L: LazyContainer> LazyContainer for Limited<L> {
    fn factory(&self, name: &str) -> Option<Factory> {
        self.container.factory(name)
    }

    fn proxy(&self, name: &str) -> Parser {
        if let Some(parser) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            return parser.clone();
        }
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(name.to_string())
            .or_insert_with(|| Parser::new(Limit::new(self.container.proxy(name))))
            .clone()
    }
}

impl<L: fmt::Debug> fmt::Debug for Limited<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Limited")
            .field("container", &self.container)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_result;
    use crate::value::Value;

    fn left_recursive() -> Limited {
        let lazy = Limited::recursion(Lazy::container());
        lazy.set("expression", lazy.proxy("expression").and_then("a").or("z"));
        lazy
    }

    #[test]
    fn parses_despite_left_recursion() {
        let parser = left_recursive().proxy("expression");
        assert_result(&parser.parse("z")).is_ok().text("z").unparsed("");
    }

    #[test]
    fn recursive_branch_fails_fast() {
        let parser = left_recursive().proxy("expression");
        assert_result(&parser.parse("za")).is_ok().text("z").unparsed("a");
    }

    #[test]
    fn parses_a_sequence_despite_left_recursion() {
        let parser = left_recursive().proxy("expression").split(",");
        let result = parser.parse("z,z,z");
        assert_result(&result).is_ok().unparsed("");
        assert_eq!(result.into_data(), Value::list(["z", "z", "z"]));
    }

    #[test]
    fn caches_one_guard_per_name() {
        let lazy = left_recursive();
        let first = format!("{:?}", lazy.proxy("expression"));
        assert!(first.starts_with("Limit"));
        assert_eq!(lazy.cache.read().unwrap().len(), 1);
        lazy.proxy("expression");
        assert_eq!(lazy.cache.read().unwrap().len(), 1);
    }

    #[test]
    #[should_panic(expected = "foo-bar")]
    fn undefined_rules_panic_when_parsed() {
        let lazy = Limited::recursion(Lazy::container());
        lazy.proxy("foo-bar").parse("(z)");
    }

    #[test]
    #[should_panic(expected = "foo-bar")]
    fn removed_rules_panic_when_parsed() {
        let lazy = Limited::recursion(Lazy::container());
        lazy.set("foo-bar", "foo-bar".into());
        let parser = lazy.proxy("foo-bar");
        lazy.remove("foo-bar");
        parser.parse("(z)");
    }
}
