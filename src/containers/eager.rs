use super::Container;
use crate::error::{GrammarError, GrammarResult};
use crate::parser::Parser;
use log::debug;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// A registry of finished parsers
#[derive(Clone, Default)]
pub struct Eager {
    parsers: Arc<RwLock<HashMap<String, Parser>>>,
}

impl Eager {
    pub fn container() -> Self {
        Self::default()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let parsers = self.parsers.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = parsers.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Container for Eager {
    fn get(&self, name: &str) -> GrammarResult<Parser> {
        self.parsers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
            .ok_or_else(|| GrammarError::MissingParser {
                name: name.to_string(),
            })
    }

    fn set(&self, name: &str, parser: Parser) {
        debug!("registering eager rule `{}`", name);
        self.parsers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), parser);
    }

    fn has(&self, name: &str) -> bool {
        self.parsers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    fn remove(&self, name: &str) {
        debug!("removing eager rule `{}`", name);
        self.parsers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
    }
}

impl fmt::Debug for Eager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Eager").field("names", &self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_result;

    #[test]
    fn stores_and_fetches_parsers() {
        let eager = Eager::container();
        eager.set("foo", "foo".into());

        assert!(eager.has("foo"));
        let parser = eager.get("foo").unwrap();
        assert!(format!("{:?}", parser).starts_with("Text"));
        assert_result(&parser.parse("foo")).is_ok().text("foo");
    }

    #[test]
    fn missing_parsers_are_named_in_the_error() {
        let eager = Eager::container();
        let err = eager.get("foo-bar").unwrap_err();
        assert!(matches!(err, GrammarError::MissingParser { ref name } if name == "foo-bar"));
        assert!(err.to_string().contains("foo-bar"));
    }

    #[test]
    fn removed_parsers_are_missing() {
        let eager = Eager::container();
        eager.set("foo", "foo".into());
        eager.remove("foo");

        assert!(!eager.has("foo"));
        assert!(eager.get("foo").is_err());
    }

    #[test]
    fn clones_share_the_registry() {
        let eager = Eager::container();
        let other = eager.clone();
        other.set("b", "b".into());
        other.set("a", "a".into());
        assert_eq!(eager.names(), vec!["a".to_string(), "b".to_string()]);
    }
}
