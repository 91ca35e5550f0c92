//! Named parser registries
//!
//! Grammars with more than a handful of rules name them, and recursive grammars need to refer to
//! rules that do not exist yet. Containers solve both:
//!
//!     Eager     holds finished parsers; asking for a missing one is an error
//!     Lazy      hands out proxies straight away and resolves them at parse time
//!     Limited   a lazy container whose proxies refuse left recursion
//!     Grammar   one eager and one lazy container behind a single namespace
//!
//! All containers are handles: clones share the same registry, so a grammar can keep adding
//! rules through one clone while parsers built from another are already in use.
//!
//! A recursive rule is typically defined in terms of its own proxy:
//!
//! ```rust,ignore
//! let lazy = Lazy::container();
//! lazy.set("expression", lazy.proxy("expression").between("(", ")").or("z"));
//! assert!(lazy.proxy("expression").parse("((z))").ok());
//! ```

mod eager;
mod grammar;
mod lazy;
mod limited;

pub use eager::Eager;
pub use grammar::Grammar;
pub use lazy::Lazy;
pub use limited::Limited;

use crate::error::GrammarResult;
use crate::parser::Parser;
use std::sync::Arc;

/// Deferred constructor for a lazily registered rule
pub type Factory = Arc<dyn Fn() -> Parser + Send + Sync>;

/// Name to parser mapping
pub trait Container {
    /// Fetch the parser registered under `name`
    fn get(&self, name: &str) -> GrammarResult<Parser>;

    fn set(&self, name: &str, parser: Parser);

    fn has(&self, name: &str) -> bool;

    fn remove(&self, name: &str);
}

/// A container whose lookups never fail, deferring resolution to parse time
pub trait LazyContainer: Container {
    /// The factory currently registered under `name`
    fn factory(&self, name: &str) -> Option<Factory>;

    /// A parser standing in for `name`, whether or not it is registered yet
    fn proxy(&self, name: &str) -> Parser;
}
