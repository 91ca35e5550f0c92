//! Shared configuration loader for the combinate engine.
//!
//! `defaults/combinate.default.toml` is embedded into the crate so that the documented defaults and
//! [`EngineConfig::default`] never drift apart. Applications layer their own files on top of those
//! defaults via [`Loader`] before deserializing into [`EngineConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/combinate.default.toml");

/// Top-level configuration consumed by parser constructors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    pub repeat: RepeatConfig,
    pub symbols: SymbolConfig,
}

/// Knobs for `Repeatable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RepeatConfig {
    /// End the repetition when an attempt succeeds without consuming input.
    pub stop_without_progress: bool,
}

impl Default for RepeatConfig {
    fn default() -> Self {
        Self {
            stop_without_progress: true,
        }
    }
}

/// Controls what the `Any` matcher treats as one symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SymbolConfig {
    pub unit: SymbolUnit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolUnit {
    /// A user-perceived character (extended grapheme cluster).
    #[default]
    Grapheme,
    /// A single Unicode scalar value.
    Char,
}

/// Builds an [`EngineConfig`] for one grammar.
///
/// Sources are applied in the order they are added, later ones winning, on top of the embedded
/// defaults. A grammar that counts chars instead of graphemes, or that relies on repeating empty
/// matches, layers just those keys.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Seeded with `combinate.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// A TOML file that must exist, e.g. settings shipped next to a grammar definition.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_path(path.as_ref(), true)
    }

    /// A TOML file that may be absent, e.g. a per-user tweak of the symbol unit.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_path(path.as_ref(), false)
    }

    fn with_path(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer TOML text, e.g. a grammar-specific snippet shipped alongside the grammar.
    pub fn with_toml(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
        self
    }

    /// Apply a single key/value override such as `repeat.stop_without_progress`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every source into an [`EngineConfig`]; unknown symbol units are rejected here.
    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The engine settings used by the plain constructors such as `Repeatable::parser`.
pub fn load_defaults() -> Result<EngineConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_match_default_impl() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config, EngineConfig::default());
        assert!(config.repeat.stop_without_progress);
        assert_eq!(config.symbols.unit, SymbolUnit::Grapheme);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("repeat.stop_without_progress", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(!config.repeat.stop_without_progress);
        assert_eq!(config.symbols.unit, SymbolUnit::Grapheme);
    }

    #[test]
    fn layers_toml_snippets() {
        let config = Loader::new()
            .with_toml("[symbols]\nunit = \"char\"\n")
            .build()
            .expect("config to build");
        assert_eq!(config.symbols.unit, SymbolUnit::Char);
        assert!(config.repeat.stop_without_progress);
    }

    #[test]
    fn optional_files_may_be_absent() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here/combinate.toml")
            .build()
            .expect("missing optional file to be ignored");
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn required_files_must_exist() {
        let result = Loader::new()
            .with_file("/definitely/not/here/combinate.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn later_sources_win() {
        let config = Loader::new()
            .with_toml("[symbols]\nunit = \"char\"\n")
            .with_toml("[symbols]\nunit = \"grapheme\"\n")
            .set_override("repeat.stop_without_progress", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.symbols.unit, SymbolUnit::Grapheme);
        assert!(!config.repeat.stop_without_progress);
    }

    #[test]
    fn rejects_unknown_symbol_units() {
        let result = Loader::new()
            .with_toml("[symbols]\nunit = \"byte\"\n")
            .build();
        assert!(result.is_err());
    }
}
