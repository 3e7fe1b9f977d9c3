//! Shared configuration loader for the adf toolchain.
//!
//! `defaults/adf.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`AdfConfig`].

use adf_babel::formats::adf::AdfOptions;
use adf_babel::formats::markdown::ParseOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/adf.default.toml");

/// Name of the optional per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = "adf.toml";

/// Top-level configuration consumed by adf applications.
#[derive(Debug, Clone, Deserialize)]
pub struct AdfConfig {
    pub parse: ParseConfig,
    pub serialize: SerializeConfig,
    pub diagnostics: DiagnosticsConfig,
}

/// Markup parsing knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    pub default_code_language: String,
}

impl From<&ParseConfig> for ParseOptions {
    fn from(config: &ParseConfig) -> Self {
        ParseOptions {
            default_language: config.default_code_language.clone(),
        }
    }
}

impl From<ParseConfig> for ParseOptions {
    fn from(config: ParseConfig) -> Self {
        ParseOptions {
            default_language: config.default_code_language,
        }
    }
}

/// Per-format serialization knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct SerializeConfig {
    pub adf: AdfOutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdfOutputConfig {
    pub pretty: bool,
    pub table_layout: String,
    pub number_column: bool,
}

impl From<&AdfOutputConfig> for AdfOptions {
    fn from(config: &AdfOutputConfig) -> Self {
        AdfOptions {
            pretty: config.pretty,
            table_layout: config.table_layout.clone(),
            number_column: config.number_column,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosticsConfig {
    pub strict: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AdfConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AdfConfig, ConfigError> {
    Loader::new().build()
}
