//! Configuration loading
//!
//! `defaults/astv.default.toml` is embedded into the binary so that the
//! documented defaults and the runtime behavior stay in sync. Users layer
//! files and command-line overrides on top via [`Loader`] before
//! deserializing into [`AstvConfig`].

use crate::astv::presentation::Palette;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

pub use config::ValueKind;

const DEFAULT_TOML: &str = include_str!("../../defaults/astv.default.toml");

/// Name of the optional per-directory config file
pub const LOCAL_CONFIG_FILE: &str = "astv.toml";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AstvConfig {
    pub presentation: PresentationConfig,
    pub viewer: ViewerConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PresentationConfig {
    pub palette: Vec<String>,
}

impl PresentationConfig {
    pub fn palette(&self) -> Palette {
        Palette::new(self.palette.clone())
    }
}

/// Terminal viewer knobs
#[derive(Debug, Clone, Deserialize)]
pub struct ViewerConfig {
    pub tick_rate_ms: u64,
    pub indent: usize,
}

/// Defaults for `astv export`
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub format: String,
    pub label_width: usize,
    pub show_positions: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive, e.g. `warn` or `astv=debug`
    pub level: String,
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
    pub fn build(self) -> Result<AstvConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Defaults, then `./astv.toml`, then an explicit file if one is given, then
/// command-line `overrides` as `(dotted key, value)` pairs
pub fn load(
    explicit: Option<&Path>,
    overrides: Vec<(&str, ValueKind)>,
) -> Result<AstvConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = explicit {
        loader = loader.with_file(path);
    }
    for (key, value) in overrides {
        loader = loader.set_override(key, value)?;
    }
    loader.build()
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AstvConfig, ConfigError> {
    Loader::new().build()
}
