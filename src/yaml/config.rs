//! Configuration loader for the yaml structure tooling.
//!
//! `defaults/yaml-structure.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Callers layer user-specific files on top of those
//! defaults via [`Loader`] before deserializing into [`StructureConfig`].

use crate::yaml::formats::OutputFormat;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/yaml-structure.default.toml");

/// Name of the per-project configuration file picked up from the working directory
pub const PROJECT_CONFIG_FILE: &str = "yaml-structure.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StructureConfig {
    pub inspect: InspectConfig,
}

/// Controls how structure trees are rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub format: OutputFormat,
    pub show_offsets: bool,
    pub truncate: usize,
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

    /// Apply a single key/value override (CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<StructureConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<StructureConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.inspect.format, OutputFormat::Dump);
        assert!(!config.inspect.show_offsets);
        assert_eq!(config.inspect.truncate, 0);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("inspect.format", "treeviz")
            .expect("override to apply")
            .set_override("inspect.truncate", 12)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.inspect.format, OutputFormat::Treeviz);
        assert_eq!(config.inspect.truncate, 12);
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Loader::new()
            .set_override("inspect.format", "xml")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn layers_files_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[inspect]\nshow_offsets = true").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert!(config.inspect.show_offsets);
        assert_eq!(config.inspect.format, OutputFormat::Dump);
    }

    #[test]
    fn optional_file_may_be_missing() {
        let config = Loader::new()
            .with_optional_file("definitely/not/here.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.inspect.format, OutputFormat::Dump);
    }

    #[test]
    fn required_file_must_exist() {
        assert!(Loader::new()
            .with_file("definitely/not/here.toml")
            .build()
            .is_err());
    }
}
