// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Mapper configuration.
//!
//! A [`MapperConfig`] is handed to [`crate::MapperRegistry::with_config`] and
//! can be swapped at runtime with [`crate::MapperRegistry::set_config`]
//! (atomic swap, readers never block).
//!
//! With the `config-loaders` feature the config can also be read from YAML:
//!
//! ```yaml
//! # shapemap.yaml
//! compile_mode: eager
//! verify_instances: true
//! ```

/// When the conversion procedure of a registered pair is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config-loaders", derive(serde::Deserialize))]
#[cfg_attr(feature = "config-loaders", serde(rename_all = "snake_case"))]
pub enum CompileMode {
    /// On the first translation of the pair.
    #[default]
    Lazy,
    /// Inside `register`, right after validation.
    Eager,
}

/// Registry-wide settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config-loaders", derive(serde::Deserialize))]
#[cfg_attr(feature = "config-loaders", serde(default, deny_unknown_fields))]
pub struct MapperConfig {
    /// Build timing for conversion procedures.
    pub compile_mode: CompileMode,
    /// Reject translations whose instance is not of the registered origin shape.
    pub verify_instances: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            compile_mode: CompileMode::Lazy,
            verify_instances: true,
        }
    }
}

impl MapperConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_compile_mode(mut self, mode: CompileMode) -> Self {
        self.compile_mode = mode;
        self
    }

    #[must_use]
    pub fn with_verify_instances(mut self, verify: bool) -> Self {
        self.verify_instances = verify;
        self
    }
}

#[cfg(feature = "config-loaders")]
pub use loader::ConfigError;

#[cfg(feature = "config-loaders")]
mod loader {
    use super::MapperConfig;
    use std::fmt;
    use std::fs;
    use std::path::Path;

    /// Errors while loading a [`MapperConfig`].
    #[derive(Debug)]
    pub enum ConfigError {
        Io(std::io::Error),
        Parse(String),
    }

    impl fmt::Display for ConfigError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Io(e) => write!(f, "Failed to read config file: {}", e),
                Self::Parse(msg) => write!(f, "Failed to parse YAML: {}", msg),
            }
        }
    }

    impl std::error::Error for ConfigError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                Self::Io(e) => Some(e),
                Self::Parse(_) => None,
            }
        }
    }

    impl From<std::io::Error> for ConfigError {
        fn from(e: std::io::Error) -> Self {
            Self::Io(e)
        }
    }

    impl MapperConfig {
        /// Parse YAML content. Missing keys keep their defaults.
        pub fn from_yaml_str(yaml_content: &str) -> Result<Self, ConfigError> {
            serde_yaml::from_str(yaml_content).map_err(|e| ConfigError::Parse(e.to_string()))
        }

        /// Load from a YAML file.
        pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let path = path.as_ref();
            let yaml_content = fs::read_to_string(path)?;
            let config = Self::from_yaml_str(&yaml_content)?;
            log::debug!("[config] loaded {:?} from {}", config, path.display());
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MapperConfig::new();
        assert_eq!(config.compile_mode, CompileMode::Lazy);
        assert!(config.verify_instances);
    }

    #[test]
    fn test_builder_setters() {
        let config = MapperConfig::new()
            .with_compile_mode(CompileMode::Eager)
            .with_verify_instances(false);
        assert_eq!(config.compile_mode, CompileMode::Eager);
        assert!(!config.verify_instances);
    }

    #[cfg(feature = "config-loaders")]
    mod yaml {
        use super::*;
        use std::io::Write;

        #[test]
        fn test_parse_full() {
            let config =
                MapperConfig::from_yaml_str("compile_mode: eager\nverify_instances: false\n")
                    .expect("parse");
            assert_eq!(config.compile_mode, CompileMode::Eager);
            assert!(!config.verify_instances);
        }

        #[test]
        fn test_parse_partial_keeps_defaults() {
            let config = MapperConfig::from_yaml_str("compile_mode: eager\n").expect("parse");
            assert_eq!(config.compile_mode, CompileMode::Eager);
            assert!(config.verify_instances);
        }

        #[test]
        fn test_unknown_key_rejected() {
            let err = MapperConfig::from_yaml_str("compile_mod: eager\n").unwrap_err();
            assert!(matches!(err, ConfigError::Parse(_)));
        }

        #[test]
        fn test_load_from_file() {
            let mut file = tempfile::NamedTempFile::new().expect("temp file");
            writeln!(file, "verify_instances: false").expect("write");

            let config = MapperConfig::from_yaml_file(file.path()).expect("load");
            assert!(!config.verify_instances);
            assert_eq!(config.compile_mode, CompileMode::Lazy);
        }

        #[test]
        fn test_missing_file() {
            let dir = tempfile::tempdir().expect("temp dir");
            let err = MapperConfig::from_yaml_file(dir.path().join("absent.yaml")).unwrap_err();
            assert!(matches!(err, ConfigError::Io(_)));
        }
    }
}
