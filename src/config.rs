//! Operands for each demonstration, optionally read from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::catalogue::{Categorized, ErrorCategory};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Categorized for ConfigError {
    fn category(&self) -> ErrorCategory {
        match self {
            ConfigError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                ErrorCategory::FileNotFound
            }
            ConfigError::Read { .. } => ErrorCategory::Os,
            ConfigError::Parse { .. } => ErrorCategory::Syntax,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Operands {
    pub numerator: f64,
    pub denominator: f64,
}

impl Operands {
    pub fn new(numerator: f64, denominator: f64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    fn apply(&mut self, raw: RawOperands) {
        if let Some(n) = raw.numerator {
            self.numerator = n;
        }
        if let Some(d) = raw.denominator {
            self.denominator = d;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InlineConfig {
    pub numerator: f64,
    pub denominator: f64,
    pub items: Vec<i64>,
    pub index: usize,
}

impl Default for InlineConfig {
    fn default() -> Self {
        Self {
            numerator: 1.0,
            denominator: 2.0,
            items: vec![1, 2, 3],
            index: 5,
        }
    }
}

impl InlineConfig {
    fn apply(&mut self, raw: RawInline) {
        if let Some(n) = raw.numerator {
            self.numerator = n;
        }
        if let Some(d) = raw.denominator {
            self.denominator = d;
        }
        if let Some(items) = raw.items {
            self.items = items;
        }
        if let Some(index) = raw.index {
            self.index = index;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub raise: Operands,
    pub recover: Operands,
    pub inline: InlineConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            raise: Operands::new(1.0, 0.0),
            recover: Operands::new(2.0, 0.0),
            inline: InlineConfig::default(),
        }
    }
}

// On-disk shape. Every field is optional; whatever is present overrides
// the corresponding default.

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOperands {
    numerator: Option<f64>,
    denominator: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawInline {
    numerator: Option<f64>,
    denominator: Option<f64>,
    items: Option<Vec<i64>>,
    index: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    raise: RawOperands,
    recover: RawOperands,
    inline: RawInline,
}

impl DemoConfig {
    pub fn from_toml_str(input: &str, path: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(input).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let mut cfg = Self::default();
        cfg.raise.apply(raw.raise);
        cfg.recover.apply(raw.recover);
        cfg.inline.apply(raw.inline);
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_script_constants() {
        let cfg = DemoConfig::default();
        assert_eq!(cfg.raise, Operands::new(1.0, 0.0));
        assert_eq!(cfg.recover, Operands::new(2.0, 0.0));
        assert_eq!(cfg.inline.items, vec![1, 2, 3]);
        assert_eq!(cfg.inline.index, 5);
        assert_eq!(cfg.inline.denominator, 2.0);
    }

    #[test]
    fn test_partial_file_overrides_only_listed_fields() {
        let input = r#"
            [recover]
            denominator = 4.0

            [inline]
            index = 1
        "#;
        let cfg = DemoConfig::from_toml_str(input, Path::new("partial.toml")).unwrap();
        assert_eq!(cfg.recover, Operands::new(2.0, 4.0));
        assert_eq!(cfg.inline.index, 1);
        assert_eq!(cfg.inline.items, vec![1, 2, 3]);
        assert_eq!(cfg.raise, Operands::new(1.0, 0.0));
    }

    #[test]
    fn test_empty_file_is_default() {
        let cfg = DemoConfig::from_toml_str("", Path::new("empty.toml")).unwrap();
        assert_eq!(cfg, DemoConfig::default());
    }

    #[test]
    fn test_malformed_toml() {
        let err = DemoConfig::from_toml_str("[raise\nnumerator = ", Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.category(), ErrorCategory::Syntax);
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = DemoConfig::from_toml_str("[raise]\nnumber = 3", Path::new("typo.toml"));
        assert!(matches!(err, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[raise]\nnumerator = 6.0\ndenominator = 3.0").unwrap();

        let cfg = DemoConfig::load(file.path()).unwrap();
        assert_eq!(cfg.raise, Operands::new(6.0, 3.0));
    }

    #[test]
    fn test_load_missing_file() {
        let err = DemoConfig::load(Path::new("/nonexistent/demo.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert_eq!(err.category(), ErrorCategory::FileNotFound);
        assert!(err.category().is_a(ErrorCategory::Os));
    }

    #[test]
    fn test_unreadable_path_is_os_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DemoConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert_eq!(err.category(), ErrorCategory::Os);
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(DemoConfig::load_or_default(None).unwrap(), DemoConfig::default());
    }
}
