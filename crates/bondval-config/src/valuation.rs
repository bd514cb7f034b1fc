//! Valuation run configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use bondval_core::{MappingOptions, NoneFrequencyPolicy};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Smallest and largest accepted `history_count`.
pub const HISTORY_COUNT_RANGE: (usize, usize) = (1, 20);

/// Settings for reading position files, valuing them and writing results.
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration.
///
/// # Example
///
/// ```rust
/// use bondval_config::{ValuationConfig, Validate};
///
/// let config = ValuationConfig::from_toml_str(r#"
///     delimiter = ","
///     none_frequency = "no-payments"
/// "#).unwrap();
///
/// assert_eq!(config.delimiter_byte(), b',');
/// assert!(config.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationConfig {
    /// Field delimiter for position and result files
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Prefix of result file names
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,

    /// Value rows on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,

    /// Interpretation of the "None" payment frequency
    #[serde(default)]
    pub none_frequency: NoneFrequencyPolicy,

    /// Reject empty ids and negative amounts while mapping
    #[serde(default)]
    pub validate_ranges: bool,

    /// Number of result files listed by default
    #[serde(default = "default_history_count")]
    pub history_count: usize,
}

fn default_delimiter() -> char {
    ';'
}

fn default_output_prefix() -> String {
    "bonds_valued_".to_string()
}

fn default_history_count() -> usize {
    5
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            output_prefix: default_output_prefix(),
            parallel: false,
            none_frequency: NoneFrequencyPolicy::default(),
            validate_ranges: false,
            history_count: default_history_count(),
        }
    }
}

impl ValuationConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Resolves the configuration for a run.
    ///
    /// An explicit path must exist. Without one, the file at
    /// [`default_path`](Self::default_path) is used when present, and the
    /// built-in defaults otherwise. Returns the file that was read, if any.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }
        match Self::default_path() {
            Some(path) if path.exists() => Ok((Self::from_file(&path)?, Some(path))),
            _ => Ok((Self::default(), None)),
        }
    }

    /// `<config dir>/bondval/config.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bondval").join("config.toml"))
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the configuration to `path`, creating parent directories.
    ///
    /// An existing file is only replaced when `overwrite` is set.
    pub fn write_to(&self, path: impl AsRef<Path>, overwrite: bool) -> ConfigResult<()> {
        let path = path.as_ref();
        if path.exists() && !overwrite {
            return Err(ConfigError::AlreadyExists {
                path: path.display().to_string(),
            });
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// The delimiter as a byte. Falls back to `;` for a non-ASCII delimiter,
    /// which validation rejects.
    pub fn delimiter_byte(&self) -> u8 {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .unwrap_or(b';')
    }

    /// Mapper settings derived from this configuration.
    pub fn mapping_options(&self) -> MappingOptions {
        MappingOptions::default()
            .with_none_frequency(self.none_frequency)
            .with_range_validation(self.validate_ranges)
    }

    /// Enables parallel valuation.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Validate for ValuationConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.delimiter.is_ascii() {
            errors.push(ValidationError::new("delimiter", "must be a single ASCII character"));
        } else if matches!(self.delimiter, '"' | '\n' | '\r') {
            errors.push(ValidationError::new(
                "delimiter",
                "must not be a quote or line break",
            ));
        }

        if self.output_prefix.is_empty() {
            errors.push(ValidationError::new("output_prefix", "must not be empty"));
        } else if self.output_prefix.contains(['/', '\\']) {
            errors.push(ValidationError::new(
                "output_prefix",
                "must not contain path separators",
            ));
        }

        let (min, max) = HISTORY_COUNT_RANGE;
        if !(min..=max).contains(&self.history_count) {
            errors.push(ValidationError::new(
                "history_count",
                format!("must be between {min} and {max}"),
            ));
        }

        errors
    }
}
