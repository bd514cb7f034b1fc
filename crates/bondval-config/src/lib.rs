//! Bondval Configuration Layer
//!
//! Run settings for the valuation pipeline, read from a TOML file.
//!
//! # Features
//!
//! - **Delimiter and naming**: field delimiter and result file prefix
//! - **Mapping**: interpretation of the `"None"` payment frequency and
//!   optional range checks
//! - **Execution**: sequential or parallel valuation, history size
//! - **Validation**: every loaded configuration is checked with [`Validate`]
//!
//! # Example
//!
//! ```rust
//! use bondval_config::ValuationConfig;
//! use bondval_core::NoneFrequencyPolicy;
//!
//! let config = ValuationConfig::from_toml_str("none_frequency = \"no-payments\"").unwrap();
//! assert_eq!(config.mapping_options().none_frequency, NoneFrequencyPolicy::NoPayments);
//! assert_eq!(config.output_prefix, "bonds_valued_");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod valuation;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use valuation::{ValuationConfig, HISTORY_COUNT_RANGE};
