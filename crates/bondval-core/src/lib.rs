//! # Bondval Core
//!
//! Core types and the ingestion layer for Bondval bond position valuation.
//!
//! This crate provides the building blocks used by the rest of the workspace:
//!
//! - **Types**: `PaymentFrequency`, `CreditRating`, `InstrumentType`
//! - **Rates**: `RateSpec`, the lenient parser for rate expressions such as
//!   `"3.10%"` or `"Inflation+0.92%"`
//! - **Records**: `BondRecord` with its derived period and coupon accessors,
//!   and the `ValuationResult` produced for each record
//! - **Mapping**: `RawRow` and `map_row`, which turn delimited text fields
//!   into typed records
//!
//! ## Example
//!
//! ```rust
//! use bondval_core::prelude::*;
//!
//! let row: RawRow = [
//!     ("BondID", "B-1001"),
//!     ("Issuer", "Rijksoverheid"),
//!     ("Rate", "3.10%"),
//!     ("FaceValue", "1000"),
//!     ("PaymentFrequency", "Semi-Annual"),
//!     ("Rating", "AA+"),
//!     ("Type", "Bond"),
//!     ("YearsToMaturity", "5.25"),
//!     ("DiscountFactor", "0.95"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let record = map_row(&row).unwrap();
//! assert_eq!(record.total_payment_periods(), 11);
//! assert_eq!(record.credit_rating(), CreditRating::AAPlus);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod mapping;
pub mod rate;
pub mod record;
pub mod result;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MappingError, MappingResult};
    pub use crate::mapping::{
        map_row, map_row_with, MappingOptions, NoneFrequencyPolicy, RawRow, RowFailure,
    };
    pub use crate::rate::RateSpec;
    pub use crate::record::BondRecord;
    pub use crate::result::ValuationResult;
    pub use crate::types::{CreditRating, InstrumentType, PaymentFrequency};
}

// Re-export commonly used types at crate root
pub use error::{MappingError, MappingResult};
pub use mapping::{map_row, map_row_with, MappingOptions, NoneFrequencyPolicy, RawRow, RowFailure};
pub use rate::RateSpec;
pub use record::BondRecord;
pub use result::ValuationResult;
pub use types::{CreditRating, InstrumentType, PaymentFrequency};
