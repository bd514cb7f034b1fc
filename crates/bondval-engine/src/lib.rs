//! # Bondval Engine
//!
//! Present-value computation and batch orchestration.
//!
//! - [`valuation`]: the type-dispatched valuation engine. Pure and total:
//!   every [`BondRecord`](bondval_core::BondRecord) produces exactly one
//!   [`ValuationResult`](bondval_core::ValuationResult).
//! - [`batch`]: maps and values a sequence of raw rows, isolating row
//!   failures so one bad row never aborts the batch.
//!
//! ## Example
//!
//! ```rust
//! use bondval_core::{BondRecord, InstrumentType, RateSpec};
//! use bondval_engine::value;
//! use rust_decimal_macros::dec;
//!
//! let record = BondRecord::new("Z-1", "Treasury", RateSpec::parse("4%"))
//!     .with_instrument_type(InstrumentType::ZeroCoupon)
//!     .with_face_value(dec!(1000))
//!     .with_years_to_maturity(10.0);
//!
//! let result = value(&record);
//! assert_eq!(result.present_value.round_dp(2), dec!(1480.24));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod valuation;

pub use batch::{BatchReport, BatchSummary, BatchValuator};
pub use valuation::{value, StandardValuationEngine, ValuationEngine, INFLATION_APPROXIMATION_NOTE};
