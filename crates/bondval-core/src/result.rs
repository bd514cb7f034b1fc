//! Valuation result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::InstrumentType;

/// Present value computed for one bond record.
///
/// Field names serialize to the result-file columns
/// `BondId;Type;PresentValue;Notes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Identifier echoed from the record.
    #[serde(rename = "BondId")]
    pub bond_id: String,
    /// Instrument type echoed from the record.
    #[serde(rename = "Type")]
    pub instrument_type: InstrumentType,
    /// Computed present value.
    #[serde(rename = "PresentValue", with = "rust_decimal::serde::str")]
    pub present_value: Decimal,
    /// Advisory note, set for approximated valuations only.
    #[serde(rename = "Notes")]
    pub notes: Option<String>,
}

impl ValuationResult {
    /// Creates a result without a note.
    pub fn new(
        bond_id: impl Into<String>,
        instrument_type: InstrumentType,
        present_value: Decimal,
    ) -> Self {
        Self {
            bond_id: bond_id.into(),
            instrument_type,
            present_value,
            notes: None,
        }
    }

    /// Attaches an advisory note.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
