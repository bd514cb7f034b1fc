//! Raw row to record mapping.
//!
//! A position file row arrives as a set of named text fields. [`map_row`]
//! turns it into a [`BondRecord`], normalizing the closed vocabularies for
//! payment frequency, credit rating and instrument type. Unlike the rate
//! parser, the mapper is strict: an unknown literal or an unreadable number
//! fails the row.

use std::collections::HashMap;
use std::fmt;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{MappingError, MappingResult};
use crate::rate::{parse_decimal, RateSpec};
use crate::record::BondRecord;
use crate::types::{CreditRating, InstrumentType, PaymentFrequency};

/// Column names of a position file.
pub mod columns {
    /// Bond identifier.
    pub const BOND_ID: &str = "BondID";
    /// Issuer name.
    pub const ISSUER: &str = "Issuer";
    /// Rate expression.
    pub const RATE: &str = "Rate";
    /// Face value.
    pub const FACE_VALUE: &str = "FaceValue";
    /// Payment frequency.
    pub const PAYMENT_FREQUENCY: &str = "PaymentFrequency";
    /// Credit rating.
    pub const RATING: &str = "Rating";
    /// Instrument type.
    pub const TYPE: &str = "Type";
    /// Years to maturity.
    pub const YEARS_TO_MATURITY: &str = "YearsToMaturity";
    /// Discount factor.
    pub const DISCOUNT_FACTOR: &str = "DiscountFactor";
    /// Desk notes.
    pub const DESK_NOTES: &str = "DeskNotes";

    /// All columns in file order.
    pub const ALL: [&str; 10] = [
        BOND_ID,
        ISSUER,
        RATE,
        FACE_VALUE,
        PAYMENT_FREQUENCY,
        RATING,
        TYPE,
        YEARS_TO_MATURITY,
        DISCOUNT_FACTOR,
        DESK_NOTES,
    ];
}

// =============================================================================
// RAW ROW
// =============================================================================

/// One row of named text fields.
///
/// Lookups trim the stored text and treat a missing column as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Returns the trimmed text of a column, or `""` when absent.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map_or("", |value| value.trim())
    }

    /// Returns true if the column is present.
    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }
}

// =============================================================================
// OPTIONS
// =============================================================================

/// How the payment frequency literal `"None"` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoneFrequencyPolicy {
    /// `"None"` maps to quarterly payments, as existing result files expect.
    #[default]
    Legacy,
    /// `"None"` maps to [`PaymentFrequency::None`] (no periodic payments).
    NoPayments,
}

impl NoneFrequencyPolicy {
    /// Configuration name of the policy.
    pub fn name(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::NoPayments => "no-payments",
        }
    }
}

impl fmt::Display for NoneFrequencyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mapper settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingOptions {
    /// Interpretation of the `"None"` payment frequency.
    pub none_frequency: NoneFrequencyPolicy,
    /// Reject empty ids and negative or non-finite amounts.
    pub validate_ranges: bool,
}

impl MappingOptions {
    /// Sets the `"None"` frequency policy.
    #[must_use]
    pub fn with_none_frequency(mut self, policy: NoneFrequencyPolicy) -> Self {
        self.none_frequency = policy;
        self
    }

    /// Enables or disables range checks.
    #[must_use]
    pub fn with_range_validation(mut self, enabled: bool) -> Self {
        self.validate_ranges = enabled;
        self
    }
}

// =============================================================================
// MAPPING
// =============================================================================

/// Maps a raw row with default options.
pub fn map_row(row: &RawRow) -> MappingResult<BondRecord> {
    map_row_with(row, &MappingOptions::default())
}

/// Maps a raw row into a bond record.
pub fn map_row_with(row: &RawRow, options: &MappingOptions) -> MappingResult<BondRecord> {
    let bond_id = row.get(columns::BOND_ID);
    let issuer = row.get(columns::ISSUER);
    let rate = RateSpec::parse(row.get(columns::RATE));

    let face_value = parse_decimal_field(row, columns::FACE_VALUE)?;
    let payment_frequency =
        parse_payment_frequency(row.get(columns::PAYMENT_FREQUENCY), options.none_frequency)?;
    let credit_rating = parse_credit_rating(row.get(columns::RATING))?;
    let instrument_type = parse_instrument_type(row.get(columns::TYPE))?;
    let years_to_maturity = parse_f64_field(row, columns::YEARS_TO_MATURITY)?;
    let discount_factor = parse_decimal_field(row, columns::DISCOUNT_FACTOR)?;

    let desk_notes = Some(row.get(columns::DESK_NOTES))
        .filter(|notes| !notes.is_empty())
        .map(str::to_string);

    if options.validate_ranges {
        check_ranges(row, face_value, years_to_maturity, discount_factor)?;
    }

    Ok(BondRecord::new(bond_id, issuer, rate)
        .with_face_value(face_value)
        .with_payment_frequency(payment_frequency)
        .with_credit_rating(credit_rating)
        .with_instrument_type(instrument_type)
        .with_years_to_maturity(years_to_maturity)
        .with_discount_factor(discount_factor)
        .with_desk_notes(desk_notes))
}

/// Normalizes a payment frequency literal.
pub fn parse_payment_frequency(
    text: &str,
    policy: NoneFrequencyPolicy,
) -> MappingResult<PaymentFrequency> {
    match text.trim() {
        "Annual" => Ok(PaymentFrequency::Annual),
        "Semi-Annual" => Ok(PaymentFrequency::SemiAnnual),
        "Quarterly" => Ok(PaymentFrequency::Quarterly),
        "None" => match policy {
            NoneFrequencyPolicy::Legacy => {
                debug!("Payment frequency 'None' mapped to Quarterly (legacy policy)");
                Ok(PaymentFrequency::Quarterly)
            }
            NoneFrequencyPolicy::NoPayments => Ok(PaymentFrequency::None),
        },
        _ => Err(MappingError::unknown_enum(columns::PAYMENT_FREQUENCY, text)),
    }
}

/// Normalizes a credit rating literal (`AA+`, `bbb-`, `BBBMinus`).
pub fn parse_credit_rating(text: &str) -> MappingResult<CreditRating> {
    let normalized = text.trim().replace('+', "Plus").replace('-', "Minus");
    CreditRating::from_name(&normalized)
        .ok_or_else(|| MappingError::unknown_enum(columns::RATING, text))
}

/// Normalizes an instrument type literal.
pub fn parse_instrument_type(text: &str) -> MappingResult<InstrumentType> {
    match text.trim() {
        "Bond" => Ok(InstrumentType::Standard),
        "Inflation-Linked" => Ok(InstrumentType::InflationLinked),
        "Zero-Coupon" => Ok(InstrumentType::ZeroCoupon),
        _ => Err(MappingError::unknown_enum(columns::TYPE, text)),
    }
}

fn parse_decimal_field(row: &RawRow, column: &'static str) -> MappingResult<Decimal> {
    let text = row.get(column);
    parse_decimal(text).ok_or_else(|| MappingError::malformed_number(column, text))
}

fn parse_f64_field(row: &RawRow, column: &'static str) -> MappingResult<f64> {
    let text = row.get(column);
    text.parse::<f64>()
        .map_err(|_| MappingError::malformed_number(column, text))
}

fn check_ranges(
    row: &RawRow,
    face_value: Decimal,
    years_to_maturity: f64,
    discount_factor: Decimal,
) -> MappingResult<()> {
    if row.get(columns::BOND_ID).is_empty() {
        return Err(MappingError::out_of_range(columns::BOND_ID, "", "must not be empty"));
    }
    if face_value.is_sign_negative() && !face_value.is_zero() {
        return Err(MappingError::out_of_range(
            columns::FACE_VALUE,
            row.get(columns::FACE_VALUE),
            "must not be negative",
        ));
    }
    if !years_to_maturity.is_finite() || years_to_maturity < 0.0 {
        return Err(MappingError::out_of_range(
            columns::YEARS_TO_MATURITY,
            row.get(columns::YEARS_TO_MATURITY),
            "must be a finite, non-negative number of years",
        ));
    }
    if discount_factor.is_sign_negative() && !discount_factor.is_zero() {
        return Err(MappingError::out_of_range(
            columns::DISCOUNT_FACTOR,
            row.get(columns::DISCOUNT_FACTOR),
            "must not be negative",
        ));
    }
    Ok(())
}

// =============================================================================
// ROW FAILURE
// =============================================================================

/// A row that failed to map, with enough context to log and skip it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowFailure {
    /// 1-based position of the row among the data rows.
    pub row: usize,
    /// Bond identifier, when the row had one.
    pub bond_id: Option<String>,
    /// Column that failed.
    pub field: &'static str,
    /// Text that failed.
    pub value: String,
    /// Rendered error message.
    pub message: String,
    #[serde(skip)]
    error: MappingError,
}

impl RowFailure {
    /// Builds a failure for the row at 1-based position `row`.
    pub fn new(row: usize, raw: &RawRow, error: MappingError) -> Self {
        let bond_id = Some(raw.get(columns::BOND_ID))
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        Self {
            row,
            bond_id,
            field: error.field(),
            value: error.value().to_string(),
            message: error.to_string(),
            error,
        }
    }

    /// The underlying mapping error.
    pub fn error(&self) -> &MappingError {
        &self.error
    }
}

impl fmt::Display for RowFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.bond_id {
            Some(id) => write!(f, "row {} ({}): {}", self.row, id, self.message),
            None => write!(f, "row {}: {}", self.row, self.message),
        }
    }
}

impl std::error::Error for RowFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
