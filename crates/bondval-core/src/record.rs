//! Bond position record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rate::RateSpec;
use crate::types::{CreditRating, InstrumentType, PaymentFrequency};

/// A single bond position, as read from one row of a position file.
///
/// Records are built once by the mapper and read by the valuation engine;
/// there is no way to change a field after construction. The period count and
/// periodic coupon rate are computed on every call from the stored fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondRecord {
    bond_id: String,
    issuer: String,
    rate: RateSpec,
    face_value: Decimal,
    payment_frequency: PaymentFrequency,
    credit_rating: CreditRating,
    instrument_type: InstrumentType,
    years_to_maturity: f64,
    discount_factor: Decimal,
    desk_notes: Option<String>,
}

impl BondRecord {
    /// Creates a record with the given identity and rate.
    ///
    /// The remaining fields start as a standard bond with zero face value,
    /// no payments, AAA rating, zero years to maturity and a discount factor
    /// of one; set them with the `with_*` methods.
    pub fn new(bond_id: impl Into<String>, issuer: impl Into<String>, rate: RateSpec) -> Self {
        Self {
            bond_id: bond_id.into(),
            issuer: issuer.into(),
            rate,
            face_value: Decimal::ZERO,
            payment_frequency: PaymentFrequency::None,
            credit_rating: CreditRating::AAA,
            instrument_type: InstrumentType::Standard,
            years_to_maturity: 0.0,
            discount_factor: Decimal::ONE,
            desk_notes: None,
        }
    }

    /// Sets the face value.
    #[must_use]
    pub fn with_face_value(mut self, face_value: Decimal) -> Self {
        self.face_value = face_value;
        self
    }

    /// Sets the payment frequency.
    #[must_use]
    pub fn with_payment_frequency(mut self, frequency: PaymentFrequency) -> Self {
        self.payment_frequency = frequency;
        self
    }

    /// Sets the credit rating.
    #[must_use]
    pub fn with_credit_rating(mut self, rating: CreditRating) -> Self {
        self.credit_rating = rating;
        self
    }

    /// Sets the instrument type.
    #[must_use]
    pub fn with_instrument_type(mut self, instrument_type: InstrumentType) -> Self {
        self.instrument_type = instrument_type;
        self
    }

    /// Sets the years remaining to maturity.
    #[must_use]
    pub fn with_years_to_maturity(mut self, years: f64) -> Self {
        self.years_to_maturity = years;
        self
    }

    /// Sets the discount factor.
    #[must_use]
    pub fn with_discount_factor(mut self, discount_factor: Decimal) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    /// Sets the desk notes.
    #[must_use]
    pub fn with_desk_notes(mut self, notes: Option<String>) -> Self {
        self.desk_notes = notes;
        self
    }

    /// Bond identifier.
    pub fn bond_id(&self) -> &str {
        &self.bond_id
    }

    /// Issuer name.
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Coupon rate.
    pub fn rate(&self) -> &RateSpec {
        &self.rate
    }

    /// Face (par) value.
    pub fn face_value(&self) -> Decimal {
        self.face_value
    }

    /// Coupon payment frequency.
    pub fn payment_frequency(&self) -> PaymentFrequency {
        self.payment_frequency
    }

    /// Credit rating.
    pub fn credit_rating(&self) -> CreditRating {
        self.credit_rating
    }

    /// Valuation convention.
    pub fn instrument_type(&self) -> InstrumentType {
        self.instrument_type
    }

    /// Years remaining to maturity; may be fractional.
    pub fn years_to_maturity(&self) -> f64 {
        self.years_to_maturity
    }

    /// Multiplier applied to the computed value.
    pub fn discount_factor(&self) -> Decimal {
        self.discount_factor
    }

    /// Free-text notes from the trading desk.
    pub fn desk_notes(&self) -> Option<&str> {
        self.desk_notes.as_deref()
    }

    /// Number of coupon periods until maturity.
    ///
    /// Zero when there are no periodic payments, otherwise
    /// `ceil(years_to_maturity * payments_per_year)`. A negative maturity
    /// yields a negative count; it is not clamped.
    pub fn total_payment_periods(&self) -> i32 {
        if self.payment_frequency.is_none() {
            return 0;
        }
        let per_year = f64::from(self.payment_frequency.payments_per_year());
        let periods = self.years_to_maturity * per_year;
        periods.ceil() as i32
    }

    /// Effective rate divided by the number of payments per year.
    ///
    /// Zero when there are no periodic payments.
    pub fn periodic_coupon_rate(&self) -> Decimal {
        if self.payment_frequency.is_none() {
            return Decimal::ZERO;
        }
        self.rate.effective_rate() / Decimal::from(self.payment_frequency.payments_per_year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(frequency: PaymentFrequency, years: f64) -> BondRecord {
        BondRecord::new("B1", "Issuer", RateSpec::parse("4%"))
            .with_payment_frequency(frequency)
            .with_years_to_maturity(years)
    }

    #[test]
    fn test_periods_semi_annual_fractional() {
        assert_eq!(record(PaymentFrequency::SemiAnnual, 5.25).total_payment_periods(), 11);
    }

    #[test]
    fn test_periods_by_frequency() {
        assert_eq!(record(PaymentFrequency::Annual, 3.0).total_payment_periods(), 3);
        assert_eq!(record(PaymentFrequency::Annual, 3.1).total_payment_periods(), 4);
        assert_eq!(record(PaymentFrequency::Quarterly, 2.5).total_payment_periods(), 10);
        assert_eq!(record(PaymentFrequency::None, 10.0).total_payment_periods(), 0);
    }

    #[test]
    fn test_periods_negative_maturity() {
        assert_eq!(record(PaymentFrequency::Annual, -2.0).total_payment_periods(), -2);
    }

    #[test]
    fn test_periodic_coupon_rate() {
        assert_eq!(record(PaymentFrequency::SemiAnnual, 1.0).periodic_coupon_rate(), dec!(0.02));
        assert_eq!(record(PaymentFrequency::Quarterly, 1.0).periodic_coupon_rate(), dec!(0.01));
        assert_eq!(record(PaymentFrequency::None, 1.0).periodic_coupon_rate(), Decimal::ZERO);
    }

    #[test]
    fn test_periodic_rate_uses_inflation_spread() {
        let record = BondRecord::new("IL1", "Treasury", RateSpec::parse("Inflation+0.92%"))
            .with_payment_frequency(PaymentFrequency::Annual);
        assert_eq!(record.periodic_coupon_rate(), dec!(0.0092));
    }

    #[test]
    fn test_builder_defaults() {
        let record = BondRecord::new("B1", "Issuer", RateSpec::default());
        assert_eq!(record.discount_factor(), Decimal::ONE);
        assert_eq!(record.instrument_type(), InstrumentType::Standard);
        assert_eq!(record.desk_notes(), None);
    }
}
