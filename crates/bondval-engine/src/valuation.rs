//! Type-dispatched present-value computation.
//!
//! All three conventions share one shape: a growth factor applied to face
//! value, scaled by the record's discount factor.
//!
//! | Instrument | Growth factor |
//! |---|---|
//! | Standard | `(1 + periodic_coupon_rate) ^ total_payment_periods` |
//! | InflationLinked | same as Standard, result carries an advisory note |
//! | ZeroCoupon | `(1 + effective_rate) ^ years_to_maturity` |
//!
//! The growth factor and its product with face value are computed in `f64`,
//! then brought back to `Decimal` at 15 significant digits before the
//! discount factor is applied. Results match reference figures to monetary
//! rounding, not bit for bit.

use bondval_core::{BondRecord, InstrumentType, ValuationResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use tracing::warn;

/// Note attached to every inflation-linked result.
pub const INFLATION_APPROXIMATION_NOTE: &str =
    "Approximate value - actual value depends on realized inflation rates";

/// Significant digits kept when converting an `f64` figure back to `Decimal`.
const F64_SIGNIFICANT_DIGITS: u32 = 15;

/// Values a single bond record.
///
/// Implementations must be total: every record yields exactly one result,
/// and the record is never modified.
pub trait ValuationEngine: Send + Sync {
    /// Computes the valuation result for a record.
    fn value(&self, record: &BondRecord) -> ValuationResult;
}

/// The default engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardValuationEngine;

impl StandardValuationEngine {
    /// Creates the engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Present value of a record, without the surrounding result.
    #[must_use]
    pub fn present_value(&self, record: &BondRecord) -> Decimal {
        match record.instrument_type() {
            InstrumentType::Standard => fixed_coupon_value(record),
            InstrumentType::InflationLinked => inflation_linked_value(record),
            InstrumentType::ZeroCoupon => zero_coupon_value(record),
            _ => Decimal::ZERO,
        }
    }
}

impl ValuationEngine for StandardValuationEngine {
    fn value(&self, record: &BondRecord) -> ValuationResult {
        let instrument_type = record.instrument_type();
        let result = ValuationResult::new(
            record.bond_id(),
            instrument_type,
            self.present_value(record),
        );

        if instrument_type == InstrumentType::InflationLinked {
            result.with_notes(INFLATION_APPROXIMATION_NOTE)
        } else {
            result
        }
    }
}

/// Values a record with [`StandardValuationEngine`].
#[must_use]
pub fn value(record: &BondRecord) -> ValuationResult {
    StandardValuationEngine.value(record)
}

// =============================================================================
// CONVENTIONS
// =============================================================================

enum Exponent {
    Periods(i32),
    Years(f64),
}

fn fixed_coupon_value(record: &BondRecord) -> Decimal {
    compound(
        record,
        record.periodic_coupon_rate(),
        Exponent::Periods(record.total_payment_periods()),
    )
}

// Inflation data is not modelled; the spread is compounded like a fixed coupon.
fn inflation_linked_value(record: &BondRecord) -> Decimal {
    fixed_coupon_value(record)
}

fn zero_coupon_value(record: &BondRecord) -> Decimal {
    compound(
        record,
        record.rate().effective_rate(),
        Exponent::Years(record.years_to_maturity()),
    )
}

/// `(1 + rate) ^ exponent * face_value * discount_factor`.
///
/// Anything that leaves the representable range (NaN, infinity, decimal
/// overflow) values to zero.
fn compound(record: &BondRecord, rate: Decimal, exponent: Exponent) -> Decimal {
    let (Some(base), Some(face)) = (
        Decimal::ONE.checked_add(rate).and_then(|b| b.to_f64()),
        record.face_value().to_f64(),
    ) else {
        return degraded(record, "inputs not representable as f64");
    };

    let growth = match exponent {
        Exponent::Periods(periods) => base.powi(periods),
        Exponent::Years(years) => base.powf(years),
    };

    let Some(scaled) = to_decimal(growth * face) else {
        return degraded(record, "growth factor out of range");
    };

    scaled
        .checked_mul(record.discount_factor())
        .unwrap_or_else(|| degraded(record, "discounted value overflows"))
}

fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value)?
        .round_sf(F64_SIGNIFICANT_DIGITS)
        .map(|d| d.normalize())
}

fn degraded(record: &BondRecord, reason: &str) -> Decimal {
    warn!(
        bond_id = record.bond_id(),
        instrument = %record.instrument_type(),
        reason,
        "Valuation out of range, present value set to zero"
    );
    Decimal::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use bondval_core::{PaymentFrequency, RateSpec};
    use rust_decimal_macros::dec;

    fn bond(rate: &str, instrument_type: InstrumentType) -> BondRecord {
        BondRecord::new("T-1", "Test Issuer", RateSpec::parse(rate))
            .with_instrument_type(instrument_type)
            .with_face_value(dec!(1000))
            .with_discount_factor(dec!(1.0))
    }

    #[test]
    fn test_zero_coupon_reference_value() {
        let record = bond("4%", InstrumentType::ZeroCoupon).with_years_to_maturity(10.0);
        let result = value(&record);
        assert_eq!(result.present_value.round_dp(2), dec!(1480.24));
        assert_eq!(result.notes, None);
        assert_eq!(result.instrument_type, InstrumentType::ZeroCoupon);
    }

    #[test]
    fn test_zero_coupon_fractional_years() {
        let record = bond("4%", InstrumentType::ZeroCoupon).with_years_to_maturity(2.5);
        let expected = 1000.0 * 1.04f64.powf(2.5);
        let pv = value(&record).present_value.to_f64().unwrap();
        approx::assert_relative_eq!(pv, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_coupon_ignores_frequency() {
        let base = bond("4%", InstrumentType::ZeroCoupon).with_years_to_maturity(10.0);
        let quarterly = base.clone().with_payment_frequency(PaymentFrequency::Quarterly);
        assert_eq!(value(&base).present_value, value(&quarterly).present_value);
    }

    #[test]
    fn test_standard_semi_annual() {
        let record = bond("4%", InstrumentType::Standard)
            .with_payment_frequency(PaymentFrequency::SemiAnnual)
            .with_years_to_maturity(5.0);
        // 1000 * 1.02^10
        assert_eq!(value(&record).present_value.round_dp(2), dec!(1218.99));
        assert_eq!(value(&record).notes, None);
    }

    #[test]
    fn test_standard_rounds_periods_up() {
        let record = bond("4%", InstrumentType::Standard)
            .with_payment_frequency(PaymentFrequency::SemiAnnual)
            .with_years_to_maturity(5.25);
        // 11 periods
        let expected = 1000.0 * 1.02f64.powi(11);
        let pv = value(&record).present_value.to_f64().unwrap();
        approx::assert_relative_eq!(pv, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_standard_without_payments_is_face_times_discount() {
        let record = bond("4%", InstrumentType::Standard)
            .with_payment_frequency(PaymentFrequency::None)
            .with_years_to_maturity(7.0)
            .with_discount_factor(dec!(0.9));
        assert_eq!(value(&record).present_value, dec!(900));
    }

    #[test]
    fn test_discount_factor_scales_result() {
        let full = bond("3%", InstrumentType::Standard)
            .with_payment_frequency(PaymentFrequency::Annual)
            .with_years_to_maturity(4.0);
        let half = full.clone().with_discount_factor(dec!(0.5));
        assert_eq!(
            value(&half).present_value,
            value(&full).present_value * dec!(0.5)
        );
    }

    #[test]
    fn test_inflation_linked_uses_spread_and_note() {
        let record = bond("Inflation+0.92%", InstrumentType::InflationLinked)
            .with_payment_frequency(PaymentFrequency::Annual)
            .with_years_to_maturity(3.0);
        let result = value(&record);
        let expected = 1000.0 * 1.0092f64.powi(3);
        approx::assert_relative_eq!(
            result.present_value.to_f64().unwrap(),
            expected,
            max_relative = 1e-12
        );
        assert_eq!(result.notes.as_deref(), Some(INFLATION_APPROXIMATION_NOTE));
    }

    #[test]
    fn test_inflation_linked_matches_standard_formula() {
        let linked = bond("Inflation-0.50%", InstrumentType::InflationLinked)
            .with_payment_frequency(PaymentFrequency::Quarterly)
            .with_years_to_maturity(6.0);
        let fixed = bond("-0.50%", InstrumentType::Standard)
            .with_payment_frequency(PaymentFrequency::Quarterly)
            .with_years_to_maturity(6.0);
        assert_eq!(value(&linked).present_value, value(&fixed).present_value);
    }

    #[test]
    fn test_idempotent() {
        let record = bond("5.5%", InstrumentType::Standard)
            .with_payment_frequency(PaymentFrequency::Quarterly)
            .with_years_to_maturity(12.75);
        let snapshot = record.clone();
        assert_eq!(value(&record), value(&record));
        assert_eq!(record, snapshot);
    }

    #[test]
    fn test_negative_base_with_fractional_years_is_zero() {
        let record = bond("-150%", InstrumentType::ZeroCoupon).with_years_to_maturity(2.5);
        assert_eq!(value(&record).present_value, Decimal::ZERO);
    }

    #[test]
    fn test_overflow_is_zero() {
        let record = bond("900%", InstrumentType::ZeroCoupon)
            .with_face_value(Decimal::MAX)
            .with_years_to_maturity(40.0);
        assert_eq!(value(&record).present_value, Decimal::ZERO);
    }

    #[test]
    fn test_negative_maturity_is_permitted() {
        let record = bond("4%", InstrumentType::Standard)
            .with_payment_frequency(PaymentFrequency::Annual)
            .with_years_to_maturity(-1.0);
        let expected = 1000.0 / 1.04;
        approx::assert_relative_eq!(
            value(&record).present_value.to_f64().unwrap(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_engine_trait_object() {
        let engine: Box<dyn ValuationEngine> = Box::new(StandardValuationEngine::new());
        let record = bond("4%", InstrumentType::ZeroCoupon).with_years_to_maturity(1.0);
        assert_eq!(engine.value(&record).present_value, dec!(1040));
    }
}
