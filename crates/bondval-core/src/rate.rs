//! Rate expressions.
//!
//! Position files carry the coupon as free text: either a plain percentage
//! (`"3.10%"`) or a spread over inflation (`"Inflation+0.92%"`). [`RateSpec::parse`]
//! turns that text into a structured rate and never fails; text it cannot read
//! becomes a zero rate with the original string kept for display.

use std::fmt;
use std::str::FromStr;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const INFLATION_PREFIX: &str = "Inflation";
const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Structured form of a rate expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSpec {
    base_value: Decimal,
    is_inflation_linked: bool,
    inflation_spread: Option<Decimal>,
    original_text: String,
}

impl RateSpec {
    /// Parses a rate expression.
    ///
    /// - `"3.10%"` gives a fixed rate of 0.031.
    /// - `"Inflation+0.92%"` gives an inflation-linked rate with spread 0.0092.
    /// - `"Inflation-0.50%"` gives a spread of -0.005.
    /// - Empty or unreadable text gives a zero rate.
    ///
    /// The percent sign is optional and the decimal point is always `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bondval_core::RateSpec;
    /// use rust_decimal::Decimal;
    ///
    /// let rate = RateSpec::parse("Inflation-0.50%");
    /// assert!(rate.is_inflation_linked());
    /// assert_eq!(rate.effective_rate(), Decimal::new(-5, 3));
    /// assert_eq!(rate.original_text(), "Inflation-0.50%");
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut spec = Self::zero(text);

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return spec;
        }

        if has_inflation_prefix(trimmed) {
            spec.is_inflation_linked = true;

            if let Some(idx) = trimmed.find(['+', '-']) {
                let negative = trimmed[idx..].starts_with('-');
                if let Some(magnitude) = parse_percent(&trimmed[idx + 1..]) {
                    let signed = if negative { -magnitude } else { magnitude };
                    let spread = signed / ONE_HUNDRED;
                    spec.inflation_spread = Some(spread);
                    spec.base_value = spread;
                }
            }
        } else if let Some(value) = parse_percent(trimmed) {
            spec.base_value = value / ONE_HUNDRED;
        } else {
            debug!("Unreadable rate {trimmed:?} treated as zero");
        }

        spec
    }

    /// A zero, non-inflation-linked rate remembering `original_text`.
    #[must_use]
    pub fn zero(original_text: impl Into<String>) -> Self {
        Self {
            base_value: Decimal::ZERO,
            is_inflation_linked: false,
            inflation_spread: None,
            original_text: original_text.into(),
        }
    }

    /// A fixed rate given as a fraction (0.031 for 3.1%).
    #[must_use]
    pub fn fixed(rate: Decimal) -> Self {
        Self {
            base_value: rate,
            is_inflation_linked: false,
            inflation_spread: None,
            original_text: format!("{}%", (rate * ONE_HUNDRED).normalize()),
        }
    }

    /// An inflation-linked rate with the spread given as a fraction.
    #[must_use]
    pub fn inflation_linked(spread: Decimal) -> Self {
        let pct = (spread * ONE_HUNDRED).normalize();
        let original_text = if spread.is_sign_negative() {
            format!("{INFLATION_PREFIX}-{}%", pct.abs())
        } else {
            format!("{INFLATION_PREFIX}+{pct}%")
        };
        Self {
            base_value: spread,
            is_inflation_linked: true,
            inflation_spread: Some(spread),
            original_text,
        }
    }

    /// The parsed numeric rate as a fraction.
    #[must_use]
    pub fn base_value(&self) -> Decimal {
        self.base_value
    }

    /// Whether the rate is a spread over inflation.
    #[must_use]
    pub fn is_inflation_linked(&self) -> bool {
        self.is_inflation_linked
    }

    /// The signed spread over inflation, when one was parsed.
    #[must_use]
    pub fn inflation_spread(&self) -> Option<Decimal> {
        self.inflation_spread
    }

    /// The text the rate was parsed from, verbatim.
    #[must_use]
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// The rate used for valuation: the spread for inflation-linked rates
    /// (zero if none parsed), the base value otherwise.
    #[must_use]
    pub fn effective_rate(&self) -> Decimal {
        if self.is_inflation_linked {
            self.inflation_spread.unwrap_or(Decimal::ZERO)
        } else {
            self.base_value
        }
    }
}

impl Default for RateSpec {
    fn default() -> Self {
        Self::zero(String::new())
    }
}

impl fmt::Display for RateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_text)
    }
}

/// Parses a locale-invariant decimal, accepting scientific notation.
///
/// Returns `None` for empty text and for grouping separators such as `1,000`.
#[must_use]
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    // Plain or scientific notation only; the decimal parser would skip `_`
    let well_formed = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if text.is_empty() || !well_formed {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

fn parse_percent(text: &str) -> Option<Decimal> {
    let text = text.trim();
    let text = text.strip_suffix('%').unwrap_or(text);
    parse_decimal(text)
}

fn has_inflation_prefix(text: &str) -> bool {
    text.get(..INFLATION_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(INFLATION_PREFIX))
}
