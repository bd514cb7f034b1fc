//! Payment frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coupon payment frequency.
///
/// The discriminant is the number of payments per year, so `None` doubles as
/// "no periodic payments".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum PaymentFrequency {
    /// No periodic payments
    #[default]
    None = 0,
    /// Annual payments (1 per year)
    Annual = 1,
    /// Semi-annual payments (2 per year)
    SemiAnnual = 2,
    /// Quarterly payments (4 per year)
    Quarterly = 4,
}

impl PaymentFrequency {
    /// Returns the number of payments per year.
    #[must_use]
    pub fn payments_per_year(&self) -> u32 {
        *self as u32
    }

    /// Returns true if there are no periodic payments.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, PaymentFrequency::None)
    }

    /// Returns the label used in position files.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaymentFrequency::None => "None",
            PaymentFrequency::Annual => "Annual",
            PaymentFrequency::SemiAnnual => "Semi-Annual",
            PaymentFrequency::Quarterly => "Quarterly",
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
