//! Instrument type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Valuation convention applied to a position.
///
/// Serialized with the labels used in result files (`Bond`, `InflationLinked`,
/// `ZeroCoupon`). Position files use a different vocabulary, see [`label`].
///
/// [`label`]: InstrumentType::label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum InstrumentType {
    /// Standard fixed-coupon bond.
    #[serde(rename = "Bond")]
    Standard,
    /// Bond with coupon linked to an inflation index.
    InflationLinked,
    /// Bond paying no periodic interest.
    ZeroCoupon,
}

impl InstrumentType {
    /// Returns the label used in position files.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Bond",
            Self::InflationLinked => "Inflation-Linked",
            Self::ZeroCoupon => "Zero-Coupon",
        }
    }

    /// Returns the label used in result files.
    #[must_use]
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Standard => "Bond",
            Self::InflationLinked => "InflationLinked",
            Self::ZeroCoupon => "ZeroCoupon",
        }
    }
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(InstrumentType::Standard.label(), "Bond");
        assert_eq!(InstrumentType::InflationLinked.label(), "Inflation-Linked");
        assert_eq!(InstrumentType::ZeroCoupon.wire_name(), "ZeroCoupon");
    }

    #[test]
    fn test_serde_uses_wire_name() {
        let json = serde_json::to_string(&InstrumentType::Standard).unwrap();
        assert_eq!(json, "\"Bond\"");
        let parsed: InstrumentType = serde_json::from_str("\"InflationLinked\"").unwrap();
        assert_eq!(parsed, InstrumentType::InflationLinked);
    }
}
