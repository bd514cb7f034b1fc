//! Credit rating scale.

use serde::{Deserialize, Serialize};

/// Credit rating on the 22-grade scale from AAA down to D.
///
/// Variant names spell notches out (`AAPlus`, `BBBMinus`), which is also the
/// form position files are matched against once `+`/`-` have been expanded.
/// The ordering is from highest quality (AAA) to lowest (D).
///
/// # Examples
///
/// ```
/// use bondval_core::CreditRating;
///
/// let rating = CreditRating::from_name("bbbminus").unwrap();
/// assert_eq!(rating, CreditRating::BBBMinus);
/// assert_eq!(rating.notation(), "BBB-");
/// assert!(rating.is_investment_grade());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CreditRating {
    /// Highest quality
    AAA = 1,
    /// AA+
    AAPlus = 2,
    /// AA
    AA = 3,
    /// AA-
    AAMinus = 4,
    /// A+
    APlus = 5,
    /// A
    A = 6,
    /// A-
    AMinus = 7,
    /// BBB+
    BBBPlus = 8,
    /// BBB
    BBB = 9,
    /// BBB- (lowest investment grade)
    BBBMinus = 10,
    /// BB+ (highest high yield)
    BBPlus = 11,
    /// BB
    BB = 12,
    /// BB-
    BBMinus = 13,
    /// B+
    BPlus = 14,
    /// B
    B = 15,
    /// B-
    BMinus = 16,
    /// CCC+
    CCCPlus = 17,
    /// CCC
    CCC = 18,
    /// CCC-
    CCCMinus = 19,
    /// CC
    CC = 20,
    /// C
    C = 21,
    /// Default
    D = 22,
}

impl CreditRating {
    /// Every grade, best first.
    pub const ALL: [CreditRating; 22] = [
        Self::AAA,
        Self::AAPlus,
        Self::AA,
        Self::AAMinus,
        Self::APlus,
        Self::A,
        Self::AMinus,
        Self::BBBPlus,
        Self::BBB,
        Self::BBBMinus,
        Self::BBPlus,
        Self::BB,
        Self::BBMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CCCPlus,
        Self::CCC,
        Self::CCCMinus,
        Self::CC,
        Self::C,
        Self::D,
    ];

    /// Returns the numeric score (1 = AAA, 22 = D).
    #[must_use]
    pub fn score(&self) -> u8 {
        *self as u8
    }

    /// Returns true if this is investment grade (BBB- or better).
    #[must_use]
    pub fn is_investment_grade(&self) -> bool {
        *self <= CreditRating::BBBMinus
    }

    /// Returns true if this is high yield (BB+ down to C).
    #[must_use]
    pub fn is_high_yield(&self) -> bool {
        *self >= CreditRating::BBPlus && *self <= CreditRating::C
    }

    /// Returns the variant name (`AAPlus`).
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AAA => "AAA",
            Self::AAPlus => "AAPlus",
            Self::AA => "AA",
            Self::AAMinus => "AAMinus",
            Self::APlus => "APlus",
            Self::A => "A",
            Self::AMinus => "AMinus",
            Self::BBBPlus => "BBBPlus",
            Self::BBB => "BBB",
            Self::BBBMinus => "BBBMinus",
            Self::BBPlus => "BBPlus",
            Self::BB => "BB",
            Self::BBMinus => "BBMinus",
            Self::BPlus => "BPlus",
            Self::B => "B",
            Self::BMinus => "BMinus",
            Self::CCCPlus => "CCCPlus",
            Self::CCC => "CCC",
            Self::CCCMinus => "CCCMinus",
            Self::CC => "CC",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Returns the agency-style notation (`AA+`).
    #[must_use]
    pub fn notation(&self) -> &'static str {
        match self {
            Self::AAA => "AAA",
            Self::AAPlus => "AA+",
            Self::AA => "AA",
            Self::AAMinus => "AA-",
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BBBPlus => "BBB+",
            Self::BBB => "BBB",
            Self::BBBMinus => "BBB-",
            Self::BBPlus => "BB+",
            Self::BB => "BB",
            Self::BBMinus => "BB-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CCCPlus => "CCC+",
            Self::CCC => "CCC",
            Self::CCCMinus => "CCC-",
            Self::CC => "CC",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Looks a grade up by variant name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|rating| rating.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for CreditRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation())
    }
}
