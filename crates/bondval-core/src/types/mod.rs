//! Closed-vocabulary domain types.

mod frequency;
mod instrument;
mod rating;

pub use frequency::PaymentFrequency;
pub use instrument::InstrumentType;
pub use rating::CreditRating;
