//! Pure financial computations: every operation here is stateless,
//! deterministic, and safe to call from any number of threads at once.

pub mod affordability;
pub mod loan;
pub mod matching;
pub mod rent;

pub use affordability::{
    analyze_affordability, analyze_affordability_with, AffordabilityAssumptions,
    AffordabilityResult,
};
pub use loan::{amortization_schedule, amortize, AmortizationPeriod, AmortizationResult, LoanRequest};
pub use matching::{match_products, BorrowerProfile, MatchResult, MortgageProduct};
pub use rent::{predict_rent, PropertyFeatures, RentFactors, RentPrediction, RentRange};

/// Round a currency amount to whole units. Marketplace figures are presented
/// without sub-unit precision.
pub(crate) fn round_currency(amount: f64) -> u64 {
    amount.round() as u64
}
