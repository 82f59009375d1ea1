use serde::{Deserialize, Serialize};

use super::round_currency;
use crate::error::InvalidInput;

/// Underwriting assumptions behind the affordability analysis.
///
/// These are marketplace policy figures, deliberately independent of any
/// specific product the user may be looking at; callers comparing against a
/// chosen product should override them with that product's actual terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityAssumptions {
    /// Fraction of the property price paid up front.
    pub down_payment_rate: f64,
    pub annual_rate_percent: f64,
    pub term_years: u32,
    /// Share of gross monthly income available for housing (the 28% rule).
    pub housing_payment_ratio: f64,
}

impl Default for AffordabilityAssumptions {
    fn default() -> Self {
        Self {
            down_payment_rate: 0.10,
            annual_rate_percent: 15.0,
            term_years: 20,
            housing_payment_ratio: 0.28,
        }
    }
}

/// How a target property price relates to what the borrower can support.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityResult {
    pub affordable: bool,
    /// `min(100, max supportable price / target price)` as a percentage.
    pub affordability_score: u8,
    pub max_property_price: u64,
    pub recommended_down_payment: u64,
    pub estimated_monthly_payment: u64,
    /// Expenses over income, as a percentage with two-decimal precision.
    pub debt_to_income_ratio: f64,
}

/// Annuity payment for a principal at the given monthly rate over `n`
/// payments, straight-line at zero rate.
fn annuity_payment(principal: f64, monthly_rate: f64, payments: u32) -> f64 {
    if monthly_rate == 0.0 {
        return principal / f64::from(payments);
    }
    let growth = (1.0 + monthly_rate).powi(payments as i32);
    principal * monthly_rate * growth / (growth - 1.0)
}

/// Largest principal whose annuity payment fits within `payment`; the
/// annuity formula inverted for the principal.
fn max_principal(payment: f64, monthly_rate: f64, payments: u32) -> f64 {
    if monthly_rate == 0.0 {
        return payment * f64::from(payments);
    }
    let growth = (1.0 + monthly_rate).powi(payments as i32);
    payment * (growth - 1.0) / (monthly_rate * growth)
}

/// Affordability analysis under the default marketplace assumptions.
pub fn analyze_affordability(
    monthly_income: f64,
    monthly_expenses: f64,
    property_price: f64,
) -> Result<AffordabilityResult, InvalidInput> {
    analyze_affordability_with(
        monthly_income,
        monthly_expenses,
        property_price,
        &AffordabilityAssumptions::default(),
    )
}

/// Affordability analysis under caller-supplied assumptions.
pub fn analyze_affordability_with(
    monthly_income: f64,
    monthly_expenses: f64,
    property_price: f64,
    assumptions: &AffordabilityAssumptions,
) -> Result<AffordabilityResult, InvalidInput> {
    if monthly_income <= 0.0 {
        return Err(InvalidInput::NonPositiveIncome(monthly_income));
    }
    if monthly_expenses < 0.0 {
        return Err(InvalidInput::NegativeExpenses(monthly_expenses));
    }
    if property_price <= 0.0 {
        return Err(InvalidInput::NonPositivePropertyPrice(property_price));
    }
    if assumptions.term_years == 0 {
        return Err(InvalidInput::ZeroTerm);
    }
    if !(0.0..1.0).contains(&assumptions.down_payment_rate) {
        return Err(InvalidInput::DownPaymentRateOutOfRange(
            assumptions.down_payment_rate,
        ));
    }

    let monthly_rate = assumptions.annual_rate_percent / 100.0 / 12.0;
    let payments = assumptions.term_years * 12;

    let max_housing_payment = monthly_income * assumptions.housing_payment_ratio;
    let max_loan = max_principal(max_housing_payment, monthly_rate, payments);
    let max_property_price = max_loan / (1.0 - assumptions.down_payment_rate);

    let financed = property_price * (1.0 - assumptions.down_payment_rate);
    let estimated_payment = annuity_payment(financed, monthly_rate, payments);

    let score = (max_property_price / property_price * 100.0).round();

    Ok(AffordabilityResult {
        affordable: property_price <= max_property_price,
        affordability_score: score.min(100.0) as u8,
        max_property_price: round_currency(max_property_price),
        recommended_down_payment: round_currency(property_price * assumptions.down_payment_rate),
        estimated_monthly_payment: round_currency(estimated_payment),
        debt_to_income_ratio: (monthly_expenses / monthly_income * 10_000.0).round() / 100.0,
    })
}
