use serde::{Deserialize, Serialize};

use super::round_currency;
use crate::error::InvalidInput;

/// Terms of a fixed-rate loan to amortize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: u32,
}

impl LoanRequest {
    fn validate(&self) -> Result<(), InvalidInput> {
        if self.principal <= 0.0 {
            return Err(InvalidInput::NonPositivePrincipal(self.principal));
        }
        if self.annual_rate_percent < 0.0 {
            return Err(InvalidInput::NegativeRate(self.annual_rate_percent));
        }
        if self.term_years == 0 {
            return Err(InvalidInput::ZeroTerm);
        }
        Ok(())
    }

    fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }

    fn payment_count(&self) -> u32 {
        self.term_years * 12
    }
}

/// Summary figures for a fully amortized fixed-rate loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationResult {
    pub monthly_payment: u64,
    pub total_payment: u64,
    pub total_interest: u64,
}

/// One month of an amortization schedule: how the payment splits between
/// interest and principal, and the balance left afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationPeriod {
    pub month: u32,
    pub interest: u64,
    pub principal: u64,
    pub balance: u64,
}

/// Equal monthly payment for the requested terms, before rounding. Falls
/// back to straight-line repayment when the rate is zero, where the annuity
/// formula would divide by zero.
fn monthly_payment(request: &LoanRequest) -> f64 {
    let r = request.monthly_rate();
    let n = request.payment_count();
    if r == 0.0 {
        return request.principal / f64::from(n);
    }
    let growth = (1.0 + r).powi(n as i32);
    request.principal * r * growth / (growth - 1.0)
}

/// Compute the monthly payment and lifetime totals for a fixed-rate loan.
///
/// All figures are rounded to whole currency units.
pub fn amortize(request: &LoanRequest) -> Result<AmortizationResult, InvalidInput> {
    request.validate()?;

    let payment = monthly_payment(request);
    let total = payment * f64::from(request.payment_count());

    Ok(AmortizationResult {
        monthly_payment: round_currency(payment),
        total_payment: round_currency(total),
        total_interest: round_currency(total - request.principal),
    })
}

/// Month-by-month breakdown of the loan: each entry shows the interest and
/// principal portion of that month's payment and the remaining balance.
///
/// The running balance is carried at full precision and rounded per entry,
/// so the final balance lands on zero.
pub fn amortization_schedule(
    request: &LoanRequest,
) -> Result<Vec<AmortizationPeriod>, InvalidInput> {
    request.validate()?;

    let r = request.monthly_rate();
    let n = request.payment_count();
    let payment = monthly_payment(request);

    let mut schedule = Vec::with_capacity(n as usize);
    let mut balance = request.principal;
    for month in 1..=n {
        let interest = balance * r;
        let principal = payment - interest;
        balance = (balance - principal).max(0.0);
        schedule.push(AmortizationPeriod {
            month,
            interest: round_currency(interest),
            principal: round_currency(principal),
            balance: round_currency(balance),
        });
    }

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_loan() -> LoanRequest {
        LoanRequest {
            principal: 5_000_000.0,
            annual_rate_percent: 15.0,
            term_years: 20,
        }
    }

    #[test]
    fn amortize_matches_annuity_formula() {
        let request = standard_loan();
        let result = amortize(&request).expect("valid loan");

        let r = 15.0 / 100.0 / 12.0;
        let growth = (1.0_f64 + r).powi(240);
        let expected = 5_000_000.0 * r * growth / (growth - 1.0);

        assert_eq!(result.monthly_payment, expected.round() as u64);
        // Sanity band around the known figure for these terms.
        assert!(result.monthly_payment > 65_000 && result.monthly_payment < 66_500);
        assert_eq!(result.total_payment, (expected * 240.0).round() as u64);
        assert_eq!(
            result.total_interest,
            (expected * 240.0 - 5_000_000.0).round() as u64
        );
    }

    #[test]
    fn zero_rate_is_straight_line() {
        let request = LoanRequest {
            principal: 2_400_000.0,
            annual_rate_percent: 0.0,
            term_years: 10,
        };
        let result = amortize(&request).expect("valid loan");
        assert_eq!(result.monthly_payment, 20_000);
        assert_eq!(result.total_payment, 2_400_000);
        assert_eq!(result.total_interest, 0);
    }

    #[test]
    fn interest_is_zero_only_at_zero_rate() {
        let mut request = standard_loan();
        assert!(amortize(&request).expect("valid").total_interest > 0);
        request.annual_rate_percent = 0.0;
        assert_eq!(amortize(&request).expect("valid").total_interest, 0);
    }

    #[test]
    fn rejects_degenerate_terms() {
        let mut request = standard_loan();
        request.term_years = 0;
        assert!(matches!(amortize(&request), Err(InvalidInput::ZeroTerm)));

        let mut request = standard_loan();
        request.principal = 0.0;
        assert!(matches!(
            amortize(&request),
            Err(InvalidInput::NonPositivePrincipal(_))
        ));

        let mut request = standard_loan();
        request.annual_rate_percent = -1.0;
        assert!(matches!(
            amortize(&request),
            Err(InvalidInput::NegativeRate(_))
        ));
    }

    #[test]
    fn schedule_retires_the_balance() {
        let request = standard_loan();
        let schedule = amortization_schedule(&request).expect("valid loan");

        assert_eq!(schedule.len(), 240);
        assert_eq!(schedule.first().expect("first entry").month, 1);
        assert_eq!(schedule.last().expect("last entry").balance, 0);

        // Interest portion shrinks as the balance declines.
        assert!(schedule[0].interest > schedule[239].interest);
        // First month's interest is exactly the monthly rate on the principal.
        assert_eq!(schedule[0].interest, (5_000_000.0 * 0.0125_f64).round() as u64);
    }

    #[test]
    fn zero_rate_schedule_has_no_interest() {
        let request = LoanRequest {
            principal: 1_200_000.0,
            annual_rate_percent: 0.0,
            term_years: 1,
        };
        let schedule = amortization_schedule(&request).expect("valid loan");
        assert_eq!(schedule.len(), 12);
        assert!(schedule.iter().all(|entry| entry.interest == 0));
        assert!(schedule.iter().all(|entry| entry.principal == 100_000));
        assert_eq!(schedule.last().expect("last entry").balance, 0);
    }
}
