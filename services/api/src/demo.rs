use crate::infra::sample_product_catalog;
use clap::Args;
use propmarket::catalog;
use propmarket::error::AppError;
use propmarket::finance::{
    amortization_schedule, amortize, analyze_affordability, match_products, predict_rent,
    BorrowerProfile, LoanRequest, PropertyFeatures,
};

#[derive(Args, Debug)]
pub(crate) struct CalculateArgs {
    /// Loan principal in naira
    #[arg(long)]
    principal: f64,
    /// Annual interest rate as a percentage
    #[arg(long)]
    rate: f64,
    /// Loan term in years
    #[arg(long)]
    years: u32,
    /// Also print the first year of the amortization schedule
    #[arg(long)]
    schedule: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Borrower's gross monthly income in naira
    #[arg(long, default_value_t = 800_000.0)]
    monthly_income: f64,
    /// Borrower's monthly expenses in naira
    #[arg(long, default_value_t = 220_000.0)]
    monthly_expenses: f64,
    /// Target property price in naira
    #[arg(long, default_value_t = 25_000_000.0)]
    property_price: f64,
}

/// Thousands-separated naira amount, display only.
fn format_naira(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("\u{20a6}{grouped}")
}

pub(crate) fn run_mortgage_calculate(args: CalculateArgs) -> Result<(), AppError> {
    let request = LoanRequest {
        principal: args.principal,
        annual_rate_percent: args.rate,
        term_years: args.years,
    };
    let result = amortize(&request)?;

    println!(
        "Loan of {} at {}% over {} years",
        format_naira(args.principal.round() as u64),
        args.rate,
        args.years
    );
    println!("  monthly payment : {}", format_naira(result.monthly_payment));
    println!("  total payment   : {}", format_naira(result.total_payment));
    println!("  total interest  : {}", format_naira(result.total_interest));

    if args.schedule {
        println!("\n  month  interest     principal    balance");
        for period in amortization_schedule(&request)?.iter().take(12) {
            println!(
                "  {:>5}  {:>11}  {:>11}  {}",
                period.month,
                format_naira(period.interest),
                format_naira(period.principal),
                format_naira(period.balance)
            );
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("== Mortgage quote ==");
    let financed = args.property_price * 0.9;
    let quote = amortize(&LoanRequest {
        principal: financed,
        annual_rate_percent: 15.0,
        term_years: 20,
    })?;
    println!(
        "Financing {} of a {} property: {} per month",
        format_naira(financed.round() as u64),
        format_naira(args.property_price.round() as u64),
        format_naira(quote.monthly_payment)
    );

    println!("\n== Product matches ==");
    let borrower = BorrowerProfile {
        monthly_income: args.monthly_income,
        credit_score: 690,
        down_payment: args.property_price * 0.2,
        property_price: args.property_price,
        employment_type: "Employed".to_string(),
    };
    let catalog = sample_product_catalog();
    for result in match_products(&catalog, &borrower) {
        let verdict = if result.eligible { "eligible" } else { "not eligible" };
        println!(
            "  {:<20} {:<18} score {:>3}  {}",
            result.product.name, result.product.lender, result.match_score, verdict
        );
    }

    println!("\n== Rent estimate ==");
    let property = PropertyFeatures {
        location_state: "Lagos".to_string(),
        property_type: "Duplex".to_string(),
        bedrooms: 4,
        bathrooms: 3,
        size_sqm: 250.0,
        amenities: catalog::AMENITIES[..3].iter().map(|s| s.to_string()).collect(),
    };
    let prediction = predict_rent(&property);
    println!(
        "  {} ({}-{}) at {:.0}% confidence",
        format_naira(prediction.predicted_rent),
        format_naira(prediction.range.lower),
        format_naira(prediction.range.upper),
        prediction.confidence * 100.0
    );

    println!("\n== Affordability ==");
    let analysis = analyze_affordability(
        args.monthly_income,
        args.monthly_expenses,
        args.property_price,
    )?;
    println!(
        "  target {} vs ceiling {} -> {}",
        format_naira(args.property_price.round() as u64),
        format_naira(analysis.max_property_price),
        if analysis.affordable { "affordable" } else { "out of reach" }
    );
    println!(
        "  score {}/100, DTI {:.2}%, estimated payment {}",
        analysis.affordability_score,
        analysis.debt_to_income_ratio,
        format_naira(analysis.estimated_monthly_payment)
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naira_formatting_groups_thousands() {
        assert_eq!(format_naira(0), "\u{20a6}0");
        assert_eq!(format_naira(999), "\u{20a6}999");
        assert_eq!(format_naira(65_834), "\u{20a6}65,834");
        assert_eq!(format_naira(25_000_000), "\u{20a6}25,000,000");
    }

    #[test]
    fn demo_covers_all_operations() {
        let args = DemoArgs {
            monthly_income: 800_000.0,
            monthly_expenses: 220_000.0,
            property_price: 25_000_000.0,
        };
        run_demo(args).expect("demo completes");
    }

    #[test]
    fn calculate_prints_a_quote() {
        let args = CalculateArgs {
            principal: 5_000_000.0,
            rate: 15.0,
            years: 20,
            schedule: true,
        };
        run_mortgage_calculate(args).expect("quote completes");
    }
}
