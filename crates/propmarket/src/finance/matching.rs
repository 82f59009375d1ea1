use serde::{Deserialize, Serialize};

/// A lender's mortgage offering as listed in the product catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageProduct {
    pub name: String,
    pub lender: String,
    pub interest_rate_percent: f64,
    pub max_term_years: u32,
    pub min_down_payment_percent: f64,
    pub max_loan_amount: u64,
    pub min_income: f64,
    pub min_credit_score: u16,
    pub eligible_employment_types: Vec<String>,
}

/// The borrower-side inputs a product is matched against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowerProfile {
    pub monthly_income: f64,
    pub credit_score: u16,
    pub down_payment: f64,
    pub property_price: f64,
    pub employment_type: String,
}

impl BorrowerProfile {
    /// Down payment as a percentage of the target property price.
    fn down_payment_percent(&self) -> f64 {
        self.down_payment / self.property_price * 100.0
    }
}

/// A product annotated with how well the borrower fits its criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub product: MortgageProduct,
    pub match_score: u8,
    pub eligible: bool,
}

/// Score at or above which a match is considered eligible.
const ELIGIBILITY_THRESHOLD: u8 = 75;

fn score_product(product: &MortgageProduct, borrower: &BorrowerProfile) -> u8 {
    let mut score = 0;

    if borrower.monthly_income >= product.min_income {
        score += 30;
    }
    if borrower.credit_score >= product.min_credit_score {
        score += 25;
    }
    if borrower.down_payment_percent() >= product.min_down_payment_percent {
        score += 25;
    }
    if product
        .eligible_employment_types
        .iter()
        .any(|kind| kind == &borrower.employment_type)
    {
        score += 20;
    }

    score
}

/// Score every product against the borrower and return the full set, best
/// match first. Nothing is filtered out: ineligible products come back with
/// low scores so callers can still surface near misses.
///
/// Ties keep their catalog order (the sort is stable).
pub fn match_products(products: &[MortgageProduct], borrower: &BorrowerProfile) -> Vec<MatchResult> {
    let mut matches: Vec<MatchResult> = products
        .iter()
        .map(|product| {
            let match_score = score_product(product, borrower);
            MatchResult {
                product: product.clone(),
                match_score,
                eligible: match_score >= ELIGIBILITY_THRESHOLD,
            }
        })
        .collect();

    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, min_income: f64, min_credit: u16, min_down: f64) -> MortgageProduct {
        MortgageProduct {
            name: name.to_string(),
            lender: "Sample Bank".to_string(),
            interest_rate_percent: 18.5,
            max_term_years: 20,
            min_down_payment_percent: min_down,
            max_loan_amount: 50_000_000,
            min_income,
            min_credit_score: min_credit,
            eligible_employment_types: vec!["Employed".to_string(), "Self-Employed".to_string()],
        }
    }

    fn strong_borrower() -> BorrowerProfile {
        BorrowerProfile {
            monthly_income: 850_000.0,
            credit_score: 720,
            down_payment: 4_000_000.0,
            property_price: 20_000_000.0,
            employment_type: "Employed".to_string(),
        }
    }

    #[test]
    fn full_fit_scores_one_hundred() {
        let products = vec![product("NHF Loan", 500_000.0, 650, 10.0)];
        let matches = match_products(&products, &strong_borrower());

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].match_score, 100);
        assert!(matches[0].eligible);
    }

    #[test]
    fn sorted_descending_and_nothing_dropped() {
        let products = vec![
            product("Strict", 2_000_000.0, 800, 40.0),
            product("Standard", 500_000.0, 650, 10.0),
            product("Mid", 500_000.0, 800, 10.0),
        ];
        let matches = match_products(&products, &strong_borrower());

        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].product.name, "Standard");
        assert_eq!(matches[0].match_score, 100);
        assert_eq!(matches[1].product.name, "Mid");
        assert_eq!(matches[1].match_score, 75);
        assert!(matches[1].eligible);
        // Employment still matches, everything else fails.
        assert_eq!(matches[2].match_score, 20);
        assert!(!matches[2].eligible);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let products = vec![
            product("First", 500_000.0, 650, 10.0),
            product("Second", 500_000.0, 650, 10.0),
        ];
        let matches = match_products(&products, &strong_borrower());
        assert_eq!(matches[0].product.name, "First");
        assert_eq!(matches[1].product.name, "Second");
    }

    #[test]
    fn down_payment_ratio_gates_its_weight() {
        let products = vec![product("Standard", 500_000.0, 650, 25.0)];
        let mut borrower = strong_borrower();
        // 4M of 20M is 20%, below the 25% requirement.
        let matches = match_products(&products, &borrower);
        assert_eq!(matches[0].match_score, 75);

        borrower.down_payment = 5_000_000.0;
        let matches = match_products(&products, &borrower);
        assert_eq!(matches[0].match_score, 100);
    }

    #[test]
    fn unknown_employment_type_forfeits_its_weight() {
        let products = vec![product("Standard", 500_000.0, 650, 10.0)];
        let mut borrower = strong_borrower();
        borrower.employment_type = "Student".to_string();
        let matches = match_products(&products, &borrower);
        assert_eq!(matches[0].match_score, 80);
        assert!(matches[0].eligible);
    }
}
