use metrics_exporter_prometheus::PrometheusHandle;
use propmarket::finance::MortgageProduct;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Built-in product catalog used when a match request does not carry its own
/// product list. In production the catalog lives in the document store; this
/// sample keeps the endpoint and demo usable standalone.
pub(crate) fn sample_product_catalog() -> Vec<MortgageProduct> {
    vec![
        MortgageProduct {
            name: "NHF Starter".to_string(),
            lender: "Federal Mortgage Bank".to_string(),
            interest_rate_percent: 6.0,
            max_term_years: 30,
            min_down_payment_percent: 10.0,
            max_loan_amount: 15_000_000,
            min_income: 200_000.0,
            min_credit_score: 550,
            eligible_employment_types: vec!["Employed".to_string(), "Self-Employed".to_string()],
        },
        MortgageProduct {
            name: "Prime Home".to_string(),
            lender: "Sterling Bank".to_string(),
            interest_rate_percent: 17.5,
            max_term_years: 20,
            min_down_payment_percent: 20.0,
            max_loan_amount: 100_000_000,
            min_income: 750_000.0,
            min_credit_score: 680,
            eligible_employment_types: vec![
                "Employed".to_string(),
                "Self-Employed".to_string(),
                "Business Owner".to_string(),
            ],
        },
        MortgageProduct {
            name: "Diaspora Advantage".to_string(),
            lender: "UBA".to_string(),
            interest_rate_percent: 12.0,
            max_term_years: 25,
            min_down_payment_percent: 15.0,
            max_loan_amount: 150_000_000,
            min_income: 1_200_000.0,
            min_credit_score: 700,
            eligible_employment_types: vec!["Employed".to_string(), "Business Owner".to_string()],
        },
        MortgageProduct {
            name: "Flex Build".to_string(),
            lender: "Stanbic IBTC".to_string(),
            interest_rate_percent: 21.0,
            max_term_years: 15,
            min_down_payment_percent: 30.0,
            max_loan_amount: 250_000_000,
            min_income: 2_000_000.0,
            min_credit_score: 720,
            eligible_employment_types: vec!["Business Owner".to_string()],
        },
    ]
}
