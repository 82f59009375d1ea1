use crate::infra::{sample_product_catalog, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use propmarket::error::AppError;
use propmarket::finance::{
    amortization_schedule, amortize, analyze_affordability_with, match_products, predict_rent,
    AffordabilityAssumptions, AffordabilityResult, AmortizationPeriod, AmortizationResult,
    BorrowerProfile, LoanRequest, MatchResult, MortgageProduct, PropertyFeatures, RentPrediction,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub(crate) struct AmortizeRequest {
    #[serde(flatten)]
    pub(crate) loan: LoanRequest,
    #[serde(default)]
    pub(crate) include_schedule: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct AmortizeResponse {
    #[serde(flatten)]
    pub(crate) summary: AmortizationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) schedule: Option<Vec<AmortizationPeriod>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MatchRequest {
    pub(crate) borrower: BorrowerProfile,
    /// Optional explicit product list; the sample catalog is used otherwise.
    #[serde(default)]
    pub(crate) products: Option<Vec<MortgageProduct>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MatchResponse {
    pub(crate) matches: Vec<MatchResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AffordabilityRequest {
    pub(crate) monthly_income: f64,
    pub(crate) monthly_expenses: f64,
    pub(crate) property_price: f64,
    #[serde(default)]
    pub(crate) assumptions: Option<AffordabilityAssumptions>,
}

pub(crate) fn router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/mortgage/amortize",
            axum::routing::post(amortize_endpoint),
        )
        .route("/api/v1/mortgage/match", axum::routing::post(match_endpoint))
        .route("/api/v1/rent/estimate", axum::routing::post(rent_endpoint))
        .route(
            "/api/v1/affordability",
            axum::routing::post(affordability_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn amortize_endpoint(
    Json(payload): Json<AmortizeRequest>,
) -> Result<Json<AmortizeResponse>, AppError> {
    let summary = amortize(&payload.loan)?;
    let schedule = if payload.include_schedule {
        Some(amortization_schedule(&payload.loan)?)
    } else {
        None
    };

    Ok(Json(AmortizeResponse { summary, schedule }))
}

pub(crate) async fn match_endpoint(
    Json(payload): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let products = payload.products.unwrap_or_else(sample_product_catalog);
    let matches = match_products(&products, &payload.borrower);
    Ok(Json(MatchResponse { matches }))
}

pub(crate) async fn rent_endpoint(
    Json(features): Json<PropertyFeatures>,
) -> Result<Json<RentPrediction>, AppError> {
    Ok(Json(predict_rent(&features)))
}

pub(crate) async fn affordability_endpoint(
    Json(payload): Json<AffordabilityRequest>,
) -> Result<Json<AffordabilityResult>, AppError> {
    let assumptions = payload.assumptions.unwrap_or_default();
    let result = analyze_affordability_with(
        payload.monthly_income,
        payload.monthly_expenses,
        payload.property_price,
        &assumptions,
    )?;
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower::ServiceExt;

    #[tokio::test]
    async fn router_serves_health() {
        let request = axum::http::Request::builder()
            .uri("/health")
            .body(axum::body::Body::empty())
            .expect("request builds");

        let response = router().oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn amortize_endpoint_returns_summary() {
        let request = AmortizeRequest {
            loan: LoanRequest {
                principal: 5_000_000.0,
                annual_rate_percent: 15.0,
                term_years: 20,
            },
            include_schedule: false,
        };

        let Json(body) = amortize_endpoint(Json(request)).await.expect("quote builds");
        assert!(body.summary.monthly_payment > 0);
        assert!(body.schedule.is_none());
    }

    #[tokio::test]
    async fn amortize_endpoint_can_include_schedule() {
        let request = AmortizeRequest {
            loan: LoanRequest {
                principal: 5_000_000.0,
                annual_rate_percent: 15.0,
                term_years: 20,
            },
            include_schedule: true,
        };

        let Json(body) = amortize_endpoint(Json(request)).await.expect("quote builds");
        let schedule = body.schedule.expect("schedule returned");
        assert_eq!(schedule.len(), 240);
        assert_eq!(schedule.last().expect("last period").balance, 0);
    }

    #[tokio::test]
    async fn amortize_endpoint_rejects_zero_term() {
        let request = AmortizeRequest {
            loan: LoanRequest {
                principal: 5_000_000.0,
                annual_rate_percent: 15.0,
                term_years: 0,
            },
            include_schedule: false,
        };

        let result = amortize_endpoint(Json(request)).await;
        assert!(matches!(result, Err(AppError::Invalid(_))));
    }

    #[tokio::test]
    async fn match_endpoint_falls_back_to_sample_catalog() {
        let request = MatchRequest {
            borrower: BorrowerProfile {
                monthly_income: 800_000.0,
                credit_score: 690,
                down_payment: 5_000_000.0,
                property_price: 25_000_000.0,
                employment_type: "Employed".to_string(),
            },
            products: None,
        };

        let Json(body) = match_endpoint(Json(request)).await.expect("matches build");
        assert_eq!(body.matches.len(), sample_product_catalog().len());
        assert!(body
            .matches
            .windows(2)
            .all(|pair| pair[0].match_score >= pair[1].match_score));
    }

    #[tokio::test]
    async fn rent_endpoint_estimates_with_band() {
        let features = PropertyFeatures {
            location_state: "Lagos".to_string(),
            property_type: "Apartment".to_string(),
            bedrooms: 2,
            bathrooms: 2,
            size_sqm: 90.0,
            amenities: vec!["Parking".to_string()],
        };

        let Json(body) = rent_endpoint(Json(features)).await.expect("estimate builds");
        assert!(body.range.lower < body.predicted_rent);
        assert!(body.predicted_rent < body.range.upper);
    }

    #[tokio::test]
    async fn affordability_endpoint_honors_overrides() {
        let request = AffordabilityRequest {
            monthly_income: 700_000.0,
            monthly_expenses: 100_000.0,
            property_price: 20_000_000.0,
            assumptions: Some(AffordabilityAssumptions {
                annual_rate_percent: 5.0,
                ..AffordabilityAssumptions::default()
            }),
        };
        let Json(generous) = affordability_endpoint(Json(request))
            .await
            .expect("analysis builds");

        let request = AffordabilityRequest {
            monthly_income: 700_000.0,
            monthly_expenses: 100_000.0,
            property_price: 20_000_000.0,
            assumptions: None,
        };
        let Json(default) = affordability_endpoint(Json(request))
            .await
            .expect("analysis builds");

        assert!(generous.max_property_price > default.max_property_price);
    }
}
