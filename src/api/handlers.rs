//! HTTP request handlers for the Diversity Analytics Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::DiversityEngine;

use super::request::AnalyticsRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analytics/diversity", post(analytics_handler))
        .with_state(state)
}

/// Handler for POST /analytics/diversity.
///
/// Accepts a roster plus reporting period and returns the computed
/// diversity metrics.
async fn analytics_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyticsRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing analytics request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let (company_id, period, dataset) = request.into_dataset();
    let engine = DiversityEngine::in_memory(state.config().clone(), dataset);

    let start_time = Instant::now();
    match engine.compute_diversity_metrics(&company_id, &period) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                company_id = %company_id,
                total_employees = result.totals.total_employees,
                rating = ?result.performance.rating,
                duration_us = duration.as_micros(),
                "Analytics computed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                company_id = %company_id,
                error = %err,
                "Analytics computation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::{EmployeeRequest, PeriodRequest};
    use crate::config::ConfigLoader;
    use crate::models::{AnalyticsResult, EmploymentStatus, Ethnicity, Gender};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn employee_request(id: &str, gender: Gender) -> EmployeeRequest {
        EmployeeRequest {
            id: id.to_string(),
            full_name: id.to_string(),
            gender,
            ethnicity: Ethnicity::White,
            has_disability: false,
            disability_type: None,
            department: Some("Engineering".to_string()),
            compensation: None,
            status: EmploymentStatus::Active,
            position_id: None,
        }
    }

    fn create_valid_request() -> AnalyticsRequest {
        AnalyticsRequest {
            company_id: "acme".to_string(),
            period: PeriodRequest {
                start_date: make_date("2025-01-01"),
                end_date: make_date("2025-12-31"),
            },
            employees: vec![
                employee_request("emp_001", Gender::Female),
                employee_request("emp_002", Gender::Male),
            ],
            positions: vec![],
            previous_snapshot: None,
        }
    }

    async fn post_json(router: Router, body: String) -> axum::response::Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/analytics/diversity")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let response = post_json(router, body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: AnalyticsResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.company_id, "acme");
        assert_eq!(result.totals.total_employees, 2);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = post_json(router, "{invalid json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_400() {
        let router = create_router(create_test_state());

        // No company_id
        let body = r#"{
            "period": {"start_date": "2025-01-01", "end_date": "2025-12-31"},
            "employees": []
        }"#;

        let response = post_json(router, body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert!(
            error.message.contains("missing field")
                || error.message.to_lowercase().contains("company_id"),
            "Expected missing-field error, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_empty_roster_returns_400() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.employees.clear();
        let body = serde_json::to_string(&request).unwrap();

        let response = post_json(router, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "NO_ACTIVE_EMPLOYEES");
    }

    #[tokio::test]
    async fn test_inverted_period_returns_400() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.period = PeriodRequest {
            start_date: make_date("2025-12-31"),
            end_date: make_date("2025-01-01"),
        };
        let body = serde_json::to_string(&request).unwrap();

        let response = post_json(router, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_PERIOD");
    }
}
