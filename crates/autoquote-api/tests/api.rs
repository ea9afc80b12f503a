//! HTTP tests for the Autoquote API
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`:
//! - quote endpoint happy path and configuration sensitivity
//! - body validation failures (missing field, wrong type, bad JSON, content type)
//! - auxiliary routes

use autoquote_api::{create_router, AppState};
use autoquote_pricing::PricingConfig;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    create_router(AppState::new(PricingConfig::default()))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn quote_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/calculate-premium")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn corolla_2014() -> Value {
    json!({
        "make": "Toyota",
        "model": "Corolla",
        "year": 2014,
        "value": 25000,
        "deductible_percentage": 0.1,
        "broker_fee": 50
    })
}

#[tokio::test]
async fn test_quote_ten_year_old_vehicle() {
    let (status, body) = send(app(), quote_request(&corolla_2014())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["applied_rate"].as_f64(), Some(0.06));
    assert_eq!(body["calculated_premium"].as_f64(), Some(1400.0));
    assert_eq!(body["deductible_value"].as_f64(), Some(2500.0));
    assert_eq!(body["policy_limit"].as_f64(), Some(22500.0));
}

#[tokio::test]
async fn test_quote_zero_vehicle() {
    let body = json!({
        "make": "Any",
        "model": "Any",
        "year": 2024,
        "value": 0,
        "deductible_percentage": 0,
        "broker_fee": 0,
        "registration_location": null
    });
    let (status, body) = send(app(), quote_request(&body)).await;

    assert_eq!(status, StatusCode::OK);
    for field in ["applied_rate", "calculated_premium", "deductible_value", "policy_limit"] {
        assert_eq!(body[field].as_f64(), Some(0.0), "{field}");
    }
}

#[tokio::test]
async fn test_quote_response_has_exactly_four_fields() {
    let (_, body) = send(app(), quote_request(&corolla_2014())).await;
    let object = body.as_object().unwrap();

    assert_eq!(object.len(), 4);
    assert!(object.values().all(Value::is_number));
}

#[tokio::test]
async fn test_registration_location_accepted_and_ignored() {
    let mut located = corolla_2014();
    located["registration_location"] = json!("Sacramento, CA");

    let (_, plain) = send(app(), quote_request(&corolla_2014())).await;
    let (status, with_location) = send(app(), quote_request(&located)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(plain, with_location);
}

#[tokio::test]
async fn test_configuration_applied() {
    let config = PricingConfig::new(dec!(0.5), dec!(0.01));
    let app = create_router(AppState::new(config));

    let (status, body) = send(app, quote_request(&corolla_2014())).await;

    assert_eq!(status, StatusCode::OK);
    // 0.05 + 0.01 + 0.01
    assert_eq!(body["applied_rate"].as_f64(), Some(0.07));
    // 25000 * 0.07 = 1750, less 175, plus 50
    assert_eq!(body["calculated_premium"].as_f64(), Some(1625.0));
    // 25000 * 0.5 = 12500, deductible 1250
    assert_eq!(body["deductible_value"].as_f64(), Some(1250.0));
    assert_eq!(body["policy_limit"].as_f64(), Some(11250.0));
}

#[tokio::test]
async fn test_missing_field_is_validation_error() {
    let mut body = corolla_2014();
    body.as_object_mut().unwrap().remove("broker_fee");

    let (status, body) = send(app(), quote_request(&body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
    assert!(body["detail"].as_str().unwrap().contains("broker_fee"));
}

#[tokio::test]
async fn test_non_numeric_value_is_validation_error() {
    let mut body = corolla_2014();
    body["value"] = json!("twenty five thousand");

    let (status, body) = send(app(), quote_request(&body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_non_integer_year_is_validation_error() {
    let mut body = corolla_2014();
    body["year"] = json!("last year");

    let (status, _) = send(app(), quote_request(&body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_whole_number_float_year_quoted() {
    let mut body = corolla_2014();
    body["year"] = json!(2014.0);

    let (_, expected) = send(app(), quote_request(&corolla_2014())).await;
    let (status, body) = send(app(), quote_request(&body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
    assert_eq!(body["calculated_premium"].as_f64(), Some(1400.0));
}

#[tokio::test]
async fn test_integer_string_year_quoted() {
    let mut body = corolla_2014();
    body["year"] = json!("2014");

    let (status, body) = send(app(), quote_request(&body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["applied_rate"].as_f64(), Some(0.06));
    assert_eq!(body["policy_limit"].as_f64(), Some(22500.0));
}

#[tokio::test]
async fn test_fractional_year_is_validation_error() {
    let mut body = corolla_2014();
    body["year"] = json!(2014.5);

    let (status, body) = send(app(), quote_request(&body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_out_of_range_value_rejected_at_parse() {
    let mut body = corolla_2014();
    body["value"] = json!(1e30);

    let (status, body) = send(app(), quote_request(&body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/calculate-premium")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"make\": \"Toyota\","))
        .unwrap();

    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_json");
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/calculate-premium")
        .body(Body::from(corolla_2014().to_string()))
        .unwrap();

    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["error"], "unsupported_media_type");
}

#[tokio::test]
async fn test_overflow_is_unprocessable() {
    let body = json!({
        "make": "Bugatti",
        "model": "Chiron",
        "year": 1900,
        "value": "79228162514264337593543950335",
        "deductible_percentage": 0.1,
        "broker_fee": 0
    });

    let (status, body) = send(app(), quote_request(&body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "unprocessable_quote");
}

#[tokio::test]
async fn test_get_on_quote_route_not_allowed() {
    let (status, _) = send(app(), get("/calculate-premium")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_version() {
    let (status, body) = send(app(), get("/api/v1/version")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "autoquote-api");
    assert_eq!(body["version"], autoquote_common::VERSION);
}

#[tokio::test]
async fn test_pricing_config_endpoint() {
    let app = create_router(AppState::new(PricingConfig::new(dec!(0.9), dec!(0.002))));
    let (status, body) = send(app, get("/api/v1/config")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["coverage_percentage"].as_f64(), Some(0.9));
    assert_eq!(body["gis_adjustment"].as_f64(), Some(0.002));
    assert_eq!(body["reference_year"], 2024);
}
