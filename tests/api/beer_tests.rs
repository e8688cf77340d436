//! Beer API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use beer_catalog::shared::error::AppError;

use crate::common::{pilsen, FixedRateConverter, InMemoryBeerRepository, TestApp};

#[tokio::test]
async fn test_list_beers_returns_stored_beers() {
    let app = TestApp::new();

    let (status, body) = app.get("/beers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "Id": 1,
            "Name": "Pilsen",
            "Brewery": "Bavaria",
            "Country": "Colombia",
            "Price": 2500.0,
            "Currency": "COP"
        }])
    );
}

#[tokio::test]
async fn test_list_beers_storage_failure() {
    let app = TestApp::with(
        InMemoryBeerRepository::failing(AppError::Internal(
            "error trying to get beers from database".into(),
        )),
        FixedRateConverter::new(1.0),
    );

    let (status, body) = app.get("/beers").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "message": "error trying to get beers from database",
            "error": "internal_server_error",
            "status": 500
        })
    );
}

#[tokio::test]
async fn test_get_beer_by_id() {
    let app = TestApp::new();

    let (status, body) = app.get("/beers/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Name"], "Pilsen");
    assert_eq!(body["Price"], 2500.0);
}

#[tokio::test]
async fn test_get_beer_invalid_id() {
    let app = TestApp::new();

    let (status, body) = app.get("/beers/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "id should be a number");
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_get_beer_not_found() {
    let app = TestApp::new();

    let (status, body) = app.get("/beers/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "beer not found");
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_box_price_same_currency() {
    let app = TestApp::new();

    let (status, body) = app.get("/beers/1/boxprice?currency=COP&quantity=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "TotalPrice": 25000.0 }));
    assert_eq!(app.converter.calls(), 0);
}

#[tokio::test]
async fn test_box_price_converted() {
    let app = TestApp::new();

    let (status, body) = app.get("/beers/1/boxprice?currency=USD&quantity=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["TotalPrice"], 2500.0 * 0.0004 * 10.0);
    assert_eq!(app.converter.calls(), 1);
}

#[tokio::test]
async fn test_box_price_zero_quantity_uses_default() {
    let app = TestApp::new();

    let (status, body) = app.get("/beers/1/boxprice?currency=COP&quantity=0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "TotalPrice": 15000.0 }));
}

#[tokio::test]
async fn test_box_price_missing_quantity_rejected() {
    let app = TestApp::new();

    let (absent_status, absent) = app.get("/beers/1/boxprice?currency=COP").await;
    let (empty_status, empty) = app.get("/beers/1/boxprice?currency=COP&quantity=").await;

    assert_eq!(absent_status, StatusCode::BAD_REQUEST);
    assert_eq!(absent["message"], "quantity should be a positive number");
    assert_eq!(empty_status, StatusCode::BAD_REQUEST);
    assert_eq!(absent, empty);
}

#[tokio::test]
async fn test_box_price_missing_currency() {
    let app = TestApp::new();

    let (status, body) = app.get("/beers/1/boxprice?quantity=10").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "currency must not be empty");
}

#[tokio::test]
async fn test_box_price_invalid_quantity() {
    let app = TestApp::new();

    let (status, body) = app.get("/beers/1/boxprice?currency=USD&quantity=-2").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "quantity should be a positive number");
    assert_eq!(app.converter.calls(), 0);
}

#[tokio::test]
async fn test_box_price_invalid_id() {
    let app = TestApp::new();

    let (status, body) = app.get("/beers/x/boxprice?currency=USD&quantity=1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "id should be a number");
}

#[tokio::test]
async fn test_box_price_conversion_failure() {
    let app = TestApp::with(
        InMemoryBeerRepository::with_beers([pilsen()]),
        FixedRateConverter::failing(AppError::Internal(
            "error trying to convert from one currency to another".into(),
        )),
    );

    let (status, body) = app.get("/beers/1/boxprice?currency=USD&quantity=1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["message"],
        "error trying to convert from one currency to another"
    );
}

#[tokio::test]
async fn test_create_beer() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/beers",
            r#"{"Id":2,"Name":"Aguila","Brewery":"Bavaria","Country":"Colombia","Price":2300,"Currency":"COP"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!("Beer created"));
    assert_eq!(app.repo.len(), 2);

    let (status, body) = app.get("/beers/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Name"], "Aguila");
}

#[tokio::test]
async fn test_create_beer_duplicate_id() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/beers",
            r#"{"Id":1,"Name":"Pilsen","Brewery":"Bavaria","Country":"Colombia","Price":2500,"Currency":"COP"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "beer id 1 already exists");
    assert_eq!(body["error"], "conflict");
}

#[tokio::test]
async fn test_create_beer_validation_failure() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/beers", r#"{"Id":3,"Brewery":"Bavaria"}"#)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid Name: ");
    assert_eq!(app.repo.len(), 1);
}

#[tokio::test]
async fn test_create_beer_malformed_json() {
    let app = TestApp::new();

    let (status, body) = app.post_json("/beers", "{,}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid json body");
}

#[tokio::test]
async fn test_create_beer_without_content_type() {
    let app = TestApp::new();

    let (status, body) = app
        .post_raw(
            "/beers",
            r#"{"Id":4,"Name":"Costeña","Brewery":"Bavaria","Country":"Colombia","Price":2000,"Currency":"COP"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!("Beer created"));
    assert_eq!(app.repo.len(), 2);
}

#[tokio::test]
async fn test_create_beer_null_fields_reach_validation() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/beers",
            r#"{"Id":5,"Name":"Club Colombia","Brewery":null,"Country":"Colombia","Price":2500,"Currency":"COP"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid Brewery: ");
    assert_eq!(app.repo.len(), 1);
}
