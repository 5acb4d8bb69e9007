//! Admin panel API integration tests
//!
//! Login, booking list pipeline, mutation, export and invoice flows,
//! driven against the assembled router.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use site_server::{Config, ServerState, core};

const PASSWORD: &str = "integration-password";

fn test_app() -> Router {
    let config = Config::with_overrides(0, PASSWORD);
    let state = ServerState::initialize(&config);
    core::app(state)
}

async fn read_json(response: http::Response<Body>) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({"username": "admin", "password": PASSWORD}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["token"].as_str().unwrap().to_string()
}

async fn get_authed(app: &Router, token: &str, uri: &str) -> http::Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn put_authed(
    app: &Router,
    token: &str,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({"username": "admin", "password": "wrong"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    // unified message, no username enumeration
    assert_eq!(body["message"], "Invalid username or password");
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = test_app();
    let response = get_authed(&app, "not-a-token", "/api/bookings").await;
    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "E3002");
}

#[tokio::test]
async fn test_booking_list_default_page() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = read_json(get_authed(&app, &token, "/api/bookings").await).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["total"], 12);
    assert_eq!(body["page"], 1);
    assert_eq!(body["page_size"], 8);
    assert_eq!(body["total_pages"], 2);
    assert_eq!(body["items"].as_array().unwrap().len(), 8);

    // default sort: scheduled date descending
    let dates: Vec<i64> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["scheduled_at"].as_i64().unwrap())
        .collect();
    let mut sorted = dates.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
}

#[tokio::test]
async fn test_booking_list_filters_combine() {
    let app = test_app();
    let token = login(&app).await;

    let (_, body) = read_json(get_authed(&app, &token, "/api/bookings?status=pending").await).await;
    assert_eq!(body["total"], 3);
    for item in body["items"].as_array().unwrap() {
        assert_eq!(item["status"], "PENDING");
    }

    // text search hits the tour reference too
    let (_, body) = read_json(get_authed(&app, &token, "/api/bookings?q=kinabalu").await).await;
    assert_eq!(body["total"], 2);

    // conjunction: pending AND redang tour
    let (_, body) = read_json(
        get_authed(&app, &token, "/api/bookings?status=pending&tour=t-redang").await,
    )
    .await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["id"], "BK-2310");

    // sentinel "all" disables; malformed bucket filters nothing out
    let (_, body) = read_json(
        get_authed(&app, &token, "/api/bookings?status=all&range=fortnight").await,
    )
    .await;
    assert_eq!(body["total"], 12);
}

#[tokio::test]
async fn test_page_out_of_range_clamps() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = read_json(get_authed(&app, &token, "/api/bookings?page=99").await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 2);
    assert_eq!(body["items"].as_array().unwrap().len(), 4);

    let (status, body) = read_json(get_authed(&app, &token, "/api/bookings?page=0").await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
}

#[tokio::test]
async fn test_update_status_and_transition_guard() {
    let app = test_app();
    let token = login(&app).await;

    // pending to confirmed is allowed
    let (status, body) = put_authed(
        &app,
        &token,
        "/api/bookings/BK-2302",
        serde_json::json!({"status": "CONFIRMED"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "CONFIRMED");

    // refunded is terminal
    let (status, body) = put_authed(
        &app,
        &token,
        "/api/bookings/BK-2304",
        serde_json::json!({"status": "CONFIRMED"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "E0005");

    // notes-only update leaves status untouched
    let (status, body) = put_authed(
        &app,
        &token,
        "/api/bookings/BK-2303",
        serde_json::json!({"notes": "Seat by the window, please"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "CONFIRMED");
    assert_eq!(body["notes"], "Seat by the window, please");
}

#[tokio::test]
async fn test_export_matches_filter_and_is_csv() {
    let app = test_app();
    let token = login(&app).await;

    let response = get_authed(&app, &token, "/api/bookings/export?status=refunded").await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(content_type, "text/csv; charset=utf-8");

    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"bookings-"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let mut reader = csv::Reader::from_reader(bytes.as_ref());
    let ids: Vec<String> = reader
        .records()
        .map(|r| r.unwrap()[0].to_string())
        .collect();
    // both refunded seeds, in date-descending (list) order
    assert_eq!(ids, vec!["BK-2304", "BK-2308"]);
}

#[tokio::test]
async fn test_invoice_renders_and_escapes() {
    let app = test_app();
    let token = login(&app).await;

    // plant hostile notes first, through the normal update path
    let (status, _) = put_authed(
        &app,
        &token,
        "/api/bookings/BK-2301",
        serde_json::json!({"notes": "<script>alert('x')</script>"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let response = get_authed(&app, &token, "/api/bookings/BK-2301/invoice").await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("BK-2301"));
    assert!(html.contains("Nurul Izzah"));
    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn test_customer_listing_is_derived_from_bookings() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = read_json(get_authed(&app, &token, "/api/customers").await).await;
    assert_eq!(status, StatusCode::OK);

    let customers = body.as_array().unwrap();
    // 12 seed bookings, 12 distinct emails
    assert_eq!(customers.len(), 12);

    let marcus = customers
        .iter()
        .find(|c| c["email"] == "marcus.tan@example.com")
        .unwrap();
    assert_eq!(marcus["bookings"], 1);
    // refunded booking: nothing retained
    assert_eq!(marcus["total_spent"]["minor"], 0);
}

#[tokio::test]
async fn test_unknown_booking_is_404() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = read_json(get_authed(&app, &token, "/api/bookings/BK-0000").await).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
}
