// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{account_payload, create_accounts, create_test_app};
use account_service::presentation::handlers::account_handler::BASE_URL;
use axum::http::{header, StatusCode};
use chrono::NaiveDate;
use serde_json::{json, Value};

#[tokio::test]
async fn test_list_empty_returns_empty_list() {
    let app = create_test_app().await;

    let resp = app.server.get(BASE_URL).await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_create_account_and_follow_location() {
    let app = create_test_app().await;
    let payload = json!({
        "name": "Alice",
        "email": "a@x.com",
        "address": "1 Rd",
        "phone_number": "555-0100"
    });

    let resp = app.server.post(BASE_URL).json(&payload).await;
    assert_eq!(resp.status_code(), StatusCode::CREATED);

    let created = resp.json::<Value>();
    let id = created["id"].as_i64().expect("id should be an integer");
    let date_joined = created["date_joined"].as_str().expect("date_joined should be a string");
    assert!(NaiveDate::parse_from_str(date_joined, "%Y-%m-%d").is_ok());
    for field in ["name", "email", "address", "phone_number"] {
        assert_eq!(created[field], payload[field]);
    }

    let location = resp
        .headers()
        .get(header::LOCATION)
        .expect("Location header should be set")
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(location, format!("{}/{}", BASE_URL, id));

    let resp = app.server.get(&location).await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>(), created);
}

#[tokio::test]
async fn test_create_ignores_client_supplied_id_and_date() {
    let app = create_test_app().await;
    let mut payload = account_payload(1);
    payload["id"] = json!(4242);
    payload["date_joined"] = json!("1999-12-31");

    let resp = app.server.post(BASE_URL).json(&payload).await;

    assert_eq!(resp.status_code(), StatusCode::CREATED);
    let created = resp.json::<Value>();
    assert_ne!(created["id"], json!(4242));
    assert_ne!(created["date_joined"], json!("1999-12-31"));
}

#[tokio::test]
async fn test_create_missing_required_fields_is_bad_request() {
    let app = create_test_app().await;

    for field in ["name", "email"] {
        let mut payload = account_payload(1);
        payload.as_object_mut().unwrap().remove(field);

        let resp = app.server.post(BASE_URL).json(&payload).await;

        assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
        let body = resp.json::<Value>();
        assert_eq!(body["status"], 400);
        assert_eq!(body["error"], "Bad Request");
        assert!(body["message"].as_str().unwrap().contains(field));
    }

    // nothing was persisted
    let resp = app.server.get(BASE_URL).await;
    assert_eq!(resp.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_create_with_malformed_json_is_bad_request() {
    let app = create_test_app().await;

    let resp = app
        .server
        .post(BASE_URL)
        .bytes("{\"name\": ".into())
        .content_type("application/json")
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["error"], "Bad Request");
}

#[tokio::test]
async fn test_create_with_oversized_body_is_not_reported_as_malformed() {
    let app = create_test_app().await;

    let resp = app
        .server
        .post(BASE_URL)
        .bytes(vec![b' '; 3 * 1024 * 1024].into())
        .content_type("application/json")
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body = resp.json::<Value>();
    assert_eq!(body["error"], "Bad Request");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("could not be read"));
    assert!(!message.contains("not valid JSON"));
}

#[tokio::test]
async fn test_create_with_overlong_field_is_bad_request() {
    let app = create_test_app().await;
    let mut payload = account_payload(1);
    payload["email"] = json!(format!("{}@x.com", "a".repeat(64)));

    let resp = app.server.post(BASE_URL).json(&payload).await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.json::<Value>()["message"],
        "Invalid Account: email exceeds 64 characters"
    );
}

#[tokio::test]
async fn test_list_returns_all_accounts_in_id_order() {
    let app = create_test_app().await;
    let created = create_accounts(&app.server, 3).await;

    let resp = app.server.get(BASE_URL).await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>(), Value::Array(created));
}

#[tokio::test]
async fn test_read_unknown_account_is_not_found() {
    let app = create_test_app().await;

    let resp = app.server.get(&format!("{}/0", BASE_URL)).await;

    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    let body = resp.json::<Value>();
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn test_non_integer_id_is_not_found() {
    let app = create_test_app().await;

    let resp = app.server.get(&format!("{}/abc", BASE_URL)).await;

    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["error"], "Not Found");
}

#[tokio::test]
async fn test_undecodable_id_is_not_found_envelope() {
    let app = create_test_app().await;

    let resp = app.server.get(&format!("{}/%FF", BASE_URL)).await;

    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    let body = resp.json::<Value>();
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], "Not Found");

    let resp = app.server.delete(&format!("{}/%FF", BASE_URL)).await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["error"], "Not Found");
}

#[tokio::test]
async fn test_plus_signed_id_is_not_found() {
    let app = create_test_app().await;
    let created = create_accounts(&app.server, 1).await.remove(0);

    let resp = app
        .server
        .get(&format!("{}/+{}", BASE_URL, created["id"]))
        .await;

    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["error"], "Not Found");

    // the canonical form still resolves
    let resp = app
        .server
        .get(&format!("{}/{}", BASE_URL, created["id"]))
        .await;
    assert_eq!(resp.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_account() {
    let app = create_test_app().await;
    let created = create_accounts(&app.server, 1).await.remove(0);
    let url = format!("{}/{}", BASE_URL, created["id"]);

    let update = json!({
        "name": "Updated Name",
        "email": "updated@example.com",
        "address": "2 New Rd",
        "phone_number": null
    });
    let resp = app.server.put(&url).json(&update).await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let updated = resp.json::<Value>();
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["date_joined"], created["date_joined"]);
    assert_eq!(updated["name"], "Updated Name");
    assert_eq!(updated["phone_number"], Value::Null);

    let resp = app.server.get(&url).await;
    assert_eq!(resp.json::<Value>(), updated);
}

#[tokio::test]
async fn test_update_unknown_account_is_not_found() {
    let app = create_test_app().await;

    let resp = app
        .server
        .put(&format!("{}/99999", BASE_URL))
        .json(&account_payload(1))
        .await;

    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["status"], 404);
}

#[tokio::test]
async fn test_update_with_partial_payload_is_bad_request() {
    let app = create_test_app().await;
    let created = create_accounts(&app.server, 1).await.remove(0);
    let url = format!("{}/{}", BASE_URL, created["id"]);

    let resp = app.server.put(&url).json(&json!({ "email": "x@y.com" })).await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);

    // stored account is untouched
    let resp = app.server.get(&url).await;
    assert_eq!(resp.json::<Value>(), created);
}

#[tokio::test]
async fn test_update_reusing_another_email_is_allowed() {
    let app = create_test_app().await;
    let accounts = create_accounts(&app.server, 2).await;
    let (a1, a2) = (&accounts[0], &accounts[1]);

    let mut payload = account_payload(0);
    payload["email"] = a2["email"].clone();
    let resp = app
        .server
        .put(&format!("{}/{}", BASE_URL, a1["id"]))
        .json(&payload)
        .await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>()["email"], a2["email"]);
}

#[tokio::test]
async fn test_delete_account() {
    let app = create_test_app().await;
    let created = create_accounts(&app.server, 1).await.remove(0);
    let url = format!("{}/{}", BASE_URL, created["id"]);

    let resp = app.server.delete(&url).await;
    assert_eq!(resp.status_code(), StatusCode::NO_CONTENT);
    assert!(resp.as_bytes().is_empty());

    let resp = app.server.get(&url).await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_nonexistent_returns_204() {
    let app = create_test_app().await;

    let resp = app.server.delete(&format!("{}/99999", BASE_URL)).await;

    assert_eq!(resp.status_code(), StatusCode::NO_CONTENT);
    assert!(resp.as_bytes().is_empty());
}
