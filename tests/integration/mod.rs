//! End-to-end flows against a running server with a migrated database.
//!
//! Start the API (`cargo run`) and run with `cargo test -- --ignored`.
//! `KUSINA_API_URL` overrides the default `http://localhost:8000/api`.

mod account;
mod ordering;

use reqwest::{Client, Response, StatusCode};
use serde_json::{json, Value};

pub fn api_url(path: &str) -> String {
    let base =
        std::env::var("KUSINA_API_URL").unwrap_or_else(|_| "http://localhost:8000/api".to_string());
    format!("{}{}", base, path)
}

pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@kusina.test", prefix, ulid::Ulid::new().to_string().to_lowercase())
}

pub async fn json_of(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = response.json::<Value>().await.unwrap_or(Value::Null);
    (status, body)
}

/// Registers a fresh customer and returns `(email, access_token)`.
pub async fn signed_in_customer(client: &Client) -> (String, String) {
    let email = unique_email("customer");
    let password = "sarap-ng-adobo";

    let (status, _) = json_of(
        client
            .post(api_url("/auth/sign-up"))
            .json(&json!({
                "email": email,
                "password": password,
                "first_name": "Maria",
                "last_name": "Santos"
            }))
            .send()
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = json_of(
        client
            .post(api_url("/auth/sign-in"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let token = body["access_token"].as_str().unwrap().to_string();
    (email, token)
}

/// Signs in with `ADMIN_EMAIL` / `ADMIN_PASSWORD`, the same variables the
/// server uses to seed its first administrator.
pub async fn signed_in_admin(client: &Client) -> Option<String> {
    let email = std::env::var("ADMIN_EMAIL").ok()?;
    let password = std::env::var("ADMIN_PASSWORD").ok()?;

    let (status, body) = json_of(
        client
            .post(api_url("/auth/admin/sign-in"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    body["access_token"].as_str().map(str::to_string)
}
