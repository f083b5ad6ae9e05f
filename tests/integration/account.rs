use super::{api_url, json_of, signed_in_admin, signed_in_customer, unique_email};
use reqwest::{Client, StatusCode};
use serde_json::json;

#[tokio::test]
#[ignore]
async fn create_account() {
    let client = Client::new();
    let email = unique_email("signup");

    let (status, body) = json_of(
        client
            .post(api_url("/auth/sign-up"))
            .json(&json!({
                "email": email,
                "password": "kare-kare-123",
                "first_name": "Jose",
                "last_name": "Rizal"
            }))
            .send()
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["email"], email);
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
#[ignore]
async fn duplicate_email_conflicts() {
    let client = Client::new();
    let (email, _) = signed_in_customer(&client).await;

    let response = client
        .post(api_url("/auth/sign-up"))
        .json(&json!({
            "email": email.to_uppercase(),
            "password": "another-password",
            "first_name": "Maria",
            "last_name": "Clara"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore]
async fn wrong_password_is_unauthorized() {
    let client = Client::new();
    let (email, _) = signed_in_customer(&client).await;

    let response = client
        .post(api_url("/auth/sign-in"))
        .json(&json!({ "email": email, "password": "not-my-password" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore]
async fn signing_out_revokes_the_token() {
    let client = Client::new();
    let (_, token) = signed_in_customer(&client).await;

    let response = client
        .post(api_url("/auth/sign-out"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .get(api_url("/users/profile"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore]
async fn customer_tokens_do_not_open_admin_routes() {
    let client = Client::new();
    let (_, token) = signed_in_customer(&client).await;

    let response = client
        .get(api_url("/admin/dashboard"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore]
async fn profile_can_be_updated() {
    let client = Client::new();
    let (_, token) = signed_in_customer(&client).await;

    let (status, body) = json_of(
        client
            .put(api_url("/users/profile"))
            .bearer_auth(&token)
            .json(&json!({ "first_name": "Gabriela" }))
            .send()
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["first_name"], "Gabriela");
    assert_eq!(body["user"]["last_name"], "Santos");
}

#[tokio::test]
#[ignore]
async fn resetting_an_admin_password_signs_them_out() {
    let client = Client::new();
    let Some(admin_token) = signed_in_admin(&client).await else {
        return;
    };
    let email = unique_email("admin");

    let (status, body) = json_of(
        client
            .post(api_url("/admin/admins"))
            .bearer_auth(&admin_token)
            .json(&json!({
                "email": email,
                "password": "sinigang-na-baboy",
                "first_name": "Jose",
                "last_name": "Rizal"
            }))
            .send()
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["admin"]["id"].as_str().unwrap().to_string();

    let (status, body) = json_of(
        client
            .post(api_url("/auth/admin/sign-in"))
            .json(&json!({ "email": email, "password": "sinigang-na-baboy" }))
            .send()
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let old_token = body["access_token"].as_str().unwrap().to_string();

    let response = client
        .put(api_url(&format!("/admin/admins/{id}")))
        .bearer_auth(&admin_token)
        .json(&json!({ "password": "pinakbet-at-bagnet" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .get(api_url("/admin/dashboard"))
        .bearer_auth(&old_token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = client
        .get(api_url("/admin/dashboard"))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
