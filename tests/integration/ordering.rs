use super::{api_url, json_of, signed_in_admin, signed_in_customer};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

async fn create_menu_item(client: &Client, admin_token: &str, price: &str) -> String {
    let (status, body) = json_of(
        client
            .post(api_url("/admin/menu"))
            .bearer_auth(admin_token)
            .json(&json!({
                "name": "Lechon Kawali",
                "description": "Crispy pork belly",
                "price": price,
                "category": "meals"
            }))
            .send()
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    body["item"]["id"].as_str().unwrap().to_string()
}

async fn add_to_cart(client: &Client, token: &str, item_id: &str, quantity: i32) -> StatusCode {
    client
        .post(api_url("/cart/add"))
        .bearer_auth(token)
        .json(&json!({ "item_id": item_id, "quantity": quantity }))
        .send()
        .await
        .unwrap()
        .status()
}

async fn cart(client: &Client, token: &str) -> Value {
    json_of(
        client
            .get(api_url("/cart"))
            .bearer_auth(token)
            .send()
            .await
            .unwrap(),
    )
    .await
    .1
}

async fn place_order(client: &Client, token: &str) -> (StatusCode, Value) {
    json_of(
        client
            .post(api_url("/orders"))
            .bearer_auth(token)
            .json(&json!({
                "address": "88 Kalayaan Ave, Makati",
                "contact_number": "09991234567",
                "payment_method": "cash"
            }))
            .send()
            .await
            .unwrap(),
    )
    .await
}

fn amount(value: &Value) -> f64 {
    match value {
        Value::String(raw) => raw.parse().unwrap(),
        other => other.as_f64().unwrap(),
    }
}

#[tokio::test]
#[ignore]
async fn empty_cart_cannot_be_checked_out() {
    let client = Client::new();
    let (_, token) = signed_in_customer(&client).await;

    let (status, body) = json_of(
        client
            .post(api_url("/orders"))
            .bearer_auth(&token)
            .json(&json!({
                "address": "12 Mabini St, Quezon City",
                "contact_number": "09171234567",
                "payment_method": "cash"
            }))
            .send()
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No items in cart");
}

#[tokio::test]
#[ignore]
async fn cart_to_delivered_order() {
    let client = Client::new();
    let Some(admin_token) = signed_in_admin(&client).await else {
        return;
    };
    let (_, token) = signed_in_customer(&client).await;
    let item_id = create_menu_item(&client, &admin_token, "150.00").await;

    assert_eq!(add_to_cart(&client, &token, &item_id, 1).await, StatusCode::OK);
    assert_eq!(add_to_cart(&client, &token, &item_id, 2).await, StatusCode::OK);

    let view = cart(&client, &token).await;
    assert_eq!(view["lines"].as_array().unwrap().len(), 1);
    assert_eq!(view["lines"][0]["quantity"], 3);
    assert_eq!(amount(&view["sub_total"]), 450.0);

    let (status, body) = json_of(
        client
            .post(api_url("/orders"))
            .bearer_auth(&token)
            .json(&json!({
                "address": "12 Mabini St, Quezon City",
                "contact_number": "+639171234567",
                "payment_method": "gcash",
                "notes": "Extra sawsawan please"
            }))
            .send()
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["order"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(
        amount(&body["order"]["total"]),
        amount(&body["order"]["sub_total"]) + amount(&body["order"]["delivery_fee"])
    );
    let order_id = body["order"]["id"].as_str().unwrap().to_string();

    let view = cart(&client, &token).await;
    assert!(view["lines"].as_array().unwrap().is_empty());

    let response = client
        .put(api_url(&format!("/admin/orders/{order_id}/status")))
        .bearer_auth(&admin_token)
        .json(&json!({ "status": "delivered" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, tracking) = json_of(
        client
            .get(api_url(&format!("/orders/{order_id}")))
            .bearer_auth(&token)
            .send()
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tracking["order"]["status"], "delivered");
    assert!(tracking["timeline"]
        .as_array()
        .unwrap()
        .iter()
        .all(|step| !step["timestamp"].is_null()));

    let response = client
        .post(api_url(&format!("/admin/orders/{order_id}/confirm")))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore]
async fn orders_are_private_to_their_owner() {
    let client = Client::new();
    let Some(admin_token) = signed_in_admin(&client).await else {
        return;
    };
    let (_, owner) = signed_in_customer(&client).await;
    let (_, stranger) = signed_in_customer(&client).await;
    let item_id = create_menu_item(&client, &admin_token, "99.00").await;

    assert_eq!(add_to_cart(&client, &owner, &item_id, 1).await, StatusCode::OK);

    let (_, body) = json_of(
        client
            .post(api_url("/orders"))
            .bearer_auth(&owner)
            .json(&json!({
                "address": "5 Rizal Ave, Manila",
                "contact_number": "09181234567",
                "delivery_option": "pickup",
                "payment_method": "cash"
            }))
            .send()
            .await
            .unwrap(),
    )
    .await;
    let order_id = body["order"]["id"].as_str().unwrap().to_string();

    let response = client
        .get(api_url(&format!("/orders/{order_id}")))
        .bearer_auth(&stranger)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .post(api_url(&format!("/orders/{order_id}/mark-seen")))
        .bearer_auth(&stranger)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn removing_below_zero_drops_the_line() {
    let client = Client::new();
    let Some(admin_token) = signed_in_admin(&client).await else {
        return;
    };
    let (_, token) = signed_in_customer(&client).await;
    let item_id = create_menu_item(&client, &admin_token, "35.00").await;

    assert_eq!(add_to_cart(&client, &token, &item_id, 2).await, StatusCode::OK);
    assert_eq!(add_to_cart(&client, &token, &item_id, -2).await, StatusCode::OK);

    let view = cart(&client, &token).await;
    assert!(view["lines"].as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn simultaneous_adds_accumulate() {
    let client = Client::new();
    let Some(admin_token) = signed_in_admin(&client).await else {
        return;
    };
    let (_, token) = signed_in_customer(&client).await;
    let item_id = create_menu_item(&client, &admin_token, "60.00").await;

    let (first, second) = tokio::join!(
        add_to_cart(&client, &token, &item_id, 1),
        add_to_cart(&client, &token, &item_id, 1)
    );
    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);

    let view = cart(&client, &token).await;
    assert_eq!(view["lines"].as_array().unwrap().len(), 1);
    assert_eq!(view["lines"][0]["quantity"], 2);
    assert_eq!(amount(&view["lines"][0]["subtotal"]), 120.0);
}

#[tokio::test]
#[ignore]
async fn a_cart_is_billed_once() {
    let client = Client::new();
    let Some(admin_token) = signed_in_admin(&client).await else {
        return;
    };
    let (_, token) = signed_in_customer(&client).await;
    let adobo = create_menu_item(&client, &admin_token, "120.00").await;
    let halo_halo = create_menu_item(&client, &admin_token, "85.00").await;

    assert_eq!(add_to_cart(&client, &token, &adobo, 2).await, StatusCode::OK);
    assert_eq!(add_to_cart(&client, &token, &halo_halo, 1).await, StatusCode::OK);

    let ((first, first_body), (second, second_body)) = tokio::join!(
        place_order(&client, &token),
        place_order(&client, &token)
    );

    let mut statuses = vec![first, second];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::BAD_REQUEST]);

    let placed = match first {
        StatusCode::CREATED => first_body,
        _ => second_body,
    };
    assert_eq!(placed["order"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(amount(&placed["order"]["sub_total"]), 325.0);

    let view = cart(&client, &token).await;
    assert!(view["lines"].as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn confirming_starts_preparation() {
    let client = Client::new();
    let Some(admin_token) = signed_in_admin(&client).await else {
        return;
    };
    let (_, token) = signed_in_customer(&client).await;
    let item_id = create_menu_item(&client, &admin_token, "75.00").await;

    assert_eq!(add_to_cart(&client, &token, &item_id, 1).await, StatusCode::OK);
    let (status, body) = place_order(&client, &token).await;
    assert_eq!(status, StatusCode::CREATED);
    let order_id = body["order"]["id"].as_str().unwrap().to_string();

    let (status, body) = json_of(
        client
            .post(api_url(&format!("/admin/orders/{order_id}/confirm")))
            .bearer_auth(&admin_token)
            .send()
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order"]["status"], "preparing");
    assert!(!body["order"]["delivery"]["confirmed_at"].is_null());
    assert!(!body["order"]["delivery"]["preparing_at"].is_null());
    assert!(body["order"]["delivery"]["out_for_delivery_at"].is_null());
}

#[tokio::test]
#[ignore]
async fn marking_seen_keeps_the_timeline() {
    let client = Client::new();
    let Some(admin_token) = signed_in_admin(&client).await else {
        return;
    };
    let (_, token) = signed_in_customer(&client).await;
    let item_id = create_menu_item(&client, &admin_token, "45.00").await;

    assert_eq!(add_to_cart(&client, &token, &item_id, 1).await, StatusCode::OK);
    let (_, body) = place_order(&client, &token).await;
    let order_id = body["order"]["id"].as_str().unwrap().to_string();

    let response = client
        .put(api_url(&format!("/admin/orders/{order_id}/status")))
        .bearer_auth(&admin_token)
        .json(&json!({ "status": "delivered" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, body) = json_of(
        client
            .post(api_url(&format!("/orders/{order_id}/mark-seen")))
            .bearer_auth(&token)
            .send()
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["seen_at"].is_null());

    let (_, tracking) = json_of(
        client
            .get(api_url(&format!("/orders/{order_id}")))
            .bearer_auth(&token)
            .send()
            .await
            .unwrap(),
    )
    .await;
    let timeline = tracking["timeline"].as_array().unwrap();
    assert_eq!(timeline.len(), 4);
    assert!(timeline.iter().all(|step| !step["timestamp"].is_null()));
}
