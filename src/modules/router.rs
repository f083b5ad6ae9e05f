use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use super::{admin, auth, cart, contact, dashboard, feedback, menu, order, user};
use crate::types::Context;
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Welcome to Kusina Express API" })),
    )
}

fn get_admin_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/dashboard", dashboard::get_router())
        .nest("/menu", menu::get_admin_router())
        .nest("/orders", order::get_admin_router())
        .nest("/feedback", feedback::get_admin_router())
        .nest("/contact", contact::get_admin_router())
        .merge(admin::get_router())
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health_check))
        .nest("/auth", auth::get_router())
        .nest("/users", user::get_router())
        .nest("/menu", menu::get_router())
        .nest("/cart", cart::get_router())
        .nest("/orders", order::get_router())
        .nest("/feedback", feedback::get_router())
        .nest("/contact", contact::get_router())
        .nest("/admin", get_admin_router())
}
