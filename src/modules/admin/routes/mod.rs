mod admins;
mod users;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/users", users::get_router())
        .nest("/admins", admins::get_router())
}
