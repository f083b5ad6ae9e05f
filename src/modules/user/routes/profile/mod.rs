mod change_password;
mod get;
mod update;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(get::get_router())
        .merge(update::get_router())
        .nest("/password", change_password::get_router())
}
