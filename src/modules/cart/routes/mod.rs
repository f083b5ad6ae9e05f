mod add;
mod get;
mod remove;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(get::get_router())
        .nest("/add", add::get_router())
        .nest("/remove", remove::get_router())
}
