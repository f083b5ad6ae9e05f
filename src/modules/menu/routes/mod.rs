mod admin;
mod get;
mod list;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub use admin::get_router as get_admin_router;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(list::get_router())
        .merge(get::get_router())
}
