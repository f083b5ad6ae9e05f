use super::types::{request, response};
use crate::{modules::menu::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_many(
        &ctx.db_conn.pool,
        payload.pagination,
        repository::Filters {
            category: payload.filters.category,
            // the storefront hides sold out dishes unless asked for them
            is_available: Some(payload.filters.available.unwrap_or(true)),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToFetchMenu)
    .map(response::Success::Menu)
}
