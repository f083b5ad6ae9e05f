use super::types::{request, response};
use crate::{modules::order::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::mark_seen(&ctx.db_conn.pool, payload.id, payload.auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToMarkOrderSeen)?
        .ok_or(response::Error::OrderNotFound)
        .map(response::Success::OrderSeen)
}
