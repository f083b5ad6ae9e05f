use super::types::{request, response};
use crate::{modules::order::service, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    tracing::info!(
        "Admin {} moving order {} to {}",
        payload.auth.admin.id,
        payload.id,
        payload.body.status.as_str()
    );

    service::transition(ctx, payload.id, payload.body.status)
        .await
        .map_err(response::Error::from)
        .map(response::Success::StatusUpdated)
}
