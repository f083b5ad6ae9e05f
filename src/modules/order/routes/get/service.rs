use super::types::{request, response};
use crate::{
    modules::order::{lifecycle::DeliveryStages, repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let order =
        repository::find_full_by_id_and_user_id(&ctx.db_conn.pool, payload.id, payload.auth.user.id)
            .await
            .map_err(|_| response::Error::FailedToFetchOrder)?
            .ok_or(response::Error::OrderNotFound)?;

    let timeline = order
        .delivery
        .as_ref()
        .map(DeliveryStages::from)
        .unwrap_or_default()
        .timeline();

    Ok(response::Success::Tracking { order, timeline })
}
