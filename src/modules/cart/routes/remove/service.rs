use super::types::{request, response};
use crate::{modules::cart::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    match repository::delete_by_id_and_user_id(&ctx.db_conn.pool, payload.id, payload.auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToRemoveCartLine)?
    {
        true => Ok(response::Success::CartLineRemoved),
        false => Err(response::Error::CartLineNotFound),
    }
}
