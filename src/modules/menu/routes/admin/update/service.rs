use super::types::{request, response};
use crate::{modules::menu::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let request::Payload { id, body } = payload;

    repository::update_by_id(
        &ctx.db_conn.pool,
        id,
        repository::UpdateMenuItemPayload {
            name: body.name.map(|name| name.trim().to_string()),
            description: body.description,
            price: body.price,
            category: body.category,
            image_url: body.image_url,
            is_available: body.is_available,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateMenuItem)?
    .ok_or(response::Error::MenuItemNotFound)
    .map(response::Success::MenuItemUpdated)
}
