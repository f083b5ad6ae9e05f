use super::types::{request, response};
use crate::{modules::menu::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, body: request::Body) -> response::Response {
    body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateMenuItemPayload {
            name: body.name.trim().to_string(),
            description: body.description,
            price: body.price,
            category: body.category,
            image_url: body.image_url,
            is_available: body.is_available,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateMenuItem)
    .map(|item| {
        tracing::info!("Added menu item {} ({})", item.id, item.name);
        response::Success::MenuItemCreated(item)
    })
}
