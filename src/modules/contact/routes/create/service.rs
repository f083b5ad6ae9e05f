use super::types::{request, response};
use crate::{modules::contact::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let request::Payload { auth, body } = payload;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateContactMessagePayload {
            user_id: auth.map(|auth| auth.user.id),
            name: body.name.trim().to_string(),
            email: body.email.trim().to_lowercase(),
            message: body.message.trim().to_string(),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToSendMessage)
    .map(|message| {
        tracing::info!("Received contact message {}", message.id);
        response::Success::MessageSent
    })
}
