use super::types::{request, response};
use crate::{modules::feedback::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateFeedbackPayload {
            user_id: payload.auth.user.id,
            message: payload.body.message.trim().to_string(),
            rating: payload.body.rating,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToSubmitFeedback)
    .map(response::Success::FeedbackSubmitted)
}
