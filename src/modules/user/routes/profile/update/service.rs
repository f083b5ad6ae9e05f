use super::types::{request, response};
use crate::{modules::user::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let user_id = payload.auth.user.id;

    repository::update_by_id(
        &ctx.db_conn.pool,
        user_id.clone(),
        repository::UpdateUserPayload {
            email: payload.body.email.map(|email| email.trim().to_lowercase()),
            first_name: payload.body.first_name.map(|name| name.trim().to_string()),
            last_name: payload.body.last_name.map(|name| name.trim().to_string()),
            password_hash: None,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::EmailAlreadyInUse => response::Error::EmailAlreadyInUse,
        _ => response::Error::FailedToUpdateProfile,
    })?
    .ok_or(response::Error::FailedToUpdateProfile)
    .map(|user| {
        tracing::info!("Updated profile of user {}", user_id);
        response::Success::ProfileUpdated(user)
    })
}
