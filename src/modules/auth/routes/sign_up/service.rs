use super::types::{request, response};
use crate::{modules::user, types::Context, utils::password};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let email = payload.email.trim().to_lowercase();

    if user::repository::find_by_email(&ctx.db_conn.pool, email.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .is_some()
    {
        return Err(response::Error::EmailAlreadyInUse);
    }

    let password_hash =
        password::hash(&payload.password).map_err(|_| response::Error::SignupFailed)?;

    user::repository::create(
        &ctx.db_conn.pool,
        user::repository::CreateUserPayload {
            email,
            password_hash,
            first_name: payload.first_name.trim().to_string(),
            last_name: payload.last_name.trim().to_string(),
        },
    )
    .await
    .map_err(|err| match err {
        user::repository::Error::EmailAlreadyInUse => response::Error::EmailAlreadyInUse,
        _ => response::Error::SignupFailed,
    })
    .map(|user| {
        tracing::info!("Created account for user {}", user.id);
        response::Success::AccountCreated(user)
    })
}
