use super::types::{request, response};
use crate::{modules::admin::repository, types::Context, utils::password};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let request::Payload { auth, body } = payload;

    let password_hash =
        password::hash(&body.password).map_err(|_| response::Error::FailedToCreateAdmin)?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateAdminPayload {
            email: body.email.trim().to_lowercase(),
            password_hash,
            first_name: body.first_name.trim().to_string(),
            last_name: body.last_name.trim().to_string(),
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::EmailAlreadyInUse => response::Error::EmailAlreadyInUse,
        _ => response::Error::FailedToCreateAdmin,
    })
    .map(|admin| {
        tracing::info!("Admin {} created admin {}", auth.admin.id, admin.id);
        response::Success::AdminCreated(admin)
    })
}
