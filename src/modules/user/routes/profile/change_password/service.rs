use super::types::{request, response};
use crate::{
    modules::{
        auth::{self, repository::SessionScope},
        user::repository,
    },
    types::Context,
    utils::password,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let request::Payload { auth, body } = payload;

    if !password::verify(&body.current_password, &auth.user.password_hash) {
        return Err(response::Error::IncorrectPassword);
    }

    let password_hash =
        password::hash(&body.new_password).map_err(|_| response::Error::FailedToChangePassword)?;

    let mut tx = ctx
        .db_conn
        .pool
        .begin()
        .await
        .map_err(|_| response::Error::FailedToChangePassword)?;

    repository::update_by_id(
        &mut *tx,
        auth.user.id.clone(),
        repository::UpdateUserPayload {
            password_hash: Some(password_hash),
            ..Default::default()
        },
    )
    .await
    .map_err(|_| response::Error::FailedToChangePassword)?;

    // other devices have to sign in again
    auth::repository::delete_by_subject(
        &mut *tx,
        SessionScope::Customer,
        auth.user.id.clone(),
        Some(auth.session.id),
    )
    .await
    .map_err(|_| response::Error::FailedToChangePassword)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit password change: {}", err);
        response::Error::FailedToChangePassword
    })?;

    tracing::info!("User {} changed their password", auth.user.id);

    Ok(response::Success::PasswordChanged)
}
