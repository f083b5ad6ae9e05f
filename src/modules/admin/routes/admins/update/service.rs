use super::types::{request, response};
use crate::{
    modules::{
        admin::repository,
        auth::{self, repository::SessionScope},
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

    let request::Payload { auth, id, body } = payload;

    let password_hash = match body.password {
        Some(password) => Some(
            password::hash(&password).map_err(|_| response::Error::FailedToUpdateAdmin)?,
        ),
        None => None,
    };
    let password_changed = password_hash.is_some();

    let mut tx = ctx
        .db_conn
        .pool
        .begin()
        .await
        .map_err(|_| response::Error::FailedToUpdateAdmin)?;

    let admin = repository::update_by_id(
        &mut *tx,
        id.clone(),
        repository::UpdateAdminPayload {
            email: body.email.map(|email| email.trim().to_lowercase()),
            password_hash,
            first_name: body.first_name.map(|name| name.trim().to_string()),
            last_name: body.last_name.map(|name| name.trim().to_string()),
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::EmailAlreadyInUse => response::Error::EmailAlreadyInUse,
        _ => response::Error::FailedToUpdateAdmin,
    })?
    .ok_or(response::Error::AdminNotFound)?;

    if password_changed {
        // an admin resetting their own password stays signed in here
        let keep_id = (auth.admin.id == id).then(|| auth.session.id.clone());

        auth::repository::delete_by_subject(&mut *tx, SessionScope::Admin, id.clone(), keep_id)
            .await
            .map_err(|_| response::Error::FailedToUpdateAdmin)?;
    }

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit update of admin {}: {}", id, err);
        response::Error::FailedToUpdateAdmin
    })?;

    if password_changed {
        tracing::info!("Admin {} reset the password of admin {}", auth.admin.id, id);
    }

    Ok(response::Success::AdminUpdated(admin))
}
