use super::types::{request, response};
use crate::{
    modules::{
        admin::repository,
        auth::{self, repository::SessionScope},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    if payload.id == payload.auth.admin.id {
        return Err(response::Error::CannotDeleteSelf);
    }

    let mut tx = ctx
        .db_conn
        .pool
        .begin()
        .await
        .map_err(|_| response::Error::FailedToDeleteAdmin)?;

    auth::repository::delete_by_subject(&mut *tx, SessionScope::Admin, payload.id.clone(), None)
        .await
        .map_err(|_| response::Error::FailedToDeleteAdmin)?;

    if !repository::delete_by_id(&mut *tx, payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToDeleteAdmin)?
    {
        return Err(response::Error::AdminNotFound);
    }

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit admin deletion: {}", err);
        response::Error::FailedToDeleteAdmin
    })?;

    tracing::info!(
        "Admin {} deleted admin {}",
        payload.auth.admin.id,
        payload.id
    );

    Ok(response::Success::AdminDeleted)
}
