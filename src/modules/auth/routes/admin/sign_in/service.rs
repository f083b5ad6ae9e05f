use super::types::{request, response};
use crate::{
    modules::{
        admin,
        auth::{repository::SessionScope, service},
    },
    types::Context,
    utils::password,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let admin =
        admin::repository::find_by_email(&ctx.db_conn.pool, payload.email.trim().to_lowercase())
            .await
            .map_err(|_| response::Error::FailedToFetchAdmin)?
            .ok_or(response::Error::InvalidCredentials)?;

    if !password::verify(&payload.password, &admin.password_hash) {
        tracing::warn!("Failed sign in attempt for admin {}", admin.id);
        return Err(response::Error::InvalidCredentials);
    }

    service::create_session(ctx, SessionScope::Admin, admin.id)
        .await
        .map_err(|_| response::Error::FailedToCreateSession)
        .map(response::Success::SignedIn)
}
