use super::types::{request, response};
use crate::{
    modules::{
        auth::{repository::SessionScope, service},
        user,
    },
    types::Context,
    utils::password,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let user =
        user::repository::find_by_email(&ctx.db_conn.pool, payload.email.trim().to_lowercase())
            .await
            .map_err(|_| response::Error::FailedToFetchUser)?
            .ok_or(response::Error::InvalidCredentials)?;

    if !password::verify(&payload.password, &user.password_hash) {
        tracing::warn!("Failed sign in attempt for user {}", user.id);
        return Err(response::Error::InvalidCredentials);
    }

    if !user.is_active {
        return Err(response::Error::AccountDisabled);
    }

    service::create_session(ctx, SessionScope::Customer, user.id)
        .await
        .map_err(|_| response::Error::FailedToCreateSession)
        .map(response::Success::SignedIn)
}
