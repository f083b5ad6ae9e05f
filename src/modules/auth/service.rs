use super::repository::{self, Session, SessionScope};
use crate::{
    modules::{admin, user},
    types::Context,
};
use chrono::Utc;
use std::sync::Arc;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    InvalidSession,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn create_session(
    ctx: Arc<Context>,
    scope: SessionScope,
    subject_id: String,
) -> Result<Session> {
    repository::create(
        &ctx.db_conn.pool,
        repository::CreateSessionPayload {
            scope,
            subject_id,
            expires_at: Utc::now().naive_utc() + ctx.auth.session_ttl,
        },
    )
    .await
    .map_err(|_| Error::UnexpectedError)
}

pub async fn verify_token(
    ctx: Arc<Context>,
    token: String,
    scope: SessionScope,
) -> Result<Session> {
    repository::find_active_by_token(&ctx.db_conn.pool, token, scope, Utc::now().naive_utc())
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::InvalidSession)
}

pub async fn resolve_customer(
    ctx: Arc<Context>,
    token: String,
) -> Result<(Session, user::repository::User)> {
    let session = verify_token(ctx.clone(), token, SessionScope::Customer).await?;

    let user = user::repository::find_by_id(&ctx.db_conn.pool, session.subject_id.clone())
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::InvalidSession)?;

    if !user.is_active {
        tracing::warn!("Rejected session of deactivated user {}", user.id);
        return Err(Error::InvalidSession);
    }

    Ok((session, user))
}

pub async fn resolve_admin(
    ctx: Arc<Context>,
    token: String,
) -> Result<(Session, admin::repository::Admin)> {
    let session = verify_token(ctx.clone(), token, SessionScope::Admin).await?;

    admin::repository::find_by_id(&ctx.db_conn.pool, session.subject_id.clone())
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::InvalidSession)
        .map(|admin| (session, admin))
}

pub async fn end_session(ctx: Arc<Context>, session: Session) -> Result<()> {
    repository::delete_by_id(&ctx.db_conn.pool, session.id)
        .await
        .map_err(|_| Error::UnexpectedError)
}
