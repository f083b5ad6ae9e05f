use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use std::str::FromStr;
use ulid::Ulid;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionScope {
    #[serde(rename = "CUSTOMER")]
    Customer,
    #[serde(rename = "ADMIN")]
    Admin,
}

impl SessionScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionScope::Customer => "CUSTOMER",
            SessionScope::Admin => "ADMIN",
        }
    }
}

impl FromStr for SessionScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CUSTOMER" => Ok(SessionScope::Customer),
            "ADMIN" => Ok(SessionScope::Admin),
            _ => Err(format!("'{}' is not a valid SessionScope", s)),
        }
    }
}

crate::text_column!(SessionScope);

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Session {
    pub id: String,
    #[serde(skip_serializing)]
    pub token: String,
    pub scope: SessionScope,
    pub subject_id: String,
    pub expires_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

pub struct CreateSessionPayload {
    pub scope: SessionScope,
    pub subject_id: String,
    pub expires_at: NaiveDateTime,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

fn generate_token() -> String {
    format!("{}{}", Ulid::new(), Ulid::new())
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateSessionPayload,
) -> Result<Session, Error> {
    sqlx::query_as::<_, Session>(
        "
        INSERT INTO sessions (id, token, scope, subject_id, expires_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(generate_token())
    .bind(payload.scope.as_str())
    .bind(payload.subject_id.clone())
    .bind(payload.expires_at)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while creating a session for {} {}: {}",
            payload.scope.as_str(),
            payload.subject_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_active_by_token<'e, E: PgExecutor<'e>>(
    e: E,
    token: String,
    scope: SessionScope,
    now: NaiveDateTime,
) -> Result<Option<Session>, Error> {
    sqlx::query_as::<_, Session>(
        "SELECT * FROM sessions WHERE token = $1 AND scope = $2 AND expires_at > $3",
    )
    .bind(token)
    .bind(scope.as_str())
    .bind(now)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching session by token: {}", err);
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<(), Error> {
    sqlx::query("DELETE FROM sessions WHERE id = $1")
        .bind(id.clone())
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while deleting session {}: {}", id, err);
            Error::UnexpectedError
        })
}

/// Revokes every session of a subject except `keep_id`, if given.
pub async fn delete_by_subject<'e, E: PgExecutor<'e>>(
    e: E,
    scope: SessionScope,
    subject_id: String,
    keep_id: Option<String>,
) -> Result<u64, Error> {
    sqlx::query(
        "
        DELETE FROM sessions
        WHERE
            scope = $1
            AND subject_id = $2
            AND ($3::TEXT IS NULL OR id <> $3)
        ",
    )
    .bind(scope.as_str())
    .bind(subject_id.clone())
    .bind(keep_id)
    .execute(e)
    .await
    .map(|result| result.rows_affected())
    .map_err(|err| {
        tracing::error!(
            "Error occurred while revoking sessions of {} {}: {}",
            scope.as_str(),
            subject_id,
            err
        );
        Error::UnexpectedError
    })
}
