use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

use crate::utils::pagination::{Paginated, Pagination};

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateUserPayload {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    EmailAlreadyInUse,
}

fn map_write_error(err: sqlx::Error, action: &str) -> Error {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => Error::EmailAlreadyInUse,
        _ => {
            tracing::error!("Error occurred while {}: {}", action, err);
            Error::UnexpectedError
        }
    }
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateUserPayload) -> Result<User> {
    sqlx::query_as::<_, User>(
        "
        INSERT INTO users (id, email, password_hash, first_name, last_name)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.email)
    .bind(payload.password_hash)
    .bind(payload.first_name)
    .bind(payload.last_name)
    .fetch_one(e)
    .await
    .map_err(|err| map_write_error(err, "creating a user account"))
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(e: E, email: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred in find_by_email: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: Pagination,
) -> Result<Paginated<User>> {
    #[derive(sqlx::FromRow)]
    struct CountedUser {
        #[sqlx(flatten)]
        user: User,
        total_rows: i64,
    }

    sqlx::query_as::<_, CountedUser>(
        "
        SELECT users.*, COUNT(*) OVER () AS total_rows
        FROM users
        ORDER BY created_at DESC
        LIMIT $1 OFFSET $2
        ",
    )
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map(|rows| {
        let total = rows.first().map(|row| row.total_rows).unwrap_or(0);
        Paginated::new(
            rows.into_iter().map(|row| row.user).collect(),
            total as u32,
            &pagination,
        )
    })
    .map_err(|err| {
        tracing::error!("Error occurred while fetching many users: {}", err);
        Error::UnexpectedError
    })
}

#[derive(Default)]
pub struct UpdateUserPayload {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: Option<String>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateUserPayload,
) -> Result<Option<User>> {
    sqlx::query_as::<_, User>(
        "
        UPDATE users SET
            email = COALESCE($1, email),
            first_name = COALESCE($2, first_name),
            last_name = COALESCE($3, last_name),
            password_hash = COALESCE($4, password_hash),
            updated_at = NOW() AT TIME ZONE 'utc'
        WHERE
            id = $5
        RETURNING *
        ",
    )
    .bind(payload.email)
    .bind(payload.first_name)
    .bind(payload.last_name)
    .bind(payload.password_hash)
    .bind(id.clone())
    .fetch_optional(e)
    .await
    .map_err(|err| map_write_error(err, &format!("updating user {}", id)))
}
