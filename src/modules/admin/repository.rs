use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Admin {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateAdminPayload {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Default)]
pub struct UpdateAdminPayload {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
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

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateAdminPayload) -> Result<Admin> {
    sqlx::query_as::<_, Admin>(
        "
        INSERT INTO admins (id, email, password_hash, first_name, last_name)
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
    .map_err(|err| map_write_error(err, "creating an admin"))
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Admin>> {
    sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching admin with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(e: E, email: String) -> Result<Option<Admin>> {
    sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE email = $1")
        .bind(email)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching admin by email: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_all<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<Admin>> {
    sqlx::query_as::<_, Admin>("SELECT * FROM admins ORDER BY created_at ASC")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching admins: {}", err);
            Error::UnexpectedError
        })
}

pub async fn count<'e, E: PgExecutor<'e>>(e: E) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admins")
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while counting admins: {}", err);
            Error::UnexpectedError
        })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateAdminPayload,
) -> Result<Option<Admin>> {
    sqlx::query_as::<_, Admin>(
        "
        UPDATE admins SET
            email = COALESCE($1, email),
            password_hash = COALESCE($2, password_hash),
            first_name = COALESCE($3, first_name),
            last_name = COALESCE($4, last_name),
            updated_at = NOW() AT TIME ZONE 'utc'
        WHERE
            id = $5
        RETURNING *
        ",
    )
    .bind(payload.email)
    .bind(payload.password_hash)
    .bind(payload.first_name)
    .bind(payload.last_name)
    .bind(id.clone())
    .fetch_optional(e)
    .await
    .map_err(|err| map_write_error(err, &format!("updating admin {}", id)))
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<bool> {
    sqlx::query("DELETE FROM admins WHERE id = $1")
        .bind(id.clone())
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Error occurred while deleting admin {}: {}", id, err);
            Error::UnexpectedError
        })
}
