use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

use crate::utils::pagination::{Paginated, Pagination};

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: String,
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct CreateContactMessagePayload {
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    pub message: String,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateContactMessagePayload,
) -> Result<ContactMessage> {
    sqlx::query_as::<_, ContactMessage>(
        "
        INSERT INTO contact_messages (id, user_id, name, email, message)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.user_id)
    .bind(payload.name)
    .bind(payload.email)
    .bind(payload.message)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while saving contact message: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: Pagination,
) -> Result<Paginated<ContactMessage>> {
    #[derive(sqlx::FromRow)]
    struct CountedContactMessage {
        #[sqlx(flatten)]
        message: ContactMessage,
        total_rows: i64,
    }

    sqlx::query_as::<_, CountedContactMessage>(
        "
        SELECT contact_messages.*, COUNT(*) OVER () AS total_rows
        FROM contact_messages
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
            rows.into_iter().map(|row| row.message).collect(),
            total as u32,
            &pagination,
        )
    })
    .map_err(|err| {
        tracing::error!("Error occurred while fetching contact messages: {}", err);
        Error::UnexpectedError
    })
}
