use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

use crate::utils::pagination::{Paginated, Pagination};

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Feedback {
    pub id: String,
    pub user_id: String,
    pub message: String,
    pub rating: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// Feedback with the author's name, as listed for administrators.
#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct FeedbackWithAuthor {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub feedback: Feedback,
    pub author_email: String,
    pub author_first_name: String,
    pub author_last_name: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct CreateFeedbackPayload {
    pub user_id: String,
    pub message: String,
    pub rating: Option<i32>,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateFeedbackPayload,
) -> Result<Feedback> {
    sqlx::query_as::<_, Feedback>(
        "
        INSERT INTO feedback (id, user_id, message, rating)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.user_id)
    .bind(payload.message)
    .bind(payload.rating)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while saving feedback: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: Pagination,
) -> Result<Paginated<FeedbackWithAuthor>> {
    #[derive(sqlx::FromRow)]
    struct CountedFeedback {
        #[sqlx(flatten)]
        feedback: FeedbackWithAuthor,
        total_rows: i64,
    }

    sqlx::query_as::<_, CountedFeedback>(
        "
        SELECT
            feedback.*,
            users.email AS author_email,
            users.first_name AS author_first_name,
            users.last_name AS author_last_name,
            COUNT(*) OVER () AS total_rows
        FROM feedback
        INNER JOIN users ON users.id = feedback.user_id
        ORDER BY feedback.created_at DESC
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
            rows.into_iter().map(|row| row.feedback).collect(),
            total as u32,
            &pagination,
        )
    })
    .map_err(|err| {
        tracing::error!("Error occurred while fetching feedback: {}", err);
        Error::UnexpectedError
    })
}
