pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{modules::contact::repository::ContactMessage, utils::pagination::Paginated};

    pub enum Success {
        Messages(Paginated<ContactMessage>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Messages(messages) => (StatusCode::OK, Json(json!(messages))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchMessages,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchMessages => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch messages" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
