pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{
        modules::feedback::repository::FeedbackWithAuthor, utils::pagination::Paginated,
    };

    pub enum Success {
        Feedback(Paginated<FeedbackWithAuthor>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Feedback(feedback) => (StatusCode::OK, Json(json!(feedback))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchFeedback,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchFeedback => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch feedback" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
