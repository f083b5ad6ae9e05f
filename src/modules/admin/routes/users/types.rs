pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{
        modules::{admin::repository::Admin, user::repository::User},
        utils::pagination::Paginated,
    };

    pub enum Success {
        Users {
            customers: Paginated<User>,
            admins: Vec<Admin>,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Users { customers, admins } => (
                    StatusCode::OK,
                    Json(json!({ "customers": customers, "admins": admins })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchUsers,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchUsers => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch users" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
