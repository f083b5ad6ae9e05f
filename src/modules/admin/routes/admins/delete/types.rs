pub mod request {
    use crate::modules::auth::middleware::AdminAuth;

    pub struct Payload {
        pub id: String,
        pub auth: AdminAuth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        AdminDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdminDeleted => (
                    StatusCode::OK,
                    Json(json!({ "message": "Admin deleted successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        CannotDeleteSelf,
        AdminNotFound,
        FailedToDeleteAdmin,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CannotDeleteSelf => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "You cannot delete your own account" })),
                )
                    .into_response(),
                Self::AdminNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Admin not found" })),
                )
                    .into_response(),
                Self::FailedToDeleteAdmin => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to delete admin" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
