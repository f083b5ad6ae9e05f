pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 1, message = "Current password is required"))]
        pub current_password: String,
        #[validate(length(
            min = 8,
            max = 128,
            code = "INVALID_PASSWORD",
            message = "Password must be between 8 and 128 characters"
        ))]
        pub new_password: String,
    }

    pub struct Payload {
        pub auth: Auth,
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        PasswordChanged,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PasswordChanged => (
                    StatusCode::OK,
                    Json(json!({ "message": "Password changed successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        IncorrectPassword,
        FailedToChangePassword,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::IncorrectPassword => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Current password is incorrect" })),
                )
                    .into_response(),
                Self::FailedToChangePassword => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to change password" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
