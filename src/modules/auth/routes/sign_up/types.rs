pub mod request {
    use crate::utils::validation::validate_not_blank;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(
            email(code = "INVALID_USER_EMAIL", message = "Invalid email address"),
            length(max = 100)
        )]
        pub email: String,
        #[validate(length(
            min = 8,
            max = 128,
            code = "INVALID_PASSWORD",
            message = "Password must be between 8 and 128 characters"
        ))]
        pub password: String,
        #[validate(custom(function = "validate_not_blank"), length(max = 50))]
        pub first_name: String,
        #[validate(custom(function = "validate_not_blank"), length(max = 50))]
        pub last_name: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::modules::user::repository::User;

    pub enum Success {
        AccountCreated(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AccountCreated(user) => (
                    StatusCode::CREATED,
                    Json(json!({ "message": "Account created successfully", "user": user })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToFetchUser,
        EmailAlreadyInUse,
        SignupFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::FailedToFetchUser => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch user" })),
                )
                    .into_response(),
                Self::EmailAlreadyInUse => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Email already in use" })),
                )
                    .into_response(),
                Self::SignupFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Sign up failed!" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
