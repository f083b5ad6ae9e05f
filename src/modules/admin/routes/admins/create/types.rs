pub mod request {
    use crate::{modules::auth::middleware::AdminAuth, utils::validation::validate_not_blank};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(
            email(code = "INVALID_ADMIN_EMAIL", message = "Invalid email address"),
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

    pub struct Payload {
        pub auth: AdminAuth,
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::modules::admin::repository::Admin;

    pub enum Success {
        AdminCreated(Admin),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdminCreated(admin) => (
                    StatusCode::CREATED,
                    Json(json!({ "message": "Admin created successfully", "admin": admin })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        EmailAlreadyInUse,
        FailedToCreateAdmin,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::EmailAlreadyInUse => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Email already in use" })),
                )
                    .into_response(),
                Self::FailedToCreateAdmin => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create admin" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
