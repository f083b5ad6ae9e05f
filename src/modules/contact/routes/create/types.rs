pub mod request {
    use crate::{modules::auth::middleware::Auth, utils::validation::validate_not_blank};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(custom(function = "validate_not_blank"), length(max = 100))]
        pub name: String,
        #[validate(
            email(code = "INVALID_EMAIL", message = "Invalid email address"),
            length(max = 100)
        )]
        pub email: String,
        #[validate(custom(function = "validate_not_blank"), length(max = 2000))]
        pub message: String,
    }

    pub struct Payload {
        pub auth: Option<Auth>,
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        MessageSent,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MessageSent => (
                    StatusCode::CREATED,
                    Json(json!({
                        "message": "Your message has been sent. We'll get back to you soon!"
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToSendMessage,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::FailedToSendMessage => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to send message" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod tests {
    use super::request::Body;
    use validator::Validate;

    #[test]
    fn requires_a_real_email() {
        let body = Body {
            name: "Juan dela Cruz".to_string(),
            email: "juan-at-example".to_string(),
            message: "Do you cater for parties?".to_string(),
        };

        assert!(body.validate().is_err());
    }

    #[test]
    fn accepts_a_complete_message() {
        let body = Body {
            name: "Juan dela Cruz".to_string(),
            email: "juan@example.com".to_string(),
            message: "Do you cater for parties?".to_string(),
        };

        assert!(body.validate().is_ok());
    }
}
