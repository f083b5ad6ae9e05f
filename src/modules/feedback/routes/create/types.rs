pub mod request {
    use crate::{modules::auth::middleware::Auth, utils::validation::validate_not_blank};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(custom(function = "validate_not_blank"), length(max = 2000))]
        pub message: String,
        #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
        pub rating: Option<i32>,
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

    use crate::modules::feedback::repository::Feedback;

    pub enum Success {
        FeedbackSubmitted(Feedback),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FeedbackSubmitted(feedback) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "message": "Thank you for your feedback!",
                        "feedback": feedback,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToSubmitFeedback,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::FailedToSubmitFeedback => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to submit feedback" })),
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

    fn body(message: &str, rating: Option<i32>) -> Body {
        Body {
            message: message.to_string(),
            rating,
        }
    }

    #[test]
    fn rating_is_optional() {
        assert!(body("Masarap ang adobo!", None).validate().is_ok());
    }

    #[test]
    fn rating_must_be_one_to_five() {
        assert!(body("Great", Some(5)).validate().is_ok());
        assert!(body("Great", Some(0)).validate().is_err());
        assert!(body("Great", Some(6)).validate().is_err());
    }

    #[test]
    fn blank_messages_are_rejected() {
        assert!(body("   ", Some(3)).validate().is_err());
    }
}
