pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub id: String,
        pub auth: Auth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        CartLineRemoved,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CartLineRemoved => (
                    StatusCode::OK,
                    Json(json!({ "message": "Item removed from cart" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        CartLineNotFound,
        FailedToRemoveCartLine,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CartLineNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Cart item not found" })),
                )
                    .into_response(),
                Self::FailedToRemoveCartLine => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to remove item from cart" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
