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

    use crate::modules::order::repository::FullOrder;

    pub enum Success {
        OrderConfirmed(FullOrder),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderConfirmed(order) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Order confirmed", "order": order })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        OrderNotFound,
        AlreadyConfirmed,
        FailedToConfirmOrder,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Order not found" })),
                )
                    .into_response(),
                Self::AlreadyConfirmed => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid status transition" })),
                )
                    .into_response(),
                Self::FailedToConfirmOrder => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to confirm order" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
