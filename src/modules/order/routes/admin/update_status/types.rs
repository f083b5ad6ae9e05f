pub mod request {
    use crate::modules::{auth::middleware::AdminAuth, order::repository::OrderStatus};
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub status: OrderStatus,
    }

    pub struct Payload {
        pub id: String,
        pub auth: AdminAuth,
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::order::{repository::FullOrder, service};

    pub enum Success {
        StatusUpdated(FullOrder),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::StatusUpdated(order) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Order status updated", "order": order })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        OrderNotFound,
        InvalidTransition,
        FailedToUpdateStatus,
    }

    impl From<service::Error> for Error {
        fn from(err: service::Error) -> Self {
            match err {
                service::Error::OrderNotFound => Self::OrderNotFound,
                service::Error::InvalidTransition { .. } => Self::InvalidTransition,
                _ => Self::FailedToUpdateStatus,
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Order not found" })),
                )
                    .into_response(),
                Self::InvalidTransition => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid status transition" })),
                )
                    .into_response(),
                Self::FailedToUpdateStatus => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update order status" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
