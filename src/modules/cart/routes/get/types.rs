pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::cart::{repository::FullCartLine, service::Totals};

    pub enum Success {
        Cart {
            lines: Vec<FullCartLine>,
            totals: Totals,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Cart { lines, totals } => (
                    StatusCode::OK,
                    Json(json!({
                        "lines": lines,
                        "sub_total": totals.sub_total,
                        "delivery_fee": totals.delivery_fee,
                        "total": totals.total,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchCart,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchCart => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch cart" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
