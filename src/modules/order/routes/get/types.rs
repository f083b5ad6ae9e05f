pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub id: String,
        pub auth: Auth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::{json, Map, Value};

    use crate::modules::order::{
        lifecycle::{TimelineStep, STEP_LABELS},
        repository::FullOrder,
    };

    pub enum Success {
        Tracking {
            order: FullOrder,
            timeline: Vec<TimelineStep>,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Tracking { order, timeline } => {
                    let timestamps = timeline
                        .iter()
                        .map(|step| (step.label.to_string(), json!(step.timestamp)))
                        .collect::<Map<String, Value>>();

                    (
                        StatusCode::OK,
                        Json(json!({
                            "order": order,
                            "steps": STEP_LABELS,
                            "timestamps": timestamps,
                            "timeline": timeline,
                        })),
                    )
                        .into_response()
                }
            }
        }
    }

    pub enum Error {
        OrderNotFound,
        FailedToFetchOrder,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Order not found" })),
                )
                    .into_response(),
                Self::FailedToFetchOrder => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch order" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
