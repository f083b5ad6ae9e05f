pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde::Serialize;
    use serde_json::json;

    use crate::modules::{
        dashboard::repository::{DashboardTotals, SalesRank},
        order::repository::FullOrder,
    };

    #[derive(Serialize)]
    pub struct Dashboard {
        pub admin_name: String,
        pub totals: DashboardTotals,
        pub recent_orders: Vec<FullOrder>,
        pub best_sellers: Vec<SalesRank>,
        pub low_sellers: Vec<SalesRank>,
    }

    pub enum Success {
        Dashboard(Dashboard),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Dashboard(dashboard) => {
                    (StatusCode::OK, Json(json!(dashboard))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToFetchDashboard,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchDashboard => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch dashboard" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
