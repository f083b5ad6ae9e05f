pub mod request {
    use crate::{modules::menu::repository::MenuCategory, utils::pagination::Pagination};
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Filters {
        pub category: Option<MenuCategory>,
        pub available: Option<bool>,
    }

    pub struct Payload {
        pub pagination: Pagination,
        pub filters: Filters,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{modules::menu::repository::MenuItem, utils::pagination::Paginated};

    pub enum Success {
        Menu(Paginated<MenuItem>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Menu(menu) => (StatusCode::OK, Json(json!(menu))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchMenu,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchMenu => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch menu" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
