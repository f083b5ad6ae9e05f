pub mod request {
    use crate::{
        modules::menu::repository::MenuCategory,
        utils::validation::{validate_not_blank, validate_price},
    };
    use bigdecimal::BigDecimal;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(custom(function = "validate_not_blank"), length(max = 100))]
        pub name: Option<String>,
        pub description: Option<String>,
        #[validate(custom(function = "validate_price"))]
        pub price: Option<BigDecimal>,
        pub category: Option<MenuCategory>,
        #[validate(url, length(max = 255))]
        pub image_url: Option<String>,
        pub is_available: Option<bool>,
    }

    pub struct Payload {
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::modules::menu::repository::MenuItem;

    pub enum Success {
        MenuItemUpdated(MenuItem),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItemUpdated(item) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Menu item updated successfully", "item": item })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        MenuItemNotFound,
        FailedToUpdateMenuItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::MenuItemNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Menu item not found" })),
                )
                    .into_response(),
                Self::FailedToUpdateMenuItem => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update menu item" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
