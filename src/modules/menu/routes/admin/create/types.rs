pub mod request {
    use crate::{
        modules::menu::repository::MenuCategory,
        utils::validation::{validate_not_blank, validate_price},
    };
    use bigdecimal::BigDecimal;
    use serde::Deserialize;
    use validator::Validate;

    fn default_is_available() -> bool {
        true
    }

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(custom(function = "validate_not_blank"), length(max = 100))]
        pub name: String,
        pub description: Option<String>,
        #[validate(custom(function = "validate_price"))]
        pub price: BigDecimal,
        pub category: MenuCategory,
        #[validate(url, length(max = 255))]
        pub image_url: Option<String>,
        #[serde(default = "default_is_available")]
        pub is_available: bool,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::modules::menu::repository::MenuItem;

    pub enum Success {
        MenuItemCreated(MenuItem),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItemCreated(item) => (
                    StatusCode::CREATED,
                    Json(json!({ "message": "Menu item added successfully", "item": item })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToCreateMenuItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::FailedToCreateMenuItem => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to add menu item" })),
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
    fn availability_defaults_to_true() {
        let body: Body = serde_json::from_value(serde_json::json!({
            "name": "Chicken Adobo",
            "price": "149.00",
            "category": "meals"
        }))
        .unwrap();

        assert!(body.is_available);
        assert!(body.validate().is_ok());
    }

    #[test]
    fn blank_names_and_negative_prices_fail() {
        let body: Body = serde_json::from_value(serde_json::json!({
            "name": "  ",
            "price": "-5",
            "category": "desserts"
        }))
        .unwrap();

        let errors = serde_json::to_value(body.validate().unwrap_err()).unwrap();
        assert!(errors.get("name").is_some());
        assert!(errors.get("price").is_some());
    }
}
