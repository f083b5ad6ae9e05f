pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;
    use validator::Validate;

    pub const MAX_QUANTITY_CHANGE: i32 = 100;

    fn default_quantity() -> i32 {
        1
    }

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 1, message = "Item is required"))]
        pub item_id: String,
        /// Negative values take items out of the cart.
        #[serde(default = "default_quantity")]
        pub quantity: i32,
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

    use crate::modules::cart::repository::CartLine;

    pub enum Success {
        CartUpdated(Option<CartLine>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CartUpdated(Some(line)) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Item added to cart", "line": line })),
                )
                    .into_response(),
                Self::CartUpdated(None) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Item removed from cart", "line": null })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InvalidQuantity,
        MenuItemNotFound,
        MenuItemUnavailable,
        FailedToUpdateCart,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::InvalidQuantity => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid quantity" })),
                )
                    .into_response(),
                Self::MenuItemNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Menu item not found" })),
                )
                    .into_response(),
                Self::MenuItemUnavailable => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Menu item is not available" })),
                )
                    .into_response(),
                Self::FailedToUpdateCart => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update cart" })),
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

    #[test]
    fn quantity_defaults_to_one() {
        let body: Body =
            serde_json::from_str(r#"{ "item_id": "01J9ZKQ4V6Y3S7ZB5N2W8X1C0D" }"#).unwrap();
        assert_eq!(body.quantity, 1);
    }

    #[test]
    fn negative_quantities_are_accepted() {
        let body: Body =
            serde_json::from_str(r#"{ "item_id": "01J9ZKQ4V6Y3S7ZB5N2W8X1C0D", "quantity": -1 }"#)
                .unwrap();
        assert_eq!(body.quantity, -1);
    }
}
