pub mod request {
    use crate::{
        modules::{
            auth::middleware::Auth,
            order::repository::{DeliveryOption, PaymentMethod},
        },
        utils::validation::{validate_contact_number, validate_not_blank},
    };
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(custom(function = "validate_not_blank"), length(max = 255))]
        pub address: String,
        #[validate(custom(function = "validate_contact_number"))]
        pub contact_number: String,
        #[serde(default)]
        pub delivery_option: DeliveryOption,
        #[validate(length(max = 500))]
        pub notes: Option<String>,
        pub payment_method: PaymentMethod,
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

    use crate::modules::order::repository::FullOrder;

    pub enum Success {
        OrderPlaced(FullOrder),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderPlaced(order) => (
                    StatusCode::CREATED,
                    Json(json!({ "message": "Order placed successfully", "order": order })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        EmptyCart,
        FailedToPlaceOrder,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::EmptyCart => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "No items in cart" })),
                )
                    .into_response(),
                Self::FailedToPlaceOrder => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to place order" })),
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
    use crate::modules::order::repository::{DeliveryOption, PaymentMethod};
    use validator::Validate;

    #[test]
    fn delivery_option_is_optional() {
        let body: Body = serde_json::from_value(serde_json::json!({
            "address": "12 Mabini St, Quezon City",
            "contact_number": "+639171234567",
            "payment_method": "cash"
        }))
        .unwrap();

        assert_eq!(body.delivery_option, DeliveryOption::Delivery);
        assert_eq!(body.payment_method, PaymentMethod::Cash);
        assert!(body.validate().is_ok());
    }

    #[test]
    fn bad_contact_numbers_and_blank_addresses_fail() {
        let body: Body = serde_json::from_value(serde_json::json!({
            "address": " ",
            "contact_number": "call me",
            "delivery_option": "pickup",
            "payment_method": "gcash"
        }))
        .unwrap();

        let errors = serde_json::to_value(body.validate().unwrap_err()).unwrap();
        assert!(errors.get("address").is_some());
        assert!(errors.get("contact_number").is_some());
    }

    #[test]
    fn unknown_payment_methods_are_rejected() {
        let body = serde_json::from_value::<Body>(serde_json::json!({
            "address": "12 Mabini St",
            "contact_number": "09171234567",
            "payment_method": "bitcoin"
        }));

        assert!(body.is_err());
    }
}
