use axum::{http::StatusCode, Json};
use bigdecimal::{BigDecimal, Zero};
use regex::Regex;
use serde_json::json;
use std::{borrow::Cow, sync::OnceLock};
use validator::{ValidationError, ValidationErrors};

pub fn into_response(errors: ValidationErrors) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({"errors": errors})))
}

fn contact_number_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\+?\d{7,15}$").expect("Invalid contact number regex"))
}

pub fn validate_contact_number(contact_number: &str) -> Result<(), ValidationError> {
    match contact_number_regex().is_match(contact_number) {
        true => Ok(()),
        false => Err(
            ValidationError::new("INVALID_CONTACT_NUMBER").with_message(Cow::from(
                "Contact number must contain 7 to 15 digits with an optional leading +",
            )),
        ),
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    match value.trim().is_empty() {
        true => Err(ValidationError::new("BLANK").with_message(Cow::from("Must not be blank"))),
        false => Ok(()),
    }
}

pub fn validate_price(price: &BigDecimal) -> Result<(), ValidationError> {
    match *price < BigDecimal::zero() {
        true => Err(ValidationError::new("INVALID_PRICE")
            .with_message(Cow::from("Price must not be negative"))),
        false => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_numbers() {
        assert!(validate_contact_number("09171234567").is_ok());
        assert!(validate_contact_number("+639171234567").is_ok());
        assert!(validate_contact_number("12345").is_err());
        assert!(validate_contact_number("0917-123-4567").is_err());
        assert!(validate_contact_number("").is_err());
    }

    #[test]
    fn blank_values() {
        assert!(validate_not_blank("Quezon City").is_ok());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("").is_err());
    }

    #[test]
    fn negative_prices_are_rejected() {
        assert!(validate_price(&BigDecimal::from(0)).is_ok());
        assert!(validate_price(&"149.50".parse::<BigDecimal>().unwrap()).is_ok());
        assert!(validate_price(&"-0.01".parse::<BigDecimal>().unwrap()).is_err());
    }
}
