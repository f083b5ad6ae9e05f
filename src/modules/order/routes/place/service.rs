use super::types::{request, response};
use crate::{modules::order::service, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let request::Payload { auth, body } = payload;

    service::place_order(
        ctx,
        auth.user.id,
        service::PlaceOrderPayload {
            address: body.address.trim().to_string(),
            contact_number: body.contact_number,
            delivery_option: body.delivery_option,
            notes: body
                .notes
                .map(|notes| notes.trim().to_string())
                .filter(|notes| !notes.is_empty()),
            payment_method: body.payment_method,
        },
    )
    .await
    .map_err(|err| match err {
        service::Error::EmptyCart => response::Error::EmptyCart,
        _ => response::Error::FailedToPlaceOrder,
    })
    .map(response::Success::OrderPlaced)
}
