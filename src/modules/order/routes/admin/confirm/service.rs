use super::types::{request, response};
use crate::{
    modules::order::{lifecycle, service},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    tracing::info!("Admin {} confirming order {}", payload.auth.admin.id, payload.id);

    service::transition(ctx, payload.id, lifecycle::CONFIRMATION_TARGET)
        .await
        .map_err(|err| match err {
            service::Error::OrderNotFound => response::Error::OrderNotFound,
            service::Error::InvalidTransition { .. } => response::Error::AlreadyConfirmed,
            _ => response::Error::FailedToConfirmOrder,
        })
        .map(response::Success::OrderConfirmed)
}
