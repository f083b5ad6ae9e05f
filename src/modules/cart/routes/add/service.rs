use super::types::{request, response};
use crate::{
    modules::{
        cart::{
            repository,
            service::{self, LineChange},
        },
        menu,
    },
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let request::Payload { auth, body } = payload;

    if !(-request::MAX_QUANTITY_CHANGE..=request::MAX_QUANTITY_CHANGE).contains(&body.quantity) {
        return Err(response::Error::InvalidQuantity);
    }

    let mut tx = ctx
        .db_conn
        .pool
        .begin()
        .await
        .map_err(|_| response::Error::FailedToUpdateCart)?;

    let item = menu::repository::find_by_id(&mut *tx, body.item_id.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateCart)?
        .ok_or(response::Error::MenuItemNotFound)?;

    if body.quantity > 0 && !item.is_available {
        return Err(response::Error::MenuItemUnavailable);
    }

    let line = match body.quantity > 0 {
        true => Some(
            repository::add_quantity(
                &mut *tx,
                repository::AddQuantityPayload {
                    user_id: auth.user.id.clone(),
                    item_id: item.id.clone(),
                    quantity: body.quantity,
                    unit_price: item.price.clone(),
                },
            )
            .await
            .map_err(|_| response::Error::FailedToUpdateCart)?,
        ),
        false => {
            let existing = repository::find_by_user_and_item_for_update(
                &mut *tx,
                auth.user.id.clone(),
                item.id.clone(),
            )
            .await
            .map_err(|_| response::Error::FailedToUpdateCart)?;

            match existing {
                None => None,
                Some(existing) => match service::apply_quantity_change(
                    Some(existing.quantity),
                    body.quantity,
                    &item.price,
                ) {
                    LineChange::Set { quantity, subtotal } => repository::set_quantity(
                        &mut *tx,
                        existing.id,
                        repository::SetQuantityPayload { quantity, subtotal },
                    )
                    .await
                    .map_err(|_| response::Error::FailedToUpdateCart)?,
                    LineChange::Remove => {
                        repository::delete_by_id_and_user_id(
                            &mut *tx,
                            existing.id,
                            auth.user.id.clone(),
                        )
                        .await
                        .map_err(|_| response::Error::FailedToUpdateCart)?;
                        None
                    }
                },
            }
        }
    };

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit cart update: {}", err);
        response::Error::FailedToUpdateCart
    })?;

    Ok(response::Success::CartUpdated(line))
}
