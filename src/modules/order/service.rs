use super::{
    lifecycle::{self, DeliveryStages, TransitionError},
    repository::{self, DeliveryOption, FullOrder, NewOrderItem, OrderStatus, PaymentMethod},
};
use crate::{
    modules::cart::{self, repository::FullCartLine},
    types::Context,
};
use chrono::Utc;
use std::sync::Arc;

#[derive(Debug)]
pub enum Error {
    EmptyCart,
    OrderNotFound,
    InvalidTransition { from: OrderStatus, to: OrderStatus },
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

/// Freezes cart lines into order items using the menu price at checkout time.
pub fn snapshot_items(lines: &[FullCartLine]) -> Vec<NewOrderItem> {
    lines
        .iter()
        .map(|line| NewOrderItem {
            item_id: line.line.item_id.clone(),
            name: line.item_name.clone(),
            unit_price: line.item_price.clone(),
            quantity: line.line.quantity,
            subtotal: cart::service::line_subtotal(&line.item_price, line.line.quantity),
        })
        .collect()
}

pub struct PlaceOrderPayload {
    pub address: String,
    pub contact_number: String,
    pub delivery_option: DeliveryOption,
    pub notes: Option<String>,
    pub payment_method: PaymentMethod,
}

/// Turns the customer's cart into an order. Every write shares one
/// transaction, so a failure leaves both the cart and the orders untouched.
/// The snapshotted lines stay locked until commit and only they are removed,
/// so a concurrent checkout of the same cart finds it empty.
pub async fn place_order(
    ctx: Arc<Context>,
    user_id: String,
    payload: PlaceOrderPayload,
) -> Result<FullOrder> {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start order transaction: {}", err);
        Error::UnexpectedError
    })?;

    let lines = cart::repository::find_full_by_user_id_for_update(&mut *tx, user_id.clone())
        .await
        .map_err(|_| Error::UnexpectedError)?;

    if lines.is_empty() {
        return Err(Error::EmptyCart);
    }

    let new_items = snapshot_items(&lines);
    let totals = cart::service::totals(
        new_items.iter().map(|item| &item.subtotal),
        &ctx.ordering.delivery_fee,
    );

    let order = repository::create(
        &mut *tx,
        repository::CreateOrderPayload {
            user_id: user_id.clone(),
            sub_total: totals.sub_total,
            delivery_fee: totals.delivery_fee,
            total: totals.total,
            notes: payload.notes,
        },
    )
    .await
    .map_err(|_| Error::UnexpectedError)?;

    let mut items = Vec::with_capacity(new_items.len());
    for item in new_items {
        items.push(
            repository::create_item(&mut *tx, order.id.clone(), item)
                .await
                .map_err(|_| Error::UnexpectedError)?,
        );
    }

    let delivery = repository::create_delivery(
        &mut *tx,
        repository::CreateDeliveryPayload {
            order_id: order.id.clone(),
            address: payload.address,
            contact_number: payload.contact_number,
            delivery_option: payload.delivery_option,
        },
    )
    .await
    .map_err(|_| Error::UnexpectedError)?;

    let payment = repository::create_payment(&mut *tx, order.id.clone(), payload.payment_method)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    cart::repository::delete_many_by_ids_and_user_id(
        &mut *tx,
        lines.iter().map(|line| line.line.id.clone()).collect(),
        user_id.clone(),
    )
    .await
    .map_err(|_| Error::UnexpectedError)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit order {}: {}", order.id, err);
        Error::UnexpectedError
    })?;

    tracing::info!(
        "User {} placed order {} with {} item(s)",
        user_id,
        order.id,
        items.len()
    );

    Ok(FullOrder {
        order,
        items,
        delivery: Some(delivery),
        payment: Some(payment),
    })
}

/// Advances an order and its delivery to `target`. The order row stays locked
/// until commit so concurrent updates queue up behind each other.
pub async fn transition(
    ctx: Arc<Context>,
    order_id: String,
    target: OrderStatus,
) -> Result<FullOrder> {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start status transaction: {}", err);
        Error::UnexpectedError
    })?;

    let order = repository::find_by_id_for_update(&mut *tx, order_id.clone())
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::OrderNotFound)?;

    let delivery = repository::find_delivery_by_order_id(&mut *tx, order_id.clone())
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or_else(|| {
            tracing::error!("Order {} has no delivery record", order_id);
            Error::UnexpectedError
        })?;

    let stages = lifecycle::advance(
        order.status,
        target,
        &DeliveryStages::from(&delivery),
        Utc::now().naive_utc(),
    )
    .map_err(|TransitionError::NotForward { from, to }| Error::InvalidTransition { from, to })?;

    repository::update_status(&mut *tx, order_id.clone(), target)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    repository::update_delivery_progress(
        &mut *tx,
        order_id.clone(),
        repository::UpdateDeliveryProgressPayload {
            status: target,
            confirmed_at: stages.confirmed_at,
            preparing_at: stages.preparing_at,
            out_for_delivery_at: stages.out_for_delivery_at,
            delivered_at: stages.delivered_at,
        },
    )
    .await
    .map_err(|_| Error::UnexpectedError)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit status of order {}: {}", order_id, err);
        Error::UnexpectedError
    })?;

    tracing::info!(
        "Order {} moved from {} to {}",
        order_id,
        order.status.as_str(),
        target.as_str()
    );

    repository::find_full_by_id(&ctx.db_conn.pool, order_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::OrderNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cart::repository::CartLine;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn money(raw: &str) -> BigDecimal {
        BigDecimal::from_str(raw).unwrap()
    }

    fn line(item_id: &str, name: &str, price: &str, quantity: i32) -> FullCartLine {
        let created_at = NaiveDate::from_ymd_opt(2025, 10, 17)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();

        FullCartLine {
            line: CartLine {
                id: format!("line-{item_id}"),
                user_id: "user-1".to_string(),
                item_id: item_id.to_string(),
                quantity,
                // stale on purpose; placement recomputes from the menu price
                subtotal: money("0.00"),
                created_at,
                updated_at: None,
            },
            item_name: name.to_string(),
            item_price: money(price),
            item_image_url: None,
            item_is_available: true,
        }
    }

    #[test]
    fn every_cart_line_becomes_one_order_item() {
        let lines = vec![
            line("sinigang", "Sinigang na Baboy", "189.00", 1),
            line("halo-halo", "Halo-Halo", "95.00", 2),
            line("calamansi", "Calamansi Juice", "45.00", 3),
        ];

        let items = snapshot_items(&lines);

        assert_eq!(items.len(), lines.len());
        assert_eq!(items[1].name, "Halo-Halo");
        assert_eq!(items[1].unit_price, money("95.00"));
        assert_eq!(items[1].subtotal, money("190.00"));
        assert_eq!(items[2].subtotal, money("135.00"));
    }

    #[test]
    fn order_total_is_subtotals_plus_delivery_fee() {
        let lines = vec![
            line("sinigang", "Sinigang na Baboy", "189.00", 1),
            line("halo-halo", "Halo-Halo", "95.00", 2),
        ];
        let items = snapshot_items(&lines);

        let totals =
            cart::service::totals(items.iter().map(|item| &item.subtotal), &money("40.00"));

        assert_eq!(totals.sub_total, money("379.00"));
        assert_eq!(totals.total, money("419.00"));
    }
}
