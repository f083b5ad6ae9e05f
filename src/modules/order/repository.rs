use chrono::NaiveDateTime;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use sqlx::{types::BigDecimal, PgExecutor};
use std::str::FromStr;
use ulid::Ulid;

use crate::utils::pagination::{Paginated, Pagination};

type Result<T> = std::result::Result<T, Error>;

/// Declaration order is lifecycle order; `Ord` relies on it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "preparing" => Ok(OrderStatus::Preparing),
            "out_for_delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            _ => Err(format!("'{}' is not a valid OrderStatus", s)),
        }
    }
}

crate::text_column!(OrderStatus);

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Gcash,
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Gcash => "gcash",
            PaymentMethod::Card => "card",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "gcash" => Ok(PaymentMethod::Gcash),
            "card" => Ok(PaymentMethod::Card),
            _ => Err(format!("'{}' is not a valid PaymentMethod", s)),
        }
    }
}

crate::text_column!(PaymentMethod);

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            _ => Err(format!("'{}' is not a valid PaymentStatus", s)),
        }
    }
}

crate::text_column!(PaymentStatus);

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    #[default]
    Delivery,
    Pickup,
}

impl DeliveryOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryOption::Delivery => "delivery",
            DeliveryOption::Pickup => "pickup",
        }
    }
}

impl FromStr for DeliveryOption {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "delivery" => Ok(DeliveryOption::Delivery),
            "pickup" => Ok(DeliveryOption::Pickup),
            _ => Err(format!("'{}' is not a valid DeliveryOption", s)),
        }
    }
}

crate::text_column!(DeliveryOption);

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub sub_total: BigDecimal,
    pub delivery_fee: BigDecimal,
    pub total: BigDecimal,
    pub status: OrderStatus,
    pub notes: Option<String>,
    pub seen_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub item_id: Option<String>,
    pub name: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
    pub subtotal: BigDecimal,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Delivery {
    pub id: String,
    pub order_id: String,
    pub address: String,
    pub contact_number: String,
    pub delivery_option: DeliveryOption,
    pub status: OrderStatus,
    pub confirmed_at: Option<NaiveDateTime>,
    pub preparing_at: Option<NaiveDateTime>,
    pub out_for_delivery_at: Option<NaiveDateTime>,
    pub delivered_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Payment {
    pub id: String,
    pub order_id: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Clone, Debug)]
pub struct FullOrder {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
    pub delivery: Option<Delivery>,
    pub payment: Option<Payment>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

fn unexpected(action: &str) -> impl FnOnce(sqlx::Error) -> Error + '_ {
    move |err| {
        tracing::error!("Error occurred while {}: {}", action, err);
        Error::UnexpectedError
    }
}

pub struct CreateOrderPayload {
    pub user_id: String,
    pub sub_total: BigDecimal,
    pub delivery_fee: BigDecimal,
    pub total: BigDecimal,
    pub notes: Option<String>,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateOrderPayload) -> Result<Order> {
    sqlx::query_as::<_, Order>(
        "
        INSERT INTO orders (id, user_id, sub_total, delivery_fee, total, status, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.user_id)
    .bind(payload.sub_total)
    .bind(payload.delivery_fee)
    .bind(payload.total)
    .bind(OrderStatus::Pending.as_str())
    .bind(payload.notes)
    .fetch_one(e)
    .await
    .map_err(unexpected("creating an order"))
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewOrderItem {
    pub item_id: String,
    pub name: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
    pub subtotal: BigDecimal,
}

pub async fn create_item<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: String,
    item: NewOrderItem,
) -> Result<OrderItem> {
    sqlx::query_as::<_, OrderItem>(
        "
        INSERT INTO order_items (id, order_id, item_id, name, unit_price, quantity, subtotal)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(order_id)
    .bind(item.item_id)
    .bind(item.name)
    .bind(item.unit_price)
    .bind(item.quantity)
    .bind(item.subtotal)
    .fetch_one(e)
    .await
    .map_err(unexpected("creating an order item"))
}

pub struct CreateDeliveryPayload {
    pub order_id: String,
    pub address: String,
    pub contact_number: String,
    pub delivery_option: DeliveryOption,
}

pub async fn create_delivery<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateDeliveryPayload,
) -> Result<Delivery> {
    sqlx::query_as::<_, Delivery>(
        "
        INSERT INTO deliveries (id, order_id, address, contact_number, delivery_option, status)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.order_id)
    .bind(payload.address)
    .bind(payload.contact_number)
    .bind(payload.delivery_option.as_str())
    .bind(OrderStatus::Pending.as_str())
    .fetch_one(e)
    .await
    .map_err(unexpected("creating a delivery"))
}

pub async fn create_payment<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: String,
    method: PaymentMethod,
) -> Result<Payment> {
    sqlx::query_as::<_, Payment>(
        "
        INSERT INTO payments (id, order_id, method, status)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(order_id)
    .bind(method.as_str())
    .bind(PaymentStatus::Pending.as_str())
    .fetch_one(e)
    .await
    .map_err(unexpected("creating a payment"))
}

/// Loads items, delivery and payment rows for a batch of orders, keeping the
/// order of `orders`.
async fn attach_details<'e, E: PgExecutor<'e> + Copy>(
    e: E,
    orders: Vec<Order>,
) -> Result<Vec<FullOrder>> {
    if orders.is_empty() {
        return Ok(vec![]);
    }

    let order_ids = orders.iter().map(|order| order.id.clone()).collect::<Vec<_>>();

    let mut items = sqlx::query_as::<_, OrderItem>(
        "SELECT * FROM order_items WHERE order_id = ANY($1) ORDER BY created_at ASC, id ASC",
    )
    .bind(order_ids.clone())
    .fetch_all(e)
    .await
    .map_err(unexpected("fetching order items"))?
    .into_iter()
    .into_group_map_by(|item| item.order_id.clone());

    let mut deliveries = sqlx::query_as::<_, Delivery>(
        "SELECT * FROM deliveries WHERE order_id = ANY($1)",
    )
    .bind(order_ids.clone())
    .fetch_all(e)
    .await
    .map_err(unexpected("fetching deliveries"))?
    .into_iter()
    .map(|delivery| (delivery.order_id.clone(), delivery))
    .collect::<std::collections::HashMap<_, _>>();

    let mut payments = sqlx::query_as::<_, Payment>(
        "SELECT * FROM payments WHERE order_id = ANY($1)",
    )
    .bind(order_ids.clone())
    .fetch_all(e)
    .await
    .map_err(unexpected("fetching payments"))?
    .into_iter()
    .map(|payment| (payment.order_id.clone(), payment))
    .collect::<std::collections::HashMap<_, _>>();

    Ok(orders
        .into_iter()
        .map(|order| FullOrder {
            items: items.remove(&order.id).unwrap_or_default(),
            delivery: deliveries.remove(&order.id),
            payment: payments.remove(&order.id),
            order,
        })
        .collect())
}

pub async fn find_full_by_id<'e, E: PgExecutor<'e> + Copy>(
    e: E,
    id: String,
) -> Result<Option<FullOrder>> {
    let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(unexpected("fetching an order"))?;

    match order {
        Some(order) => Ok(attach_details(e, vec![order]).await?.pop()),
        None => Ok(None),
    }
}

pub async fn find_full_by_id_and_user_id<'e, E: PgExecutor<'e> + Copy>(
    e: E,
    id: String,
    user_id: String,
) -> Result<Option<FullOrder>> {
    let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(e)
        .await
        .map_err(unexpected("fetching a customer order"))?;

    match order {
        Some(order) => Ok(attach_details(e, vec![order]).await?.pop()),
        None => Ok(None),
    }
}

#[derive(sqlx::FromRow)]
struct CountedOrder {
    #[sqlx(flatten)]
    order: Order,
    total_rows: i64,
}

async fn paginate<'e, E: PgExecutor<'e> + Copy>(
    e: E,
    rows: Vec<CountedOrder>,
    pagination: &Pagination,
) -> Result<Paginated<FullOrder>> {
    let total = rows.first().map(|row| row.total_rows).unwrap_or(0);
    let orders = attach_details(e, rows.into_iter().map(|row| row.order).collect()).await?;

    Ok(Paginated::new(orders, total as u32, pagination))
}

/// Customer-facing grouping of statuses.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HistoryFilter {
    Ongoing,
    Completed,
}

impl HistoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryFilter::Ongoing => "ongoing",
            HistoryFilter::Completed => "completed",
        }
    }
}

pub async fn find_many_by_user_id<'e, E: PgExecutor<'e> + Copy>(
    e: E,
    user_id: String,
    pagination: Pagination,
    filter: Option<HistoryFilter>,
) -> Result<Paginated<FullOrder>> {
    let rows = sqlx::query_as::<_, CountedOrder>(
        "
        SELECT orders.*, COUNT(*) OVER () AS total_rows
        FROM orders
        WHERE
            user_id = $1
            AND (
                $2::TEXT IS NULL
                OR ($2 = 'completed' AND status = 'delivered')
                OR ($2 = 'ongoing' AND status <> 'delivered')
            )
        ORDER BY created_at DESC
        LIMIT $3 OFFSET $4
        ",
    )
    .bind(user_id)
    .bind(filter.map(|filter| filter.as_str()))
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(unexpected("fetching customer orders"))?;

    paginate(e, rows, &pagination).await
}

pub async fn find_many<'e, E: PgExecutor<'e> + Copy>(
    e: E,
    pagination: Pagination,
    status: Option<OrderStatus>,
) -> Result<Paginated<FullOrder>> {
    let rows = sqlx::query_as::<_, CountedOrder>(
        "
        SELECT orders.*, COUNT(*) OVER () AS total_rows
        FROM orders
        WHERE $1::TEXT IS NULL OR status = $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        ",
    )
    .bind(status.map(|status| status.as_str()))
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(unexpected("fetching orders"))?;

    paginate(e, rows, &pagination).await
}

/// Row-locks the order for the rest of the transaction.
pub async fn find_by_id_for_update<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
) -> Result<Option<Order>> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1 FOR UPDATE")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(unexpected("locking an order"))
}

pub async fn find_delivery_by_order_id<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: String,
) -> Result<Option<Delivery>> {
    sqlx::query_as::<_, Delivery>("SELECT * FROM deliveries WHERE order_id = $1 FOR UPDATE")
        .bind(order_id)
        .fetch_optional(e)
        .await
        .map_err(unexpected("fetching a delivery"))
}

pub async fn update_status<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    status: OrderStatus,
) -> Result<Order> {
    sqlx::query_as::<_, Order>(
        "
        UPDATE orders SET
            status = $1,
            updated_at = NOW() AT TIME ZONE 'utc'
        WHERE
            id = $2
        RETURNING *
        ",
    )
    .bind(status.as_str())
    .bind(id)
    .fetch_one(e)
    .await
    .map_err(unexpected("updating order status"))
}

pub struct UpdateDeliveryProgressPayload {
    pub status: OrderStatus,
    pub confirmed_at: Option<NaiveDateTime>,
    pub preparing_at: Option<NaiveDateTime>,
    pub out_for_delivery_at: Option<NaiveDateTime>,
    pub delivered_at: Option<NaiveDateTime>,
}

pub async fn update_delivery_progress<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: String,
    payload: UpdateDeliveryProgressPayload,
) -> Result<Delivery> {
    sqlx::query_as::<_, Delivery>(
        "
        UPDATE deliveries SET
            status = $1,
            confirmed_at = $2,
            preparing_at = $3,
            out_for_delivery_at = $4,
            delivered_at = $5
        WHERE
            order_id = $6
        RETURNING *
        ",
    )
    .bind(payload.status.as_str())
    .bind(payload.confirmed_at)
    .bind(payload.preparing_at)
    .bind(payload.out_for_delivery_at)
    .bind(payload.delivered_at)
    .bind(order_id)
    .fetch_one(e)
    .await
    .map_err(unexpected("updating delivery progress"))
}

/// Records the first time the customer looked at the order.
pub async fn mark_seen<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    user_id: String,
) -> Result<Option<Order>> {
    sqlx::query_as::<_, Order>(
        "
        UPDATE orders SET
            seen_at = COALESCE(seen_at, NOW() AT TIME ZONE 'utc')
        WHERE
            id = $1
            AND user_id = $2
        RETURNING *
        ",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(e)
    .await
    .map_err(unexpected("marking an order as seen"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_are_ordered_along_the_lifecycle() {
        assert!(OrderStatus::Pending < OrderStatus::Confirmed);
        assert!(OrderStatus::Confirmed < OrderStatus::Preparing);
        assert!(OrderStatus::Preparing < OrderStatus::OutForDelivery);
        assert!(OrderStatus::OutForDelivery < OrderStatus::Delivered);
    }

    #[test]
    fn statuses_use_snake_case_on_the_wire() {
        let status: OrderStatus = serde_json::from_str("\"out_for_delivery\"").unwrap();
        assert_eq!(status, OrderStatus::OutForDelivery);
        assert_eq!(
            serde_json::to_string(&OrderStatus::OutForDelivery).unwrap(),
            "\"out_for_delivery\""
        );
        assert_eq!("out_for_delivery".parse(), Ok(OrderStatus::OutForDelivery));
        assert!("cancelled".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn payment_methods_parse() {
        let method: PaymentMethod = serde_json::from_str("\"gcash\"").unwrap();
        assert_eq!(method, PaymentMethod::Gcash);
        assert!("paypal".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn delivery_option_defaults_to_delivery() {
        assert_eq!(DeliveryOption::default(), DeliveryOption::Delivery);
    }
}
