use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct CartLine {
    pub id: String,
    pub user_id: String,
    pub item_id: String,
    pub quantity: i32,
    pub subtotal: BigDecimal,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// A cart line joined with the menu item it points at.
#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct FullCartLine {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub line: CartLine,
    pub item_name: String,
    pub item_price: BigDecimal,
    pub item_image_url: Option<String>,
    pub item_is_available: bool,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn find_full_by_user_id<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: String,
) -> Result<Vec<FullCartLine>> {
    sqlx::query_as::<_, FullCartLine>(
        "
        SELECT
            cart_lines.*,
            menu_items.name AS item_name,
            menu_items.price AS item_price,
            menu_items.image_url AS item_image_url,
            menu_items.is_available AS item_is_available
        FROM cart_lines
        INNER JOIN menu_items ON menu_items.id = cart_lines.item_id
        WHERE cart_lines.user_id = $1
        ORDER BY cart_lines.created_at ASC
        ",
    )
    .bind(user_id.clone())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching cart of user {}: {}", user_id, err);
        Error::UnexpectedError
    })
}

/// Same rows as `find_full_by_user_id`, locked until the surrounding
/// transaction ends. Lines inserted after the snapshot are not included.
pub async fn find_full_by_user_id_for_update<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: String,
) -> Result<Vec<FullCartLine>> {
    sqlx::query_as::<_, FullCartLine>(
        "
        SELECT
            cart_lines.*,
            menu_items.name AS item_name,
            menu_items.price AS item_price,
            menu_items.image_url AS item_image_url,
            menu_items.is_available AS item_is_available
        FROM cart_lines
        INNER JOIN menu_items ON menu_items.id = cart_lines.item_id
        WHERE cart_lines.user_id = $1
        ORDER BY cart_lines.created_at ASC
        FOR UPDATE OF cart_lines
        ",
    )
    .bind(user_id.clone())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while locking cart of user {}: {}", user_id, err);
        Error::UnexpectedError
    })
}

/// Locks an existing line so concurrent decrements of the same item serialize.
pub async fn find_by_user_and_item_for_update<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: String,
    item_id: String,
) -> Result<Option<CartLine>> {
    sqlx::query_as::<_, CartLine>(
        "
        SELECT * FROM cart_lines
        WHERE user_id = $1 AND item_id = $2
        FOR UPDATE
        ",
    )
    .bind(user_id)
    .bind(item_id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching cart line: {}", err);
        Error::UnexpectedError
    })
}

pub struct AddQuantityPayload {
    pub user_id: String,
    pub item_id: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

/// Inserts the line or adds to its quantity in a single statement, so
/// concurrent adds of the same item accumulate even when no row exists yet.
pub async fn add_quantity<'e, E: PgExecutor<'e>>(
    e: E,
    payload: AddQuantityPayload,
) -> Result<CartLine> {
    sqlx::query_as::<_, CartLine>(
        "
        INSERT INTO cart_lines (id, user_id, item_id, quantity, subtotal)
        VALUES ($1, $2, $3, $4, $5 * $4)
        ON CONFLICT (user_id, item_id) DO UPDATE SET
            quantity = cart_lines.quantity + EXCLUDED.quantity,
            subtotal = $5 * (cart_lines.quantity + EXCLUDED.quantity),
            updated_at = NOW() AT TIME ZONE 'utc'
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.user_id)
    .bind(payload.item_id)
    .bind(payload.quantity)
    .bind(payload.unit_price)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while adding to cart line: {}", err);
        Error::UnexpectedError
    })
}

pub struct SetQuantityPayload {
    pub quantity: i32,
    pub subtotal: BigDecimal,
}

/// Overwrites a line the caller already holds locked.
pub async fn set_quantity<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: SetQuantityPayload,
) -> Result<Option<CartLine>> {
    sqlx::query_as::<_, CartLine>(
        "
        UPDATE cart_lines SET
            quantity = $1,
            subtotal = $2,
            updated_at = NOW() AT TIME ZONE 'utc'
        WHERE
            id = $3
        RETURNING *
        ",
    )
    .bind(payload.quantity)
    .bind(payload.subtotal)
    .bind(id.clone())
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating cart line {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn delete_by_id_and_user_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    user_id: String,
) -> Result<bool> {
    sqlx::query("DELETE FROM cart_lines WHERE id = $1 AND user_id = $2")
        .bind(id.clone())
        .bind(user_id)
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Error occurred while deleting cart line {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn delete_many_by_ids_and_user_id<'e, E: PgExecutor<'e>>(
    e: E,
    ids: Vec<String>,
    user_id: String,
) -> Result<u64> {
    sqlx::query("DELETE FROM cart_lines WHERE id = ANY($1) AND user_id = $2")
        .bind(ids)
        .bind(user_id.clone())
        .execute(e)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!("Error occurred while clearing cart of user {}: {}", user_id, err);
            Error::UnexpectedError
        })
}
