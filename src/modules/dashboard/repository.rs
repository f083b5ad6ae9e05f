use serde::Serialize;
use sqlx::PgExecutor;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[derive(Serialize, Debug, sqlx::FromRow)]
pub struct DashboardTotals {
    pub orders: i64,
    pub pending_orders: i64,
    pub menu_items: i64,
    pub users: i64,
}

#[derive(Serialize, Debug, sqlx::FromRow)]
pub struct SalesRank {
    pub item_id: String,
    pub name: String,
    pub total_quantity: i64,
}

pub async fn get_totals<'e, E: PgExecutor<'e>>(e: E) -> Result<DashboardTotals> {
    sqlx::query_as::<_, DashboardTotals>(
        "
        SELECT
            (SELECT COUNT(id) FROM orders) AS orders,
            (SELECT COUNT(id) FROM orders WHERE status = 'pending') AS pending_orders,
            (SELECT COUNT(id) FROM menu_items) AS menu_items,
            (SELECT COUNT(id) FROM users) AS users
        ",
    )
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch info from tables: {}",
            err
        );
        Error::UnexpectedError
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ranking {
    Best,
    Low,
}

/// Menu items ranked by quantity ordered. Items that never sold count as zero
/// and only show up among the low sellers.
pub async fn find_sales_ranking<'e, E: PgExecutor<'e>>(
    e: E,
    ranking: Ranking,
    limit: i64,
) -> Result<Vec<SalesRank>> {
    let query = match ranking {
        Ranking::Best => {
            "
            SELECT
                menu_items.id AS item_id,
                menu_items.name,
                COALESCE(SUM(order_items.quantity), 0)::BIGINT AS total_quantity
            FROM menu_items
            LEFT JOIN order_items ON order_items.item_id = menu_items.id
            GROUP BY menu_items.id, menu_items.name
            HAVING COALESCE(SUM(order_items.quantity), 0) > 0
            ORDER BY total_quantity DESC, menu_items.name ASC
            LIMIT $1
            "
        }
        Ranking::Low => {
            "
            SELECT
                menu_items.id AS item_id,
                menu_items.name,
                COALESCE(SUM(order_items.quantity), 0)::BIGINT AS total_quantity
            FROM menu_items
            LEFT JOIN order_items ON order_items.item_id = menu_items.id
            GROUP BY menu_items.id, menu_items.name
            ORDER BY total_quantity ASC, menu_items.name ASC
            LIMIT $1
            "
        }
    };

    sqlx::query_as::<_, SalesRank>(query)
        .bind(limit)
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while ranking menu items: {}", err);
            Error::UnexpectedError
        })
}
