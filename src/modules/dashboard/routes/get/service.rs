use super::types::response;
use crate::{
    modules::{
        auth::middleware::AdminAuth,
        dashboard::repository::{self, Ranking},
        order,
    },
    types::Context,
    utils::pagination::Pagination,
};
use std::sync::Arc;

const RECENT_ORDERS: u32 = 10;
const RANKED_ITEMS: i64 = 5;

pub async fn service(ctx: Arc<Context>, auth: AdminAuth) -> response::Response {
    let pool = &ctx.db_conn.pool;

    let totals = repository::get_totals(pool)
        .await
        .map_err(|_| response::Error::FailedToFetchDashboard)?;

    let recent_orders = order::repository::find_many(
        pool,
        Pagination {
            page: 1,
            per_page: RECENT_ORDERS,
        },
        None,
    )
    .await
    .map_err(|_| response::Error::FailedToFetchDashboard)?
    .items;

    let best_sellers = repository::find_sales_ranking(pool, Ranking::Best, RANKED_ITEMS)
        .await
        .map_err(|_| response::Error::FailedToFetchDashboard)?;

    let low_sellers = repository::find_sales_ranking(pool, Ranking::Low, RANKED_ITEMS)
        .await
        .map_err(|_| response::Error::FailedToFetchDashboard)?;

    Ok(response::Success::Dashboard(response::Dashboard {
        admin_name: format!("{} {}", auth.admin.first_name, auth.admin.last_name),
        totals,
        recent_orders,
        best_sellers,
        low_sellers,
    }))
}
