use super::types::response;
use crate::{
    modules::{admin, user},
    types::Context,
    utils::pagination::Pagination,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, pagination: Pagination) -> response::Response {
    let customers = user::repository::find_many(&ctx.db_conn.pool, pagination)
        .await
        .map_err(|_| response::Error::FailedToFetchUsers)?;

    let admins = admin::repository::find_all(&ctx.db_conn.pool)
        .await
        .map_err(|_| response::Error::FailedToFetchUsers)?;

    Ok(response::Success::Users { customers, admins })
}
