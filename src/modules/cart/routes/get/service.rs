use super::types::response;
use crate::{
    modules::{
        auth::middleware::Auth,
        cart::{repository, service},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth) -> response::Response {
    let lines = repository::find_full_by_user_id(&ctx.db_conn.pool, auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchCart)?;

    let totals = service::totals(
        lines.iter().map(|line| &line.line.subtotal),
        &ctx.ordering.delivery_fee,
    );

    Ok(response::Success::Cart { lines, totals })
}
