use super::types::response;
use crate::{modules::menu::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, id: String) -> response::Response {
    repository::find_by_id(&ctx.db_conn.pool, id)
        .await
        .map_err(|_| response::Error::FailedToFetchMenuItem)?
        .ok_or(response::Error::MenuItemNotFound)
        .map(response::Success::MenuItem)
}
