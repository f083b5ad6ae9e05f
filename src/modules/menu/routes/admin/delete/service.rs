use super::types::response;
use crate::{modules::menu::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, id: String) -> response::Response {
    match repository::delete_by_id(&ctx.db_conn.pool, id.clone())
        .await
        .map_err(|_| response::Error::FailedToDeleteMenuItem)?
    {
        true => {
            tracing::info!("Deleted menu item {}", id);
            Ok(response::Success::MenuItemDeleted)
        }
        false => Err(response::Error::MenuItemNotFound),
    }
}
