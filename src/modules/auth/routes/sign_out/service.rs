use super::types::response;
use crate::{
    modules::auth::{repository::Session, service},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, session: Session) -> response::Response {
    service::end_session(ctx, session)
        .await
        .map_err(|_| response::Error::FailedToSignOut)
        .map(|_| response::Success::SignedOut)
}
