use super::{repository::Session, service};
use crate::{
    modules::{admin::repository::Admin, user::repository::User},
    types::Context,
};
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json, RequestPartsExt,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde_json::json;
use std::sync::Arc;

fn unauthorized(message: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": message }))).into_response()
}

fn rejection(err: service::Error) -> Response {
    match err {
        service::Error::InvalidSession => unauthorized("Invalid session token"),
        service::Error::UnexpectedError => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Sorry, an error occurred" })),
        )
            .into_response(),
    }
}

async fn bearer_token(parts: &mut Parts) -> Result<String, Response> {
    parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string())
        .map_err(|_| unauthorized("Not logged in"))
}

/// A customer resolved from the `CUSTOMER` session scope.
#[derive(Clone, Debug)]
pub struct Auth {
    pub user: User,
    pub session: Session,
}

#[async_trait]
impl<S> FromRequestParts<S> for Auth
where
    Arc<Context>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ctx = Arc::<Context>::from_ref(state);
        let token = bearer_token(parts).await?;

        service::resolve_customer(ctx, token)
            .await
            .map(|(session, user)| Self { user, session })
            .map_err(rejection)
    }
}

/// An administrator resolved from the `ADMIN` session scope. Customer tokens
/// never resolve here.
#[derive(Clone, Debug)]
pub struct AdminAuth {
    pub admin: Admin,
    pub session: Session,
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminAuth
where
    Arc<Context>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ctx = Arc::<Context>::from_ref(state);
        let token = bearer_token(parts).await?;

        service::resolve_admin(ctx, token)
            .await
            .map(|(session, admin)| Self { admin, session })
            .map_err(rejection)
    }
}
