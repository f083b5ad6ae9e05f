use super::repository;
use crate::{types::Context, utils::password};

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

/// Seeds the first administrator when the admins table is empty. Returns
/// whether an account was created.
pub async fn ensure_initial_admin(
    ctx: &Context,
    email: &str,
    password: &str,
) -> Result<bool, Error> {
    let existing = repository::count(&ctx.db_conn.pool)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    if existing > 0 {
        return Ok(false);
    }

    let password_hash = password::hash(password).map_err(|_| Error::UnexpectedError)?;

    let admin = repository::create(
        &ctx.db_conn.pool,
        repository::CreateAdminPayload {
            email: email.trim().to_lowercase(),
            password_hash,
            first_name: "Kusina".to_string(),
            last_name: "Admin".to_string(),
        },
    )
    .await
    .map_err(|_| Error::UnexpectedError)?;

    tracing::info!("Created initial admin {}", admin.id);

    Ok(true)
}
