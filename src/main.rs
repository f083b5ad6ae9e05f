mod app;
mod modules;
mod types;
mod utils;

use crate::{
    app::App,
    modules::admin,
    types::{Config, Context, ToContext},
};
use std::{process, sync::Arc};
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Invalid configuration: {}", err);
            process::exit(1);
        }
    };

    let initial_admin = config.initial_admin.clone();

    let ctx: Arc<Context> = match config.to_context().await {
        Ok(ctx) => Arc::new(ctx),
        Err(err) => {
            tracing::error!("Failed to start: {}", err);
            process::exit(1);
        }
    };

    if let Some(initial_admin) = initial_admin {
        let created = admin::service::ensure_initial_admin(
            &ctx,
            &initial_admin.email,
            &initial_admin.password,
        )
        .await;

        if let Err(err) = created {
            tracing::error!("Failed to create the initial admin: {:?}", err);
            process::exit(1);
        }
    }

    if let Err(err) = App::new(ctx).serve().await {
        tracing::error!("Server stopped: {}", err);
        process::exit(1);
    }
}
