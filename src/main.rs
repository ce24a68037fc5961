//! Service entrypoint
//!
//! Startup order: config, tracing, metrics recorder, store connection and
//! schema bootstrap, then serve. A store that cannot be reached at startup is
//! fatal; per-request store errors are not.

use users_api::{build_router, db, AppState, Config, Server};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Tracing may not be initialized yet when config loading fails
        eprintln!("Fatal: {e}");
        std::process::exit(1);
    }
}

async fn run() -> users_api::Result<()> {
    let config = Config::load()?;

    users_api::init_tracing(&config);

    tracing::info!("Starting users-api");

    let metrics = users_api::init_metrics()?;

    let pool = db::connect(&config.database).await?;
    db::ensure_schema(&pool).await?;

    let state = AppState::new(config.clone(), pool.clone(), metrics);
    let app = build_router(state);

    Server::new(config).serve(app).await?;

    // Release the store session before exiting
    pool.close().await;

    Ok(())
}
