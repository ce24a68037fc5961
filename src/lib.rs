//! # users-api
//!
//! A small user-directory REST service: CRUD over a single `users` table,
//! wrapped in the standard cross-cutting middleware (security headers,
//! permissive CORS, body size limit, access logging, Prometheus metrics),
//! with `/health` liveness and `/metrics` scrape endpoints.
//!
//! ## Example
//!
//! ```rust,no_run
//! use users_api::{build_router, AppState, Config, Server};
//!
//! #[tokio::main]
//! async fn main() -> users_api::Result<()> {
//!     let config = Config::load()?;
//!     users_api::init_tracing(&config);
//!
//!     let metrics = users_api::init_metrics()?;
//!     let pool = users_api::db::connect(&config.database).await?;
//!     users_api::db::ensure_schema(&pool).await?;
//!
//!     let state = AppState::new(config.clone(), pool, metrics);
//!     Server::new(config).serve(build_router(state)).await
//! }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod repository;
pub mod router;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Error, ErrorResponse, Result};
pub use observability::{init_metrics, init_tracing};
pub use router::build_router;
pub use server::Server;
pub use state::AppState;
