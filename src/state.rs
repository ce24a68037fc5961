//! Application state shared across handlers

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Instant;

use crate::{config::Config, repository::UserRepository};

/// Application state: configuration, the shared store session, the metrics
/// render handle, and the process start instant for the uptime probe.
///
/// Cheap to clone; handlers receive it via `State`.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    pool: PgPool,
    metrics: PrometheusHandle,
    started_at: Instant,
}

impl AppState {
    pub fn new(config: Config, pool: PgPool, metrics: PrometheusHandle) -> Self {
        Self {
            config: Arc::new(config),
            pool,
            metrics,
            started_at: Instant::now(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Repository over the shared store session
    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }

    pub fn metrics(&self) -> &PrometheusHandle {
        &self.metrics
    }

    /// Seconds since the process started serving
    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
