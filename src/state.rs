use std::sync::Arc;

use tokio::sync::Mutex;

use crate::appointments::store::AppointmentStore;
use crate::config::AppConfig;

/// Shared application state. The store lives behind a mutex because axum
/// serves requests on a multi-threaded runtime; handlers never hold the lock
/// across an await point.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<AppointmentStore>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        Ok(Self::from_parts(config))
    }

    pub fn from_parts(config: Arc<AppConfig>) -> Self {
        Self {
            store: Arc::new(Mutex::new(AppointmentStore::new())),
            config,
        }
    }

    /// Fresh state with default config, one per test. This is the reset hook:
    /// nothing leaks between tests because each builds its own store.
    pub fn fake() -> Self {
        Self::from_parts(Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
        }))
    }
}
