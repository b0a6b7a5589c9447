// --- File: crates/services/rzpay_backend/src/app_state.rs ---
use rzpay_common::ServiceFactory;
use rzpay_config::AppConfig;
use std::sync::Arc;

/// Application state that is shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// The application configuration loaded at startup.
    pub config: Arc<AppConfig>,

    /// Source of the gateway and store handles.
    pub service_factory: Arc<dyn ServiceFactory>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, service_factory: Arc<dyn ServiceFactory>) -> Self {
        Self {
            config,
            service_factory,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.config.server.host, self.config.server.port)
    }
}
