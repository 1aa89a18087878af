//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ShippingConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The shipping form keeps no server-side
/// state between requests, so this only carries configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ShippingConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ShippingConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ShippingConfig {
        &self.inner.config
    }
}
