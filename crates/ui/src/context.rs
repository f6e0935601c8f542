use std::sync::Arc;

use services::ItemsController;

pub trait UiApp: Send + Sync {
    fn items_controller(&self) -> Arc<ItemsController>;

    /// Short label for where items live, e.g. `http` or `demo`.
    fn backend_label(&self) -> &'static str;
}

#[derive(Clone)]
pub struct AppContext {
    items_controller: Arc<ItemsController>,
    backend_label: &'static str,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            items_controller: app.items_controller(),
            backend_label: app.backend_label(),
        }
    }

    #[must_use]
    pub fn items_controller(&self) -> Arc<ItemsController> {
        Arc::clone(&self.items_controller)
    }

    #[must_use]
    pub fn backend_label(&self) -> &'static str {
        self.backend_label
    }
}

// Provided by the composition root (`crates/app`) or a test harness.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
