use std::sync::Arc;

use items_api::{ApiConfig, HttpItemsApi, InMemoryItemsApi, ItemsApi};
use items_core::model::{Item, ItemId};
use tracing::info;

use crate::controller::ItemsController;
use crate::error::AppServicesError;
use crate::sync_service::ItemSyncService;

/// Assembles app-facing services over one collection backend.
#[derive(Clone)]
pub struct AppServices {
    backend: &'static str,
    sync: ItemSyncService,
    controller: Arc<ItemsController>,
}

impl AppServices {
    /// Build services that talk to the collection at `origin`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Config` if `origin` is not an http(s) URL.
    pub fn http(origin: &str) -> Result<Self, AppServicesError> {
        let config = ApiConfig::new(origin)?;
        info!(url = %config.collection_url(), "using remote items collection");
        Ok(Self::with_api("http", Arc::new(HttpItemsApi::new(config))))
    }

    /// Build services over a process-local collection seeded with a few items.
    #[must_use]
    pub fn demo() -> Self {
        info!("using in-memory demo collection");
        Self::with_api("demo", Arc::new(InMemoryItemsApi::with_items(demo_items())))
    }

    /// Build services over any `ItemsApi`, e.g. a test double.
    #[must_use]
    pub fn with_api(backend: &'static str, api: Arc<dyn ItemsApi>) -> Self {
        let sync = ItemSyncService::new(api);
        let controller = Arc::new(ItemsController::new(sync.clone()));
        Self {
            backend,
            sync,
            controller,
        }
    }

    #[must_use]
    pub fn backend(&self) -> &'static str {
        self.backend
    }

    #[must_use]
    pub fn sync(&self) -> ItemSyncService {
        self.sync.clone()
    }

    #[must_use]
    pub fn controller(&self) -> Arc<ItemsController> {
        Arc::clone(&self.controller)
    }
}

fn demo_items() -> Vec<Item> {
    vec![
        Item::new(
            ItemId::new(1),
            "Set up the project",
            "Clone the repo and start the API server",
            true,
        ),
        Item::new(ItemId::new(2), "Write the README", "", false),
        Item::new(
            ItemId::new(3),
            "Review open pull requests",
            "Focus on the <form> validation changes",
            false,
        ),
    ]
}
