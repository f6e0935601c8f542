use std::sync::Arc;

use items_api::ItemsApi;
use items_core::model::{Item, ItemForm, ItemId};
use items_core::state::SubmitPlan;
use tracing::{info, warn};

use crate::error::SyncError;

/// The four round trips against the items collection.
///
/// Stateless: it validates, calls the API once and maps the failure. Keeping
/// the local list in step is `ItemsController`'s job.
#[derive(Clone)]
pub struct ItemSyncService {
    api: Arc<dyn ItemsApi>,
}

impl ItemSyncService {
    #[must_use]
    pub fn new(api: Arc<dyn ItemsApi>) -> Self {
        Self { api }
    }

    /// Fetch the whole collection.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Request` or `SyncError::Network` when the fetch fails.
    pub async fn list(&self) -> Result<Vec<Item>, SyncError> {
        self.api.list_items().await.map_err(|err| {
            warn!(error = %err, "list items failed");
            SyncError::from(err)
        })
    }

    /// Create an item from raw form input.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Validation` for a blank title without contacting
    /// the server, otherwise the mapped request failure.
    pub async fn create(&self, record: &ItemForm) -> Result<Item, SyncError> {
        let draft = record.to_draft()?;
        self.submit(&SubmitPlan::Create(draft)).await
    }

    /// Replace item `id` with raw form input.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Validation` for a blank title without contacting
    /// the server, otherwise the mapped request failure.
    pub async fn update(&self, id: ItemId, record: &ItemForm) -> Result<Item, SyncError> {
        let draft = record.to_draft()?;
        self.submit(&SubmitPlan::Update(id, draft)).await
    }

    /// Send an already validated create or update.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Request` or `SyncError::Network` when the call fails.
    pub async fn submit(&self, plan: &SubmitPlan) -> Result<Item, SyncError> {
        let result = match plan {
            SubmitPlan::Create(draft) => self.api.create_item(draft).await,
            SubmitPlan::Update(id, draft) => self.api.update_item(*id, draft).await,
        };
        match result {
            Ok(item) => {
                info!(id = %item.id(), operation = ?plan.operation(), "item saved");
                Ok(item)
            }
            Err(err) => {
                warn!(error = %err, operation = ?plan.operation(), "save item failed");
                Err(err.into())
            }
        }
    }

    /// Delete item `id`. Confirmation happens before this is called.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Request` or `SyncError::Network` when the call fails.
    pub async fn delete(&self, id: ItemId) -> Result<(), SyncError> {
        match self.api.delete_item(id).await {
            Ok(()) => {
                info!(%id, "item deleted");
                Ok(())
            }
            Err(err) => {
                warn!(%id, error = %err, "delete item failed");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use items_api::{ApiCall, InMemoryItemsApi};

    fn service(api: &InMemoryItemsApi) -> ItemSyncService {
        ItemSyncService::new(Arc::new(api.clone()))
    }

    #[tokio::test]
    async fn blank_title_never_reaches_the_api() {
        let api = InMemoryItemsApi::new();
        let sync = service(&api);
        let record = ItemForm {
            title: String::new(),
            description: "x".into(),
            completed: false,
        };

        let err = sync.create(&record).await.unwrap_err();

        assert!(matches!(err, SyncError::Validation(_)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn update_of_unknown_id_maps_not_found() {
        let api = InMemoryItemsApi::new();
        let sync = service(&api);
        let record = ItemForm {
            title: "x".into(),
            ..ItemForm::default()
        };

        let err = sync.update(ItemId::new(5), &record).await.unwrap_err();

        assert_eq!(
            err,
            SyncError::Request {
                status: 404,
                detail: Some("Item not found".into())
            }
        );
        assert_eq!(api.calls(), vec![ApiCall::Update(ItemId::new(5))]);
    }

    #[tokio::test]
    async fn create_then_delete_round_trips() {
        let api = InMemoryItemsApi::new();
        let sync = service(&api);
        let record = ItemForm {
            title: "  Groceries ".into(),
            description: " milk ".into(),
            completed: false,
        };

        let item = sync.create(&record).await.expect("create");
        assert_eq!(item.title(), "Groceries");
        assert_eq!(item.description(), "milk");

        sync.delete(item.id()).await.expect("delete");
        assert!(sync.list().await.expect("list").is_empty());
    }
}
