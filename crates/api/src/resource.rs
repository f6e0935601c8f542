use async_trait::async_trait;
use items_core::model::{Item, ItemDraft, ItemId};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by collection resource adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// A 2xx response whose body could not be read.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server's `detail` message, when it sent one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::Status {
            status: 404,
            detail: Some("Item not found".to_owned()),
        }
    }
}

/// Contract for the remote items collection.
///
/// Create and update always send the full record. Every call is one round
/// trip; implementations never retry.
#[async_trait]
pub trait ItemsApi: Send + Sync {
    /// Fetch the whole collection in server order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on a non-2xx status, a transport failure or an
    /// unreadable body.
    async fn list_items(&self) -> Result<Vec<Item>, ApiError>;

    /// Persist a new item; the server assigns the id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the server rejects the record or is unreachable.
    async fn create_item(&self, draft: &ItemDraft) -> Result<Item, ApiError>;

    /// Replace an existing item.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` with 404 when the id is unknown.
    async fn update_item(&self, id: ItemId, draft: &ItemDraft) -> Result<Item, ApiError>;

    /// Remove an item.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` with 404 when the id is unknown.
    async fn delete_item(&self, id: ItemId) -> Result<(), ApiError>;
}

/// One recorded call against `InMemoryItemsApi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCall {
    List,
    Create,
    Update(ItemId),
    Delete(ItemId),
}

#[derive(Debug, Default)]
struct Collection {
    items: Vec<Item>,
    next_id: i64,
    calls: Vec<ApiCall>,
}

/// A process-local collection that behaves like the remote one.
///
/// Used for tests and the `--demo` launch mode. It records every call so
/// callers can assert which round trips happened.
#[derive(Clone, Default)]
pub struct InMemoryItemsApi {
    inner: Arc<Mutex<Collection>>,
}

impl InMemoryItemsApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the collection. New ids continue after the largest seeded id.
    #[must_use]
    pub fn with_items(items: Vec<Item>) -> Self {
        let next_id = items.iter().map(|item| item.id().value()).max().unwrap_or(0);
        Self {
            inner: Arc::new(Mutex::new(Collection {
                items,
                next_id,
                calls: Vec::new(),
            })),
        }
    }

    /// Calls received so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<ApiCall> {
        self.inner
            .lock()
            .map(|guard| guard.calls.clone())
            .unwrap_or_default()
    }

    /// Snapshot of the server-side collection, bypassing the call log.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Item> {
        self.inner
            .lock()
            .map(|guard| guard.items.clone())
            .unwrap_or_default()
    }

    /// Mutate the server-side collection directly, as another client would.
    pub fn remove_remote(&self, id: ItemId) {
        if let Ok(mut guard) = self.inner.lock() {
            guard.items.retain(|item| item.id() != id);
        }
    }

    fn with_collection<T>(
        &self,
        call: ApiCall,
        f: impl FnOnce(&mut Collection) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        guard.calls.push(call);
        f(&mut *guard)
    }
}

#[async_trait]
impl ItemsApi for InMemoryItemsApi {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        self.with_collection(ApiCall::List, |c| Ok(c.items.clone()))
    }

    async fn create_item(&self, draft: &ItemDraft) -> Result<Item, ApiError> {
        self.with_collection(ApiCall::Create, |c| {
            c.next_id += 1;
            let item = Item::from_draft(ItemId::new(c.next_id), draft);
            c.items.push(item.clone());
            Ok(item)
        })
    }

    async fn update_item(&self, id: ItemId, draft: &ItemDraft) -> Result<Item, ApiError> {
        self.with_collection(ApiCall::Update(id), |c| {
            let slot = c
                .items
                .iter_mut()
                .find(|item| item.id() == id)
                .ok_or_else(ApiError::not_found)?;
            *slot = Item::from_draft(id, draft);
            Ok(slot.clone())
        })
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), ApiError> {
        self.with_collection(ApiCall::Delete(id), |c| {
            let before = c.items.len();
            c.items.retain(|item| item.id() != id);
            if c.items.len() == before {
                return Err(ApiError::not_found());
            }
            Ok(())
        })
    }
}
