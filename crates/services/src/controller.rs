use std::cell::RefCell;

use items_core::model::Item;
use items_core::state::{ItemsState, Operation};
use tracing::{debug, warn};

use crate::error::SyncError;
use crate::sync_service::ItemSyncService;

/// Short-lived mutable access to the page state.
///
/// Implementations must not hold their borrow past `f`: controller methods
/// call `with_state` on both sides of every `await`.
pub trait StateHandle {
    fn with_state<R>(&self, f: impl FnOnce(&mut ItemsState) -> R) -> R;
}

impl StateHandle for RefCell<ItemsState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ItemsState) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}

/// Drives `ItemsState` through the transitions that need the network.
///
/// Every method raises the loading counter for the duration of its request
/// and posts at most one notification. Nothing is serialized: two calls may
/// overlap and the later response wins.
#[derive(Clone)]
pub struct ItemsController {
    sync: ItemSyncService,
}

impl ItemsController {
    #[must_use]
    pub fn new(sync: ItemSyncService) -> Self {
        Self { sync }
    }

    #[must_use]
    pub fn sync(&self) -> &ItemSyncService {
        &self.sync
    }

    /// Re-fetch the list and replace the cache. Silent on success.
    ///
    /// # Errors
    ///
    /// Returns the fetch failure after posting it as a notification; the
    /// previous list is kept.
    pub async fn refresh<S: StateHandle>(&self, state: &S) -> Result<usize, SyncError> {
        state.with_state(ItemsState::begin_request);
        let result = self.sync.list().await;
        state.with_state(|s| {
            s.end_request();
            match result {
                Ok(items) => Ok(apply_list(s, items)),
                Err(err) => {
                    s.list_failed(err.user_message(Operation::List));
                    Err(err)
                }
            }
        })
    }

    /// Validate the form, send create or update, then re-fetch.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Validation` (no request sent) or the save failure.
    /// A failed follow-up refresh is reported through the state only.
    pub async fn submit<S: StateHandle>(&self, state: &S) -> Result<Item, SyncError> {
        let plan = state.with_state(ItemsState::prepare_submit)?;
        let operation = plan.operation();

        state.with_state(ItemsState::begin_request);
        let result = self.sync.submit(&plan).await;
        let saved = state.with_state(|s| {
            s.end_request();
            match result {
                Ok(item) => {
                    s.submit_succeeded(operation);
                    Ok(item)
                }
                Err(err) => {
                    s.submit_failed(err.user_message(operation));
                    Err(err)
                }
            }
        })?;

        if let Err(err) = self.refresh(state).await {
            debug!(error = %err, "refresh after save failed");
        }
        Ok(saved)
    }

    /// Send the delete the user just confirmed and drop the row locally.
    ///
    /// Returns `Ok(false)` when no delete was pending confirmation.
    ///
    /// # Errors
    ///
    /// Returns the delete failure; the item stays listed.
    pub async fn confirm_delete<S: StateHandle>(&self, state: &S) -> Result<bool, SyncError> {
        let Some(id) = state.with_state(ItemsState::confirm_delete) else {
            return Ok(false);
        };

        state.with_state(ItemsState::begin_request);
        let result = self.sync.delete(id).await;
        state.with_state(|s| {
            s.end_request();
            match result {
                Ok(()) => {
                    s.delete_succeeded(id);
                    Ok(true)
                }
                Err(err) => {
                    s.delete_failed(err.user_message(Operation::Delete));
                    Err(err)
                }
            }
        })
    }
}

fn apply_list(state: &mut ItemsState, items: Vec<Item>) -> usize {
    let dropped = state.list_loaded(items);
    if dropped > 0 {
        warn!(dropped, "list response repeated item ids");
    }
    debug!(count = state.items().len(), "items reconciled");
    state.items().len()
}
