use std::sync::Arc;

use dioxus::prelude::*;
use services::{ItemsController, StateHandle};
use tracing::debug;

use super::super::scripts::run_view_effects;
use super::super::state::ItemsHandle;

pub(super) fn build_refresh_action(
    state: ItemsHandle,
    controller: &Arc<ItemsController>,
) -> Callback<()> {
    let controller = Arc::clone(controller);
    use_callback(move |()| {
        let controller = Arc::clone(&controller);
        spawn(async move {
            if let Err(err) = controller.refresh(&state).await {
                debug!(error = %err, "refresh failed");
            }
        });
    })
}

pub(super) fn build_submit_action(
    state: ItemsHandle,
    controller: &Arc<ItemsController>,
) -> Callback<()> {
    let controller = Arc::clone(controller);
    use_callback(move |()| {
        let controller = Arc::clone(&controller);
        spawn(async move {
            if let Err(err) = controller.submit(&state).await {
                debug!(error = %err, "submit failed");
            }
            let effects = state.with_state(|s| s.take_effects());
            run_view_effects(effects).await;
        });
    })
}

pub(super) fn build_confirm_delete_action(
    state: ItemsHandle,
    controller: &Arc<ItemsController>,
) -> Callback<()> {
    let controller = Arc::clone(controller);
    use_callback(move |()| {
        let controller = Arc::clone(&controller);
        spawn(async move {
            if let Err(err) = controller.confirm_delete(&state).await {
                debug!(error = %err, "delete failed");
            }
        });
    })
}
