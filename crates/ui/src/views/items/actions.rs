mod intent;
mod local;
mod network;

use std::sync::Arc;

use dioxus::prelude::*;
use items_core::state::NOTICE_DURATION;
use services::{ItemsController, StateHandle};

use super::state::ItemsHandle;

pub use intent::ItemsIntent;

#[derive(Clone, Copy)]
pub struct ItemsDispatcher {
    pub dispatch: Callback<ItemsIntent>,
}

#[derive(Clone, Copy)]
struct ItemsActionHandlers {
    refresh: Callback<()>,
    submit: Callback<()>,
    confirm_delete: Callback<()>,
}

pub fn use_items_dispatcher(
    state: ItemsHandle,
    controller: &Arc<ItemsController>,
) -> ItemsDispatcher {
    let handlers = ItemsActionHandlers {
        refresh: network::build_refresh_action(state, controller),
        submit: network::build_submit_action(state, controller),
        confirm_delete: network::build_confirm_delete_action(state, controller),
    };

    use_notice_timeout(state);

    let dispatch = use_callback(move |intent: ItemsIntent| {
        dispatch_intent(intent, state, &handlers);
    });

    ItemsDispatcher { dispatch }
}

fn dispatch_intent(intent: ItemsIntent, state: ItemsHandle, handlers: &ItemsActionHandlers) {
    match intent {
        ItemsIntent::Refresh => handlers.refresh.call(()),
        ItemsIntent::Submit => handlers.submit.call(()),
        ItemsIntent::ConfirmDelete => handlers.confirm_delete.call(()),
        other => local::apply_local(other, state),
    }
}

/// Dismiss each notice `NOTICE_DURATION` after it appears. A newer notice
/// carries a new token, so an older timer finds nothing to dismiss.
fn use_notice_timeout(state: ItemsHandle) {
    let signal = state.signal();
    let notice_token = use_memo(move || signal.read().notice_token());
    use_effect(move || {
        let Some(token) = notice_token() else {
            return;
        };
        spawn(async move {
            tokio::time::sleep(NOTICE_DURATION).await;
            state.with_state(|s| s.dismiss_notice(token));
        });
    });
}
