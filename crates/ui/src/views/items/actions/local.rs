use dioxus::prelude::*;
use items_core::model::ItemId;
use items_core::state::HIGHLIGHT_DURATION;
use services::StateHandle;

use super::super::scripts::run_view_effects;
use super::super::state::ItemsHandle;
use super::intent::ItemsIntent;

/// Apply an intent that never touches the network.
pub(super) fn apply_local(intent: ItemsIntent, state: ItemsHandle) {
    match intent {
        ItemsIntent::Edit(id) => edit(id, state),
        ItemsIntent::Cancel => state.with_state(|s| s.cancel()),
        ItemsIntent::RequestDelete(id) => {
            state.with_state(|s| s.request_delete(id));
        }
        ItemsIntent::DismissDelete => state.with_state(|s| s.dismiss_delete()),
        ItemsIntent::DismissNotice => {
            state.with_state(|s| {
                if let Some(token) = s.notice_token() {
                    s.dismiss_notice(token);
                }
            });
        }
        ItemsIntent::FocusForm => state.with_state(|s| s.focus_form()),
        ItemsIntent::SetTitle(value) => state.with_state(|s| s.set_title(value)),
        ItemsIntent::SetDescription(value) => state.with_state(|s| s.set_description(value)),
        ItemsIntent::SetCompleted(value) => state.with_state(|s| s.set_completed(value)),
        ItemsIntent::Refresh | ItemsIntent::Submit | ItemsIntent::ConfirmDelete => return,
    }
    flush_view_effects(state);
}

fn edit(id: ItemId, state: ItemsHandle) {
    let Some(highlight) = state.with_state(|s| s.edit(id)) else {
        return;
    };
    spawn(async move {
        tokio::time::sleep(HIGHLIGHT_DURATION).await;
        state.with_state(|s| s.clear_highlight(highlight.token));
    });
}

fn flush_view_effects(state: ItemsHandle) {
    let effects = state.with_state(|s| s.take_effects());
    if effects.is_empty() {
        return;
    }
    spawn(async move {
        run_view_effects(effects).await;
    });
}
