use dioxus::prelude::*;
use items_core::state::ItemsState;
use services::StateHandle;

/// The page state as a Dioxus signal, usable by `ItemsController`.
///
/// `Signal` is `Copy`, so the handle moves freely into callbacks and spawned
/// tasks; every `with_state` is one short write borrow.
#[derive(Clone, Copy, PartialEq)]
pub struct ItemsHandle {
    signal: Signal<ItemsState>,
}

impl ItemsHandle {
    #[must_use]
    pub fn signal(&self) -> Signal<ItemsState> {
        self.signal
    }
}

impl StateHandle for ItemsHandle {
    fn with_state<R>(&self, f: impl FnOnce(&mut ItemsState) -> R) -> R {
        let mut signal = self.signal;
        let mut state = signal.write();
        f(&mut *state)
    }
}

pub fn use_items_state() -> ItemsHandle {
    let signal = use_signal(ItemsState::new);
    ItemsHandle { signal }
}
