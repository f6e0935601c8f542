use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use items_api::{ApiCall, InMemoryItemsApi};
use items_core::model::{EditingSession, Item, ItemId};
use items_core::state::{HIGHLIGHT_DURATION, ItemsState, NOTICE_DURATION};
use services::{ItemSyncService, ItemsController};
use tokio::time::Instant;

use crate::views::test_harness::{drive_dom, settle};

use super::actions::{ItemsIntent, use_items_dispatcher};
use super::state::{ItemsHandle, use_items_state};

#[derive(Clone, Default)]
struct HarnessHandles {
    dispatch: Rc<RefCell<Option<Callback<ItemsIntent>>>>,
    state: Rc<RefCell<Option<ItemsHandle>>>,
}

impl HarnessHandles {
    fn dispatch(&self) -> Callback<ItemsIntent> {
        self.dispatch.borrow().expect("dispatch registered")
    }

    fn snapshot(&self, dom: &VirtualDom) -> ItemsState {
        let handle = self.state.borrow().expect("state registered");
        dom.in_runtime(|| handle.signal().peek().clone())
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    controller: Arc<ItemsController>,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn ItemsIntentHarness(props: HarnessProps) -> Element {
    let state = use_items_state();
    let dispatcher = use_items_dispatcher(state, &props.controller);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.dispatch.borrow_mut() = Some(dispatcher.dispatch);
        *props.handles.state.borrow_mut() = Some(state);
    }
    rsx! { div {} }
}

fn setup(items: Vec<Item>) -> (VirtualDom, HarnessHandles, InMemoryItemsApi) {
    let api = InMemoryItemsApi::with_items(items);
    let controller = Arc::new(ItemsController::new(ItemSyncService::new(Arc::new(
        api.clone(),
    ))));
    let handles = HarnessHandles::default();
    let mut dom = VirtualDom::new_with_props(
        ItemsIntentHarness,
        HarnessProps {
            controller,
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    (dom, handles, api)
}

async fn send(dom: &mut VirtualDom, dispatch: Callback<ItemsIntent>, intent: ItemsIntent) {
    dom.in_runtime(|| dispatch.call(intent));
    drive_dom(dom);
    settle(dom).await;
}

#[tokio::test(flavor = "current_thread")]
async fn items_intents_smoke_create_edit_delete() {
    let (mut dom, handles, api) = setup(Vec::new());
    let dispatch = handles.dispatch();

    send(&mut dom, dispatch, ItemsIntent::Refresh).await;
    assert!(handles.snapshot(&dom).items().is_empty());

    send(&mut dom, dispatch, ItemsIntent::SetTitle("Buy milk".into())).await;
    send(&mut dom, dispatch, ItemsIntent::SetDescription("2 liters".into())).await;
    send(&mut dom, dispatch, ItemsIntent::Submit).await;

    let state = handles.snapshot(&dom);
    assert_eq!(state.items().len(), 1);
    assert!(state.form().is_empty());
    assert_eq!(
        state.notice().map(|n| n.message.clone()),
        Some("New item created successfully!".to_string())
    );
    let id = state.items()[0].id();

    send(&mut dom, dispatch, ItemsIntent::Edit(id)).await;
    let state = handles.snapshot(&dom);
    assert_eq!(state.session(), EditingSession::Editing(id));
    assert_eq!(state.form().title, "Buy milk");
    assert_eq!(state.highlight().map(|h| h.id), Some(id));

    send(&mut dom, dispatch, ItemsIntent::SetCompleted(true)).await;
    send(&mut dom, dispatch, ItemsIntent::Submit).await;
    let state = handles.snapshot(&dom);
    assert!(state.items()[0].completed());
    assert_eq!(state.session(), EditingSession::Browsing);

    send(&mut dom, dispatch, ItemsIntent::RequestDelete(id)).await;
    assert_eq!(handles.snapshot(&dom).pending_delete(), Some(id));
    send(&mut dom, dispatch, ItemsIntent::ConfirmDelete).await;
    assert!(handles.snapshot(&dom).items().is_empty());

    assert_eq!(
        api.calls(),
        vec![
            ApiCall::List,
            ApiCall::Create,
            ApiCall::List,
            ApiCall::Update(id),
            ApiCall::List,
            ApiCall::Delete(id),
        ]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn items_intents_smoke_dismissed_delete_and_cancel() {
    let (mut dom, handles, api) = setup(vec![Item::new(ItemId::new(4), "A", "", false)]);
    let dispatch = handles.dispatch();
    send(&mut dom, dispatch, ItemsIntent::Refresh).await;

    send(&mut dom, dispatch, ItemsIntent::RequestDelete(ItemId::new(4))).await;
    send(&mut dom, dispatch, ItemsIntent::DismissDelete).await;
    send(&mut dom, dispatch, ItemsIntent::Edit(ItemId::new(4))).await;
    send(&mut dom, dispatch, ItemsIntent::SetTitle("changed".into())).await;
    send(&mut dom, dispatch, ItemsIntent::Cancel).await;

    let state = handles.snapshot(&dom);
    assert_eq!(state.pending_delete(), None);
    assert_eq!(state.session(), EditingSession::Browsing);
    assert!(state.form().is_empty());
    assert_eq!(state.items()[0].title(), "A");
    assert_eq!(api.calls(), vec![ApiCall::List]);
}

#[tokio::test(flavor = "current_thread")]
async fn items_intents_smoke_blank_title_is_rejected_locally() {
    let (mut dom, handles, api) = setup(Vec::new());
    let dispatch = handles.dispatch();

    send(&mut dom, dispatch, ItemsIntent::SetTitle("   ".into())).await;
    send(&mut dom, dispatch, ItemsIntent::Submit).await;

    let state = handles.snapshot(&dom);
    let notice = state.notice().expect("validation notice");
    assert_eq!(notice.title, "Validation Error");
    assert_eq!(notice.message, "Title is required");
    assert!(api.calls().is_empty());

    send(&mut dom, dispatch, ItemsIntent::DismissNotice).await;
    assert!(handles.snapshot(&dom).notice().is_none());
}

async fn run_until(dom: &mut VirtualDom, deadline: Instant) {
    while Instant::now() < deadline {
        settle(dom).await;
    }
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn items_intents_smoke_timers_clear_highlight_then_notice() {
    let (mut dom, handles, _api) = setup(vec![Item::new(ItemId::new(1), "A", "", false)]);
    let dispatch = handles.dispatch();
    send(&mut dom, dispatch, ItemsIntent::Refresh).await;

    let start = Instant::now();
    send(&mut dom, dispatch, ItemsIntent::Edit(ItemId::new(1))).await;
    send(&mut dom, dispatch, ItemsIntent::SetTitle("  ".into())).await;
    send(&mut dom, dispatch, ItemsIntent::Submit).await;

    let state = handles.snapshot(&dom);
    assert_eq!(state.highlight().map(|h| h.id), Some(ItemId::new(1)));
    assert_eq!(
        state.notice().map(|n| n.message.as_str()),
        Some("Title is required")
    );

    let margin = Duration::from_millis(250);
    run_until(&mut dom, start + HIGHLIGHT_DURATION + margin).await;
    let state = handles.snapshot(&dom);
    assert_eq!(state.highlight(), None);
    assert!(state.notice().is_some(), "notice outlives the highlight");
    assert_eq!(state.session(), EditingSession::Editing(ItemId::new(1)));

    run_until(&mut dom, start + NOTICE_DURATION + margin).await;
    let state = handles.snapshot(&dom);
    assert!(state.notice().is_none());
    assert_eq!(state.notice_token(), None);
}
