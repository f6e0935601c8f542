use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use items_api::{InMemoryItemsApi, ItemsApi};
use items_core::model::Item;
use services::{AppServices, ItemsController};

use crate::context::{UiApp, build_app_context};
use crate::views::ItemsView;

#[derive(Clone)]
pub struct TestApp {
    services: AppServices,
}

impl TestApp {
    pub fn new(api: Arc<dyn ItemsApi>) -> Self {
        Self {
            services: AppServices::with_api("test", api),
        }
    }
}

impl UiApp for TestApp {
    fn items_controller(&self) -> Arc<ItemsController> {
        self.services.controller()
    }

    fn backend_label(&self) -> &'static str {
        self.services.backend()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ItemsViewHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { ItemsView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    /// Set when the view talks to an in-memory collection.
    pub api: Option<InMemoryItemsApi>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        settle(&mut self.dom).await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Let spawned tasks run until the DOM goes quiet or 50ms pass.
pub async fn settle(dom: &mut VirtualDom) {
    let _ = tokio::time::timeout(std::time::Duration::from_millis(50), dom.wait_for_work()).await;
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(items: Vec<Item>) -> ViewHarness {
    let api = InMemoryItemsApi::with_items(items);
    let mut harness = setup_view_harness_with_api(Arc::new(api.clone()));
    harness.api = Some(api);
    harness
}

pub fn setup_view_harness_with_api(backend: Arc<dyn ItemsApi>) -> ViewHarness {
    let app = Arc::new(TestApp::new(backend));
    let dom = VirtualDom::new_with_props(ItemsViewHarness, ViewHarnessProps { app });
    ViewHarness { dom, api: None }
}
