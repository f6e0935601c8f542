use std::sync::Arc;

use async_trait::async_trait;
use items_api::{ApiCall, ApiError, ItemsApi};
use items_core::model::{Item, ItemDraft, ItemId};

use super::test_harness::{setup_view_harness, setup_view_harness_with_api};
use crate::vm::is_inert;

/// Inner markup of the first row's title and description cells.
fn text_cells(html: &str) -> Option<(&str, &str)> {
    let title_start = html.find(r#"class="fw-medium">"#)? + r#"class="fw-medium">"#.len();
    let title_len = html[title_start..].find("</td>")?;
    let rest = html[title_start + title_len..].strip_prefix("</td><td>")?;
    let description_len = rest.find("</td>")?;
    Some((&html[title_start..title_start + title_len], &rest[..description_len]))
}

#[tokio::test(flavor = "current_thread")]
async fn items_view_smoke_renders_fetched_row() {
    let mut harness = setup_view_harness(vec![Item::new(ItemId::new(1), "A", "", false)]);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("item-row-1"), "missing row id in {html}");
    assert!(html.contains(">A<"), "missing title in {html}");
    assert!(html.contains(">-<"), "missing description dash in {html}");
    assert!(html.contains("Pending"), "missing status in {html}");
    assert!(html.contains("completed-false"), "missing status class in {html}");
    assert!(!html.contains("no-items-message"), "placeholder shown in {html}");
    let api = harness.api.as_ref().expect("in-memory api");
    assert_eq!(api.calls(), vec![ApiCall::List]);
}

#[tokio::test(flavor = "current_thread")]
async fn items_view_smoke_renders_empty_placeholder() {
    let mut harness = setup_view_harness(Vec::new());
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("no-items-message"), "missing placeholder in {html}");
    assert!(html.contains("Create First Item"), "missing button in {html}");
    assert!(!html.contains("items-table-body"), "table shown in {html}");
    assert!(html.contains("Add New Item"), "missing form heading in {html}");
    assert!(html.contains(">Save<"), "missing save label in {html}");
    assert!(!html.contains("cancel-btn"), "cancel shown in create mode: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn items_view_smoke_escapes_item_text() {
    let mut harness = setup_view_harness(vec![Item::new(
        ItemId::new(2),
        "<script>alert(1)</script>",
        "Tom & Jerry",
        true,
    )]);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(!html.contains("<script>"), "unescaped markup in {html}");
    assert!(!html.contains("Tom & Jerry"), "unescaped ampersand in {html}");
    let (title, description) = text_cells(&html).expect("title and description cells");
    assert!(is_inert(title), "raw markup in title cell {title}");
    assert!(is_inert(description), "raw markup in description cell {description}");
    assert!(title.starts_with("&lt;script&gt;"), "missing escaped title in {html}");
    assert!(description.contains("&amp;"), "missing escaped description in {html}");
    assert!(html.contains("Completed"), "missing status in {html}");
}

struct UnreachableApi;

#[async_trait]
impl ItemsApi for UnreachableApi {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        Err(ApiError::Transport("connection refused".into()))
    }

    async fn create_item(&self, _draft: &ItemDraft) -> Result<Item, ApiError> {
        Err(ApiError::Transport("connection refused".into()))
    }

    async fn update_item(&self, _id: ItemId, _draft: &ItemDraft) -> Result<Item, ApiError> {
        Err(ApiError::Transport("connection refused".into()))
    }

    async fn delete_item(&self, _id: ItemId) -> Result<(), ApiError> {
        Err(ApiError::Transport("connection refused".into()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn items_view_smoke_renders_load_failure_notice() {
    let mut harness = setup_view_harness_with_api(Arc::new(UnreachableApi));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Failed to load items. Please try again."),
        "missing notice in {html}"
    );
    assert!(html.contains("toast-error"), "missing error style in {html}");
    assert!(html.contains("no-items-message"), "missing placeholder in {html}");
}
