use items_core::model::{Item, ItemId, Notice};
use items_core::state::{DELETE_CONFIRM_PROMPT, ItemsState};

use super::escape::escape_html;

/// Shown in the description cell when an item has none.
pub const EMPTY_DESCRIPTION: &str = "-";

/// One table row, with text already escaped for `dangerous_inner_html`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRowVm {
    pub id: ItemId,
    pub dom_id: String,
    pub title_html: String,
    pub description_html: String,
    pub completed: bool,
    pub status_class: &'static str,
    pub status_label: &'static str,
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemListVm {
    /// No items: the placeholder replaces the table.
    Empty,
    Rows(Vec<ItemRowVm>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemFormVm {
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub show_cancel: bool,
    pub editing_id: Option<ItemId>,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeVm {
    pub token: u64,
    pub kind_class: &'static str,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmDeleteVm {
    pub id: ItemId,
    pub prompt: &'static str,
}

/// Everything the items page renders, derived from `ItemsState` alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemsPageVm {
    pub list: ItemListVm,
    pub form: ItemFormVm,
    pub notice: Option<NoticeVm>,
    pub loading: bool,
    pub confirm_delete: Option<ConfirmDeleteVm>,
}

#[must_use]
pub fn row_dom_id(id: ItemId) -> String {
    format!("item-row-{id}")
}

#[must_use]
pub fn status_class(completed: bool) -> &'static str {
    if completed {
        "completed-true"
    } else {
        "completed-false"
    }
}

#[must_use]
pub fn status_label(completed: bool) -> &'static str {
    if completed { "Completed" } else { "Pending" }
}

#[must_use]
pub fn build_item_row(item: &Item, highlighted: bool) -> ItemRowVm {
    let description = if item.description().is_empty() {
        EMPTY_DESCRIPTION
    } else {
        item.description()
    };
    ItemRowVm {
        id: item.id(),
        dom_id: row_dom_id(item.id()),
        title_html: escape_html(item.title()),
        description_html: escape_html(description),
        completed: item.completed(),
        status_class: status_class(item.completed()),
        status_label: status_label(item.completed()),
        highlighted,
    }
}

#[must_use]
pub fn map_item_rows(state: &ItemsState) -> ItemListVm {
    if state.items().is_empty() {
        return ItemListVm::Empty;
    }
    let highlighted = state.highlight().map(|h| h.id);
    ItemListVm::Rows(
        state
            .items()
            .iter()
            .map(|item| build_item_row(item, highlighted == Some(item.id())))
            .collect(),
    )
}

#[must_use]
pub fn map_item_form(state: &ItemsState) -> ItemFormVm {
    let editing_id = state.session().edited_id();
    let (heading, submit_label) = if editing_id.is_some() {
        ("Edit Item", "Update")
    } else {
        ("Add New Item", "Save")
    };
    let form = state.form();
    ItemFormVm {
        heading,
        submit_label,
        show_cancel: editing_id.is_some(),
        editing_id,
        title: form.title.clone(),
        description: form.description.clone(),
        completed: form.completed,
    }
}

fn map_notice(token: u64, notice: &Notice) -> NoticeVm {
    NoticeVm {
        token,
        kind_class: notice.kind.as_str(),
        title: notice.title.clone(),
        message: notice.message.clone(),
    }
}

#[must_use]
pub fn map_items_page(state: &ItemsState) -> ItemsPageVm {
    let notice = state
        .notice_token()
        .zip(state.notice())
        .map(|(token, notice)| map_notice(token, notice));
    ItemsPageVm {
        list: map_item_rows(state),
        form: map_item_form(state),
        notice,
        loading: state.is_loading(),
        confirm_delete: state.pending_delete().map(|id| ConfirmDeleteVm {
            id,
            prompt: DELETE_CONFIRM_PROMPT,
        }),
    }
}
