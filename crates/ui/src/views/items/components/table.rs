use dioxus::prelude::*;
use items_core::model::ItemId;

use crate::vm::{ItemListVm, ItemRowVm};

#[component]
pub fn ItemsTablePanel(
    list: ItemListVm,
    on_edit: Callback<ItemId>,
    on_delete: Callback<ItemId>,
    on_create_first: Callback<()>,
) -> Element {
    match list {
        ItemListVm::Empty => rsx! {
            div { id: "no-items-message", class: "items-empty",
                p { "No items found. Create your first item!" }
                button {
                    id: "create-first-item-btn",
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_create_first.call(()),
                    "Create First Item"
                }
            }
        },
        ItemListVm::Rows(rows) => rsx! {
            div { class: "table-responsive",
                table { class: "items-table",
                    thead {
                        tr {
                            th { "ID" }
                            th { "Title" }
                            th { "Description" }
                            th { "Status" }
                            th { class: "text-center", "Actions" }
                        }
                    }
                    tbody { id: "items-table-body",
                        for row in rows {
                            ItemRow {
                                key: "{row.id}",
                                row: row.clone(),
                                on_edit,
                                on_delete,
                            }
                        }
                    }
                }
            }
        },
    }
}

#[component]
fn ItemRow(row: ItemRowVm, on_edit: Callback<ItemId>, on_delete: Callback<ItemId>) -> Element {
    let id = row.id;
    let row_class = if row.highlighted { "highlight-row" } else { "" };
    let icon = if row.completed {
        "bi bi-check-circle"
    } else {
        "bi bi-clock"
    };

    rsx! {
        tr { id: "{row.dom_id}", class: row_class,
            td { "{id}" }
            td { class: "fw-medium", dangerous_inner_html: "{row.title_html}" }
            td { dangerous_inner_html: "{row.description_html}" }
            td {
                span { class: "badge {row.status_class}",
                    i { class: icon }
                    "{row.status_label}"
                }
            }
            td { class: "text-center",
                button {
                    class: "action-btn edit-btn",
                    r#type: "button",
                    title: "Edit Item",
                    "data-id": "{id}",
                    onclick: move |_| on_edit.call(id),
                    "Edit"
                }
                button {
                    class: "action-btn delete-btn",
                    r#type: "button",
                    title: "Delete Item",
                    "data-id": "{id}",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}
