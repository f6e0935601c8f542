use dioxus::prelude::*;

use crate::vm::ItemFormVm;

use super::super::scripts::{FORM_ID, TITLE_INPUT_ID};

#[component]
pub fn ItemFormPanel(
    vm: ItemFormVm,
    on_title_change: Callback<String>,
    on_description_change: Callback<String>,
    on_completed_change: Callback<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> Element {
    let editing_value = vm
        .editing_id
        .map(|id| id.to_string())
        .unwrap_or_default();

    rsx! {
        section { class: "item-form-card",
            h2 { id: "form-title", class: "item-form-heading", "{vm.heading}" }
            form {
                id: FORM_ID,
                class: "item-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                input { r#type: "hidden", id: "item-id", value: "{editing_value}" }
                div { class: "form-field",
                    label { r#for: TITLE_INPUT_ID, "Title" }
                    input {
                        id: TITLE_INPUT_ID,
                        class: "form-input",
                        r#type: "text",
                        placeholder: "Enter item title",
                        value: "{vm.title}",
                        oninput: move |evt| on_title_change.call(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { r#for: "description", "Description" }
                    textarea {
                        id: "description",
                        class: "form-input",
                        rows: "3",
                        placeholder: "Enter item description (optional)",
                        value: "{vm.description}",
                        oninput: move |evt| on_description_change.call(evt.value()),
                    }
                }
                div { class: "form-field form-check",
                    input {
                        id: "completed",
                        r#type: "checkbox",
                        checked: vm.completed,
                        onchange: move |evt| on_completed_change.call(evt.checked()),
                    }
                    label { r#for: "completed", "Mark as completed" }
                }
                div { class: "form-actions",
                    button {
                        id: "submit-btn",
                        class: "btn btn-primary",
                        r#type: "submit",
                        "{vm.submit_label}"
                    }
                    if vm.show_cancel {
                        button {
                            id: "cancel-btn",
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
