use dioxus::prelude::*;

use crate::vm::{ConfirmDeleteVm, NoticeVm};

#[component]
pub fn LoadingSpinner(loading: bool) -> Element {
    rsx! {
        if loading {
            span {
                id: "loading-spinner",
                class: "spinner",
                role: "status",
                "aria-label": "Loading",
            }
        }
    }
}

#[component]
pub fn NoticeToast(notice: Option<NoticeVm>, on_close: Callback<()>) -> Element {
    let Some(notice) = notice else {
        return rsx! {};
    };

    rsx! {
        div {
            id: "toast",
            class: "toast toast-{notice.kind_class}",
            role: "alert",
            div { class: "toast-header",
                strong { id: "toast-title", "{notice.title}" }
                button {
                    class: "toast-close",
                    r#type: "button",
                    "aria-label": "Close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            div { id: "toast-message", class: "toast-body", "{notice.message}" }
        }
    }
}

#[component]
pub fn ConfirmDeleteModal(
    confirm: Option<ConfirmDeleteVm>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> Element {
    let Some(confirm) = confirm else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "items-modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "items-modal",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "items-modal-title", "Delete item?" }
                p { class: "items-modal-body", "{confirm.prompt}" }
                div { class: "items-modal-actions",
                    button {
                        class: "btn items-modal-cancel",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn items-modal-confirm",
                        r#type: "button",
                        onclick: move |_| on_confirm.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}
