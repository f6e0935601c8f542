use dioxus::prelude::*;
use items_core::model::ItemId;

use crate::context::AppContext;
use crate::vm::map_items_page;

use super::actions::{ItemsIntent, use_items_dispatcher};
use super::components::{
    ConfirmDeleteModal, ItemFormPanel, ItemsTablePanel, LoadingSpinner, NoticeToast,
};
use super::state::use_items_state;

#[component]
pub fn ItemsView() -> Element {
    let ctx = use_context::<AppContext>();
    let controller = ctx.items_controller();
    let state = use_items_state();
    let dispatcher = use_items_dispatcher(state, &controller);
    let dispatch = dispatcher.dispatch;

    use_hook(move || dispatch.call(ItemsIntent::Refresh));

    let page = map_items_page(&state.signal().read());
    let backend = ctx.backend_label();

    rsx! {
        div { class: "items-page",
            header { class: "items-header",
                h1 { "Items" }
                LoadingSpinner { loading: page.loading }
                span { class: "items-backend", "{backend}" }
            }
            div { class: "items-layout",
                ItemFormPanel {
                    vm: page.form,
                    on_title_change: move |value: String| dispatch.call(ItemsIntent::SetTitle(value)),
                    on_description_change: move |value: String| {
                        dispatch.call(ItemsIntent::SetDescription(value));
                    },
                    on_completed_change: move |value: bool| dispatch.call(ItemsIntent::SetCompleted(value)),
                    on_submit: move |()| dispatch.call(ItemsIntent::Submit),
                    on_cancel: move |()| dispatch.call(ItemsIntent::Cancel),
                }
                section { class: "items-list-card",
                    h2 { "Items List" }
                    ItemsTablePanel {
                        list: page.list,
                        on_edit: move |id: ItemId| dispatch.call(ItemsIntent::Edit(id)),
                        on_delete: move |id: ItemId| dispatch.call(ItemsIntent::RequestDelete(id)),
                        on_create_first: move |()| dispatch.call(ItemsIntent::FocusForm),
                    }
                }
            }
            NoticeToast {
                notice: page.notice,
                on_close: move |()| dispatch.call(ItemsIntent::DismissNotice),
            }
            ConfirmDeleteModal {
                confirm: page.confirm_delete,
                on_cancel: move |()| dispatch.call(ItemsIntent::DismissDelete),
                on_confirm: move |()| dispatch.call(ItemsIntent::ConfirmDelete),
            }
        }
    }
}
