mod escape;
mod items_vm;

pub use escape::escape_html;
#[cfg(test)]
pub(crate) use escape::is_inert;
pub use items_vm::{
    ConfirmDeleteVm, EMPTY_DESCRIPTION, ItemFormVm, ItemListVm, ItemRowVm, ItemsPageVm, NoticeVm,
    build_item_row, map_item_form, map_item_rows, map_items_page, row_dom_id, status_class,
    status_label,
};
