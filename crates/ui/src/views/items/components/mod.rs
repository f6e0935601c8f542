mod form;
mod overlays;
mod table;

pub use form::ItemFormPanel;
pub use overlays::{ConfirmDeleteModal, LoadingSpinner, NoticeToast};
pub use table::ItemsTablePanel;
