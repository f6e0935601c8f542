use items_core::model::ItemId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemsIntent {
    Refresh,
    Submit,
    Cancel,
    Edit(ItemId),
    RequestDelete(ItemId),
    ConfirmDelete,
    DismissDelete,
    DismissNotice,
    FocusForm,
    SetTitle(String),
    SetDescription(String),
    SetCompleted(bool),
}
