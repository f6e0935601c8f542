#![forbid(unsafe_code)]

pub mod model;
pub mod state;
pub mod store;

pub use model::{EditingSession, Item, ItemDraft, ItemError, ItemForm, ItemId, Notice, NoticeKind};
pub use state::{
    DELETE_CONFIRM_PROMPT, HIGHLIGHT_DURATION, Highlight, ItemsState, NOTICE_DURATION, Operation,
    SubmitPlan, ViewEffect,
};
pub use store::ItemStore;
