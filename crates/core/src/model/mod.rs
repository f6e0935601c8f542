mod ids;
mod item;
mod notice;
mod session;

pub use ids::ItemId;
pub use item::{Item, ItemDraft, ItemError, ItemForm};
pub use notice::{Notice, NoticeKind};
pub use session::EditingSession;
