use crate::model::ids::ItemId;

/// Which record the form currently targets.
///
/// `Browsing` is the default create mode; `Editing` carries the id that a
/// submit will replace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditingSession {
    #[default]
    Browsing,
    Editing(ItemId),
}

impl EditingSession {
    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    #[must_use]
    pub fn edited_id(&self) -> Option<ItemId> {
        match self {
            Self::Browsing => None,
            Self::Editing(id) => Some(*id),
        }
    }

    /// True when `id` is the record under edit.
    #[must_use]
    pub fn targets(&self, id: ItemId) -> bool {
        self.edited_id() == Some(id)
    }
}
