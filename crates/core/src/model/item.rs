use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::model::ids::ItemId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ItemError {
    #[error("Title is required")]
    EmptyTitle,
}

//
// ─── ITEM ──────────────────────────────────────────────────────────────────────
//

/// A persisted item as returned by the collection resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    description: String,
    #[serde(default)]
    completed: bool,
}

impl Item {
    #[must_use]
    pub fn new(
        id: ItemId,
        title: impl Into<String>,
        description: impl Into<String>,
        completed: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed,
        }
    }

    /// Builds the persisted item the server would return for `draft`.
    #[must_use]
    pub fn from_draft(id: ItemId, draft: &ItemDraft) -> Self {
        Self::new(
            id,
            draft.title.clone(),
            draft.description.clone(),
            draft.completed,
        )
    }

    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Empty when the server sent `null` or omitted the field.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// The request body for create and update: always a full record, never a patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    description: String,
    #[serde(default)]
    completed: bool,
}

impl ItemDraft {
    /// Trims title and description and checks the title.
    ///
    /// # Errors
    ///
    /// Returns `ItemError::EmptyTitle` when the trimmed title is empty.
    pub fn new(
        title: impl AsRef<str>,
        description: impl AsRef<str>,
        completed: bool,
    ) -> Result<Self, ItemError> {
        let title = title.as_ref().trim();
        if title.is_empty() {
            return Err(ItemError::EmptyTitle);
        }
        Ok(Self {
            title: title.to_owned(),
            description: description.as_ref().trim().to_owned(),
            completed,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }
}

//
// ─── FORM ──────────────────────────────────────────────────────────────────────
//

/// Raw form fields exactly as typed; nothing is trimmed until submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl ItemForm {
    #[must_use]
    pub fn from_item(item: &Item) -> Self {
        Self {
            title: item.title().to_owned(),
            description: item.description().to_owned(),
            completed: item.completed(),
        }
    }

    /// Validate the form into a request body.
    ///
    /// # Errors
    ///
    /// Returns `ItemError::EmptyTitle` when the title is blank.
    pub fn to_draft(&self) -> Result<ItemDraft, ItemError> {
        ItemDraft::new(&self.title, &self.description, self.completed)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
