//! The items page state machine.
//!
//! `ItemsState` is the single owner of everything the page shows. Every user
//! intent and every network completion is a method here; the methods never do
//! I/O, so callers split an operation around its `await` as
//! `begin_request` → network → `*_succeeded`/`*_failed` → `end_request`.

use std::time::Duration;

use crate::model::{EditingSession, Item, ItemDraft, ItemError, ItemForm, ItemId, Notice};
use crate::store::ItemStore;

/// How long an edited row stays highlighted.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_secs(2);

/// How long a notification stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

pub const DELETE_CONFIRM_PROMPT: &str =
    "Are you sure you want to delete this item? This action cannot be undone.";

/// The four round trips against the collection resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Message shown when the server gave no `detail`.
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::List => "Failed to load items. Please try again.",
            Self::Create => "Failed to create item",
            Self::Update => "Failed to update item",
            Self::Delete => "Failed to delete item",
        }
    }

    /// A successful list is silent.
    #[must_use]
    pub fn success_message(self) -> Option<&'static str> {
        match self {
            Self::List => None,
            Self::Create => Some("New item created successfully!"),
            Self::Update => Some("Item updated successfully!"),
            Self::Delete => Some("Item deleted successfully!"),
        }
    }
}

/// What a valid submit will send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPlan {
    Create(ItemDraft),
    Update(ItemId, ItemDraft),
}

impl SubmitPlan {
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Self::Create(_) => Operation::Create,
            Self::Update(..) => Operation::Update,
        }
    }

    #[must_use]
    pub fn draft(&self) -> &ItemDraft {
        match self {
            Self::Create(draft) | Self::Update(_, draft) => draft,
        }
    }
}

/// One-shot requests for the view layer that are not state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEffect {
    ScrollToForm,
    FocusTitle,
}

/// A timed row highlight. `token` lets a stale timer know it was superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub id: ItemId,
    pub token: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemsState {
    store: ItemStore,
    session: EditingSession,
    form: ItemForm,
    in_flight: u32,
    notice: Option<(u64, Notice)>,
    highlight: Option<Highlight>,
    pending_delete: Option<ItemId>,
    effects: Vec<ViewEffect>,
    next_token: u64,
}

impl ItemsState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Accessors ──────────────────────────────────────────────────────────

    #[must_use]
    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    #[must_use]
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    #[must_use]
    pub fn session(&self) -> EditingSession {
        self.session
    }

    #[must_use]
    pub fn form(&self) -> &ItemForm {
        &self.form
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    #[must_use]
    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref().map(|(_, notice)| notice)
    }

    #[must_use]
    pub fn notice_token(&self) -> Option<u64> {
        self.notice.as_ref().map(|(token, _)| *token)
    }

    #[must_use]
    pub fn highlight(&self) -> Option<Highlight> {
        self.highlight
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<ItemId> {
        self.pending_delete
    }

    /// Drain the queued view effects.
    pub fn take_effects(&mut self) -> Vec<ViewEffect> {
        std::mem::take(&mut self.effects)
    }

    fn next_token(&mut self) -> u64 {
        self.next_token = self.next_token.wrapping_add(1);
        self.next_token
    }

    // ─── Loading ────────────────────────────────────────────────────────────

    pub fn begin_request(&mut self) {
        self.in_flight = self.in_flight.saturating_add(1);
    }

    pub fn end_request(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    // ─── Notifications ──────────────────────────────────────────────────────

    /// Show `notice`, replacing any current one. Returns its dismissal token.
    pub fn notify(&mut self, notice: Notice) -> u64 {
        let token = self.next_token();
        self.notice = Some((token, notice));
        token
    }

    /// Dismiss the notice only if `token` still identifies it.
    pub fn dismiss_notice(&mut self, token: u64) -> bool {
        if self.notice_token() == Some(token) {
            self.notice = None;
            return true;
        }
        false
    }

    // ─── Form ───────────────────────────────────────────────────────────────

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.description = description.into();
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.form.completed = completed;
    }

    /// Bring the form into view, e.g. from the empty-list placeholder.
    pub fn focus_form(&mut self) {
        self.effects.push(ViewEffect::ScrollToForm);
        self.effects.push(ViewEffect::FocusTitle);
    }

    // ─── Editing session ────────────────────────────────────────────────────

    /// Load `id` into the form and enter edit mode.
    ///
    /// Returns the highlight to clear after `HIGHLIGHT_DURATION`, or `None`
    /// when the id is not in the list (nothing changes then).
    pub fn edit(&mut self, id: ItemId) -> Option<Highlight> {
        let form = ItemForm::from_item(self.store.get(id)?);
        self.session = EditingSession::Editing(id);
        self.form = form;
        let highlight = Highlight {
            id,
            token: self.next_token(),
        };
        self.highlight = Some(highlight);
        self.focus_form();
        Some(highlight)
    }

    pub fn clear_highlight(&mut self, token: u64) -> bool {
        if self.highlight.is_some_and(|h| h.token == token) {
            self.highlight = None;
            return true;
        }
        false
    }

    /// Back to create mode with an empty form. No network.
    pub fn cancel(&mut self) {
        self.session = EditingSession::Browsing;
        self.form = ItemForm::default();
    }

    // ─── Submit ─────────────────────────────────────────────────────────────

    /// Validate the form and decide between create and update.
    ///
    /// On a blank title the form is kept as typed, a validation notice is
    /// posted and the title field is focused.
    ///
    /// # Errors
    ///
    /// Returns `ItemError::EmptyTitle` when the title is blank.
    pub fn prepare_submit(&mut self) -> Result<SubmitPlan, ItemError> {
        match self.form.to_draft() {
            Ok(draft) => Ok(match self.session {
                EditingSession::Browsing => SubmitPlan::Create(draft),
                EditingSession::Editing(id) => SubmitPlan::Update(id, draft),
            }),
            Err(err) => {
                self.notify(Notice::validation(err.to_string()));
                self.effects.push(ViewEffect::FocusTitle);
                Err(err)
            }
        }
    }

    /// Create/update went through: reset the form. The caller re-fetches.
    pub fn submit_succeeded(&mut self, operation: Operation) {
        self.cancel();
        if let Some(message) = operation.success_message() {
            self.notify(Notice::success(message));
        }
    }

    /// Create/update failed: list and form stay as they were.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.notify(Notice::error(message));
    }

    // ─── List ───────────────────────────────────────────────────────────────

    /// Replace the cache with a fresh snapshot. Returns dropped duplicates.
    pub fn list_loaded(&mut self, items: Vec<Item>) -> usize {
        self.store.replace_all(items)
    }

    /// The previous list stays intact.
    pub fn list_failed(&mut self, message: impl Into<String>) {
        self.notify(Notice::error(message));
    }

    // ─── Delete ─────────────────────────────────────────────────────────────

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: ItemId) -> bool {
        if !self.store.contains(id) {
            return false;
        }
        self.pending_delete = Some(id);
        true
    }

    pub fn dismiss_delete(&mut self) {
        self.pending_delete = None;
    }

    /// The user confirmed; hands back the id to send.
    pub fn confirm_delete(&mut self) -> Option<ItemId> {
        self.pending_delete.take()
    }

    /// Reconcile locally instead of re-fetching.
    pub fn delete_succeeded(&mut self, id: ItemId) {
        self.store.remove(id);
        if self.session.targets(id) {
            self.cancel();
        }
        if self.highlight.is_some_and(|h| h.id == id) {
            self.highlight = None;
        }
        if let Some(message) = Operation::Delete.success_message() {
            self.notify(Notice::success(message));
        }
    }

    /// The item stays in the list.
    pub fn delete_failed(&mut self, message: impl Into<String>) {
        self.notify(Notice::error(message));
    }
}
