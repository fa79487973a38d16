//! Interaction state behind the CRUD layout.
//!
//! This module owns every piece of transient UI selection state for one CRUD
//! page: which dialog is open, which record or id it is about, the search text
//! and the chosen filter values. It has no rendering concerns and no entity
//! data; mutations go through the page's [`CrudHandler`].

use crate::traits::{Completion, CrudHandler, Entity};
use std::collections::BTreeMap;

/// The dialog currently shown. At most one dialog is open at a time.
#[derive(Debug, Clone)]
pub enum ActiveDialog<T: Entity> {
    None,
    /// Edit form; `None` is the create form
    Edit(Option<T>),
    /// Read-only details of a record
    View(T),
    /// Delete confirmation for a record id
    Delete(T::Id),
}

impl<T: Entity> Default for ActiveDialog<T> {
    fn default() -> Self {
        ActiveDialog::None
    }
}

/// A mutation whose completion has not been reported yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Save,
    Delete,
}

/// State machine mediating between the CRUD widgets and the page callbacks.
///
/// Responsibilities:
/// - Tracking the active dialog and its selected record or id
/// - Routing submit and delete confirmations to the right callback
/// - Holding the dialog open until the callback completes
/// - Keeping search text and filter choices
#[derive(Debug, Clone)]
pub struct CrudState<T: Entity> {
    dialog: ActiveDialog<T>,
    pending: Option<PendingAction>,
    last_error: Option<String>,
    search_query: String,
    filters: BTreeMap<String, String>,
    show_filters: bool,
}

impl<T: Entity> Default for CrudState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> CrudState<T> {
    /// Creates a state with no dialog open and no search or filters.
    pub fn new() -> Self {
        Self {
            dialog: ActiveDialog::None,
            pending: None,
            last_error: None,
            search_query: String::new(),
            filters: BTreeMap::new(),
            show_filters: false,
        }
    }

    // ===== Dialog Queries =====

    pub fn dialog(&self) -> &ActiveDialog<T> {
        &self.dialog
    }

    pub fn is_edit_open(&self) -> bool {
        matches!(self.dialog, ActiveDialog::Edit(_))
    }

    /// Returns true when the edit dialog is open without a record.
    pub fn is_creating(&self) -> bool {
        matches!(self.dialog, ActiveDialog::Edit(None))
    }

    pub fn is_view_open(&self) -> bool {
        matches!(self.dialog, ActiveDialog::View(_))
    }

    pub fn is_delete_open(&self) -> bool {
        matches!(self.dialog, ActiveDialog::Delete(_))
    }

    /// The record being edited or viewed, if any.
    pub fn selected_item(&self) -> Option<&T> {
        match &self.dialog {
            ActiveDialog::Edit(item) => item.as_ref(),
            ActiveDialog::View(item) => Some(item),
            _ => None,
        }
    }

    /// The id awaiting delete confirmation, if any.
    pub fn selected_id(&self) -> Option<&T::Id> {
        match &self.dialog {
            ActiveDialog::Delete(id) => Some(id),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<PendingAction> {
        self.pending
    }

    /// Returns true while a mutation is in flight.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Message of the last failed mutation for the open dialog.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // ===== Search & Filter Queries =====

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    pub fn filter_value(&self, field: &str) -> Option<&str> {
        self.filters.get(field).map(String::as_str)
    }

    pub fn show_filters(&self) -> bool {
        self.show_filters
    }

    // ===== Dialog Transitions =====

    /// Opens the edit dialog in create mode.
    pub fn open_create(&mut self) {
        self.open(ActiveDialog::Edit(None));
    }

    pub fn open_edit(&mut self, item: T) {
        self.open(ActiveDialog::Edit(Some(item)));
    }

    pub fn open_view(&mut self, item: T) {
        self.open(ActiveDialog::View(item));
    }

    pub fn open_delete(&mut self, id: T::Id) {
        self.open(ActiveDialog::Delete(id));
    }

    pub fn close_edit(&mut self) {
        if self.is_edit_open() {
            self.close();
        }
    }

    pub fn close_view(&mut self) {
        if self.is_view_open() {
            self.close();
        }
    }

    pub fn close_delete(&mut self) {
        if self.is_delete_open() {
            self.close();
        }
    }

    /// Dialogs stay put while a mutation is in flight, so its result always
    /// lands on the dialog that started it.
    fn open(&mut self, dialog: ActiveDialog<T>) {
        if let Some(pending) = self.pending {
            tracing::warn!(?pending, "dialog change ignored while a mutation is in flight");
            return;
        }
        self.last_error = None;
        self.dialog = dialog;
    }

    fn close(&mut self) {
        if let Some(pending) = self.pending {
            tracing::warn!(?pending, "dialog change ignored while a mutation is in flight");
            return;
        }
        self.last_error = None;
        self.dialog = ActiveDialog::None;
    }

    // ===== Mutations =====

    /// Submits the edit form.
    ///
    /// Calls `update` when a record is selected and `add` otherwise. The edit
    /// dialog closes once the callback completes successfully; a failure keeps
    /// it open with the error message. Returns false if the submission was
    /// ignored (no edit dialog, or another mutation still in flight).
    pub fn submit<H>(&mut self, item: T, handler: &mut H) -> bool
    where
        H: CrudHandler<T> + ?Sized,
    {
        if let Some(pending) = self.pending {
            tracing::warn!(?pending, "submit ignored while a mutation is in flight");
            return false;
        }

        let editing = match &self.dialog {
            ActiveDialog::Edit(selected) => selected.is_some(),
            _ => {
                tracing::warn!("submit ignored without an open edit dialog");
                return false;
            }
        };

        self.pending = Some(PendingAction::Save);
        let completion = if editing {
            tracing::info!(id = %item.id(), "submitting update");
            handler.update(item)
        } else {
            tracing::info!("submitting new record");
            handler.add(item)
        };
        self.resolve(completion);
        true
    }

    /// Confirms the pending delete.
    ///
    /// Calls `delete` with the selected id, then closes the dialog once the
    /// callback completes successfully. Without an open delete dialog the
    /// callback is never invoked.
    pub fn confirm_delete<H>(&mut self, handler: &mut H) -> bool
    where
        H: CrudHandler<T> + ?Sized,
    {
        if let Some(pending) = self.pending {
            tracing::warn!(?pending, "delete ignored while a mutation is in flight");
            return false;
        }

        let id = match &self.dialog {
            ActiveDialog::Delete(id) => id.clone(),
            _ => {
                self.close_delete();
                return false;
            }
        };

        tracing::info!(%id, "confirming delete");
        self.pending = Some(PendingAction::Delete);
        let completion = handler.delete(id);
        self.resolve(completion);
        true
    }

    /// Reports the result of a deferred mutation.
    pub fn settle(&mut self, result: anyhow::Result<()>) {
        let Some(action) = self.pending.take() else {
            tracing::warn!("settle called with no mutation in flight");
            return;
        };

        match result {
            Ok(()) => match action {
                PendingAction::Save => self.close_edit(),
                PendingAction::Delete => self.close_delete(),
            },
            Err(err) => {
                tracing::error!(?action, error = %format!("{err:#}"), "mutation failed");
                self.last_error = Some(format!("{err:#}"));
            }
        }
    }

    fn resolve(&mut self, completion: Completion) {
        match completion {
            Completion::Ready(result) => self.settle(result),
            Completion::Deferred => {
                tracing::debug!(pending = ?self.pending, "mutation deferred");
            }
        }
    }

    // ===== Search & Filters =====

    /// Stores the search text and forwards it verbatim to the handler.
    pub fn change_search<H>(&mut self, query: impl Into<String>, handler: &mut H)
    where
        H: CrudHandler<T> + ?Sized,
    {
        self.search_query = query.into();
        handler.search(&self.search_query);
    }

    /// Sets a filter value; the empty value ("All") removes the filter.
    pub fn change_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        if value.is_empty() {
            self.filters.remove(&field);
        } else {
            self.filters.insert(field, value);
        }
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn toggle_filters(&mut self) {
        self.show_filters = !self.show_filters;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use serde::Serialize;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Item {
        id: u32,
        name: String,
    }

    impl Entity for Item {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    #[derive(Default)]
    struct Recorder {
        added: Vec<Item>,
        updated: Vec<Item>,
        deleted: Vec<u32>,
        searches: Vec<String>,
        fail: bool,
        defer: bool,
    }

    impl Recorder {
        fn finish(&self) -> Completion {
            if self.defer {
                Completion::Deferred
            } else if self.fail {
                Completion::Ready(Err(anyhow!("backend unavailable")))
            } else {
                Completion::ok()
            }
        }
    }

    impl CrudHandler<Item> for Recorder {
        fn search(&mut self, query: &str) {
            self.searches.push(query.to_string());
        }

        fn add(&mut self, item: Item) -> Completion {
            self.added.push(item);
            self.finish()
        }

        fn update(&mut self, item: Item) -> Completion {
            self.updated.push(item);
            self.finish()
        }

        fn delete(&mut self, id: u32) -> Completion {
            self.deleted.push(id);
            self.finish()
        }
    }

    fn item(id: u32, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_open_and_close_view() {
        let mut state = CrudState::new();
        state.open_view(item(1, "a"));
        assert!(state.is_view_open());
        assert_eq!(state.selected_item(), Some(&item(1, "a")));

        state.close_view();
        assert!(!state.is_view_open());
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn test_dialogs_are_mutually_exclusive() {
        let mut state = CrudState::new();
        state.open_edit(item(1, "a"));
        state.open_delete(1);
        assert!(state.is_delete_open());
        assert!(!state.is_edit_open());
        assert!(state.selected_item().is_none());
        assert_eq!(state.selected_id(), Some(&1));
    }

    #[test]
    fn test_close_only_affects_matching_dialog() {
        let mut state = CrudState::new();
        state.open_view(item(1, "a"));
        state.close_edit();
        assert!(state.is_view_open());
    }

    #[test]
    fn test_submit_on_create_calls_add() {
        let mut state = CrudState::new();
        let mut handler = Recorder::default();

        state.open_create();
        assert!(state.is_creating());
        assert!(state.submit(item(0, "X"), &mut handler));

        assert_eq!(handler.added, vec![item(0, "X")]);
        assert!(handler.updated.is_empty());
        assert!(!state.is_edit_open());
    }

    #[test]
    fn test_submit_on_edit_calls_update() {
        let mut state = CrudState::new();
        let mut handler = Recorder::default();

        state.open_edit(item(3, "old"));
        state.submit(item(3, "new"), &mut handler);

        assert_eq!(handler.updated, vec![item(3, "new")]);
        assert!(handler.added.is_empty());
        assert!(!state.is_edit_open());
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn test_submit_without_dialog_is_ignored() {
        let mut state: CrudState<Item> = CrudState::new();
        let mut handler = Recorder::default();
        assert!(!state.submit(item(1, "a"), &mut handler));
        assert!(handler.added.is_empty());
        assert!(handler.updated.is_empty());
    }

    #[test]
    fn test_failed_submit_keeps_dialog_open() {
        let mut state = CrudState::new();
        let mut handler = Recorder {
            fail: true,
            ..Default::default()
        };

        state.open_edit(item(2, "b"));
        state.submit(item(2, "c"), &mut handler);

        assert!(state.is_edit_open());
        assert_eq!(state.last_error(), Some("backend unavailable"));
        assert!(!state.is_busy());

        state.close_edit();
        assert!(state.last_error().is_none());
    }

    #[test]
    fn test_deferred_submit_waits_for_settle() {
        let mut state = CrudState::new();
        let mut handler = Recorder {
            defer: true,
            ..Default::default()
        };

        state.open_create();
        state.submit(item(0, "x"), &mut handler);
        assert!(state.is_edit_open());
        assert_eq!(state.pending(), Some(PendingAction::Save));

        // a second submit while in flight is rejected
        assert!(!state.submit(item(0, "y"), &mut handler));
        assert_eq!(handler.added.len(), 1);

        state.settle(Ok(()));
        assert!(!state.is_edit_open());
        assert!(!state.is_busy());
    }

    #[test]
    fn test_dialogs_locked_while_save_in_flight() {
        let mut state = CrudState::new();
        let mut handler = Recorder {
            defer: true,
            ..Default::default()
        };

        state.open_edit(item(1, "a"));
        state.submit(item(1, "b"), &mut handler);

        state.open_edit(item(2, "other"));
        state.open_view(item(2, "other"));
        state.open_delete(2);
        state.close_edit();
        assert_eq!(state.selected_item(), Some(&item(1, "a")));

        state.settle(Err(anyhow!("save of item 1 failed")));
        assert!(state.is_edit_open());
        assert_eq!(state.selected_item(), Some(&item(1, "a")));
        assert_eq!(state.last_error(), Some("save of item 1 failed"));

        // unlocked once settled
        state.open_edit(item(2, "other"));
        assert_eq!(state.selected_item(), Some(&item(2, "other")));
        assert!(state.last_error().is_none());
    }

    #[test]
    fn test_settle_closes_only_the_submitting_dialog() {
        let mut state = CrudState::new();
        let mut handler = Recorder {
            defer: true,
            ..Default::default()
        };

        state.open_edit(item(1, "a"));
        state.submit(item(1, "b"), &mut handler);
        state.open_edit(item(2, "other"));
        state.settle(Ok(()));

        assert!(!state.is_edit_open());
        assert!(!state.is_busy());
        state.open_edit(item(2, "other"));
        assert!(state.is_edit_open());
    }

    #[test]
    fn test_confirm_delete_uses_selected_id() {
        let mut state = CrudState::new();
        let mut handler = Recorder::default();

        state.open_delete(1);
        state.open_delete(7);
        assert!(state.confirm_delete(&mut handler));

        assert_eq!(handler.deleted, vec![7]);
        assert!(!state.is_delete_open());
        assert!(state.selected_id().is_none());
    }

    #[test]
    fn test_confirm_delete_without_open_dialog_never_calls_handler() {
        let mut state: CrudState<Item> = CrudState::new();
        let mut handler = Recorder::default();
        assert!(!state.confirm_delete(&mut handler));
        assert!(handler.deleted.is_empty());
    }

    #[test]
    fn test_settle_without_pending_is_noop() {
        let mut state: CrudState<Item> = CrudState::new();
        state.open_view(item(1, "a"));
        state.settle(Ok(()));
        assert!(state.is_view_open());
    }

    #[test]
    fn test_search_is_forwarded_verbatim() {
        let mut state: CrudState<Item> = CrudState::new();
        let mut handler = Recorder::default();
        state.change_search("  Mixed Case ", &mut handler);
        assert_eq!(state.search_query(), "  Mixed Case ");
        assert_eq!(handler.searches, vec!["  Mixed Case ".to_string()]);
    }

    #[test]
    fn test_filters() {
        let mut state: CrudState<Item> = CrudState::new();
        state.change_filter("orderStatus", "pending");
        state.change_filter("paymentStatus", "paid");
        assert_eq!(state.filter_value("orderStatus"), Some("pending"));

        state.change_filter("orderStatus", "");
        assert_eq!(state.filter_value("orderStatus"), None);
        assert_eq!(state.filters().len(), 1);

        state.clear_filters();
        assert!(state.filters().is_empty());

        assert!(!state.show_filters());
        state.toggle_filters();
        assert!(state.show_filters());
    }
}
