//! Part Master View-State Machine
//!
//! Pure reducer behind the part master screen. Every user intent is a
//! synchronous method; network effects are handed back to the caller as
//! command values (what to dispatch) and their outcomes are fed back through
//! the `finish_*` methods. Keeps the screen testable without a DOM.
//!
//! Searches and notifications carry sequence numbers so a completion that
//! was superseded before it resolved can never overwrite newer state.

use crate::error::StoreError;
use crate::models::Part;
use crate::validate;

/// Notification auto-dismiss delay
pub const NOTIFICATION_TIMEOUT_MS: u32 = 3000;

/// State of the part list
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Part>),
    Error(String),
}

/// Which dialog is presented, if any
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DialogMode {
    #[default]
    Closed,
    Create,
    /// Editing the part with this number; the number itself is immutable
    Edit {
        id: u32,
    },
}

/// Raw dialog field contents, discarded when the dialog closes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub id_text: String,
    pub name_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Success,
    Error,
}

/// Transient toast message
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    /// Guards the auto-dismiss timer against clearing a newer notification
    pub seq: u64,
}

/// Mutation the caller must dispatch after a successful `begin_save`
#[derive(Debug, Clone, PartialEq)]
pub enum SaveCommand {
    Create(Part),
    Update { id: u32, name: String },
}

/// All state owned by the part master screen
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartMasterState {
    pub list: ListState,
    pub dialog: DialogMode,
    pub form: FormState,
    pub form_error: Option<String>,
    pub save_in_flight: bool,
    pub delete_target: Option<Part>,
    pub delete_in_flight: bool,
    /// Last-used search text, re-applied after every successful mutation
    pub filter_text: String,
    pub notification: Option<Notification>,
    search_seq: u64,
    notify_seq: u64,
}

impl PartMasterState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Search
    // ========================

    /// Empty or blank filter text means the full list
    pub fn active_filter(&self) -> Option<String> {
        let text = self.filter_text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    /// Start a list fetch; returns the sequence number to pass back to
    /// [`finish_search`](Self::finish_search)
    pub fn begin_search(&mut self) -> u64 {
        self.search_seq += 1;
        self.list = ListState::Loading;
        self.search_seq
    }

    /// Apply a completed list fetch. Completions superseded by a later
    /// `begin_search` are discarded. Returns whether the result was applied.
    pub fn finish_search(&mut self, seq: u64, result: Result<Vec<Part>, StoreError>) -> bool {
        if seq != self.search_seq {
            return false;
        }
        self.list = match result {
            Ok(parts) => ListState::Loaded(parts),
            Err(err) => ListState::Error(err.to_string()),
        };
        true
    }

    // ========================
    // Create / Edit Dialog
    // ========================

    pub fn open_create(&mut self) {
        if self.save_in_flight {
            return;
        }
        self.dialog = DialogMode::Create;
        self.form = FormState::default();
        self.form_error = None;
    }

    pub fn open_edit(&mut self, part: &Part) {
        if self.save_in_flight {
            return;
        }
        self.dialog = DialogMode::Edit { id: part.id };
        self.form = FormState {
            id_text: part.id.to_string(),
            name_text: part.name.clone(),
        };
        self.form_error = None;
    }

    /// No-op while a save is in flight or when already closed
    pub fn close_dialog(&mut self) {
        if self.save_in_flight {
            return;
        }
        self.dialog = DialogMode::Closed;
        self.form = FormState::default();
        self.form_error = None;
    }

    /// Validate the form and, if it passes, mark the save in flight and
    /// return the mutation to dispatch. On a violation the dialog stays open
    /// with a form-local error and nothing is dispatched.
    pub fn begin_save(&mut self) -> Option<SaveCommand> {
        if self.save_in_flight {
            return None;
        }
        self.form_error = None;
        let command = match self.dialog {
            DialogMode::Closed => return None,
            DialogMode::Create => {
                match validate::validate_create(&self.form.id_text, &self.form.name_text) {
                    Ok(part) => SaveCommand::Create(part),
                    Err(message) => {
                        self.form_error = Some(message);
                        return None;
                    }
                }
            }
            DialogMode::Edit { id } => match validate::validate_edit(&self.form.name_text) {
                Ok(name) => SaveCommand::Update { id, name },
                Err(message) => {
                    self.form_error = Some(message);
                    return None;
                }
            },
        };
        self.save_in_flight = true;
        Some(command)
    }

    /// Apply a completed save. On success the dialog closes, the form is
    /// discarded and a success notification is raised; the caller must then
    /// re-run the search with the last-used filter. On failure the dialog
    /// stays open with the failure message. Returns whether to re-search.
    pub fn finish_save(&mut self, result: Result<(), StoreError>) -> bool {
        if !self.save_in_flight {
            return false;
        }
        self.save_in_flight = false;
        match result {
            Ok(()) => {
                let message = match self.dialog {
                    DialogMode::Edit { .. } => "Part updated.",
                    _ => "Part registered.",
                };
                self.dialog = DialogMode::Closed;
                self.form = FormState::default();
                self.form_error = None;
                self.notify(message, Severity::Success);
                true
            }
            Err(err) => {
                self.form_error = Some(err.to_string());
                false
            }
        }
    }

    // ========================
    // Delete Confirmation
    // ========================

    pub fn request_delete(&mut self, part: Part) {
        if self.delete_in_flight {
            return;
        }
        self.delete_target = Some(part);
    }

    /// No-op while the delete is in flight or when already closed
    pub fn cancel_delete(&mut self) {
        if self.delete_in_flight {
            return;
        }
        self.delete_target = None;
    }

    /// Mark the confirmed delete in flight and return the part number to
    /// dispatch, or `None` when there is nothing pending
    pub fn begin_delete(&mut self) -> Option<u32> {
        if self.delete_in_flight {
            return None;
        }
        let id = self.delete_target.as_ref()?.id;
        self.delete_in_flight = true;
        Some(id)
    }

    /// Apply a completed delete. On success the prompt closes and a success
    /// notification is raised; the caller must re-run the search. On failure
    /// the prompt stays open for retry and an error notification is raised.
    /// Returns whether to re-search.
    pub fn finish_delete(&mut self, result: Result<(), StoreError>) -> bool {
        if !self.delete_in_flight {
            return false;
        }
        self.delete_in_flight = false;
        match result {
            Ok(()) => {
                self.delete_target = None;
                self.notify("Part deleted.", Severity::Success);
                true
            }
            Err(err) => {
                self.notify(err.to_string(), Severity::Error);
                false
            }
        }
    }

    // ========================
    // Notifications
    // ========================

    /// Raise a notification, superseding any current one; returns its
    /// sequence number for the auto-dismiss timer
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.notify_seq += 1;
        self.notification = Some(Notification {
            message: message.into(),
            severity,
            seq: self.notify_seq,
        });
        self.notify_seq
    }

    /// Manual dismissal
    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Timer-driven dismissal; ignored when a newer notification replaced
    /// the one the timer was armed for
    pub fn expire_notification(&mut self, seq: u64) {
        if self.notification.as_ref().map(|n| n.seq) == Some(seq) {
            self.notification = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(id: u32, name: &str) -> Part {
        Part { id, name: name.to_string() }
    }

    fn loaded_state(parts: Vec<Part>) -> PartMasterState {
        let mut state = PartMasterState::new();
        let seq = state.begin_search();
        assert!(state.finish_search(seq, Ok(parts)));
        state
    }

    // ---- search ----

    #[test]
    fn test_search_success_replaces_list_in_server_order() {
        let mut state = loaded_state(vec![part(99, "Old")]);
        let seq = state.begin_search();
        assert_eq!(state.list, ListState::Loading);
        assert!(state.finish_search(seq, Ok(vec![part(10, "Bolt"), part(15, "Nut")])));
        assert_eq!(
            state.list,
            ListState::Loaded(vec![part(10, "Bolt"), part(15, "Nut")])
        );
    }

    #[test]
    fn test_search_success_with_zero_rows() {
        let state = loaded_state(vec![]);
        assert_eq!(state.list, ListState::Loaded(vec![]));
    }

    #[test]
    fn test_search_failure_sets_error_and_clears_list() {
        let mut state = loaded_state(vec![part(10, "Bolt")]);
        let seq = state.begin_search();
        assert!(state.finish_search(seq, Err(StoreError::Transport)));
        assert_eq!(
            state.list,
            ListState::Error("cannot reach the API server".to_string())
        );
    }

    #[test]
    fn test_stale_search_completion_is_discarded() {
        let mut state = PartMasterState::new();
        let first = state.begin_search();
        let second = state.begin_search();
        assert!(!state.finish_search(first, Ok(vec![part(99, "Stale")])));
        assert_eq!(state.list, ListState::Loading);
        assert!(state.finish_search(second, Ok(vec![part(10, "Bolt")])));
        assert_eq!(state.list, ListState::Loaded(vec![part(10, "Bolt")]));
    }

    #[test]
    fn test_blank_filter_text_means_full_list() {
        let mut state = PartMasterState::new();
        assert_eq!(state.active_filter(), None);
        state.filter_text = "   ".to_string();
        assert_eq!(state.active_filter(), None);
        state.filter_text = " 10 ".to_string();
        assert_eq!(state.active_filter(), Some("10".to_string()));
    }

    // ---- create / edit ----

    #[test]
    fn test_create_with_empty_name_is_rejected_locally() {
        let mut state = PartMasterState::new();
        state.open_create();
        state.form.id_text = "10".to_string();
        assert_eq!(state.begin_save(), None);
        assert!(state.form_error.is_some());
        assert!(!state.save_in_flight);
        assert_eq!(state.dialog, DialogMode::Create);
    }

    #[test]
    fn test_create_with_out_of_range_id_is_rejected_locally() {
        let mut state = PartMasterState::new();
        state.open_create();
        state.form.id_text = "100000".to_string();
        state.form.name_text = "Bolt".to_string();
        assert_eq!(state.begin_save(), None);
        assert!(state.form_error.is_some());
    }

    #[test]
    fn test_successful_create_closes_dialog_and_notifies() {
        let mut state = PartMasterState::new();
        state.filter_text = "5".to_string();
        state.open_create();
        state.form.id_text = "10".to_string();
        state.form.name_text = "Bolt".to_string();
        assert_eq!(
            state.begin_save(),
            Some(SaveCommand::Create(part(10, "Bolt")))
        );
        assert!(state.save_in_flight);
        assert!(state.finish_save(Ok(())));
        assert_eq!(state.dialog, DialogMode::Closed);
        assert_eq!(state.form, FormState::default());
        let toast = state.notification.clone().expect("success notification");
        assert_eq!(toast.severity, Severity::Success);
        // the re-search uses the previously active filter
        assert_eq!(state.active_filter(), Some("5".to_string()));
    }

    #[test]
    fn test_save_failure_keeps_dialog_open_with_form_error() {
        let mut state = PartMasterState::new();
        state.open_create();
        state.form.id_text = "10".to_string();
        state.form.name_text = "Bolt".to_string();
        assert!(state.begin_save().is_some());
        assert!(!state.finish_save(Err(StoreError::Api("part 10 already exists".to_string()))));
        assert_eq!(state.dialog, DialogMode::Create);
        assert_eq!(state.form_error.as_deref(), Some("part 10 already exists"));
        assert!(!state.save_in_flight);
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_edit_seeds_form_and_update_carries_no_id_field() {
        let mut state = PartMasterState::new();
        state.open_edit(&part(10, "Bolt"));
        assert_eq!(state.form.id_text, "10");
        assert_eq!(state.form.name_text, "Bolt");
        state.form.name_text = " Hex Bolt ".to_string();
        assert_eq!(
            state.begin_save(),
            Some(SaveCommand::Update { id: 10, name: "Hex Bolt".to_string() })
        );
    }

    #[test]
    fn test_edited_id_text_cannot_change_the_addressed_part() {
        let mut state = PartMasterState::new();
        state.open_edit(&part(10, "Bolt"));
        state.form.id_text = "999".to_string();
        match state.begin_save() {
            Some(SaveCommand::Update { id, .. }) => assert_eq!(id, 10),
            other => panic!("expected update command, got {other:?}"),
        }
    }

    #[test]
    fn test_begin_save_is_gated_while_in_flight() {
        let mut state = PartMasterState::new();
        state.open_create();
        state.form.id_text = "10".to_string();
        state.form.name_text = "Bolt".to_string();
        assert!(state.begin_save().is_some());
        assert_eq!(state.begin_save(), None);
    }

    #[test]
    fn test_close_dialog_blocked_while_saving() {
        let mut state = PartMasterState::new();
        state.open_create();
        state.form.id_text = "10".to_string();
        state.form.name_text = "Bolt".to_string();
        assert!(state.begin_save().is_some());
        state.close_dialog();
        assert_eq!(state.dialog, DialogMode::Create);
    }

    #[test]
    fn test_close_dialog_when_closed_is_a_noop() {
        let mut state = loaded_state(vec![part(10, "Bolt")]);
        let before = state.clone();
        state.close_dialog();
        assert_eq!(state, before);
    }

    // ---- delete ----

    #[test]
    fn test_delete_dispatches_nothing_until_confirmed() {
        let mut state = PartMasterState::new();
        state.request_delete(part(10, "Bolt"));
        assert_eq!(state.delete_target, Some(part(10, "Bolt")));
        assert!(!state.delete_in_flight);
        assert_eq!(state.begin_delete(), Some(10));
        assert!(state.delete_in_flight);
    }

    #[test]
    fn test_begin_delete_without_target_is_none() {
        let mut state = PartMasterState::new();
        assert_eq!(state.begin_delete(), None);
        assert!(!state.delete_in_flight);
    }

    #[test]
    fn test_failed_delete_keeps_prompt_pending_and_raises_error_toast() {
        let mut state = PartMasterState::new();
        state.request_delete(part(10, "Bolt"));
        assert_eq!(state.begin_delete(), Some(10));
        assert!(!state.finish_delete(Err(StoreError::Api("part is referenced".to_string()))));
        assert_eq!(state.delete_target, Some(part(10, "Bolt")));
        assert!(!state.delete_in_flight);
        let toast = state.notification.expect("error notification");
        assert_eq!(toast.severity, Severity::Error);
        assert_eq!(toast.message, "part is referenced");
    }

    #[test]
    fn test_successful_delete_clears_target_and_notifies() {
        let mut state = PartMasterState::new();
        state.request_delete(part(10, "Bolt"));
        assert_eq!(state.begin_delete(), Some(10));
        assert!(state.finish_delete(Ok(())));
        assert_eq!(state.delete_target, None);
        let toast = state.notification.expect("success notification");
        assert_eq!(toast.severity, Severity::Success);
    }

    #[test]
    fn test_cancel_delete_when_closed_is_a_noop() {
        let mut state = loaded_state(vec![part(10, "Bolt")]);
        let before = state.clone();
        state.cancel_delete();
        assert_eq!(state, before);
    }

    #[test]
    fn test_cancel_delete_blocked_while_in_flight() {
        let mut state = PartMasterState::new();
        state.request_delete(part(10, "Bolt"));
        assert!(state.begin_delete().is_some());
        state.cancel_delete();
        assert_eq!(state.delete_target, Some(part(10, "Bolt")));
    }

    // ---- notifications ----

    #[test]
    fn test_newer_notification_supersedes_and_survives_stale_timer() {
        let mut state = PartMasterState::new();
        let first = state.notify("first", Severity::Success);
        let second = state.notify("second", Severity::Error);
        state.expire_notification(first);
        assert_eq!(
            state.notification.as_ref().map(|n| n.message.as_str()),
            Some("second")
        );
        state.expire_notification(second);
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_manual_dismissal_clears_the_toast() {
        let mut state = PartMasterState::new();
        state.notify("done", Severity::Success);
        state.dismiss_notification();
        assert!(state.notification.is_none());
    }
}
