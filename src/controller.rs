//! Form-state and page-state controllers shared by every resource page.
//!
//! A page owns the latest fetched collection, a loading flag, the dialog
//! state machine, and the error reporter. All of it is in-memory,
//! per-page-visit state; nothing survives a reload.

use crate::client::{ApiClient, Resource};
use crate::error::ApiError;

/// The add/edit dialog. `Editing` remembers the id captured when the
/// dialog was opened; the draft never carries one.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog<D> {
    Closed,
    Creating { draft: D },
    Editing { id: i32, draft: D },
}

impl<D> Dialog<D> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::Closed)
    }
}

/// Holds at most one active message; any new action replaces or clears it.
#[derive(Debug, Default)]
pub struct ErrorReporter {
    message: Option<String>,
}

impl ErrorReporter {
    pub fn set(&mut self, message: String) {
        self.message = Some(message);
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn current(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// The mutation a validated submit will perform.
#[derive(Debug, Clone)]
pub enum SubmitAction<D> {
    Create(D),
    Update(i32, D),
}

/// Handle for an in-flight submit. Carries the dialog generation it was
/// started under so a response that lands after the dialog has moved on
/// can be recognized and dropped.
pub struct SubmitTicket<R: Resource> {
    generation: u64,
    pub action: SubmitAction<R::Draft>,
}

/// One resource page: collection rows, loading flag, dialog, error message.
pub struct ResourcePage<R: Resource> {
    rows: Vec<R::Entity>,
    loading: bool,
    dialog: Dialog<R::Draft>,
    generation: u64,
    pub error: ErrorReporter,
}

impl<R: Resource> Default for ResourcePage<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ResourcePage<R> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            // true from construction until the first list resolves
            loading: true,
            dialog: Dialog::Closed,
            generation: 0,
            error: ErrorReporter::default(),
        }
    }

    pub fn rows(&self) -> &[R::Entity] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn dialog(&self) -> &Dialog<R::Draft> {
        &self.dialog
    }

    /// Mutable access to the open draft, for field edits. `None` while the
    /// dialog is closed.
    pub fn draft_mut(&mut self) -> Option<&mut R::Draft> {
        match &mut self.dialog {
            Dialog::Closed => None,
            Dialog::Creating { draft } | Dialog::Editing { draft, .. } => Some(draft),
        }
    }

    /// Re-fetch the whole collection. Success replaces the rows and clears
    /// the error; failure leaves the prior rows untouched.
    pub async fn refresh(&mut self, client: &ApiClient) {
        match client.list::<R>().await {
            Ok(rows) => {
                self.rows = rows;
                self.error.clear();
            }
            Err(e) => {
                tracing::debug!(error = %e, "list {} failed", R::COLLECTION);
                self.error.set(format!("Failed to fetch {}", R::PLURAL));
            }
        }
        self.loading = false;
    }

    pub fn open_new(&mut self) {
        self.dialog = Dialog::Creating {
            draft: R::Draft::default(),
        };
        self.generation += 1;
        self.error.clear();
    }

    pub fn open_edit(&mut self, entity: &R::Entity) {
        self.dialog = Dialog::Editing {
            id: R::entity_id(entity),
            draft: R::seed(entity),
        };
        self.generation += 1;
        self.error.clear();
    }

    /// Discard the draft and close, unconditionally. Idempotent.
    pub fn close(&mut self) {
        self.dialog = Dialog::Closed;
        self.generation += 1;
        self.error.clear();
    }

    /// Validate the open draft and hand back the mutation to perform.
    /// Returns `None` when the dialog is closed or validation failed (the
    /// failing reason is already in the reporter). No network is touched.
    pub fn start_submit(&mut self) -> Option<SubmitTicket<R>> {
        let (action, creating) = match &self.dialog {
            Dialog::Closed => return None,
            Dialog::Creating { draft } => (SubmitAction::Create(draft.clone()), true),
            Dialog::Editing { id, draft } => (SubmitAction::Update(*id, draft.clone()), false),
        };

        let draft = match &action {
            SubmitAction::Create(draft) | SubmitAction::Update(_, draft) => draft,
        };
        if let Err(e) = R::validate(draft, creating) {
            self.error.set(e.to_string());
            return None;
        }

        Some(SubmitTicket {
            generation: self.generation,
            action,
        })
    }

    /// Apply the outcome of a submit started with [`Self::start_submit`].
    ///
    /// Returns `true` when the mutation succeeded and the caller should
    /// refetch. A ticket whose generation no longer matches (the dialog
    /// was closed or re-opened while the request was in flight) is dropped
    /// without mutating anything.
    pub fn apply_submit(&mut self, ticket: &SubmitTicket<R>, result: Result<(), ApiError>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "dropping stale {} submit outcome (generation {} != {})",
                R::COLLECTION,
                ticket.generation,
                self.generation
            );
            return false;
        }

        match result {
            Ok(()) => {
                self.dialog = Dialog::Closed;
                self.generation += 1;
                self.error.clear();
                true
            }
            Err(e) => {
                self.error.set(e.to_string());
                false
            }
        }
    }

    /// Validate, send, apply, and refetch once on success.
    pub async fn submit(&mut self, client: &ApiClient) {
        let Some(ticket) = self.start_submit() else {
            return;
        };

        let result = match &ticket.action {
            SubmitAction::Create(draft) => client.create::<R>(draft).await,
            SubmitAction::Update(id, draft) => client.update::<R>(*id, draft).await,
        };

        if self.apply_submit(&ticket, result) {
            self.refresh(client).await;
        }
    }

    /// Delete a row by id, then refetch. The row disappears only through
    /// the refetch; there is no optimistic removal.
    pub async fn delete(&mut self, client: &ApiClient, id: i32) {
        match client.delete::<R>(id).await {
            Ok(()) => self.refresh(client).await,
            Err(e) => self.error.set(e.to_string()),
        }
    }
}
