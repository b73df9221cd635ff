//! Modelo State Machine
//!
//! Collection snapshot, edit session and notification slot behind one
//! mutation surface. Remote calls are split into `begin_*` / `finish_*`
//! pairs so the caller never holds the state across an `.await`.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::error::ApiResult;
use crate::models::{Modelo, ModeloDraft, ModeloField, ModeloId};
use crate::notification::{FailureKind, NotificationSlot};
use crate::session::EditSession;

/// Issued by `begin_refresh`; only the newest ticket may apply its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

/// Ties a save result to the session that started it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveTicket {
    epoch: u64,
}

/// Which remote call a save turns into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(ModeloId),
}

/// Everything needed to run a save without touching the state again
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub ticket: SaveTicket,
    pub target: SaveTarget,
    pub draft: ModeloDraft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Session closed, caller must refresh
    Saved,
    /// Session kept open with the save-failure message
    Failed,
    /// The session that started the save is gone; only the server may have changed
    Stale { persisted: bool },
}

impl SaveOutcome {
    pub fn needs_refresh(self) -> bool {
        matches!(self, SaveOutcome::Saved | SaveOutcome::Stale { persisted: true })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTicket {
    id: ModeloId,
}

impl DeleteTicket {
    pub fn id(&self) -> &ModeloId {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Caller must refresh
    Deleted,
    Failed,
}

/// Client-side state for the Modelo page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModeloState {
    records: Vec<Modelo>,
    session: EditSession,
    notification: NotificationSlot,
    /// Bumped on every open and close
    session_epoch: u64,
    saves_in_flight: BTreeSet<u64>,
    deletes_in_flight: BTreeSet<ModeloId>,
    latest_refresh: u64,
    refresh_pending: bool,
}

impl ModeloState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Read access
    // ========================

    pub fn records(&self) -> &[Modelo] {
        &self.records
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn notification(&self) -> &NotificationSlot {
        &self.notification
    }

    pub fn is_modal_visible(&self) -> bool {
        self.session.is_open()
    }

    /// A save for the current session is waiting on the server
    pub fn is_saving(&self) -> bool {
        self.saves_in_flight.contains(&self.session_epoch)
    }

    pub fn is_deleting(&self, id: &ModeloId) -> bool {
        self.deletes_in_flight.contains(id)
    }

    pub fn is_loading(&self) -> bool {
        self.refresh_pending
    }

    // ========================
    // Edit session
    // ========================

    /// Open the dialog with a blank draft, replacing any open session
    pub fn open_create(&mut self) {
        self.session_epoch += 1;
        self.session = EditSession::CreatingNew {
            draft: ModeloDraft::default(),
        };
        debug!(epoch = self.session_epoch, "opened create session");
    }

    /// Open the dialog pre-filled from `record`, replacing any open session
    pub fn open_edit(&mut self, record: &Modelo) {
        self.session_epoch += 1;
        self.session = EditSession::Editing {
            target_id: record.id.clone(),
            draft: record.to_draft(),
        };
        debug!(epoch = self.session_epoch, id = %record.id, "opened edit session");
    }

    /// Replace one draft field. Returns false (and changes nothing) while closed.
    pub fn update_field(&mut self, field: ModeloField, value: String) -> bool {
        match self.session.draft_mut() {
            Some(draft) => {
                draft.set(field, value);
                true
            }
            None => {
                warn!(field = field.name(), "field update with no open session ignored");
                false
            }
        }
    }

    /// Drop the draft, hide the dialog and clear the banner
    pub fn cancel(&mut self) {
        self.session_epoch += 1;
        self.session = EditSession::Closed;
        self.notification.clear();
    }

    // ========================
    // Refresh
    // ========================

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.latest_refresh += 1;
        self.refresh_pending = true;
        RefreshTicket(self.latest_refresh)
    }

    /// Apply a list result. Returns false when a newer refresh superseded it.
    pub fn finish_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: ApiResult<Vec<Modelo>>,
    ) -> bool {
        if ticket.0 != self.latest_refresh {
            debug!(
                ticket = ticket.0,
                latest = self.latest_refresh,
                "dropping superseded list result"
            );
            return false;
        }
        self.refresh_pending = false;

        match result {
            Ok(records) => {
                info!(count = records.len(), "loaded modelos");
                self.records = records;
            }
            Err(e) => {
                warn!(error = %e, "failed to load modelos, keeping previous snapshot");
                self.notification.set(FailureKind::Load);
            }
        }
        true
    }

    // ========================
    // Save
    // ========================

    /// Snapshot the draft for sending. `None` when closed or already saving.
    pub fn begin_save(&mut self) -> Option<SaveRequest> {
        let target = match &self.session {
            EditSession::Closed => {
                warn!("save with no open session ignored");
                return None;
            }
            EditSession::CreatingNew { .. } => SaveTarget::Create,
            EditSession::Editing { target_id, .. } => SaveTarget::Update(target_id.clone()),
        };
        if !self.saves_in_flight.insert(self.session_epoch) {
            debug!(epoch = self.session_epoch, "save already in flight");
            return None;
        }

        let draft = self.session.draft().cloned().unwrap_or_default();
        Some(SaveRequest {
            ticket: SaveTicket {
                epoch: self.session_epoch,
            },
            target,
            draft,
        })
    }

    pub fn finish_save(&mut self, ticket: SaveTicket, result: ApiResult<()>) -> SaveOutcome {
        self.saves_in_flight.remove(&ticket.epoch);

        if ticket.epoch != self.session_epoch {
            let persisted = result.is_ok();
            debug!(epoch = ticket.epoch, persisted, "save finished after its session ended");
            return SaveOutcome::Stale { persisted };
        }

        match result {
            Ok(()) => {
                info!("modelo saved");
                self.cancel();
                SaveOutcome::Saved
            }
            Err(e) => {
                warn!(error = %e, "failed to save modelo");
                self.notification.set(FailureKind::Save);
                SaveOutcome::Failed
            }
        }
    }

    // ========================
    // Delete
    // ========================

    /// `None` while a delete for the same id is pending
    pub fn begin_delete(&mut self, id: ModeloId) -> Option<DeleteTicket> {
        if !self.deletes_in_flight.insert(id.clone()) {
            debug!(%id, "delete already in flight");
            return None;
        }
        Some(DeleteTicket { id })
    }

    pub fn finish_delete(&mut self, ticket: DeleteTicket, result: ApiResult<()>) -> DeleteOutcome {
        self.deletes_in_flight.remove(&ticket.id);

        match result {
            Ok(()) => {
                info!(id = %ticket.id, "modelo deleted");
                DeleteOutcome::Deleted
            }
            Err(e) => {
                warn!(id = %ticket.id, error = %e, "failed to delete modelo");
                self.notification.set(FailureKind::Delete);
                DeleteOutcome::Failed
            }
        }
    }
}
