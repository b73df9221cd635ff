//! Async Actions
//!
//! Drive the state machine through the remote client. Each action borrows
//! the state only inside short synchronous closures, never across an await.

use std::cell::RefCell;

use tracing::debug;

use crate::client::ModeloApi;
use crate::models::ModeloId;
use crate::state::{DeleteOutcome, ModeloState, SaveOutcome, SaveTarget};

/// Anything that can lend out `&mut ModeloState` for a moment.
///
/// Returns `None` when the state is gone (e.g. the owning UI was unmounted).
pub trait StateHandle {
    fn update_state<R>(&self, f: impl FnOnce(&mut ModeloState) -> R) -> Option<R>;
}

impl StateHandle for RefCell<ModeloState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut ModeloState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Fetch the collection and replace the snapshot
pub async fn refresh<A, S>(api: &A, state: &S)
where
    A: ModeloApi + ?Sized,
    S: StateHandle,
{
    let Some(ticket) = state.update_state(ModeloState::begin_refresh) else {
        return;
    };
    let result = api.list().await;
    state.update_state(|s| s.finish_refresh(ticket, result));
}

/// Send the open draft as a create or update, then resync on success
pub async fn save<A, S>(api: &A, state: &S) -> Option<SaveOutcome>
where
    A: ModeloApi + ?Sized,
    S: StateHandle,
{
    let request = state.update_state(ModeloState::begin_save).flatten()?;

    let result = match &request.target {
        SaveTarget::Create => api.create(&request.draft).await,
        SaveTarget::Update(id) => api.update(id, &request.draft).await,
    };

    let outcome = state.update_state(|s| s.finish_save(request.ticket, result))?;
    if outcome.needs_refresh() {
        refresh(api, state).await;
    }
    Some(outcome)
}

/// Delete straight from the list, then resync on success
pub async fn delete<A, S>(api: &A, state: &S, id: ModeloId) -> Option<DeleteOutcome>
where
    A: ModeloApi + ?Sized,
    S: StateHandle,
{
    let Some(ticket) = state.update_state(|s| s.begin_delete(id.clone())).flatten() else {
        debug!(%id, "delete skipped");
        return None;
    };

    let result = api.delete(ticket.id()).await;

    let outcome = state.update_state(|s| s.finish_delete(ticket, result))?;
    if outcome == DeleteOutcome::Deleted {
        refresh(api, state).await;
    }
    Some(outcome)
}
