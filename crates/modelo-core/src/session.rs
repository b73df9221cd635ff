//! Edit Session
//!
//! The modal's mode and its draft, as one tagged value.

use crate::models::{ModeloDraft, ModeloId};

/// What the form dialog is doing. The dialog is visible iff not `Closed`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Closed,
    /// Draft for a record the server has not seen yet
    CreatingNew { draft: ModeloDraft },
    /// Draft of an existing record, saved back to `target_id`
    Editing { target_id: ModeloId, draft: ModeloDraft },
}

impl EditSession {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditSession::Closed)
    }

    pub fn draft(&self) -> Option<&ModeloDraft> {
        match self {
            EditSession::Closed => None,
            EditSession::CreatingNew { draft } | EditSession::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut ModeloDraft> {
        match self {
            EditSession::Closed => None,
            EditSession::CreatingNew { draft } | EditSession::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn target_id(&self) -> Option<&ModeloId> {
        match self {
            EditSession::Editing { target_id, .. } => Some(target_id),
            _ => None,
        }
    }

    /// Dialog title for the current mode
    pub fn title(&self) -> &'static str {
        match self {
            EditSession::Editing { .. } => "Editar Modelo",
            _ => "Adicionar Modelo",
        }
    }
}
