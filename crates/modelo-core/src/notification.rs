//! Notification Slot
//!
//! Holds at most one failure, tagged with the operation that produced it.

/// Which remote operation failed last
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Listing the collection failed; the previous snapshot is kept
    Load,
    /// Create or update failed; the draft is kept
    Save,
    /// Delete failed; the list is unchanged
    Delete,
}

impl FailureKind {
    /// Fixed user-facing text, never parameterized by the underlying error
    pub fn message(self) -> &'static str {
        match self {
            FailureKind::Load => "Erro ao carregar os modelos.",
            FailureKind::Save => "Erro ao salvar o modelo.",
            FailureKind::Delete => "Erro ao deletar o modelo.",
        }
    }
}

/// Single shared error banner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSlot {
    current: Option<FailureKind>,
}

impl NotificationSlot {
    /// Overwrite whatever is showing
    pub fn set(&mut self, kind: FailureKind) {
        self.current = Some(kind);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn kind(&self) -> Option<FailureKind> {
        self.current
    }

    pub fn message(&self) -> Option<&'static str> {
        self.current.map(FailureKind::message)
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}
