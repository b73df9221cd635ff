//! Modelo Core
//!
//! Client-side state for managing the remote Modelo collection:
//! - models: record, draft and editable fields
//! - state: collection snapshot + edit session + notification slot
//! - client: remote contract and its HTTP implementation
//! - actions: async refresh / save / delete drivers

mod actions;
mod client;
mod config;
mod error;
mod models;
mod notification;
mod session;
mod state;

mod tests;

pub use actions::{delete, refresh, save, StateHandle};
pub use client::{HttpModeloClient, ModeloApi};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use models::{Modelo, ModeloDraft, ModeloField, ModeloId};
pub use notification::{FailureKind, NotificationSlot};
pub use session::EditSession;
pub use state::{
    DeleteOutcome, DeleteTicket, ModeloState, RefreshTicket, SaveOutcome, SaveRequest, SaveTarget,
    SaveTicket,
};
