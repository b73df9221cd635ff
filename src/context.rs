//! Application Context
//!
//! The page state plus the actions the view is allowed to emit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use modelo_core::{
    ClientConfig, HttpModeloClient, Modelo, ModeloField, ModeloId, ModeloState, StateHandle,
};

/// Page-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Collection snapshot, edit session and banner - read via `with`
    pub state: RwSignal<ModeloState>,
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            state: RwSignal::new(ModeloState::new()),
            config: StoredValue::new(config),
        }
    }

    fn client(&self) -> HttpModeloClient {
        HttpModeloClient::new(self.config.get_value())
    }

    /// Reload the list from the backend
    pub fn refresh(&self) {
        let ctx = *self;
        spawn_local(async move {
            modelo_core::refresh(&ctx.client(), &ctx).await;
        });
    }

    pub fn open_create(&self) {
        self.state.update(|s| s.open_create());
    }

    pub fn open_edit(&self, record: Modelo) {
        self.state.update(|s| s.open_edit(&record));
    }

    pub fn update_field(&self, field: ModeloField, value: String) {
        self.state.update(|s| {
            s.update_field(field, value);
        });
    }

    pub fn cancel(&self) {
        self.state.update(|s| s.cancel());
    }

    /// Create or update from the open draft
    pub fn save(&self) {
        let ctx = *self;
        spawn_local(async move {
            modelo_core::save(&ctx.client(), &ctx).await;
        });
    }

    pub fn delete(&self, id: ModeloId) {
        let ctx = *self;
        spawn_local(async move {
            modelo_core::delete(&ctx.client(), &ctx, id).await;
        });
    }
}

impl StateHandle for AppContext {
    fn update_state<R>(&self, f: impl FnOnce(&mut ModeloState) -> R) -> Option<R> {
        self.state.try_update(f)
    }
}
