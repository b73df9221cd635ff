//! Modelo Manager App
//!
//! Single page: error banner, record table and the add/edit dialog.

use leptos::prelude::*;
use modelo_core::ClientConfig;
use tracing::info;

use crate::components::{ErrorBanner, ModeloModal, ModeloTable};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_build_env();
    info!(base_url = %config.base_url, "starting modelo manager");

    let ctx = AppContext::new(config);
    provide_context(ctx);

    // Load on mount
    Effect::new(move |_| {
        ctx.refresh();
    });

    view! {
        <div class="container mt-4">
            <h2>"Gerenciamento de Modelos"</h2>

            <ErrorBanner />

            <button class="btn btn-primary mb-3" on:click=move |_| ctx.open_create()>
                "Adicionar Modelo"
            </button>

            <ModeloTable />

            <p class="item-count">
                {move || {
                    let (count, loading) = ctx.state.with(|s| (s.records().len(), s.is_loading()));
                    if loading {
                        format!("{} modelos (carregando...)", count)
                    } else {
                        format!("{} modelos", count)
                    }
                }}
            </p>

            <ModeloModal />
        </div>
    }
}
