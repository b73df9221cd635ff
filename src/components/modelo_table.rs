//! Modelo Table Component
//!
//! Read-only rendering of the collection snapshot.

use leptos::prelude::*;
use modelo_core::Modelo;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;

#[component]
pub fn ModeloTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <table class="table table-striped table-bordered table-hover">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Nome"</th>
                    <th>"Ano"</th>
                    <th>"Quantidade"</th>
                    <th>"Categoria ID"</th>
                    <th>"Marca ID"</th>
                    <th>"Ações"</th>
                </tr>
            </thead>
            <tbody>
                // Keyed by position and content: the server may repeat ids,
                // and an edited row must re-render.
                <For
                    each=move || ctx.state.with(|s| s.records().iter().cloned().enumerate().collect::<Vec<_>>())
                    key=|(index, modelo)| (*index, modelo.clone())
                    children=move |(_, modelo)| view! { <ModeloRow modelo=modelo /> }
                />
            </tbody>
        </table>
    }
}

#[component]
fn ModeloRow(modelo: Modelo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = modelo.id.clone();
    let pending = {
        let id = id.clone();
        Signal::derive(move || ctx.state.with(|s| s.is_deleting(&id)))
    };
    let record = modelo.clone();

    view! {
        <tr>
            <td>{modelo.id.to_string()}</td>
            <td>{modelo.name}</td>
            <td>{modelo.model_year}</td>
            <td>{modelo.quantity}</td>
            <td>{modelo.category_id}</td>
            <td>{modelo.brand_id}</td>
            <td>
                <button
                    class="btn btn-warning btn-sm"
                    on:click=move |_| ctx.open_edit(record.clone())
                >
                    "Editar"
                </button>
                " "
                <DeleteConfirmButton
                    pending=pending
                    on_confirm=move |_| ctx.delete(id.clone())
                />
            </td>
        </tr>
    }
}
