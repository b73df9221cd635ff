//! Modelo Dialog Component
//!
//! Add/edit form driven by the edit session. Hidden while the session is closed.

use leptos::prelude::*;
use modelo_core::ModeloField;
use tracing::warn;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

/// A number input reports `""` while it holds partial text such as `-` or `1.`.
/// Writing that back would re-render the input and wipe what the user typed.
fn is_committed_value(value: &str, bad_input: bool) -> bool {
    !(value.is_empty() && bad_input)
}

#[component]
pub fn ModeloModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let visible = move || ctx.state.with(|s| s.is_modal_visible());
    let title = move || ctx.state.with(|s| s.session().title());
    let saving = move || ctx.state.with(|s| s.is_saving());

    // One handler for every input, routed by the input's name
    let on_input = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let value = input.value();
        if !is_committed_value(&value, input.validity().bad_input()) {
            return;
        }
        match ModeloField::from_name(&input.name()) {
            Some(field) => ctx.update_field(field, value),
            None => warn!(name = %input.name(), "input is not a modelo field"),
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.save();
    };

    view! {
        <Show when=visible>
            <div class="modal-backdrop fade show"></div>
            <div class="modal fade show d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{title}</h5>
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| ctx.cancel()
                            ></button>
                        </div>
                        <form on:submit=on_submit>
                            <div class="modal-body">
                                {ModeloField::ALL.into_iter().map(|field| {
                                    let value = move || ctx.state.with(|s| {
                                        s.session().draft().map(|d| d.get(field).to_string()).unwrap_or_default()
                                    });
                                    view! {
                                        <div class="mb-3">
                                            <label class="form-label" for=field.name()>{field.label()}</label>
                                            <input
                                                class="form-control"
                                                id=field.name()
                                                name=field.name()
                                                type=field.input_type()
                                                placeholder=field.placeholder()
                                                prop:value=value
                                                on:input=on_input
                                            />
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                            <div class="modal-footer">
                                <button type="button" class="btn btn-secondary" on:click=move |_| ctx.cancel()>
                                    "Cancelar"
                                </button>
                                <button type="submit" class="btn btn-primary" disabled=saving>
                                    {move || if saving() { "Salvando..." } else { "Salvar" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </Show>
    }
}
