//! Delete Confirm Button Component
//!
//! Row-level delete with an inline confirm step.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows "Deletar" initially. When clicked, shows "Deletar?" with ✓/✗ buttons.
/// Stays disabled while `pending` is true.
///
/// # Arguments
/// * `pending` - A delete for this row is already in flight
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class="btn btn-danger btn-sm"
                disabled=move || pending.get()
                on:click=move |_| set_confirm_delete.set(true)
            >
                {move || if pending.get() { "Deletando..." } else { "Deletar" }}
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Deletar?"</span>
                <button
                    class="btn btn-danger btn-sm"
                    on:click=move |_| {
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="btn btn-secondary btn-sm"
                    on:click=move |_| set_confirm_delete.set(false)
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
