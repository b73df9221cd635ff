//! Error Banner Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Shows the notification slot verbatim while it holds a message
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let message = move || ctx.state.with(|s| s.notification().message());

    view! {
        {move || message().map(|text| view! {
            <div class="alert alert-danger" role="alert">{text}</div>
        })}
    }
}
