//! Empty State Component
//!
//! Placeholder shown when a list section has no entries.

use leptos::prelude::*;

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>{message}</p>
        </div>
    }
}
