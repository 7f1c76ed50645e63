//! To-Do List Frontend App
//!
//! Root component: wires up the store and context, switches between the
//! list view and the detail editor.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{ApiClient, API_BASE_URL, TENANT_ID};
use crate::components::{DetailEditor, TodoListView};
use crate::context::{AppContext, Route};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let (route, set_route) = signal(Route::List);

    // Explicit client instance; everything downstream gets it from context
    let api = ApiClient::new(API_BASE_URL, TENANT_ID);
    provide_context(AppContext::new(api, (route, set_route)));
    provide_context(Store::new(AppState::new()));

    view! {
        <div class="app-layout">
            {move || match route.get() {
                Route::List => view! { <TodoListView /> }.into_any(),
                Route::Detail(id) => view! { <DetailEditor id=id /> }.into_any(),
            }}
        </div>
    }
}
