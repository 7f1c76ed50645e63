//! Todo List View
//!
//! Main view: fetches the collection once, then renders the active and
//! completed partitions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::PAGE_SIZE;
use crate::components::{EmptyState, NewTodoForm, TodoRow};
use crate::context::use_app_context;
use crate::store::{store_replace_all, use_app_store, AppStateStoreFields};
use crate::sync;

/// List view with active and completed sections
#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Load the full collection on mount. One bounded page only; longer
    // lists are out of scope for this client.
    Effect::new(move |_| {
        let api = ctx.api.clone();
        store.loading().set(true);
        spawn_local(async move {
            if let Ok(todos) = api.list_todos(1, PAGE_SIZE).await {
                store_replace_all(&store, todos);
            }
            store.loading().set(false);
        });
    });

    let active_todos = Memo::new(move |_| sync::active(&store.todos().get()));
    let completed_todos = Memo::new(move |_| sync::completed(&store.todos().get()));

    view! {
        <main class="todo-list-view">
            <NewTodoForm />

            <Show when=move || store.loading().get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <Show when=move || !store.loading().get()>
                <section class="todo-section">
                    <h2>"To do"</h2>
                    <Show when=move || active_todos.get().is_empty()>
                        <EmptyState message="Nothing to do yet. Add one above!" />
                    </Show>
                    <For
                        each=move || active_todos.get()
                        key=|todo| (todo.id, todo.name.clone(), todo.is_completed)
                        children=move |todo| view! { <TodoRow todo=todo /> }
                    />
                </section>

                <section class="todo-section">
                    <h2>"Done"</h2>
                    <Show when=move || completed_todos.get().is_empty()>
                        <EmptyState message="Nothing completed yet." />
                    </Show>
                    <For
                        each=move || completed_todos.get()
                        key=|todo| (todo.id, todo.name.clone(), todo.is_completed)
                        children=move |todo| view! { <TodoRow todo=todo /> }
                    />
                </section>
            </Show>
        </main>
    }
}
