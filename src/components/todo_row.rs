//! Todo Row Component
//!
//! Single row in the list: checkbox toggles completion optimistically,
//! clicking the row opens the detail editor.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::alert;
use crate::context::use_app_context;
use crate::models::{TodoItem, UpdateTodoRequest};
use crate::store::{store_set_completed, use_app_store};

/// A single to-do row
#[component]
pub fn TodoRow(todo: TodoItem) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.is_completed;
    let name = todo.name.clone();

    let toggle_complete = move |ev: web_sys::Event| {
        ev.stop_propagation();
        let new_flag = !completed;

        // Flip locally first; the visible flag tracks user intent
        store_set_completed(&store, id, new_flag);

        let api = ctx.api.clone();
        spawn_local(async move {
            let req = UpdateTodoRequest {
                is_completed: Some(new_flag),
                ..Default::default()
            };
            if api.update_todo(id, &req).await.is_err() {
                // Revert to the pre-toggle value
                store_set_completed(&store, id, completed);
                alert("Failed to update the to-do. Please try again.");
            }
        });
    };

    let ctx_nav = use_app_context();
    view! {
        <div
            class=move || if completed { "todo-row completed" } else { "todo-row" }
            on:click=move |_| ctx_nav.goto_detail(id)
        >
            <input
                type="checkbox"
                checked=completed
                on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                on:change=toggle_complete
            />
            <span class="todo-name">{name}</span>
        </div>
    }
}
