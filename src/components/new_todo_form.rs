//! New Todo Form Component
//!
//! Input for creating new to-dos with optimistic insertion: the entry shows
//! up at the head of the list before the server confirms it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::alert;
use crate::context::use_app_context;
use crate::models::CreateTodoRequest;
use crate::store::{
    store_abort_add, store_begin_add, store_confirm_add, use_app_store,
};
use crate::sync::next_pending_key;

/// Form for creating new to-dos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());
    let (adding, set_adding) = signal(false);

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_text.get().trim().to_string();
        if name.is_empty() {
            return;
        }

        // Clear the input right away; restored below if the create fails
        set_new_text.set(String::new());

        let key = next_pending_key(js_sys::Date::now() as u64);
        store_begin_add(&store, &name, key);

        let api = ctx.api.clone();
        spawn_local(async move {
            set_adding.set(true);
            match api.create_todo(&CreateTodoRequest::with_name(&name)).await {
                Ok(created) => store_confirm_add(&store, key, created),
                Err(_) => {
                    if let Some(submitted) = store_abort_add(&store, key) {
                        set_new_text.set(submitted);
                    }
                    alert("Failed to add the to-do. Please try again.");
                }
            }
            set_adding.set(false);
        });
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder="What needs doing?"
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_text.set(input.value());
                }
            />
            <button type="submit" prop:disabled=move || adding.get()>"Add"</button>
        </form>
    }
}
