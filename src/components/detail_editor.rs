//! Detail Editor Component
//!
//! Loads one record into a local draft, edited independently of the record
//! until an explicit save. The source record is never mutated before the
//! server confirms, so a failed save needs no rollback.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::{TodoItem, UpdateTodoRequest};

#[derive(Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Loading,
    Loaded,
    NotFound,
}

/// Detail/edit view for a single record
#[component]
pub fn DetailEditor(id: u64) -> impl IntoView {
    let ctx = use_app_context();

    let (load_state, set_load_state) = signal(LoadState::Loading);
    let (loaded, set_loaded) = signal::<Option<TodoItem>>(None);

    // Draft, independent of the loaded record until save
    let (name, set_name) = signal(String::new());
    let (memo_text, set_memo_text) = signal(String::new());
    let (is_completed, set_is_completed) = signal(false);
    let (image_url, set_image_url) = signal(String::new());

    // Staged image file and its local preview; nothing is uploaded until save
    let (image_file, set_image_file) = signal::<Option<web_sys::File>>(None);
    let (image_preview, set_image_preview) = signal(String::new());

    let (saving, set_saving) = signal(false);
    let (deleting, set_deleting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Visual affordance only: true once the record has ever been edited
    let (has_been_modified, set_has_been_modified) = signal(false);

    // Load the record once
    let ctx_load = ctx.clone();
    Effect::new(move |_| {
        let api = ctx_load.api.clone();
        spawn_local(async move {
            match api.get_todo(id).await {
                Ok(todo) => {
                    set_name.set(todo.name.clone());
                    set_memo_text.set(todo.memo.clone().unwrap_or_default());
                    set_is_completed.set(todo.is_completed);
                    let url = todo.image_url.clone().unwrap_or_default();
                    set_image_url.set(url.clone());
                    set_image_preview.set(url);
                    let already_modified = todo
                        .memo
                        .as_deref()
                        .is_some_and(|m| !m.trim().is_empty())
                        || todo.image_url.is_some()
                        || todo.is_completed;
                    set_has_been_modified.set(already_modified);
                    set_loaded.set(Some(todo));
                    set_load_state.set(LoadState::Loaded);
                }
                // 404 and any other load failure end in the same terminal
                // state; diagnostics are already on the console
                Err(_) => set_load_state.set(LoadState::NotFound),
            }
        });
    });

    // Draft differs from the loaded record; styles the save button, never
    // blocks saving
    let has_changes = Memo::new(move |_| {
        loaded
            .get()
            .map(|todo| {
                name.get() != todo.name
                    || memo_text.get() != todo.memo.clone().unwrap_or_default()
                    || is_completed.get() != todo.is_completed
                    || image_url.get() != todo.image_url.clone().unwrap_or_default()
            })
            .unwrap_or(false)
    });

    // Stage a local image file and show a data-URL preview
    let select_image = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        set_image_file.set(Some(file.clone()));

        if let Ok(reader) = web_sys::FileReader::new() {
            let onload = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(
                move |ev: web_sys::ProgressEvent| {
                    let preview = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::FileReader>().ok())
                        .and_then(|r| r.result().ok())
                        .and_then(|v| v.as_string());
                    if let Some(data_url) = preview {
                        set_image_preview.set(data_url);
                    }
                },
            );
            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            onload.forget();
            let _ = reader.read_as_data_url(&file);
        }
    };

    let ctx_save = ctx.clone();
    let save = move |_: web_sys::MouseEvent| {
        if saving.get() {
            return;
        }
        set_saving.set(true);
        set_error.set(None);

        let ctx = ctx_save.clone();
        spawn_local(async move {
            // Upload the staged image first to resolve its URL
            let mut resolved_url = image_url.get_untracked();
            if let Some(file) = image_file.get_untracked() {
                match ctx.api.upload_image(&file).await {
                    Ok(url) => resolved_url = url,
                    Err(e) => {
                        set_error.set(Some(format!("Failed to save: {}", e)));
                        set_saving.set(false);
                        return;
                    }
                }
            }

            let req = UpdateTodoRequest {
                name: Some(name.get_untracked()),
                memo: Some(memo_text.get_untracked()),
                is_completed: Some(is_completed.get_untracked()),
                image_url: if resolved_url.is_empty() {
                    None
                } else {
                    Some(resolved_url)
                },
            };
            match ctx.api.update_todo(id, &req).await {
                Ok(_) => {
                    set_has_been_modified.set(true);
                    ctx.goto_list();
                }
                Err(e) => set_error.set(Some(format!("Failed to save: {}", e))),
            }
            set_saving.set(false);
        });
    };

    let ctx_delete = ctx.clone();
    let delete = Callback::new(move |_| {
        if deleting.get() {
            return;
        }
        set_deleting.set(true);
        set_error.set(None);

        let ctx = ctx_delete.clone();
        spawn_local(async move {
            match ctx.api.delete_todo(id).await {
                Ok(()) => ctx.goto_list(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to delete: {}", e)));
                    set_deleting.set(false);
                }
            }
        });
    });

    let ctx_back = ctx.clone();
    let ctx_missing = ctx.clone();

    view! {
        {move || match load_state.get() {
            LoadState::Loading => view! {
                <div class="loading">"Loading..."</div>
            }.into_any(),

            LoadState::NotFound => {
                let ctx = ctx_missing.clone();
                view! {
                    <div class="not-found">
                        <p>"This to-do could not be found."</p>
                        <button on:click=move |_| ctx.goto_list()>"Back to list"</button>
                    </div>
                }.into_any()
            }

            LoadState::Loaded => {
                let ctx = ctx_back.clone();
                let save = save.clone();
                view! {
                    <div class=move || {
                        if has_been_modified.get() { "detail-card modified" } else { "detail-card" }
                    }>
                        <div class="detail-header">
                            <input
                                type="checkbox"
                                prop:checked=move || is_completed.get()
                                on:change=move |_| set_is_completed.update(|c| *c = !*c)
                            />
                            <input
                                type="text"
                                class="detail-name"
                                prop:value=move || name.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_name.set(input.value());
                                }
                            />
                        </div>

                        <textarea
                            class="detail-memo"
                            placeholder="Add a note..."
                            prop:value=move || memo_text.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                set_memo_text.set(area.value());
                            }
                        />

                        <div class="detail-image">
                            <Show when=move || !image_preview.get().is_empty()>
                                <img src=move || image_preview.get() alt="attached image" />
                            </Show>
                            <input type="file" accept="image/*" on:change=select_image />
                        </div>

                        {move || error.get().map(|msg| view! {
                            <p class="error-text">{msg}</p>
                        })}

                        <div class="detail-actions">
                            <button
                                class=move || {
                                    if has_changes.get() { "save-btn active" } else { "save-btn" }
                                }
                                prop:disabled=move || saving.get()
                                on:click=save
                            >
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                            <DeleteConfirmButton
                                button_class="delete-btn"
                                on_confirm=delete
                                disabled=deleting
                            />
                            <button class="back-btn" on:click=move |_| ctx.goto_list()>
                                "Back"
                            </button>
                        </div>
                    </div>
                }.into_any()
            }
        }}
    }
}
