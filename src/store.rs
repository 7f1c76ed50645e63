//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutation
//! goes through the helpers below, which delegate the reconciliation rules
//! to `crate::sync`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TodoItem;
use crate::sync::{self, TodoEntry};

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Full to-do collection, pending entries included
    pub todos: Vec<TodoEntry>,
    /// Whether the initial list fetch is still in flight
    pub loading: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole collection with server truth
pub fn store_replace_all(store: &AppStore, todos: Vec<TodoItem>) {
    *store.todos().write() = sync::from_server(todos);
}

/// Insert a pending entry at the head of the list
pub fn store_begin_add(store: &AppStore, name: &str, key: u64) {
    sync::begin_add(&mut store.todos().write(), name, key);
}

/// Swap a pending entry for its server-confirmed record
pub fn store_confirm_add(store: &AppStore, key: u64, confirmed: TodoItem) {
    sync::confirm_add(&mut store.todos().write(), key, confirmed);
}

/// Roll back a failed add, returning the submitted name
pub fn store_abort_add(store: &AppStore, key: u64) -> Option<String> {
    sync::abort_add(&mut store.todos().write(), key)
}

/// Set the completion flag of one entry (optimistic flip or rollback)
pub fn store_set_completed(store: &AppStore, id: u64, completed: bool) {
    sync::set_completed(&mut store.todos().write(), id, completed);
}
