//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod detail_editor;
mod empty_state;
mod new_todo_form;
mod todo_list;
mod todo_row;

pub use delete_confirm_button::DeleteConfirmButton;
pub use detail_editor::DetailEditor;
pub use empty_state::EmptyState;
pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoListView;
pub use todo_row::TodoRow;

/// Blocking alert used to report failed list mutations
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
