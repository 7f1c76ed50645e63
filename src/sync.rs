//! List Synchronization
//!
//! Pure reconciliation logic for optimistic updates: entries are tagged
//! `Pending` until the server confirms them, and every mutation has a
//! compensating action the caller applies on request failure.

use crate::models::TodoItem;
use std::cell::Cell;

/// Sync state of a single entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// Created locally, awaiting server-assigned identity
    Pending,
    /// Matches a server record
    Confirmed,
}

/// A to-do record plus its sync state
#[derive(Debug, Clone, PartialEq)]
pub struct TodoEntry {
    pub state: EntryState,
    pub todo: TodoItem,
}

impl TodoEntry {
    pub fn confirmed(todo: TodoItem) -> Self {
        Self {
            state: EntryState::Confirmed,
            todo,
        }
    }
}

thread_local! {
    static LAST_PENDING_KEY: Cell<u64> = const { Cell::new(0) };
}

/// Next placeholder id for a pending entry.
///
/// Strictly increasing across calls, even when the clock has not advanced
/// since the previous call, so a placeholder id is never reused.
pub fn next_pending_key(now_ms: u64) -> u64 {
    LAST_PENDING_KEY.with(|last| {
        let key = now_ms.max(last.get() + 1);
        last.set(key);
        key
    })
}

/// Replace the whole collection with server truth
pub fn from_server(todos: Vec<TodoItem>) -> Vec<TodoEntry> {
    todos.into_iter().map(TodoEntry::confirmed).collect()
}

/// Insert a pending entry at the head of the list (most-recent-first)
pub fn begin_add(entries: &mut Vec<TodoEntry>, name: &str, key: u64) {
    let todo = TodoItem {
        id: key,
        tenant_id: String::new(),
        name: name.to_string(),
        memo: None,
        image_url: None,
        is_completed: false,
    };
    entries.insert(
        0,
        TodoEntry {
            state: EntryState::Pending,
            todo,
        },
    );
}

/// Replace the pending entry matching `key` with the confirmed server record
pub fn confirm_add(entries: &mut [TodoEntry], key: u64, confirmed: TodoItem) {
    if let Some(entry) = entries
        .iter_mut()
        .find(|e| e.state == EntryState::Pending && e.todo.id == key)
    {
        *entry = TodoEntry::confirmed(confirmed);
    }
}

/// Remove the pending entry matching `key`, returning its name so the
/// caller can restore the input field
pub fn abort_add(entries: &mut Vec<TodoEntry>, key: u64) -> Option<String> {
    let pos = entries
        .iter()
        .position(|e| e.state == EntryState::Pending && e.todo.id == key)?;
    Some(entries.remove(pos).todo.name)
}

/// Set the completion flag of the entry matching `id`.
///
/// Returns whether a matching entry existed. Entry order is untouched.
pub fn set_completed(entries: &mut [TodoEntry], id: u64, completed: bool) -> bool {
    match entries.iter_mut().find(|e| e.todo.id == id) {
        Some(entry) => {
            entry.todo.is_completed = completed;
            true
        }
        None => false,
    }
}

/// Incomplete subset, relative order preserved
pub fn active(entries: &[TodoEntry]) -> Vec<TodoItem> {
    entries
        .iter()
        .filter(|e| !e.todo.is_completed)
        .map(|e| e.todo.clone())
        .collect()
}

/// Completed subset, relative order preserved
pub fn completed(entries: &[TodoEntry]) -> Vec<TodoItem> {
    entries
        .iter()
        .filter(|e| e.todo.is_completed)
        .map(|e| e.todo.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_todo(id: u64, name: &str, is_completed: bool) -> TodoItem {
        TodoItem {
            id,
            tenant_id: "t".to_string(),
            name: name.to_string(),
            memo: None,
            image_url: None,
            is_completed,
        }
    }

    #[test]
    fn test_begin_add_inserts_pending_at_head() {
        let mut entries = from_server(vec![server_todo(1, "A", false)]);

        begin_add(&mut entries, "Buy milk", 1000);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].state, EntryState::Pending);
        assert_eq!(entries[0].todo.id, 1000);
        assert_eq!(entries[0].todo.name, "Buy milk");
        assert!(!entries[0].todo.is_completed);
        // New record is the head of the active partition
        assert_eq!(active(&entries)[0].id, 1000);
    }

    #[test]
    fn test_confirm_add_replaces_placeholder_in_place() {
        let mut entries = from_server(vec![server_todo(1, "A", false)]);
        begin_add(&mut entries, "Buy milk", 1000);

        confirm_add(&mut entries, 1000, server_todo(42, "Buy milk", false));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].state, EntryState::Confirmed);
        assert_eq!(entries[0].todo.id, 42);
        assert_eq!(active(&entries)[0].id, 42);
    }

    #[test]
    fn test_abort_add_removes_entry_and_returns_name() {
        let mut entries = from_server(vec![server_todo(1, "A", false)]);
        begin_add(&mut entries, "Buy milk", 1000);

        let name = abort_add(&mut entries, 1000);

        assert_eq!(name.as_deref(), Some("Buy milk"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].todo.id, 1);
    }

    #[test]
    fn test_abort_add_ignores_confirmed_entries() {
        let mut entries = from_server(vec![server_todo(1, "A", false)]);

        assert_eq!(abort_add(&mut entries, 1), None);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_toggle_flip_and_revert() {
        let mut entries = from_server(vec![server_todo(1, "A", false)]);

        // Optimistic flip
        assert!(set_completed(&mut entries, 1, true));
        assert!(entries[0].todo.is_completed);

        // Simulated request failure: revert to the pre-toggle value
        assert!(set_completed(&mut entries, 1, false));
        assert!(!entries[0].todo.is_completed);
    }

    #[test]
    fn test_set_completed_unknown_id() {
        let mut entries = from_server(vec![server_todo(1, "A", false)]);
        assert!(!set_completed(&mut entries, 99, true));
    }

    #[test]
    fn test_partition_invariant() {
        let entries = from_server(vec![
            server_todo(1, "A", false),
            server_todo(2, "B", true),
            server_todo(3, "C", false),
            server_todo(4, "D", true),
        ]);

        let act = active(&entries);
        let done = completed(&entries);

        // Union equals the full collection, intersection is empty
        assert_eq!(act.len() + done.len(), entries.len());
        assert!(act.iter().all(|t| !done.iter().any(|d| d.id == t.id)));
        // Relative order preserved within each partition
        assert_eq!(act.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(done.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_toggle_does_not_reorder() {
        let mut entries = from_server(vec![
            server_todo(1, "A", false),
            server_todo(2, "B", false),
            server_todo(3, "C", false),
        ]);

        set_completed(&mut entries, 2, true);
        set_completed(&mut entries, 2, false);

        let ids: Vec<u64> = entries.iter().map(|e| e.todo.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_pending_keys_never_reused() {
        let a = next_pending_key(5000);
        let b = next_pending_key(5000); // clock did not advance
        let c = next_pending_key(4000); // clock went backwards

        assert!(b > a);
        assert!(c > b);
    }
}
