//! Remote List Store
//!
//! Uses Leptos reactive_stores so the loading flag, error banner and rows
//! re-render independently.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::Failure;
use crate::models::{Todo, TodoId};
use crate::remote::{RemoteState, RemoteStateStoreFields, StateSink};

pub type RemoteStore = Store<RemoteState>;

pub fn new_remote_store() -> RemoteStore {
    Store::new(RemoteState::default())
}

// ========================
// Store Readers
// ========================

pub fn is_loading(store: RemoteStore) -> bool {
    store.loading().get()
}

pub fn current_error(store: RemoteStore) -> Option<Failure> {
    store.error().get()
}

pub fn current_todos(store: RemoteStore) -> Vec<Todo> {
    store.todos().get()
}

pub fn todo_count(store: RemoteStore) -> usize {
    store.todos().with(|todos| todos.len())
}

/// `StateSink` writing into the store and the input signal
#[derive(Clone, Copy)]
pub struct StoreSink {
    store: RemoteStore,
    input: RwSignal<String>,
}

impl StoreSink {
    pub fn new(store: RemoteStore, input: RwSignal<String>) -> Self {
        Self { store, input }
    }
}

impl StateSink for StoreSink {
    fn set_loading(&self, loading: bool) {
        *self.store.loading().write() = loading;
    }

    fn set_error(&self, error: Option<Failure>) {
        *self.store.error().write() = error;
    }

    fn set_todos(&self, todos: Vec<Todo>) {
        *self.store.todos().write() = todos;
    }

    fn clear_input(&self) {
        self.input.set(String::new());
    }

    fn todo_ids(&self) -> Vec<TodoId> {
        self.store
            .todos()
            .with_untracked(|todos| todos.iter().map(|todo| todo.id).collect())
    }
}
