//! Local Todo List
//!
//! In-memory list backing the local view. Entries carry synthetic ids so
//! deleting an earlier entry never shifts the identity of later ones.

use crate::models::LocalTodo;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalTodos {
    items: Vec<LocalTodo>,
    next_id: u32,
}

impl LocalTodos {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text.trim()`; blank input is ignored.
    ///
    /// Returns the new entry's id, or `None` when nothing was added.
    pub fn add(&mut self, text: &str) -> Option<u32> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(LocalTodo { id, text: text.to_string() });
        Some(id)
    }

    pub fn remove(&mut self, id: u32) -> Option<LocalTodo> {
        let index = self.items.iter().position(|todo| todo.id == id)?;
        self.remove_at(index)
    }

    pub fn remove_at(&mut self, index: usize) -> Option<LocalTodo> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn items(&self) -> &[LocalTodo] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
