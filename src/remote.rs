//! Remote Todo List
//!
//! Load/add/delete/clear-all against the list service. The client never
//! patches its list locally: every successful mutation is followed by one
//! full reload, so what is shown is always a server snapshot.

use futures::future::join_all;
use reactive_stores::Store;

use crate::api::TodoApi;
use crate::error::{ApiError, Failure};
use crate::models::{NewTodo, Todo, TodoId};

/// View state of the remote list
#[derive(Debug, Clone, PartialEq, Store)]
pub struct RemoteState {
    pub loading: bool,
    pub error: Option<Failure>,
    pub todos: Vec<Todo>,
}

impl Default for RemoteState {
    fn default() -> Self {
        Self { loading: true, error: None, todos: Vec::new() }
    }
}

/// Where the controller writes state changes
pub trait StateSink {
    fn set_loading(&self, loading: bool);
    fn set_error(&self, error: Option<Failure>);
    fn set_todos(&self, todos: Vec<Todo>);
    /// Clear the text input after a successful add
    fn clear_input(&self);
    /// Ids of the todos currently shown
    fn todo_ids(&self) -> Vec<TodoId>;
}

#[derive(Debug, Clone)]
pub struct RemoteTodos<A> {
    api: A,
}

impl<A: TodoApi> RemoteTodos<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch the list, provisioning the user once if the service does not know it
    pub async fn load<S: StateSink>(&self, sink: &S) {
        sink.set_error(None);
        let result = match self.api.get_user().await {
            Err(ApiError::NotFound) => {
                log::info!("user not found, provisioning");
                self.provision(sink).await;
                // Retry once; a second not-found is a plain load failure
                sink.set_error(None);
                self.api.get_user().await
            }
            other => other,
        };

        match result {
            Ok(user) => {
                let todos = user.todos().unwrap_or_else(|| {
                    log::warn!("user record has no usable todos list, showing none");
                    Vec::new()
                });
                log::debug!("loaded {} todos", todos.len());
                sink.set_todos(todos);
            }
            Err(e) => {
                log::error!("loading todos failed: {}", e);
                sink.set_todos(Vec::new());
                sink.set_error(Some(Failure::LoadTodos));
            }
        }
        sink.set_loading(false);
    }

    async fn provision<S: StateSink>(&self, sink: &S) {
        match self.api.create_user().await {
            Ok(()) => log::info!("user created"),
            Err(e) => {
                log::error!("creating user failed: {}", e);
                sink.set_error(Some(Failure::CreateUser));
            }
        }
    }

    /// Create a todo from the input text, then reload.
    ///
    /// Blank input sends nothing. Returns whether the todo was created.
    pub async fn add<S: StateSink>(&self, sink: &S, input: &str) -> bool {
        let label = input.trim();
        if label.is_empty() {
            return false;
        }

        sink.set_error(None);
        if let Err(e) = self.api.create_todo(&NewTodo::pending(label)).await {
            log::error!("adding todo failed: {}", e);
            sink.set_error(Some(Failure::AddTodo));
            return false;
        }

        sink.clear_input();
        self.load(sink).await;
        true
    }

    /// Delete one todo by id, then reload
    pub async fn delete<S: StateSink>(&self, sink: &S, id: TodoId) -> bool {
        sink.set_error(None);
        if let Err(e) = self.api.delete_todo(id).await {
            log::error!("deleting todo {} failed: {}", id, e);
            sink.set_error(Some(Failure::DeleteTodo));
            return false;
        }

        self.load(sink).await;
        true
    }

    /// Delete every shown todo concurrently, then reload.
    ///
    /// A delete answered with a non-2xx status is tolerated; the reload shows
    /// whatever is left. A delete that gets no response at all aborts the
    /// reload and reports the failure.
    pub async fn clear_all<S: StateSink>(&self, sink: &S) -> bool {
        sink.set_error(None);
        let ids = sink.todo_ids();
        log::debug!("clearing {} todos", ids.len());

        let results = join_all(ids.iter().map(|&id| self.api.delete_todo(id))).await;

        let mut aborted = false;
        for (id, result) in ids.iter().zip(results) {
            match result {
                Ok(()) => {}
                Err(e) if e.is_status() => log::warn!("delete of todo {} answered {}", id, e),
                Err(e) => {
                    log::error!("clearing todo {} failed: {}", id, e);
                    aborted = true;
                }
            }
        }

        if aborted {
            sink.set_error(Some(Failure::ClearAll));
            return false;
        }

        self.load(sink).await;
        true
    }
}
