//! List Service Bindings
//!
//! `TodoApi` is the seam between the remote view and the HTTP service,
//! so the controller can run against a scripted service in tests.

mod http;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{NewTodo, TodoId, UserRecord};

pub use http::HttpTodoApi;

/// Operations the remote list needs from the service.
///
/// Futures are not `Send`: in the browser they run on the single event loop.
#[async_trait(?Send)]
pub trait TodoApi {
    /// `GET /users/{user}`
    async fn get_user(&self) -> ApiResult<UserRecord>;

    /// `POST /users/{user}`
    async fn create_user(&self) -> ApiResult<()>;

    /// `POST /todos/{user}`
    async fn create_todo(&self, todo: &NewTodo<'_>) -> ApiResult<()>;

    /// `DELETE /todos/{id}`
    async fn delete_todo(&self, id: TodoId) -> ApiResult<()>;
}
