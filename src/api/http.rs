//! HTTP List Service
//!
//! `TodoApi` over reqwest (the fetch API when compiled to wasm32).

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::TodoApi;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{NewTodo, TodoId, UserRecord};

#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    config: ApiConfig,
}

impl HttpTodoApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { client: Client::new(), config }
    }
}

/// Map a non-2xx response to an error
fn check(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::from_status(status.as_u16()))
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn get_user(&self) -> ApiResult<UserRecord> {
        let response = self.client.get(self.config.user_url()).send().await?;
        let response = check(response)?;
        response
            .json::<UserRecord>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_user(&self) -> ApiResult<()> {
        let response = self
            .client
            .post(self.config.user_url())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;
        check(response)?;
        Ok(())
    }

    async fn create_todo(&self, todo: &NewTodo<'_>) -> ApiResult<()> {
        let response = self
            .client
            .post(self.config.user_todos_url())
            .json(todo)
            .send()
            .await?;
        check(response)?;
        Ok(())
    }

    async fn delete_todo(&self, id: TodoId) -> ApiResult<()> {
        let response = self.client.delete(self.config.todo_url(id)).send().await?;
        check(response)?;
        Ok(())
    }
}
