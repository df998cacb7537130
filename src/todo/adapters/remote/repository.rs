//! Remote repository backed by the todo HTTP API.

use super::{
    dto::{TodoChangesDto, TodoDto},
    envelope::{decode, decode_required},
};
use crate::todo::{
    domain::{Todo, TodoChanges, TodoId, TodoSpecification},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::IgnoredAny;

/// Todo repository that forwards every call to a remote todo service.
#[derive(Debug, Clone)]
pub struct RemoteTodoRepository {
    client: Client,
    base_url: String,
}

impl RemoteTodoRepository {
    /// Creates a repository for the service rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a repository using a preconfigured HTTP client.
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { client, base_url }
    }

    /// Returns the URL of an endpoint below the service root.
    fn url(&self, path: &str) -> String {
        format!("{}/todos{path}", self.base_url)
    }

    /// Sends a request and returns its status and body text.
    async fn exchange(&self, request: RequestBuilder) -> TodoRepositoryResult<(StatusCode, String)> {
        let response = request
            .send()
            .await
            .map_err(|err| TodoRepositoryError::Transport(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| TodoRepositoryError::Transport(err.to_string()))?;
        Ok((status, body))
    }

    async fn list(&self, path: &str) -> TodoRepositoryResult<Vec<Todo>> {
        let (status, body) = self.exchange(self.client.get(self.url(path))).await?;
        decode_required::<Vec<TodoDto>>(status, &body)?
            .into_iter()
            .map(TodoDto::into_todo)
            .collect()
    }
}

#[async_trait]
impl TodoRepository for RemoteTodoRepository {
    async fn get_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        self.list("").await
    }

    async fn get_active(&self) -> TodoRepositoryResult<Vec<Todo>> {
        self.list("/active").await
    }

    async fn get_completed(&self) -> TodoRepositoryResult<Vec<Todo>> {
        self.list("/completed").await
    }

    async fn get_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let (status, body) = self
            .exchange(self.client.get(self.url(&format!("/{id}"))))
            .await?;
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode::<TodoDto>(status, &body)?
            .map(TodoDto::into_todo)
            .transpose()
    }

    async fn create(&self, todo: &Todo) -> TodoRepositoryResult<TodoId> {
        let payload = TodoDto::from(todo);
        let (status, body) = self
            .exchange(self.client.post(self.url("")).json(&payload))
            .await?;
        let created = decode_required::<TodoDto>(status, &body)?.into_todo()?;
        created.id().ok_or_else(|| {
            TodoRepositoryError::Corrupt("created todo without identifier".to_owned())
        })
    }

    async fn update(&self, id: TodoId, changes: &TodoChanges) -> TodoRepositoryResult<Todo> {
        let payload = TodoChangesDto::from(changes);
        let (status, body) = self
            .exchange(self.client.put(self.url(&format!("/{id}"))).json(&payload))
            .await?;
        if status == StatusCode::NOT_FOUND {
            return Err(TodoRepositoryError::NotFound(id));
        }
        decode_required::<TodoDto>(status, &body)?.into_todo()
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        let (status, body) = self
            .exchange(self.client.delete(self.url(&format!("/{id}"))))
            .await?;
        if status == StatusCode::NOT_FOUND {
            return Err(TodoRepositoryError::NotFound(id));
        }
        decode::<IgnoredAny>(status, &body)?;
        Ok(())
    }

    async fn find_by_specification(
        &self,
        specification: &TodoSpecification,
    ) -> TodoRepositoryResult<Vec<Todo>> {
        let all = self.get_all().await?;
        Ok(all
            .into_iter()
            .filter(|todo| specification.is_satisfied_by(todo))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::RemoteTodoRepository;
    use crate::todo::{
        domain::TodoId,
        ports::{TodoRepository, TodoRepositoryError},
    };

    #[test]
    fn endpoint_urls_ignore_trailing_slashes() {
        let repository = RemoteTodoRepository::new("http://localhost:3000/api/");
        assert_eq!(repository.url(""), "http://localhost:3000/api/todos");
        assert_eq!(
            repository.url("/active"),
            "http://localhost:3000/api/todos/active"
        );
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        // TEST-NET-1 is reserved and never routable; port 9 keeps it quick.
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(200))
            .build()
            .expect("client builds");
        let repository = RemoteTodoRepository::with_client(client, "http://192.0.2.1:9");

        let result = repository.get_by_id(TodoId::new()).await;

        assert!(matches!(result, Err(TodoRepositoryError::Transport(_))));
    }
}
