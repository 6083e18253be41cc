//! HTTP client for the user service.

use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

use crate::api::types::{ApiError, ApiResult, Operation, OperationId};
use crate::api::UsersApi;
use crate::config::ApiConfig;
use crate::model::{NewUser, OperationStatus, User, UserId};

/// `UsersApi` over reqwest.
#[derive(Debug, Clone)]
pub struct HttpUsersApi {
    client: Client,
    base_url: Url,
}

impl HttpUsersApi {
    /// Create a client from connection settings.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(config.base_url.clone()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `<base>/<segments...>`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn operation_id(operation: Operation, resp: Response) -> ApiResult<OperationId> {
        let text = ensure_success(operation, resp).await?.text().await?;
        let id = text.trim();
        if id.is_empty() {
            return Err(ApiError::MissingOperationId(operation));
        }
        Ok(OperationId(id.to_string()))
    }
}

/// Turn a non-2xx response into `ApiError::RequestFailed`, keeping the body
/// as the backend message.
async fn ensure_success(operation: Operation, resp: Response) -> ApiResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = body.trim();
    tracing::debug!(%operation, status = status.as_u16(), body = %message, "Request failed");

    Err(ApiError::RequestFailed {
        operation,
        status: status.as_u16(),
        message: (!message.is_empty()).then(|| message.to_string()),
    })
}

impl UsersApi for HttpUsersApi {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        let url = self.endpoint(&["users"])?;
        let resp = self.client.get(url).send().await?;
        let text = ensure_success(Operation::ListUsers, resp).await?.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn create_user(&self, user: &NewUser) -> ApiResult<OperationId> {
        let url = self.endpoint(&["users"])?;
        let resp = self.client.post(url).json(user).send().await?;
        Self::operation_id(Operation::CreateUser, resp).await
    }

    async fn delete_user(&self, id: &UserId) -> ApiResult<OperationId> {
        let url = self.endpoint(&["users", id.as_ref()])?;
        let resp = self.client.delete(url).send().await?;
        Self::operation_id(Operation::DeleteUser, resp).await
    }

    async fn check_status(&self, operation_id: &OperationId) -> ApiResult<OperationStatus> {
        let url = self.endpoint(&["status", operation_id.as_ref()])?;
        let resp = self.client.get(url).send().await?;
        let text = ensure_success(Operation::CheckStatus, resp).await?.text().await?;
        Ok(OperationStatus::parse(&text))
    }
}
