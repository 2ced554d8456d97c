use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::core::config::AppConfig;
use crate::core::console;
use super::error::ApiError;
use super::http::{FetchTransport, HttpRequest, Method, Transport};

/// JSON REST client for the orchestration backend.
///
/// Every verb serializes its body to JSON, sends it with a JSON content type
/// and decodes the response body into `R`. Non-2xx responses become
/// [`ApiError::Http`] with the status and raw body; nothing is retried.
#[derive(Debug, Clone)]
pub struct ApiClient<T: Transport = FetchTransport> {
    base_url: String,
    transport: T,
}

impl ApiClient<FetchTransport> {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_transport(config.api_base_url.clone(), FetchTransport)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(Method::Get, path, None::<&()>).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::Post, path, Some(body)).await
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::Put, path, Some(body)).await
    }

    pub async fn patch<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::Patch, path, Some(body)).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(Method::Delete, path, None::<&()>).await
    }

    async fn request<B, R>(&self, method: Method, path: &str, body: Option<&B>) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Encode(e.to_string()))?;

        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            body,
            request_id: Uuid::new_v4().to_string(),
        };
        let tag = request.request_id[..8].to_string();
        console::debug(&format!("[{}] {} {}", tag, method.as_str(), request.url));

        let response = self.transport.send(request).await.map_err(|e| {
            console::error(&format!("[{}] {} {} failed: {}", tag, method.as_str(), path, e));
            e
        })?;

        if !response.is_success() {
            console::debug(&format!("[{}] {} {} -> {}", tag, method.as_str(), path, response.status));
            return Err(ApiError::Http {
                status: response.status,
                body: response.body,
            });
        }

        // DELETE and refresh endpoints may answer with an empty body
        let text = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
        serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
