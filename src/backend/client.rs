//! HTTP client for the EduCoach API.
//!
//! Every endpoint accepts a JSON body and answers with the
//! `{ success, message, data }` envelope; this module unwraps it.

use super::error::BackendError;
use super::resource::ApiResponse;
use log::*;
use reqwest::Method;
use serde::{
    de::{DeserializeOwned, IgnoredAny},
    Serialize,
};
use std::time::Duration;

/// Makes requests to the API and tries to conform response data to the
/// given type.
///
pub struct Client {
    pub(crate) base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        Ok(Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder().timeout(timeout).build()?,
        })
    }

    /// POST `body` to `path` and return the envelope's data, which must be
    /// present.
    ///
    pub async fn post<B, T>(&self, path: &'static str, body: &B) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(Method::POST, path, body)
            .await?
            .ok_or(BackendError::MissingData(path))
    }

    /// POST `body` to `path`, ignoring any data in the envelope.
    ///
    pub async fn post_ignoring_data<B>(&self, path: &'static str, body: &B) -> Result<(), BackendError>
    where
        B: Serialize + ?Sized,
    {
        self.call::<B, IgnoredAny>(Method::POST, path, body)
            .await
            .map(|_| ())
    }

    async fn call<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request_url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!("Sending {} request to {}...", method, request_url);

        let response = self
            .http_client
            .request(method, &request_url)
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let response_bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiResponse<serde_json::Value>>(&response_bytes)
                .map(|envelope| envelope.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(&response_bytes).into_owned());
            error!("API request failed with status {}: {}", status, message);
            return Err(BackendError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiResponse<T> = serde_json::from_slice(&response_bytes)?;
        if !envelope.success {
            return Err(BackendError::Rejected(envelope.message));
        }
        if !envelope.message.is_empty() {
            debug!("API responded: {}", envelope.message);
        }
        Ok(envelope.data)
    }
}
