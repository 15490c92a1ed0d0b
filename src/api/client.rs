// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! HTTP client for the catalog REST API.
//!
//! Every request carries the bearer token and `Accept: application/json`.
//! The underlying `reqwest` client keeps a cookie jar so cookie-based
//! sessions cooperate with the token.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;
use tracing::{debug, error};
use uuid::Uuid;

use crate::core::constants::http;
use crate::core::errors::AdminError;
use crate::core::types::SessionToken;

/// The three verbs the pages need.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// GET `path` and parse the body as JSON.
    async fn get_json(&self, path: &str, token: &SessionToken) -> Result<Value, AdminError>;

    /// POST to `path`; the body is ignored.
    async fn post(&self, path: &str, token: &SessionToken) -> Result<(), AdminError>;

    /// DELETE `path`; the body is ignored.
    async fn delete(&self, path: &str, token: &SessionToken) -> Result<(), AdminError>;
}

pub struct HttpApiClient {
    http_client: Client,
    base_url: String,
}

impl HttpApiClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// No timeout is configured; the transport default applies.
    pub fn new(base_url: &str) -> Result<Self, AdminError> {
        let http_client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| {
                AdminError::ConfigurationError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str, token: &SessionToken) -> RequestBuilder {
        self.http_client
            .request(method, self.url(path))
            .header(AUTHORIZATION, token.bearer())
            .header(ACCEPT, http::ACCEPT_JSON)
    }

    /// Send the request and reject non-success statuses.
    async fn send(
        &self,
        method: Method,
        path: &str,
        token: &SessionToken,
    ) -> Result<Response, AdminError> {
        let request_id = Uuid::new_v4();
        debug!(
            method = %method,
            path = %path,
            request_id = %request_id,
            "Sending API request"
        );

        let response = self
            .request(method.clone(), path, token)
            .send()
            .await
            .map_err(|e| {
                error!(
                    method = %method,
                    path = %path,
                    request_id = %request_id,
                    error = %e,
                    "API request failed"
                );
                AdminError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(
                method = %method,
                path = %path,
                request_id = %request_id,
                status = %status,
                "API returned HTTP error"
            );
            return Err(AdminError::HttpStatus {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        debug!(
            path = %path,
            request_id = %request_id,
            status = %status,
            "API request completed"
        );
        Ok(response)
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn get_json(&self, path: &str, token: &SessionToken) -> Result<Value, AdminError> {
        let response = self.send(Method::GET, path, token).await?;
        response.json::<Value>().await.map_err(|e| {
            error!(path = %path, error = %e, "Failed to parse API response");
            AdminError::Decode(e.to_string())
        })
    }

    async fn post(&self, path: &str, token: &SessionToken) -> Result<(), AdminError> {
        self.send(Method::POST, path, token).await.map(|_| ())
    }

    async fn delete(&self, path: &str, token: &SessionToken) -> Result<(), AdminError> {
        self.send(Method::DELETE, path, token).await.map(|_| ())
    }
}
