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

//! Remote Resource.
//!
//! Loading state shared by every page: a resource is fetched from one
//! endpoint, admitted through a decoder, and ends up either `Loaded` or
//! `Failed` with the message the page wants to show.

use serde_json::Value;
use tracing::{debug, error};

use crate::api::client::ApiClient;
use crate::core::errors::AdminError;
use crate::core::messages::Message;
use crate::core::types::SessionToken;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RemoteResource<T> {
    #[default]
    NotLoaded,
    Loading,
    Loaded(T),
    Failed(Message),
}

impl<T> RemoteResource<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteResource::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            RemoteResource::Loaded(v) => Some(v),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<Message> {
        match self {
            RemoteResource::Failed(m) => Some(*m),
            _ => None,
        }
    }

    /// Back to `NotLoaded`, e.g. when the session guard aborted the fetch.
    pub fn reset(&mut self) {
        *self = RemoteResource::NotLoaded;
    }

    pub fn fail(&mut self, message: Message) {
        *self = RemoteResource::Failed(message);
    }

    /// Fetch `endpoint` and settle the resource.
    ///
    /// The error is handed back after the resource has been marked `Failed`
    /// so the caller can apply page-specific side effects.
    pub async fn load(
        &mut self,
        api: &dyn ApiClient,
        token: &SessionToken,
        endpoint: &Endpoint<T>,
    ) -> Result<(), AdminError> {
        *self = RemoteResource::Loading;
        debug!(path = %endpoint.path, "Loading resource");

        let result = api
            .get_json(&endpoint.path, token)
            .await
            .and_then(endpoint.decode);

        match result {
            Ok(value) => {
                *self = RemoteResource::Loaded(value);
                Ok(())
            }
            Err(e) => {
                error!(path = %endpoint.path, error = %e, "Failed to load resource");
                *self = RemoteResource::Failed((endpoint.describe)(&e));
                Err(e)
            }
        }
    }
}

/// Where a resource lives and how its payload is admitted.
pub struct Endpoint<T> {
    pub path: String,
    /// Turns the untrusted JSON payload into page state
    pub decode: fn(Value) -> Result<T, AdminError>,
    /// Picks the message shown when loading fails
    pub describe: fn(&AdminError) -> Message,
}

impl<T> Endpoint<T> {
    pub fn new(
        path: impl Into<String>,
        decode: fn(Value) -> Result<T, AdminError>,
        describe: fn(&AdminError) -> Message,
    ) -> Self {
        Self {
            path: path.into(),
            decode,
            describe,
        }
    }
}
