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

use crate::core::messages::{Locale, Message};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    /// No session token in the store
    #[error("No session token present")]
    MissingToken,

    /// Server answered with a non-success status
    #[error("{endpoint} returned HTTP {status}")]
    HttpStatus { endpoint: String, status: u16 },

    /// Request never produced a response (connect, DNS, TLS, ...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body was not valid JSON for the expected type
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// JSON parsed but had the wrong shape
    #[error("Unexpected response shape: {0}")]
    InvalidShape(String),

    /// A non-empty collection in which no element passed validation
    #[error("None of the {total} records passed validation")]
    NoValidRecords { total: usize },

    /// Session store could not be read or written
    #[error("Session storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// I/O Error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AdminError {
    /// True when the server itself rejected the request.
    pub fn is_http_status(&self) -> bool {
        matches!(self, AdminError::HttpStatus { .. })
    }

    /// Get the generic user-facing message for this error.
    ///
    /// Pages usually pick a more specific `Message` for the operation that
    /// failed; this is the fallback for errors that reach the binary.
    pub fn user_message(&self, locale: Locale) -> String {
        let message = match self {
            AdminError::MissingToken => Message::MissingToken,
            AdminError::HttpStatus { status: 401, .. } => Message::AuthenticationFailed,
            AdminError::HttpStatus { .. } | AdminError::Transport(_) => {
                Message::ProductFetchFailed
            }
            AdminError::Decode(_) | AdminError::InvalidShape(_) => Message::InvalidDataFormat,
            AdminError::NoValidRecords { .. } => Message::NoValidProducts,
            AdminError::Storage(_)
            | AdminError::ConfigurationError(_)
            | AdminError::IoError(_) => return self.to_string(),
        };
        message.text(locale).to_string()
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(e: serde_json::Error) -> Self {
        AdminError::Decode(e.to_string())
    }
}
