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

//! catalog-admin Constants - Single source of truth for all configuration values.
//!
//! This module centralizes endpoint paths, storage keys, routes and
//! environment variable names so the pages and the CLI agree on them.

/// Catalog REST API endpoints
pub mod endpoints {
    /// Current user profile
    pub const USER: &str = "/api/user";
    /// Remote session invalidation
    pub const LOGOUT: &str = "/api/logout";
    /// Product collection; single products live under `{PRODUCTS}/{id}`
    pub const PRODUCTS: &str = "/api/product";

    /// Path of a single product resource.
    pub fn product(id: impl std::fmt::Display) -> String {
        format!("{}/{}", PRODUCTS, id)
    }
}

/// HTTP header values sent with every request
pub mod http {
    pub const ACCEPT_JSON: &str = "application/json";
    pub const BEARER_PREFIX: &str = "Bearer ";
}

/// Client-held session state
pub mod session {
    /// Fixed key the session token is stored under
    pub const TOKEN_KEY: &str = "token";
    /// Default session file, relative to the home directory
    pub const DEFAULT_SESSION_FILE: &str = ".catalog-admin/session.json";
}

/// Client-side routes
pub mod routes {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";
    pub const PRODUCTS: &str = "/product";
}

/// Configuration Environment Variables
pub mod config {
    pub const ENV_CONFIG_PATH: &str = "CATALOG_ADMIN_CONFIG";
    pub const ENV_API_URL: &str = "CATALOG_ADMIN_API_URL";
    pub const ENV_SESSION_FILE: &str = "CATALOG_ADMIN_SESSION_FILE";
    pub const ENV_LOCALE: &str = "CATALOG_ADMIN_LOCALE";
    pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
    pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

    pub const DEFAULT_API_URL: &str = "http://localhost:80";
}

/// Presentation limits
pub mod display {
    /// Descriptions longer than this are truncated in the product table
    pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;
    /// Appended to truncated descriptions
    pub const ELLIPSIS: &str = "...";
    /// Upper bound on redirects followed by the router in a single visit
    pub const MAX_REDIRECTS: usize = 4;
}
