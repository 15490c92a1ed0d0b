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

use crate::core::constants::{config as keys, session};
use crate::core::errors::AdminError;
use crate::core::messages::Locale;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Client configuration.
///
/// Built in layers: defaults, then the YAML file named by
/// `CATALOG_ADMIN_CONFIG`, then environment variables. The binary applies its
/// command line flags last and calls [`Config::validate`] again.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the catalog API, without a trailing slash
    pub api_url: String,
    pub session_file: PathBuf,
    pub locale: Locale,
    pub log_level: String,
    pub log_format: String, // "json" or "text"
}

impl Config {
    /// Defaults, the optional YAML file, then the environment.
    ///
    /// Not validated: the caller still has flags to apply.
    pub fn load() -> Result<Self, AdminError> {
        let mut config = match Self::get_optional_path(keys::ENV_CONFIG_PATH) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, AdminError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AdminError::ConfigurationError(format!(
                "Cannot read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        serde_yaml_ng::from_str(&raw).map_err(|e| {
            AdminError::ConfigurationError(format!(
                "Invalid config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Overlay every variable `lookup` yields. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(keys::ENV_API_URL) {
            self.api_url = url;
        }
        if let Some(path) = get(keys::ENV_SESSION_FILE) {
            self.session_file = PathBuf::from(path);
        }
        if let Some(locale) = get(keys::ENV_LOCALE) {
            self.locale = Locale::parse_safe(&locale);
        }
        if let Some(level) = get(keys::ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        if let Some(format) = get(keys::ENV_LOG_FORMAT) {
            self.log_format = format;
        }
    }

    pub fn validate(&self) -> Result<(), AdminError> {
        let url = self.api_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AdminError::ConfigurationError(format!(
                "api_url must be an http(s) URL, got '{}'",
                self.api_url
            )));
        }
        if self.session_file.as_os_str().is_empty() {
            return Err(AdminError::ConfigurationError(
                "session_file is empty".to_string(),
            ));
        }
        match self.log_format.as_str() {
            "json" | "text" => Ok(()),
            other => Err(AdminError::ConfigurationError(format!(
                "log_format must be 'json' or 'text', got '{}'",
                other
            ))),
        }
    }

    fn get_optional_path(key: &str) -> Option<PathBuf> {
        match env::var(key) {
            Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
            _ => None,
        }
    }

    /// `$HOME/.catalog-admin/session.json`, or relative to the working
    /// directory when `HOME` is unset.
    fn default_session_file() -> PathBuf {
        match Self::get_optional_path("HOME") {
            Some(home) => home.join(session::DEFAULT_SESSION_FILE),
            None => PathBuf::from(session::DEFAULT_SESSION_FILE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: keys::DEFAULT_API_URL.to_string(),
            session_file: Self::default_session_file(),
            locale: Locale::default(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}
