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

//! Page controllers.
//!
//! Each page owns its own state and its own fetch-on-mount operation. Pages
//! share nothing but the capabilities in [`PageContext`].

pub mod catalog_detail;
pub mod catalog_list;
pub mod confirm;
pub mod guard;
pub mod profile;

use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::core::messages::Locale;
use crate::core::routes::Navigator;
use crate::core::session::SessionStore;

/// Capabilities injected into every page.
#[derive(Clone)]
pub struct PageContext {
    pub api: Arc<dyn ApiClient>,
    pub session: Arc<dyn SessionStore>,
    pub navigator: Arc<dyn Navigator>,
    pub locale: Locale,
}

impl PageContext {
    pub fn new(
        api: Arc<dyn ApiClient>,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        locale: Locale,
    ) -> Self {
        Self {
            api,
            session,
            navigator,
            locale,
        }
    }
}
