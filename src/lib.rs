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

//! catalog-admin: a terminal client for a token-authenticated product catalog.
//!
//! Pages are plain controllers over an injected API client, session store and
//! navigator. They validate loosely typed API responses before anything is
//! shown, and the router renders them to text for the `catalog-admin` binary.

pub mod api;
pub mod app;
pub mod config;
pub mod core;
pub mod pages;
pub mod render;
pub mod utils;
