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

//! Client-side routes and navigation.

use std::fmt;
use std::sync::Mutex;

use crate::core::constants::routes;
use crate::core::models::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Dashboard,
    ProductList,
    ProductDetail(ProductId),
    ProductEdit(ProductId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => routes::HOME.to_string(),
            Route::Login => routes::LOGIN.to_string(),
            Route::Dashboard => routes::DASHBOARD.to_string(),
            Route::ProductList => routes::PRODUCTS.to_string(),
            Route::ProductDetail(id) => format!("{}/{}", routes::PRODUCTS, id),
            Route::ProductEdit(id) => format!("{}/{}/edit", routes::PRODUCTS, id),
        }
    }

    /// Inverse of [`Route::path`]. Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => return Some(Route::Home),
            routes::LOGIN => return Some(Route::Login),
            routes::DASHBOARD => return Some(Route::Dashboard),
            routes::PRODUCTS => return Some(Route::ProductList),
            _ => {}
        }

        let rest = trimmed.strip_prefix(routes::PRODUCTS)?.strip_prefix('/')?;
        match rest.split_once('/') {
            None => rest.parse().ok().map(Route::ProductDetail),
            Some((id, "edit")) => id.parse().ok().map(Route::ProductEdit),
            Some(_) => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Capability to move the user to another route.
pub trait Navigator: Send + Sync {
    fn push(&self, route: Route);
}

/// Navigator that records every push, newest last.
#[derive(Debug, Default)]
pub struct History {
    entries: Mutex<Vec<Route>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Route> {
        self.entries
            .lock()
            .map(|e| e.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Route> {
        self.entries.lock().ok().and_then(|e| e.last().copied())
    }

    /// Removes and returns all recorded pushes.
    pub fn drain(&self) -> Vec<Route> {
        self.entries
            .lock()
            .map(|mut e| std::mem::take(&mut *e))
            .unwrap_or_default()
    }
}

impl Navigator for History {
    fn push(&self, route: Route) {
        tracing::debug!(route = %route, "Navigating");
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(route);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_roundtrip() {
        let id = ProductId::new(12);
        for route in [
            Route::Home,
            Route::Login,
            Route::Dashboard,
            Route::ProductList,
            Route::ProductDetail(id),
            Route::ProductEdit(id),
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_route_parse_rejects_unknown() {
        assert_eq!(Route::parse("/product/abc"), None);
        assert_eq!(Route::parse("/product/1/delete"), None);
        assert_eq!(Route::parse("/settings"), None);
    }

    #[test]
    fn test_history_records_in_order() {
        let history = History::new();
        history.push(Route::Dashboard);
        history.push(Route::Login);
        assert_eq!(history.last(), Some(Route::Login));
        assert_eq!(history.drain(), vec![Route::Dashboard, Route::Login]);
        assert!(history.entries().is_empty());
    }
}
