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

//! Session guard run by every protected page before it touches the network.

use tracing::{debug, error, warn};

use crate::core::routes::{Navigator, Route};
use crate::core::session::SessionStore;
use crate::core::types::SessionToken;

pub struct SessionGuard;

impl SessionGuard {
    /// Returns the token, or redirects to login and returns `None`.
    ///
    /// An unreadable store counts as signed out.
    pub fn check(session: &dyn SessionStore, navigator: &dyn Navigator) -> Option<SessionToken> {
        match session.get() {
            Ok(Some(token)) => Some(token),
            Ok(None) => {
                debug!("No session token, redirecting to login");
                navigator.push(Route::Login);
                None
            }
            Err(e) => {
                warn!(error = %e, "Session store unreadable, redirecting to login");
                navigator.push(Route::Login);
                None
            }
        }
    }

    /// Drop the local token. Failures are logged; the caller is leaving anyway.
    pub fn sign_out(session: &dyn SessionStore) {
        if let Err(e) = session.clear() {
            error!(error = %e, "Failed to clear session token");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::routes::History;
    use crate::core::session::MemorySessionStore;

    #[test]
    fn test_missing_token_redirects() {
        let store = MemorySessionStore::new();
        let history = History::new();
        assert!(SessionGuard::check(&store, &history).is_none());
        assert_eq!(history.entries(), vec![Route::Login]);
    }

    #[test]
    fn test_present_token_passes_without_navigation() {
        let store = MemorySessionStore::with_token("abc");
        let history = History::new();
        let token = SessionGuard::check(&store, &history).unwrap();
        assert_eq!(token.as_str(), "abc");
        assert!(history.entries().is_empty());
    }

    #[test]
    fn test_sign_out_clears() {
        let store = MemorySessionStore::with_token("abc");
        SessionGuard::sign_out(&store);
        assert!(store.get().unwrap().is_none());
    }
}
