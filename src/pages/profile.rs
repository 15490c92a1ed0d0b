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

//! Dashboard page: the signed-in user's profile and the logout action.
//!
//! This is the strict page. A failed profile fetch means the token itself is
//! no good, so the token is dropped and the user is sent to login.

use serde_json::Value;
use tracing::{error, info, warn};

use crate::core::constants::endpoints;
use crate::core::errors::AdminError;
use crate::core::messages::Message;
use crate::core::models::User;
use crate::core::resource::{Endpoint, RemoteResource};
use crate::core::routes::Route;
use crate::pages::guard::SessionGuard;
use crate::pages::PageContext;

pub struct ProfileView {
    ctx: PageContext,
    user: RemoteResource<User>,
}

impl ProfileView {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            user: RemoteResource::NotLoaded,
        }
    }

    pub fn user(&self) -> &RemoteResource<User> {
        &self.user
    }

    pub fn error(&self) -> Option<Message> {
        self.user.failure()
    }

    pub fn is_loading(&self) -> bool {
        self.user.is_loading()
    }

    pub fn context(&self) -> &PageContext {
        &self.ctx
    }

    pub async fn load_profile(&mut self) {
        let Some(token) = SessionGuard::check(self.ctx.session.as_ref(), self.ctx.navigator.as_ref())
        else {
            self.user.reset();
            return;
        };

        let endpoint = Endpoint::new(endpoints::USER, decode_user, describe_failure);
        if let Err(e) = self.user.load(self.ctx.api.as_ref(), &token, &endpoint).await {
            info!(error = %e, "Profile fetch failed, signing out");
            SessionGuard::sign_out(self.ctx.session.as_ref());
            self.ctx.navigator.push(Route::Login);
        }
    }

    /// Best-effort remote logout; the local session is always dropped.
    pub async fn logout(&mut self) {
        match self.ctx.session.get() {
            Ok(Some(token)) => {
                if let Err(e) = self.ctx.api.post(endpoints::LOGOUT, &token).await {
                    error!(
                        error = %e,
                        "{}",
                        Message::LogoutFailed.text(self.ctx.locale)
                    );
                }
            }
            Ok(None) => {}
            Err(e) => error!(error = %e, "Could not read session token for logout"),
        }

        SessionGuard::sign_out(self.ctx.session.as_ref());
        self.user.reset();
        self.ctx.navigator.push(Route::Login);
    }
}

/// Any JSON body is accepted. Only a body that is not JSON at all fails,
/// and that happens in the client before decoding.
fn decode_user(payload: Value) -> Result<User, AdminError> {
    Ok(serde_json::from_value(payload).unwrap_or_else(|e| {
        warn!(error = %e, "Unexpected user payload shape, rendering blank profile");
        User::default()
    }))
}

fn describe_failure(e: &AdminError) -> Message {
    if e.is_http_status() {
        Message::AuthenticationFailed
    } else {
        Message::ProfileFetchFailed
    }
}
