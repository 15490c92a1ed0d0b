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

//! Router: mounts the page that owns a route, renders it, and follows the
//! redirects the page issued.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::api::client::ApiClient;
use crate::core::constants::display::MAX_REDIRECTS;
use crate::core::messages::{Locale, Message};
use crate::core::models::ProductId;
use crate::core::routes::{History, Navigator, Route};
use crate::core::session::SessionStore;
use crate::pages::catalog_detail::CatalogDetailView;
use crate::pages::catalog_list::CatalogListView;
use crate::pages::profile::ProfileView;
use crate::pages::PageContext;
use crate::render;

/// What the user ends up looking at after a visit.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    /// Route the visit settled on
    pub route: Route,
    pub body: String,
    /// Error banner of the final page, if any
    pub error: Option<Message>,
}

impl Screen {
    pub fn is_login(&self) -> bool {
        self.route == Route::Login
    }
}

/// Result of one mounted page: its text and the error it surfaced.
struct Frame {
    body: String,
    error: Option<Message>,
}

pub struct App {
    ctx: PageContext,
    history: Arc<History>,
}

impl App {
    pub fn new(api: Arc<dyn ApiClient>, session: Arc<dyn SessionStore>, locale: Locale) -> Self {
        let history = Arc::new(History::new());
        let ctx = PageContext::new(api, session, history.clone(), locale);
        Self { ctx, history }
    }

    pub fn context(&self) -> &PageContext {
        &self.ctx
    }

    /// Every route pushed so far, including redirects.
    pub fn history(&self) -> &History {
        &self.history
    }

    pub async fn visit(&self, route: Route) -> Screen {
        self.history.drain();
        let frame = self.mount(route).await;
        self.settle(route, frame).await
    }

    /// List-page delete: open the dialog for `id`, ask `confirm`, delete.
    pub async fn delete_from_list<F>(&self, id: ProductId, confirm: F) -> Screen
    where
        F: FnOnce(&str) -> bool,
    {
        self.history.drain();
        let mut page = CatalogListView::new(self.ctx.clone());
        page.load_products().await;
        if self.history.last().is_some() {
            let frame = Self::frame(render::render_product_list(&page), page.error());
            return self.settle(Route::ProductList, frame).await;
        }

        page.request_delete(id);
        if confirm(&render::render_product_list(&page)) {
            page.confirm_delete(id).await;
        } else {
            page.cancel_delete();
        }
        let frame = Self::frame(render::render_product_list(&page), page.error());
        self.settle(Route::ProductList, frame).await
    }

    /// Detail-page delete. Success lands on the product list.
    pub async fn delete_from_detail<F>(&self, id: ProductId, confirm: F) -> Screen
    where
        F: FnOnce(&str) -> bool,
    {
        self.history.drain();
        let route = Route::ProductDetail(id);
        let mut page = CatalogDetailView::new(self.ctx.clone());
        page.load_product(id).await;
        if self.history.last().is_some() || page.is_not_found() {
            let frame = Self::frame(render::render_product_detail(&page), page.error());
            return self.settle(route, frame).await;
        }

        page.request_delete();
        if confirm(&render::render_product_detail(&page)) {
            page.confirm_delete().await;
        } else {
            page.cancel_delete();
        }
        let frame = Self::frame(render::render_product_detail(&page), page.error());
        self.settle(route, frame).await
    }

    pub async fn logout(&self) -> Screen {
        self.history.drain();
        let mut page = ProfileView::new(self.ctx.clone());
        page.logout().await;
        let frame = Self::frame(String::new(), None);
        self.settle(Route::Dashboard, frame).await
    }

    fn frame(body: String, error: Option<Message>) -> Frame {
        Frame { body, error }
    }

    /// Follow the redirects recorded since the last drain, up to
    /// `MAX_REDIRECTS` hops. Pages left by a redirect contribute only their
    /// error banner.
    async fn settle(&self, mut route: Route, mut frame: Frame) -> Screen {
        let mut carried = String::new();
        let mut hops = 0;

        loop {
            let next = match self.history.drain().last().copied() {
                Some(next) if next != route => next,
                _ => break,
            };
            if hops == MAX_REDIRECTS {
                warn!(route = %route, next = %next, max = MAX_REDIRECTS, "Redirect limit reached");
                break;
            }
            hops += 1;

            debug!(from = %route, to = %next, "Following redirect");
            if let Some(message) = frame.error {
                carried.push_str(message.text(self.ctx.locale));
                carried.push('\n');
            }
            route = next;
            frame = self.mount(route).await;
        }

        carried.push_str(&frame.body);
        Screen {
            route,
            body: carried,
            error: frame.error,
        }
    }

    async fn mount(&self, route: Route) -> Frame {
        let locale = self.ctx.locale;
        match route {
            Route::Login => Self::frame(render::render_login_notice(locale), None),
            Route::Home => {
                self.history.push(Route::Dashboard);
                Self::frame(String::new(), None)
            }
            Route::Dashboard => {
                let mut page = ProfileView::new(self.ctx.clone());
                page.load_profile().await;
                Self::frame(render::render_dashboard(&page), page.error())
            }
            Route::ProductList => {
                let mut page = CatalogListView::new(self.ctx.clone());
                page.load_products().await;
                Self::frame(render::render_product_list(&page), page.error())
            }
            Route::ProductDetail(id) => {
                let mut page = CatalogDetailView::new(self.ctx.clone());
                page.load_product(id).await;
                Self::frame(render::render_product_detail(&page), page.error())
            }
            Route::ProductEdit(id) => {
                info!(product_id = %id, "Editing is not available here, showing the product");
                self.history.push(Route::ProductDetail(id));
                Self::frame(String::new(), None)
            }
        }
    }
}
