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

//! Product list page.
//!
//! The list is only ever a server-fetched snapshot: a successful delete
//! triggers a full re-fetch, never a local removal. Fetch failures stay on
//! this page as an inline banner; they do not sign the user out.

use tracing::{error, info, warn};

use crate::core::constants::endpoints;
use crate::core::errors::AdminError;
use crate::core::messages::Message;
use crate::core::models::{Product, ProductId};
use crate::core::resource::{Endpoint, RemoteResource};
use crate::core::types::SessionToken;
use crate::pages::confirm::DeleteConfirmation;
use crate::pages::guard::SessionGuard;
use crate::pages::PageContext;
use crate::utils::format;
use crate::utils::product_validator::ProductValidator;

pub struct CatalogListView {
    ctx: PageContext,
    products: RemoteResource<Vec<Product>>,
    /// Banner for failed actions; load failures live in `products`
    error: Option<Message>,
    confirmation: DeleteConfirmation<ProductId>,
}

impl CatalogListView {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            products: RemoteResource::NotLoaded,
            error: None,
            confirmation: DeleteConfirmation::Idle,
        }
    }

    pub fn context(&self) -> &PageContext {
        &self.ctx
    }

    /// Rows to render; empty unless the last load succeeded.
    pub fn products(&self) -> &[Product] {
        self.products.loaded().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn error(&self) -> Option<Message> {
        self.error.or_else(|| self.products.failure())
    }

    pub fn is_loading(&self) -> bool {
        self.products.is_loading()
    }

    pub fn confirmation(&self) -> DeleteConfirmation<ProductId> {
        self.confirmation
    }

    pub async fn load_products(&mut self) {
        let Some(token) = SessionGuard::check(self.ctx.session.as_ref(), self.ctx.navigator.as_ref())
        else {
            self.products.reset();
            return;
        };
        self.fetch(&token).await;
    }

    async fn fetch(&mut self, token: &SessionToken) {
        self.error = None;
        let endpoint = Endpoint::new(
            endpoints::PRODUCTS,
            ProductValidator::decode_list,
            describe_failure,
        );
        if self
            .products
            .load(self.ctx.api.as_ref(), token, &endpoint)
            .await
            .is_ok()
        {
            info!(count = self.products().len(), "Loaded products");
        }
    }

    pub fn request_delete(&mut self, id: ProductId) {
        self.confirmation.request(id);
    }

    pub fn cancel_delete(&mut self) {
        self.confirmation.cancel();
    }

    /// Delete the product whose confirmation is pending, then re-fetch.
    ///
    /// The dialog is closed before the re-fetch starts, whatever its outcome.
    pub async fn confirm_delete(&mut self, id: ProductId) {
        if !self.confirmation.begin(id) {
            warn!(product_id = %id, "Delete confirmed without a pending confirmation");
            return;
        }

        let token = match self.ctx.session.get() {
            Ok(Some(token)) => token,
            Ok(None) => {
                error!(product_id = %id, "No session token for delete");
                self.error = Some(Message::MissingToken);
                self.confirmation.finish();
                return;
            }
            Err(e) => {
                error!(product_id = %id, error = %e, "Could not read session token for delete");
                self.error = Some(Message::MissingToken);
                self.confirmation.finish();
                return;
            }
        };

        let result = self
            .ctx
            .api
            .delete(&endpoints::product(id), &token)
            .await;
        self.confirmation.finish();

        match result {
            Ok(()) => {
                info!(product_id = %id, "Product deleted");
                self.fetch(&token).await;
            }
            Err(e) => {
                error!(product_id = %id, error = %e, "Product delete failed");
                self.error = Some(Message::DeleteFailed);
            }
        }
    }

    pub fn format_price(&self, price: f64) -> String {
        format::format_price(price, self.ctx.locale)
    }

    pub fn format_date(&self, date: &str) -> String {
        format::format_date(date, self.ctx.locale)
    }
}

fn describe_failure(e: &AdminError) -> Message {
    match e {
        AdminError::InvalidShape(_) => Message::InvalidDataFormat,
        AdminError::NoValidRecords { .. } => Message::NoValidProducts,
        _ => Message::ProductFetchFailed,
    }
}
