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

//! Product detail page.

use tracing::{error, info};

use crate::core::constants::endpoints;
use crate::core::errors::AdminError;
use crate::core::messages::Message;
use crate::core::models::{Product, ProductId};
use crate::core::resource::{Endpoint, RemoteResource};
use crate::core::routes::Route;
use crate::pages::confirm::DeleteConfirmation;
use crate::pages::guard::SessionGuard;
use crate::pages::PageContext;
use crate::utils::format;
use crate::utils::product_validator::ProductValidator;

pub struct CatalogDetailView {
    ctx: PageContext,
    product: RemoteResource<Product>,
    error: Option<Message>,
    confirmation: DeleteConfirmation<ProductId>,
}

impl CatalogDetailView {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            product: RemoteResource::NotLoaded,
            error: None,
            confirmation: DeleteConfirmation::Idle,
        }
    }

    pub fn context(&self) -> &PageContext {
        &self.ctx
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.loaded()
    }

    pub fn error(&self) -> Option<Message> {
        self.error.or_else(|| self.product.failure())
    }

    pub fn is_loading(&self) -> bool {
        self.product.is_loading()
    }

    /// Loading finished without a product to show.
    pub fn is_not_found(&self) -> bool {
        !self.is_loading() && self.product().is_none()
    }

    pub fn confirmation(&self) -> DeleteConfirmation<ProductId> {
        self.confirmation
    }

    pub async fn load_product(&mut self, id: ProductId) {
        let Some(token) = SessionGuard::check(self.ctx.session.as_ref(), self.ctx.navigator.as_ref())
        else {
            self.product.reset();
            return;
        };

        self.error = None;
        let endpoint = Endpoint::new(
            endpoints::product(id),
            ProductValidator::decode_one,
            describe_failure,
        );
        if self
            .product
            .load(self.ctx.api.as_ref(), &token, &endpoint)
            .await
            .is_ok()
        {
            info!(product_id = %id, "Loaded product");
        }
    }

    /// Open the dialog for the loaded product. No-op when nothing is loaded.
    pub fn request_delete(&mut self) {
        if let Some(id) = self.product().map(|p| p.id) {
            self.confirmation.request(id);
        }
    }

    pub fn cancel_delete(&mut self) {
        self.confirmation.cancel();
    }

    /// Delete the loaded product and go back to the list.
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.product().map(|p| p.id) else {
            return;
        };
        if !self.confirmation.begin(id) {
            return;
        }

        let token = match self.ctx.session.get() {
            Ok(Some(token)) => token,
            other => {
                if let Err(e) = other {
                    error!(product_id = %id, error = %e, "Could not read session token for delete");
                }
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
                self.ctx.navigator.push(Route::ProductList);
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
        AdminError::InvalidShape(_) => Message::InvalidProduct,
        _ => Message::ProductFetchFailed,
    }
}
