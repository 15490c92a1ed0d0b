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

//! Text rendering of page state.
//!
//! Pure functions: they read a page and return the text to print.

use std::fmt::Write;

use crate::core::messages::{Locale, Message};
use crate::core::models::Product;
use crate::core::routes::Route;
use crate::pages::catalog_detail::CatalogDetailView;
use crate::pages::catalog_list::CatalogListView;
use crate::pages::profile::ProfileView;
use crate::utils::format::{stock_label, truncate_description};
use crate::utils::icons::Icon;

fn banner(out: &mut String, error: Option<Message>, locale: Locale) {
    if let Some(message) = error {
        let _ = writeln!(
            out,
            "{} {}",
            Icon::ExclamationCircle.glyph(),
            message.text(locale)
        );
        out.push('\n');
    }
}

fn loading(out: &mut String, locale: Locale) {
    let _ = writeln!(out, "{} {}", Icon::Spinner.glyph(), Message::Loading.text(locale));
}

fn link(label: Message, route: Route, locale: Locale) -> String {
    format!("[{}]({})", label.text(locale), route)
}

pub fn render_dashboard(page: &ProfileView) -> String {
    let locale = page.context().locale;
    let mut out = String::new();

    if page.is_loading() {
        loading(&mut out, locale);
        return out;
    }

    let _ = writeln!(
        out,
        "{}    [{} {}]",
        Message::DashboardTitle.text(locale),
        Icon::SignOut.glyph(),
        Message::Logout.text(locale)
    );
    out.push('\n');
    banner(&mut out, page.error(), locale);

    if let Some(user) = page.user().loaded() {
        let _ = writeln!(out, "{} {}", Icon::User.glyph(), Message::UserInfo.text(locale));
        let id = user.id.map(|id| id.to_string()).unwrap_or_default();
        let _ = writeln!(out, "  {}: {}", Message::LabelId.text(locale), id);
        let _ = writeln!(out, "  {}: {}", Message::LabelName.text(locale), user.name);
        let _ = writeln!(out, "  {}: {}", Message::LabelEmail.text(locale), user.email);
        out.push('\n');
    }

    let _ = writeln!(out, "{}", link(Message::GoToProducts, Route::ProductList, locale));
    let _ = writeln!(out, "{}", link(Message::BackToHome, Route::Home, locale));
    out
}

fn product_row(page: &CatalogListView, product: &Product, locale: Locale) -> String {
    format!(
        "{} | {} | {} | {} | {} | {} | {} {} {} {} {} {}",
        product.name,
        truncate_description(&product.description),
        page.format_price(product.price),
        stock_label(product.stock, locale),
        page.format_date(&product.created_at),
        page.format_date(&product.updated_at),
        Icon::Eye.glyph(),
        link(Message::ActionView, Route::ProductDetail(product.id), locale),
        Icon::Edit.glyph(),
        link(Message::ActionEdit, Route::ProductEdit(product.id), locale),
        Icon::Trash.glyph(),
        Message::ActionDelete.text(locale),
    )
}

pub fn render_product_list(page: &CatalogListView) -> String {
    let locale = page.context().locale;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}    {} {}",
        Icon::Box.glyph(),
        Message::ProductListTitle.text(locale),
        Icon::ArrowLeft.glyph(),
        link(Message::BackToDashboard, Route::Dashboard, locale)
    );
    out.push('\n');
    banner(&mut out, page.error(), locale);

    if page.is_loading() {
        loading(&mut out, locale);
    } else if page.products().is_empty() {
        let _ = writeln!(out, "{}", Message::NoProductsFound.text(locale));
    } else {
        let header = [
            Message::ColumnName,
            Message::ColumnDescription,
            Message::ColumnPrice,
            Message::ColumnStock,
            Message::ColumnCreated,
            Message::ColumnUpdated,
            Message::ColumnActions,
        ]
        .iter()
        .map(|m| m.text(locale))
        .collect::<Vec<_>>()
        .join(" | ");
        let _ = writeln!(out, "{}", header);
        let _ = writeln!(out, "{}", "-".repeat(header.chars().count()));
        for product in page.products() {
            let _ = writeln!(out, "{}", product_row(page, product, locale));
        }
    }

    if page.confirmation().is_open() {
        out.push('\n');
        out.push_str(&render_delete_dialog(None, locale));
    }
    out
}

pub fn render_product_detail(page: &CatalogDetailView) -> String {
    let locale = page.context().locale;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}    {} {}",
        Icon::Box.glyph(),
        Message::ProductDetailTitle.text(locale),
        Icon::ArrowLeft.glyph(),
        link(Message::BackToProductList, Route::ProductList, locale)
    );
    out.push('\n');
    banner(&mut out, page.error(), locale);

    if page.is_loading() {
        loading(&mut out, locale);
        return out;
    }

    let Some(product) = page.product() else {
        let _ = writeln!(out, "{}", Message::NoProductsFound.text(locale));
        return out;
    };

    let _ = writeln!(out, "{}", product.name);
    out.push('\n');
    let _ = writeln!(out, "{}", Message::ProductInfo.text(locale));
    let _ = writeln!(out, "  {}", product.description);
    let _ = writeln!(
        out,
        "  {}: {}",
        Message::LabelPrice.text(locale),
        page.format_price(product.price)
    );
    let _ = writeln!(
        out,
        "  {}: {}",
        Message::LabelStockStatus.text(locale),
        stock_label(product.stock, locale)
    );
    out.push('\n');
    let _ = writeln!(out, "{}", Message::RegistrationInfo.text(locale));
    let _ = writeln!(out, "  {}: {}", Message::LabelProductId.text(locale), product.id);
    let _ = writeln!(
        out,
        "  {}: {}",
        Message::LabelCreated.text(locale),
        page.format_date(&product.created_at)
    );
    let _ = writeln!(
        out,
        "  {}: {}",
        Message::LabelLastUpdated.text(locale),
        page.format_date(&product.updated_at)
    );
    out.push('\n');
    let _ = writeln!(
        out,
        "{} {}    {} {}",
        Icon::Edit.glyph(),
        link(Message::ActionEdit, Route::ProductEdit(product.id), locale),
        Icon::Trash.glyph(),
        Message::ActionDelete.text(locale)
    );

    if page.confirmation().is_open() {
        out.push('\n');
        out.push_str(&render_delete_dialog(Some(&product.name), locale));
    }
    out
}

/// The confirmation dialog; the detail page names the product.
pub fn render_delete_dialog(product_name: Option<&str>, locale: Locale) -> String {
    let body = match product_name {
        Some(name) => format!("{}{}", name, Message::DeleteConfirmNamedSuffix.text(locale)),
        None => Message::DeleteConfirmBody.text(locale).to_string(),
    };
    format!(
        "{} {}\n{}\n[{}] [{}]\n",
        Icon::ExclamationTriangle.glyph(),
        Message::DeleteConfirmTitle.text(locale),
        body,
        Message::Cancel.text(locale),
        Message::ConfirmDelete.text(locale)
    )
}

pub fn render_login_notice(locale: Locale) -> String {
    format!("{} ({})\n", Message::LoginRequired.text(locale), Route::Login)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_names_product() {
        let text = render_delete_dialog(Some("ノートPC"), Locale::Ja);
        assert!(text.contains("削除の確認"));
        assert!(text.contains("ノートPC を削除してもよろしいですか"));

        let generic = render_delete_dialog(None, Locale::Ja);
        assert!(generic.contains("この製品を削除してもよろしいですか"));
    }

    #[test]
    fn test_login_notice() {
        assert_eq!(render_login_notice(Locale::En), "Login required (/login)\n");
    }
}
