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

//! Localized user-facing strings.
//!
//! Every message a page can surface is a `Message` variant; the text for a
//! locale is resolved at render time.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    pub fn parse_safe(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "en" | "en-us" | "en_us" | "english" => Locale::En,
            _ => Locale::Ja,
        }
    }

    /// BCP 47 tag, for logs.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Ja => "ja-JP",
            Locale::En => "en-US",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Message {
    Loading,
    AuthenticationFailed,
    ProfileFetchFailed,
    ProductFetchFailed,
    InvalidDataFormat,
    NoValidProducts,
    InvalidProduct,
    DeleteFailed,
    MissingToken,
    LogoutFailed,
    LoginRequired,
    NoProductsFound,
    OutOfStock,
    DashboardTitle,
    UserInfo,
    LabelId,
    LabelName,
    LabelEmail,
    GoToProducts,
    BackToHome,
    Logout,
    ProductListTitle,
    ProductDetailTitle,
    BackToDashboard,
    BackToProductList,
    ColumnName,
    ColumnDescription,
    ColumnPrice,
    ColumnStock,
    ColumnCreated,
    ColumnUpdated,
    ColumnActions,
    ActionView,
    ActionEdit,
    ActionDelete,
    ProductInfo,
    RegistrationInfo,
    LabelPrice,
    LabelStockStatus,
    LabelProductId,
    LabelCreated,
    LabelLastUpdated,
    DeleteConfirmTitle,
    DeleteConfirmBody,
    DeleteConfirmNamedSuffix,
    Cancel,
    ConfirmDelete,
}

impl Message {
    pub fn text(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ja => self.ja(),
            Locale::En => self.en(),
        }
    }

    fn ja(&self) -> &'static str {
        match self {
            Message::Loading => "読み込み中...",
            Message::AuthenticationFailed => "認証に失敗しました",
            Message::ProfileFetchFailed => "ユーザー情報の取得に失敗しました",
            Message::ProductFetchFailed => "製品情報の取得に失敗しました",
            Message::InvalidDataFormat => "データ形式が不正です",
            Message::NoValidProducts => "有効な製品データがありません",
            Message::InvalidProduct => "無効な製品データです",
            Message::DeleteFailed => "製品削除に失敗しました",
            Message::MissingToken => "トークンがありません",
            Message::LogoutFailed => "ログアウトに失敗しました",
            Message::LoginRequired => "ログインが必要です",
            Message::NoProductsFound => "製品が見つかりませんでした。",
            Message::OutOfStock => "在庫なし",
            Message::DashboardTitle => "ダッシュボード",
            Message::UserInfo => "ユーザー情報",
            Message::LabelId => "ID",
            Message::LabelName => "名前",
            Message::LabelEmail => "メール",
            Message::GoToProducts => "製品ページへ",
            Message::BackToHome => "ホームに戻る",
            Message::Logout => "ログアウト",
            Message::ProductListTitle => "製品一覧",
            Message::ProductDetailTitle => "製品詳細",
            Message::BackToDashboard => "ダッシュボードに戻る",
            Message::BackToProductList => "製品一覧に戻る",
            Message::ColumnName => "製品名",
            Message::ColumnDescription => "説明",
            Message::ColumnPrice => "価格",
            Message::ColumnStock => "在庫数",
            Message::ColumnCreated => "登録日",
            Message::ColumnUpdated => "更新日",
            Message::ColumnActions => "アクション",
            Message::ActionView => "詳細",
            Message::ActionEdit => "編集",
            Message::ActionDelete => "削除",
            Message::ProductInfo => "製品情報",
            Message::RegistrationInfo => "登録情報",
            Message::LabelPrice => "価格",
            Message::LabelStockStatus => "在庫状況",
            Message::LabelProductId => "製品ID",
            Message::LabelCreated => "登録日",
            Message::LabelLastUpdated => "最終更新日",
            Message::DeleteConfirmTitle => "削除の確認",
            Message::DeleteConfirmBody => {
                "この製品を削除してもよろしいですか？この操作は取り消せません。"
            }
            Message::DeleteConfirmNamedSuffix => {
                " を削除してもよろしいですか？この操作は取り消せません。"
            }
            Message::Cancel => "キャンセル",
            Message::ConfirmDelete => "削除する",
        }
    }

    fn en(&self) -> &'static str {
        match self {
            Message::Loading => "Loading...",
            Message::AuthenticationFailed => "Authentication failed",
            Message::ProfileFetchFailed => "Failed to fetch user information",
            Message::ProductFetchFailed => "Failed to fetch product information",
            Message::InvalidDataFormat => "Data format is invalid",
            Message::NoValidProducts => "No valid product data",
            Message::InvalidProduct => "Invalid product data",
            Message::DeleteFailed => "Failed to delete product",
            Message::MissingToken => "No session token",
            Message::LogoutFailed => "Logout failed",
            Message::LoginRequired => "Login required",
            Message::NoProductsFound => "No products found.",
            Message::OutOfStock => "Out of stock",
            Message::DashboardTitle => "Dashboard",
            Message::UserInfo => "User information",
            Message::LabelId => "ID",
            Message::LabelName => "Name",
            Message::LabelEmail => "Email",
            Message::GoToProducts => "Go to products",
            Message::BackToHome => "Back to home",
            Message::Logout => "Log out",
            Message::ProductListTitle => "Products",
            Message::ProductDetailTitle => "Product details",
            Message::BackToDashboard => "Back to dashboard",
            Message::BackToProductList => "Back to products",
            Message::ColumnName => "Name",
            Message::ColumnDescription => "Description",
            Message::ColumnPrice => "Price",
            Message::ColumnStock => "Stock",
            Message::ColumnCreated => "Created",
            Message::ColumnUpdated => "Updated",
            Message::ColumnActions => "Actions",
            Message::ActionView => "View",
            Message::ActionEdit => "Edit",
            Message::ActionDelete => "Delete",
            Message::ProductInfo => "Product information",
            Message::RegistrationInfo => "Registration",
            Message::LabelPrice => "Price",
            Message::LabelStockStatus => "Stock",
            Message::LabelProductId => "Product ID",
            Message::LabelCreated => "Created",
            Message::LabelLastUpdated => "Last updated",
            Message::DeleteConfirmTitle => "Confirm deletion",
            Message::DeleteConfirmBody => {
                "Are you sure you want to delete this product? This cannot be undone."
            }
            Message::DeleteConfirmNamedSuffix => " will be deleted. This cannot be undone.",
            Message::Cancel => "Cancel",
            Message::ConfirmDelete => "Delete",
        }
    }
}
