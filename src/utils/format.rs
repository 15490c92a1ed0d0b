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

//! Locale-aware projections of product fields for display.
//!
//! Pure functions with no validation responsibility: whatever passed the
//! validator is rendered, and unparsable dates render as `Invalid Date`.

use crate::core::constants::display;
use crate::core::messages::{Locale, Message};
use crate::utils::time::parse_date;

const INVALID_DATE: &str = "Invalid Date";

fn currency_symbol(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "\u{FFE5}",
        Locale::En => "\u{00A5}",
    }
}

/// Yen amount with no fraction digits, rounded half away from zero.
///
/// The sign follows the input, so amounts that round to zero from below
/// keep their minus sign.
pub fn format_price(price: f64, locale: Locale) -> String {
    let symbol = currency_symbol(locale);
    if price.is_nan() {
        return format!("{}NaN", symbol);
    }
    if price.is_infinite() {
        let sign = if price < 0.0 { "-" } else { "" };
        return format!("{}{}\u{221E}", sign, symbol);
    }

    let rounded = price.round();
    let sign = if price.is_sign_negative() { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{}{}{}", sign, symbol, group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Long-form calendar date, e.g. `2024年1月1日` or `January 1, 2024`.
pub fn format_date(s: &str, locale: Locale) -> String {
    let Some(date) = parse_date(s) else {
        return INVALID_DATE.to_string();
    };
    match locale {
        Locale::Ja => date.format("%Y年%-m月%-d日").to_string(),
        Locale::En => date.format("%B %-d, %Y").to_string(),
    }
}

/// First 100 characters followed by `...` when the description is longer.
pub fn truncate_description(description: &str) -> String {
    let limit = display::DESCRIPTION_PREVIEW_CHARS;
    match description.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{}", &description[..cut], display::ELLIPSIS),
        None => description.to_string(),
    }
}

pub fn stock_label(stock: i64, locale: Locale) -> String {
    if stock <= 0 {
        return Message::OutOfStock.text(locale).to_string();
    }
    match locale {
        Locale::Ja => format!("{}個", stock),
        Locale::En => format!("{} in stock", stock),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_ja() {
        assert_eq!(format_price(0.0, Locale::Ja), "￥0");
        assert_eq!(format_price(100.0, Locale::Ja), "￥100");
        assert_eq!(format_price(1000.0, Locale::Ja), "￥1,000");
        assert_eq!(format_price(1234567.0, Locale::Ja), "￥1,234,567");
        assert_eq!(format_price(-2500.0, Locale::Ja), "-￥2,500");
    }

    #[test]
    fn test_format_price_rounds_half_away_from_zero() {
        assert_eq!(format_price(1999.5, Locale::Ja), "￥2,000");
        assert_eq!(format_price(1999.4, Locale::Ja), "￥1,999");
        assert_eq!(format_price(-0.4, Locale::Ja), "-￥0");
        assert_eq!(format_price(-0.0, Locale::Ja), "-￥0");
        assert_eq!(format_price(0.4, Locale::Ja), "￥0");
    }

    #[test]
    fn test_format_price_en_symbol() {
        assert_eq!(format_price(1500.0, Locale::En), "¥1,500");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-01", Locale::Ja), "2024年1月1日");
        assert_eq!(
            format_date("2024-11-23T08:00:00.000000Z", Locale::Ja),
            "2024年11月23日"
        );
        assert_eq!(format_date("2024-01-02", Locale::En), "January 2, 2024");
        assert_eq!(format_date("not a date", Locale::Ja), "Invalid Date");
    }

    #[test]
    fn test_truncate_description() {
        let short = "短い説明";
        assert_eq!(truncate_description(short), short);

        let exact = "a".repeat(100);
        assert_eq!(truncate_description(&exact), exact);

        let long = "あ".repeat(101);
        let truncated = truncate_description(&long);
        assert_eq!(truncated.chars().count(), 103);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_stock_label() {
        assert_eq!(stock_label(5, Locale::Ja), "5個");
        assert_eq!(stock_label(0, Locale::Ja), "在庫なし");
        assert_eq!(stock_label(-1, Locale::En), "Out of stock");
        assert_eq!(stock_label(3, Locale::En), "3 in stock");
    }
}
