//! `invoicedesk-currency` — display currency lookup.
//!
//! A pure code-to-symbol mapping consumed by display code, plus the fixed
//! selector list. Not a money type; amounts elsewhere are plain numbers.

use serde::Serialize;

/// One entry of the currency selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyOption {
    pub code: &'static str,
    pub label: &'static str,
}

/// Selector entries, in fixed declaration order.
pub const CURRENCY_OPTIONS: &[CurrencyOption] = &[
    CurrencyOption { code: "USD", label: "USD - $" },
    CurrencyOption { code: "EUR", label: "EUR - €" },
    CurrencyOption { code: "BDT", label: "BDT - ৳" },
    CurrencyOption { code: "INR", label: "INR - ₹" },
    CurrencyOption { code: "GBP", label: "GBP - £" },
];

/// Display symbol for a currency code.
///
/// Total: unknown codes (and the empty string) fall back to `"$"`.
pub fn symbol_for(code: &str) -> &'static str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "BDT" => "৳",
        "GBP" => "£",
        "INR" => "₹",
        _ => "$",
    }
}
