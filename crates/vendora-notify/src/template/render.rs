//! Placeholder substitution over the closed token set.
//!
//! Not a general templating engine: the token list is fixed by the
//! template registry. A token whose metadata field is absent renders as
//! an empty string rather than erroring or leaving `{token}` in the
//! output (lenient-fill policy).

use vendora_entity::NotificationMetadata;

/// The closed set of placeholder tokens templates may use.
pub const TOKENS: [&str; 6] = [
    "productName",
    "vendorName",
    "storeName",
    "userName",
    "orderId",
    "amount",
];

/// Substitute every known token in `template` with its metadata value.
///
/// Single pass over the template: substituted values are emitted
/// verbatim and never re-scanned, so a value that happens to contain
/// `{token}` text stays literal.
pub fn render(template: &str, metadata: &NotificationMetadata) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let brace = &rest[start..];
        let Some(end) = brace.find('}') else {
            out.push_str(brace);
            return out;
        };
        let token = &brace[1..end];
        if TOKENS.contains(&token) {
            out.push_str(&token_value(token, metadata));
        } else {
            // Unknown brace runs pass through untouched.
            out.push_str(&brace[..=end]);
        }
        rest = &brace[end + 1..];
    }
    out.push_str(rest);
    out
}

fn token_value(token: &str, metadata: &NotificationMetadata) -> String {
    match token {
        "productName" => metadata.product_name.clone().unwrap_or_default(),
        "vendorName" => metadata.vendor_name.clone().unwrap_or_default(),
        "storeName" => metadata.store_name.clone().unwrap_or_default(),
        "userName" => metadata.user_name.clone().unwrap_or_default(),
        "orderId" => metadata.order_id.clone().unwrap_or_default(),
        "amount" => metadata.amount.map(format_amount).unwrap_or_default(),
        // TOKENS is the only caller input.
        _ => String::new(),
    }
}

/// Format a monetary amount with thousands separators.
///
/// Whole amounts render without decimals ("1,234,567"); fractional
/// amounts keep two places ("1,299.50").
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u128;
    let whole = cents / 100;
    let frac = (cents % 100) as u32;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if frac != 0 {
        out.push_str(&format!(".{frac:02}"));
    }
    out
}
