use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

pub const PLACEHOLDER_AVATAR: &str = "/assets/icons/placeholder.svg";

/// Masks everything past the first `visible` characters. Emails keep their
/// domain and only the local part is masked.
pub fn mask_text(text: &str, visible: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    if let Some((local, domain)) = text.split_once('@') {
        let masked = mask_tail(local, visible);
        return if domain.is_empty() {
            masked
        } else {
            format!("{}@{}", masked, domain)
        };
    }

    let len = text.chars().count();
    if len <= visible {
        return "*".repeat(len);
    }
    mask_tail(text, visible)
}

fn mask_tail(text: &str, visible: usize) -> String {
    let len = text.chars().count();
    let head: String = text.chars().take(visible).collect();
    format!("{}{}", head, "*".repeat(len.saturating_sub(visible)))
}

/// "Jane Mary Doe" -> "JMD"
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

/// Whole-unit currency amount with thousands separators, e.g. "$12,500".
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round().to_i64().unwrap_or(0);
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}{}{}", sign, symbol, grouped)
}

/// "2.5" -> "V2.5", "3" -> "V3.0". Blank versions have no badge.
pub fn version_badge(version: &str) -> Option<String> {
    let version = version.trim();
    if version.is_empty() {
        return None;
    }
    match version.parse::<f64>() {
        Ok(v) => Some(format!("V{:.1}", v)),
        Err(_) => Some(format!("V{}", version)),
    }
}
