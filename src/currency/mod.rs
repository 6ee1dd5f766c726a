//! Currency display helpers for card and diagram values. Formatting is
//! delegated here by the presentation layer; the aggregation code never
//! formats amounts itself.

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "CAD" => "CAD".into(),
        "AUD" => "A$".into(),
        "CHF" => "CHF".into(),
        _ => code.into(),
    }
}

/// Formats a number with thousands grouping, e.g. `12345.5` → `"12,345.50"`
/// at precision 2.
pub fn format_number(value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, value);
    if let Some(pos) = body.find('.') {
        let mut int_part = body[..pos].to_string();
        insert_grouping(&mut int_part);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        insert_grouping(&mut body);
    }
    body
}

/// Currency string for card display, e.g. `format_currency(12500.0, "USD", 0)`
/// → `"$12,500"`. Negative amounts keep a leading sign before the symbol.
pub fn format_currency(amount: f64, code: &str, precision: u8) -> String {
    let body = format_number(amount.abs(), precision);
    let symbol = symbol_for(code);
    if amount < 0.0 {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}

fn insert_grouping(int_part: &mut String) {
    let mut cleaned = int_part.replace(',', "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned);
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
