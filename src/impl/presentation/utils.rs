/// Escapes text for interpolation into HTML content or attribute values.
pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Amounts as typed by the employee: no trailing `.0` on whole numbers.
pub(crate) fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(a) if a.fract() == 0.0 => format!("{} €", a as i64),
        Some(a) => format!("{:.2} €", a),
        None => String::new(),
    }
}
