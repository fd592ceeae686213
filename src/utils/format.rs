/// Format a price for display: `$` prefix, two decimals, thousands separators
///
/// Negative values carry the sign ahead of the `$`, e.g. `-$1,234.50`.
pub fn format_price(price: f64) -> String {
    let fixed = format!("{:.2}", price.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_thousands(whole);

    if price < 0.0 {
        format!("-${}.{}", grouped, fraction)
    } else {
        format!("${}.{}", grouped, fraction)
    }
}

/// Insert comma separators into a run of digits
fn group_thousands(digits: &str) -> String {
    digits
        .chars()
        .rev()
        .collect::<String>()
        .as_bytes()
        .chunks(3)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect()
}
