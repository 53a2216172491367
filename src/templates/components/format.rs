/// Shortest text for a number: 500000 -> "500000", 2.5 -> "2.5".
pub fn plain_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// US-style grouping with at most three decimals: 1234567.5 -> "1,234,567.5".
pub fn grouped_number(value: f64) -> String {
    if !value.is_finite() {
        return plain_number(value);
    }

    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && (int_part != "0" || !frac.is_empty()) {
        "-"
    } else {
        ""
    };

    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

/// Bedrooms, bathrooms and the like: absent or zero shows "N/A".
pub fn count_or_na(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => plain_number(v),
        _ => "N/A".to_string(),
    }
}
