use crate::domain::grid::GridError;

pub fn format_price(value: f64) -> String {
    format!("{value:.2}")
}

pub fn format_change(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.2}")
    } else {
        format!("{value:.2}")
    }
}

pub fn format_change_percentage(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.2}%")
    } else {
        format!("{value:.2}%")
    }
}

pub fn format_number_with_commas(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rest, None),
    };

    let mut grouped = String::new();
    for (idx, digit) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

pub fn format_volume(value: i64) -> String {
    format_number_with_commas(value as f64, 0)
}

pub fn format_amount(value: f64) -> String {
    format_number_with_commas(value, 2)
}

pub fn format_market_cap(value: f64) -> String {
    format!("{:.2}亿", value / 100_000_000.0)
}

/// CSS color for a signed change value: red up, green down, slate flat.
pub fn change_color(value: f64) -> &'static str {
    if value > 0.0 {
        "#dc2626"
    } else if value < 0.0 {
        "#16a34a"
    } else {
        "#475569"
    }
}

/// Renders a derived ratio as a signed percentage, or the row-level
/// placeholder when the metric could not be computed.
pub fn format_ratio_or_placeholder(result: Result<f64, GridError>) -> String {
    match result {
        Ok(ratio) => format_change_percentage(ratio * 100.0),
        Err(_) => "—".to_string(),
    }
}
