//! Display formatting for catalog fields.

pub const NOT_AVAILABLE: &str = "N/A";

/// `148` → `"2h 28m"`. Zero or unknown runtimes are `N/A`.
pub fn runtime(minutes: Option<u32>) -> String {
    match minutes {
        Some(minutes) if minutes > 0 => format!("{}h {}m", minutes / 60, minutes % 60),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Whole US dollars with thousands separators. Zero means unknown.
pub fn currency(amount: Option<u64>) -> String {
    match amount {
        Some(amount) if amount > 0 => format!("${}", group_thousands(amount)),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Year part of an ISO date.
pub fn year(release_date: Option<&str>) -> String {
    release_date
        .and_then(|date| date.split('-').next())
        .filter(|year| year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// One decimal place; missing or zero ratings are `N/A`.
pub fn rating(vote_average: Option<f64>) -> String {
    match vote_average {
        Some(value) if value > 0.0 && value.is_finite() => format!("{:.1}", value),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
