/// Placeholder for a missing value in every text output.
pub const MISSING: &str = "-";

/// Price per million tokens, at most four decimals, trailing zeros trimmed.
pub fn format_cost(cost: Option<f64>) -> String {
    match cost {
        Some(value) => trim_decimals(format!("{:.4}", value)),
        None => MISSING.to_string(),
    }
}

/// Token counts as `200K` / `1.05M`.
pub fn format_tokens(count: Option<u64>) -> String {
    match count {
        Some(n) if n >= 1_000_000 => format!("{}M", trim_decimals(format!("{:.2}", n as f64 / 1_000_000.0))),
        Some(n) if n >= 1_000 => format!("{}K", trim_decimals(format!("{:.1}", n as f64 / 1_000.0))),
        Some(n) => n.to_string(),
        None => MISSING.to_string(),
    }
}

/// Token counts with thousands separators, for the detail view.
pub fn format_tokens_exact(count: Option<u64>) -> String {
    let Some(n) = count else {
        return MISSING.to_string();
    };
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn trim_decimals(text: String) -> String {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cost() {
        assert_eq!(format_cost(Some(3.0)), "3");
        assert_eq!(format_cost(Some(0.075)), "0.075");
        assert_eq!(format_cost(Some(1.234567)), "1.2346");
        assert_eq!(format_cost(Some(0.0)), "0");
        assert_eq!(format_cost(None), "-");
    }

    #[test]
    fn test_format_tokens() {
        assert_eq!(format_tokens(Some(200_000)), "200K");
        assert_eq!(format_tokens(Some(8_192)), "8.2K");
        assert_eq!(format_tokens(Some(1_048_576)), "1.05M");
        assert_eq!(format_tokens(Some(2_000_000)), "2M");
        assert_eq!(format_tokens(Some(512)), "512");
        assert_eq!(format_tokens(None), "-");
    }

    #[test]
    fn test_format_tokens_exact() {
        assert_eq!(format_tokens_exact(Some(128_000)), "128,000");
        assert_eq!(format_tokens_exact(Some(999)), "999");
        assert_eq!(format_tokens_exact(Some(1_000_000)), "1,000,000");
    }
}
