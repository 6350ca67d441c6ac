use super::number::MISSING;

pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

pub fn or_missing(value: Option<&str>) -> String {
    value.unwrap_or(MISSING).to_string()
}

pub fn join_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        MISSING.to_string()
    } else {
        tags.join(",")
    }
}

/// Cut `text` to at most `width` characters, marking the cut with `ellipsis`.
pub fn truncate(text: &str, width: usize, ellipsis: &str) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(ellipsis.chars().count());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ellipsis);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("claude-sonnet-4", 20, "…"), "claude-sonnet-4");
        assert_eq!(truncate("claude-sonnet-4", 8, "…"), "claude-…");
        assert_eq!(truncate("claude-sonnet-4", 8, "~"), "claude-~");
    }

    #[test]
    fn test_join_tags() {
        assert_eq!(join_tags(&[]), "-");
        assert_eq!(join_tags(&["text".to_string(), "image".to_string()]), "text,image");
    }
}
