/// Current time as an ISO-8601 string (browser clock).
pub(crate) fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

pub(crate) fn page_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

/// Truncate to at most `max` characters without splitting a char.
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_short_input_unchanged() {
        assert_eq!(truncate_chars("hello", 160), "hello");
    }

    #[test]
    fn test_truncate_chars_counts_chars_not_bytes() {
        // 3 chars, 5 bytes; a byte-based cut at 4 would split the second 'é'.
        assert_eq!(truncate_chars("héé", 2), "hé");
    }

    #[test]
    fn test_truncate_chars_exact_boundary() {
        let s = "x".repeat(160);
        assert_eq!(truncate_chars(&s, 160), s);
        assert_eq!(truncate_chars(&format!("{s}y"), 160), s);
    }
}
