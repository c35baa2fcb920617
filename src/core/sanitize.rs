// src/core/sanitize.rs

/// Whitespace in scraped cells, including the non-breaking space (U+00A0)
/// the site pads its cells with.
#[inline]
pub fn is_ws(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{a0}'
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if is_ws(ch) {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Trim trailing whitespace only.
pub fn trim_end_ws(s: &str) -> &str {
    s.trim_end_matches(is_ws)
}

/// `None` for text that is empty once whitespace is gone.
pub fn non_blank(s: String) -> Option<String> {
    if s.chars().all(is_ws) { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_nbsp() {
        assert_eq!(normalize_ws("\u{a0} Tulare\u{a0}\u{a0}County  \n"), "Tulare County");
        assert_eq!(normalize_ws("   "), "");
    }

    #[test]
    fn trim_end_keeps_leading() {
        assert_eq!(trim_end_ws("  Road 208 \u{a0}\n"), "  Road 208");
    }

    #[test]
    fn non_blank_rejects_padding() {
        assert_eq!(non_blank(s!("\u{a0} ")), None);
        assert_eq!(non_blank(s!("x")), Some(s!("x")));
    }
}
