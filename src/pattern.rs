use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `<pre class="mermaid">...</pre>` blocks, with or without an
/// inner `<code>` wrapper. Capture layout: 1 = opening tag, 2..4 =
/// `<code>` / wrapped content / `</code>`, 5 = bare content, 6 =
/// closing tag. Unterminated blocks simply do not match.
pub static MERMAID_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?is)(<pre\s+class="mermaid"[^>]*>)\s*(?:(<code>)(.*?)(</code>)|(.*?))\s*(</pre>)"#,
    )
    .unwrap()
});

/// `<span class="placeholder-value ..." data-placeholder="NAME">VALUE</span>`
/// where VALUE is a flat text node. Capture 1 = name, 2 = value.
pub static PLACEHOLDER_SPAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)<span\s+class="placeholder-value[^"]*"\s+data-placeholder="([^"]+)"[^>]*>([^<]*)</span>"#,
    )
    .unwrap()
});

/// Same span with the two attributes in the opposite order; the
/// placeholder plugin emits both layouts.
pub static PLACEHOLDER_SPAN_ALT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)<span\s+data-placeholder="([^"]+)"\s+class="placeholder-value[^"]*"[^>]*>([^<]*)</span>"#,
    )
    .unwrap()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_pattern_matches_with_and_without_code_wrapper() {
        let wrapped = r#"<pre class="mermaid"><code>graph TD</code></pre>"#;
        let caps = MERMAID_BLOCK_RE.captures(wrapped).unwrap();
        assert_eq!(&caps[3], "graph TD");

        let bare = r#"<pre class="mermaid">graph TD</pre>"#;
        let caps = MERMAID_BLOCK_RE.captures(bare).unwrap();
        assert!(caps.get(3).is_none());
        assert_eq!(&caps[5], "graph TD");
    }

    #[test]
    fn block_pattern_ignores_unterminated_blocks() {
        let input = r#"<pre class="mermaid"><code>graph TD"#;
        assert!(MERMAID_BLOCK_RE.captures(input).is_none());
    }

    #[test]
    fn span_patterns_capture_name_then_value() {
        let primary = r#"<span class="placeholder-value md-input" data-placeholder="HOST">alpha</span>"#;
        let caps = PLACEHOLDER_SPAN_RE.captures(primary).unwrap();
        assert_eq!(&caps[1], "HOST");
        assert_eq!(&caps[2], "alpha");

        let alt = r#"<span data-placeholder="HOST" class="placeholder-value md-input">alpha</span>"#;
        let caps = PLACEHOLDER_SPAN_ALT_RE.captures(alt).unwrap();
        assert_eq!(&caps[1], "HOST");
        assert_eq!(&caps[2], "alpha");
    }

    #[test]
    fn span_patterns_reject_nested_markup_in_value() {
        let input = r#"<span class="placeholder-value" data-placeholder="X"><b>no</b></span>"#;
        assert!(PLACEHOLDER_SPAN_RE.captures(input).is_none());
    }
}
