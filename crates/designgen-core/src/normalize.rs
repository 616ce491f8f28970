//! Completion normalization — digs the HTML document out of whatever a model
//! actually returned.
//!
//! Models wrap output in markdown fences, preambles ("Here is your page:"),
//! and trailing commentary despite being told not to. Extraction is a fixed
//! ladder of narrowing heuristics; the first match wins:
//!
//! 1. fenced ```` ```html ```` block
//! 2. first `<html` through last `</html>`
//! 3. first `<!DOCTYPE` to the end
//! 4. the trimmed text unchanged

/// Extract the HTML payload from a raw completion.
///
/// Never fails: when no HTML markers are present the trimmed input comes
/// back as-is, so callers always have something to render.
pub fn extract_html(raw: &str) -> String {
    // 1. Fenced block labeled html. Requires a closing fence; an unclosed
    //    fence falls through to the structural rules.
    if let Some(start) = raw.find("```html") {
        let inner = &raw[start + "```html".len()..];
        let inner = inner.strip_prefix('\n').unwrap_or(inner);
        if let Some(end) = inner.find("```") {
            return inner[..end].trim().to_string();
        }
    }

    // 2. First <html ... last </html>, inclusive. The last closing tag wins
    //    so documents quoting HTML inside themselves stay whole.
    if let (Some(start), Some(close)) = (raw.find("<html"), raw.rfind("</html>")) {
        let end = close + "</html>".len();
        if end > start {
            return raw[start..end].trim().to_string();
        }
    }

    // 3. From <!DOCTYPE to the end.
    if let Some(start) = raw.find("<!DOCTYPE") {
        return raw[start..].trim().to_string();
    }

    // 4. No markers at all.
    raw.trim().to_string()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_block_extraction() {
        let raw = "こちらが生成したHTMLです:\n```html\n<!DOCTYPE html>\n<html><body>hi</body></html>\n```\n何か質問があればどうぞ。";
        assert_eq!(
            extract_html(raw),
            "<!DOCTYPE html>\n<html><body>hi</body></html>"
        );
    }

    #[test]
    fn test_fenced_block_without_newline_after_label() {
        let raw = "```html<p>inline</p>```";
        assert_eq!(extract_html(raw), "<p>inline</p>");
    }

    #[test]
    fn test_unclosed_fence_falls_through() {
        let raw = "```html\n<html><body>page</body></html>";
        // No closing fence — the structural rule picks up the document.
        assert_eq!(extract_html(raw), "<html><body>page</body></html>");
    }

    #[test]
    fn test_fence_takes_precedence_over_tags() {
        let raw = "<html>outside</html>\n```html\n<html>inside</html>\n```";
        assert_eq!(extract_html(raw), "<html>inside</html>");
    }

    #[test]
    fn test_html_tags_with_surrounding_prose() {
        let raw = "Sure! Here you go:\n<html lang=\"ja\"><body>content</body></html>\nLet me know.";
        assert_eq!(
            extract_html(raw),
            "<html lang=\"ja\"><body>content</body></html>"
        );
    }

    #[test]
    fn test_last_closing_tag_wins() {
        let raw = "<html><body><pre>&lt;/html&gt; is an end tag</pre></html> text </html>";
        let extracted = extract_html(raw);
        assert!(extracted.ends_with("</html>"));
        assert!(extracted.contains("text"));
    }

    #[test]
    fn test_unfenced_document_loses_doctype() {
        // Rule 2 fires before rule 3, so an unfenced full document starts at
        // the <html tag. Long-standing behavior the preview relies on.
        let raw = "<!DOCTYPE html>\n<html><body>x</body></html>";
        assert_eq!(extract_html(raw), "<html><body>x</body></html>");
    }

    #[test]
    fn test_doctype_without_html_tag() {
        let raw = "preamble\n<!DOCTYPE svg>\n<svg></svg>";
        assert_eq!(extract_html(raw), "<!DOCTYPE svg>\n<svg></svg>");
    }

    #[test]
    fn test_plain_text_passes_through_trimmed() {
        let raw = "  ただのテキストです。HTMLはありません。  \n";
        assert_eq!(extract_html(raw), "ただのテキストです。HTMLはありません。");
    }

    #[test]
    fn test_reversed_tags_fall_through() {
        // </html> before <html — slicing would be nonsense, so the ladder
        // continues to the remaining rules.
        let raw = "</html> garbage <html";
        assert_eq!(extract_html(raw), "</html> garbage <html");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_html(""), "");
        assert_eq!(extract_html("   \n  "), "");
    }
}
