//! HTML suppression: tags and embedded style/script blocks

use once_cell::sync::Lazy;
use regex::Regex;

/// `<tag attr="...` with the closing `>` not yet typed
static IN_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*$").unwrap());

static STYLE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<style[\s>]").unwrap());
static STYLE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</style\s*>").unwrap());
static SCRIPT_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<script[\s>]").unwrap());
static SCRIPT_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</script\s*>").unwrap());

/// Cursor inside a tag, or anywhere in an unclosed `<style>`/`<script>`
/// block. The block state lives in the whole document prefix, not the
/// current line, so CSS/JS bodies stay quiet on every line.
pub fn in_tag_or_embedded_block(line_before: &str, doc_before: &str) -> bool {
    IN_TAG.is_match(line_before)
        || in_unclosed_block(doc_before, &STYLE_OPEN, &STYLE_CLOSE)
        || in_unclosed_block(doc_before, &SCRIPT_OPEN, &SCRIPT_CLOSE)
}

/// More opens than closes in the prefix means the cursor sits inside the
/// block. Counting tags, not parsing: a quoted `</style>` inside script
/// text will fool it.
fn in_unclosed_block(doc_before: &str, open: &Regex, close: &Regex) -> bool {
    open.find_iter(doc_before).count() > close.find_iter(doc_before).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_tag() {
        assert!(in_tag_or_embedded_block("<di", ""));
        assert!(in_tag_or_embedded_block(r#"<div class="co"#, ""));
        assert!(in_tag_or_embedded_block("text </sp", "text "));
    }

    #[test]
    fn test_outside_tag() {
        assert!(!in_tag_or_embedded_block("The ca", "The ca"));
        assert!(!in_tag_or_embedded_block("<p>som", "<p>som"));
    }

    #[test]
    fn test_unclosed_style_block() {
        let doc = "<html>\n<style>\n  .foo { co";
        assert!(in_tag_or_embedded_block("  .foo { co", doc));
    }

    #[test]
    fn test_closed_style_block() {
        let doc = "<style>\n.foo {}\n</style>\n<p>te";
        assert!(!in_tag_or_embedded_block("<p>te", doc));
    }

    #[test]
    fn test_unclosed_script_block() {
        let doc = "<script type=\"module\">\nlet co";
        assert!(in_tag_or_embedded_block("let co", doc));
    }

    #[test]
    fn test_case_insensitive_tags() {
        let doc = "<STYLE>\nbody { co";
        assert!(in_tag_or_embedded_block("body { co", doc));
    }

    #[test]
    fn test_reopened_block_counts() {
        let doc = "<style>a{}</style>\n<style>\nb { co";
        assert!(in_tag_or_embedded_block("b { co", doc));
    }
}
