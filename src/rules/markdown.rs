//! Markdown suppression: link targets

use once_cell::sync::Lazy;
use regex::Regex;

/// `[text](partial-target` with the closing paren not yet typed
static LINK_TARGET: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]*\]\([^)]*$").unwrap());

/// Cursor inside the `(...)` target of a markdown link
pub fn in_link_target(line_before: &str) -> bool {
    LINK_TARGET.is_match(line_before)
}
