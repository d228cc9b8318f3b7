//! Source-code gating: completion only inside comments and strings
//!
//! Delimiter counting over the raw text, not a lexer. Known to misfire
//! on pathological input (quote characters inside comments, comment
//! markers inside strings); that trade-off is deliberate for a
//! convenience feature whose worst failure is a missing or spurious
//! suggestion list.

use crate::types::SourceLanguage;

/// Whether the cursor sits inside a comment or string literal
pub fn in_comment_or_string(lang: SourceLanguage, line_before: &str, doc_before: &str) -> bool {
    match lang {
        SourceLanguage::JavaScript | SourceLanguage::TypeScript | SourceLanguage::C => {
            in_open_block_comment(doc_before)
                || line_before.contains("//")
                || in_open_quote(line_before, &['\'', '"'])
        }
        SourceLanguage::Python => {
            in_open_triple_quote(doc_before)
                || line_before.contains('#')
                || in_open_quote(line_before, &['\'', '"'])
        }
    }
}

/// `/*` earlier in the prefix with no matching `*/`
fn in_open_block_comment(doc_before: &str) -> bool {
    doc_before.matches("/*").count() > doc_before.matches("*/").count()
}

/// Unterminated `'''` or `"""` anywhere in the prefix. String-prefix
/// letters (`f`, `r`, `b`) sit outside the delimiter and need no special
/// handling.
fn in_open_triple_quote(doc_before: &str) -> bool {
    doc_before.matches("'''").count() % 2 == 1 || doc_before.matches("\"\"\"").count() % 2 == 1
}

/// Odd number of unescaped quote characters on the current line means a
/// string is still open at the cursor
fn in_open_quote(line_before: &str, quotes: &[char]) -> bool {
    quotes
        .iter()
        .any(|&q| count_unescaped(line_before, q) % 2 == 1)
}

fn count_unescaped(line: &str, quote: char) -> usize {
    let mut count = 0;
    let mut escaped = false;
    for c in line.chars() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            count += 1;
        }
    }
    count
}
