//! Cursor context extraction
//!
//! Everything here is derived per request from the raw document text and
//! never cached: the line prefix, the document prefix, and the partial
//! word immediately before the cursor.

use crate::types::DocumentKind;

/// Text context at the cursor for one completion request
#[derive(Debug, Clone)]
pub struct CursorContext {
    /// Declared kind of the document
    pub kind: DocumentKind,

    /// Current line from line start to the cursor
    pub line_before: String,

    /// Whole document from the start to the cursor
    pub doc_before: String,

    /// Partial word immediately before the cursor (empty when the cursor
    /// does not follow a word)
    pub word_before: String,

    /// Line number (1-based)
    pub line: u32,

    /// Column number (1-based)
    pub column: u32,
}

impl CursorContext {
    /// First character of the partial word, the trigger letter
    pub fn first_letter(&self) -> Option<char> {
        self.word_before.chars().next()
    }

    /// Length of the typed prefix in characters
    pub fn prefix_len(&self) -> usize {
        self.word_before.chars().count()
    }
}

/// Parse document text and derive the context at position (1-based
/// line/column, columns counted in characters)
pub fn parse_context(source: &str, line: u32, column: u32, kind: DocumentKind) -> CursorContext {
    let line_idx = (line as usize).saturating_sub(1);

    let mut doc_before = String::new();
    let mut line_before = String::new();
    for (i, l) in source.lines().enumerate() {
        if i < line_idx {
            doc_before.push_str(l);
            doc_before.push('\n');
        } else if i == line_idx {
            let col = (column as usize).saturating_sub(1);
            line_before = l.chars().take(col).collect();
            doc_before.push_str(&line_before);
        }
    }

    let word_before = extract_word_before(&line_before);

    CursorContext {
        kind,
        line_before,
        doc_before,
        word_before,
        line,
        column,
    }
}

/// Character immediately after the cursor, if any
pub fn char_after_cursor(source: &str, line: u32, column: u32) -> Option<char> {
    let line_idx = (line as usize).saturating_sub(1);
    let col = (column as usize).saturating_sub(1);
    source.lines().nth(line_idx)?.chars().nth(col)
}

/// Last run of word characters before the cursor: non-word characters
/// become spaces, then the final whitespace-separated token wins.
fn extract_word_before(line_before: &str) -> String {
    let cleaned: String = line_before
        .chars()
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .next_back()
        .unwrap_or("")
        .to_string()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
