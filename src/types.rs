//! Core types for lexisense

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position in a document (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Language family of a source-code document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLanguage {
    JavaScript,
    TypeScript,
    Python,
    C,
}

/// Kind of document a completion request targets
///
/// A closed set: every kind the engine supports has a variant, and
/// dispatch happens by pattern match, so an unhandled kind cannot fall
/// through silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Markdown,
    Latex,
    Html,
    Source(SourceLanguage),
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(DocumentKind::Markdown),
            "latex" | "tex" => Ok(DocumentKind::Latex),
            "html" => Ok(DocumentKind::Html),
            "javascript" | "js" => Ok(DocumentKind::Source(SourceLanguage::JavaScript)),
            "typescript" | "ts" => Ok(DocumentKind::Source(SourceLanguage::TypeScript)),
            "python" | "py" => Ok(DocumentKind::Source(SourceLanguage::Python)),
            "c" => Ok(DocumentKind::Source(SourceLanguage::C)),
            _ => Err(format!("Unknown document kind: {}", s)),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::Markdown => "markdown",
            DocumentKind::Latex => "latex",
            DocumentKind::Html => "html",
            DocumentKind::Source(SourceLanguage::JavaScript) => "javascript",
            DocumentKind::Source(SourceLanguage::TypeScript) => "typescript",
            DocumentKind::Source(SourceLanguage::Python) => "python",
            DocumentKind::Source(SourceLanguage::C) => "c",
        };
        f.write_str(name)
    }
}

/// A completion item
///
/// `label` is what the editor shows; `insert_text` is what lands in the
/// document, which may carry a trailing space the label never shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionItem {
    /// Label shown in the completion list
    pub label: String,

    /// Text to insert
    pub insert_text: String,

    /// Short detail text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Advisory: after inserting, the host may delete one following space
    /// if the insertion produced a double space. No-op when impossible.
    #[serde(default)]
    pub cleanup_redundant_space: bool,
}

impl CompletionItem {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            insert_text: label.clone(),
            label,
            detail: None,
            cleanup_redundant_space: false,
        }
    }

    pub fn with_insert_text(mut self, text: impl Into<String>) -> Self {
        self.insert_text = text.into();
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Append a trailing space to the inserted text (not the label) and
    /// flag the item for the redundant-space cleanup.
    pub fn with_trailing_space(mut self) -> Self {
        self.insert_text.push(' ');
        self.cleanup_redundant_space = true;
        self
    }
}

/// Result of a completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResult {
    pub items: Vec<CompletionItem>,
}

impl CompletionResult {
    pub fn new(items: Vec<CompletionItem>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_item() {
        let item = CompletionItem::new("veritable").with_detail("Dictionary word");

        assert_eq!(item.label, "veritable");
        assert_eq!(item.insert_text, "veritable");
        assert!(!item.cleanup_redundant_space);
    }

    #[test]
    fn test_trailing_space_only_touches_insert_text() {
        let item = CompletionItem::new("cat").with_trailing_space();

        assert_eq!(item.label, "cat");
        assert_eq!(item.insert_text, "cat ");
        assert!(item.cleanup_redundant_space);
    }

    #[test]
    fn test_document_kind_from_str() {
        assert_eq!("markdown".parse(), Ok(DocumentKind::Markdown));
        assert_eq!("LaTeX".parse(), Ok(DocumentKind::Latex));
        assert_eq!(
            "python".parse(),
            Ok(DocumentKind::Source(SourceLanguage::Python))
        );
        assert!("fortran".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn test_document_kind_roundtrip() {
        for kind in [
            DocumentKind::Markdown,
            DocumentKind::Latex,
            DocumentKind::Html,
            DocumentKind::Source(SourceLanguage::JavaScript),
            DocumentKind::Source(SourceLanguage::C),
        ] {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    #[test]
    fn test_position() {
        let pos = Position::new(10, 5);
        assert_eq!(pos.line, 10);
        assert_eq!(pos.column, 5);
    }
}
