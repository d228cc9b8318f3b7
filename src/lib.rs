//! Lexisense - context-aware dictionary word completion engine
//!
//! Suggests dictionary and user-defined words beginning with the typed
//! letters, honoring the syntactic context of the file type: prose
//! markdown, LaTeX, HTML, and the comment/string regions of source code.
//!
//! # Architecture
//!
//! ```text
//! CLI -> Engine -> rules (per document kind)
//!              |
//!              +-> WordIndex (first-letter buckets)
//!              +-> DictionarySources (built-in + user word lists)
//! ```
//!
//! A completion request is synchronous and stateless: the engine derives
//! the cursor context from raw text, applies the kind's suppression rule,
//! and reads the currently published index. Rebuilds construct a complete
//! new index and swap it in, so readers never observe a partial one.

pub mod config;
pub mod context;
pub mod index;
pub mod loader;
pub mod rules;
pub mod types;
pub mod watch;

// Re-export main types
pub use config::{Config, ConfigError};
pub use context::{parse_context, CursorContext};
pub use index::WordIndex;
pub use loader::{default_user_dict_path, ensure_user_dict, DictionaryError, DictionarySources};
pub use types::{CompletionItem, CompletionResult, DocumentKind, Position, SourceLanguage};

use log::info;
use std::path::Path;
use std::sync::Arc;

/// Characters after the cursor that already separate the inserted word,
/// so no trailing space is added before them
const TRAILING_SEPARATORS: [char; 7] = [',', '.', ':', ';', '?', '!', '-'];

/// Main completion engine
#[derive(Debug)]
pub struct Engine {
    /// Word sources, kept for reloads
    sources: DictionarySources,

    /// Published index; replaced wholesale on rebuild
    index: Arc<WordIndex>,

    /// Configuration snapshot
    config: Config,

    /// Maximum completions to return (0 = unlimited)
    max_completions: usize,
}

impl Engine {
    /// Create an engine from the built-in word list path.
    ///
    /// The built-in list is mandatory; user sources named by the
    /// configuration degrade to empty contributions when absent.
    pub fn new(builtin_words: &Path, config: Config) -> Result<Self, DictionaryError> {
        let sources = DictionarySources::load(builtin_words, &config)?;
        Ok(Self::with_sources(sources, config))
    }

    /// Create an engine with pre-loaded sources
    pub fn with_sources(sources: DictionarySources, config: Config) -> Self {
        let index = Arc::new(WordIndex::build(&sources.builtin, &sources.user));
        Self {
            sources,
            index,
            config,
            max_completions: 0,
        }
    }

    /// Set the maximum number of completions (0 = unlimited)
    pub fn with_max_completions(mut self, max: usize) -> Self {
        self.max_completions = max;
        self
    }

    /// Rebuild the index from the in-memory sources and publish it.
    ///
    /// The new index is fully constructed before the swap; a concurrent
    /// reader holding the old `Arc` keeps a complete index either way.
    pub fn rebuild(&mut self) {
        let index = WordIndex::build(&self.sources.builtin, &self.sources.user);
        self.index = Arc::new(index);
        info!("Rebuilt word index: {} words", self.index.word_count());
    }

    /// Re-read every word source from disk, then rebuild
    pub fn reload(&mut self) -> Result<(), DictionaryError> {
        self.sources.reload(&self.config)?;
        self.rebuild();
        Ok(())
    }

    /// Get completions at a cursor position (1-based line/column)
    pub fn complete(
        &self,
        source: &str,
        line: u32,
        column: u32,
        kind: DocumentKind,
    ) -> CompletionResult {
        let ctx = parse_context(source, line, column, kind);
        self.complete_with_context(&ctx, source)
    }

    /// Get completions with a pre-parsed context
    pub fn complete_with_context(&self, ctx: &CursorContext, source: &str) -> CompletionResult {
        if ctx.prefix_len() < self.config.least_num_of_chars {
            return CompletionResult::empty();
        }

        if matches!(ctx.kind, DocumentKind::Source(_)) && !self.config.programming_language {
            return CompletionResult::empty();
        }

        if rules::should_suppress(ctx) {
            return CompletionResult::empty();
        }

        let first_letter = match ctx.first_letter() {
            Some(c) => c,
            None => return CompletionResult::empty(),
        };

        let needs_space = self.config.add_space_after_completion
            && context::char_after_cursor(source, ctx.line, ctx.column)
                .map_or(true, |c| !c.is_whitespace() && !TRAILING_SEPARATORS.contains(&c));

        let mut items: Vec<CompletionItem> = self
            .index
            .lookup(first_letter)
            .into_iter()
            .map(|word| {
                let item = CompletionItem::new(word).with_detail("Dictionary word");
                if needs_space {
                    item.with_trailing_space()
                } else {
                    item
                }
            })
            .collect();

        if self.max_completions > 0 {
            items.truncate(self.max_completions);
        }

        CompletionResult::new(items)
    }

    /// Get the published index
    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    /// Get the configuration snapshot
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get statistics
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            words: self.index.word_count(),
            populated_buckets: self.index.populated_buckets(),
            user_sources: self.sources.user_source_count(),
        }
    }
}

/// Engine statistics
#[derive(Debug, Clone)]
pub struct EngineStats {
    pub words: usize,
    pub populated_buckets: usize,
    pub user_sources: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(words: &[&str], config: Config) -> Engine {
        let builtin = words.iter().map(|w| w.to_string()).collect();
        Engine::with_sources(DictionarySources::from_lists(builtin, Vec::new()), config)
    }

    #[test]
    fn test_basic_completion() {
        let engine = engine_with(&["cat", "car", "dog"], Config::default());
        let result = engine.complete("The ca", 1, 7, DocumentKind::Markdown);

        let labels: Vec<&str> = result.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["cat", "car"]);
    }

    #[test]
    fn test_capitalized_trigger_relabels() {
        let engine = engine_with(&["cat", "Car"], Config::default());
        let result = engine.complete("The Ca", 1, 7, DocumentKind::Markdown);

        let labels: Vec<&str> = result.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Cat", "Car"]);
    }

    #[test]
    fn test_threshold_suppresses_everywhere() {
        let config = Config {
            least_num_of_chars: 3,
            programming_language: true,
            ..Config::default()
        };
        let engine = engine_with(&["cat"], config);

        for kind in [
            DocumentKind::Markdown,
            DocumentKind::Latex,
            DocumentKind::Html,
            DocumentKind::Source(SourceLanguage::JavaScript),
        ] {
            assert!(engine.complete("ca", 1, 3, kind).is_empty());
        }
    }

    #[test]
    fn test_no_word_before_cursor() {
        let engine = engine_with(&["cat"], Config::default());
        assert!(engine.complete("", 1, 1, DocumentKind::Markdown).is_empty());
        assert!(engine
            .complete("hello ", 1, 7, DocumentKind::Markdown)
            .is_empty());
    }

    #[test]
    fn test_numeric_prefix_finds_no_bucket() {
        let engine = engine_with(&["cat"], Config::default());
        assert!(engine
            .complete("version 42", 1, 11, DocumentKind::Markdown)
            .is_empty());
    }

    #[test]
    fn test_source_kinds_gated_by_config() {
        let engine = engine_with(&["comment"], Config::default());
        let kind = DocumentKind::Source(SourceLanguage::JavaScript);
        assert!(engine.complete("// comme", 1, 9, kind).is_empty());

        let config = Config {
            programming_language: true,
            ..Config::default()
        };
        let engine = engine_with(&["comment"], config);
        assert!(!engine.complete("// comme", 1, 9, kind).is_empty());
    }

    #[test]
    fn test_suppression_yields_empty() {
        let engine = engine_with(&["partial"], Config::default());
        assert!(engine
            .complete("See [my link](partial", 1, 22, DocumentKind::Markdown)
            .is_empty());
    }

    #[test]
    fn test_trailing_space_respects_separators() {
        let config = Config {
            add_space_after_completion: true,
            ..Config::default()
        };
        let engine = engine_with(&["cat"], config);

        // Next char is a word char: space appended to insert text only
        let result = engine.complete("The cax", 1, 7, DocumentKind::Markdown);
        assert_eq!(result.items[0].insert_text, "cat ");
        assert_eq!(result.items[0].label, "cat");
        assert!(result.items[0].cleanup_redundant_space);

        // Next char is punctuation: no space
        let result = engine.complete("The ca.", 1, 7, DocumentKind::Markdown);
        assert_eq!(result.items[0].insert_text, "cat");

        // Next char is whitespace: no space
        let result = engine.complete("The ca more", 1, 7, DocumentKind::Markdown);
        assert_eq!(result.items[0].insert_text, "cat");

        // End of line: nothing separates the word from what follows
        let result = engine.complete("The ca", 1, 7, DocumentKind::Markdown);
        assert_eq!(result.items[0].insert_text, "cat ");
    }

    #[test]
    fn test_max_completions_truncates() {
        let engine =
            engine_with(&["ca", "cb", "cc", "cd"], Config::default()).with_max_completions(2);
        let result = engine.complete("The c", 1, 6, DocumentKind::Markdown);
        assert_eq!(result.items.len(), 2);
    }

    #[test]
    fn test_rebuild_swaps_index() {
        let mut engine = engine_with(&["cat"], Config::default());
        let before = Arc::clone(&engine.index);

        engine.sources.builtin.push("cab".to_string());
        engine.rebuild();

        // Old handle still sees the old index in full
        assert_eq!(before.word_count(), 1);
        assert_eq!(engine.index.word_count(), 2);
    }

    #[test]
    fn test_stats() {
        let engine = engine_with(&["cat", "dog"], Config::default());
        let stats = engine.stats();
        assert_eq!(stats.words, 2);
        assert_eq!(stats.populated_buckets, 2);
        assert_eq!(stats.user_sources, 0);
    }
}
