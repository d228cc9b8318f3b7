//! First-letter word index
//!
//! Words are bucketed by the lowercase of their first character. A bucket
//! exists for every ASCII letter even when empty. Rebuilds construct a
//! complete new index; the engine publishes it by swapping an `Arc`, so a
//! request sees either the old index or the new one, never a mix.

use std::collections::{HashMap, HashSet};

/// Index of dictionary words, keyed by lowercase first letter
#[derive(Debug, Default)]
pub struct WordIndex {
    buckets: HashMap<char, Vec<String>>,
    word_count: usize,
}

impl WordIndex {
    /// Build an index from the built-in word list and user sources,
    /// merged in order.
    ///
    /// Each source is sanitized first (affix-count header, `/flag`
    /// suffixes, `//` comments, blank lines). Duplicates across sources
    /// are dropped, keeping the first occurrence. A word whose first
    /// character is not an ASCII letter has no bucket and is dropped.
    pub fn build(builtin: &[String], user_sources: &[Vec<String>]) -> Self {
        let mut buckets: HashMap<char, Vec<String>> =
            ('a'..='z').map(|c| (c, Vec::new())).collect();
        let mut seen: HashSet<String> = HashSet::new();
        let mut word_count = 0;

        let sources = std::iter::once(builtin).chain(user_sources.iter().map(|s| s.as_slice()));
        for source in sources {
            for word in sanitize_source(source) {
                if seen.contains(&word) {
                    continue;
                }
                let key = match word.chars().next() {
                    Some(first) => first.to_ascii_lowercase(),
                    None => continue,
                };
                if let Some(bucket) = buckets.get_mut(&key) {
                    bucket.push(word.clone());
                    word_count += 1;
                }
                seen.insert(word);
            }
        }

        Self {
            buckets,
            word_count,
        }
    }

    /// Words for a trigger letter.
    ///
    /// A lowercase letter returns its bucket verbatim. An uppercase letter
    /// returns the lowercase bucket with each word's first character
    /// uppercased, derived on the fly. Anything else returns nothing.
    pub fn lookup(&self, letter: char) -> Vec<String> {
        if !letter.is_alphabetic() {
            return Vec::new();
        }

        let key = letter.to_ascii_lowercase();
        match self.buckets.get(&key) {
            Some(bucket) if letter.is_uppercase() => {
                bucket.iter().map(|w| capitalize_first(w)).collect()
            }
            Some(bucket) => bucket.clone(),
            None => Vec::new(),
        }
    }

    /// Total words across all buckets
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of buckets holding at least one word
    pub fn populated_buckets(&self) -> usize {
        self.buckets.values().filter(|b| !b.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

/// Apply the dictionary-file conventions to one source
///
/// - a purely numeric first line is an affix-count header, skipped
/// - `//` lines are inert annotations, skipped
/// - `/flags` suffixes are stripped, keeping the stem
/// - blank lines (and stems emptied by stripping) are skipped
fn sanitize_source(lines: &[String]) -> Vec<String> {
    let mut words = Vec::new();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if i == 0 && is_affix_count_header(line) {
            continue;
        }
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let stem = match line.find('/') {
            Some(pos) => &line[..pos],
            None => line,
        };
        if stem.is_empty() {
            continue;
        }
        words.push(stem.to_string());
    }

    words
}

fn is_affix_count_header(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_ascii_digit())
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
