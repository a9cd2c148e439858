use serde::{Deserialize, Serialize};
use std::fmt;

/// One written word paired with its phone transliteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Sinhala spelling, also the lexicon key
    pub word: String,
    /// Flat Latin transliteration, e.g. "nganawa:"
    pub transliteration: String,
    /// 1-based line number in both input files
    pub line: usize,
}

impl WordEntry {
    pub fn new(word: &str, transliteration: &str, line: usize) -> Self {
        Self {
            word: word.to_string(),
            transliteration: transliteration.to_string(),
            line,
        }
    }
}

/// Split/merge decision for one ambiguous glyph found in a Sinhala word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitDecision {
    /// Transliteration code this glyph resolves, e.g. "ng"
    pub code: &'static str,
    /// Glyph pattern that matched, e.g. "ඟ"
    pub pattern: &'static str,
    /// Byte offset of the match in the Sinhala word
    pub start: usize,
    /// True if the run is two separate phones
    pub split: bool,
}

/// Which segmenter produced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentationPath {
    Unambiguous,
    Ambiguous,
}

/// A single `word phone phone ...` line of the lexicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconLine {
    pub word: String,
    pub phones: Vec<String>,
}

impl LexiconLine {
    pub fn new(word: &str, phones: Vec<String>) -> Self {
        Self {
            word: word.to_string(),
            phones,
        }
    }
}

impl fmt::Display for LexiconLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.phones.join(" "))
    }
}

/// Per-entry segmentation failure. Never aborts the batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentError {
    #[error("empty word")]
    EmptyWord,

    #[error("empty transliteration")]
    EmptyTransliteration,

    #[error("found {runs} ambiguous run(s) in the transliteration but {decisions} glyph decision(s) in the word")]
    DecisionCountMismatch { decisions: usize, runs: usize },

    #[error("ambiguous run `{found}` at char {position} met a decision for `{expected}` (glyph `{pattern}`)")]
    DecisionMismatch {
        found: String,
        expected: &'static str,
        pattern: &'static str,
        position: usize,
    },
}
