//! Lexicon assembly: unambiguous pass, then ambiguous pass.
//!
//! Output order is fixed: the two Kaldi constants, every entry the
//! unambiguous segmenter resolved (input order), then every entry that
//! needed the Sinhala spelling (input order).

use serde::Serialize;

use crate::phones::{ambiguous, unambiguous};
use crate::types::{LexiconLine, SegmentError, SegmentationPath, WordEntry};

/// Entries Kaldi requires at the top of every lexicon.
pub const CONSTANT_LINES: [&str; 2] = ["<UNK> SPN", "<SIL> SIL"];

/// An entry that could not be segmented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryFailure {
    pub line: usize,
    pub word: String,
    pub transliteration: String,
    #[serde(serialize_with = "serialize_display")]
    pub error: SegmentError,
}

/// A built lexicon, split by the segmenter that produced each line.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub unambiguous: Vec<LexiconLine>,
    pub ambiguous: Vec<LexiconLine>,
    pub failures: Vec<EntryFailure>,
}

impl Lexicon {
    /// Every lexicon line in output order, constants included.
    pub fn lines(&self) -> Vec<String> {
        CONSTANT_LINES
            .iter()
            .map(|s| s.to_string())
            .chain(self.entries().map(|(line, _)| line.to_string()))
            .collect()
    }

    /// Segmented entries in output order with the path that produced them.
    pub fn entries(&self) -> impl Iterator<Item = (&LexiconLine, SegmentationPath)> {
        self.unambiguous
            .iter()
            .map(|l| (l, SegmentationPath::Unambiguous))
            .chain(self.ambiguous.iter().map(|l| (l, SegmentationPath::Ambiguous)))
    }

    /// The lexicon file contents, one newline-terminated line each.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    pub fn entry_count(&self) -> usize {
        self.unambiguous.len() + self.ambiguous.len()
    }
}

/// Segment every entry and assemble the lexicon.
///
/// Failed entries are logged and collected; they never stop the batch.
pub fn build(entries: &[WordEntry]) -> Lexicon {
    let mut lexicon = Lexicon::default();
    let mut deferred: Vec<&WordEntry> = Vec::new();

    log::info!("Processing unambiguous splits ({} entries)", entries.len());
    for entry in entries {
        if entry.word.is_empty() {
            record_failure(&mut lexicon, entry, SegmentError::EmptyWord);
            continue;
        }
        if entry.transliteration.is_empty() {
            record_failure(&mut lexicon, entry, SegmentError::EmptyTransliteration);
            continue;
        }
        match unambiguous::segment(&entry.transliteration) {
            Some(phones) => lexicon
                .unambiguous
                .push(LexiconLine::new(&entry.word, phones)),
            None => deferred.push(entry),
        }
    }

    log::info!("Processing ambiguous splits ({} entries)", deferred.len());
    for entry in deferred {
        match ambiguous::segment_word(&entry.transliteration, &entry.word) {
            Ok(phones) => {
                log::debug!("{} -> {}", entry.transliteration, phones.join(" "));
                lexicon.ambiguous.push(LexiconLine::new(&entry.word, phones));
            }
            Err(e) => record_failure(&mut lexicon, entry, e),
        }
    }

    log::info!(
        "Combined {} unambiguous + {} ambiguous entries ({} failed)",
        lexicon.unambiguous.len(),
        lexicon.ambiguous.len(),
        lexicon.failures.len()
    );
    lexicon
}

fn record_failure(lexicon: &mut Lexicon, entry: &WordEntry, error: SegmentError) {
    log::warn!(
        "Skipping line {} ({} / {}): {}",
        entry.line,
        entry.word,
        entry.transliteration,
        error
    );
    lexicon.failures.push(EntryFailure {
        line: entry.line,
        word: entry.word.clone(),
        transliteration: entry.transliteration.clone(),
        error,
    });
}

fn serialize_display<S: serde::Serializer>(
    error: &SegmentError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}
