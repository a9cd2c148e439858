//! Read split/merge decisions for ambiguous runs off the Sinhala spelling.

use crate::types::SplitDecision;

use super::tables::{AMBIGUOUS_THREE_CHAR, AMBIGUOUS_TWO_CHAR};

/// Find every ambiguous glyph pattern in `word`, in order of position.
///
/// The 3-char table is scanned before the 2-char table, so on equal start
/// positions 3-char decisions come first. Overlapping matches of different
/// patterns are all kept.
pub fn locate(word: &str) -> Vec<SplitDecision> {
    let mut decisions = Vec::new();

    for &(code, glyphs) in AMBIGUOUS_THREE_CHAR.iter().chain(AMBIGUOUS_TWO_CHAR) {
        for &(pattern, split) in glyphs.iter() {
            for (start, _) in word.match_indices(pattern) {
                decisions.push(SplitDecision {
                    code,
                    pattern,
                    start,
                    split,
                });
            }
        }
    }

    // stable: keeps table order on ties
    decisions.sort_by_key(|d| d.start);
    decisions
}
