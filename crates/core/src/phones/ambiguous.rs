//! Segmentation of transliterations that contain ambiguous runs.
//!
//! Walks the transliteration with a cursor, trying at each position, in
//! order: ambiguous 3-char run, safe 3-char phone, ambiguous 2-char run,
//! safe 2-char phone, single character. Every ambiguous run consumes the
//! next decision from the locator and must agree with it on the code.

use crate::types::{SegmentError, SplitDecision};

use super::{locator, tables};

/// Segment `transliteration` using the glyphs of the Sinhala `word`.
pub fn segment_word(transliteration: &str, word: &str) -> Result<Vec<String>, SegmentError> {
    let decisions = locator::locate(word);
    segment(transliteration, &decisions)
}

/// Segment `transliteration`, resolving ambiguous runs from `decisions` in order.
pub fn segment(
    transliteration: &str,
    decisions: &[SplitDecision],
) -> Result<Vec<String>, SegmentError> {
    let chars: Vec<char> = transliteration.chars().collect();
    let mut queue = DecisionQueue::new(decisions);
    let mut phones = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if let Some(run) = window(&chars, i, 3) {
            if tables::is_ambiguous_three(&run) {
                let split = queue.take(&run, i)?;
                push_run(&mut phones, run, split);
                i += 3;
                continue;
            }
            if tables::is_safe_three(&run) {
                phones.push(run);
                i += 3;
                continue;
            }
        }

        if let Some(run) = window(&chars, i, 2) {
            if tables::is_ambiguous_two(&run) {
                let split = queue.take(&run, i)?;
                push_run(&mut phones, run, split);
                i += 2;
                continue;
            }
            if tables::is_safe_two(&run) {
                phones.push(run);
                i += 2;
                continue;
            }
        }

        phones.push(chars[i].to_string());
        i += 1;
    }

    queue.finish()?;
    Ok(phones)
}

/// The `len` characters starting at `start`, if that many remain.
fn window(chars: &[char], start: usize, len: usize) -> Option<String> {
    chars.get(start..start + len).map(|w| w.iter().collect())
}

/// Emit an ambiguous run: whole, or first char + the rest.
fn push_run(phones: &mut Vec<String>, run: String, split: bool) {
    if !split {
        phones.push(run);
        return;
    }
    let mut chars = run.chars();
    if let Some(first) = chars.next() {
        phones.push(first.to_string());
    }
    let rest: String = chars.collect();
    if !rest.is_empty() {
        phones.push(rest);
    }
}

/// Positional consumer of locator decisions with code checking.
struct DecisionQueue<'a> {
    decisions: &'a [SplitDecision],
    runs: usize,
}

impl<'a> DecisionQueue<'a> {
    fn new(decisions: &'a [SplitDecision]) -> Self {
        Self { decisions, runs: 0 }
    }

    /// Consume the decision for the run `code` found at char `position`.
    ///
    /// Once decisions run out the walk keeps counting runs so the final
    /// count error reports the full number.
    fn take(&mut self, code: &str, position: usize) -> Result<bool, SegmentError> {
        let index = self.runs;
        self.runs += 1;
        let Some(decision) = self.decisions.get(index) else {
            return Ok(false);
        };
        if decision.code != code {
            return Err(SegmentError::DecisionMismatch {
                found: code.to_string(),
                expected: decision.code,
                pattern: decision.pattern,
                position,
            });
        }
        Ok(decision.split)
    }

    fn finish(&self) -> Result<(), SegmentError> {
        if self.runs != self.decisions.len() {
            return Err(SegmentError::DecisionCountMismatch {
                decisions: self.decisions.len(),
                runs: self.runs,
            });
        }
        Ok(())
    }
}
