//! Minimum word error rate from Kaldi scoring output.
//!
//! Kaldi's `best_wer`/`wer_*` files hold lines like
//! `%WER 12.34 [ 123 / 1000, 10 ins, 20 del, 93 sub ]`.

use std::path::Path;

use anyhow::{Context, Result};

/// The lowest `%WER` value found and the line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct WerScore {
    pub wer: f64,
    pub line: String,
}

/// Parse the WER value of a `%WER` line.
pub fn parse_wer_line(line: &str) -> Option<f64> {
    if !line.starts_with("%WER") {
        return None;
    }
    line.split(' ').nth(1)?.trim().parse().ok()
}

/// Lowest WER over all `%WER` lines in `text`, or `None` if there are none.
pub fn best_wer(text: &str) -> Option<WerScore> {
    let mut best: Option<WerScore> = None;
    for line in text.lines() {
        if !line.starts_with("%WER") {
            continue;
        }
        let Some(wer) = parse_wer_line(line) else {
            log::warn!("Unparseable WER line: {}", line);
            continue;
        };
        if best.as_ref().map_or(true, |b| wer < b.wer) {
            best = Some(WerScore {
                wer,
                line: line.trim_end().to_string(),
            });
        }
    }
    best
}

/// Read `path` and return its lowest WER.
pub fn best_wer_in_file(path: &Path) -> Result<Option<WerScore>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read WER file {}", path.display()))?;
    Ok(best_wer(&text))
}
