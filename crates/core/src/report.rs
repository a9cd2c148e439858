//! JSON summary of a lexicon build.
//!
//! Records the inputs (with SHA-256 digests, so two reports can be compared
//! for identical inputs), per-path counts, and every skipped entry.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::lexicon::builder::{EntryFailure, Lexicon, CONSTANT_LINES};
use crate::lexicon::io::atomic_write;

/// One input file as seen by the build.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InputDigest {
    pub path: String,
    pub sha256: String,
    pub lines: usize,
}

impl InputDigest {
    /// Digest of the exact bytes the build read from `path`.
    pub fn of_bytes(path: &Path, bytes: &[u8], lines: usize) -> Self {
        Self {
            path: path.display().to_string(),
            sha256: format!("{:x}", Sha256::digest(bytes)),
            lines,
        }
    }
}

/// Summary written next to the lexicon when `--report` is given.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub words: InputDigest,
    pub transliterations: InputDigest,
    pub output: String,
    pub unambiguous: usize,
    pub ambiguous: usize,
    /// Lines in the lexicon file, constants included
    pub total_lines: usize,
    pub failures: Vec<EntryFailure>,
}

impl RunReport {
    pub fn new(
        words: InputDigest,
        transliterations: InputDigest,
        output: &Path,
        lexicon: &Lexicon,
    ) -> Self {
        Self {
            words,
            transliterations,
            output: output.display().to_string(),
            unambiguous: lexicon.unambiguous.len(),
            ambiguous: lexicon.ambiguous.len(),
            total_lines: CONSTANT_LINES.len() + lexicon.entry_count(),
            failures: lexicon.failures.clone(),
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        atomic_write(path, json.as_bytes())?;
        log::info!("Wrote run report to {}", path.display());
        Ok(())
    }
}
