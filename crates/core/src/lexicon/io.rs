//! Reading the word/transliteration lists and writing `lexicon.txt`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::report::InputDigest;
use crate::types::WordEntry;

use super::builder::Lexicon;

/// Fatal input problems. Nothing is written when one occurs.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("cannot read {}: {source}", path.display())]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8", path.display())]
    NotUtf8 { path: PathBuf },

    #[error("input files are misaligned: {words} words but {transliterations} transliterations")]
    Alignment {
        words: usize,
        transliterations: usize,
    },
}

/// Paths for one lexicon build.
#[derive(Debug, Clone)]
pub struct LexiconConfig {
    /// Sinhala word list, one word per line
    pub words: PathBuf,
    /// Transliteration list, line-aligned with `words`
    pub transliterations: PathBuf,
    /// Lexicon output file
    pub output: PathBuf,
    /// Optional JSON run report
    pub report: Option<PathBuf>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            words: PathBuf::from("words.txt"),
            transliterations: PathBuf::from("phones.txt"),
            output: PathBuf::from("lexicon.txt"),
            report: None,
        }
    }
}

/// One input list, read once: trimmed lines plus a digest of the exact bytes.
#[derive(Debug, Clone)]
pub struct InputFile {
    pub lines: Vec<String>,
    pub digest: InputDigest,
}

/// Paired entries and the digests of the files they came from.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub entries: Vec<WordEntry>,
    pub words: InputDigest,
    pub transliterations: InputDigest,
}

/// Read a UTF-8 list file as trimmed lines.
pub fn read_input(path: &Path) -> Result<InputFile, InputError> {
    let bytes = std::fs::read(path).map_err(|source| InputError::Missing {
        path: path.to_path_buf(),
        source,
    })?;
    let text = std::str::from_utf8(&bytes).map_err(|_| InputError::NotUtf8 {
        path: path.to_path_buf(),
    })?;
    let lines: Vec<String> = text.lines().map(|l| l.trim().to_string()).collect();
    let digest = InputDigest::of_bytes(path, &bytes, lines.len());
    Ok(InputFile { lines, digest })
}

/// Pair words with transliterations by line position.
pub fn pair_entries(
    words: &[String],
    transliterations: &[String],
) -> Result<Vec<WordEntry>, InputError> {
    if words.len() != transliterations.len() {
        return Err(InputError::Alignment {
            words: words.len(),
            transliterations: transliterations.len(),
        });
    }
    Ok(words
        .iter()
        .zip(transliterations)
        .enumerate()
        .map(|(i, (w, t))| WordEntry::new(w, t, i + 1))
        .collect())
}

/// Read both input files and pair them. Both are read before pairing.
pub fn read_entries(words: &Path, transliterations: &Path) -> Result<Inputs, InputError> {
    log::info!("Reading {}", words.display());
    let words = read_input(words)?;
    log::info!("Reading {}", transliterations.display());
    let transliterations = read_input(transliterations)?;
    let entries = pair_entries(&words.lines, &transliterations.lines)?;
    Ok(Inputs {
        entries,
        words: words.digest,
        transliterations: transliterations.digest,
    })
}

/// Write data to `target` via a temp file and rename.
pub fn atomic_write(target: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = target.with_extension("tmp");
    std::fs::write(&tmp_path, data)
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    std::fs::rename(&tmp_path, target)
        .with_context(|| format!("Failed to move output into {}", target.display()))?;
    Ok(())
}

/// Write the rendered lexicon to `path`.
pub fn write_lexicon(path: &Path, lexicon: &Lexicon) -> Result<()> {
    log::info!("Writing result to {}", path.display());
    atomic_write(path, lexicon.render().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::builder::build;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pair_entries_by_line() {
        let entries =
            pair_entries(&strings(&["ඟනවා", "කුමාර"]), &strings(&["nganawa:", "kumara"])).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], WordEntry::new("කුමාර", "kumara", 2));
    }

    #[test]
    fn test_pair_entries_misaligned() {
        let err = pair_entries(&strings(&["a", "b"]), &strings(&["a"])).unwrap_err();
        assert!(matches!(
            err,
            InputError::Alignment { words: 2, transliterations: 1 }
        ));
    }

    #[test]
    fn test_read_input_trims() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "  කුමාර \r\nඅම\n").unwrap();
        let input = read_input(&path).unwrap();
        assert_eq!(input.lines, vec!["කුමාර", "අම"]);
        assert_eq!(input.digest.lines, 2);
    }

    #[test]
    fn test_read_input_digests_bytes_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "").unwrap();
        let input = read_input(&path).unwrap();

        // later changes to the file do not affect what was read
        std::fs::write(&path, "<UNK> SPN\n").unwrap();
        assert_eq!(
            input.digest.sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_read_input_not_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phones.txt");
        std::fs::write(&path, [0xff, 0xfe, b'a']).unwrap();
        let err = read_input(&path).unwrap_err();
        assert!(matches!(err, InputError::NotUtf8 { .. }));
    }

    #[test]
    fn test_read_entries_carries_digests() {
        let dir = tempfile::tempdir().unwrap();
        let words = dir.path().join("words.txt");
        let phones = dir.path().join("phones.txt");
        std::fs::write(&words, "කුමාර\n").unwrap();
        std::fs::write(&phones, "kumara\n").unwrap();

        let inputs = read_entries(&words, &phones).unwrap();
        assert_eq!(inputs.entries, vec![WordEntry::new("කුමාර", "kumara", 1)]);
        assert_eq!(inputs.words.lines, 1);
        assert_ne!(inputs.words.sha256, inputs.transliterations.sha256);
    }

    #[test]
    fn test_read_input_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, InputError::Missing { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_atomic_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("lexicon.txt");
        atomic_write(&path, b"<UNK> SPN\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<UNK> SPN\n");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_write_lexicon_matches_render() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.txt");
        let lexicon = build(&[WordEntry::new("අම", "ama:", 1)]);
        write_lexicon(&path, &lexicon).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), lexicon.render());
    }

    #[test]
    fn test_default_config_paths() {
        let config = LexiconConfig::default();
        assert_eq!(config.words, PathBuf::from("words.txt"));
        assert_eq!(config.transliterations, PathBuf::from("phones.txt"));
        assert_eq!(config.output, PathBuf::from("lexicon.txt"));
        assert!(config.report.is_none());
    }
}
