//! End-to-end lexicon build: read inputs, segment, write outputs.

use anyhow::{Context, Result};

use crate::report::RunReport;

use super::builder;
use super::io::{self, LexiconConfig};

/// Build the lexicon described by `config` and write it out.
///
/// Input problems abort before anything is written. Entries that fail to
/// segment are left out of the lexicon and listed in the returned report.
pub fn process(config: &LexiconConfig) -> Result<RunReport> {
    let inputs = io::read_entries(&config.words, &config.transliterations)
        .context("Cannot build lexicon")?;

    let lexicon = builder::build(&inputs.entries);
    let report = RunReport::new(inputs.words, inputs.transliterations, &config.output, &lexicon);

    io::write_lexicon(&config.output, &lexicon)?;
    if let Some(path) = &config.report {
        report.write(path)?;
    }

    log::info!("Lexicon generation complete");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn config_in(dir: &Path) -> LexiconConfig {
        LexiconConfig {
            words: dir.join("words.txt"),
            transliterations: dir.join("phones.txt"),
            output: dir.join("lexicon.txt"),
            report: None,
        }
    }

    #[test]
    fn test_process_writes_lexicon() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(&config.words, "ඟනවා\nකුමාර\n").unwrap();
        std::fs::write(&config.transliterations, "nganawa:\nkumara\n").unwrap();

        let report = process(&config).unwrap();
        assert_eq!(report.total_lines, 4);
        assert_eq!(
            std::fs::read_to_string(&config.output).unwrap(),
            "<UNK> SPN\n<SIL> SIL\nකුමාර k u m a r a\nඟනවා ng a n a w a:\n"
        );
    }

    #[test]
    fn test_report_digests_describe_segmented_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        std::fs::write(&config.words, "").unwrap();
        std::fs::write(&config.transliterations, "").unwrap();
        // overwrite the word list with the lexicon itself
        config.output = config.words.clone();

        let report = process(&config).unwrap();
        assert_eq!(
            report.words.sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(report.words.lines, 0);
        assert_eq!(
            std::fs::read_to_string(&config.words).unwrap(),
            "<UNK> SPN\n<SIL> SIL\n"
        );
    }

    #[test]
    fn test_process_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(&config.words, "කුමාර\n").unwrap();

        let err = process(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("phones.txt"));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_process_misaligned_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(&config.words, "කුමාර\nඅම\n").unwrap();
        std::fs::write(&config.transliterations, "kumara\n").unwrap();

        let err = process(&config).unwrap_err();
        let input_err = err.downcast_ref::<io::InputError>().unwrap();
        assert!(matches!(input_err, io::InputError::Alignment { words: 2, transliterations: 1 }));
        assert!(!config.output.exists());
    }
}
