//! Pronunciation lexicon generation for Sinhala speech recognition.
//!
//! Turns a word list and its phone transliteration into a Kaldi-style
//! `lexicon.txt`, resolving ambiguous phone runs from the Sinhala spelling.

pub mod lexicon;
pub mod phones;
pub mod report;
pub mod types;
pub mod wer;
