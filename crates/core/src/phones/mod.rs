//! Phone-sequence segmentation.
//!
//! - `tables`: compiled-in phone classification tables
//! - `unambiguous`: greedy segmentation for strings with no ambiguous runs
//! - `locator`: split/merge decisions read from the Sinhala spelling
//! - `ambiguous`: cursor walk applying those decisions

pub mod ambiguous;
pub mod locator;
pub mod tables;
pub mod unambiguous;
