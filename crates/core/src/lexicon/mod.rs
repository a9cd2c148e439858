//! Lexicon assembly and the flat-file input/output around it.

pub mod builder;
pub mod io;
pub mod process;
