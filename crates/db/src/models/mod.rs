//! Row types read back from the document store.

pub mod document;
