//! Utility functions

pub mod encoding;
pub mod paths;

pub use encoding::{read_manifest_text, DecodedText};
pub use paths::to_canonical_separators;
