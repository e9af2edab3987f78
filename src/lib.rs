//! visualgen: generate Visual Studio project files from a directory tree
//!
//! Scans a directory, classifies files into compiled sources and headers by
//! extension, derives the folder ("filter") hierarchy, and writes a `.vcxproj`
//! plus its `.vcxproj.filters`. In merge mode the file lists inside an existing
//! project manifest are replaced while everything else in it is kept.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod generate;
pub mod merge;
pub mod plan;
pub mod render;
pub mod scan;
pub mod utils;

pub use error::{GenError, Result};
pub use generate::{generate, GenerationReport, GenerationRequest};
