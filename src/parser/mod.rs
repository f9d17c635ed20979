//! Parser module: source text to annotation records.

pub mod comments;
pub mod jsdoc;
pub mod typeexpr;

use crate::record::AnnotationRecord;
use anyhow::{anyhow, Result};
use std::path::Path;

/// File extensions scanned for documentation comments.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx", "ts", "tsx"];

/// One record per `/** */` comment, in source order.
pub fn parse_source(content: &str) -> Vec<AnnotationRecord> {
    comments::extract(content)
        .iter()
        .map(|comment| jsdoc::parse(comment))
        .collect()
}

/// Parse a source file based on its extension.
pub fn parse_file(path: &Path, content: &str) -> Result<Vec<AnnotationRecord>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext) => Ok(parse_source(content)),
        _ => Err(anyhow!("unsupported file type: {}", path.display())),
    }
}
