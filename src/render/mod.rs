//! Renderer module: trait-based format dispatch.

pub mod json;
pub mod markdown;
pub mod toc;

use crate::model::Module;
use anyhow::{anyhow, Result};

/// Trait for rendering a module tree into a specific output format.
pub trait Renderer {
    fn render(&self, modules: &[Module]) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "json" => Ok(Box::new(json::JsonRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use json or markdown", format)),
    }
}
