//! JSON renderer: structured output for tooling integration.
//!
//! Serializes the module tree directly; absent optional fields are omitted.

use crate::model::Module;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, modules: &[Module]) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(modules).context("failed to serialize modules")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
